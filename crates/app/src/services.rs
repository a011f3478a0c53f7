//! Application services — use-case implementations.
//!
//! Each service struct accepts port trait implementations via generic parameters
//! (constructor injection), keeping this layer decoupled from concrete adapters.

pub mod field_service;
pub mod harvest_service;
pub mod sowing_service;

#[cfg(test)]
pub(crate) mod memory;
