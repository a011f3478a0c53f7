//! # croptrack-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `FieldRepository` — append, list and existence checks for fields
//!   - `SowingRepository` — append and list sowings
//!   - `HarvestRepository` — append and list harvests
//! - Define **driving/inbound ports** as use-case structs:
//!   - `FieldService` — create, list
//!   - `SowingService` — create (with field existence check), list
//!   - `HarvestService` — create (with field existence check), list
//! - Orchestrate domain objects without knowing *how* persistence works
//!
//! ## Dependency rule
//! Depends on `croptrack-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
