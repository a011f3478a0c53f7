//! # croptrack-domain
//!
//! Pure domain model for the croptrack field inventory system.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions
//! - Define **Fields** (land parcels with an area and a region)
//! - Define **Sowings** (a crop planted on a field at some date)
//! - Define **Harvests** (a yield recorded for a crop on a field)
//! - Contain all shape validation rules for the three records
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;

pub mod field;
pub mod harvest;
pub mod sowing;
