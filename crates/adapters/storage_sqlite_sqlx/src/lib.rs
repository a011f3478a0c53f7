//! # croptrack-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the repository port traits defined in `croptrack-app::ports::storage`
//! - Manage `SQLite` connection pool lifecycle
//! - Create the `fields`, `sowings` and `harvests` tables when absent
//! - Map between domain types and database rows
//!
//! ## Dependency rule
//! Depends on `croptrack-app` (for port traits) and `croptrack-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod error;
mod field_repo;
mod harvest_repo;
mod pool;
mod sowing_repo;

pub use error::StorageError;
pub use field_repo::SqliteFieldRepository;
pub use harvest_repo::SqliteHarvestRepository;
pub use pool::{Config, Database};
pub use sowing_repo::SqliteSowingRepository;
