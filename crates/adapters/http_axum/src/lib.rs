//! # croptrack-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve a **JSON API** with one create and one list route per resource
//!   (`/fields`, `/sowings`, `/harvest`)
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results into HTTP responses, errors as `{"error": "…"}`
//!
//! ## Dependency rule
//! Depends on `croptrack-app` (for port traits and services) and `croptrack-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
