//! JSON API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod fields;
#[allow(clippy::missing_errors_doc)]
pub mod harvests;
#[allow(clippy::missing_errors_doc)]
pub mod sowings;

use axum::Router;
use axum::routing::get;

use croptrack_app::ports::{FieldRepository, HarvestRepository, SowingRepository};

use crate::state::AppState;

/// Build the resource routes. Paths are served at the root.
pub fn routes<FR, SR, HR>() -> Router<AppState<FR, SR, HR>>
where
    FR: FieldRepository + Send + Sync + 'static,
    SR: SowingRepository + Send + Sync + 'static,
    HR: HarvestRepository + Send + Sync + 'static,
{
    Router::new()
        .route(
            "/fields",
            get(fields::list::<FR, SR, HR>).post(fields::create::<FR, SR, HR>),
        )
        .route(
            "/sowings",
            get(sowings::list::<FR, SR, HR>).post(sowings::create::<FR, SR, HR>),
        )
        .route(
            "/harvest",
            get(harvests::list::<FR, SR, HR>).post(harvests::create::<FR, SR, HR>),
        )
}
