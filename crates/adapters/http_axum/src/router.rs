//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use croptrack_app::ports::{FieldRepository, HarvestRepository, SowingRepository};

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Merges the resource routes with a `/health` probe.
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
pub fn build<FR, SR, HR>(state: AppState<FR, SR, HR>) -> Router
where
    FR: FieldRepository + Send + Sync + 'static,
    SR: SowingRepository + Send + Sync + 'static,
    HR: HarvestRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .merge(crate::api::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
