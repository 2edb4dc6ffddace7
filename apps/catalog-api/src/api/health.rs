//! Readiness endpoint

use axum::{Router, extract::State, response::Response, routing::get};
use axum_helpers::{HealthCheckFuture, run_health_checks};
use domain_items::ItemStore;

use crate::state::AppState;

/// `/ready`, mounted at the root next to `/health`.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/ready", get(readiness_check))
        .with_state(state)
}

/// Ready when the catalog document can be read and decoded.
async fn readiness_check(State(state): State<AppState>) -> Response {
    let store = state.store.clone();
    let checks: Vec<(&str, HealthCheckFuture<'_>)> = vec![(
        "catalog",
        Box::pin(async move {
            store
                .load_all()
                .await
                .map(|_| ())
                .map_err(|e| e.to_string())
        }),
    )];

    run_health_checks(checks).await
}
