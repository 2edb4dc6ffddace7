use axum::Router;
use domain_items::handlers;

use crate::state::AppState;

pub fn router(state: &AppState) -> Router {
    handlers::stats_router(state.stats.clone())
}
