use axum::Router;
use axum_helpers::server::{create_production_app, create_router, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use std::time::Duration;
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    info!(path = %config.data.path.display(), "Serving catalog document");

    let state = AppState::new(config);

    let watcher = state
        .config
        .data
        .stats_watch_interval
        .map(|interval| {
            info!(?interval, "Stats watcher enabled");
            state.stats.spawn_watcher(interval)
        });

    let app = build_app(&state)?;

    info!("Starting Catalog API with graceful shutdown (30s timeout)");

    create_production_app(
        app,
        &state.config.server,
        Duration::from_secs(30),
        async move {
            if let Some(watcher) = watcher {
                watcher.abort();
                info!("Stats watcher stopped");
            }
        },
    )
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Catalog API shutdown complete");
    Ok(())
}

/// API routes under `/api`, docs, plus `/health` and `/ready` at the root.
fn build_app(state: &AppState) -> std::io::Result<Router> {
    let api_routes = api::routes(state);
    let router = create_router::<openapi::ApiDoc>(api_routes, &state.config.server)?;

    Ok(router
        .merge(health_router(state.config.app))
        .merge(api::health::router(state.clone())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use crate::config::{Config, Environment};
    use core_config::{app_info, data::DataConfig, server::ServerConfig};
    use http_body_util::BodyExt;
    use serde_json::Value;
    use test_utils::{SAMPLE_SIZE, TestCatalog};
    use tower::ServiceExt;

    fn test_state(catalog: &TestCatalog) -> AppState {
        AppState::new(Config {
            app: app_info!(),
            data: DataConfig::new(catalog.path()),
            server: ServerConfig::default(),
            environment: Environment::Development,
        })
    }

    async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
        let response = app
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_items_and_stats_are_mounted_under_api() {
        let catalog = TestCatalog::new();
        let app = build_app(&test_state(&catalog)).unwrap();

        let (status, items) = get(app.clone(), "/api/items?limit=3").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(items["items"].as_array().unwrap().len(), 3);

        let (status, stats) = get(app, "/api/stats").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(stats["total"], SAMPLE_SIZE);
    }

    #[tokio::test]
    async fn test_health_reports_package() {
        let catalog = TestCatalog::new();
        let (status, body) = get(build_app(&test_state(&catalog)).unwrap(), "/health").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["name"], "catalog_api");
    }

    #[tokio::test]
    async fn test_openapi_lists_catalog_paths() {
        let catalog = TestCatalog::new();
        let (status, doc) = get(
            build_app(&test_state(&catalog)).unwrap(),
            "/api-docs/openapi.json",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let paths = doc["paths"].as_object().unwrap();
        assert!(paths.contains_key("/api/items"));
        assert!(paths.contains_key("/api/items/{id}"));
        assert!(paths.contains_key("/api/stats"));
    }

    #[tokio::test]
    async fn test_unknown_route_is_json_404() {
        let catalog = TestCatalog::new();
        let (status, body) = get(build_app(&test_state(&catalog)).unwrap(), "/nowhere").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "NOT_FOUND");
    }
}
