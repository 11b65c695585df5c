use axum::routing::{get, post};
use axum::Router;

use backend_application::AppState;

use crate::handlers::{auth_handlers, map_handlers, ops_handlers, scan_handlers};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(map_handlers::map_view))
        .route("/login", post(auth_handlers::login))
        .route("/api/scan", post(scan_handlers::save_scan))
        .route("/api/scans", get(scan_handlers::list_scans))
        .route("/ops/health/live", get(ops_handlers::health_live))
        .route("/ops/health/ready", get(ops_handlers::health_ready))
        .route(
            "/ops/metrics/prometheus",
            get(ops_handlers::metrics_prometheus),
        )
        .with_state(state)
}
