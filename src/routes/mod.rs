pub mod api;
pub mod icons;
pub mod ui;

use axum::{
    Router,
    routing::get,
};
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use crate::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Dashboard data
        .route("/api/v1/dashboard", get(api::handle_dashboard))
        .route("/api/v1/dashboard/namespaces", get(api::handle_namespaces))
        .route("/api/v1/dashboard/health", get(api::handle_health_status))
        .route("/api/v1/dashboard/alerts", get(api::handle_alert_summary))
        .route("/api/v1/dashboard/overview", get(api::handle_overview))
        .route("/api/v1/dashboard/charts/{chart}", get(api::handle_chart))
        .route("/api/v1/dashboard/nodes", get(api::handle_nodes))
        .route("/api/v1/dashboard/events", get(api::handle_events))
        .route(
            "/api/v1/dashboard/events/statistics",
            get(api::handle_event_statistics),
        )
        .route("/api/v1/dashboard/events/chart", get(api::handle_event_chart))
        .route(
            "/api/v1/dashboard/resource-alerts",
            get(api::handle_resource_alerts),
        )
        // Notification lists
        .route("/api/v1/notifications/{kind}", get(api::handle_list))
        // Health
        .route("/healthz", get(api::handle_healthz))
        // Dashboard UI
        .route("/ui/", get(ui::handle_dashboard))
        // Root redirect
        .route(
            "/",
            get(|| async {
                axum::response::Redirect::to("/ui/")
            }),
        )
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
