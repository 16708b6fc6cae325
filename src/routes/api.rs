use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::AppState;
use crate::fixtures;
use crate::models::response::{ApiResponse, ChartKind, DashboardDataResponse, ListKind};

fn ok<T: Serialize>(data: T) -> Response {
    Json(ApiResponse::success(StatusCode::OK.as_u16(), data)).into_response()
}

fn fail(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ApiResponse::<()>::error(status.as_u16(), message)),
    )
        .into_response()
}

async fn dashboard_section<T: Serialize>(
    state: &AppState,
    pick: impl FnOnce(DashboardDataResponse) -> T,
) -> Response {
    match state.source.dashboard().await {
        Ok(data) => ok(pick(data)),
        Err(e) => fail(StatusCode::BAD_GATEWAY, e.to_string()),
    }
}

pub async fn handle_dashboard(State(state): State<AppState>) -> Response {
    dashboard_section(&state, |d| d).await
}

pub async fn handle_namespaces(State(state): State<AppState>) -> Response {
    dashboard_section(&state, |d| d.namespaces).await
}

pub async fn handle_health_status(State(state): State<AppState>) -> Response {
    dashboard_section(&state, |d| d.health_status).await
}

pub async fn handle_alert_summary(State(state): State<AppState>) -> Response {
    dashboard_section(&state, |d| d.alert_summary).await
}

pub async fn handle_overview(State(state): State<AppState>) -> Response {
    dashboard_section(&state, |d| d.overview_data).await
}

pub async fn handle_chart(
    State(state): State<AppState>,
    Path(chart): Path<String>,
) -> Response {
    let Some(kind) = ChartKind::parse(&chart) else {
        return fail(StatusCode::NOT_FOUND, format!("unknown chart {:?}", chart));
    };
    dashboard_section(&state, |d| d.chart(kind).clone()).await
}

pub async fn handle_nodes(State(state): State<AppState>) -> Response {
    dashboard_section(&state, |d| d.nodes).await
}

pub async fn handle_events(State(state): State<AppState>) -> Response {
    dashboard_section(&state, |d| d.recent_events).await
}

pub async fn handle_event_statistics(State(state): State<AppState>) -> Response {
    dashboard_section(&state, |d| d.event_statistics).await
}

pub async fn handle_event_chart(State(state): State<AppState>) -> Response {
    dashboard_section(&state, |d| {
        fixtures::event_statistics_chart(&d.event_statistics)
    })
    .await
}

pub async fn handle_resource_alerts(State(state): State<AppState>) -> Response {
    dashboard_section(&state, |d| d.resource_alerts).await
}

pub async fn handle_list(
    State(state): State<AppState>,
    Path(kind): Path<String>,
) -> Response {
    let Some(list_kind) = ListKind::parse(&kind) else {
        return fail(StatusCode::NOT_FOUND, format!("unknown list {:?}", kind));
    };
    match state.source.list(list_kind).await {
        Ok(items) => ok(items),
        Err(e) => fail(StatusCode::BAD_GATEWAY, e.to_string()),
    }
}

pub async fn handle_healthz() -> &'static str {
    "ok\n"
}
