use askama::Template;
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::AppState;
use crate::fixtures;
use crate::helpers::{
    alert_level_class, event_time, event_type_class, human_time, node_status_class, trend_text,
};
use crate::models::chart::{ChartData, PieSlice};
use crate::models::response::{DashboardDataResponse, ListKind};
use crate::models::shapes::{ListItem, ListItemStatus, OverviewTotal};
use crate::models::views::*;

use super::icons::IconRegistry;

#[derive(Template)]
#[template(path = "dashboard.html")]
struct DashboardTemplate {
    title: String,
    cluster_name: String,
    source: SourceView,
    namespaces: Vec<String>,
    health: Vec<HealthView>,
    alerts: Vec<AlertSummaryView>,
    cards: Vec<OverviewCardView>,
    charts: Vec<ChartView>,
    nodes: Vec<NodeView>,
    events: Vec<EventView>,
    slices: Vec<SliceView>,
    resource_alerts: Vec<ResourceAlertView>,
    notifications: Vec<ListItemView>,
    todos: Vec<ListItemView>,
}

fn render_template(tmpl: &impl Template) -> Response {
    match tmpl.render() {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            tracing::error!("template error: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
        }
    }
}

pub async fn handle_dashboard(State(state): State<AppState>) -> Response {
    let data = match state.source.dashboard().await {
        Ok(data) => data,
        Err(e) => return (StatusCode::BAD_GATEWAY, e.to_string()).into_response(),
    };

    // Lists are secondary; an unavailable list renders empty.
    let notifications = state
        .source
        .list(ListKind::Notify)
        .await
        .unwrap_or_default();
    let todos = state.source.list(ListKind::Todos).await.unwrap_or_default();

    let status = state.source.status();
    let source = SourceView {
        mode: status.mode.to_string(),
        address: status.address,
        healthy: status.healthy,
        last_ping: human_time(status.last_ping),
    };

    let tmpl = build_dashboard(
        &state.config.cluster_name,
        &state.icons,
        source,
        data,
        &notifications,
        &todos,
    );
    render_template(&tmpl)
}

fn build_dashboard(
    cluster_name: &str,
    icons: &IconRegistry,
    source: SourceView,
    data: DashboardDataResponse,
    notifications: &[ListItem],
    todos: &[ListItem],
) -> DashboardTemplate {
    let slices = fixtures::event_statistics_chart(&data.event_statistics);

    DashboardTemplate {
        title: "Dashboard".to_string(),
        cluster_name: cluster_name.to_string(),
        source,
        health: data
            .health_status
            .iter()
            .map(|h| HealthView {
                label: h.label.clone(),
                value: h.value.clone(),
                color: h.color.clone(),
            })
            .collect(),
        alerts: data
            .alert_summary
            .iter()
            .map(|a| AlertSummaryView {
                label: a.label.clone(),
                count: a.count,
                color: a.color.clone(),
                trend: trend_text(a.trend),
            })
            .collect(),
        cards: data
            .overview_data
            .iter()
            .map(|o| {
                let glyph = icons.resolve(&o.icon);
                OverviewCardView {
                    title: o.title.clone(),
                    value: o.value.clone(),
                    total: match &o.total {
                        Some(OverviewTotal::Count(n)) => n.to_string(),
                        Some(OverviewTotal::Text(s)) => s.clone(),
                        None => String::new(),
                    },
                    percent: o.percent,
                    color: o.color.clone(),
                    glyph: glyph.symbol.to_string(),
                    glyph_name: glyph.name.to_string(),
                }
            })
            .collect(),
        charts: vec![
            build_chart_view("CPU", &data.cpu_usage_data),
            build_chart_view("Memory (GB)", &data.memory_usage_data),
            build_chart_view("Storage (GB)", &data.storage_usage_data),
            build_chart_view("Network (Mbps)", &data.network_usage_data),
        ],
        nodes: data
            .nodes
            .iter()
            .map(|n| NodeView {
                name: n.name.clone(),
                role: n.role.as_str().to_string(),
                status: n.status.as_str().to_string(),
                status_class: node_status_class(&n.status).to_string(),
                cpu: n.cpu_usage,
                memory: n.memory_usage,
                pods: format!("{}/{}", n.running_pods, n.total_pods),
                is_new: n.is_new.unwrap_or(false),
            })
            .collect(),
        events: data
            .recent_events
            .iter()
            .map(|e| EventView {
                time: event_time(&e.timestamp),
                event_type: e.event_type.as_str().to_string(),
                type_class: event_type_class(&e.event_type).to_string(),
                object: e.object.clone(),
                namespace: e.namespace.clone(),
                reason: e.reason.clone(),
                message: e.message.clone(),
            })
            .collect(),
        slices: build_slice_views(&slices),
        resource_alerts: data
            .resource_alerts
            .iter()
            .map(|a| ResourceAlertView {
                name: a.name.clone(),
                message: a.message.clone(),
                level_text: a.level_text.clone(),
                level_class: alert_level_class(&a.level).to_string(),
                time: a.time.clone(),
            })
            .collect(),
        namespaces: data.namespaces,
        notifications: notifications.iter().map(build_list_item_view).collect(),
        todos: todos.iter().map(build_list_item_view).collect(),
    }
}

fn build_chart_view(title: &str, chart: &ChartData) -> ChartView {
    let series = chart.values.series();
    let rows = chart
        .labels
        .iter()
        .enumerate()
        .map(|(i, label)| ChartRowView {
            label: label.clone(),
            values: series
                .iter()
                .filter_map(|s| s.get(i))
                .map(|v| v.to_string())
                .collect::<Vec<_>>()
                .join(" / "),
        })
        .collect();

    ChartView {
        title: title.to_string(),
        rows,
    }
}

fn build_slice_views(slices: &[PieSlice]) -> Vec<SliceView> {
    // Widened so backend-sized counts cannot overflow.
    let total: u128 = slices.iter().map(|s| u128::from(s.value)).sum();
    slices
        .iter()
        .map(|s| SliceView {
            name: s.name.clone(),
            value: s.value,
            color: s.item_style.color.clone(),
            share: if total == 0 {
                0
            } else {
                (u128::from(s.value) * 100 / total) as u64
            },
        })
        .collect()
}

fn build_list_item_view(item: &ListItem) -> ListItemView {
    ListItemView {
        title: item.title.clone(),
        description: item.description.clone().unwrap_or_default(),
        datetime: item.datetime.clone().unwrap_or_default(),
        extra: item.extra.clone().unwrap_or_default(),
        status_class: match item.status {
            Some(ListItemStatus::Success) => "badge-success",
            Some(ListItemStatus::Warning) => "badge-warning",
            Some(ListItemStatus::Danger) => "badge-error",
            Some(ListItemStatus::Primary) => "badge-primary",
            Some(ListItemStatus::Info) | None => "badge-info",
        }
        .to_string(),
    }
}
