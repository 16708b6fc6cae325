use crate::models::chart::{ChartData, ChartValues, PieSlice};
use crate::models::response::DashboardDataResponse;
use crate::models::shapes::*;

const COLOR_PRIMARY: &str = "#409EFF";
const COLOR_SUCCESS: &str = "#67C23A";
const COLOR_WARNING: &str = "#E6A23C";
const COLOR_DANGER: &str = "#F56C6C";
const COLOR_INFO: &str = "#909399";

/// Statistic types that have a slice in the event chart.
const CHART_EVENT_TYPES: [&str; 4] = ["Normal", "Warning", "Critical", "Info"];
const FIXTURE_SUFFIX: &str = " (Mock)";

pub fn namespaces() -> Vec<String> {
    ["default", "kube-system", "monitoring", "logging", "dev", "prod"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn health(label: &str, value: &str, color: &str) -> HealthStatusItem {
    HealthStatusItem {
        label: label.to_string(),
        value: value.to_string(),
        color: color.to_string(),
    }
}

pub fn health_status() -> Vec<HealthStatusItem> {
    vec![
        health("集群状态", "健康 (Mock)", COLOR_SUCCESS),
        health("节点在线", "4/5 (Mock)", COLOR_WARNING),
        health("Pod运行", "148/180 (Mock)", COLOR_PRIMARY),
        health("警报", "3 (Mock)", COLOR_DANGER),
    ]
}

fn alert(label: &str, count: u32, color: &str, trend: i32) -> AlertSummaryItem {
    AlertSummaryItem {
        label: label.to_string(),
        count,
        color: color.to_string(),
        trend,
    }
}

pub fn alert_summary() -> Vec<AlertSummaryItem> {
    vec![
        alert("严重警报 (Mock)", 1, COLOR_DANGER, 12),
        alert("警告 (Mock)", 3, COLOR_WARNING, -5),
        alert("通知 (Mock)", 8, COLOR_INFO, 3),
    ]
}

fn overview(
    title: &str,
    value: &str,
    percent: f64,
    total: &str,
    icon: &str,
    color: &str,
) -> OverviewDataItem {
    OverviewDataItem {
        title: title.to_string(),
        value: value.to_string(),
        percent,
        total: Some(OverviewTotal::Text(total.to_string())),
        icon: icon.to_string(),
        color: color.to_string(),
    }
}

pub fn overview_data() -> Vec<OverviewDataItem> {
    vec![
        overview("集群节点 (Mock)", "5", 95.0, "", "DataBoardIcon", COLOR_PRIMARY),
        overview("命名空间 (Mock)", "6", 75.0, "8", "CollectionIcon", COLOR_SUCCESS),
        overview("运行Pods (Mock)", "148", 82.0, "180", "BoxIcon", COLOR_WARNING),
        overview("服务数量 (Mock)", "23", 65.0, "35", "ConnectionIcon", COLOR_DANGER),
    ]
}

fn labels(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn series(values: &[u32]) -> Vec<f64> {
    values.iter().map(|&v| f64::from(v)).collect()
}

const NODE_LABELS: [&str; 5] = ["Master-1 M", "Node-1 M", "Node-2 M", "Node-3 M", "Node-4 M"];

pub fn cpu_usage_chart() -> ChartData {
    ChartData {
        labels: labels(&NODE_LABELS),
        values: ChartValues::Single(series(&[65, 45, 30, 85, 60])),
    }
}

/// Stacked rows: used, cached, available (GB).
pub fn memory_usage_chart() -> ChartData {
    ChartData {
        labels: labels(&NODE_LABELS),
        values: ChartValues::Multi(vec![
            series(&[6, 10, 8, 15, 12]),
            series(&[3, 4, 2, 5, 3]),
            series(&[15, 10, 14, 4, 9]),
        ]),
    }
}

/// Stacked rows: used, total (GB).
pub fn storage_usage_chart() -> ChartData {
    ChartData {
        labels: labels(&NODE_LABELS),
        values: ChartValues::Multi(vec![
            series(&[120, 80, 90, 150, 100]),
            series(&[200, 200, 200, 200, 200]),
        ]),
    }
}

/// Stacked rows: inbound, outbound (Mbps).
pub fn network_usage_chart() -> ChartData {
    ChartData {
        labels: labels(&[
            "08:00 M", "10:00 M", "12:00 M", "14:00 M", "16:00 M", "18:00 M", "20:00 M",
        ]),
        values: ChartValues::Multi(vec![
            series(&[120, 200, 150, 180, 210, 190, 230]),
            series(&[100, 170, 130, 150, 180, 160, 190]),
        ]),
    }
}

#[allow(clippy::too_many_arguments)]
fn node(
    name: &str,
    role: NodeRole,
    status: NodeStatus,
    cpu_usage: f64,
    memory_usage: f64,
    total_pods: u32,
    running_pods: u32,
    is_new: bool,
) -> NodeData {
    NodeData {
        name: name.to_string(),
        role,
        status,
        cpu_usage,
        memory_usage,
        total_pods,
        running_pods,
        is_new: Some(is_new),
    }
}

pub fn nodes() -> Vec<NodeData> {
    use NodeRole::*;
    use NodeStatus::*;
    vec![
        node("master-1-mock", Master, Ready, 65.0, 75.0, 64, 60, false),
        node("node-1-mock", Worker, Ready, 45.0, 60.0, 128, 110, true),
        node("node-2-mock", Worker, Ready, 30.0, 55.0, 128, 98, false),
        node("node-3-mock", Worker, NotReady, 85.0, 90.0, 128, 128, false),
        node("node-4-mock", Worker, Ready, 60.0, 65.0, 128, 105, false),
    ]
}

pub fn recent_events() -> Vec<EventItem> {
    vec![
        EventItem {
            timestamp: "2023-10-15T09:23:17Z".to_string(),
            event_type: EventType::Warning,
            object: "pod/nginx-mock-58xj7".to_string(),
            namespace: "default".to_string(),
            reason: "FailedScheduling".to_string(),
            message: "Mock: 0/4 nodes available: 3 Insufficient cpu, 1 Insufficient memory."
                .to_string(),
        },
        EventItem {
            timestamp: "2023-10-15T09:20:45Z".to_string(),
            event_type: EventType::Normal,
            object: "deployment/nginx-mock".to_string(),
            namespace: "default".to_string(),
            reason: "ScalingReplicaSet".to_string(),
            message: "Mock: Scaled up replica set nginx-deployment-75675f5897 to 1".to_string(),
        },
    ]
}

pub fn event_statistics() -> Vec<EventStatisticItem> {
    vec![
        EventStatisticItem {
            event_type: "Normal (Mock)".to_string(),
            count: 42,
            percentage: 70.0,
            trend: Trend::Up,
        },
        EventStatisticItem {
            event_type: "Warning (Mock)".to_string(),
            count: 18,
            percentage: 30.0,
            trend: Trend::Down,
        },
    ]
}

fn is_chart_event_type(t: &str) -> bool {
    let base = t.strip_suffix(FIXTURE_SUFFIX).unwrap_or(t);
    CHART_EVENT_TYPES.contains(&base)
}

fn event_color(t: &str) -> &'static str {
    // Later matches take precedence.
    let mut color = COLOR_INFO;
    if t.contains("Normal") {
        color = COLOR_SUCCESS;
    }
    if t.contains("Warning") {
        color = COLOR_WARNING;
    }
    if t.contains("Critical") {
        color = COLOR_DANGER;
    }
    color
}

/// Turns event statistics into pie slices. Critical and Info slices are
/// filled with placeholders when the statistics carry none.
pub fn event_statistics_chart(stats: &[EventStatisticItem]) -> Vec<PieSlice> {
    let mut slices: Vec<PieSlice> = stats
        .iter()
        .filter(|s| is_chart_event_type(&s.event_type))
        .map(|s| {
            PieSlice::new(
                s.count,
                format!("{} ({}%)", s.event_type, s.percentage),
                event_color(&s.event_type),
            )
        })
        .collect();

    if !slices.iter().any(|p| p.name.contains("Critical")) {
        slices.push(PieSlice::new(5, "严重事件 (10%) (Mock)", COLOR_DANGER));
    }
    if !slices.iter().any(|p| p.name.contains("Info")) {
        slices.push(PieSlice::new(10, "通知事件 (20%) (Mock)", COLOR_INFO));
    }

    slices
}

pub fn resource_alerts() -> Vec<ResourceAlertItem> {
    vec![
        ResourceAlertItem {
            name: "node-3 CPU过载 (Mock)".to_string(),
            message: "Mock: 节点node-3 CPU使用率达85%，超过阈值80%".to_string(),
            level: AlertLevel::Critical,
            level_text: "严重".to_string(),
            time: "5分钟前".to_string(),
        },
        ResourceAlertItem {
            name: "node-3 内存不足 (Mock)".to_string(),
            message: "Mock: 节点node-3 内存使用率达90%，超过阈值85%".to_string(),
            level: AlertLevel::Warning,
            level_text: "警告".to_string(),
            time: "10分钟前".to_string(),
        },
    ]
}

pub fn dashboard_data() -> DashboardDataResponse {
    DashboardDataResponse {
        namespaces: namespaces(),
        health_status: health_status(),
        alert_summary: alert_summary(),
        overview_data: overview_data(),
        cpu_usage_data: cpu_usage_chart(),
        memory_usage_data: memory_usage_chart(),
        storage_usage_data: storage_usage_chart(),
        network_usage_data: network_usage_chart(),
        nodes: nodes(),
        recent_events: recent_events(),
        event_statistics: event_statistics(),
        resource_alerts: resource_alerts(),
    }
}
