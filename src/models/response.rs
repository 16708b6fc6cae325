use chrono::DateTime;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::ShapeError;

use super::chart::ChartData;
use super::shapes::*;

/// Everything the dashboard page needs in one payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardDataResponse {
    pub namespaces: Vec<String>,
    pub health_status: Vec<HealthStatusItem>,
    pub alert_summary: Vec<AlertSummaryItem>,
    pub overview_data: Vec<OverviewDataItem>,
    pub cpu_usage_data: ChartData,
    pub memory_usage_data: ChartData,
    pub storage_usage_data: ChartData,
    pub network_usage_data: ChartData,
    pub nodes: Vec<NodeData>,
    pub recent_events: Vec<EventItem>,
    pub event_statistics: Vec<EventStatisticItem>,
    pub resource_alerts: Vec<ResourceAlertItem>,
}

impl DashboardDataResponse {
    /// Checks the invariants the types alone cannot express.
    pub fn validate(&self) -> Result<(), ShapeError> {
        for item in &self.overview_data {
            check_percent(&format!("overview {:?} percent", item.title), item.percent)?;
        }

        for node in &self.nodes {
            check_percent(&format!("node {} cpuUsage", node.name), node.cpu_usage)?;
            check_percent(&format!("node {} memoryUsage", node.name), node.memory_usage)?;
            if node.running_pods > node.total_pods {
                warn!(
                    "node {} reports {} running pods of {} total",
                    node.name, node.running_pods, node.total_pods
                );
            }
        }

        for event in &self.recent_events {
            DateTime::parse_from_rfc3339(&event.timestamp).map_err(|source| {
                ShapeError::InvalidTimestamp {
                    timestamp: event.timestamp.clone(),
                    source,
                }
            })?;
        }

        for stat in &self.event_statistics {
            check_percent(&format!("statistic {:?} percentage", stat.event_type), stat.percentage)?;
        }

        check_series("cpu", &self.cpu_usage_data)?;
        check_series("memory", &self.memory_usage_data)?;
        check_series("storage", &self.storage_usage_data)?;
        check_series("network", &self.network_usage_data)?;

        Ok(())
    }

    pub fn chart(&self, kind: ChartKind) -> &ChartData {
        match kind {
            ChartKind::Cpu => &self.cpu_usage_data,
            ChartKind::Memory => &self.memory_usage_data,
            ChartKind::Storage => &self.storage_usage_data,
            ChartKind::Network => &self.network_usage_data,
        }
    }
}

fn check_percent(field: &str, value: f64) -> Result<(), ShapeError> {
    // NaN fails the range check too.
    if !(0.0..=100.0).contains(&value) {
        return Err(ShapeError::PercentOutOfRange {
            field: field.to_string(),
            value,
        });
    }
    Ok(())
}

fn check_series(chart: &'static str, data: &ChartData) -> Result<(), ShapeError> {
    for series in data.values.series() {
        if series.len() != data.labels.len() {
            return Err(ShapeError::SeriesLength {
                chart,
                expected: data.labels.len(),
                actual: series.len(),
            });
        }
        if let Some(&value) = series.iter().find(|v| !v.is_finite() || **v < 0.0) {
            return Err(ShapeError::InvalidChartValue { chart, value });
        }
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Cpu,
    Memory,
    Storage,
    Network,
}

impl ChartKind {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "cpu" => Some(ChartKind::Cpu),
            "memory" => Some(ChartKind::Memory),
            "storage" => Some(ChartKind::Storage),
            "network" => Some(ChartKind::Network),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Notify,
    Messages,
    Todos,
}

impl ListKind {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "notify" => Some(ListKind::Notify),
            "messages" => Some(ListKind::Messages),
            "todos" => Some(ListKind::Todos),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ListKind::Notify => "notify",
            ListKind::Messages => "messages",
            ListKind::Todos => "todos",
        }
    }
}

/// Envelope shared with the backend API: `data` on success, `message` on error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub message: String,
}

impl<T> ApiResponse<T> {
    pub fn success(code: u16, data: T) -> Self {
        Self {
            code,
            data: Some(data),
            message: String::new(),
        }
    }

    pub fn error(code: u16, message: impl Into<String>) -> Self {
        Self {
            code,
            data: None,
            message: message.into(),
        }
    }
}
