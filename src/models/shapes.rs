use serde::{Deserialize, Serialize};

// Display records for the dashboard views. Field names serialize to the
// camelCase JSON the frontend binds to.

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatusItem {
    pub label: String,
    pub value: String,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertSummaryItem {
    pub label: String,
    pub count: u32,
    pub color: String,
    /// Change against the previous period, in percent.
    pub trend: i32,
}

/// Overview card total: the frontend accepts either a label or a number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OverviewTotal {
    Count(u64),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverviewDataItem {
    pub title: String,
    pub value: String,
    pub percent: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<OverviewTotal>,
    /// Glyph key, resolved by the presentation layer.
    pub icon: String,
    pub color: String,
}

// --- Nodes ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeRole {
    Master,
    Worker,
}

impl NodeRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeRole::Master => "master",
            NodeRole::Worker => "worker",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum NodeStatus {
    Ready,
    NotReady,
    Other(String),
}

impl NodeStatus {
    pub fn as_str(&self) -> &str {
        match self {
            NodeStatus::Ready => "Ready",
            NodeStatus::NotReady => "NotReady",
            NodeStatus::Other(s) => s.as_str(),
        }
    }
}

impl From<String> for NodeStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Ready" => NodeStatus::Ready,
            "NotReady" => NodeStatus::NotReady,
            _ => NodeStatus::Other(s),
        }
    }
}

impl From<NodeStatus> for String {
    fn from(s: NodeStatus) -> Self {
        match s {
            NodeStatus::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeData {
    pub name: String,
    pub role: NodeRole,
    pub status: NodeStatus,
    pub cpu_usage: f64,
    pub memory_usage: f64,
    pub total_pods: u32,
    pub running_pods: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_new: Option<bool>,
}

// --- Events ---

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EventType {
    Normal,
    Warning,
    Other(String),
}

impl EventType {
    pub fn as_str(&self) -> &str {
        match self {
            EventType::Normal => "Normal",
            EventType::Warning => "Warning",
            EventType::Other(s) => s.as_str(),
        }
    }
}

impl From<String> for EventType {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Normal" => EventType::Normal,
            "Warning" => EventType::Warning,
            _ => EventType::Other(s),
        }
    }
}

impl From<EventType> for String {
    fn from(t: EventType) -> Self {
        match t {
            EventType::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventItem {
    /// RFC 3339 timestamp.
    pub timestamp: String,
    #[serde(rename = "type")]
    pub event_type: EventType,
    pub object: String,
    pub namespace: String,
    pub reason: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventStatisticItem {
    #[serde(rename = "type")]
    pub event_type: String,
    pub count: u64,
    pub percentage: f64,
    pub trend: Trend,
}

// --- Alerts ---

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AlertLevel {
    Critical,
    Warning,
    Notice,
    Other(String),
}

impl AlertLevel {
    pub fn as_str(&self) -> &str {
        match self {
            AlertLevel::Critical => "critical",
            AlertLevel::Warning => "warning",
            AlertLevel::Notice => "notice",
            AlertLevel::Other(s) => s.as_str(),
        }
    }
}

impl From<String> for AlertLevel {
    fn from(s: String) -> Self {
        match s.as_str() {
            "critical" => AlertLevel::Critical,
            "warning" => AlertLevel::Warning,
            "notice" => AlertLevel::Notice,
            _ => AlertLevel::Other(s),
        }
    }
}

impl From<AlertLevel> for String {
    fn from(l: AlertLevel) -> Self {
        match l {
            AlertLevel::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceAlertItem {
    pub name: String,
    pub message: String,
    pub level: AlertLevel,
    pub level_text: String,
    /// Relative time as displayed, e.g. "5分钟前".
    pub time: String,
}

// --- Notification lists ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListItemStatus {
    Success,
    Warning,
    Info,
    Danger,
    Primary,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ListItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub datetime: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ListItemStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn open_enums_keep_unknown_values() {
        let status: NodeStatus = serde_json::from_value(json!("SchedulingDisabled")).unwrap();
        assert_eq!(status, NodeStatus::Other("SchedulingDisabled".to_string()));
        assert_eq!(serde_json::to_value(&status).unwrap(), json!("SchedulingDisabled"));

        let level: AlertLevel = serde_json::from_value(json!("critical")).unwrap();
        assert_eq!(level, AlertLevel::Critical);

        let ty: EventType = serde_json::from_value(json!("Warning")).unwrap();
        assert_eq!(ty, EventType::Warning);
    }

    #[test]
    fn closed_enums_reject_unknown_values() {
        assert!(serde_json::from_value::<ListItemStatus>(json!("fatal")).is_err());
        assert!(serde_json::from_value::<NodeRole>(json!("etcd")).is_err());
        assert!(serde_json::from_value::<Trend>(json!("flat")).is_err());
    }

    #[test]
    fn node_serializes_camel_case() {
        let node = NodeData {
            name: "node-1".to_string(),
            role: NodeRole::Worker,
            status: NodeStatus::Ready,
            cpu_usage: 45.5,
            memory_usage: 60.0,
            total_pods: 128,
            running_pods: 110,
            is_new: None,
        };
        assert_eq!(
            serde_json::to_value(&node).unwrap(),
            json!({
                "name": "node-1",
                "role": "worker",
                "status": "Ready",
                "cpuUsage": 45.5,
                "memoryUsage": 60.0,
                "totalPods": 128,
                "runningPods": 110
            })
        );
    }

    #[test]
    fn list_item_omits_missing_fields() {
        let item = ListItem {
            title: "任务一".to_string(),
            status: Some(ListItemStatus::Danger),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&item).unwrap(),
            json!({ "title": "任务一", "status": "danger" })
        );
        let parsed: ListItem = serde_json::from_value(json!({ "title": "x" })).unwrap();
        assert_eq!(parsed.status, None);
    }

    #[test]
    fn overview_total_accepts_text_or_number() {
        let text: OverviewTotal = serde_json::from_value(json!("8")).unwrap();
        assert_eq!(text, OverviewTotal::Text("8".to_string()));
        let count: OverviewTotal = serde_json::from_value(json!(8)).unwrap();
        assert_eq!(count, OverviewTotal::Count(8));
    }
}
