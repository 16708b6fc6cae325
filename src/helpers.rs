use chrono::{DateTime, Utc};

use crate::models::shapes::{AlertLevel, EventType, NodeStatus};

pub fn human_time(t: Option<DateTime<Utc>>) -> String {
    let t = match t {
        Some(t) => t,
        None => return "never".to_string(),
    };

    let d = Utc::now() - t;
    let secs = d.num_seconds();

    if secs < 60 {
        "just now".to_string()
    } else if secs < 3600 {
        let m = d.num_minutes();
        if m == 1 {
            "1 minute ago".to_string()
        } else {
            format!("{} minutes ago", m)
        }
    } else if secs < 86400 {
        let h = d.num_hours();
        if h == 1 {
            "1 hour ago".to_string()
        } else {
            format!("{} hours ago", h)
        }
    } else {
        let days = d.num_days();
        if days == 1 {
            "1 day ago".to_string()
        } else {
            format!("{} days ago", days)
        }
    }
}

/// Renders an RFC 3339 event timestamp as `YYYY-MM-DD HH:MM:SS` UTC; other
/// input is shown unchanged.
pub fn event_time(ts: &str) -> String {
    match DateTime::parse_from_rfc3339(ts) {
        Ok(dt) => dt.to_utc().format("%Y-%m-%d %H:%M:%S").to_string(),
        Err(_) => ts.to_string(),
    }
}

pub fn trend_text(trend: i32) -> String {
    if trend > 0 {
        format!("+{}%", trend)
    } else {
        format!("{}%", trend)
    }
}

pub fn node_status_class(status: &NodeStatus) -> &'static str {
    match status {
        NodeStatus::Ready => "badge-success",
        NodeStatus::NotReady => "badge-error",
        NodeStatus::Other(_) => "badge-info",
    }
}

pub fn event_type_class(t: &EventType) -> &'static str {
    match t {
        EventType::Normal => "badge-success",
        EventType::Warning => "badge-warning",
        EventType::Other(_) => "badge-info",
    }
}

pub fn alert_level_class(level: &AlertLevel) -> &'static str {
    match level {
        AlertLevel::Critical => "badge-error",
        AlertLevel::Warning => "badge-warning",
        AlertLevel::Notice | AlertLevel::Other(_) => "badge-info",
    }
}
