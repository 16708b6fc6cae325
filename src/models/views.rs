// Pre-computed rows for the HTML dashboard.

#[derive(Debug, Clone, Default)]
pub struct HealthView {
    pub label: String,
    pub value: String,
    pub color: String,
}

#[derive(Debug, Clone, Default)]
pub struct AlertSummaryView {
    pub label: String,
    pub count: u32,
    pub color: String,
    pub trend: String,
}

#[derive(Debug, Clone, Default)]
pub struct OverviewCardView {
    pub title: String,
    pub value: String,
    pub total: String,
    pub percent: f64,
    pub color: String,
    pub glyph: String,
    pub glyph_name: String,
}

#[derive(Debug, Clone, Default)]
pub struct ChartView {
    pub title: String,
    pub rows: Vec<ChartRowView>,
}

#[derive(Debug, Clone, Default)]
pub struct ChartRowView {
    pub label: String,
    pub values: String,
}

#[derive(Debug, Clone, Default)]
pub struct NodeView {
    pub name: String,
    pub role: String,
    pub status: String,
    pub status_class: String,
    pub cpu: f64,
    pub memory: f64,
    pub pods: String,
    pub is_new: bool,
}

#[derive(Debug, Clone, Default)]
pub struct EventView {
    pub time: String,
    pub event_type: String,
    pub type_class: String,
    pub object: String,
    pub namespace: String,
    pub reason: String,
    pub message: String,
}

#[derive(Debug, Clone, Default)]
pub struct SliceView {
    pub name: String,
    pub value: u64,
    pub color: String,
    /// Share of all slices, 0-100.
    pub share: u64,
}

#[derive(Debug, Clone, Default)]
pub struct ResourceAlertView {
    pub name: String,
    pub message: String,
    pub level_text: String,
    pub level_class: String,
    pub time: String,
}

#[derive(Debug, Clone, Default)]
pub struct ListItemView {
    pub title: String,
    pub description: String,
    pub datetime: String,
    pub extra: String,
    pub status_class: String,
}

#[derive(Debug, Clone, Default)]
pub struct SourceView {
    pub mode: String,
    pub address: String,
    pub healthy: bool,
    pub last_ping: String,
}
