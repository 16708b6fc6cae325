use serde::{Deserialize, Serialize};

/// Series values: one series, or one row per stacked series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChartValues {
    Single(Vec<f64>),
    Multi(Vec<Vec<f64>>),
}

impl ChartValues {
    pub fn series(&self) -> Vec<&[f64]> {
        match self {
            ChartValues::Single(v) => vec![v.as_slice()],
            ChartValues::Multi(rows) => rows.iter().map(|r| r.as_slice()).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub values: ChartValues,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemStyle {
    pub color: String,
}

/// One segment of a pie chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PieSlice {
    pub value: u64,
    pub name: String,
    pub item_style: ItemStyle,
}

impl PieSlice {
    pub fn new(value: u64, name: impl Into<String>, color: &str) -> Self {
        Self {
            value,
            name: name.into(),
            item_style: ItemStyle {
                color: color.to_string(),
            },
        }
    }
}
