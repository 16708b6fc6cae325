use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShapeError {
    #[error("{field} is {value}, expected 0-100")]
    PercentOutOfRange { field: String, value: f64 },
    #[error("event timestamp {timestamp:?} is not RFC 3339: {source}")]
    InvalidTimestamp {
        timestamp: String,
        source: chrono::ParseError,
    },
    #[error("chart {chart} has value {value}, expected a finite non-negative number")]
    InvalidChartValue { chart: &'static str, value: f64 },
    #[error("chart {chart} has a series of {actual} values for {expected} labels")]
    SeriesLength {
        chart: &'static str,
        expected: usize,
        actual: usize,
    },
}

#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("reading config {path}: {source}")]
    ConfigRead {
        path: String,
        source: std::io::Error,
    },
    #[error("parsing config: {0}")]
    ConfigParse(#[from] serde_yaml::Error),
    #[error("invalid config: {0}")]
    ConfigInvalid(String),
    #[error("usage: {0}")]
    Usage(String),
    #[error("backend request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("GET {path} returned {status}: {body}")]
    BackendStatus {
        path: String,
        status: u16,
        body: String,
    },
    #[error("GET {path} returned no data: {message}")]
    EmptyResponse { path: String, message: String },
    #[error("backend returned malformed data: {0}")]
    Shape(#[from] ShapeError),
}
