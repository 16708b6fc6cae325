pub mod source;

use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::sync::Mutex;
use std::time::Duration;

use crate::config::BackendConfig;
use crate::error::ConsoleError;
use crate::models::response::{ApiResponse, DashboardDataResponse, ListKind};
use crate::models::shapes::ListItem;

/// HTTP client for a backend that serves the dashboard shapes.
pub struct BackendClient {
    pub address: String,
    http: Client,
    state: Mutex<ClientState>,
}

struct ClientState {
    healthy: bool,
    last_ping: Option<DateTime<Utc>>,
}

impl BackendClient {
    pub fn new(cfg: &BackendConfig) -> Result<Self, ConsoleError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(cfg.timeout_secs))
            .build()?;

        Ok(Self {
            address: cfg.base_url.clone(),
            http,
            state: Mutex::new(ClientState {
                healthy: true,
                last_ping: None,
            }),
        })
    }

    pub async fn ping(&self) -> Result<(), ConsoleError> {
        let resp = self
            .http
            .get(format!("{}/healthz", self.address))
            .send()
            .await;

        let resp = match resp {
            Ok(resp) => resp,
            Err(e) => {
                self.state.lock().unwrap().healthy = false;
                return Err(e.into());
            }
        };

        let mut state = self.state.lock().unwrap();
        if resp.status().is_success() {
            state.healthy = true;
            state.last_ping = Some(Utc::now());
            Ok(())
        } else {
            state.healthy = false;
            Err(ConsoleError::BackendStatus {
                path: "/healthz".to_string(),
                status: resp.status().as_u16(),
                body: String::new(),
            })
        }
    }

    pub fn is_healthy(&self) -> bool {
        self.state.lock().unwrap().healthy
    }

    pub fn last_ping(&self) -> Option<DateTime<Utc>> {
        self.state.lock().unwrap().last_ping
    }

    /// Fetches the dashboard bundle and checks it before handing it out.
    pub async fn get_dashboard(&self) -> Result<DashboardDataResponse, ConsoleError> {
        let data: DashboardDataResponse = self.get_data("/api/v1/dashboard").await?;
        data.validate()?;
        Ok(data)
    }

    pub async fn get_list(&self, kind: ListKind) -> Result<Vec<ListItem>, ConsoleError> {
        self.get_data(&format!("/api/v1/notifications/{}", kind.as_str()))
            .await
    }

    async fn get_data<T: DeserializeOwned>(&self, path: &str) -> Result<T, ConsoleError> {
        let resp = self
            .http
            .get(format!("{}{}", self.address, path))
            .header("Accept", "application/json")
            .send()
            .await?;

        if resp.status().as_u16() >= 400 {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(ConsoleError::BackendStatus {
                path: path.to_string(),
                status,
                body,
            });
        }

        let envelope: ApiResponse<T> = resp.json().await?;

        // The envelope code mirrors the status the backend meant to send.
        if envelope.code >= 400 {
            return Err(ConsoleError::BackendStatus {
                path: path.to_string(),
                status: envelope.code,
                body: envelope.message,
            });
        }

        envelope.data.ok_or_else(|| ConsoleError::EmptyResponse {
            path: path.to_string(),
            message: envelope.message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ShapeError;
    use crate::fixtures;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> BackendClient {
        BackendClient::new(&BackendConfig {
            base_url: server.uri(),
            timeout_secs: 5,
            health_interval_secs: 15,
        })
        .unwrap()
    }

    #[tokio::test]
    async fn dashboard_is_unwrapped_from_envelope() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/dashboard"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(ApiResponse::success(200, fixtures::dashboard_data())),
            )
            .mount(&server)
            .await;

        let data = client_for(&server).get_dashboard().await.unwrap();
        assert_eq!(data, fixtures::dashboard_data());
    }

    #[tokio::test]
    async fn invalid_dashboard_is_rejected() {
        let mut data = fixtures::dashboard_data();
        data.overview_data[0].percent = 250.0;

        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/dashboard"))
            .respond_with(ResponseTemplate::new(200).set_body_json(ApiResponse::success(200, data)))
            .mount(&server)
            .await;

        let err = client_for(&server).get_dashboard().await.unwrap_err();
        assert!(matches!(err, ConsoleError::Shape(_)));
    }

    #[tokio::test]
    async fn error_status_carries_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/notifications/todos"))
            .respond_with(ResponseTemplate::new(503).set_body_string("warming up"))
            .mount(&server)
            .await;

        let err = client_for(&server).get_list(ListKind::Todos).await.unwrap_err();
        match err {
            ConsoleError::BackendStatus { status, body, .. } => {
                assert_eq!(status, 503);
                assert_eq!(body, "warming up");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn envelope_without_data_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/notifications/notify"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "code": 200, "message": "empty" })),
            )
            .mount(&server)
            .await;

        let err = client_for(&server).get_list(ListKind::Notify).await.unwrap_err();
        assert!(matches!(err, ConsoleError::EmptyResponse { ref message, .. } if message == "empty"));
    }

    #[tokio::test]
    async fn envelope_error_code_wins_over_data() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/notifications/notify"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "code": 500,
                "data": [{ "title": "stale" }],
                "message": "boom"
            })))
            .mount(&server)
            .await;

        let err = client_for(&server).get_list(ListKind::Notify).await.unwrap_err();
        match err {
            ConsoleError::BackendStatus { status, body, .. } => {
                assert_eq!(status, 500);
                assert_eq!(body, "boom");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn fractional_dashboard_values_are_accepted() {
        let mut body = serde_json::to_value(ApiResponse::success(200, fixtures::dashboard_data())).unwrap();
        body["data"]["nodes"][0]["cpuUsage"] = json!(65.5);
        body["data"]["memoryUsageData"]["values"][0][1] = json!(10.25);

        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/dashboard"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&server)
            .await;

        let data = client_for(&server).get_dashboard().await.unwrap();
        assert_eq!(data.nodes[0].cpu_usage, 65.5);
    }

    #[tokio::test]
    async fn out_of_range_percent_is_a_shape_error() {
        let mut body = serde_json::to_value(ApiResponse::success(200, fixtures::dashboard_data())).unwrap();
        body["data"]["overviewData"][0]["percent"] = json!(300);

        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/dashboard"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&server)
            .await;

        let err = client_for(&server).get_dashboard().await.unwrap_err();
        assert!(matches!(
            err,
            ConsoleError::Shape(ShapeError::PercentOutOfRange { .. })
        ));
    }

    #[tokio::test]
    async fn ping_tracks_health() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/healthz"))
            .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
            .mount(&server)
            .await;

        let client = client_for(&server);
        assert!(client.last_ping().is_none());
        client.ping().await.unwrap();
        assert!(client.is_healthy());
        assert!(client.last_ping().is_some());
    }

    #[tokio::test]
    async fn failed_ping_marks_unhealthy() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/healthz"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = client_for(&server);
        assert!(client.ping().await.is_err());
        assert!(!client.is_healthy());
    }
}
