use std::sync::Arc;
use tokio::time::{self, Duration};
use tracing::{info, warn};

use crate::error::ConsoleError;
use crate::fixtures;
use crate::models::response::{DashboardDataResponse, ListKind};
use crate::models::shapes::ListItem;

use super::BackendClient;

/// Where dashboard data comes from: built-in fixtures, or a backend that
/// answers with the same shapes.
#[derive(Clone)]
pub enum DataSource {
    Fixtures,
    Backend {
        client: Arc<BackendClient>,
        health_interval: Duration,
    },
}

/// Backend reachability, for display.
#[derive(Debug, Clone)]
pub struct SourceStatus {
    pub mode: &'static str,
    pub address: String,
    pub healthy: bool,
    pub last_ping: Option<chrono::DateTime<chrono::Utc>>,
}

impl DataSource {
    pub fn backend(client: BackendClient, health_interval: Duration) -> Self {
        DataSource::Backend {
            client: Arc::new(client),
            health_interval,
        }
    }

    pub async fn dashboard(&self) -> Result<DashboardDataResponse, ConsoleError> {
        match self {
            DataSource::Fixtures => Ok(fixtures::dashboard_data()),
            DataSource::Backend { client, .. } => client.get_dashboard().await.inspect_err(|e| {
                warn!("error fetching dashboard from {}: {}", client.address, e);
            }),
        }
    }

    pub async fn list(&self, kind: ListKind) -> Result<Vec<ListItem>, ConsoleError> {
        match self {
            DataSource::Fixtures => Ok(fixtures::list_items(kind)),
            DataSource::Backend { client, .. } => client.get_list(kind).await.inspect_err(|e| {
                warn!(
                    "error fetching {} list from {}: {}",
                    kind.as_str(),
                    client.address,
                    e
                );
            }),
        }
    }

    pub fn status(&self) -> SourceStatus {
        match self {
            DataSource::Fixtures => SourceStatus {
                mode: "fixtures",
                address: String::new(),
                healthy: true,
                last_ping: None,
            },
            DataSource::Backend { client, .. } => SourceStatus {
                mode: "backend",
                address: client.address.clone(),
                healthy: client.is_healthy(),
                last_ping: client.last_ping(),
            },
        }
    }

    /// Pings the backend until shutdown. Returns at once in fixture mode.
    pub async fn run_health_checker(self, mut shutdown: tokio::sync::watch::Receiver<()>) {
        let (client, health_interval) = match self {
            DataSource::Fixtures => return,
            DataSource::Backend {
                client,
                health_interval,
            } => (client, health_interval),
        };

        ping(&client).await;

        let mut interval = time::interval(health_interval);
        interval.tick().await;

        loop {
            tokio::select! {
                _ = interval.tick() => {
                    ping(&client).await;
                }
                _ = shutdown.changed() => {
                    info!("health checker shutting down");
                    return;
                }
            }
        }
    }
}

async fn ping(client: &BackendClient) {
    if let Err(e) = client.ping().await {
        warn!("health check failed for {}: {}", client.address, e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BackendConfig;
    use crate::models::response::ApiResponse;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn fixtures_serve_fixture_data() {
        let source = DataSource::Fixtures;
        assert_eq!(source.dashboard().await.unwrap(), fixtures::dashboard_data());
        assert_eq!(
            source.list(ListKind::Messages).await.unwrap(),
            fixtures::message_items()
        );
        let status = source.status();
        assert_eq!(status.mode, "fixtures");
        assert!(status.healthy);
    }

    #[tokio::test]
    async fn fixture_health_checker_returns_immediately() {
        let (_tx, rx) = tokio::sync::watch::channel(());
        DataSource::Fixtures.run_health_checker(rx).await;
    }

    #[tokio::test]
    async fn backend_serves_remote_lists() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/notifications/todos"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(ApiResponse::success(200, fixtures::todo_items()[..1].to_vec())),
            )
            .mount(&server)
            .await;

        let client = BackendClient::new(&BackendConfig {
            base_url: server.uri(),
            timeout_secs: 5,
            health_interval_secs: 15,
        })
        .unwrap();
        let source = DataSource::backend(client, Duration::from_secs(15));

        let items = source.list(ListKind::Todos).await.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title, "任务一");
        assert_eq!(source.status().mode, "backend");
        assert_eq!(source.status().address, server.uri());
    }

    #[tokio::test]
    async fn health_checker_stops_on_shutdown() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/healthz"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let client = BackendClient::new(&BackendConfig {
            base_url: server.uri(),
            timeout_secs: 5,
            health_interval_secs: 1,
        })
        .unwrap();
        let source = DataSource::backend(client, Duration::from_millis(50));

        let (tx, rx) = tokio::sync::watch::channel(());
        let handle = tokio::spawn(source.clone().run_health_checker(rx));
        tokio::time::sleep(Duration::from_millis(120)).await;
        tx.send(()).unwrap();
        handle.await.unwrap();

        assert!(source.status().last_ping.is_some());
    }
}
