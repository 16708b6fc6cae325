mod clients;
mod config;
mod error;
mod fixtures;
mod helpers;
mod models;
mod routes;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;
use tokio::signal;
use tracing::info;

use clients::BackendClient;
use clients::source::DataSource;
use routes::icons::IconRegistry;

const DEFAULT_CONFIG_PATH: &str = "/etc/cilikube-console/config.yaml";

#[derive(Clone)]
pub struct AppState {
    pub source: DataSource,
    pub config: Arc<config::Config>,
    pub icons: Arc<IconRegistry>,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cilikube_console=info,tower_http=info".into()),
        )
        .init();

    let explicit_path =
        config::config_path_from_args(std::env::args().skip(1)).unwrap_or_else(|e| {
            eprintln!("{}", e);
            eprintln!("usage: cilikube-console [--config <path> | <path>]");
            std::process::exit(2);
        });

    let cfg = match explicit_path {
        Some(path) => config::Config::load(&PathBuf::from(&path)),
        None if PathBuf::from(DEFAULT_CONFIG_PATH).exists() => {
            config::Config::load(&PathBuf::from(DEFAULT_CONFIG_PATH))
        }
        None => {
            info!("no config at {}, using defaults", DEFAULT_CONFIG_PATH);
            Ok(config::Config::default())
        }
    }
    .unwrap_or_else(|e| {
        eprintln!("error loading config: {}", e);
        std::process::exit(1);
    });

    let source = match &cfg.backend {
        Some(backend) => {
            let client = BackendClient::new(backend).unwrap_or_else(|e| {
                eprintln!("error creating backend client: {}", e);
                std::process::exit(1);
            });
            info!("serving dashboard data from {}", cfg.backend_url());
            DataSource::backend(client, Duration::from_secs(backend.health_interval_secs))
        }
        None => {
            info!("no backend configured, serving fixture data");
            DataSource::Fixtures
        }
    };

    let cfg = Arc::new(cfg);

    // Shutdown signal
    let (shutdown_tx, shutdown_rx) = tokio::sync::watch::channel(());

    tokio::spawn(source.clone().run_health_checker(shutdown_rx));

    let state = AppState {
        source,
        config: cfg.clone(),
        icons: Arc::new(IconRegistry::default()),
    };

    let router = routes::build_router(state);

    let listen_addr = cfg.listen_addr();
    let listener = TcpListener::bind(&listen_addr).await.unwrap_or_else(|e| {
        eprintln!("failed to bind {}: {}", listen_addr, e);
        std::process::exit(1);
    });

    info!("cilikube-console listening on {}", listen_addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(async move {
            shutdown_signal().await;
            let _ = shutdown_tx.send(());
        })
        .await
        .unwrap_or_else(|e| {
            eprintln!("server error: {}", e);
            std::process::exit(1);
        });
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c().await.expect("failed to listen for ctrl+c");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to listen for SIGTERM")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
