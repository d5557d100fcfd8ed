use std::net::SocketAddr;
use std::time::Duration;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use irish_rail_api::directory::StationDirectory;
use irish_rail_api::normalize::RailService;
use irish_rail_api::upstream::{RailClient, RailConfig};
use irish_rail_api::web::{AppState, create_router};

/// How often to refresh the station directory (24 hours).
const DIRECTORY_REFRESH_INTERVAL: Duration = Duration::from_secs(24 * 60 * 60);

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3000);

    let mut config = RailConfig::new();
    if let Ok(base_url) = std::env::var("IRISH_RAIL_BASE_URL") {
        config = config.with_base_url(base_url);
    }

    let client = RailClient::new(config).expect("Failed to create realtime client");

    // Prefetch the station directory (fail fast if upstream is unreachable)
    info!("Fetching station directory...");
    let directory = StationDirectory::fetch(client.clone())
        .await
        .expect("Failed to fetch station directory");
    info!("Loaded {} stations", directory.len().await);

    // Refresh the directory daily in the background
    let directory_refresh = directory.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(DIRECTORY_REFRESH_INTERVAL);
        interval.tick().await; // First tick is immediate, skip it
        loop {
            interval.tick().await;
            match directory_refresh.refresh().await {
                Ok(count) => info!("Refreshed station directory: {count} stations"),
                Err(e) => warn!("Failed to refresh station directory: {e}"),
            }
        }
    });

    let state = AppState::new(RailService::new(client, directory));
    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!("Listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listen address");
    axum::serve(listener, app)
        .await
        .expect("Server error");
}
