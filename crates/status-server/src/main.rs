use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

use status_server::config::Settings;
use status_server::session::RedisSessionStore;
use status_server::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,status_server=debug".to_string()),
        )
        .with_target(true)
        .json()
        .init();

    info!("Starting status page server...");

    let settings = Settings::load()?;
    info!("Configuration loaded");

    let sessions = RedisSessionStore::connect(
        &settings.session.redis_url,
        settings.session.ttl_seconds,
    )
    .await?;
    info!("Session store connected");

    let app = status_server::build_router(AppState {
        settings: settings.clone(),
        sessions: Arc::new(sessions),
    });

    let addr = SocketAddr::from((
        settings.server.host.parse::<std::net::IpAddr>()?,
        settings.server.port,
    ));
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
