use std::sync::Arc;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use campus_api::{AppState, router::router};
use campus_auth::SessionManager;
use campus_catalog::fixtures;
use campus_core::AppConfig;
use campus_storage::FileStore;

mod seed;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::load()?;

    let directory = Arc::new(seed::directory()?);
    let store = Arc::new(FileStore::new(&config.session.dir).await?);

    let sessions = SessionManager::new(directory, store);
    sessions.restore().await;

    let app = router(Arc::new(AppState::new(sessions, fixtures::university())));

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    info!(addr = %listener.local_addr()?, "campus server listening");
    axum::serve(listener, app).await?;

    Ok(())
}
