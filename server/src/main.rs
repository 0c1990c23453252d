//! SSR host for the recruitment portal.
//!
//! Serves the server-rendered Leptos shell, the hydrate bundle under `/pkg`,
//! and a `/healthz` probe. All recruitment data lives in the external ATS
//! backend; this process holds no state of its own.

mod config;
mod error;
mod routes;

use crate::config::ServerConfig;
use crate::error::ServerError;

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    tracing_subscriber::fmt::init();

    match dotenvy::dotenv() {
        Ok(path) => tracing::debug!(path = %path.display(), "loaded .env"),
        Err(e) if e.not_found() => {}
        Err(e) => tracing::warn!(error = %e, "ignoring unreadable .env"),
    }

    let config = ServerConfig::from_env()?;
    let app = routes::leptos_app()?;
    let listener = tokio::net::TcpListener::bind(config.bind_addr())
        .await
        .map_err(|source| ServerError::Bind { addr: config.bind_addr(), source })?;

    tracing::info!(port = config.port, "recruitment portal listening");
    axum::serve(listener, app).await.map_err(ServerError::Serve)
}
