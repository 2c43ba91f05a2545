#![recursion_limit = "256"]

mod config;
mod error;
mod routes;

use config::HostConfig;
use error::HostError;

#[tokio::main]
async fn main() -> Result<(), HostError> {
    // A missing .env is normal in production.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = HostConfig::from_env()?;
    let app = routes::app()?;
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port))
        .await
        .map_err(HostError::Bind)?;

    tracing::info!(port = config.port, "knowledge-hub listening");
    axum::serve(listener, app).await.map_err(HostError::Serve)
}
