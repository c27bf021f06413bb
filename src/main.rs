mod config;
mod logging;
mod metrics;
mod routes;

use config::{Config, ConfigError};
use metrics::Metrics;

#[derive(Debug, thiserror::Error)]
enum ServerError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("metrics registry: {0}")]
    Metrics(#[from] prometheus::Error),
    #[error("failed to bind {addr}: {source}")]
    Bind { addr: String, source: std::io::Error },
    #[error("server failed: {0}")]
    Serve(std::io::Error),
}

/// Serve `/metrics` on its own port. Failures are logged; the site keeps running.
fn spawn_metrics_listener(addr: String, metrics: Metrics) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let listener = match tokio::net::TcpListener::bind(&addr).await {
            Ok(listener) => listener,
            Err(e) => {
                tracing::error!(%addr, error = %e, "failed to start metrics listener");
                return;
            }
        };
        tracing::info!(%addr, "metrics listening");
        if let Err(e) = axum::serve(listener, metrics::app(metrics)).await {
            tracing::error!(error = %e, "metrics listener failed");
        }
    })
}

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    // A missing .env file is fine; the process environment still applies.
    let _ = dotenvy::dotenv();

    let config = Config::from_env()?;
    logging::init(config.log_format);

    let metrics = Metrics::new()?;
    let _metrics_listener = spawn_metrics_listener(config.metrics_bind_addr(), metrics.clone());

    let app = routes::app(routes::SiteState::new(config.site_dir.clone()), metrics);
    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Bind { addr: addr.clone(), source })?;

    tracing::info!(%addr, site_dir = %config.site_dir.display(), "daylight listening");
    axum::serve(listener, app).await.map_err(ServerError::Serve)
}
