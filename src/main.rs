use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;
use visitor_desk::{build_router, AppConfig};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("visitor_desk=info,tower_http=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("Starting Visitor Desk v{}...", env!("CARGO_PKG_VERSION"));

    let config = AppConfig::from_env()?;
    let app = build_router(&config).await?;

    let endpoint = config.server.bind_addr();
    info!("Starting at endpoint:{}", endpoint);

    let listener = tokio::net::TcpListener::bind(&endpoint).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

/// Resolves on Ctrl-C.
async fn shutdown_signal() {
    // ---
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
