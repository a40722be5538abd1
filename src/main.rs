use std::net::SocketAddr;
use std::sync::Arc;

use tokio::signal;
use tracing_subscriber::EnvFilter;

use portfolio_api::config::Config;
use portfolio_api::store::Store;
use portfolio_api::store::postgres::PgStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    // Load config
    let config = Config::from_env().expect("Failed to load configuration");

    // Init tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .init();

    tracing::info!("Starting portfolio API");

    // The store is optional: persistence failures at startup downgrade to
    // warnings and the server runs without it.
    let store: Option<Arc<dyn Store>> = match &config.database_url {
        Some(url) => match PgStore::connect(url, config.database_name.clone()) {
            Ok(store) => {
                if let Err(e) = store.ensure_schema().await {
                    tracing::warn!("Could not ensure contact table: {e}");
                }
                if let Some(name) = store.name() {
                    tracing::info!("Using database {name}");
                }
                Some(Arc::new(store))
            }
            Err(e) => {
                tracing::warn!("Database not available: {e}");
                None
            }
        },
        None => {
            tracing::info!("DATABASE_URL not set, contact messages will not be persisted");
            None
        }
    };

    let addr = SocketAddr::new(config.host, config.port);
    let app = portfolio_api::build_app(store, config);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
