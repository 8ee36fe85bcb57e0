// src/main.rs
use std::{error::Error, net::SocketAddr, sync::Arc, time::Duration};

use axum_server::Handle;
use dotenvy::dotenv;
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

use poll_backend::{
    config::Config,
    db,
    routes,
    state::AppState,
    store::{MemoryStore, PgStore, PollStore},
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenv().ok(); // Load environment variables from .env file

    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("Starting poll backend...");
    let config = Config::load();

    let mut pg_store = None;
    let store: Arc<dyn PollStore> = match &config.database_url {
        Some(url) => {
            info!("Connecting to database...");
            let pool = db::create_pool(url, &config).await?;
            let store = PgStore::new(pool);
            store.ensure_schema().await?;
            pg_store = Some(store.clone());
            Arc::new(store)
        }
        None => {
            warn!("DATABASE_URL not set, polls are kept in memory only");
            Arc::new(MemoryStore::new())
        }
    };
    info!(backend = store.backend_tag(), "Poll store ready");

    let app = routes::create_routes(AppState::new(store, config.timeouts));

    let address: SocketAddr = config.address().parse()?;
    let handle = Handle::new();
    tokio::spawn(shutdown_signal(handle.clone()));

    info!("Server running on {address}");
    axum_server::bind(address)
        .handle(handle)
        .serve(app.into_make_service())
        .await?;

    if let Some(store) = pg_store {
        info!("Closing database pool...");
        store.pool().close().await;
    }

    info!("Server shut down gracefully");
    Ok(())
}

async fn shutdown_signal(handle: Handle) {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {e}");
            std::future::pending::<()>().await;
        }
        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                warn!("Failed to install terminate handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    handle.graceful_shutdown(Some(Duration::from_secs(10)));
}
