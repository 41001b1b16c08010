// ABOUTME: HTTP server lifecycle for Todoboard
// ABOUTME: Opens storage, builds the traced router and serves until a shutdown signal

use std::future::Future;
use std::sync::Arc;

use anyhow::Context;
use axum::Router;
use colored::*;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::config::Config;
use todoboard_api::{create_router, AppState};
use todoboard_storage::{SqliteStorage, TodoStore};

/// Connect to the database and make sure both tables exist.
///
/// Failures are logged with troubleshooting hints before being returned.
pub async fn open_storage(config: &Config) -> anyhow::Result<SqliteStorage> {
    let path = config.database_path.display().to_string();

    let result = async {
        let storage = SqliteStorage::new(config.storage_config()).await?;
        storage.initialize().await?;
        Ok::<_, todoboard_storage::StorageError>(storage)
    }
    .await;

    match result {
        Ok(storage) => {
            info!("Connected to database at {}", path);
            Ok(storage)
        }
        Err(e) => {
            error!("Database connection failed: {}", e);
            error!("Check that:");
            error!("  - the directory containing {} exists or can be created", path);
            error!("  - the database file is writable by this user");
            error!("  - no other process holds an exclusive lock on it");
            Err(e).with_context(|| format!("Failed to open database at {}", path))
        }
    }
}

pub fn build_app(store: Arc<dyn TodoStore>) -> anyhow::Result<Router> {
    let state = AppState::new(store).context("Failed to load page templates")?;
    Ok(create_router(state).layer(TraceLayer::new_for_http()))
}

/// Serve `app` on `listener` until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, app: Router, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .context("Server error")
}

pub async fn run_server(config: Config) -> anyhow::Result<()> {
    let storage = open_storage(&config).await?;
    let app = build_app(Arc::new(storage))?;

    let addr = config.socket_addr();
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    let url = format!("http://{}", addr);
    info!("Server listening on {}", addr);
    println!("{} {}", "Server running at".green().bold(), url.cyan());

    serve(listener, app, shutdown_signal()).await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("Failed to listen for SIGTERM: {}", e);
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

    info!("Shutdown signal received, finishing in-flight requests");
}
