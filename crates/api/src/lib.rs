//! `api` crate — HTTP REST API layer.
//!
//! Exposes:
//!   GET    /blogs                  (optional `blog_id`, `title` filters)
//!   GET    /blogs/{blog_id}
//!   GET    /blogs-paginated-view   (`page`, `page_size`)
//!   POST   /blogs                  (create, or update when `instance_id` is set)
//!   DELETE /blogs/{blog_id}
//!   GET    /health
//!
//! Every response, including rejected requests, uses the [`envelope::Envelope`] shape.

pub mod envelope;
pub mod error;
pub mod extractors;
pub mod handlers;

use std::net::SocketAddr;

use axum::{routing::get, Router};
use db::{DbError, DbPool};
use service::BlogService;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

pub use handlers::AppState;

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ServeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("database error: {0}")]
    Database(#[from] DbError),
}

/// Build the application router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health::check))
        .route(
            "/blogs",
            get(handlers::blogs::list).post(handlers::blogs::create_or_update),
        )
        .route(
            "/blogs/{blog_id}",
            get(handlers::blogs::get).delete(handlers::blogs::delete),
        )
        .route("/blogs-paginated-view", get(handlers::blogs::paginated))
        .fallback(handlers::health::not_found)
        .method_not_allowed_fallback(handlers::health::method_not_allowed)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Ensure the schema exists, then serve until Ctrl+C or SIGTERM.
pub async fn serve(config: ServerConfig, pool: DbPool) -> Result<(), ServeError> {
    db::pool::init_schema(&pool).await?;

    let state = AppState::new(BlogService::new(pool));
    let app = build_router(state);

    let listener = TcpListener::bind(config.bind_addr).await?;
    info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Wait for Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            error!(error = %err, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                error!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C, starting shutdown"),
        _ = terminate => info!("Received SIGTERM, starting shutdown"),
    }
}
