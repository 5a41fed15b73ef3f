mod error;
mod handlers;
mod query;
mod state;
mod types;

use std::future::Future;
use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use log::info;

use crate::conf::ServerConfig;
use crate::core::FnProxyError;
use crate::service::TestDataSource;

pub use error::ApiError;
pub use query::{parse_bool, parse_params};
pub use state::AppState;
pub use types::FieldError;

pub const TEST_DATA_ROUTE: &str = "/api/test-data";

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(TEST_DATA_ROUTE, get(handlers::test_data))
        .fallback(handlers::not_found)
        .with_state(state)
}

pub struct FnProxyApi {
    state: AppState,
}

impl FnProxyApi {
    pub fn new(source: Arc<dyn TestDataSource>, server: &ServerConfig) -> Self {
        Self {
            state: AppState {
                source,
                expose_error_detail: server.expose_error_detail,
            },
        }
    }

    pub fn router(&self) -> Router {
        create_router(self.state.clone())
    }

    /// Serves until `shutdown` resolves, then waits for in-flight requests.
    pub async fn serve<F>(self, addr: &str, shutdown: F) -> Result<(), FnProxyError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| FnProxyError::IoError(format!("binding to {addr}: {e}")))?;
        info!("listening on {addr}");
        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(|e| FnProxyError::IoError(format!("serving: {e}")))?;
        Ok(())
    }
}

/// Resolves on Ctrl-C, or SIGTERM on unix.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            log::error!("cannot listen for ctrl-c: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                log::error!("cannot listen for SIGTERM: {e}");
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
    info!("shutdown signal received");
}
