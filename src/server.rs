//! Router assembly and the listener lifecycle.
//!
//! A [`Server`] goes through `bind` (listening) and `run_until` (serving
//! until the shutdown future resolves, then draining open connections).

use axum::{
    Router,
    http::{HeaderValue, header},
    middleware,
    routing::{MethodRouter, get},
};
use std::{
    future::Future,
    net::SocketAddr,
    path::Path,
    sync::Arc,
};
use tokio::{net::TcpListener, signal};
use tower_http::{services::ServeDir, set_header::SetResponseHeaderLayer};
use tracing::{debug, error};

use crate::{
    config::ServerConfig,
    error::ServerError,
    handlers::list_directory,
    middleware::{log_requests, override_module_mime, reject_file_with_slash},
    state::AppState,
};

/// `Cache-Control` value put on every response
pub const NO_STORE: &str = "no-store, no-cache, must-revalidate";

/// Builds the application router for `state.root`
///
/// Layers, innermost first:
/// - `ServeDir` serves files and directory indexes, falling back to
///   [`list_directory`]
/// - 404 for slash-terminated paths that name a file
/// - the JavaScript content-type override
/// - the access log hook
/// - the `Cache-Control` header, overriding anything set further in
pub fn router(state: Arc<AppState>) -> Router {
    let listing: MethodRouter = get(list_directory).with_state(state.clone());
    let assets = ServeDir::new(&state.root).fallback(listing);

    Router::new()
        .fallback_service(assets)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            reject_file_with_slash,
        ))
        .layer(middleware::from_fn(override_module_mime))
        .layer(middleware::from_fn_with_state(state, log_requests))
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static(NO_STORE),
        ))
}

/// A bound, not yet serving, static asset server
#[derive(Debug)]
pub struct Server {
    listener: TcpListener,
    state: Arc<AppState>,
}

impl Server {
    /// Binds the listener. Fails immediately if the address is unavailable.
    pub async fn bind(config: ServerConfig) -> Result<Self, ServerError> {
        let listener = TcpListener::bind(config.addr)
            .await
            .map_err(|source| ServerError::Bind {
                addr: config.addr,
                source,
            })?;

        let state = Arc::new(AppState {
            root: config.root,
            access_log: config.access_log,
        });
        debug!("Listening on {} for {}", config.addr, state.root.display());

        Ok(Self { listener, state })
    }

    pub fn local_addr(&self) -> Result<SocketAddr, ServerError> {
        Ok(self.listener.local_addr()?)
    }

    pub fn root(&self) -> &Path {
        &self.state.root
    }

    /// Serves until `shutdown` resolves, then waits for in-flight requests.
    pub async fn run_until<F>(self, shutdown: F) -> Result<(), ServerError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let app = router(self.state);
        axum::serve(self.listener, app)
            .with_graceful_shutdown(shutdown)
            .await?;
        debug!("Server stopped");
        Ok(())
    }
}

/// Resolves on Ctrl-C, or SIGTERM on unix
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", err);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                error!("Failed to install SIGTERM handler: {}", err);
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
    debug!("Shutdown signal received");
}
