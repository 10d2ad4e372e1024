#![allow(clippy::must_use_candidate)]

mod error_page;
mod health;
mod response;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use http::Uri;
use tower_http::trace::TraceLayer;
use vj4_config::Config;
use vj4_error::UserFacingError;

pub use error_page::error_page_middleware;
pub use response::{ErrorResponse, HandlerResult};

/// Application routes wrapped with the error boundary
pub struct Server {
    router: Router,
    listen_address: SocketAddr,
}

impl Server {
    /// Wrap application routes with the health route, the not-found
    /// fallback and the error boundary middleware
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails validation
    pub fn new(config: &Config, routes: Router) -> anyhow::Result<Self> {
        config.validate()?;

        let listen_address = config
            .server
            .listen_address
            .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], 8888)));

        let mut app = routes.fallback(not_found_handler);

        // Error boundary, wraps the fallback too
        let errors = config.errors;
        app = app.layer(axum::middleware::from_fn(move |req, next| {
            async move { error_page_middleware(errors, req, next).await }
        }));

        // Health check, answered ahead of the application routes
        if config.server.health.enabled {
            let path: Arc<str> = Arc::from(config.server.health.path.as_str());
            app = app.layer(axum::middleware::from_fn(move |req, next| {
                let path = Arc::clone(&path);
                async move { health::health_middleware(path, req, next).await }
            }));
        }

        // Tracing
        app = app.layer(TraceLayer::new_for_http());

        Ok(Self {
            router: app,
            listen_address,
        })
    }

    /// Get the configured listen address
    #[must_use]
    pub const fn listen_address(&self) -> SocketAddr {
        self.listen_address
    }

    /// Consume the server and return the inner router
    ///
    /// Useful for testing when the caller manages the listener
    #[must_use]
    pub fn into_router(self) -> Router {
        self.router
    }

    /// Start serving requests
    ///
    /// Blocks until the cancellation token is triggered.
    ///
    /// # Errors
    ///
    /// Returns an error if binding the TCP listener or serving fails
    pub async fn serve(self, shutdown: tokio_util::sync::CancellationToken) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(self.listen_address).await?;
        let local_addr = listener.local_addr()?;
        tracing::info!(%local_addr, "server listening");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                shutdown.cancelled().await;
                tracing::info!("graceful shutdown initiated");
            })
            .await?;

        Ok(())
    }
}

async fn not_found_handler(uri: Uri) -> ErrorResponse {
    UserFacingError::not_found(uri.path()).into()
}
