//! Serve loop with graceful shutdown.

use crate::api::{AppState, create_router};
use crate::config::ServerConfig;
use crate::page::PageRenderer;
use axum::Router;
use readmeriser_error::{ReadmeRiserResult, ServerError, ServerErrorKind};
use readmeriser_interface::ReadmeDriver;
use readmeriser_models::OpenAICompatibleClient;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, instrument, warn};

/// Provider name attached to upstream logs.
pub const PROVIDER_NAME: &str = "openrouter";

/// A configured, ready-to-run web server.
#[derive(Debug)]
pub struct ReadmeServer {
    bind_address: String,
    router: Router,
}

impl ReadmeServer {
    /// Wires the OpenAI-compatible client described by `config` into the router.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client or page template cannot be built.
    #[instrument(skip_all, fields(bind = %config.bind_address()))]
    pub fn from_config(config: &ServerConfig) -> ReadmeRiserResult<Self> {
        let mut client = OpenAICompatibleClient::new(
            config.api().clone(),
            config.model().clone(),
            config.url().clone(),
            PROVIDER_NAME,
        )
        .with_app_title(config.app_title().clone());
        if let Some(timeout) = config.request_timeout() {
            client = client.with_timeout(timeout)?;
        } else {
            warn!("No upstream timeout configured; a hung upstream call hangs its request");
        }

        Self::with_driver(config, Arc::new(client))
    }

    /// Builds the server around any driver.
    ///
    /// # Errors
    ///
    /// Returns an error if the page template cannot be compiled.
    pub fn with_driver(
        config: &ServerConfig,
        driver: Arc<dyn ReadmeDriver>,
    ) -> ReadmeRiserResult<Self> {
        let state = AppState::new(
            driver,
            PageRenderer::new()?,
            config.generation_settings(),
            config.site_url().clone(),
        );

        Ok(Self {
            bind_address: config.bind_address(),
            router: create_router(state),
        })
    }

    /// The router, for embedding or testing.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Binds and serves until Ctrl+C.
    ///
    /// # Errors
    ///
    /// Returns an error if the address cannot be bound or serving fails.
    pub async fn run(self) -> ReadmeRiserResult<()> {
        let listener = TcpListener::bind(&self.bind_address).await.map_err(|e| {
            ServerError::new(ServerErrorKind::Bind {
                addr: self.bind_address.clone(),
                message: e.to_string(),
            })
        })?;
        info!(address = %self.bind_address, "ReadmeRiser listening");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| ServerError::new(ServerErrorKind::Serve(e.to_string())))?;

        info!("Server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutting down..."),
        Err(e) => warn!(error = %e, "Failed to listen for Ctrl+C"),
    }
}
