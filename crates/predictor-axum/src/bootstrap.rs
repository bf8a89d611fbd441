//! Axum server bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the web adapter. All concrete implementations are instantiated here.

use std::sync::Arc;

use anyhow::{Context, Result};
use predictor_core::{DemographicsPort, PeopleService, Repos};
use predictor_db::CoreFactory;
use predictor_guess::DefaultDemographicsClient;
use tokio::net::TcpListener;
use tracing::info;

use crate::config::ServerConfig;

/// Application context for the Axum adapter.
///
/// Holds the initialized services shared by all handlers.
pub struct AxumContext {
    pub people: Arc<PeopleService>,
}

impl AxumContext {
    /// Assemble the context from repositories and a demographics port.
    pub fn new(repos: &Repos, demographics: Arc<dyn DemographicsPort>) -> Self {
        Self {
            people: Arc::new(PeopleService::from_repos(repos, demographics)),
        }
    }
}

/// Open the database and build every service the server needs.
pub async fn bootstrap(config: &ServerConfig) -> Result<AxumContext> {
    info!(
        environment = %config.environment,
        database_path = %config.database_path.display(),
        address = %config.address,
        request_timeout_ms = u64::try_from(config.request_timeout.as_millis()).unwrap_or(u64::MAX),
        "Axum bootstrap resolved configuration"
    );

    let pool = CoreFactory::create_pool(&config.database_path)
        .await
        .with_context(|| {
            format!(
                "Failed to open database at {}",
                config.database_path.display()
            )
        })?;
    let repos = CoreFactory::build_repos(pool);

    let demographics: Arc<dyn DemographicsPort> = Arc::new(
        DefaultDemographicsClient::new(&config.guess)
            .context("Failed to build demographics client")?,
    );

    Ok(AxumContext::new(&repos, demographics))
}

/// Bootstrap, bind and serve until a shutdown signal arrives.
pub async fn start_server(config: ServerConfig) -> Result<()> {
    let ctx = bootstrap(&config).await?;
    let app = crate::routes::create_router(ctx, config.request_timeout);

    let listener = TcpListener::bind(&config.address)
        .await
        .with_context(|| format!("Failed to bind TCP listener on {}", config.address))?;

    info!("predictor listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Wait for SIGINT, or SIGTERM on Unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }

    info!("Shutdown signal received, starting graceful shutdown");
}
