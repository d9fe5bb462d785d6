//! Serve command - runs the HTTP API

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use clap::Args;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{error, info, warn};

use crate::api::{create_router, AppState};
use crate::config::AppConfig;
use crate::domain::UserDirectory;
use crate::infrastructure::catalog::{HttpClient, OmdbCatalogClient};
use crate::infrastructure::logging::init_logging;
use crate::infrastructure::services::UserService;
use crate::infrastructure::user::InMemoryUserDirectory;

/// Arguments for the serve command
#[derive(Args, Clone, Debug, Default)]
pub struct ServeArgs {
    /// Start with an empty directory instead of the demo users
    #[arg(long)]
    pub no_seed: bool,

    /// Port to listen on (overrides config)
    #[arg(long)]
    pub port: Option<u16>,
}

/// Run the API server until Ctrl+C or SIGTERM
pub async fn run(args: ServeArgs) -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let mut config = AppConfig::load().context("Failed to load configuration")?;
    if let Some(port) = args.port {
        config.server.port = port;
    }

    init_logging(&config.logging)?;

    if config.catalog.api_key.is_empty() {
        warn!("No OMDb API key configured, catalog requests will be rejected upstream");
    }

    let service = build_user_service(&config, !args.no_seed)?;
    let app = create_router(AppState::new(service));

    let addr = build_socket_addr(&config)?;
    info!("Starting API server on {}", addr);

    let listener = TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("API server shutdown complete");

    Ok(())
}

fn build_user_service(config: &AppConfig, allow_seed: bool) -> anyhow::Result<UserService> {
    let directory = build_directory(allow_seed && config.directory.seed_demo_users);

    let http = HttpClient::with_timeout(config.catalog.timeout())?;
    let catalog = OmdbCatalogClient::with_base_url(
        http,
        config.catalog.api_key.clone(),
        config.catalog.base_url.clone(),
    );

    Ok(UserService::new(directory, Arc::new(catalog)))
}

fn build_directory(seed: bool) -> Arc<dyn UserDirectory> {
    let directory = if seed {
        InMemoryUserDirectory::with_demo_users()
    } else {
        InMemoryUserDirectory::new()
    };

    info!(users = directory.len(), next_id = directory.peek_next_id(), "User directory ready");
    Arc::new(directory)
}

fn build_socket_addr(config: &AppConfig) -> anyhow::Result<SocketAddr> {
    Ok(SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    )))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
