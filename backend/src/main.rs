//! Contacts entry-point: loads settings, prepares storage, and serves pages.

mod server;

use std::net::SocketAddr;

use actix_web::web;
use color_eyre::eyre::{Context, Result};
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use contacts::inbound::http::health::HealthState;
use contacts::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations};
use contacts::settings::ServerSettings;
use server::{ServerConfig, create_server, drain};

async fn connect_database(settings: &ServerSettings, url: &str) -> Result<DbPool> {
    let applied = run_pending_migrations(url)
        .await
        .wrap_err("failed to apply database migrations")?;
    info!(applied, "database migrations up to date");

    let pool_config = PoolConfig::new(url)
        .with_max_size(settings.db_max_connections())
        .with_min_idle(Some(settings.db_min_idle()))
        .with_connection_timeout(settings.db_connection_timeout());
    DbPool::new(pool_config)
        .await
        .wrap_err("failed to create database pool")
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::load().wrap_err("failed to load server settings")?;
    let bind_addr: SocketAddr = settings
        .bind_addr()
        .parse()
        .wrap_err_with(|| format!("invalid bind address {}", settings.bind_addr()))?;

    let mut config = ServerConfig::new(bind_addr);
    if let Some(url) = settings.database_url() {
        config = config.with_db_pool(connect_database(&settings, url).await?);
    }

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), config)
        .wrap_err_with(|| format!("failed to bind {bind_addr}"))?;
    info!(%bind_addr, "contacts server listening");

    let handle = server.handle();
    actix_web::rt::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => drain(health_state, handle).await,
            Err(error) => warn!(%error, "failed to listen for shutdown signal"),
        }
    });
    server.await.wrap_err("server terminated with an error")
}
