//! Calculator entry-point: loads settings, prepares the database, and serves
//! the REST API.

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use area_calculator::inbound::http::health::HealthState;
use area_calculator::outbound::persistence::{DbPool, PoolConfig, ensure_schema};
use area_calculator::settings::AppSettings;

mod server;

use server::{ServerConfig, create_server, drain_on_signal};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load_from_iter(std::env::args_os())
        .map_err(|err| std::io::Error::other(format!("failed to load settings: {err}")))?;

    let pool_config =
        PoolConfig::new(settings.database_url()).with_max_size(settings.pool_max_size());
    let pool = DbPool::new(pool_config)
        .await
        .map_err(|err| std::io::Error::other(err.to_string()))?;
    ensure_schema(&pool)
        .await
        .map_err(|err| std::io::Error::other(err.to_string()))?;

    let config = ServerConfig::new(settings.bind_addr(), pool)
        .with_extra_origins(settings.cors_extra_origins());

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), config)?;
    actix_web::rt::spawn(drain_on_signal(health_state, server.handle()));
    server.await?;
    info!("calculator stopped");
    Ok(())
}
