//! Backend entry-point: loads settings, wires storage, and serves the note
//! editor, profile and health endpoints.

mod server;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use notes_backend::inbound::http::health::HealthState;
use notes_backend::outbound::persistence::{DbPool, PoolConfig, apply_migrations};
use notes_backend::settings::ServerSettings;
use server::{ServerConfig, create_server};

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

    let settings = ServerSettings::load_from_iter(std::env::args_os())
        .map_err(|e| std::io::Error::other(format!("failed to load settings: {e}")))?;
    let bind_addr = settings.bind_addr().map_err(std::io::Error::other)?;
    let mut config = ServerConfig::new(bind_addr).with_demo_data(settings.seed_demo_data);

    if let Some(database_url) = settings.database_url() {
        if settings.run_migrations {
            apply_migrations(database_url.to_owned())
                .await
                .map_err(std::io::Error::other)?;
        }
        let max_size = settings
            .db_max_connections()
            .map_err(std::io::Error::other)?;
        let pool = DbPool::new(PoolConfig::new(database_url).with_max_size(max_size))
            .await
            .map_err(|e| std::io::Error::other(format!("failed to build pool: {e}")))?;
        config = config.with_db_pool(pool);
    } else {
        warn!("no database URL configured; notes are kept in memory only");
    }

    let health_state = web::Data::new(HealthState::new());
    info!(%bind_addr, "starting notes backend");
    create_server(health_state, config)?.await
}
