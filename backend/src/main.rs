//! Service entry point: logging, configuration, and server start-up.

mod server;

use actix_web::web;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use fitlog_backend::inbound::http::health::HealthState;
use fitlog_backend::outbound::persistence::PoolConfig;
use server::{ServerConfig, create_server, drain_then_stop, wait_for_termination};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
        .map_err(|e| std::io::Error::other(format!("failed to initialise tracing: {e}")))?;

    let mut server_config = ServerConfig::from_env()?;
    match std::env::var("FITLOG_DATABASE_URL") {
        Ok(database_url) => {
            let pool = PoolConfig::new(database_url)
                .build()
                .await
                .map_err(|e| std::io::Error::other(e.to_string()))?;
            server_config = server_config.with_db_pool(pool);
        }
        Err(_) => warn!("FITLOG_DATABASE_URL not set; falling back to the in-memory store"),
    }

    let bind_addr = server_config.bind_addr();
    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), server_config)?;
    tokio::spawn(drain_then_stop(
        health_state,
        server.handle(),
        wait_for_termination(),
    ));
    info!(%bind_addr, "server started");
    server.await
}
