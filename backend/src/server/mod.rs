//! HTTP server assembly: routing, state wiring, and static assets.

mod config;

pub use config::ServerConfig;

use std::future::Future;
use std::path::PathBuf;
use std::sync::Arc;

use actix_files::{Files, NamedFile};
use actix_web::dev::{Server, ServerHandle};
use actix_web::{App, HttpServer, web};
use tracing::warn;

use fitlog_backend::domain::ports::{InMemoryUserRepository, UserRepository};
use fitlog_backend::inbound::http::error::{form_config, json_config};
use fitlog_backend::inbound::http::exercises::add_exercise;
use fitlog_backend::inbound::http::files::analyse_file;
use fitlog_backend::inbound::http::health::{HealthState, live, ready};
use fitlog_backend::inbound::http::logs::get_logs;
use fitlog_backend::inbound::http::state::HttpState;
use fitlog_backend::inbound::http::users::{create_user, list_users};
use fitlog_backend::outbound::persistence::DieselUserRepository;
#[cfg(debug_assertions)]
use fitlog_backend::ApiDoc;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

/// Location of the static asset directory, shared with the index handler.
#[derive(Clone)]
struct StaticAssets {
    public_dir: PathBuf,
}

/// Serve the landing page from the configured public directory.
async fn index(assets: web::Data<StaticAssets>) -> actix_web::Result<NamedFile> {
    Ok(NamedFile::open_async(assets.public_dir.join("index.html")).await?)
}

/// Select the user repository backing the API.
///
/// A configured database pool yields the Diesel adapter; otherwise the
/// in-memory repository keeps the service usable without PostgreSQL.
fn build_user_repository(server_config: &ServerConfig) -> Arc<dyn UserRepository> {
    match &server_config.db_pool {
        Some(pool) => Arc::new(DieselUserRepository::new(pool.clone())),
        None => {
            warn!("no database configured; user data will not survive restarts");
            Arc::new(InMemoryUserRepository::default())
        }
    }
}

/// Create the HTTP server and mark the service ready once it is bound.
pub fn create_server(
    health_state: web::Data<HealthState>,
    server_config: ServerConfig,
) -> std::io::Result<Server> {
    let http_state = web::Data::new(HttpState::new(build_user_repository(&server_config)));
    let assets = web::Data::new(StaticAssets {
        public_dir: server_config.public_dir.clone(),
    });
    let bind_addr = server_config.bind_addr;
    let app_health_state = health_state.clone();

    let server = HttpServer::new(move || {
        let public_dir = assets.public_dir.clone();
        let app = App::new()
            .app_data(http_state.clone())
            .app_data(app_health_state.clone())
            .app_data(assets.clone())
            .app_data(json_config())
            .app_data(form_config())
            .service(create_user)
            .service(list_users)
            .service(add_exercise)
            .service(get_logs)
            .service(analyse_file)
            .service(ready)
            .service(live)
            .service(Files::new("/public", public_dir))
            .route("/", web::get().to(index));

        #[cfg(debug_assertions)]
        let app = app.service(
            SwaggerUi::new("/docs/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
        );

        app
    })
    // Termination is handled by the drain watcher, not actix's default hook.
    .disable_signals()
    .bind(bind_addr)?
    .run();

    health_state.mark_ready();
    Ok(server)
}

/// Once `termination` resolves, flag the service as draining so liveness
/// probes report 503, then stop the server gracefully.
pub(crate) async fn drain_then_stop(
    health_state: web::Data<HealthState>,
    handle: ServerHandle,
    termination: impl Future<Output = ()>,
) {
    termination.await;
    warn!("termination signal received; draining");
    health_state.mark_unhealthy();
    handle.stop(true).await;
}

/// Resolve when the process receives SIGTERM or ctrl-c.
pub(crate) async fn wait_for_termination() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                tokio::select! {
                    _ = tokio::signal::ctrl_c() => {}
                    _ = sigterm.recv() => {}
                }
            }
            Err(error) => {
                tracing::error!(%error, "failed to install SIGTERM handler");
                if let Err(error) = tokio::signal::ctrl_c().await {
                    tracing::error!(%error, "failed to listen for ctrl-c");
                }
            }
        }
    }
    #[cfg(not(unix))]
    {
        if let Err(error) = tokio::signal::ctrl_c().await {
            tracing::error!(%error, "failed to listen for ctrl-c");
        }
    }
}
