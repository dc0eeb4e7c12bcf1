//! Server construction and middleware wiring.

mod config;

pub use config::ServerConfig;

use std::sync::Arc;

use actix_web::dev::{Server, ServerHandle, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::{info, warn};

use area_calculator::Trace;
#[cfg(debug_assertions)]
use area_calculator::doc::ApiDoc;
use area_calculator::inbound::http::configure_api;
use area_calculator::inbound::http::cors::cors_policy;
use area_calculator::inbound::http::health::{HealthState, live, ready, root};
use area_calculator::inbound::http::state::HttpState;
use area_calculator::outbound::persistence::DieselCalculationRepository;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[derive(Clone)]
struct AppDependencies {
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
    allowed_origins: Arc<[String]>,
}

fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        health_state,
        http_state,
        allowed_origins,
    } = deps;

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(cors_policy(&allowed_origins))
        .wrap(Trace)
        .service(web::scope("/api").configure(configure_api))
        .service(root)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(
        SwaggerUi::new("/docs/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
    );

    app
}

/// Construct an Actix HTTP server using the provided health state and
/// configuration.
///
/// Readiness is flipped once the listener is bound; callers must have ensured
/// the schema beforehand. Actix's own signal handling is disabled, so pair the
/// server with [`drain_on_signal`].
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let ServerConfig {
        bind_addr,
        allowed_origins,
        db_pool,
    } = config;

    let repository = Arc::new(DieselCalculationRepository::new(db_pool));
    let http_state = web::Data::new(HttpState::from_repository(repository));
    let allowed_origins: Arc<[String]> = allowed_origins.into();
    let server_health_state = health_state.clone();

    let server = HttpServer::new(move || {
        build_app(AppDependencies {
            health_state: server_health_state.clone(),
            http_state: http_state.clone(),
            allowed_origins: Arc::clone(&allowed_origins),
        })
    })
    .disable_signals()
    .bind(bind_addr)?
    .run();

    info!(%bind_addr, "calculator listening");
    health_state.mark_ready();
    Ok(server)
}

async fn shutdown_signal() -> std::io::Result<()> {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};

        let mut terminate = signal(SignalKind::terminate())?;
        tokio::select! {
            interrupted = tokio::signal::ctrl_c() => interrupted,
            _ = terminate.recv() => Ok(()),
        }
    }
    #[cfg(not(unix))]
    {
        tokio::signal::ctrl_c().await
    }
}

async fn drain(health_state: &HealthState, handle: &ServerHandle) {
    health_state.mark_unhealthy();
    info!("draining connections");
    handle.stop(true).await;
}

/// Wait for SIGINT or SIGTERM, fail liveness, then stop gracefully.
pub async fn drain_on_signal(health_state: web::Data<HealthState>, handle: ServerHandle) {
    if let Err(err) = shutdown_signal().await {
        warn!(error = %err, "shutdown signal listener failed; stopping now");
    }
    drain(&health_state, &handle).await;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_web::test]
    async fn drain_fails_liveness_and_stops_the_server() {
        let health_state = HealthState::new();
        health_state.mark_ready();
        let server = HttpServer::new(App::new)
            .workers(1)
            .disable_signals()
            .bind(("127.0.0.1", 0))
            .expect("bind ephemeral port")
            .run();
        let handle = server.handle();
        let running = actix_web::rt::spawn(server);

        drain(&health_state, &handle).await;

        assert!(!health_state.is_alive());
        running
            .await
            .expect("server task joins")
            .expect("server stops cleanly");
    }
}
