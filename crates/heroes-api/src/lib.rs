pub mod error;
pub mod handlers;
pub mod models;

use axum::{
    http::{header, HeaderValue, Method},
    routing::{delete, get, post},
    Router,
};
use heroes_core::Registry;
use std::{net::SocketAddr, sync::Arc};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Application state shared across handlers
pub struct AppState {
    pub registry: Registry,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Heroes API",
        version = "0.1.0",
        description = "REST API for a registry of heroes, their teams and missions"
    ),
    paths(
        handlers::health_check,
        handlers::create_team,
        handlers::list_teams,
        handlers::get_team,
        handlers::update_team,
        handlers::delete_team,
        handlers::list_team_heroes,
        handlers::remove_team_hero,
        handlers::create_hero,
        handlers::list_heroes,
        handlers::get_hero,
        handlers::update_hero,
        handlers::delete_hero,
        handlers::list_hero_missions,
        handlers::create_mission,
        handlers::list_missions,
        handlers::get_mission,
        handlers::update_mission,
        handlers::delete_mission,
        handlers::list_mission_heroes,
        handlers::add_mission_hero,
        handlers::remove_mission_hero,
    ),
    components(
        schemas(
            models::Team,
            models::Hero,
            models::Mission,
            models::HealthResponse,
            models::ErrorResponse,
            heroes_core::payload::TeamCreate,
            heroes_core::payload::TeamUpdate,
            heroes_core::payload::HeroCreate,
            heroes_core::payload::HeroUpdate,
            heroes_core::payload::MissionCreate,
            heroes_core::payload::MissionUpdate,
        )
    ),
    tags(
        (name = "teams", description = "Team management endpoints"),
        (name = "heroes", description = "Hero management endpoints"),
        (name = "missions", description = "Mission management and assignment endpoints"),
        (name = "system", description = "System health and info endpoints")
    )
)]
pub struct ApiDoc;

/// API server configuration
#[derive(Debug, Clone)]
pub struct ApiServerConfig {
    /// Address to bind the API server
    pub bind_addr: SocketAddr,
    /// Allow cross-origin requests from local development origins
    pub enable_cors: bool,
}

impl Default for ApiServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8000)),
            enable_cors: true,
        }
    }
}

/// API Server
pub struct ApiServer {
    config: ApiServerConfig,
    state: Arc<AppState>,
}

impl ApiServer {
    /// Create a new API server
    pub fn new(config: ApiServerConfig, registry: Registry) -> Self {
        let state = Arc::new(AppState { registry });
        Self { config, state }
    }

    /// Build the router with all routes
    pub fn build_router(&self) -> Router {
        let api_doc = ApiDoc::openapi();

        let api_router = Router::new()
            .route("/health", get(handlers::health_check))
            .route(
                "/teams",
                get(handlers::list_teams).post(handlers::create_team),
            )
            .route(
                "/teams/{id}",
                get(handlers::get_team)
                    .put(handlers::update_team)
                    .delete(handlers::delete_team),
            )
            .route("/teams/{id}/heroes", get(handlers::list_team_heroes))
            .route(
                "/teams/{id}/heroes/{hero_id}",
                delete(handlers::remove_team_hero),
            )
            .route(
                "/heroes",
                get(handlers::list_heroes).post(handlers::create_hero),
            )
            .route(
                "/heroes/{id}",
                get(handlers::get_hero)
                    .put(handlers::update_hero)
                    .delete(handlers::delete_hero),
            )
            .route("/heroes/{id}/missions", get(handlers::list_hero_missions))
            .route(
                "/missions",
                get(handlers::list_missions).post(handlers::create_mission),
            )
            .route(
                "/missions/{id}",
                get(handlers::get_mission)
                    .put(handlers::update_mission)
                    .delete(handlers::delete_mission),
            )
            .route("/missions/{id}/heroes", get(handlers::list_mission_heroes))
            .route(
                "/missions/{id}/heroes/{hero_id}",
                post(handlers::add_mission_hero).delete(handlers::remove_mission_hero),
            )
            .with_state(self.state.clone());

        let mut router = Router::new()
            .merge(SwaggerUi::new("/swagger-ui").url("/openapi.json", api_doc))
            .merge(api_router)
            .layer(TraceLayer::new_for_http());

        if self.config.enable_cors {
            router = router.layer(local_cors());
        }

        router
    }

    /// Start the API server and run until Ctrl+C
    pub async fn start(self) -> Result<(), anyhow::Error> {
        let router = self.build_router();

        info!("Starting API server on {}", self.config.bind_addr);
        info!("OpenAPI spec: http://{}/openapi.json", self.config.bind_addr);
        info!("Swagger UI: http://{}/swagger-ui", self.config.bind_addr);

        let listener = tokio::net::TcpListener::bind(self.config.bind_addr).await?;

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

        info!("API server stopped");
        Ok(())
    }
}

/// Convenience function to create and start an API server
pub async fn run_api_server(bind_addr: SocketAddr, registry: Registry) -> Result<(), anyhow::Error> {
    let config = ApiServerConfig {
        bind_addr,
        ..ApiServerConfig::default()
    };

    ApiServer::new(config, registry).start().await
}

fn local_cors() -> CorsLayer {
    use tower_http::cors::AllowOrigin;

    CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE])
        .allow_origin(AllowOrigin::predicate(|origin: &HeaderValue, _| {
            let origin_str = origin.to_str().unwrap_or("");
            origin_str.starts_with("http://localhost:")
                || origin_str.starts_with("http://127.0.0.1:")
                || origin_str.starts_with("https://localhost:")
                || origin_str.starts_with("https://127.0.0.1:")
        }))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_generation() {
        let doc = ApiDoc::openapi();
        let json = doc.to_json().expect("openapi serializes");

        assert!(json.contains("/missions/{id}/heroes/{hero_id}"));
        assert!(json.contains("HeroUpdate"));
    }

    #[test]
    fn test_default_config() {
        let config = ApiServerConfig::default();
        assert_eq!(config.bind_addr.port(), 8000);
        assert!(config.enable_cors);
    }
}
