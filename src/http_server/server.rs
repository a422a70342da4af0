//! # HTTP Server
//!
//! Serves the screening form, the JSON screening API, and health/metrics.

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::{http::HeaderValue, Router};
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use super::config::HttpServerConfig;
use super::observability_routes::{health_routes, observability_routes, ObservabilityState};
use super::screening_routes::{screening_routes, ScreeningState};
use crate::observability::{log_event_with_fields, Event};
use crate::screening::ScreeningHandler;

/// HTTP Server for the screening form
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a server around a screening handler
    pub fn new(config: HttpServerConfig, handler: ScreeningHandler) -> Self {
        let router = Self::build_router(&config, handler);
        Self { config, router }
    }

    /// Build the combined router with all endpoints
    fn build_router(config: &HttpServerConfig, handler: ScreeningHandler) -> Router {
        let observability_state = Arc::new(ObservabilityState {
            metrics: Arc::clone(handler.metrics()),
            model_name: handler.scorer().artifact().model_name.clone(),
        });
        let screening_state = Arc::new(ScreeningState::new(handler));

        let cors = if config.cors_origins.is_empty() {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            // Entries are checked by HttpServerConfig::validate at config load
            let origins: Vec<HeaderValue> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        Router::new()
            .merge(screening_routes(screening_state))
            .merge(health_routes(observability_state.clone()))
            .nest("/observability", observability_routes(observability_state))
            .layer(cors)
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind and serve until the listener fails
    pub async fn start(self) -> Result<(), io::Error> {
        let addr: SocketAddr = self
            .config
            .socket_addr()
            .parse()
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, format!("{}", e)))?;

        let listener = TcpListener::bind(addr).await?;
        let url = format!("http://{}", addr);
        log_event_with_fields(
            Event::Serving,
            &[("addr", addr.to_string().as_str()), ("url", url.as_str())],
        );

        axum::serve(listener, self.router).await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::FEATURE_NAMES;
    use crate::model::{ClassifierArtifact, ScalerParams};

    fn handler() -> ScreeningHandler {
        let artifact = ClassifierArtifact::new(
            "unit",
            FEATURE_NAMES.iter().map(|s| s.to_string()).collect(),
            ScalerParams {
                mean: vec![0.0; 5],
                scale: vec![1.0; 5],
            },
            vec![0.0; 5],
            0.0,
            0.5,
        )
        .unwrap();
        ScreeningHandler::from_artifact(Arc::new(artifact))
    }

    #[test]
    fn test_server_creation() {
        let server = HttpServer::new(HttpServerConfig::default(), handler());
        assert_eq!(server.socket_addr(), "127.0.0.1:8501");
    }

    #[test]
    fn test_router_builds_with_cors_list() {
        let config = HttpServerConfig {
            cors_origins: vec!["http://localhost:3000".to_string()],
            ..HttpServerConfig::with_port(8080)
        };
        let _router = HttpServer::new(config, handler()).router();
    }
}
