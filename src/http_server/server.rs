//! HTTP server
//!
//! Combines the health and dashboard routers behind CORS and serves them
//! with axum.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde::Serialize;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::observability::Logger;
use crate::store::DashboardStore;

use super::config::HttpServerConfig;
use super::dashboard_routes::{dashboard_routes, DashboardState};

/// HTTP server for the dashboard API
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Server with default configuration
    pub fn new(store: DashboardStore) -> Self {
        Self::with_config(HttpServerConfig::default(), store)
    }

    /// Server with explicit configuration
    pub fn with_config(config: HttpServerConfig, store: DashboardStore) -> Self {
        let router = Self::build_router(&config, store);
        Self { config, router }
    }

    /// Builds the combined router
    fn build_router(config: &HttpServerConfig, store: DashboardStore) -> Router {
        let state = Arc::new(DashboardState::new(store));

        let cors = if config.cors_origins.is_empty() {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            let origins: Vec<_> = config
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
            .route("/health", get(health_handler))
            .nest("/api/dashboard", dashboard_routes(state))
            .layer(cors)
    }

    /// Socket address the server will bind to
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// The router (for tests)
    pub fn router(self) -> Router {
        self.router
    }

    /// Binds and serves until the process exits
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr: SocketAddr = self
            .config
            .socket_addr()
            .parse()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, format!("{}", e)))?;

        let listener = TcpListener::bind(addr).await?;
        Logger::info("http_server_started", &[("addr", addr.to_string())]);

        axum::serve(listener, self.router).await?;

        Ok(())
    }
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Health check handler
async fn health_handler() -> impl IntoResponse {
    let response = HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    (StatusCode::OK, Json(response))
}
