//! HTTP boundary for the dashboard API
//!
//! Decodes query parameters into engine descriptors, exposes CRUD over
//! the API inventory, and serves the dashboard summary document.

pub mod config;
pub mod dashboard_routes;
pub mod errors;
pub mod server;

pub use config::HttpServerConfig;
pub use dashboard_routes::{dashboard_routes, DashboardState};
pub use errors::{ApiError, ApiResult};
pub use server::HttpServer;
