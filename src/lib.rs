//! apidash - Self-hostable API analytics dashboard backend
//!
//! A flat-file inventory of monitored APIs with a filtering, sorting and
//! pagination query engine, served over HTTP.

pub mod cli;
pub mod engine;
pub mod http_server;
pub mod model;
pub mod observability;
pub mod store;
