//! # HTTP Server Module
//!
//! Browser form and JSON API over the screening handler.
//!
//! # Endpoints
//!
//! - `GET /`, `POST /` - Screening form and result page
//! - `POST /api/screen` - JSON screening
//! - `/health` - Health check
//! - `/observability/*` - Health and metrics

pub mod config;
pub mod observability_routes;
pub mod page;
pub mod screening_routes;
pub mod server;

pub use config::HttpServerConfig;
pub use server::HttpServer;
