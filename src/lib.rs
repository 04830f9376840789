//! Comfort Weather - current weather and an outdoor comfort score per location
//!
//! An Actix Web and Paperclip service that:
//! - parses `;`-separated location lists
//! - geocodes each location and fetches its current weather from OpenWeatherMap
//! - scores every result with a comfort index in [0, 1]
//! - keeps an append-only SQLite history of successful lookups
//!
//! ## Architecture
//!
//! The codebase is organized into focused modules:
//! - `models/` - Data structures and request/response models
//! - `handlers/` - HTTP request handlers and the app factory
//! - `middleware/` - Request IDs, metrics, and security headers
//! - `services/` - Parsing, comfort scoring, lookups, and the weather provider
//! - `store/` - SQLite history persistence
//! - `views/` - Server-rendered HTML pages
//! - `config/` - Configuration structures and environment loading
//! - `utils/` - Utility functions and helpers
//!
//! ## Quick Start
//!
//! ```no_run
//! use comfort_weather::{AppState, create_app};
//! use actix_web::HttpServer;
//!
//! #[actix_web::main]
//! async fn main() -> std::io::Result<()> {
//!     let state = AppState::from_env().expect("startup");
//!     HttpServer::new(move || create_app(state.clone()))
//!         .bind("127.0.0.1:8080")?
//!         .run()
//!         .await
//! }
//! ```

pub mod app;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod store;
pub mod telemetry;
pub mod utils;
pub mod views;

// Re-export commonly used types and functions for convenience
pub use app::{AppState, StartupError};
pub use config::{AppConfig, MetricsConfig, OpenWeatherConfig, SecurityHeadersConfig};
pub use error::AppError;
pub use handlers::{
    create_app, create_openapi_spec, get_metrics, get_weather, health, history, history_json,
    index, version,
};
pub use middleware::{MetricsMiddleware, RequestIdMiddleware, SecurityHeaders};
pub use models::{
    ComfortLevel, HealthResponse, HistoryRecord, LocationQuery, VersionResponse,
    WeatherBatchRequest, WeatherBatchResponse, WeatherEntry, WeatherResult,
};
pub use services::{
    AppMetrics, LookupError, LookupService, OpenWeatherClient, ProviderError, UpstreamClient,
    WeatherProvider, comfort_index, parse_locations,
};
pub use store::{HistoryStore, StoreError};
pub use utils::{extract_client_ip, extract_route_pattern, extract_user_agent};
