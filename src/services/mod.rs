//! Business logic and service layer modules.
//!
//! Input parsing, comfort scoring, location lookup, the OpenWeatherMap
//! adapter and its HTTP client, and metrics collection.

pub mod comfort;
pub mod geocode_fallback;
pub mod location_parser;
pub mod lookup;
pub mod metrics;
pub mod openweather;
pub mod upstream_client;
pub mod weather_provider;

pub use comfort::{comfort_index, evaluate};
pub use location_parser::{parse_location_list, parse_locations};
pub use lookup::{LookupError, LookupService};
pub use metrics::AppMetrics;
pub use openweather::OpenWeatherClient;
pub use upstream_client::{
    RetryConfig, UpstreamClient, UpstreamClientConfig, UpstreamError, UpstreamMetrics,
};
pub use weather_provider::{ProviderError, WeatherProvider};
