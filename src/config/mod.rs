//! Configuration structures and loading utilities.
//!
//! Every structure here is loaded from environment variables with a
//! `from_env()` constructor and falls back to sensible defaults.

pub mod app;
pub mod metrics;
pub mod openweather;
pub mod security;
pub mod upstream;

pub use app::*;
pub use metrics::*;
pub use openweather::*;
pub use security::*;

// Serialises tests that modify process environment variables
#[cfg(test)]
pub(crate) static ENV_MUTEX: std::sync::Mutex<()> = std::sync::Mutex::new(());
