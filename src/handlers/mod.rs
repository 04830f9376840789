//! HTTP request handlers for API endpoints and pages.
//!
//! This module contains all the HTTP request handlers that process
//! incoming requests and generate responses.

pub mod health;
pub mod history;
pub mod index;
pub mod metrics;
pub mod openapi;
pub mod version;
pub mod weather;

pub use health::*;
pub use history::*;
pub use index::*;
pub use metrics::*;
pub use openapi::*;
pub use version::*;
pub use weather::*;
