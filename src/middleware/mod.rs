//! Custom middleware implementations.
//!
//! Request IDs with request logging, metrics collection, and security headers.

pub mod metrics;
pub mod request_id;
pub mod security;

pub use metrics::*;
pub use request_id::*;
pub use security::*;
