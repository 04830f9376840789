//! Utility functions and helper modules.

pub mod build_info;
pub mod http;
pub mod redact;
pub mod route;

pub use http::*;
pub use redact::redact_url_secrets;
pub use route::*;
