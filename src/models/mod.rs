//! Data models and schemas for the weather service.
//!
//! Request/response bodies, provider readings, and persisted history rows.

pub mod api;
pub mod history;
pub mod location;
pub mod weather;

pub use api::*;
pub use history::*;
pub use location::*;
pub use weather::*;
