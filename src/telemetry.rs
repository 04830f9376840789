//! Tracing subscriber setup.
//!
//! `RUST_LOG` selects the filter (default `info`). Output is JSON lines
//! unless `LOG_FORMAT=pretty`.

use std::env;
use tracing_subscriber::EnvFilter;

pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let json = env::var("LOG_FORMAT")
        .map(|v| !v.eq_ignore_ascii_case("pretty"))
        .unwrap_or(true);

    let result = if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .with_current_span(false)
            .try_init()
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).try_init()
    };

    if let Err(e) = result {
        eprintln!("Tracing subscriber already installed: {e}");
    }
}
