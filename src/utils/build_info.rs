//! Build metadata emitted by `build.rs`.

pub const PACKAGE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Short git commit, or "unknown" when built outside a repository
pub fn git_sha() -> &'static str {
    option_env!("VERGEN_GIT_SHA").unwrap_or("unknown")
}

pub fn build_timestamp() -> &'static str {
    option_env!("VERGEN_BUILD_TIMESTAMP").unwrap_or("unknown")
}
