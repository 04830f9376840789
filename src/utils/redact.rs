//! Redaction of credentials before URLs reach the logs.

use regex::Regex;
use std::sync::LazyLock;

static SECRET_QUERY_PARAM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)([?&](?:appid|api_?key|key|token)=)[^&#]*").expect("valid redaction regex")
});

/// Replace the value of credential-like query parameters with `[REDACTED]`
pub fn redact_url_secrets(url: &str) -> String {
    SECRET_QUERY_PARAM
        .replace_all(url, "${1}[REDACTED]")
        .into_owned()
}
