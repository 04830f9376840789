//! Route labels for metrics.

use actix_web::HttpRequest;

/// Registered route pattern for the request, so unknown paths share one label
pub fn extract_route_pattern(req: &HttpRequest) -> String {
    req.match_pattern()
        .unwrap_or_else(|| "/unmatched".to_string())
}
