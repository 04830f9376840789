//! Lookup history endpoints.

use crate::{
    config::{AppConfig, DEFAULT_HISTORY_LIMIT},
    error::AppError,
    models::{HistoryQuery, HistoryRecord},
    store::HistoryStore,
    views::render_history,
};
use actix_web::{Error, HttpRequest, HttpResponse, Result, web};
use paperclip::actix::api_v2_operation;

fn configured_limit(req: &HttpRequest) -> usize {
    req.app_data::<web::Data<AppConfig>>()
        .map(|config| config.history_limit)
        .unwrap_or(DEFAULT_HISTORY_LIMIT)
}

async fn load_recent(req: &HttpRequest, limit: usize) -> Result<Vec<HistoryRecord>, AppError> {
    let store = req
        .app_data::<web::Data<HistoryStore>>()
        .ok_or_else(|| AppError::Configuration("history store unavailable".to_string()))?
        .get_ref()
        .clone();

    Ok(web::block(move || store.recent(limit)).await??)
}

/// History page
///
/// Renders the most recent lookups as an HTML table, newest first.
#[api_v2_operation(
    summary = "Weather History Page",
    description = "Renders the most recent weather lookups (50 by default) as an HTML table.",
    tags("History"),
    responses(
        (status = 200, description = "HTML table", content_type = "text/html"),
        (status = 500, description = "History could not be read")
    )
)]
pub async fn history(req: HttpRequest) -> Result<HttpResponse, Error> {
    let records = load_recent(&req, configured_limit(&req)).await?;

    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(render_history(&records)))
}

/// History as JSON
#[api_v2_operation(
    summary = "Weather History (JSON)",
    description = "Returns the most recent weather lookups, newest first. `limit` defaults to the configured history size and is clamped to 1-500.",
    tags("History"),
    parameters(
        ("limit" = Option<usize>, Query, description = "Number of rows to return"),
    ),
    responses(
        (status = 200, description = "Array of history records"),
        (status = 500, description = "History could not be read")
    )
)]
pub async fn history_json(
    req: HttpRequest,
    query: web::Query<HistoryQuery>,
) -> Result<HttpResponse, Error> {
    let limit = query.effective_limit(configured_limit(&req));
    let records = load_recent(&req, limit).await?;

    Ok(HttpResponse::Ok().json(records))
}
