//! Batch weather lookup endpoint.

use crate::{
    error::AppError,
    models::{WeatherBatchRequest, WeatherBatchResponse, WeatherEntry, WeatherResult},
    services::{AppMetrics, LookupService, parse_location_list},
    store::HistoryStore,
};
use actix_web::{Error, HttpRequest, HttpResponse, Result, web};
use paperclip::actix::api_v2_operation;

/// Batch weather endpoint
///
/// Resolves every location in the request and returns one entry per
/// location, in request order. Failed locations carry an `error` field;
/// successful ones are appended to the history table.
#[api_v2_operation(
    summary = "Batch Weather Lookup",
    description = "Accepts {\"cities\": [...]} where each element is a location or several `;`-separated locations. Returns {\"weather_data\": [...]} with one success or error entry per location in input order, each success carrying a comfort index in [0, 1].",
    tags("Weather"),
    responses(
        (status = 200, description = "One entry per location"),
        (status = 400, description = "Bad Request - Malformed body or no locations given"),
        (status = 500, description = "Internal Server Error - Weather API key not configured")
    )
)]
pub async fn get_weather(
    req: HttpRequest,
    body: web::Json<WeatherBatchRequest>,
) -> Result<HttpResponse, Error> {
    let queries = parse_location_list(&body.cities);
    if queries.is_empty() {
        return Err(AppError::NoLocations.into());
    }

    let lookup = req
        .app_data::<web::Data<LookupService>>()
        .ok_or_else(|| AppError::Configuration("API key missing".to_string()))?;

    tracing::info!(locations = queries.len(), "Processing weather batch");
    let entries = lookup.lookup_batch(&queries).await;

    persist_successes(&req, &entries).await;

    Ok(HttpResponse::Ok().json(WeatherBatchResponse {
        weather_data: entries,
    }))
}

/// Append successful entries to history; a failed write is logged, never returned
async fn persist_successes(req: &HttpRequest, entries: &[WeatherEntry]) {
    let successes: Vec<WeatherResult> = entries
        .iter()
        .filter_map(WeatherEntry::as_success)
        .cloned()
        .collect();

    if successes.is_empty() {
        tracing::info!("No valid weather records in this batch to store");
        return;
    }

    let Some(store) = req.app_data::<web::Data<HistoryStore>>() else {
        tracing::warn!("History store not configured; skipping persistence");
        return;
    };
    let store = store.get_ref().clone();

    match web::block(move || store.record_all(successes.iter())).await {
        Ok(Ok(stored)) => {
            tracing::info!(stored, "Stored weather records");
            if let Some(metrics) = req.app_data::<web::Data<AppMetrics>>() {
                metrics.record_history_written(stored);
            }
        }
        Ok(Err(e)) => tracing::error!(error = %e, "Failed to store weather records"),
        Err(e) => tracing::error!(error = %e, "History write task failed"),
    }
}
