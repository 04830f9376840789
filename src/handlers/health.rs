//! Health check endpoint handler.

use crate::{models::HealthResponse, store::HistoryStore};
use actix_web::{Error, HttpRequest, Result, web};
use paperclip::actix::api_v2_operation;

/// Health check endpoint
///
/// Reports "healthy" while the history store answers, "degraded" otherwise.
#[api_v2_operation(
    summary = "Health Check Endpoint",
    description = "Returns the current health status of the service in JSON format.",
    tags("Health"),
    responses(
        (status = 200, description = "Successful response", body = HealthResponse)
    )
)]
pub async fn health(req: HttpRequest) -> Result<web::Json<HealthResponse>, Error> {
    let store_ok = match req.app_data::<web::Data<HistoryStore>>() {
        Some(store) => {
            let store = store.get_ref().clone();
            matches!(web::block(move || store.ping()).await, Ok(Ok(())))
        }
        None => true,
    };

    let status = if store_ok { "healthy" } else { "degraded" };
    if !store_ok {
        tracing::warn!("Health check: history store unavailable");
    }

    Ok(web::Json(HealthResponse {
        status: status.to_string(),
    }))
}
