//! Version information endpoint handler.

use crate::{models::VersionResponse, utils::build_info};
use actix_web::{Error, Result, web};
use paperclip::actix::api_v2_operation;

/// Version information endpoint
///
/// Returns the package version, commit hash, and build time.
#[api_v2_operation(
    summary = "Version Information Endpoint",
    description = "Returns the current service version, commit hash, and build time.",
    tags("Version"),
    responses(
        (status = 200, description = "Successful response", body = VersionResponse)
    )
)]
pub async fn version() -> Result<web::Json<VersionResponse>, Error> {
    Ok(web::Json(VersionResponse {
        version: build_info::PACKAGE_VERSION.to_string(),
        commit: build_info::git_sha().to_string(),
        build_time: build_info::build_timestamp().to_string(),
    }))
}
