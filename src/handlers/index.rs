//! Lookup page handler.

use crate::views::INDEX_HTML;
use actix_web::HttpResponse;
use paperclip::actix::api_v2_operation;

#[api_v2_operation(
    summary = "Lookup Page",
    description = "HTML page for entering `;`-separated locations; results are shown as cards.",
    tags("Pages"),
    responses(
        (status = 200, description = "HTML page", content_type = "text/html")
    )
)]
pub async fn index() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(INDEX_HTML)
}
