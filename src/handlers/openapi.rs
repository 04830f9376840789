//! OpenAPI specification generation and app factory.

use crate::{
    app::AppState,
    error::AppError,
    handlers::{get_metrics, get_weather, health, history, history_json, index, version},
    middleware::{MetricsMiddleware, RequestIdMiddleware, SecurityHeaders},
};
use actix_web::App;
use paperclip::actix::{OpenApiExt, web};
use paperclip::v2::models::{DefaultApiRaw, Info};

/// Creates the shared OpenAPI specification for the API
pub fn create_openapi_spec() -> DefaultApiRaw {
    DefaultApiRaw {
        info: Info {
            title: "Comfort Weather".into(),
            version: env!("CARGO_PKG_VERSION").into(),
            description: Some(
                "Looks up current weather for one or more locations and scores how comfortable it is outside.\n\n\
                ## Weather lookups\n\
                `POST /get_weather` (alias `POST /api/weather`) accepts `{\"cities\": [\"Boston,MA; London,UK\"]}`.\n\
                Each element may hold several locations separated by `;`. Blank segments are ignored.\n\
                \n\
                The response is `{\"weather_data\": [...]}` with one entry per location in input order.\n\
                A failed location carries `original_input` and `error`; the rest of the batch is unaffected.\n\
                \n\
                ## Comfort index\n\
                Every successful entry has a `comfort_index` in [0, 1] and a `comfort_level`:\n\
                - `very comfortable` above 0.7\n\
                - `moderately comfortable` above 0.4\n\
                - `less comfortable` otherwise\n\
                \n\
                ## History\n\
                Successful lookups are stored. `GET /history` renders the latest 50 as HTML, \
                `GET /api/history?limit=N` returns them as JSON, newest first.\n\
                \n\
                **Configuration:**\n\
                - `OPENWEATHER_API_KEY` is required for lookups\n\
                - `DATABASE_PATH` sets the SQLite file (default `weather_data.db`)\n\
                - `BIND_ADDRESS` sets the listen address (default `127.0.0.1:8080`)".into()
            ),
            ..Default::default()
        },
        ..Default::default()
    }
}

fn json_error_handler(
    err: actix_web::error::JsonPayloadError,
    _req: &actix_web::HttpRequest,
) -> actix_web::Error {
    AppError::InvalidRequestBody(err.to_string()).into()
}

/// Creates the application with its middleware, app data, and routes
///
/// Used by `main` for every worker and by the integration tests.
pub fn create_app(
    state: AppState,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppState {
        config,
        history: store,
        lookup,
        metrics,
        metrics_config,
        security,
    } = state;

    let mut app = App::new()
        .wrap(SecurityHeaders::new(security))
        .wrap(RequestIdMiddleware)
        .wrap(MetricsMiddleware)
        .wrap_api_with_spec(create_openapi_spec())
        .app_data(actix_web::web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::Data::new(config))
        .app_data(web::Data::new(store))
        .app_data(web::Data::new(metrics_config))
        .app_data(web::Data::new(metrics));

    if let Some(lookup) = lookup {
        app = app.app_data(web::Data::new(lookup));
    }

    app.service(web::resource("/").route(web::get().to(index)))
        .service(web::resource("/get_weather").route(web::post().to(get_weather)))
        .service(web::resource("/api/weather").route(web::post().to(get_weather)))
        .service(web::resource("/history").route(web::get().to(history)))
        .service(web::resource("/api/history").route(web::get().to(history_json)))
        .service(web::resource("/api/health").route(web::get().to(health)))
        .service(web::resource("/api/version").route(web::get().to(version)))
        .service(web::resource("/api/metrics").route(web::get().to(get_metrics)))
        .with_json_spec_at("/api/spec/v2")
        .build()
}
