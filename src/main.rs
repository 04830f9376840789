use actix_web::HttpServer;
use comfort_weather::{AppState, create_app, telemetry};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    let state = AppState::from_env().map_err(|e| {
        tracing::error!(error = %e, "Startup failed");
        std::io::Error::other(e.to_string())
    })?;

    let bind_address = state.config.bind_address.clone();
    tracing::info!(address = %bind_address, "Server running at http://{bind_address}");

    HttpServer::new(move || create_app(state.clone()))
        .bind(&bind_address)?
        .run()
        .await
}
