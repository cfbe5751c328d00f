use actix_web::{web, App, HttpServer};
use matchplay::config::db::DbProfile;
use matchplay::infra::state::build_state;
use matchplay::middleware::{RequestTrace, StructuredLogger, TraceSpan};
use matchplay::routes;

mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    // Environment variables must be set by the runtime environment
    // (docker env_file, or `set -a; . ./.env; set +a` locally).
    let host = std::env::var("BACKEND_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = match std::env::var("BACKEND_PORT") {
        Ok(raw) => match raw.parse::<u16>() {
            Ok(port) => port,
            Err(_) => {
                tracing::error!(value = %raw, "BACKEND_PORT must be a valid port number");
                std::process::exit(1);
            }
        },
        Err(_) => 3001,
    };

    let app_state = match build_state().with_db(DbProfile::Prod).build().await {
        Ok(state) => state,
        Err(e) => {
            tracing::error!(error = %e, "Failed to build application state");
            std::process::exit(1);
        }
    };

    tracing::info!(%host, port, "Starting matchplay backend");

    let data = web::Data::new(app_state);

    HttpServer::new(move || {
        App::new()
            .wrap(StructuredLogger)
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
