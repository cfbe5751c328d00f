use actix_web::web;

use crate::error::AppError;
use crate::errors::ErrorCode;

pub mod competitions;
pub mod health;
pub mod matches;

/// Configure application routes.
///
/// Shared by `main.rs` and route tests so both register the same paths.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Malformed bodies answer with problem details like every other error.
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        AppError::bad_request(ErrorCode::BadRequest, format!("Invalid JSON body: {err}")).into()
    }));

    // Health check: /health
    cfg.configure(health::configure_routes);

    // Scoring: /api/matches/**
    cfg.service(web::scope("/api/matches").configure(matches::configure_routes));

    // Leaderboard: /api/competitions/**
    cfg.service(web::scope("/api/competitions").configure(competitions::configure_routes));
}
