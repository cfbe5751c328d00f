//! `GET /health`: liveness plus the state of the scoring store.
//!
//! Always answers 200 so the process can be probed without a database;
//! `db` and `schema_current` say whether scores can actually be taken.

use actix_web::{web, HttpResponse};
use migration::{get_latest_migration_version, latest_known_migration};
use serde::Serialize;
use tracing::warn;

use crate::db::require_db;
use crate::state::app_state::AppState;

#[derive(Debug, Serialize)]
struct Health {
    status: &'static str,
    db: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    db_error: Option<String>,
    /// Latest applied migration.
    schema: Option<String>,
    /// True when the applied schema matches the newest migration in this build.
    schema_current: bool,
}

async fn health(app_state: web::Data<AppState>) -> HttpResponse {
    let applied = match require_db(&app_state) {
        Ok(db) => get_latest_migration_version(db)
            .await
            .map_err(|e| format!("schema lookup failed: {e}")),
        Err(e) => Err(e.to_string()),
    };

    let body = match applied {
        Ok(schema) => Health {
            status: "ok",
            db: "ok",
            db_error: None,
            schema_current: schema.is_some() && schema == latest_known_migration(),
            schema,
        },
        Err(db_error) => {
            warn!(error = %db_error, "Health check could not reach the database");
            Health {
                status: "ok",
                db: "error",
                db_error: Some(db_error),
                schema: None,
                schema_current: false,
            }
        }
    };

    HttpResponse::Ok().json(body)
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health));
}
