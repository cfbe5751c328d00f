use std::time::Duration;

use migration::{migrate, MigrationCommand};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

use crate::config::db::{db_kind, db_url, DbKind, DbOwner, DbProfile};
use crate::error::AppError;

fn connect_options(kind: DbKind, url: String) -> ConnectOptions {
    let mut opts = ConnectOptions::new(url);
    opts.sqlx_logging(false);
    match kind {
        // Every pooled connection to sqlite::memory: is a separate database,
        // so the pool must hold exactly one for the schema to be shared.
        DbKind::SqliteMemory => {
            opts.max_connections(1).min_connections(1);
        }
        DbKind::Postgres => {
            opts.max_connections(10)
                .min_connections(1)
                .connect_timeout(Duration::from_secs(5))
                .acquire_timeout(Duration::from_secs(5));
        }
    }
    opts
}

/// Open a connection for the profile and owner.
/// This function does NOT run any migrations.
pub async fn connect_db(profile: DbProfile, owner: DbOwner) -> Result<DatabaseConnection, AppError> {
    let kind = db_kind(profile)?;
    let url = db_url(kind, profile, owner)?;
    let conn = Database::connect(connect_options(kind, url)).await?;
    info!(?profile, ?owner, ?kind, "database connected");
    Ok(conn)
}

/// Connect and bring the schema up to date.
pub async fn bootstrap_db(profile: DbProfile, owner: DbOwner) -> Result<DatabaseConnection, AppError> {
    let conn = connect_db(profile, owner).await?;
    migrate(&conn, MigrationCommand::Up).await?;
    Ok(conn)
}
