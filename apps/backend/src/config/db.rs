use std::env;

use crate::error::AppError;

/// Database profile enum for different environments
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbProfile {
    /// Production database profile
    Prod,
    /// Test database profile - enforces safety rules
    Test,
}

/// Database owner enum for different access levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbOwner {
    /// Application-level access (limited permissions)
    App,
    /// Owner-level access (full permissions for migrations)
    Owner,
}

/// Storage engine behind the connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DbKind {
    Postgres,
    /// Private in-memory SQLite database, one per connection pool.
    SqliteMemory,
}

impl std::str::FromStr for DbKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(Self::Postgres),
            "sqlite-memory" | "sqlite_memory" | "memory" => Ok(Self::SqliteMemory),
            other => Err(AppError::config(format!(
                "Unknown database kind '{other}' (expected 'postgres' or 'sqlite-memory')"
            ))),
        }
    }
}

/// Database kind for a profile.
///
/// Prod reads `MATCHPLAY_DB_KIND`, Test reads `MATCHPLAY_TEST_DB_KIND`.
/// Prod defaults to Postgres, Test to in-memory SQLite.
pub fn db_kind(profile: DbProfile) -> Result<DbKind, AppError> {
    let (var, default) = match profile {
        DbProfile::Prod => ("MATCHPLAY_DB_KIND", DbKind::Postgres),
        DbProfile::Test => ("MATCHPLAY_TEST_DB_KIND", DbKind::SqliteMemory),
    };
    match env::var(var) {
        Ok(value) => value.parse(),
        Err(_) => Ok(default),
    }
}

/// Builds a database URL from environment variables based on kind, profile and owner
pub fn db_url(kind: DbKind, profile: DbProfile, owner: DbOwner) -> Result<String, AppError> {
    if kind == DbKind::SqliteMemory {
        return Ok("sqlite::memory:".to_string());
    }

    let host = host();
    let port = port()?;
    let db_name = db_name(profile)?;
    let (username, password) = credentials(owner)?;

    let url = format!("postgresql://{username}:{password}@{host}:{port}/{db_name}");
    Ok(url)
}

/// Get database host from environment (defaults to localhost)
fn host() -> String {
    env::var("POSTGRES_HOST").unwrap_or_else(|_| "localhost".to_string())
}

/// Get database port from environment (defaults to 5432)
fn port() -> Result<u16, AppError> {
    match env::var("POSTGRES_PORT") {
        Ok(raw) => raw
            .parse::<u16>()
            .map_err(|_| AppError::config(format!("POSTGRES_PORT must be a port number, got '{raw}'"))),
        Err(_) => Ok(5432),
    }
}

/// Get database name based on profile
fn db_name(profile: DbProfile) -> Result<String, AppError> {
    match profile {
        DbProfile::Prod => must_var("PROD_DB"),
        DbProfile::Test => {
            let db_name = must_var("TEST_DB")?;
            // Enforce safety: test DB must end with "_test"
            if !db_name.ends_with("_test") {
                return Err(AppError::config(format!(
                    "Test profile requires database name to end with '_test', but got: '{db_name}'"
                )));
            }
            Ok(db_name)
        }
    }
}

/// Get database credentials based on owner
fn credentials(owner: DbOwner) -> Result<(String, String), AppError> {
    match owner {
        DbOwner::App => Ok((must_var("APP_DB_USER")?, must_var("APP_DB_PASSWORD")?)),
        DbOwner::Owner => Ok((
            must_var("MATCHPLAY_OWNER_USER")?,
            must_var("MATCHPLAY_OWNER_PASSWORD")?,
        )),
    }
}

/// Get required environment variable or return error
fn must_var(name: &str) -> Result<String, AppError> {
    env::var(name)
        .map_err(|_| AppError::config(format!("Required environment variable '{name}' is not set")))
}
