use matchplay::config::db::DbProfile;
use matchplay::infra::state::build_state;
use matchplay::{AppError, AppState};

/// Fresh state over its own migrated test database.
///
/// The test profile defaults to in-memory SQLite, so every call gets an
/// isolated schema; set `MATCHPLAY_TEST_DB_KIND=postgres` to run against
/// the `TEST_DB` Postgres database instead.
pub async fn build_test_state() -> Result<AppState, AppError> {
    build_state().with_db(DbProfile::Test).build().await
}
