//! SeaORM -> DomainError translation helpers.
//!
//! Adapters return `sea_orm::DbErr`; repos convert it into
//! `crate::errors::domain::DomainError` here, and higher layers map
//! `DomainError` to `AppError` via `From`.

use tracing::{error, warn};

use crate::errors::domain::{ConflictKind, DomainError, InfraErrorKind, NotFoundKind};
use crate::trace_ctx;

/// Prefix of the structured `DbErr::Custom` payload raised by optimistic updates.
pub const OPTIMISTIC_LOCK_PREFIX: &str = "OPTIMISTIC_LOCK:";

/// Prefix of the structured `DbErr::Custom` payload raised when a match row is missing.
pub const MATCH_NOT_FOUND_PREFIX: &str = "MATCH_NOT_FOUND:";

fn mentions_sqlstate(msg: &str, code: &str) -> bool {
    msg.contains(code) || msg.contains(&format!("SQLSTATE({code})"))
}

/// Extract table.column from SQLite "UNIQUE constraint failed: table.column" messages.
fn extract_sqlite_table_column(error_msg: &str) -> Option<&str> {
    let marker = "UNIQUE constraint failed: ";
    let start = error_msg.find(marker)? + marker.len();
    error_msg[start..].split_whitespace().next()
}

fn unique_conflict_detail(error_msg: &str) -> &'static str {
    let sqlite_target = extract_sqlite_table_column(error_msg).unwrap_or_default();
    if sqlite_target.starts_with("hole_scores.") || error_msg.contains("ux_hole_scores_match_hole_player")
    {
        "Hole score cell already exists"
    } else if sqlite_target.starts_with("match_players.")
        || error_msg.contains("ux_match_players_match_player")
    {
        "Player already assigned to this match"
    } else if sqlite_target.starts_with("round_holes.") || error_msg.contains("ux_round_holes_") {
        "Duplicate hole or stroke index in round"
    } else if sqlite_target.starts_with("rounds.")
        || error_msg.contains("ux_rounds_competition_round_no")
    {
        "Round number already exists in competition"
    } else {
        "Unique constraint violation"
    }
}

/// Translate a `DbErr` into a `DomainError` with sanitized detail.
pub fn map_db_err(e: sea_orm::DbErr) -> DomainError {
    let error_msg = e.to_string();
    let trace_id = trace_ctx::trace_id();

    match &e {
        sea_orm::DbErr::RecordNotFound(_) => {
            return DomainError::not_found(
                NotFoundKind::Other("Record".into()),
                "Record not found",
            );
        }
        sea_orm::DbErr::Custom(msg) if msg.starts_with(MATCH_NOT_FOUND_PREFIX) => {
            let match_id = msg
                .strip_prefix(MATCH_NOT_FOUND_PREFIX)
                .and_then(|s| s.parse::<i64>().ok());
            return match match_id {
                Some(match_id) => {
                    warn!(trace_id = %trace_id, match_id, "Match not found");
                    DomainError::not_found(NotFoundKind::Match, format!("Match {match_id} not found"))
                }
                None => DomainError::not_found(NotFoundKind::Match, "Match not found"),
            };
        }
        sea_orm::DbErr::Custom(msg) if msg.starts_with(OPTIMISTIC_LOCK_PREFIX) => {
            #[derive(serde::Deserialize)]
            struct LockInfo {
                expected: i32,
                actual: i32,
            }

            let info = msg
                .strip_prefix(OPTIMISTIC_LOCK_PREFIX)
                .and_then(|json| serde_json::from_str::<LockInfo>(json).ok());

            return match info {
                Some(info) => {
                    warn!(
                        trace_id = %trace_id,
                        expected = info.expected,
                        actual = info.actual,
                        "Optimistic lock conflict detected"
                    );
                    DomainError::conflict(
                        ConflictKind::OptimisticLock,
                        format!(
                            "Match was modified concurrently (expected version {}, actual version {}). Please refresh.",
                            info.expected, info.actual
                        ),
                    )
                }
                None => {
                    warn!(trace_id = %trace_id, "Optimistic lock conflict detected (version info unavailable)");
                    DomainError::conflict(
                        ConflictKind::OptimisticLock,
                        "Match was modified by another transaction; please refresh",
                    )
                }
            };
        }
        sea_orm::DbErr::ConnectionAcquire(_) | sea_orm::DbErr::Conn(_) => {
            warn!(trace_id = %trace_id, raw_error = %error_msg, "Database unavailable");
            return DomainError::infra(InfraErrorKind::DbUnavailable, "Database unavailable");
        }
        _ => {}
    }

    if mentions_sqlstate(&error_msg, "23505")
        || error_msg.contains("duplicate key value violates unique constraint")
        || error_msg.contains("UNIQUE constraint failed")
    {
        warn!(trace_id = %trace_id, raw_error = %error_msg, "Unique constraint violation");
        return DomainError::conflict(
            ConflictKind::Other("Unique".into()),
            unique_conflict_detail(&error_msg),
        );
    }

    if mentions_sqlstate(&error_msg, "23503") || error_msg.contains("FOREIGN KEY constraint failed")
    {
        warn!(trace_id = %trace_id, raw_error = %error_msg, "Foreign key constraint violation");
        return DomainError::validation_other("Foreign key constraint violation");
    }

    if mentions_sqlstate(&error_msg, "23514") {
        warn!(trace_id = %trace_id, raw_error = %error_msg, "Check constraint violation");
        return DomainError::validation_other("Check constraint violation");
    }

    if error_msg.contains("timeout") || error_msg.contains("timed out") {
        warn!(trace_id = %trace_id, raw_error = %error_msg, "Database timeout");
        return DomainError::infra(InfraErrorKind::Timeout, "Database timeout");
    }

    error!(trace_id = %trace_id, raw_error = %error_msg, "Unhandled database error");
    DomainError::infra(
        InfraErrorKind::Other("DbErr".into()),
        "Database operation failed",
    )
}

impl From<sea_orm::DbErr> for DomainError {
    fn from(e: sea_orm::DbErr) -> Self {
        map_db_err(e)
    }
}
