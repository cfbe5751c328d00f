pub mod competition_id;
pub mod current_player;
pub mod match_id;

pub use competition_id::CompetitionId;
pub use current_player::CurrentPlayer;
pub use match_id::MatchId;

use crate::error::AppError;
use crate::errors::ErrorCode;

/// Parse a positive i64 route parameter.
pub(crate) fn positive_id(raw: Option<&str>, name: &str, code: ErrorCode) -> Result<i64, AppError> {
    let raw = raw.ok_or_else(|| AppError::bad_request(code, format!("Missing {name} parameter")))?;
    let id = raw
        .parse::<i64>()
        .map_err(|_| AppError::bad_request(code, format!("Invalid {name}: {raw}")))?;
    if id <= 0 {
        return Err(AppError::bad_request(
            code,
            format!("{name} must be positive, got: {id}"),
        ));
    }
    Ok(id)
}
