//! Error codes for the match-play scoring API.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! All error codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings
//! that appear in HTTP responses.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Identity & authorization
    /// Requester identity header missing or malformed
    Unauthorized,
    /// Requester does not play in the match
    NotAParticipant,
    /// Requester may not concede for that team
    UnauthorizedConcede,

    // Request validation
    InvalidMatchId,
    InvalidCompetitionId,
    InvalidHoleNumber,
    InvalidScore,
    InvalidHandicap,
    InvalidStrokeIndex,
    InvalidParticipants,
    MarkerMismatch,
    ValidationError,
    BadRequest,
    InvalidHeader,

    // Scoring state
    MatchNotInProgress,
    UnresolvedHoles,

    // Not found
    MatchNotFound,
    RoundNotFound,
    CompetitionNotFound,
    NotFound,

    // Conflicts
    ConcurrencyConflict,
    ScoresAlreadyEntered,
    UniqueViolation,
    Conflict,

    // Infrastructure
    DbError,
    DbUnavailable,
    DbTimeout,
    DataCorruption,
    Internal,
    ConfigError,
}

impl ErrorCode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unauthorized => "UNAUTHORIZED",
            Self::NotAParticipant => "NOT_A_PARTICIPANT",
            Self::UnauthorizedConcede => "UNAUTHORIZED_CONCEDE",

            Self::InvalidMatchId => "INVALID_MATCH_ID",
            Self::InvalidCompetitionId => "INVALID_COMPETITION_ID",
            Self::InvalidHoleNumber => "INVALID_HOLE_NUMBER",
            Self::InvalidScore => "INVALID_SCORE",
            Self::InvalidHandicap => "INVALID_HANDICAP",
            Self::InvalidStrokeIndex => "INVALID_STROKE_INDEX",
            Self::InvalidParticipants => "INVALID_PARTICIPANTS",
            Self::MarkerMismatch => "MARKER_MISMATCH",
            Self::ValidationError => "VALIDATION_ERROR",
            Self::BadRequest => "BAD_REQUEST",
            Self::InvalidHeader => "INVALID_HEADER",

            Self::MatchNotInProgress => "MATCH_NOT_IN_PROGRESS",
            Self::UnresolvedHoles => "UNRESOLVED_HOLES",

            Self::MatchNotFound => "MATCH_NOT_FOUND",
            Self::RoundNotFound => "ROUND_NOT_FOUND",
            Self::CompetitionNotFound => "COMPETITION_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",

            Self::ConcurrencyConflict => "CONCURRENCY_CONFLICT",
            Self::ScoresAlreadyEntered => "SCORES_ALREADY_ENTERED",
            Self::UniqueViolation => "UNIQUE_VIOLATION",
            Self::Conflict => "CONFLICT",

            Self::DbError => "DB_ERROR",
            Self::DbUnavailable => "DB_UNAVAILABLE",
            Self::DbTimeout => "DB_TIMEOUT",
            Self::DataCorruption => "DATA_CORRUPTION",
            Self::Internal => "INTERNAL",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
