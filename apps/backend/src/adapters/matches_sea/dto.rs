//! DTOs for matches_sea adapter.

use sea_orm::prelude::Json;
use time::OffsetDateTime;

use crate::entities::matches::{MatchFormat, MatchStatus, TeamSide, WinnerSide};

/// DTO for creating a new match.
#[derive(Debug, Clone)]
pub struct MatchCreate {
    pub competition_id: i64,
    pub round_id: i64,
    pub match_no: i16,
    pub format: MatchFormat,
    pub strokes_given: Json,
}

/// Unified DTO for updating match fields with optimistic locking.
///
/// Any combination of fields is written atomically with a single
/// `lock_version` increment. `require_status` additionally guards the
/// update on the current status, making transitions compare-and-swap.
#[derive(Debug, Clone)]
pub struct MatchUpdate {
    pub id: i64,
    pub expected_version: i32,
    pub require_status: Option<MatchStatus>,
    pub status: Option<MatchStatus>,
    pub strokes_given: Option<Json>,
    pub submitted_players: Option<Json>,
    pub result: Option<(WinnerSide, String)>,
    pub conceded: Option<(TeamSide, Option<String>)>,
    pub completed_at: Option<OffsetDateTime>,
}

impl MatchUpdate {
    pub fn new(id: i64, expected_version: i32) -> Self {
        Self {
            id,
            expected_version,
            require_status: None,
            status: None,
            strokes_given: None,
            submitted_players: None,
            result: None,
            conceded: None,
            completed_at: None,
        }
    }

    pub fn when_status(mut self, status: MatchStatus) -> Self {
        self.require_status = Some(status);
        self
    }

    pub fn with_status(mut self, status: MatchStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_strokes_given(mut self, strokes_given: Json) -> Self {
        self.strokes_given = Some(strokes_given);
        self
    }

    pub fn with_submitted_players(mut self, submitted: Json) -> Self {
        self.submitted_players = Some(submitted);
        self
    }

    pub fn with_result(mut self, winner: WinnerSide, score: impl Into<String>) -> Self {
        self.result = Some((winner, score.into()));
        self
    }

    pub fn with_concede(mut self, team: TeamSide, reason: Option<String>) -> Self {
        self.conceded = Some((team, reason));
        self
    }

    pub fn with_completed_at(mut self, at: OffsetDateTime) -> Self {
        self.completed_at = Some(at);
        self
    }
}

/// Mirror of the last computed standing; written without a version bump.
#[derive(Debug, Clone)]
pub struct StandingUpdate {
    pub id: i64,
    pub is_decided: bool,
    pub decided_winner: Option<WinnerSide>,
    pub decided_score: Option<String>,
}
