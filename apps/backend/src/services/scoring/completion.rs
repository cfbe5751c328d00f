use sea_orm::ConnectionTrait;
use serde::Serialize;
use tracing::{debug, info, warn};

use super::MatchScoringService;
use crate::domain::ledger::{unresolved_holes, ScoredCell};
use crate::domain::match_types::{MatchStatus, PlayerId};
use crate::domain::result::MatchResult;
use crate::error::AppError;
use crate::errors::domain::{DomainError, ValidationKind};
use crate::errors::ErrorCode;
use crate::repos::hole_scores::{self, HoleScore};
use crate::repos::matches::Match;
use crate::repos::{match_players, matches};

/// Lost compare-and-swap races retried before giving up.
const CAS_RETRIES: usize = 1;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScorecardOutcome {
    pub all_submitted: bool,
    pub match_completed: bool,
    pub result: Option<MatchResult>,
}

impl ScorecardOutcome {
    fn from_match(m: &Match, all_submitted: bool) -> Self {
        Self {
            all_submitted,
            match_completed: m.status == MatchStatus::Completed,
            result: m.result.clone(),
        }
    }
}

impl MatchScoringService {
    /// Declare the requester's scorecard final.
    ///
    /// Idempotent per player. The submission that completes the required set
    /// finalizes the match. A lost race on the match row is retried once
    /// against fresh state before surfacing as a concurrency conflict.
    pub async fn submit_scorecard<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        match_id: i64,
        requester: PlayerId,
    ) -> Result<ScorecardOutcome, AppError> {
        debug!(match_id, requester, "Submitting scorecard");

        let mut attempt = 0;
        loop {
            match self.try_submit_scorecard(conn, match_id, requester).await {
                Err(e) if e.code() == ErrorCode::ConcurrencyConflict && attempt < CAS_RETRIES => {
                    attempt += 1;
                    warn!(match_id, requester, attempt, error = %e, "Scorecard lost match update race; retrying");
                }
                other => return other,
            }
        }
    }

    async fn try_submit_scorecard<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        match_id: i64,
        requester: PlayerId,
    ) -> Result<ScorecardOutcome, AppError> {
        let m = matches::require_match(conn, match_id).await?;
        let roster = match_players::load_roster(conn, match_id, m.format).await?;
        let cell_owner = roster.cell_owner(requester)?;

        // In foursomes a partner's card already speaks for the requester.
        if roster.is_cell_locked(cell_owner, &m.submitted_players) {
            debug!(match_id, requester, "Scorecard already submitted");
            return Ok(ScorecardOutcome::from_match(
                &m,
                roster.all_submitted(&m.submitted_players),
            ));
        }

        if m.status != MatchStatus::InProgress {
            return Err(DomainError::validation(
                ValidationKind::MatchNotInProgress,
                format!("Match {match_id} is {:?}, not in progress", m.status),
            )
            .into());
        }

        let cells = hole_scores::find_by_match(conn, match_id).await?;
        let scored: Vec<ScoredCell> = cells.iter().map(HoleScore::scored_cell).collect();
        let unresolved = unresolved_holes(&roster, &scored);
        if !unresolved.is_empty() {
            return Err(DomainError::validation(
                ValidationKind::UnresolvedHoles,
                format!("Holes {unresolved:?} are not validated"),
            )
            .into());
        }

        let mut submitted = m.submitted_players.clone();
        submitted.push(requester);
        let m = matches::record_submitted_players(conn, &m, &submitted).await?;
        info!(match_id, requester, submitted = submitted.len(), "Scorecard recorded");

        if !roster.all_submitted(&m.submitted_players) {
            return Ok(ScorecardOutcome::from_match(&m, false));
        }

        let finished = self.finalize(conn, &m, &roster, &scored).await?;
        Ok(ScorecardOutcome::from_match(&finished, true))
    }
}
