use sea_orm::ConnectionTrait;
use serde::Deserialize;
use tracing::{debug, info};

use super::view::ScoringView;
use super::MatchScoringService;
use crate::domain::ledger::{
    plan_submission, validate_hole_number, validate_score, CellWrite, HoleSubmission, ScoredCell,
};
use crate::domain::match_types::{MatchStatus, PlayerId};
use crate::domain::standing::standing_from_cells;
use crate::error::AppError;
use crate::errors::domain::{DomainError, ValidationKind};
use crate::repos::hole_scores::{self, HoleScore};
use crate::repos::{match_players, matches};

/// Raw hole submission as received from a device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct HoleScoreInput {
    pub hole_number: i32,
    pub marked_player_id: PlayerId,
    pub own_score: Option<i32>,
    pub marked_score: Option<i32>,
}

#[derive(Debug, Clone, Copy)]
enum Entry {
    Own,
    Marker,
}

impl MatchScoringService {
    /// Apply one device's entry for a hole and return the refreshed scoring view.
    ///
    /// The scorer's own score and the score they mark are written to two
    /// different cells. Each cell is then re-resolved and the match standing
    /// recomputed. Writes to a cell whose owner has already returned their
    /// scorecard are dropped silently.
    pub async fn submit_hole_score<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        match_id: i64,
        requester: PlayerId,
        input: HoleScoreInput,
    ) -> Result<ScoringView, AppError> {
        debug!(
            match_id,
            requester,
            hole_number = input.hole_number,
            marked_player_id = input.marked_player_id,
            "Submitting hole score"
        );

        let submission = HoleSubmission {
            hole_number: validate_hole_number(input.hole_number)?,
            scorer: requester,
            marked_player: input.marked_player_id,
            own_score: validate_score(input.own_score)?,
            marked_score: validate_score(input.marked_score)?,
        };

        // Held until commit: hole writes queue behind each other and behind
        // a finalizing scorecard, then see its status.
        let m = matches::lock_match(conn, match_id).await?;
        if m.status != MatchStatus::InProgress {
            return Err(not_in_progress(match_id, m.status));
        }

        let roster = match_players::load_roster(conn, match_id, m.format).await?;
        let plan = plan_submission(&roster, &m.strokes, &m.submitted_players, &submission)?;

        // A decided match still accepts corrections, but no new holes.
        if m.is_decided
            && !hole_scores::hole_has_cells(conn, match_id, submission.hole_number).await?
        {
            return Err(DomainError::validation(
                ValidationKind::MatchNotInProgress,
                format!(
                    "Match {match_id} is already decided; hole {} cannot be started",
                    submission.hole_number
                ),
            )
            .into());
        }

        if plan.is_empty() {
            debug!(match_id, requester, "Both cells locked by returned scorecards; nothing to write");
        } else {
            matches::claim_for_scoring(conn, &m).await?;
        }
        if let Some(write) = &plan.own_write {
            self.apply_entry(conn, match_id, submission.hole_number, write, Entry::Own)
                .await?;
        }
        if let Some(write) = &plan.marker_write {
            self.apply_entry(conn, match_id, submission.hole_number, write, Entry::Marker)
                .await?;
        }

        let cells = hole_scores::find_by_match(conn, match_id).await?;
        let scored: Vec<ScoredCell> = cells.iter().map(HoleScore::scored_cell).collect();
        let standing = standing_from_cells(&roster, &scored);
        if !matches::store_standing(conn, match_id, &standing).await? {
            return Err(DomainError::validation(
                ValidationKind::MatchNotInProgress,
                format!(
                    "Match {match_id} closed while hole {} was being scored",
                    submission.hole_number
                ),
            )
            .into());
        }

        if standing.is_decided && !m.is_decided {
            info!(
                match_id,
                decided_at_hole = standing.decided_at_hole,
                score = standing.decided_result.as_ref().map(|r| r.score.as_str()),
                "Match decided"
            );
        }

        let m = matches::require_match(conn, match_id).await?;
        self.build_view(conn, m, &roster, requester).await
    }

    async fn apply_entry<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        match_id: i64,
        hole_number: u8,
        write: &CellWrite,
        entry: Entry,
    ) -> Result<(), AppError> {
        let cell = match entry {
            Entry::Own => hole_scores::upsert_own(conn, match_id, hole_number, write).await?,
            Entry::Marker => hole_scores::upsert_marker(conn, match_id, hole_number, write).await?,
        };
        let resolution = cell.cell.resolve();
        hole_scores::store_resolution(conn, cell.id, resolution).await?;
        debug!(
            match_id,
            hole_number,
            player_id = write.cell_player,
            entry = ?entry,
            status = ?resolution.status,
            "Cell resolved"
        );
        Ok(())
    }
}

fn not_in_progress(match_id: i64, status: MatchStatus) -> AppError {
    DomainError::validation(
        ValidationKind::MatchNotInProgress,
        format!("Match {match_id} is {status:?}, not in progress"),
    )
    .into()
}
