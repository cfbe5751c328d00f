use sea_orm::ConnectionTrait;
use serde::Serialize;
use tracing::debug;

use super::MatchScoringService;
use crate::domain::ledger::ScoredCell;
use crate::domain::match_types::{MatchFormat, MatchStatus, PlayerId, Team, ValidationStatus};
use crate::domain::result::MatchResult;
use crate::domain::roster::{MatchRoster, Participant};
use crate::domain::standing::{standing_from_cells, MatchStanding};
use crate::error::AppError;
use crate::repos::hole_scores::HoleScore;
use crate::repos::matches::Match;
use crate::repos::{hole_scores, match_players, matches, rounds};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CellView {
    pub player_id: PlayerId,
    pub team: Team,
    pub own_score: Option<u8>,
    pub own_submitted: bool,
    pub marker_score: Option<u8>,
    pub marker_submitted: bool,
    pub strokes_received: u8,
    pub net_score: Option<i16>,
    pub validation_status: ValidationStatus,
}

impl From<&HoleScore> for CellView {
    fn from(h: &HoleScore) -> Self {
        Self {
            player_id: h.player_id,
            team: h.team,
            own_score: h.cell.own_score,
            own_submitted: h.cell.own_submitted,
            marker_score: h.cell.marker_score,
            marker_submitted: h.cell.marker_submitted,
            strokes_received: h.cell.strokes_received,
            net_score: h.net_score,
            validation_status: h.validation_status,
        }
    }
}

/// One of the 18 holes, with every cell entered so far.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HoleRow {
    pub hole_number: u8,
    pub par: u8,
    pub stroke_index: u8,
    pub cells: Vec<CellView>,
}

/// What the requesting player owes the scorecard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RequesterView {
    pub player_id: PlayerId,
    pub team: Team,
    pub marks_player_id: PlayerId,
    pub scorecard_submitted: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoringView {
    pub match_id: i64,
    pub competition_id: i64,
    pub round_id: i64,
    pub format: MatchFormat,
    pub status: MatchStatus,
    pub lock_version: i32,
    pub participants: Vec<Participant>,
    pub holes: Vec<HoleRow>,
    pub standing: MatchStanding,
    pub decided_result: Option<MatchResult>,
    pub result: Option<MatchResult>,
    pub submitted_players: Vec<PlayerId>,
    pub requester: Option<RequesterView>,
}

impl MatchScoringService {
    /// Full read model for a match: every hole, current standing, submission flags.
    pub async fn get_scoring_view<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        match_id: i64,
        requester: PlayerId,
    ) -> Result<ScoringView, AppError> {
        debug!(match_id, requester, "Loading scoring view");
        let m = matches::require_match(conn, match_id).await?;
        let roster = match_players::load_roster(conn, match_id, m.format).await?;
        self.build_view(conn, m, &roster, requester).await
    }

    pub(super) async fn build_view<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        m: Match,
        roster: &MatchRoster,
        requester: PlayerId,
    ) -> Result<ScoringView, AppError> {
        let course = rounds::find_holes(conn, m.round_id).await?;
        let cells = hole_scores::find_by_match(conn, m.id).await?;
        let scored: Vec<ScoredCell> = cells.iter().map(HoleScore::scored_cell).collect();
        let standing = standing_from_cells(roster, &scored);

        let holes = course
            .iter()
            .map(|h| HoleRow {
                hole_number: h.hole_number,
                par: h.par,
                stroke_index: h.stroke_index,
                cells: cells
                    .iter()
                    .filter(|c| c.hole_number == h.hole_number)
                    .map(CellView::from)
                    .collect(),
            })
            .collect();

        let requester = roster.participant(requester).map(|p| RequesterView {
            player_id: p.player_id,
            team: p.team,
            marks_player_id: p.marks_player_id,
            scorecard_submitted: m.submitted_players.contains(&p.player_id),
        });

        Ok(ScoringView {
            match_id: m.id,
            competition_id: m.competition_id,
            round_id: m.round_id,
            format: m.format,
            status: m.status,
            lock_version: m.lock_version,
            participants: roster.participants().to_vec(),
            holes,
            decided_result: standing.decided_result.clone(),
            standing,
            result: m.result,
            submitted_players: m.submitted_players,
            requester,
        })
    }
}
