//! Competition leaderboard: a read-only projection recomputed on demand.

use sea_orm::ConnectionTrait;
use serde::Serialize;
use tracing::debug;

use crate::domain::leaderboard::{aggregate, MatchLine, MatchSummary};
use crate::domain::ledger::ScoredCell;
use crate::domain::match_types::MatchStatus;
use crate::domain::roster::MatchRoster;
use crate::domain::standing::standing_from_cells;
use crate::error::AppError;
use crate::repos::hole_scores::HoleScore;
use crate::repos::{competitions, hole_scores, match_players, matches};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamPoints {
    pub name: String,
    pub points: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompetitionLeaderboard {
    pub competition_id: i64,
    pub team_a: TeamPoints,
    pub team_b: TeamPoints,
    pub completed_matches: usize,
    pub per_match: Vec<MatchLine>,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct LeaderboardService;

impl LeaderboardService {
    pub fn new() -> Self {
        Self
    }

    pub async fn get_leaderboard<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        competition_id: i64,
    ) -> Result<CompetitionLeaderboard, AppError> {
        let competition = competitions::require_competition(conn, competition_id).await?;
        let all = matches::find_by_competition(conn, competition_id).await?;

        let live_ids: Vec<i64> = all
            .iter()
            .filter(|m| m.status == MatchStatus::InProgress)
            .map(|m| m.id)
            .collect();
        let mut players = match_players::find_by_matches(conn, &live_ids).await?;
        let mut cells = hole_scores::find_by_matches(conn, &live_ids).await?;

        let mut summaries = Vec::with_capacity(all.len());
        for m in all {
            let live = if m.status == MatchStatus::InProgress {
                let roster = MatchRoster::new(m.format, players.remove(&m.id).unwrap_or_default())?;
                let scored: Vec<ScoredCell> = cells
                    .remove(&m.id)
                    .unwrap_or_default()
                    .iter()
                    .map(HoleScore::scored_cell)
                    .collect();
                Some(standing_from_cells(&roster, &scored))
            } else {
                None
            };
            summaries.push(MatchSummary {
                match_id: m.id,
                round_id: m.round_id,
                match_no: i32::from(m.match_no),
                format: m.format,
                status: m.status,
                result: m.result,
                live,
            });
        }

        let board = aggregate(&summaries);
        debug!(
            competition_id,
            matches = board.per_match.len(),
            completed = board.completed_matches,
            team_a_points = board.team_a_points,
            team_b_points = board.team_b_points,
            "Leaderboard computed"
        );

        Ok(CompetitionLeaderboard {
            competition_id,
            team_a: TeamPoints {
                name: competition.team_a_name,
                points: board.team_a_points,
            },
            team_b: TeamPoints {
                name: competition.team_b_name,
                points: board.team_b_points,
            },
            completed_matches: board.completed_matches,
            per_match: board.per_match,
        })
    }
}
