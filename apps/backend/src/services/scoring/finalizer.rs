use sea_orm::ConnectionTrait;
use tracing::{debug, info};

use super::MatchScoringService;
use crate::domain::ledger::ScoredCell;
use crate::domain::match_types::{MatchStatus, PlayerId, Team};
use crate::domain::result::{conceded_result, final_result};
use crate::domain::roster::MatchRoster;
use crate::domain::standing::standing_from_cells;
use crate::entities::rounds::RoundStatus;
use crate::error::AppError;
use crate::errors::domain::{DomainError, ForbiddenKind, ValidationKind};
use crate::repos::matches::Match;
use crate::repos::{competitions, match_players, matches, rounds};

impl MatchScoringService {
    /// IN_PROGRESS -> COMPLETED with the result read off the final standing.
    ///
    /// Guarded by the match lock version, so only one caller completes it.
    pub(super) async fn finalize<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        m: &Match,
        roster: &MatchRoster,
        cells: &[ScoredCell],
    ) -> Result<Match, AppError> {
        let standing = standing_from_cells(roster, cells);
        let result = final_result(&standing);
        let done = matches::close_match(conn, m, MatchStatus::Completed, &result, None).await?;
        info!(
            match_id = m.id,
            winner = ?result.winner,
            score = %result.score,
            holes_played = standing.holes_played,
            "Match completed"
        );
        complete_round_if_finished(conn, done.round_id).await?;
        Ok(done)
    }

    /// Concede the match on behalf of `conceding_team`.
    ///
    /// Participants may concede only for their own team; the competition
    /// creator may concede for either.
    pub async fn concede<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        match_id: i64,
        conceding_team: Team,
        requester: PlayerId,
        reason: Option<String>,
    ) -> Result<Match, AppError> {
        debug!(match_id, requester, team = ?conceding_team, "Conceding match");

        let m = matches::require_match(conn, match_id).await?;
        if m.status.is_terminal() {
            return Err(DomainError::validation(
                ValidationKind::MatchNotInProgress,
                format!("Match {match_id} is already {:?}", m.status),
            )
            .into());
        }

        let competition = competitions::require_competition(conn, m.competition_id).await?;
        if competition.created_by != requester {
            let roster = match_players::load_roster(conn, match_id, m.format).await?;
            let own_team = roster.participant(requester).map(|p| p.team);
            if own_team != Some(conceding_team) {
                return Err(DomainError::forbidden(
                    ForbiddenKind::UnauthorizedConcede,
                    format!("Player {requester} may not concede for team {}", conceding_team.as_str()),
                )
                .into());
            }
        }

        let result = conceded_result(conceding_team);
        let done = matches::close_match(
            conn,
            &m,
            MatchStatus::Conceded,
            &result,
            Some((conceding_team, reason)),
        )
        .await?;
        info!(match_id, requester, team = ?conceding_team, "Match conceded");
        complete_round_if_finished(conn, done.round_id).await?;
        Ok(done)
    }
}

/// Mark the round COMPLETED once every match in it is terminal.
pub(crate) async fn complete_round_if_finished<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    round_id: i64,
) -> Result<bool, AppError> {
    let round_matches = matches::find_by_round(conn, round_id).await?;
    if round_matches.is_empty() || !round_matches.iter().all(|m| m.status.is_terminal()) {
        return Ok(false);
    }
    let moved = rounds::set_status(conn, round_id, RoundStatus::Completed).await?;
    if moved {
        info!(round_id, matches = round_matches.len(), "Round completed");
    }
    Ok(moved)
}
