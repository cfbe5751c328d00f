//! Setup boundary for the scoring engine: the steps an upstream scheduler
//! performs before and around scoring (competition, round, match creation,
//! start, player reassignment, walkover).

use sea_orm::ConnectionTrait;
use tracing::{debug, info};

use crate::domain::handicap::{allocate_strokes, validate_stroke_indices};
use crate::domain::match_types::{HoleInfo, MatchFormat, MatchStatus, Team, HOLES};
use crate::domain::result::walkover_result;
use crate::domain::roster::{MatchRoster, Participant};
use crate::entities::rounds::RoundStatus;
use crate::error::AppError;
use crate::errors::domain::{ConflictKind, DomainError, ValidationKind};
use crate::repos::competitions::{self, Competition};
use crate::repos::matches::{self, Match};
use crate::repos::rounds::{self, Round};
use crate::repos::{hole_scores, match_players};
use crate::services::scoring::complete_round_if_finished;

const MIN_PAR: u8 = 3;
const MAX_PAR: u8 = 6;

#[derive(Debug, Clone, PartialEq)]
pub struct NewMatch {
    pub round_id: i64,
    pub match_no: i16,
    pub format: MatchFormat,
    pub participants: Vec<Participant>,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct MatchSetupService;

/// Course holes must be 1..=18 in order with a stroke-index permutation.
fn validate_course(holes: &[HoleInfo]) -> Result<(), DomainError> {
    if holes.len() != usize::from(HOLES) {
        return Err(DomainError::validation(
            ValidationKind::InvalidHoleNumber,
            format!("a round needs {HOLES} holes, got {}", holes.len()),
        ));
    }
    for (expected, hole) in (1..=HOLES).zip(holes) {
        if hole.hole_number != expected {
            return Err(DomainError::validation(
                ValidationKind::InvalidHoleNumber,
                format!("expected hole {expected}, got {}", hole.hole_number),
            ));
        }
        if !(MIN_PAR..=MAX_PAR).contains(&hole.par) {
            return Err(DomainError::validation_other(format!(
                "hole {} has par {}, expected {MIN_PAR}..={MAX_PAR}",
                hole.hole_number, hole.par
            )));
        }
    }
    let indices: Vec<u8> = holes.iter().map(|h| h.stroke_index).collect();
    validate_stroke_indices(&indices)
}

impl MatchSetupService {
    pub fn new() -> Self {
        Self
    }

    pub async fn create_competition<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        name: &str,
        created_by: i64,
        team_a_name: &str,
        team_b_name: &str,
    ) -> Result<Competition, AppError> {
        if name.trim().is_empty() {
            return Err(DomainError::validation_other("competition name is required").into());
        }
        let competition = competitions::create_competition(
            conn,
            name.trim().to_string(),
            created_by,
            team_a_name.trim().to_string(),
            team_b_name.trim().to_string(),
        )
        .await?;
        info!(competition_id = competition.id, created_by, "Competition created");
        Ok(competition)
    }

    pub async fn create_round<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        competition_id: i64,
        round_no: i16,
        holes: &[HoleInfo],
    ) -> Result<Round, AppError> {
        competitions::require_competition(conn, competition_id).await?;
        validate_course(holes)?;
        let round = rounds::create_round(conn, competition_id, round_no, holes).await?;
        info!(competition_id, round_id = round.id, round_no, "Round created");
        Ok(round)
    }

    /// Create a match, allocating handicap strokes from the round's stroke indices.
    pub async fn create_match<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        new_match: NewMatch,
    ) -> Result<Match, AppError> {
        let round = rounds::require_round(conn, new_match.round_id).await?;
        let roster = MatchRoster::new(new_match.format, new_match.participants)?;
        let strokes = allocate_strokes(&roster, &stroke_indices(conn, round.id).await?)?;

        let created = matches::create_match(
            conn,
            round.competition_id,
            round.id,
            new_match.match_no,
            new_match.format,
            &strokes,
        )
        .await?;
        match_players::replace_players(conn, created.id, roster.participants()).await?;
        info!(
            match_id = created.id,
            round_id = round.id,
            format = ?new_match.format,
            "Match created"
        );
        Ok(created)
    }

    /// SCHEDULED -> IN_PROGRESS; the round follows on its first started match.
    pub async fn start_match<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        match_id: i64,
    ) -> Result<Match, AppError> {
        let m = matches::require_match(conn, match_id).await?;
        if m.status != MatchStatus::Scheduled {
            return Err(DomainError::validation_other(format!(
                "Match {match_id} is {:?}; only scheduled matches can start",
                m.status
            ))
            .into());
        }
        let started = matches::transition_status(conn, &m, MatchStatus::InProgress).await?;
        let round = rounds::require_round(conn, m.round_id).await?;
        if round.status == RoundStatus::Scheduled {
            rounds::set_status(conn, round.id, RoundStatus::InProgress).await?;
        }
        info!(match_id, round_id = m.round_id, "Match started");
        Ok(started)
    }

    /// Replace participants and recompute strokes. Only allowed before any score exists.
    pub async fn reassign_players<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        match_id: i64,
        participants: Vec<Participant>,
    ) -> Result<Match, AppError> {
        let m = matches::require_match(conn, match_id).await?;
        if m.status.is_terminal() {
            return Err(DomainError::validation(
                ValidationKind::MatchNotInProgress,
                format!("Match {match_id} is already {:?}", m.status),
            )
            .into());
        }
        let entered = hole_scores::count_by_match(conn, match_id).await?;
        if entered > 0 {
            return Err(DomainError::conflict(
                ConflictKind::ScoresAlreadyEntered,
                format!("Match {match_id} already has {entered} score cells"),
            )
            .into());
        }

        let roster = MatchRoster::new(m.format, participants)?;
        let strokes = allocate_strokes(&roster, &stroke_indices(conn, m.round_id).await?)?;
        match_players::replace_players(conn, match_id, roster.participants()).await?;
        let updated = matches::replace_strokes(conn, &m, &strokes).await?;
        info!(match_id, players = roster.participants().len(), "Players reassigned");
        Ok(updated)
    }

    /// Close a match without play.
    pub async fn record_walkover<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        match_id: i64,
        winner: Team,
    ) -> Result<Match, AppError> {
        let m = matches::require_match(conn, match_id).await?;
        if m.status.is_terminal() {
            return Err(DomainError::validation(
                ValidationKind::MatchNotInProgress,
                format!("Match {match_id} is already {:?}", m.status),
            )
            .into());
        }
        let result = walkover_result(winner);
        let done = matches::close_match(conn, &m, MatchStatus::Walkover, &result, None).await?;
        info!(match_id, winner = winner.as_str(), "Walkover recorded");
        complete_round_if_finished(conn, done.round_id).await?;
        Ok(done)
    }
}

/// Stroke indices of a round in hole order.
async fn stroke_indices<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    round_id: i64,
) -> Result<Vec<u8>, AppError> {
    let holes = rounds::find_holes(conn, round_id).await?;
    debug!(round_id, holes = holes.len(), "Loaded course holes");
    Ok(holes.iter().map(|h| h.stroke_index).collect())
}
