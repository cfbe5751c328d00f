//! Match repository functions for the domain layer.

use sea_orm::ConnectionTrait;

use crate::adapters::matches_sea as matches_adapter;
use crate::domain::handicap::StrokesTable;
use crate::domain::match_types::{MatchFormat, MatchStatus, PlayerId, Team};
use crate::domain::result::{MatchResult, MatchWinner};
use crate::domain::standing::MatchStanding;
use crate::entities::matches;
use crate::entities::matches::MatchStatus as DbMatchStatus;
use crate::errors::domain::{DomainError, InfraErrorKind};

/// Match aggregate as loaded from `matches`.
#[derive(Debug, Clone, PartialEq)]
pub struct Match {
    pub id: i64,
    pub competition_id: i64,
    pub round_id: i64,
    pub match_no: i16,
    pub format: MatchFormat,
    pub status: MatchStatus,
    pub strokes: StrokesTable,
    pub submitted_players: Vec<PlayerId>,
    pub is_decided: bool,
    pub decided_result: Option<MatchResult>,
    pub result: Option<MatchResult>,
    pub conceded_by: Option<Team>,
    pub concede_reason: Option<String>,
    pub created_at: time::OffsetDateTime,
    pub updated_at: time::OffsetDateTime,
    pub completed_at: Option<time::OffsetDateTime>,
    pub lock_version: i32,
}

fn corrupt(match_id: i64, what: &str, e: serde_json::Error) -> DomainError {
    DomainError::infra(
        InfraErrorKind::DataCorruption,
        format!("match {match_id}: unreadable {what}: {e}"),
    )
}

fn result_from(winner: Option<matches::WinnerSide>, score: Option<String>) -> Option<MatchResult> {
    match (winner, score) {
        (Some(w), Some(score)) => Some(MatchResult {
            winner: MatchWinner::from(w),
            score,
        }),
        _ => None,
    }
}

impl TryFrom<matches::Model> for Match {
    type Error = DomainError;

    fn try_from(m: matches::Model) -> Result<Self, Self::Error> {
        let strokes: StrokesTable = serde_json::from_value(m.strokes_given.clone())
            .map_err(|e| corrupt(m.id, "strokes_given", e))?;
        let submitted_players: Vec<PlayerId> =
            serde_json::from_value(m.submitted_players.clone())
                .map_err(|e| corrupt(m.id, "submitted_players", e))?;

        Ok(Self {
            id: m.id,
            competition_id: m.competition_id,
            round_id: m.round_id,
            match_no: m.match_no,
            format: m.format.into(),
            status: m.status.into(),
            strokes,
            submitted_players,
            is_decided: m.is_decided,
            decided_result: result_from(m.decided_winner, m.decided_score),
            result: result_from(m.result_winner, m.result_score),
            conceded_by: m.conceded_by_team.map(Team::from),
            concede_reason: m.concede_reason,
            created_at: m.created_at,
            updated_at: m.updated_at,
            completed_at: m.completed_at,
            lock_version: m.lock_version,
        })
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<serde_json::Value, DomainError> {
    serde_json::to_value(value).map_err(|e| {
        DomainError::infra(
            InfraErrorKind::Other("Serialize".into()),
            format!("failed to encode JSON column: {e}"),
        )
    })
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    match_id: i64,
) -> Result<Option<Match>, DomainError> {
    matches_adapter::find_by_id(conn, match_id)
        .await?
        .map(Match::try_from)
        .transpose()
}

pub async fn require_match<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    match_id: i64,
) -> Result<Match, DomainError> {
    Match::try_from(matches_adapter::require_match(conn, match_id).await?)
}

/// Load a match holding its row lock for the rest of the transaction.
pub async fn lock_match<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    match_id: i64,
) -> Result<Match, DomainError> {
    Match::try_from(matches_adapter::lock_match(conn, match_id).await?)
}

pub async fn find_by_competition<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    competition_id: i64,
) -> Result<Vec<Match>, DomainError> {
    matches_adapter::find_by_competition(conn, competition_id)
        .await?
        .into_iter()
        .map(Match::try_from)
        .collect()
}

pub async fn find_by_round<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    round_id: i64,
) -> Result<Vec<Match>, DomainError> {
    matches_adapter::find_by_round(conn, round_id)
        .await?
        .into_iter()
        .map(Match::try_from)
        .collect()
}

pub async fn create_match<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    competition_id: i64,
    round_id: i64,
    match_no: i16,
    format: MatchFormat,
    strokes: &StrokesTable,
) -> Result<Match, DomainError> {
    let dto = matches_adapter::MatchCreate {
        competition_id,
        round_id,
        match_no,
        format: format.into(),
        strokes_given: to_json(strokes)?,
    };
    Match::try_from(matches_adapter::create_match(conn, dto).await?)
}

/// Compare-and-swap the submitted-scorecard set.
pub async fn record_submitted_players<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    current: &Match,
    submitted: &[PlayerId],
) -> Result<Match, DomainError> {
    let dto = matches_adapter::MatchUpdate::new(current.id, current.lock_version)
        .when_status(DbMatchStatus::InProgress)
        .with_submitted_players(to_json(&submitted)?);
    Match::try_from(matches_adapter::update_match(conn, dto).await?)
}

/// Bump the version of a live match ahead of a ledger write.
///
/// Any scorecard or concede that read the match before this write then
/// loses its compare-and-swap and re-reads the ledger.
pub async fn claim_for_scoring<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    current: &Match,
) -> Result<Match, DomainError> {
    let dto = matches_adapter::MatchUpdate::new(current.id, current.lock_version)
        .when_status(DbMatchStatus::InProgress);
    Match::try_from(matches_adapter::update_match(conn, dto).await?)
}

/// Compare-and-swap a plain status transition (e.g. SCHEDULED -> IN_PROGRESS).
pub async fn transition_status<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    current: &Match,
    to: MatchStatus,
) -> Result<Match, DomainError> {
    let dto = matches_adapter::MatchUpdate::new(current.id, current.lock_version)
        .when_status(current.status.into())
        .with_status(to.into());
    Match::try_from(matches_adapter::update_match(conn, dto).await?)
}

/// Terminal transition carrying a result; exactly one caller can win it.
pub async fn close_match<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    current: &Match,
    to: MatchStatus,
    result: &MatchResult,
    conceded: Option<(Team, Option<String>)>,
) -> Result<Match, DomainError> {
    let mut dto = matches_adapter::MatchUpdate::new(current.id, current.lock_version)
        .when_status(current.status.into())
        .with_status(to.into())
        .with_result(result.winner.into(), result.score.clone())
        .with_completed_at(time::OffsetDateTime::now_utc());
    if let Some((team, reason)) = conceded {
        dto = dto.with_concede(team.into(), reason);
    }
    Match::try_from(matches_adapter::update_match(conn, dto).await?)
}

/// Replace the strokes table after a participant change.
pub async fn replace_strokes<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    current: &Match,
    strokes: &StrokesTable,
) -> Result<Match, DomainError> {
    let dto = matches_adapter::MatchUpdate::new(current.id, current.lock_version)
        .when_status(current.status.into())
        .with_strokes_given(to_json(strokes)?);
    Match::try_from(matches_adapter::update_match(conn, dto).await?)
}

/// Mirror the latest standing onto an in-progress match.
pub async fn store_standing<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    match_id: i64,
    standing: &MatchStanding,
) -> Result<bool, DomainError> {
    let decided = standing.decided_result.as_ref();
    let dto = matches_adapter::StandingUpdate {
        id: match_id,
        is_decided: standing.is_decided,
        decided_winner: decided.map(|r| r.winner.into()),
        decided_score: decided.map(|r| r.score.clone()),
    };
    Ok(matches_adapter::update_standing(conn, dto).await? > 0)
}
