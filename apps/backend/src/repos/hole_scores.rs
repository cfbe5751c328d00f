//! Hole-score ledger repository functions.

use std::collections::HashMap;

use sea_orm::ConnectionTrait;

use crate::adapters::hole_scores_sea as ledger_adapter;
use crate::domain::ledger::{CellWrite, HoleCell, Resolution, ScoredCell};
use crate::domain::match_types::{PlayerId, Team, ValidationStatus};
use crate::entities::hole_scores;
use crate::errors::domain::DomainError;
use crate::repos::conversions::small_u8;

/// One persisted ledger cell.
#[derive(Debug, Clone, PartialEq)]
pub struct HoleScore {
    pub id: i64,
    pub match_id: i64,
    pub hole_number: u8,
    pub player_id: PlayerId,
    pub team: Team,
    pub cell: HoleCell,
    pub net_score: Option<i16>,
    pub validation_status: ValidationStatus,
    pub updated_at: time::OffsetDateTime,
}

impl HoleScore {
    pub fn scored_cell(&self) -> ScoredCell {
        ScoredCell {
            hole_number: self.hole_number,
            player_id: self.player_id,
            team: self.team,
            status: self.validation_status,
            net_score: self.net_score,
        }
    }
}

fn score_u8(value: Option<i16>, column: &str) -> Result<Option<u8>, DomainError> {
    value.map(|v| small_u8(v, column)).transpose()
}

impl TryFrom<hole_scores::Model> for HoleScore {
    type Error = DomainError;

    fn try_from(m: hole_scores::Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: m.id,
            match_id: m.match_id,
            hole_number: small_u8(m.hole_number, "hole_scores.hole_number")?,
            player_id: m.player_id,
            team: Team::from(m.team),
            cell: HoleCell {
                own_score: score_u8(m.own_score, "hole_scores.own_score")?,
                own_submitted: m.own_submitted,
                marker_score: score_u8(m.marker_score, "hole_scores.marker_score")?,
                marker_submitted: m.marker_submitted,
                strokes_received: small_u8(m.strokes_received, "hole_scores.strokes_received")?,
            },
            net_score: m.net_score,
            validation_status: m.validation_status.into(),
            updated_at: m.updated_at,
        })
    }
}

fn upsert_dto(match_id: i64, hole_number: u8, write: &CellWrite) -> ledger_adapter::CellUpsert {
    ledger_adapter::CellUpsert {
        match_id,
        hole_number: i16::from(hole_number),
        player_id: write.cell_player,
        team: write.team.into(),
        score: write.score.map(i16::from),
        strokes_received: i16::from(write.strokes_received),
    }
}

pub async fn upsert_own<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    match_id: i64,
    hole_number: u8,
    write: &CellWrite,
) -> Result<HoleScore, DomainError> {
    let row = ledger_adapter::upsert_own(conn, upsert_dto(match_id, hole_number, write)).await?;
    HoleScore::try_from(row)
}

pub async fn upsert_marker<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    match_id: i64,
    hole_number: u8,
    write: &CellWrite,
) -> Result<HoleScore, DomainError> {
    let row = ledger_adapter::upsert_marker(conn, upsert_dto(match_id, hole_number, write)).await?;
    HoleScore::try_from(row)
}

/// Persist the resolution computed for a cell.
pub async fn store_resolution<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    cell_id: i64,
    resolution: Resolution,
) -> Result<(), DomainError> {
    ledger_adapter::set_resolution(
        conn,
        ledger_adapter::CellResolution {
            id: cell_id,
            validation_status: resolution.status.into(),
            net_score: resolution.net_score,
        },
    )
    .await?;
    Ok(())
}

pub async fn find_by_match<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    match_id: i64,
) -> Result<Vec<HoleScore>, DomainError> {
    ledger_adapter::find_by_match(conn, match_id)
        .await?
        .into_iter()
        .map(HoleScore::try_from)
        .collect()
}

pub async fn find_by_matches<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    match_ids: &[i64],
) -> Result<HashMap<i64, Vec<HoleScore>>, DomainError> {
    let mut grouped: HashMap<i64, Vec<HoleScore>> = HashMap::new();
    for row in ledger_adapter::find_by_matches(conn, match_ids).await? {
        let score = HoleScore::try_from(row)?;
        grouped.entry(score.match_id).or_default().push(score);
    }
    Ok(grouped)
}

pub async fn count_by_match<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    match_id: i64,
) -> Result<u64, DomainError> {
    Ok(ledger_adapter::count_by_match(conn, match_id).await?)
}

pub async fn hole_has_cells<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    match_id: i64,
    hole_number: u8,
) -> Result<bool, DomainError> {
    Ok(ledger_adapter::hole_has_cells(conn, match_id, i16::from(hole_number)).await?)
}
