//! Round repository functions.

use sea_orm::ConnectionTrait;

use crate::adapters::rounds_sea as rounds_adapter;
use crate::domain::match_types::HoleInfo;
use crate::entities::rounds::{self, RoundStatus};
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::repos::conversions::small_u8;

#[derive(Debug, Clone, PartialEq)]
pub struct Round {
    pub id: i64,
    pub competition_id: i64,
    pub round_no: i16,
    pub status: RoundStatus,
    pub completed_at: Option<time::OffsetDateTime>,
}

impl From<rounds::Model> for Round {
    fn from(m: rounds::Model) -> Self {
        Self {
            id: m.id,
            competition_id: m.competition_id,
            round_no: m.round_no,
            status: m.status,
            completed_at: m.completed_at,
        }
    }
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    round_id: i64,
) -> Result<Option<Round>, DomainError> {
    Ok(rounds_adapter::find_by_id(conn, round_id).await?.map(Round::from))
}

pub async fn require_round<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    round_id: i64,
) -> Result<Round, DomainError> {
    find_by_id(conn, round_id).await?.ok_or_else(|| {
        DomainError::not_found(NotFoundKind::Round, format!("Round {round_id} not found"))
    })
}

/// Insert a round and its 18 course holes.
pub async fn create_round<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    competition_id: i64,
    round_no: i16,
    holes: &[HoleInfo],
) -> Result<Round, DomainError> {
    let round = rounds_adapter::create_round(
        conn,
        rounds_adapter::RoundCreate {
            competition_id,
            round_no,
        },
    )
    .await?;
    let rows = holes
        .iter()
        .map(|h| rounds_adapter::RoundHoleCreate {
            hole_number: i16::from(h.hole_number),
            par: i16::from(h.par),
            stroke_index: i16::from(h.stroke_index),
        })
        .collect();
    rounds_adapter::insert_holes(conn, round.id, rows).await?;
    Ok(Round::from(round))
}

/// Course holes in hole order.
pub async fn find_holes<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    round_id: i64,
) -> Result<Vec<HoleInfo>, DomainError> {
    rounds_adapter::find_holes(conn, round_id)
        .await?
        .into_iter()
        .map(|h| {
            Ok(HoleInfo {
                hole_number: small_u8(h.hole_number, "round_holes.hole_number")?,
                par: small_u8(h.par, "round_holes.par")?,
                stroke_index: small_u8(h.stroke_index, "round_holes.stroke_index")?,
            })
        })
        .collect()
}

/// Returns true if this call moved the round to `to`.
pub async fn set_status<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    round_id: i64,
    to: RoundStatus,
) -> Result<bool, DomainError> {
    Ok(rounds_adapter::transition_status(conn, round_id, to).await? > 0)
}
