//! SeaORM adapter for the hole-score ledger.
//!
//! Each side of a cell is written with a single
//! `INSERT .. ON CONFLICT (match_id, hole_number, player_id) DO UPDATE`,
//! so concurrent writers to the same cell resolve last-write-wins and
//! writers to different cells never touch each other's rows.

use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ColumnTrait, ConnectionTrait, EntityTrait, NotSet, PaginatorTrait, QueryFilter, QueryOrder,
    Set,
};

use crate::entities::hole_scores::{self, CellStatus};

pub mod dto;

pub use dto::{CellResolution, CellUpsert};

#[derive(Clone, Copy)]
enum Side {
    Own,
    Marker,
}

async fn upsert_side<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: CellUpsert,
    side: Side,
) -> Result<hole_scores::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();
    let (own_score, own_submitted, marker_score, marker_submitted) = match side {
        Side::Own => (dto.score, true, None, false),
        Side::Marker => (None, false, dto.score, true),
    };
    let row = hole_scores::ActiveModel {
        id: NotSet,
        match_id: Set(dto.match_id),
        hole_number: Set(dto.hole_number),
        player_id: Set(dto.player_id),
        team: Set(dto.team),
        own_score: Set(own_score),
        own_submitted: Set(own_submitted),
        marker_score: Set(marker_score),
        marker_submitted: Set(marker_submitted),
        strokes_received: Set(dto.strokes_received),
        net_score: Set(None),
        validation_status: Set(CellStatus::Pending),
        created_at: Set(now),
        updated_at: Set(now),
    };

    let update_columns = match side {
        Side::Own => [
            hole_scores::Column::OwnScore,
            hole_scores::Column::OwnSubmitted,
            hole_scores::Column::UpdatedAt,
        ],
        Side::Marker => [
            hole_scores::Column::MarkerScore,
            hole_scores::Column::MarkerSubmitted,
            hole_scores::Column::UpdatedAt,
        ],
    };

    hole_scores::Entity::insert(row)
        .on_conflict(
            OnConflict::columns([
                hole_scores::Column::MatchId,
                hole_scores::Column::HoleNumber,
                hole_scores::Column::PlayerId,
            ])
            .update_columns(update_columns)
            .to_owned(),
        )
        .exec_without_returning(conn)
        .await?;

    find_cell(conn, dto.match_id, dto.hole_number, dto.player_id)
        .await?
        .ok_or_else(|| sea_orm::DbErr::RecordNotFound("Hole score not found".to_string()))
}

/// Write the owner's own entry for a cell, creating the cell on first use.
pub async fn upsert_own<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: CellUpsert,
) -> Result<hole_scores::Model, sea_orm::DbErr> {
    upsert_side(conn, dto, Side::Own).await
}

/// Write the marker's entry for the marked player's cell.
pub async fn upsert_marker<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: CellUpsert,
) -> Result<hole_scores::Model, sea_orm::DbErr> {
    upsert_side(conn, dto, Side::Marker).await
}

pub async fn set_resolution<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: CellResolution,
) -> Result<(), sea_orm::DbErr> {
    let changes = hole_scores::ActiveModel {
        validation_status: Set(dto.validation_status),
        net_score: Set(dto.net_score),
        ..Default::default()
    };
    hole_scores::Entity::update_many()
        .set(changes)
        .filter(hole_scores::Column::Id.eq(dto.id))
        .exec(conn)
        .await?;
    Ok(())
}

pub async fn find_cell<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    match_id: i64,
    hole_number: i16,
    player_id: i64,
) -> Result<Option<hole_scores::Model>, sea_orm::DbErr> {
    hole_scores::Entity::find()
        .filter(hole_scores::Column::MatchId.eq(match_id))
        .filter(hole_scores::Column::HoleNumber.eq(hole_number))
        .filter(hole_scores::Column::PlayerId.eq(player_id))
        .one(conn)
        .await
}

/// All cells of a match ordered by hole then player.
pub async fn find_by_match<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    match_id: i64,
) -> Result<Vec<hole_scores::Model>, sea_orm::DbErr> {
    hole_scores::Entity::find()
        .filter(hole_scores::Column::MatchId.eq(match_id))
        .order_by_asc(hole_scores::Column::HoleNumber)
        .order_by_asc(hole_scores::Column::PlayerId)
        .all(conn)
        .await
}

pub async fn find_by_matches<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    match_ids: &[i64],
) -> Result<Vec<hole_scores::Model>, sea_orm::DbErr> {
    if match_ids.is_empty() {
        return Ok(Vec::new());
    }
    hole_scores::Entity::find()
        .filter(hole_scores::Column::MatchId.is_in(match_ids.iter().copied()))
        .order_by_asc(hole_scores::Column::MatchId)
        .order_by_asc(hole_scores::Column::HoleNumber)
        .all(conn)
        .await
}

pub async fn count_by_match<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    match_id: i64,
) -> Result<u64, sea_orm::DbErr> {
    hole_scores::Entity::find()
        .filter(hole_scores::Column::MatchId.eq(match_id))
        .count(conn)
        .await
}

pub async fn hole_has_cells<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    match_id: i64,
    hole_number: i16,
) -> Result<bool, sea_orm::DbErr> {
    let n = hole_scores::Entity::find()
        .filter(hole_scores::Column::MatchId.eq(match_id))
        .filter(hole_scores::Column::HoleNumber.eq(hole_number))
        .count(conn)
        .await?;
    Ok(n > 0)
}
