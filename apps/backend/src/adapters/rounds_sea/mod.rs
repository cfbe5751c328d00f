//! SeaORM adapter for rounds and their course holes.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, QueryOrder,
    Set,
};

use crate::entities::{round_holes, rounds};

pub mod dto;

pub use dto::{RoundCreate, RoundHoleCreate};

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    round_id: i64,
) -> Result<Option<rounds::Model>, sea_orm::DbErr> {
    rounds::Entity::find_by_id(round_id).one(conn).await
}

pub async fn create_round<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: RoundCreate,
) -> Result<rounds::Model, sea_orm::DbErr> {
    let round = rounds::ActiveModel {
        id: NotSet,
        competition_id: Set(dto.competition_id),
        round_no: Set(dto.round_no),
        status: Set(rounds::RoundStatus::Scheduled),
        created_at: Set(time::OffsetDateTime::now_utc()),
        completed_at: Set(None),
    };
    round.insert(conn).await
}

pub async fn insert_holes<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    round_id: i64,
    holes: Vec<RoundHoleCreate>,
) -> Result<(), sea_orm::DbErr> {
    if holes.is_empty() {
        return Ok(());
    }
    let rows = holes.into_iter().map(|h| round_holes::ActiveModel {
        id: NotSet,
        round_id: Set(round_id),
        hole_number: Set(h.hole_number),
        par: Set(h.par),
        stroke_index: Set(h.stroke_index),
    });
    round_holes::Entity::insert_many(rows)
        .exec_without_returning(conn)
        .await?;
    Ok(())
}

/// Course holes of a round ordered by hole number.
pub async fn find_holes<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    round_id: i64,
) -> Result<Vec<round_holes::Model>, sea_orm::DbErr> {
    round_holes::Entity::find()
        .filter(round_holes::Column::RoundId.eq(round_id))
        .order_by_asc(round_holes::Column::HoleNumber)
        .all(conn)
        .await
}

/// Move a round to `to` unless it already has that status. Returns rows affected.
pub async fn transition_status<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    round_id: i64,
    to: rounds::RoundStatus,
) -> Result<u64, sea_orm::DbErr> {
    let mut changes = rounds::ActiveModel {
        status: Set(to),
        ..Default::default()
    };
    if to == rounds::RoundStatus::Completed {
        changes.completed_at = Set(Some(time::OffsetDateTime::now_utc()));
    }
    let result = rounds::Entity::update_many()
        .set(changes)
        .filter(rounds::Column::Id.eq(round_id))
        .filter(rounds::Column::Status.ne(to))
        .exec(conn)
        .await?;
    Ok(result.rows_affected)
}
