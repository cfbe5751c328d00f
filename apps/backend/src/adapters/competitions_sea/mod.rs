//! SeaORM adapter for competitions.

use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, NotSet, Set};

use crate::entities::competitions;

pub mod dto;

pub use dto::CompetitionCreate;

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    competition_id: i64,
) -> Result<Option<competitions::Model>, sea_orm::DbErr> {
    competitions::Entity::find_by_id(competition_id).one(conn).await
}

pub async fn create_competition<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: CompetitionCreate,
) -> Result<competitions::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();
    let active = competitions::ActiveModel {
        id: NotSet,
        name: Set(dto.name),
        created_by: Set(dto.created_by),
        team_a_name: Set(dto.team_a_name),
        team_b_name: Set(dto.team_b_name),
        created_at: Set(now),
        updated_at: Set(now),
    };
    active.insert(conn).await
}
