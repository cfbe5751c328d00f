//! SeaORM adapter for match participants.

use sea_orm::{
    ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, QueryOrder, Set,
};

use crate::entities::match_players;

pub mod dto;

pub use dto::MatchPlayerCreate;

/// Participants of a match ordered by team then position.
pub async fn find_by_match<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    match_id: i64,
) -> Result<Vec<match_players::Model>, sea_orm::DbErr> {
    match_players::Entity::find()
        .filter(match_players::Column::MatchId.eq(match_id))
        .order_by_asc(match_players::Column::Team)
        .order_by_asc(match_players::Column::Position)
        .all(conn)
        .await
}

pub async fn find_by_matches<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    match_ids: &[i64],
) -> Result<Vec<match_players::Model>, sea_orm::DbErr> {
    if match_ids.is_empty() {
        return Ok(Vec::new());
    }
    match_players::Entity::find()
        .filter(match_players::Column::MatchId.is_in(match_ids.iter().copied()))
        .order_by_asc(match_players::Column::MatchId)
        .order_by_asc(match_players::Column::Team)
        .order_by_asc(match_players::Column::Position)
        .all(conn)
        .await
}

pub async fn insert_players<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    match_id: i64,
    players: Vec<MatchPlayerCreate>,
) -> Result<(), sea_orm::DbErr> {
    if players.is_empty() {
        return Ok(());
    }
    let rows = players.into_iter().map(|p| match_players::ActiveModel {
        id: NotSet,
        match_id: Set(match_id),
        player_id: Set(p.player_id),
        team: Set(p.team),
        position: Set(p.position),
        playing_handicap: Set(p.playing_handicap),
        tee: Set(p.tee),
        marks_player_id: Set(p.marks_player_id),
    });
    match_players::Entity::insert_many(rows)
        .exec_without_returning(conn)
        .await?;
    Ok(())
}

pub async fn delete_by_match<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    match_id: i64,
) -> Result<u64, sea_orm::DbErr> {
    let result = match_players::Entity::delete_many()
        .filter(match_players::Column::MatchId.eq(match_id))
        .exec(conn)
        .await?;
    Ok(result.rows_affected)
}
