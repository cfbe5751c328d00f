//! SeaORM adapter for matches - generic over ConnectionTrait.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, QueryOrder,
    QuerySelect, Set,
};

use crate::entities::matches;
use crate::infra::db_errors::{MATCH_NOT_FOUND_PREFIX, OPTIMISTIC_LOCK_PREFIX};

pub mod dto;

pub use dto::{MatchCreate, MatchUpdate, StandingUpdate};

// Adapter functions return DbErr; repos map to DomainError.

fn match_not_found(id: i64) -> sea_orm::DbErr {
    sea_orm::DbErr::Custom(format!("{MATCH_NOT_FOUND_PREFIX}{id}"))
}

/// Apply an update guarded by `lock_version` (and optionally status), then refetch.
///
/// Zero affected rows means either the match is gone or another writer won;
/// the refetch tells the two apart.
async fn optimistic_update_then_fetch<C, F>(
    conn: &C,
    id: i64,
    expected_version: i32,
    require_status: Option<matches::MatchStatus>,
    configure_update: F,
) -> Result<matches::Model, sea_orm::DbErr>
where
    C: ConnectionTrait + Send + Sync,
    F: FnOnce(sea_orm::UpdateMany<matches::Entity>) -> sea_orm::UpdateMany<matches::Entity>,
{
    use sea_orm::sea_query::Expr;

    let now = time::OffsetDateTime::now_utc();

    let mut update = configure_update(matches::Entity::update_many())
        .col_expr(matches::Column::UpdatedAt, Expr::val(now).into())
        .col_expr(
            matches::Column::LockVersion,
            Expr::col(matches::Column::LockVersion).add(1),
        )
        .filter(matches::Column::Id.eq(id))
        .filter(matches::Column::LockVersion.eq(expected_version));
    if let Some(status) = require_status {
        update = update.filter(matches::Column::Status.eq(status));
    }
    let result = update.exec(conn).await?;

    if result.rows_affected == 0 {
        let current = matches::Entity::find_by_id(id).one(conn).await?;
        return match current {
            Some(current) => Err(sea_orm::DbErr::Custom(format!(
                "{OPTIMISTIC_LOCK_PREFIX}{{\"expected\":{},\"actual\":{}}}",
                expected_version, current.lock_version
            ))),
            None => Err(match_not_found(id)),
        };
    }

    require_match(conn, id).await
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    match_id: i64,
) -> Result<Option<matches::Model>, sea_orm::DbErr> {
    matches::Entity::find_by_id(match_id).one(conn).await
}

/// Find a match or fail with the structured `MATCH_NOT_FOUND` payload.
pub async fn require_match<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    match_id: i64,
) -> Result<matches::Model, sea_orm::DbErr> {
    find_by_id(conn, match_id)
        .await?
        .ok_or_else(|| match_not_found(match_id))
}

/// Load a match under `SELECT ... FOR UPDATE`; the row stays locked until
/// the surrounding transaction ends.
///
/// SQLite ignores the lock clause; its single writer serializes anyway.
pub async fn lock_match<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    match_id: i64,
) -> Result<matches::Model, sea_orm::DbErr> {
    matches::Entity::find_by_id(match_id)
        .lock_exclusive()
        .one(conn)
        .await?
        .ok_or_else(|| match_not_found(match_id))
}

pub async fn find_by_round<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    round_id: i64,
) -> Result<Vec<matches::Model>, sea_orm::DbErr> {
    matches::Entity::find()
        .filter(matches::Column::RoundId.eq(round_id))
        .order_by_asc(matches::Column::MatchNo)
        .all(conn)
        .await
}

pub async fn find_by_competition<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    competition_id: i64,
) -> Result<Vec<matches::Model>, sea_orm::DbErr> {
    matches::Entity::find()
        .filter(matches::Column::CompetitionId.eq(competition_id))
        .order_by_asc(matches::Column::RoundId)
        .order_by_asc(matches::Column::MatchNo)
        .all(conn)
        .await
}

pub async fn create_match<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: MatchCreate,
) -> Result<matches::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();
    let active = matches::ActiveModel {
        id: NotSet,
        competition_id: Set(dto.competition_id),
        round_id: Set(dto.round_id),
        match_no: Set(dto.match_no),
        format: Set(dto.format),
        status: Set(matches::MatchStatus::Scheduled),
        strokes_given: Set(dto.strokes_given),
        submitted_players: Set(serde_json::json!([])),
        is_decided: Set(false),
        decided_winner: Set(None),
        decided_score: Set(None),
        result_winner: Set(None),
        result_score: Set(None),
        conceded_by_team: Set(None),
        concede_reason: Set(None),
        created_at: Set(now),
        updated_at: Set(now),
        completed_at: Set(None),
        lock_version: Set(1),
    };

    active.insert(conn).await
}

pub async fn update_match<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: MatchUpdate,
) -> Result<matches::Model, sea_orm::DbErr> {
    let MatchUpdate {
        id,
        expected_version,
        require_status,
        status,
        strokes_given,
        submitted_players,
        result,
        conceded,
        completed_at,
    } = dto;

    let mut changes = <matches::ActiveModel as Default>::default();
    if let Some(status) = status {
        changes.status = Set(status);
    }
    if let Some(strokes) = strokes_given {
        changes.strokes_given = Set(strokes);
    }
    if let Some(submitted) = submitted_players {
        changes.submitted_players = Set(submitted);
    }
    if let Some((winner, score)) = result {
        changes.result_winner = Set(Some(winner));
        changes.result_score = Set(Some(score));
    }
    if let Some((team, reason)) = conceded {
        changes.conceded_by_team = Set(Some(team));
        changes.concede_reason = Set(reason);
    }
    if let Some(at) = completed_at {
        changes.completed_at = Set(Some(at));
    }

    optimistic_update_then_fetch(conn, id, expected_version, require_status, |update| {
        update.set(changes)
    })
    .await
}

/// Refresh the stored standing of an in-progress match. Returns rows affected.
///
/// Not version-guarded: the columns are a cache recomputed from the ledger on every write.
pub async fn update_standing<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: StandingUpdate,
) -> Result<u64, sea_orm::DbErr> {
    let changes = matches::ActiveModel {
        is_decided: Set(dto.is_decided),
        decided_winner: Set(dto.decided_winner),
        decided_score: Set(dto.decided_score),
        ..<matches::ActiveModel as Default>::default()
    };
    let result = matches::Entity::update_many()
        .set(changes)
        .filter(matches::Column::Id.eq(dto.id))
        .filter(matches::Column::Status.eq(matches::MatchStatus::InProgress))
        .exec(conn)
        .await?;
    Ok(result.rows_affected)
}
