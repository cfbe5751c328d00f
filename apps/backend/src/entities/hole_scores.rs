use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

pub use super::match_players::TeamSide;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum CellStatus {
    #[sea_orm(string_value = "PENDING")]
    Pending,
    #[sea_orm(string_value = "MATCH")]
    Match,
    #[sea_orm(string_value = "MISMATCH")]
    Mismatch,
}

/// One dual-entry ledger cell, unique per `(match_id, hole_number, player_id)`.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "hole_scores")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_name = "match_id")]
    pub match_id: i64,
    #[sea_orm(column_name = "hole_number", column_type = "SmallInteger")]
    pub hole_number: i16,
    #[sea_orm(column_name = "player_id")]
    pub player_id: i64,
    pub team: TeamSide,
    #[sea_orm(column_name = "own_score", column_type = "SmallInteger")]
    pub own_score: Option<i16>,
    #[sea_orm(column_name = "own_submitted")]
    pub own_submitted: bool,
    #[sea_orm(column_name = "marker_score", column_type = "SmallInteger")]
    pub marker_score: Option<i16>,
    #[sea_orm(column_name = "marker_submitted")]
    pub marker_submitted: bool,
    #[sea_orm(column_name = "strokes_received", column_type = "SmallInteger")]
    pub strokes_received: i16,
    #[sea_orm(column_name = "net_score", column_type = "SmallInteger")]
    pub net_score: Option<i16>,
    #[sea_orm(column_name = "validation_status")]
    pub validation_status: CellStatus,
    #[sea_orm(column_name = "created_at")]
    pub created_at: OffsetDateTime,
    #[sea_orm(column_name = "updated_at")]
    pub updated_at: OffsetDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::matches::Entity",
        from = "Column::MatchId",
        to = "super::matches::Column::Id"
    )]
    Match,
}

impl Related<super::matches::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Match.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
