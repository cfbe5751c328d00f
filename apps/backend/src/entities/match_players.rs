use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Match side as stored in `team` columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(1))")]
pub enum TeamSide {
    #[sea_orm(string_value = "A")]
    A,
    #[sea_orm(string_value = "B")]
    B,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "match_players")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_name = "match_id")]
    pub match_id: i64,
    #[sea_orm(column_name = "player_id")]
    pub player_id: i64,
    pub team: TeamSide,
    #[sea_orm(column_type = "SmallInteger")]
    pub position: i16,
    #[sea_orm(column_name = "playing_handicap", column_type = "Double")]
    pub playing_handicap: f64,
    pub tee: String,
    #[sea_orm(column_name = "marks_player_id")]
    pub marks_player_id: i64,
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
