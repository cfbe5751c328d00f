use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

pub use super::match_players::TeamSide;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum MatchFormat {
    #[sea_orm(string_value = "SINGLES")]
    Singles,
    #[sea_orm(string_value = "FOURBALL")]
    Fourball,
    #[sea_orm(string_value = "FOURSOMES")]
    Foursomes,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum MatchStatus {
    #[sea_orm(string_value = "SCHEDULED")]
    Scheduled,
    #[sea_orm(string_value = "IN_PROGRESS")]
    InProgress,
    #[sea_orm(string_value = "COMPLETED")]
    Completed,
    #[sea_orm(string_value = "WALKOVER")]
    Walkover,
    #[sea_orm(string_value = "CONCEDED")]
    Conceded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum WinnerSide {
    #[sea_orm(string_value = "A")]
    A,
    #[sea_orm(string_value = "B")]
    B,
    #[sea_orm(string_value = "HALVED")]
    Halved,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "matches")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_name = "competition_id")]
    pub competition_id: i64,
    #[sea_orm(column_name = "round_id")]
    pub round_id: i64,
    #[sea_orm(column_name = "match_no", column_type = "SmallInteger")]
    pub match_no: i16,
    pub format: MatchFormat,
    pub status: MatchStatus,
    /// `{"<player_id>": [strokes per hole x18]}`
    #[sea_orm(column_name = "strokes_given", column_type = "Json")]
    pub strokes_given: Json,
    /// Player ids that have submitted a full scorecard.
    #[sea_orm(column_name = "submitted_players", column_type = "Json")]
    pub submitted_players: Json,
    #[sea_orm(column_name = "is_decided")]
    pub is_decided: bool,
    #[sea_orm(column_name = "decided_winner")]
    pub decided_winner: Option<WinnerSide>,
    #[sea_orm(column_name = "decided_score")]
    pub decided_score: Option<String>,
    #[sea_orm(column_name = "result_winner")]
    pub result_winner: Option<WinnerSide>,
    #[sea_orm(column_name = "result_score")]
    pub result_score: Option<String>,
    #[sea_orm(column_name = "conceded_by_team")]
    pub conceded_by_team: Option<TeamSide>,
    #[sea_orm(column_name = "concede_reason")]
    pub concede_reason: Option<String>,
    #[sea_orm(column_name = "created_at")]
    pub created_at: OffsetDateTime,
    #[sea_orm(column_name = "updated_at")]
    pub updated_at: OffsetDateTime,
    #[sea_orm(column_name = "completed_at")]
    pub completed_at: Option<OffsetDateTime>,
    #[sea_orm(column_name = "lock_version")]
    pub lock_version: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::competitions::Entity",
        from = "Column::CompetitionId",
        to = "super::competitions::Column::Id"
    )]
    Competition,
    #[sea_orm(
        belongs_to = "super::rounds::Entity",
        from = "Column::RoundId",
        to = "super::rounds::Column::Id"
    )]
    Round,
    #[sea_orm(has_many = "super::match_players::Entity")]
    MatchPlayers,
    #[sea_orm(has_many = "super::hole_scores::Entity")]
    HoleScores,
}

impl Related<super::competitions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Competition.def()
    }
}

impl Related<super::rounds::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Round.def()
    }
}

impl Related<super::match_players::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MatchPlayers.def()
    }
}

impl Related<super::hole_scores::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::HoleScores.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
