//! SeaORM adapters: queries returning `sea_orm::DbErr`.

pub mod competitions_sea;
pub mod hole_scores_sea;
pub mod match_players_sea;
pub mod matches_sea;
pub mod rounds_sea;
