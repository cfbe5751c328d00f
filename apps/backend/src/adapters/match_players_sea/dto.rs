//! DTOs for match_players_sea adapter.

use crate::entities::match_players::TeamSide;

#[derive(Debug, Clone)]
pub struct MatchPlayerCreate {
    pub player_id: i64,
    pub team: TeamSide,
    pub position: i16,
    pub playing_handicap: f64,
    pub tee: String,
    pub marks_player_id: i64,
}
