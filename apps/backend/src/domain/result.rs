use serde::{Deserialize, Serialize};

use crate::domain::match_types::Team;
use crate::domain::standing::MatchStanding;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchWinner {
    A,
    B,
    Halved,
}

impl MatchWinner {
    pub fn team(self) -> Option<Team> {
        match self {
            MatchWinner::A => Some(Team::A),
            MatchWinner::B => Some(Team::B),
            MatchWinner::Halved => None,
        }
    }
}

impl From<Team> for MatchWinner {
    fn from(team: Team) -> Self {
        match team {
            Team::A => MatchWinner::A,
            Team::B => MatchWinner::B,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MatchResult {
    pub winner: MatchWinner,
    pub score: String,
}

pub const HALVED_SCORE: &str = "HALVED";
pub const CONCEDED_SCORE: &str = "CONCEDED";
pub const WALKOVER_SCORE: &str = "W/O";

/// `"N&M"` while holes remain, `"N UP"` when the lead is held to the last hole.
pub fn decided_score(lead: u16, holes_remaining: u8) -> String {
    if holes_remaining == 0 {
        format!("{lead} UP")
    } else {
        format!("{lead}&{holes_remaining}")
    }
}

/// Final result from the last computed standing.
///
/// An early decision wins outright. Otherwise a level match is halved and a
/// lead (full distance, or cards returned early) wins `"N UP"`.
pub fn final_result(standing: &MatchStanding) -> MatchResult {
    if let Some(decided) = &standing.decided_result {
        return decided.clone();
    }
    match standing.leader() {
        None => MatchResult {
            winner: MatchWinner::Halved,
            score: HALVED_SCORE.to_string(),
        },
        Some(team) => MatchResult {
            winner: team.into(),
            score: format!("{} UP", standing.holes_up.unsigned_abs()),
        },
    }
}

pub fn conceded_result(conceding_team: Team) -> MatchResult {
    MatchResult {
        winner: conceding_team.opponent().into(),
        score: CONCEDED_SCORE.to_string(),
    }
}

pub fn walkover_result(winner: Team) -> MatchResult {
    MatchResult {
        winner: winner.into(),
        score: WALKOVER_SCORE.to_string(),
    }
}
