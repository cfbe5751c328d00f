use serde::{Deserialize, Serialize};

/// Identifier of a player as supplied by the identity collaborator.
pub type PlayerId = i64;

/// Holes in a match-play round.
pub const HOLES: u8 = 18;

/// Side of a match. Team A leads when `holes_up` is positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Team {
    A,
    B,
}

impl Team {
    pub fn opponent(self) -> Team {
        match self {
            Team::A => Team::B,
            Team::B => Team::A,
        }
    }

    /// +1 for team A, -1 for team B; the sign convention of `holes_up`.
    pub fn sign(self) -> i16 {
        match self {
            Team::A => 1,
            Team::B => -1,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Team::A => "A",
            Team::B => "B",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchFormat {
    /// One player per side, own ball.
    Singles,
    /// Two players per side, each playing their own ball; best ball counts.
    Fourball,
    /// Two players per side sharing one ball; one team score per hole.
    Foursomes,
}

impl MatchFormat {
    pub fn players_per_team(self) -> usize {
        match self {
            MatchFormat::Singles => 1,
            MatchFormat::Fourball | MatchFormat::Foursomes => 2,
        }
    }

    /// True when teammates share one ledger cell per hole.
    pub fn shares_team_ball(self) -> bool {
        matches!(self, MatchFormat::Foursomes)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchStatus {
    Scheduled,
    InProgress,
    Completed,
    Walkover,
    Conceded,
}

impl MatchStatus {
    /// Terminal matches are immutable and score leaderboard points.
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            MatchStatus::Completed | MatchStatus::Walkover | MatchStatus::Conceded
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValidationStatus {
    Pending,
    Match,
    Mismatch,
}

/// Hole data supplied by the round collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoleInfo {
    pub hole_number: u8,
    pub par: u8,
    pub stroke_index: u8,
}
