//! Ryder-Cup style points: a pure fold over the matches of a competition.

use serde::Serialize;

use crate::domain::match_types::{MatchFormat, MatchStatus, Team};
use crate::domain::result::{MatchResult, MatchWinner};
use crate::domain::standing::MatchStanding;

/// Input row for one match.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchSummary {
    pub match_id: i64,
    pub round_id: i64,
    pub match_no: i32,
    pub format: MatchFormat,
    pub status: MatchStatus,
    pub result: Option<MatchResult>,
    /// Present for in-progress matches.
    pub live: Option<MatchStanding>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LiveStanding {
    pub holes_up: i16,
    pub holes_played: u8,
    pub holes_remaining: u8,
    pub leader: Option<Team>,
    pub summary: String,
}

impl From<&MatchStanding> for LiveStanding {
    fn from(s: &MatchStanding) -> Self {
        Self {
            holes_up: s.holes_up,
            holes_played: s.holes_played,
            holes_remaining: s.holes_remaining,
            leader: s.leader(),
            summary: s.summary(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchLine {
    pub match_id: i64,
    pub round_id: i64,
    pub match_no: i32,
    pub format: MatchFormat,
    pub status: MatchStatus,
    pub team_a_points: f64,
    pub team_b_points: f64,
    pub result: Option<MatchResult>,
    pub live_standing: Option<LiveStanding>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Leaderboard {
    pub team_a_points: f64,
    pub team_b_points: f64,
    pub completed_matches: usize,
    pub per_match: Vec<MatchLine>,
}

/// Points for a finished match: 1/0 to winner/loser, 0.5 each when halved.
pub fn points_for(result: &MatchResult) -> (f64, f64) {
    match result.winner {
        MatchWinner::A => (1.0, 0.0),
        MatchWinner::B => (0.0, 1.0),
        MatchWinner::Halved => (0.5, 0.5),
    }
}

pub fn aggregate(matches: &[MatchSummary]) -> Leaderboard {
    let mut board = Leaderboard {
        team_a_points: 0.0,
        team_b_points: 0.0,
        completed_matches: 0,
        per_match: Vec::with_capacity(matches.len()),
    };

    let mut ordered: Vec<&MatchSummary> = matches.iter().collect();
    ordered.sort_by_key(|m| (m.round_id, m.match_no, m.match_id));

    for m in ordered {
        let (a, b) = match (&m.result, m.status.is_terminal()) {
            (Some(result), true) => {
                board.completed_matches += 1;
                points_for(result)
            }
            _ => (0.0, 0.0),
        };
        board.team_a_points += a;
        board.team_b_points += b;

        let live_standing = match m.status {
            MatchStatus::InProgress => m.live.as_ref().map(LiveStanding::from),
            _ => None,
        };

        board.per_match.push(MatchLine {
            match_id: m.match_id,
            round_id: m.round_id,
            match_no: m.match_no,
            format: m.format,
            status: m.status,
            team_a_points: a,
            team_b_points: b,
            result: m.result.clone().filter(|_| m.status.is_terminal()),
            live_standing,
        });
    }
    board
}
