use serde::Serialize;

use crate::domain::ledger::ScoredCell;
use crate::domain::match_types::{MatchFormat, Team, ValidationStatus, HOLES};
use crate::domain::result::{decided_score, MatchResult, MatchWinner};
use crate::domain::roster::MatchRoster;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HoleOutcome {
    Won(Team),
    Halved,
}

/// Net scores of one fully-validated hole, grouped by team.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedHole {
    pub hole_number: u8,
    pub team_a: Vec<Option<i16>>,
    pub team_b: Vec<Option<i16>>,
}

/// Lower of a side's numeric nets; `None` when every ball was picked up.
fn best_net(nets: &[Option<i16>]) -> Option<i16> {
    nets.iter().flatten().copied().min()
}

/// Lower wins; a picked-up ball loses to any number; two pick-ups halve.
fn compare_nets(a: Option<i16>, b: Option<i16>) -> HoleOutcome {
    match (a, b) {
        (Some(a), Some(b)) if a < b => HoleOutcome::Won(Team::A),
        (Some(a), Some(b)) if b < a => HoleOutcome::Won(Team::B),
        (Some(_), None) => HoleOutcome::Won(Team::A),
        (None, Some(_)) => HoleOutcome::Won(Team::B),
        _ => HoleOutcome::Halved,
    }
}

impl MatchFormat {
    /// Winner of one hole given each team's validated net scores.
    pub fn resolve_hole_winner(self, team_a: &[Option<i16>], team_b: &[Option<i16>]) -> HoleOutcome {
        match self {
            // One ball per side.
            MatchFormat::Singles | MatchFormat::Foursomes => compare_nets(
                team_a.first().copied().flatten(),
                team_b.first().copied().flatten(),
            ),
            MatchFormat::Fourball => compare_nets(best_net(team_a), best_net(team_b)),
        }
    }
}

/// Holes whose every required cell is `Match`, in hole order.
pub fn resolved_holes(roster: &MatchRoster, cells: &[ScoredCell]) -> Vec<ResolvedHole> {
    let required = roster.required_cells();
    let mut holes = Vec::new();
    for hole in 1..=HOLES {
        let mut team_a = Vec::new();
        let mut team_b = Vec::new();
        let mut complete = true;
        for (owner, team) in &required {
            let cell = cells.iter().find(|c| {
                c.hole_number == hole && c.player_id == *owner && c.status == ValidationStatus::Match
            });
            match (cell, team) {
                (Some(c), Team::A) => team_a.push(c.net_score),
                (Some(c), Team::B) => team_b.push(c.net_score),
                (None, _) => {
                    complete = false;
                    break;
                }
            }
        }
        if complete {
            holes.push(ResolvedHole {
                hole_number: hole,
                team_a,
                team_b,
            });
        }
    }
    holes
}

/// Running match-play state derived from validated holes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchStanding {
    /// Positive when team A leads.
    pub holes_up: i16,
    pub holes_played: u8,
    pub holes_remaining: u8,
    pub is_decided: bool,
    pub decided_result: Option<MatchResult>,
    /// Hole on which the lead first exceeded the holes remaining.
    pub decided_at_hole: Option<u8>,
    pub hole_outcomes: Vec<(u8, HoleOutcome)>,
}

impl MatchStanding {
    pub fn all_square() -> Self {
        Self {
            holes_up: 0,
            holes_played: 0,
            holes_remaining: HOLES,
            is_decided: false,
            decided_result: None,
            decided_at_hole: None,
            hole_outcomes: Vec::new(),
        }
    }

    pub fn leader(&self) -> Option<Team> {
        match self.holes_up.signum() {
            1 => Some(Team::A),
            -1 => Some(Team::B),
            _ => None,
        }
    }

    /// Short live text such as `"A 2 UP"` or `"AS"`.
    pub fn summary(&self) -> String {
        match self.leader() {
            Some(team) => format!("{} {} UP", team.as_str(), self.holes_up.unsigned_abs()),
            None => "AS".to_string(),
        }
    }
}

/// Fold resolved holes into a standing, stopping at the first decision.
///
/// Holes are played in ascending order; a gap (an unresolved hole) does not
/// stop later resolved holes from counting.
pub fn compute_standing(format: MatchFormat, holes: &[ResolvedHole]) -> MatchStanding {
    let mut ordered: Vec<&ResolvedHole> = holes.iter().collect();
    ordered.sort_by_key(|h| h.hole_number);

    let mut standing = MatchStanding::all_square();
    for hole in ordered {
        let outcome = format.resolve_hole_winner(&hole.team_a, &hole.team_b);
        if let HoleOutcome::Won(team) = outcome {
            standing.holes_up += team.sign();
        }
        standing.holes_played += 1;
        standing.holes_remaining = HOLES.saturating_sub(standing.holes_played);
        standing.hole_outcomes.push((hole.hole_number, outcome));

        let lead = standing.holes_up.unsigned_abs();
        if lead > u16::from(standing.holes_remaining) {
            let winner = if standing.holes_up > 0 {
                MatchWinner::A
            } else {
                MatchWinner::B
            };
            standing.is_decided = true;
            standing.decided_at_hole = Some(hole.hole_number);
            standing.decided_result = Some(MatchResult {
                winner,
                score: decided_score(lead, standing.holes_remaining),
            });
            break;
        }
    }
    standing
}

/// Convenience: standing straight from ledger cells.
pub fn standing_from_cells(roster: &MatchRoster, cells: &[ScoredCell]) -> MatchStanding {
    compute_standing(roster.format(), &resolved_holes(roster, cells))
}
