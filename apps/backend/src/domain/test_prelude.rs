//! Shared fixtures and proptest configuration for domain unit tests.
//!
//! Env knobs:
//! - PROPTEST_CASES: number of cases per property (default 8).
//! - PROPTEST_MAX_SHRINK_MS: optional cap for shrinking time in milliseconds.

use crate::domain::ledger::ScoredCell;
use crate::domain::match_types::{MatchFormat, PlayerId, Team, ValidationStatus};
use crate::domain::roster::{MatchRoster, Participant};

pub fn proptest_config() -> proptest::prelude::ProptestConfig {
    let base = proptest::prelude::ProptestConfig::default();
    let cases = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|s| s.parse::<u32>().ok())
        .unwrap_or(8)
        .max(1);
    let max_shrink_time = std::env::var("PROPTEST_MAX_SHRINK_MS")
        .ok()
        .and_then(|s| s.parse::<u32>().ok())
        .unwrap_or(base.max_shrink_time);

    proptest::prelude::ProptestConfig {
        failure_persistence: None,
        cases,
        max_shrink_time,
        ..base
    }
}

/// Stroke index equal to hole number.
pub fn straight_indices() -> Vec<u8> {
    (1..=18).collect()
}

pub fn participant(
    player_id: PlayerId,
    team: Team,
    position: u8,
    handicap: f64,
    marks: PlayerId,
) -> Participant {
    Participant {
        player_id,
        team,
        position,
        playing_handicap: handicap,
        tee: "WHITE".to_string(),
        marks_player_id: marks,
    }
}

/// Player 1 (A) vs player 2 (B), marking each other.
pub fn singles(h_a: f64, h_b: f64) -> MatchRoster {
    MatchRoster::new(
        MatchFormat::Singles,
        vec![
            participant(1, Team::A, 0, h_a, 2),
            participant(2, Team::B, 0, h_b, 1),
        ],
    )
    .expect("valid singles roster")
}

/// Players 1,2 (A) vs 3,4 (B); 1<->3 and 2<->4 mark each other.
pub fn pairs(format: MatchFormat, handicaps: [f64; 4]) -> MatchRoster {
    MatchRoster::new(
        format,
        vec![
            participant(1, Team::A, 0, handicaps[0], 3),
            participant(2, Team::A, 1, handicaps[1], 4),
            participant(3, Team::B, 0, handicaps[2], 1),
            participant(4, Team::B, 1, handicaps[3], 2),
        ],
    )
    .expect("valid pairs roster")
}

pub fn matched(hole_number: u8, player_id: PlayerId, team: Team, net: Option<i16>) -> ScoredCell {
    ScoredCell {
        hole_number,
        player_id,
        team,
        status: ValidationStatus::Match,
        net_score: net,
    }
}

/// Singles cells for holes where A and B post the given nets, all validated.
pub fn singles_cells(nets: &[(Option<i16>, Option<i16>)]) -> Vec<ScoredCell> {
    nets.iter()
        .enumerate()
        .flat_map(|(i, (a, b))| {
            let hole = (i + 1) as u8;
            [matched(hole, 1, Team::A, *a), matched(hole, 2, Team::B, *b)]
        })
        .collect()
}
