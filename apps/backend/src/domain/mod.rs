//! Domain layer: pure match-play scoring logic, no I/O.

pub mod handicap;
pub mod leaderboard;
pub mod ledger;
pub mod match_types;
pub mod result;
pub mod roster;
pub mod standing;

#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod tests_leaderboard;
#[cfg(test)]
mod tests_props_ledger;
#[cfg(test)]
mod tests_roster;
#[cfg(test)]
mod tests_standing;

// Re-exports for ergonomics
pub use handicap::{allocate_strokes, StrokesTable};
pub use ledger::{HoleCell, HoleSubmission, ScoredCell};
pub use match_types::{HoleInfo, MatchFormat, MatchStatus, PlayerId, Team, ValidationStatus, HOLES};
pub use result::{MatchResult, MatchWinner};
pub use roster::{MatchRoster, Participant};
pub use standing::{compute_standing, standing_from_cells, MatchStanding};
