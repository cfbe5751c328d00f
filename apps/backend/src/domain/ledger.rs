//! Dual-entry hole cells: input validation, resolution of a single cell, and
//! planning which writes a hole submission performs.

use crate::domain::handicap::StrokesTable;
use crate::domain::match_types::{PlayerId, Team, ValidationStatus, HOLES};
use crate::domain::roster::MatchRoster;
use crate::errors::domain::{DomainError, ValidationKind};

pub const MIN_SCORE: i32 = 1;
pub const MAX_SCORE: i32 = 9;

pub fn validate_hole_number(hole_number: i32) -> Result<u8, DomainError> {
    match u8::try_from(hole_number) {
        Ok(h) if (1..=HOLES).contains(&h) => Ok(h),
        _ => Err(DomainError::validation(
            ValidationKind::InvalidHoleNumber,
            format!("hole number {hole_number} must be between 1 and {HOLES}"),
        )),
    }
}

/// `None` is a picked-up hole and always valid.
pub fn validate_score(score: Option<i32>) -> Result<Option<u8>, DomainError> {
    match score {
        None => Ok(None),
        Some(s) if (MIN_SCORE..=MAX_SCORE).contains(&s) => Ok(Some(s as u8)),
        Some(s) => Err(DomainError::validation(
            ValidationKind::InvalidScore,
            format!("score {s} must be between {MIN_SCORE} and {MAX_SCORE}"),
        )),
    }
}

/// The two independent entries of one `(match, hole, player)` cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HoleCell {
    pub own_score: Option<u8>,
    pub own_submitted: bool,
    pub marker_score: Option<u8>,
    pub marker_submitted: bool,
    pub strokes_received: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub status: ValidationStatus,
    /// Set only for `Match` with a numeric score.
    pub net_score: Option<i16>,
}

impl HoleCell {
    pub fn apply_own(&mut self, score: Option<u8>) {
        self.own_score = score;
        self.own_submitted = true;
    }

    pub fn apply_marker(&mut self, score: Option<u8>) {
        self.marker_score = score;
        self.marker_submitted = true;
    }

    /// Resolve the cell. A picked-up hole agreed by both sides is `Match` with no net score.
    pub fn resolve(&self) -> Resolution {
        if !(self.own_submitted && self.marker_submitted) {
            return Resolution {
                status: ValidationStatus::Pending,
                net_score: None,
            };
        }
        if self.own_score != self.marker_score {
            return Resolution {
                status: ValidationStatus::Mismatch,
                net_score: None,
            };
        }
        Resolution {
            status: ValidationStatus::Match,
            net_score: self
                .own_score
                .map(|gross| i16::from(gross) - i16::from(self.strokes_received)),
        }
    }
}

/// A validated hole submission from one device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoleSubmission {
    pub hole_number: u8,
    pub scorer: PlayerId,
    pub marked_player: PlayerId,
    pub own_score: Option<u8>,
    pub marked_score: Option<u8>,
}

/// One side of a cell to write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellWrite {
    pub cell_player: PlayerId,
    pub team: Team,
    pub score: Option<u8>,
    pub strokes_received: u8,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SubmissionPlan {
    /// Write to the scorer's own cell; `None` when their card is already submitted.
    pub own_write: Option<CellWrite>,
    /// Write to the marked player's cell; `None` when that card is already submitted.
    pub marker_write: Option<CellWrite>,
}

impl SubmissionPlan {
    pub fn is_empty(&self) -> bool {
        self.own_write.is_none() && self.marker_write.is_none()
    }
}

/// Decide which cell writes a submission performs.
///
/// Checks the scorer plays in the match and that `marked_player` is the one
/// they mark. In foursomes both are normalized to their team's cell, so
/// either teammate writes the shared team score. Writes targeting a locked
/// cell are dropped without error.
pub fn plan_submission(
    roster: &MatchRoster,
    strokes: &StrokesTable,
    submitted: &[PlayerId],
    sub: &HoleSubmission,
) -> Result<SubmissionPlan, DomainError> {
    let scorer = roster.require_participant(sub.scorer)?;
    let own_cell = roster.cell_owner(sub.scorer)?;

    let assigned_cell = roster.cell_owner(scorer.marks_player_id)?;
    let marked_cell = roster
        .participant(sub.marked_player)
        .map(|_| roster.cell_owner(sub.marked_player))
        .transpose()?;
    let marked_cell = match marked_cell {
        Some(cell) if cell == assigned_cell => cell,
        _ => {
            return Err(DomainError::validation(
                ValidationKind::MarkerMismatch,
                format!(
                    "player {} marks player {}, not {}",
                    sub.scorer, scorer.marks_player_id, sub.marked_player
                ),
            ))
        }
    };
    let marked_team = roster.require_participant(marked_cell)?.team;

    let own_write = (!roster.is_cell_locked(own_cell, submitted)).then(|| CellWrite {
        cell_player: own_cell,
        team: scorer.team,
        score: sub.own_score,
        strokes_received: strokes.strokes_for(own_cell, sub.hole_number),
    });
    let marker_write = (!roster.is_cell_locked(marked_cell, submitted)).then(|| CellWrite {
        cell_player: marked_cell,
        team: marked_team,
        score: sub.marked_score,
        strokes_received: strokes.strokes_for(marked_cell, sub.hole_number),
    });

    Ok(SubmissionPlan {
        own_write,
        marker_write,
    })
}

/// Snapshot of one persisted cell as seen by standing computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredCell {
    pub hole_number: u8,
    pub player_id: PlayerId,
    pub team: Team,
    pub status: ValidationStatus,
    pub net_score: Option<i16>,
}

/// Holes with at least one entry that are not fully validated across all required cells.
pub fn unresolved_holes(roster: &MatchRoster, cells: &[ScoredCell]) -> Vec<u8> {
    let required = roster.required_cells();
    (1..=HOLES)
        .filter(|&hole| {
            let on_hole: Vec<&ScoredCell> =
                cells.iter().filter(|c| c.hole_number == hole).collect();
            if on_hole.is_empty() {
                return false;
            }
            !required.iter().all(|(owner, _)| {
                on_hole
                    .iter()
                    .any(|c| c.player_id == *owner && c.status == ValidationStatus::Match)
            })
        })
        .collect()
}
