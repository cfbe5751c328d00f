//! Handicap stroke allocation.
//!
//! The lower side plays off scratch; the higher side receives the rounded
//! difference, one stroke per hole in stroke-index order (index 1 first),
//! wrapping to a second pass when more than 18 strokes are given.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::match_types::{MatchFormat, PlayerId, Team, HOLES};
use crate::domain::roster::MatchRoster;
use crate::errors::domain::{DomainError, ValidationKind};

/// Playing handicaps outside this range are rejected as input errors.
pub const MIN_PLAYING_HANDICAP: f64 = -10.0;
pub const MAX_PLAYING_HANDICAP: f64 = 54.0;

pub fn validate_playing_handicap(h: f64) -> Result<(), DomainError> {
    if !h.is_finite() || !(MIN_PLAYING_HANDICAP..=MAX_PLAYING_HANDICAP).contains(&h) {
        return Err(DomainError::validation(
            ValidationKind::InvalidHandicap,
            format!(
                "playing handicap {h} must be between {MIN_PLAYING_HANDICAP} and {MAX_PLAYING_HANDICAP}"
            ),
        ));
    }
    Ok(())
}

/// Check that `stroke_indices[i]` (the index of hole `i + 1`) is a permutation of 1..=18.
pub fn validate_stroke_indices(stroke_indices: &[u8]) -> Result<(), DomainError> {
    if stroke_indices.len() != usize::from(HOLES) {
        return Err(DomainError::validation(
            ValidationKind::InvalidStrokeIndex,
            format!("expected {HOLES} stroke indices, got {}", stroke_indices.len()),
        ));
    }
    let mut seen = [false; HOLES as usize];
    for (i, &si) in stroke_indices.iter().enumerate() {
        if !(1..=HOLES).contains(&si) || seen[usize::from(si - 1)] {
            return Err(DomainError::validation(
                ValidationKind::InvalidStrokeIndex,
                format!("hole {} has invalid or duplicate stroke index {si}", i + 1),
            ));
        }
        seen[usize::from(si - 1)] = true;
    }
    Ok(())
}

/// Strokes the higher handicap receives from the lower, rounded to the nearest whole stroke.
pub fn strokes_difference(receiver: f64, giver: f64) -> u32 {
    let diff = (receiver - giver).max(0.0).round();
    // Both inputs are validated to a bounded range, so the difference fits.
    diff as u32
}

/// Spread `strokes` over the 18 holes in stroke-index order.
///
/// Returns strokes received per hole, indexed by `hole_number - 1`.
pub fn distribute_strokes(strokes: u32, stroke_indices: &[u8]) -> Vec<u8> {
    let holes = u32::from(HOLES);
    let full_passes = strokes / holes;
    let extra = strokes % holes;
    stroke_indices
        .iter()
        .map(|&si| {
            let bonus = u32::from(u32::from(si) <= extra);
            // Capped at 54 handicap this never exceeds 4 strokes on one hole.
            (full_passes + bonus) as u8
        })
        .collect()
}

/// Per-player, per-hole strokes received, fixed at match creation.
///
/// Serialized as `{"<player_id>": [s1, .., s18]}` into `matches.strokes_given`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StrokesTable(BTreeMap<PlayerId, Vec<u8>>);

impl StrokesTable {
    pub fn strokes_for(&self, player_id: PlayerId, hole_number: u8) -> u8 {
        self.0
            .get(&player_id)
            .and_then(|row| row.get(usize::from(hole_number.saturating_sub(1))))
            .copied()
            .unwrap_or(0)
    }

    pub fn row(&self, player_id: PlayerId) -> Option<&[u8]> {
        self.0.get(&player_id).map(Vec::as_slice)
    }

    pub fn total_for(&self, player_id: PlayerId) -> u32 {
        self.row(player_id)
            .map(|r| r.iter().map(|&s| u32::from(s)).sum())
            .unwrap_or(0)
    }

    fn insert(&mut self, player_id: PlayerId, row: Vec<u8>) {
        self.0.insert(player_id, row);
    }
}

/// Build the strokes table for a roster.
///
/// Singles and foursomes compare the two side handicaps (a foursomes side is
/// represented by its first player's adjusted value). Fourball gives each
/// player strokes off the lowest of the four.
pub fn allocate_strokes(
    roster: &MatchRoster,
    stroke_indices: &[u8],
) -> Result<StrokesTable, DomainError> {
    validate_stroke_indices(stroke_indices)?;
    for p in roster.participants() {
        validate_playing_handicap(p.playing_handicap)?;
    }

    let mut table = StrokesTable::default();
    match roster.format() {
        MatchFormat::Fourball => {
            let low = roster
                .participants()
                .iter()
                .map(|p| p.playing_handicap)
                .fold(f64::INFINITY, f64::min);
            for p in roster.participants() {
                let strokes = strokes_difference(p.playing_handicap, low);
                table.insert(p.player_id, distribute_strokes(strokes, stroke_indices));
            }
        }
        MatchFormat::Singles | MatchFormat::Foursomes => {
            let side = |team: Team| {
                roster.side_handicap(team).ok_or_else(|| {
                    DomainError::validation(
                        ValidationKind::InvalidParticipants,
                        format!("team {team:?} has no players"),
                    )
                })
            };
            let (h_a, h_b) = (side(Team::A)?, side(Team::B)?);
            for p in roster.participants() {
                let (mine, theirs) = match p.team {
                    Team::A => (h_a, h_b),
                    Team::B => (h_b, h_a),
                };
                let strokes = strokes_difference(mine, theirs);
                table.insert(p.player_id, distribute_strokes(strokes, stroke_indices));
            }
        }
    }
    Ok(table)
}
