//! DTOs for hole_scores_sea adapter.

use crate::entities::hole_scores::{CellStatus, TeamSide};

/// One side of a ledger cell to upsert.
#[derive(Debug, Clone)]
pub struct CellUpsert {
    pub match_id: i64,
    pub hole_number: i16,
    pub player_id: i64,
    pub team: TeamSide,
    pub score: Option<i16>,
    pub strokes_received: i16,
}

/// Resolved validation state written back after an upsert.
#[derive(Debug, Clone)]
pub struct CellResolution {
    pub id: i64,
    pub validation_status: CellStatus,
    pub net_score: Option<i16>,
}
