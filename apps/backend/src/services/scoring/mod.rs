//! Match scoring service - bridges the pure scoring domain with persistence.
//!
//! Every method expects to run inside one transaction scoped to a single
//! match; callers wrap it with `db::txn::with_txn`.

mod completion;
mod finalizer;
mod reconciler;
mod view;

pub use completion::ScorecardOutcome;
pub(crate) use finalizer::complete_round_if_finished;
pub use reconciler::HoleScoreInput;
pub use view::{CellView, HoleRow, RequesterView, ScoringView};

/// Scoring service - stateless; all state lives in the ledger and match rows.
#[derive(Debug, Default, Clone, Copy)]
pub struct MatchScoringService;

impl MatchScoringService {
    pub fn new() -> Self {
        Self
    }
}
