//! Property tests for dual-entry cell resolution.

use proptest::prelude::*;

use crate::domain::ledger::HoleCell;
use crate::domain::match_types::ValidationStatus;
use crate::domain::test_prelude;

fn score() -> impl Strategy<Value = Option<u8>> {
    prop_oneof![
        8 => (1u8..=9).prop_map(Some),
        1 => Just(None),
    ]
}

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// MATCH implies both entries agree (null equals null), and net is set only for numbers.
    #[test]
    fn prop_match_implies_agreement(own in score(), marker in score(), strokes in 0u8..=3) {
        let mut cell = HoleCell { strokes_received: strokes, ..HoleCell::default() };
        cell.apply_own(own);
        cell.apply_marker(marker);
        let r = cell.resolve();

        if r.status == ValidationStatus::Match {
            prop_assert_eq!(own, marker);
            prop_assert_eq!(r.net_score, own.map(|g| i16::from(g) - i16::from(strokes)));
        } else {
            prop_assert_eq!(r.status, ValidationStatus::Mismatch);
            prop_assert!(r.net_score.is_none());
        }
    }

    /// Re-applying the same pair leaves cell and resolution unchanged.
    #[test]
    fn prop_resubmission_is_idempotent(own in score(), marker in score()) {
        let mut cell = HoleCell::default();
        cell.apply_own(own);
        cell.apply_marker(marker);
        let first = (cell, cell.resolve());

        cell.apply_own(own);
        cell.apply_marker(marker);
        prop_assert_eq!(first, (cell, cell.resolve()));
    }

    /// One side alone never resolves.
    #[test]
    fn prop_single_entry_is_pending(own in score()) {
        let mut cell = HoleCell::default();
        cell.apply_own(own);
        prop_assert_eq!(cell.resolve().status, ValidationStatus::Pending);
    }
}
