use matchplay::adapters::matches_sea::{self, MatchUpdate, StandingUpdate};
use matchplay::db::txn::with_txn;
use matchplay::entities::matches::{MatchStatus, WinnerSide};
use matchplay::infra::db_errors::map_db_err;
use matchplay::{AppError, DomainError};

use crate::support::match_setup::scratch_singles;
use crate::support::test_state::build_test_state;

#[tokio::test]
async fn versioned_update_bumps_lock_version() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(&state, |txn| {
        Box::pin(async move {
            let (_, m) = scratch_singles(txn).await?;

            let updated = matches_sea::update_match(
                txn,
                MatchUpdate::new(m.id, m.lock_version)
                    .when_status(MatchStatus::InProgress)
                    .with_submitted_players(serde_json::json!([1])),
            )
            .await?;
            assert_eq!(updated.lock_version, m.lock_version + 1);
            assert_eq!(updated.submitted_players, serde_json::json!([1]));
            assert_eq!(updated.status, MatchStatus::InProgress);
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn stale_version_is_an_optimistic_lock_conflict() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(&state, |txn| {
        Box::pin(async move {
            let (_, m) = scratch_singles(txn).await?;
            matches_sea::update_match(txn, MatchUpdate::new(m.id, m.lock_version)).await?;

            let err = matches_sea::update_match(
                txn,
                MatchUpdate::new(m.id, m.lock_version).with_status(MatchStatus::Completed),
            )
            .await
            .unwrap_err();
            let mapped = map_db_err(err);
            assert!(mapped.is_optimistic_lock(), "got {mapped:?}");

            // The losing write left the row untouched.
            let current = matches_sea::require_match(txn, m.id).await?;
            assert_eq!(current.status, MatchStatus::InProgress);
            assert_eq!(current.lock_version, m.lock_version + 1);
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn status_guard_rejects_transitions_from_the_wrong_state() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(&state, |txn| {
        Box::pin(async move {
            let (_, m) = scratch_singles(txn).await?;

            let err = matches_sea::update_match(
                txn,
                MatchUpdate::new(m.id, m.lock_version)
                    .when_status(MatchStatus::Scheduled)
                    .with_status(MatchStatus::InProgress),
            )
            .await
            .unwrap_err();
            assert!(map_db_err(err).is_optimistic_lock());
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn missing_match_maps_to_not_found() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(&state, |txn| {
        Box::pin(async move {
            let err = matches_sea::update_match(txn, MatchUpdate::new(8_888, 1))
                .await
                .unwrap_err();
            assert!(matches!(map_db_err(err), DomainError::NotFound(_, _)));
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn standing_mirror_only_touches_live_matches() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(&state, |txn| {
        Box::pin(async move {
            let (_, m) = scratch_singles(txn).await?;
            let standing = StandingUpdate {
                id: m.id,
                is_decided: true,
                decided_winner: Some(WinnerSide::B),
                decided_score: Some("3&2".to_string()),
            };

            assert_eq!(matches_sea::update_standing(txn, standing.clone()).await?, 1);
            let stored = matches_sea::require_match(txn, m.id).await?;
            assert!(stored.is_decided);
            assert_eq!(stored.decided_winner, Some(WinnerSide::B));
            assert_eq!(stored.decided_score.as_deref(), Some("3&2"));
            assert_eq!(stored.lock_version, m.lock_version);

            matches_sea::update_match(
                txn,
                MatchUpdate::new(m.id, m.lock_version)
                    .with_status(MatchStatus::Completed)
                    .with_result(WinnerSide::B, "3&2"),
            )
            .await?;
            assert_eq!(matches_sea::update_standing(txn, standing).await?, 0);
            Ok(())
        })
    })
    .await
}
