//! Two devices racing on one match, each in its own transaction.
//!
//! Needs real row locks, so these only run with
//! `MATCHPLAY_TEST_DB_KIND=postgres`; on in-memory SQLite they return early.

use std::time::Duration;

use matchplay::config::db::{db_kind, DbKind, DbProfile};
use matchplay::domain::{MatchStatus, MatchWinner};
use matchplay::repos::matches;
use matchplay::{AppError, ErrorCode, MatchScoringService};
use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};
use tracing::info;

use crate::support::match_setup::scratch_singles;
use crate::support::scoring::{cell, enter, play_singles_holes};
use crate::support::test_state::build_test_state;

/// Head start given to the competing transaction before the first one commits.
const OVERLAP: Duration = Duration::from_millis(200);

async fn postgres_db() -> Result<Option<DatabaseConnection>, AppError> {
    if db_kind(DbProfile::Test)? != DbKind::Postgres {
        info!("Skipping: concurrent transactions need MATCHPLAY_TEST_DB_KIND=postgres");
        return Ok(None);
    }
    let state = build_test_state().await?;
    Ok(state.db().cloned())
}

/// Commit on success, roll back otherwise, like `with_txn` does.
async fn finish<T>(txn: DatabaseTransaction, res: &Result<T, AppError>) -> Result<(), AppError> {
    if res.is_ok() {
        txn.commit().await?;
    } else {
        txn.rollback().await?;
    }
    Ok(())
}

async fn commit_after_overlap(txn: DatabaseTransaction) -> Result<(), AppError> {
    tokio::time::sleep(OVERLAP).await;
    txn.commit().await?;
    Ok(())
}

#[tokio::test]
async fn hole_write_waits_for_finalization_and_is_rejected() -> Result<(), AppError> {
    let Some(db) = postgres_db().await? else {
        return Ok(());
    };
    let (_, m) = scratch_singles(&db).await?;
    play_singles_holes(&db, m.id, &[(4, 4), (4, 4), (4, 4), (4, 4)]).await?;
    let service = MatchScoringService::new();
    service.submit_scorecard(&db, m.id, 1).await?;

    let closing = db.begin().await?;
    let outcome = service.submit_scorecard(&closing, m.id, 2).await?;
    assert!(outcome.match_completed);

    let (late, committed) = tokio::join!(
        async {
            let txn = db.begin().await?;
            let res = enter(&txn, m.id, 2, 1, 5, Some(7), Some(4)).await;
            finish(txn, &res).await?;
            Ok::<_, AppError>(res)
        },
        commit_after_overlap(closing)
    );
    committed?;
    match late? {
        Ok(_) => panic!("hole 5 was written into a completed match"),
        Err(e) => assert_eq!(e.code(), ErrorCode::MatchNotInProgress),
    }

    let view = service.get_scoring_view(&db, m.id, 2).await?;
    assert_eq!(view.status, MatchStatus::Completed);
    assert!(cell(&view, 5, 1).is_none());
    assert!(cell(&view, 5, 2).is_none());
    Ok(())
}

#[tokio::test]
async fn scorecard_rereads_after_a_concurrent_hole_write() -> Result<(), AppError> {
    let Some(db) = postgres_db().await? else {
        return Ok(());
    };
    let (_, m) = scratch_singles(&db).await?;
    play_singles_holes(&db, m.id, &[(4, 4), (4, 4), (4, 4), (4, 4)]).await?;
    let service = MatchScoringService::new();
    service.submit_scorecard(&db, m.id, 1).await?;

    // Player 2 starts hole 5 and holds the match row while the last card comes in.
    let writer = db.begin().await?;
    enter(&writer, m.id, 2, 1, 5, Some(7), Some(4)).await?;

    let (scorecard, committed) = tokio::join!(
        async {
            let txn = db.begin().await?;
            let res = service.submit_scorecard(&txn, m.id, 2).await;
            finish(txn, &res).await?;
            Ok::<_, AppError>(res)
        },
        commit_after_overlap(writer)
    );
    committed?;
    match scorecard? {
        Ok(outcome) => panic!("scorecard accepted over an unresolved hole: {outcome:?}"),
        Err(e) => assert_eq!(e.code(), ErrorCode::UnresolvedHoles),
    }

    let stored = matches::require_match(&db, m.id).await?;
    assert_eq!(stored.status, MatchStatus::InProgress);
    assert_eq!(stored.submitted_players, vec![1]);
    assert!(stored.result.is_none());
    Ok(())
}

#[tokio::test]
async fn racing_last_scorecards_finalize_exactly_once() -> Result<(), AppError> {
    let Some(db) = postgres_db().await? else {
        return Ok(());
    };
    let (_, m) = scratch_singles(&db).await?;
    play_singles_holes(&db, m.id, &[(3, 4), (4, 4), (4, 4)]).await?;
    let service = MatchScoringService::new();

    let first = db.begin().await?;
    let first_outcome = service.submit_scorecard(&first, m.id, 1).await?;
    assert!(!first_outcome.all_submitted);

    // The second card reads the match before the first commits and must
    // retry its lost compare-and-swap against the fresh row.
    let (second, committed) = tokio::join!(
        async {
            let txn = db.begin().await?;
            let res = service.submit_scorecard(&txn, m.id, 2).await;
            finish(txn, &res).await?;
            Ok::<_, AppError>(res)
        },
        commit_after_overlap(first)
    );
    committed?;
    let second = second??;
    assert!(second.all_submitted);
    assert!(second.match_completed);

    let stored = matches::require_match(&db, m.id).await?;
    assert_eq!(stored.status, MatchStatus::Completed);
    let mut submitted = stored.submitted_players.clone();
    submitted.sort_unstable();
    assert_eq!(submitted, vec![1, 2]);
    let result = stored.result.expect("stored result");
    assert_eq!(result.winner, MatchWinner::A);
    assert_eq!(result.score, "1 UP");
    assert_eq!(second.result, Some(result));

    // Late retries from both devices see the one stored result.
    let again = service.submit_scorecard(&db, m.id, 1).await?;
    assert_eq!(again, second);
    Ok(())
}
