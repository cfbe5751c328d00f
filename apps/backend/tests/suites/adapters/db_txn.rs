//! `with_txn` commit, rollback and missing-database behavior.

use matchplay::db::txn::with_txn;
use matchplay::db::txn_policy::{self, TxnPolicy};
use matchplay::infra::state::build_state;
use matchplay::repos::competitions;
use matchplay::{AppError, ErrorCode, MatchSetupService};

use crate::support::test_state::build_test_state;

#[tokio::test]
async fn ok_body_follows_the_txn_policy() -> Result<(), AppError> {
    let state = build_test_state().await?;

    let created = with_txn(&state, |txn| {
        Box::pin(async move {
            MatchSetupService::new()
                .create_competition(txn, "Kept", 1, "North", "South")
                .await
        })
    })
    .await?;

    let db = state.db().expect("test state has a database");
    let found = competitions::find_by_id(db, created.id).await?;
    match txn_policy::current() {
        TxnPolicy::CommitOnOk => assert_eq!(found.map(|c| c.name), Some("Kept".to_string())),
        TxnPolicy::RollbackOnOk => assert!(found.is_none()),
    }
    Ok(())
}

#[tokio::test]
async fn err_body_rolls_back_every_write() -> Result<(), AppError> {
    let state = build_test_state().await?;

    let err = with_txn(&state, |txn| {
        Box::pin(async move {
            let created = MatchSetupService::new()
                .create_competition(txn, "Doomed", 1, "North", "South")
                .await?;
            Err::<i64, _>(AppError::internal(format!("abort after {}", created.id)))
        })
    })
    .await
    .unwrap_err();
    assert_eq!(err.code(), ErrorCode::Internal);

    let db = state.db().expect("test state has a database");
    assert!(competitions::find_by_id(db, 1).await?.is_none());
    Ok(())
}

#[tokio::test]
async fn missing_database_is_unavailable() -> Result<(), AppError> {
    let state = build_state().build().await?;

    let err = with_txn(&state, |_txn| Box::pin(async move { Ok(()) }))
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::DbUnavailable);
    assert_eq!(err.status().as_u16(), 503);
    Ok(())
}
