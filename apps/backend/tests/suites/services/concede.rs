use matchplay::db::txn::with_txn;
use matchplay::domain::{MatchFormat, MatchStatus, MatchWinner, Team};
use matchplay::{AppError, ErrorCode, MatchScoringService};

use crate::support::match_setup::{
    create_match, scratch_singles, seed_round, singles_roster, CREATOR,
};
use crate::support::scoring::{enter, play_singles_hole};
use crate::support::test_state::build_test_state;

#[tokio::test]
async fn participant_concedes_for_own_team() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(&state, |txn| {
        Box::pin(async move {
            let (_, m) = scratch_singles(txn).await?;
            play_singles_hole(txn, m.id, 1, 6, 4).await?;

            let conceded = MatchScoringService::new()
                .concede(txn, m.id, Team::A, 1, Some("injury".to_string()))
                .await?;

            assert_eq!(conceded.status, MatchStatus::Conceded);
            assert_eq!(conceded.conceded_by, Some(Team::A));
            assert_eq!(conceded.concede_reason.as_deref(), Some("injury"));
            let result = conceded.result.expect("concession result");
            assert_eq!(result.winner, MatchWinner::B);
            assert_eq!(result.score, "CONCEDED");

            // Closed matches take no more scores.
            let err = enter(txn, m.id, 1, 2, 2, Some(4), Some(4)).await.unwrap_err();
            assert_eq!(err.code(), ErrorCode::MatchNotInProgress);
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn participant_cannot_concede_for_opponents() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(&state, |txn| {
        Box::pin(async move {
            let (_, m) = scratch_singles(txn).await?;
            let service = MatchScoringService::new();

            let err = service.concede(txn, m.id, Team::B, 1, None).await.unwrap_err();
            assert_eq!(err.code(), ErrorCode::UnauthorizedConcede);
            assert_eq!(err.status().as_u16(), 403);

            let err = service.concede(txn, m.id, Team::A, 77, None).await.unwrap_err();
            assert_eq!(err.code(), ErrorCode::UnauthorizedConcede);
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn competition_creator_may_concede_either_side() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(&state, |txn| {
        Box::pin(async move {
            let (_, m) = scratch_singles(txn).await?;
            let conceded = MatchScoringService::new()
                .concede(txn, m.id, Team::B, CREATOR, None)
                .await?;
            assert_eq!(conceded.status, MatchStatus::Conceded);
            assert_eq!(
                conceded.result.map(|r| r.winner),
                Some(MatchWinner::A)
            );
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn scheduled_match_can_be_conceded_once() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(&state, |txn| {
        Box::pin(async move {
            let seeded = seed_round(txn).await?;
            let m = create_match(txn, seeded, 1, MatchFormat::Singles, singles_roster(0.0, 0.0))
                .await?;
            assert_eq!(m.status, MatchStatus::Scheduled);

            let service = MatchScoringService::new();
            service.concede(txn, m.id, Team::B, 2, None).await?;

            let err = service.concede(txn, m.id, Team::A, 1, None).await.unwrap_err();
            assert_eq!(err.code(), ErrorCode::MatchNotInProgress);
            Ok(())
        })
    })
    .await
}
