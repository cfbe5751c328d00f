//! Competition, round and match setup around the scoring engine.

use matchplay::db::txn::with_txn;
use matchplay::domain::{HoleInfo, MatchFormat, MatchStatus, MatchWinner, Team};
use matchplay::entities::rounds::RoundStatus;
use matchplay::repos::{match_players, rounds};
use matchplay::{AppError, ErrorCode, MatchSetupService};

use crate::support::match_setup::{
    course, create_match, pairs_roster, participant, scratch_singles, seed_round, singles_roster,
    CREATOR,
};
use crate::support::scoring::play_singles_hole;
use crate::support::test_state::build_test_state;

#[tokio::test]
async fn singles_strokes_follow_stroke_index() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(&state, |txn| {
        Box::pin(async move {
            let seeded = seed_round(txn).await?;
            // 12.4 vs 7.0 rounds to five strokes for player 1.
            let m = create_match(txn, seeded, 1, MatchFormat::Singles, singles_roster(12.4, 7.0))
                .await?;

            assert_eq!(m.status, MatchStatus::Scheduled);
            assert_eq!(m.strokes.total_for(1), 5);
            assert_eq!(m.strokes.total_for(2), 0);
            assert_eq!(m.strokes.strokes_for(1, 5), 1);
            assert_eq!(m.strokes.strokes_for(1, 6), 0);

            let roster = match_players::load_roster(txn, m.id, m.format).await?;
            assert_eq!(roster.participants().len(), 2);
            assert_eq!(roster.participant(1).map(|p| p.marks_player_id), Some(2));
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn fourball_strokes_come_off_the_lowest_handicap() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(&state, |txn| {
        Box::pin(async move {
            let seeded = seed_round(txn).await?;
            let m = create_match(
                txn,
                seeded,
                1,
                MatchFormat::Fourball,
                pairs_roster([4.0, 22.0, 2.0, 40.0]),
            )
            .await?;

            assert_eq!(m.strokes.total_for(3), 0);
            assert_eq!(m.strokes.total_for(1), 2);
            assert_eq!(m.strokes.total_for(2), 20);
            assert_eq!(m.strokes.total_for(4), 38);
            // Twenty strokes: one on every hole, a second on stroke indices 1 and 2.
            assert_eq!(m.strokes.strokes_for(2, 1), 2);
            assert_eq!(m.strokes.strokes_for(2, 18), 1);
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn rejects_bad_rosters_and_handicaps() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(&state, |txn| {
        Box::pin(async move {
            let seeded = seed_round(txn).await?;

            let err = create_match(txn, seeded, 1, MatchFormat::Singles, pairs_roster([0.0; 4]))
                .await
                .unwrap_err();
            assert_eq!(err.code(), ErrorCode::InvalidParticipants);

            let self_marking = vec![
                participant(1, Team::A, 0, 0.0, 1),
                participant(2, Team::B, 0, 0.0, 1),
            ];
            let err = create_match(txn, seeded, 1, MatchFormat::Singles, self_marking)
                .await
                .unwrap_err();
            assert_eq!(err.code(), ErrorCode::InvalidParticipants);

            let err = create_match(txn, seeded, 1, MatchFormat::Singles, singles_roster(60.0, 0.0))
                .await
                .unwrap_err();
            assert_eq!(err.code(), ErrorCode::InvalidHandicap);
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn rejects_malformed_courses() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(&state, |txn| {
        Box::pin(async move {
            let setup = MatchSetupService::new();
            let competition = setup
                .create_competition(txn, "Spring Cup", CREATOR, "Blue", "Red")
                .await?;

            let short: Vec<HoleInfo> = course().into_iter().take(17).collect();
            let err = setup
                .create_round(txn, competition.id, 1, &short)
                .await
                .unwrap_err();
            assert_eq!(err.code(), ErrorCode::InvalidHoleNumber);

            let mut repeated = course();
            repeated[17].stroke_index = 1;
            let err = setup
                .create_round(txn, competition.id, 1, &repeated)
                .await
                .unwrap_err();
            assert_eq!(err.code(), ErrorCode::InvalidStrokeIndex);

            let err = setup.create_round(txn, 31_337, 1, &course()).await.unwrap_err();
            assert_eq!(err.code(), ErrorCode::CompetitionNotFound);

            let err = setup
                .create_competition(txn, "   ", CREATOR, "Blue", "Red")
                .await
                .unwrap_err();
            assert_eq!(err.code(), ErrorCode::ValidationError);
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn starting_a_match_starts_its_round() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(&state, |txn| {
        Box::pin(async move {
            let seeded = seed_round(txn).await?;
            let m = create_match(txn, seeded, 1, MatchFormat::Singles, singles_roster(0.0, 0.0))
                .await?;
            let round = rounds::require_round(txn, seeded.round_id).await?;
            assert_eq!(round.status, RoundStatus::Scheduled);

            let setup = MatchSetupService::new();
            let started = setup.start_match(txn, m.id).await?;
            assert_eq!(started.status, MatchStatus::InProgress);
            assert!(started.lock_version > m.lock_version);

            let round = rounds::require_round(txn, seeded.round_id).await?;
            assert_eq!(round.status, RoundStatus::InProgress);

            let err = setup.start_match(txn, m.id).await.unwrap_err();
            assert_eq!(err.code(), ErrorCode::ValidationError);
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn players_can_be_reassigned_until_scores_exist() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(&state, |txn| {
        Box::pin(async move {
            let (_, m) = scratch_singles(txn).await?;
            let setup = MatchSetupService::new();

            let replacement = vec![
                participant(1, Team::A, 0, 0.0, 3),
                participant(3, Team::B, 0, 3.0, 1),
            ];
            let updated = setup.reassign_players(txn, m.id, replacement).await?;
            assert_eq!(updated.strokes.total_for(3), 3);
            let roster = match_players::load_roster(txn, m.id, m.format).await?;
            assert!(roster.participant(2).is_none());
            assert!(roster.participant(3).is_some());

            crate::support::scoring::enter(txn, m.id, 1, 3, 1, Some(4), Some(5)).await?;

            let err = setup
                .reassign_players(txn, m.id, singles_roster(0.0, 0.0))
                .await
                .unwrap_err();
            assert_eq!(err.code(), ErrorCode::ScoresAlreadyEntered);
            assert_eq!(err.status().as_u16(), 409);
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn walkover_closes_the_match_without_play() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(&state, |txn| {
        Box::pin(async move {
            let (_, m) = scratch_singles(txn).await?;
            play_singles_hole(txn, m.id, 1, 4, 4).await?;

            let setup = MatchSetupService::new();
            let done = setup.record_walkover(txn, m.id, Team::A).await?;
            assert_eq!(done.status, MatchStatus::Walkover);
            let result = done.result.expect("walkover result");
            assert_eq!(result.winner, MatchWinner::A);
            assert_eq!(result.score, "W/O");

            let err = setup.record_walkover(txn, m.id, Team::B).await.unwrap_err();
            assert_eq!(err.code(), ErrorCode::MatchNotInProgress);

            // The only match in the round is now terminal.
            let round = rounds::require_round(txn, done.round_id).await?;
            assert_eq!(round.status, RoundStatus::Completed);
            Ok(())
        })
    })
    .await
}
