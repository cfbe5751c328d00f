//! Competition leaderboard over a mix of finished, live and scheduled matches.

use matchplay::db::txn::with_txn;
use matchplay::domain::{MatchFormat, MatchStatus, Team};
use matchplay::{AppError, ErrorCode, LeaderboardService, MatchScoringService};

use crate::support::match_setup::{
    create_match, participant, seed_round, singles_roster, started_match, TEAM_A_NAME,
    TEAM_B_NAME,
};
use crate::support::scoring::enter;
use crate::support::test_state::build_test_state;

#[tokio::test]
async fn points_come_only_from_finished_matches() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(&state, |txn| {
        Box::pin(async move {
            let seeded = seed_round(txn).await?;
            let pair = |a: i64, b: i64| {
                vec![
                    participant(a, Team::A, 0, 0.0, b),
                    participant(b, Team::B, 0, 0.0, a),
                ]
            };
            let service = MatchScoringService::new();

            // Match 1: B concedes.
            let conceded =
                started_match(txn, seeded, 1, MatchFormat::Singles, singles_roster(0.0, 0.0))
                    .await?;
            service.concede(txn, conceded.id, Team::B, 2, None).await?;

            // Match 2: one halved hole, both cards in.
            let halved = started_match(txn, seeded, 2, MatchFormat::Singles, pair(5, 6)).await?;
            enter(txn, halved.id, 5, 6, 1, Some(4), Some(4)).await?;
            enter(txn, halved.id, 6, 5, 1, Some(4), Some(4)).await?;
            service.submit_scorecard(txn, halved.id, 5).await?;
            service.submit_scorecard(txn, halved.id, 6).await?;

            // Match 3: A one up after a hole.
            let live = started_match(txn, seeded, 3, MatchFormat::Singles, pair(7, 8)).await?;
            enter(txn, live.id, 7, 8, 1, Some(3), Some(4)).await?;
            enter(txn, live.id, 8, 7, 1, Some(4), Some(3)).await?;

            // Match 4: not started.
            create_match(txn, seeded, 4, MatchFormat::Singles, pair(9, 10)).await?;

            let board = LeaderboardService::new()
                .get_leaderboard(txn, seeded.competition_id)
                .await?;

            assert_eq!(board.team_a.name, TEAM_A_NAME);
            assert_eq!(board.team_b.name, TEAM_B_NAME);
            assert_eq!(board.team_a.points, 1.5);
            assert_eq!(board.team_b.points, 0.5);
            assert_eq!(board.completed_matches, 2);

            let statuses: Vec<MatchStatus> = board.per_match.iter().map(|l| l.status).collect();
            assert_eq!(
                statuses,
                vec![
                    MatchStatus::Conceded,
                    MatchStatus::Completed,
                    MatchStatus::InProgress,
                    MatchStatus::Scheduled,
                ]
            );

            let live_line = &board.per_match[2];
            assert_eq!(live_line.team_a_points, 0.0);
            assert!(live_line.result.is_none());
            let standing = live_line.live_standing.as_ref().expect("live standing");
            assert_eq!(standing.leader, Some(Team::A));
            assert_eq!(standing.summary, "A 1 UP");
            assert!(board.per_match[3].live_standing.is_none());
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn unknown_competition_is_not_found() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(&state, |txn| {
        Box::pin(async move {
            let err = LeaderboardService::new()
                .get_leaderboard(txn, 4_242)
                .await
                .unwrap_err();
            assert_eq!(err.code(), ErrorCode::CompetitionNotFound);
            Ok(())
        })
    })
    .await
}
