use crate::domain::leaderboard::{aggregate, MatchSummary};
use crate::domain::match_types::{MatchFormat, MatchStatus, Team};
use crate::domain::result::{conceded_result, walkover_result, MatchResult, MatchWinner};
use crate::domain::standing::MatchStanding;

fn summary(match_id: i64, status: MatchStatus, result: Option<MatchResult>) -> MatchSummary {
    MatchSummary {
        match_id,
        round_id: 1,
        match_no: match_id as i32,
        format: MatchFormat::Singles,
        status,
        result,
        live: None,
    }
}

fn won(winner: MatchWinner, score: &str) -> Option<MatchResult> {
    Some(MatchResult {
        winner,
        score: score.to_string(),
    })
}

#[test]
fn points_per_terminal_match() {
    let board = aggregate(&[
        summary(1, MatchStatus::Completed, won(MatchWinner::A, "3&2")),
        summary(2, MatchStatus::Completed, won(MatchWinner::Halved, "HALVED")),
        summary(3, MatchStatus::Conceded, Some(conceded_result(Team::A))),
        summary(4, MatchStatus::Walkover, Some(walkover_result(Team::A))),
    ]);
    assert_eq!(board.team_a_points, 2.5);
    assert_eq!(board.team_b_points, 1.5);
    assert_eq!(board.completed_matches, 4);
    assert_eq!(board.team_a_points + board.team_b_points, 4.0);
}

#[test]
fn in_progress_shows_live_standing_without_points() {
    let mut live = MatchStanding::all_square();
    live.holes_up = -2;
    live.holes_played = 5;
    live.holes_remaining = 13;

    let mut m = summary(7, MatchStatus::InProgress, None);
    m.live = Some(live);
    let board = aggregate(&[m, summary(8, MatchStatus::Scheduled, None)]);

    assert_eq!(board.team_a_points, 0.0);
    assert_eq!(board.team_b_points, 0.0);
    assert_eq!(board.completed_matches, 0);

    let line = &board.per_match[0];
    let standing = line.live_standing.as_ref().expect("live standing");
    assert_eq!(standing.leader, Some(Team::B));
    assert_eq!(standing.summary, "B 2 UP");
    assert!(board.per_match[1].live_standing.is_none());
}

#[test]
fn per_match_is_ordered_by_round_then_match_no() {
    let mut late = summary(1, MatchStatus::Scheduled, None);
    late.round_id = 2;
    let board = aggregate(&[late, summary(3, MatchStatus::Scheduled, None), summary(2, MatchStatus::Scheduled, None)]);
    let ids: Vec<i64> = board.per_match.iter().map(|l| l.match_id).collect();
    assert_eq!(ids, vec![2, 3, 1]);
}

#[test]
fn empty_competition_is_level() {
    let board = aggregate(&[]);
    assert_eq!(board.team_a_points, 0.0);
    assert!(board.per_match.is_empty());
}
