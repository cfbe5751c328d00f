use crate::domain::match_types::{MatchFormat, Team, HOLES};
use crate::domain::result::{conceded_result, final_result, MatchWinner};
use crate::domain::standing::{
    compute_standing, resolved_holes, standing_from_cells, HoleOutcome, ResolvedHole,
};
use crate::domain::test_prelude::{matched, pairs, singles, singles_cells};

fn hole(hole_number: u8, a: Vec<Option<i16>>, b: Vec<Option<i16>>) -> ResolvedHole {
    ResolvedHole {
        hole_number,
        team_a: a,
        team_b: b,
    }
}

#[test]
fn singles_lower_net_wins_and_pick_up_loses() {
    let f = MatchFormat::Singles;
    assert_eq!(f.resolve_hole_winner(&[Some(3)], &[Some(4)]), HoleOutcome::Won(Team::A));
    assert_eq!(f.resolve_hole_winner(&[Some(5)], &[Some(4)]), HoleOutcome::Won(Team::B));
    assert_eq!(f.resolve_hole_winner(&[Some(4)], &[Some(4)]), HoleOutcome::Halved);
    assert_eq!(f.resolve_hole_winner(&[None], &[Some(8)]), HoleOutcome::Won(Team::B));
    assert_eq!(f.resolve_hole_winner(&[None], &[None]), HoleOutcome::Halved);
}

#[test]
fn fourball_compares_best_ball() {
    let f = MatchFormat::Fourball;
    assert_eq!(
        f.resolve_hole_winner(&[Some(6), Some(3)], &[Some(4), Some(4)]),
        HoleOutcome::Won(Team::A)
    );
    // A picked-up ball does not hurt a side whose partner posted a number.
    assert_eq!(
        f.resolve_hole_winner(&[None, Some(4)], &[Some(4), Some(5)]),
        HoleOutcome::Halved
    );
    assert_eq!(
        f.resolve_hole_winner(&[None, None], &[Some(9), None]),
        HoleOutcome::Won(Team::B)
    );
}

#[test]
fn full_distance_level_match_is_halved() {
    // A wins 1-3, B wins 4-6, the rest are halved.
    let mut nets = Vec::new();
    for h in 1..=HOLES {
        let pair = match h {
            1..=3 => (Some(3), Some(4)),
            4..=6 => (Some(5), Some(4)),
            _ => (Some(4), Some(4)),
        };
        nets.push(pair);
    }
    let roster = singles(0.0, 0.0);
    let standing = standing_from_cells(&roster, &singles_cells(&nets));
    assert_eq!(standing.holes_played, 18);
    assert_eq!(standing.holes_remaining, 0);
    assert_eq!(standing.holes_up, 0);
    assert!(!standing.is_decided);

    let result = final_result(&standing);
    assert_eq!(result.winner, MatchWinner::Halved);
    assert_eq!(result.score, "HALVED");
}

#[test]
fn three_up_early_is_closed_out_at_sixteen() {
    // A wins 1-3 then halves: the lead outlasts the remaining holes after 16.
    let nets: Vec<_> = (1..=HOLES)
        .map(|h| if h <= 3 { (Some(3), Some(4)) } else { (Some(4), Some(4)) })
        .collect();
    let standing = standing_from_cells(&singles(0.0, 0.0), &singles_cells(&nets));
    assert!(standing.is_decided);
    assert_eq!(standing.decided_at_hole, Some(16));
    assert_eq!(standing.holes_played, 16);
    let decided = standing.decided_result.expect("decided");
    assert_eq!(decided.winner, MatchWinner::A);
    assert_eq!(decided.score, "3&2");
}

#[test]
fn dormie_is_not_decided() {
    // A up 4 after 14 holes: 4 remaining, still catchable.
    let nets: Vec<_> = (1..=14)
        .map(|h| if h <= 4 { (Some(3), Some(4)) } else { (Some(4), Some(4)) })
        .collect();
    let standing = standing_from_cells(&singles(0.0, 0.0), &singles_cells(&nets));
    assert_eq!(standing.holes_up, 4);
    assert_eq!(standing.holes_remaining, 4);
    assert!(!standing.is_decided);
    assert_eq!(standing.summary(), "A 4 UP");
}

#[test]
fn winning_the_next_hole_after_dormie_closes_out() {
    let nets: Vec<_> = (1..=15)
        .map(|h| if h <= 4 || h == 15 { (Some(3), Some(4)) } else { (Some(4), Some(4)) })
        .collect();
    let standing = standing_from_cells(&singles(0.0, 0.0), &singles_cells(&nets));
    assert!(standing.is_decided);
    let decided = standing.decided_result.expect("decided");
    assert_eq!(decided.winner, MatchWinner::A);
    assert_eq!(decided.score, "5&3");
}

#[test]
fn decision_stops_iteration() {
    // B wins 1-10; later holes are ignored once decided at 10 (10 > 8).
    let nets: Vec<_> = (1..=12).map(|_| (Some(5), Some(4))).collect();
    let standing = standing_from_cells(&singles(0.0, 0.0), &singles_cells(&nets));
    assert_eq!(standing.decided_at_hole, Some(10));
    assert_eq!(standing.holes_up, -10);
    assert_eq!(standing.hole_outcomes.len(), 10);
    assert_eq!(standing.decided_result.unwrap().score, "10&8");
}

#[test]
fn one_up_on_the_last_is_n_up() {
    let nets: Vec<_> = (1..=HOLES)
        .map(|h| if h == 18 { (Some(3), Some(4)) } else { (Some(4), Some(4)) })
        .collect();
    let standing = standing_from_cells(&singles(0.0, 0.0), &singles_cells(&nets));
    assert!(standing.is_decided);
    assert_eq!(standing.decided_result.unwrap().score, "1 UP");
}

#[test]
fn unresolved_gap_is_skipped() {
    let roster = singles(0.0, 0.0);
    let cells = vec![
        matched(1, 1, Team::A, Some(3)),
        matched(1, 2, Team::B, Some(4)),
        // Hole 2 only has A's cell.
        matched(2, 1, Team::A, Some(3)),
        matched(3, 1, Team::A, Some(3)),
        matched(3, 2, Team::B, Some(4)),
    ];
    let holes = resolved_holes(&roster, &cells);
    assert_eq!(holes.iter().map(|h| h.hole_number).collect::<Vec<_>>(), vec![1, 3]);
    let standing = compute_standing(MatchFormat::Singles, &holes);
    assert_eq!(standing.holes_up, 2);
    assert_eq!(standing.holes_played, 2);
    assert_eq!(standing.holes_remaining, 16);
}

#[test]
fn fourball_hole_needs_all_four_cells() {
    let roster = pairs(MatchFormat::Fourball, [0.0; 4]);
    let mut cells = vec![
        matched(1, 1, Team::A, Some(4)),
        matched(1, 2, Team::A, Some(5)),
        matched(1, 3, Team::B, Some(4)),
    ];
    assert!(resolved_holes(&roster, &cells).is_empty());
    cells.push(matched(1, 4, Team::B, Some(3)));
    let standing = standing_from_cells(&roster, &cells);
    assert_eq!(standing.holes_up, -1);
}

#[test]
fn hole_order_does_not_depend_on_input_order() {
    let standing = compute_standing(
        MatchFormat::Singles,
        &[
            hole(2, vec![Some(3)], vec![Some(4)]),
            hole(1, vec![Some(5)], vec![Some(4)]),
        ],
    );
    assert_eq!(
        standing.hole_outcomes,
        vec![(1, HoleOutcome::Won(Team::B)), (2, HoleOutcome::Won(Team::A))]
    );
}

#[test]
fn early_card_return_while_leading_is_n_up() {
    let nets: Vec<_> = (1..=9)
        .map(|h| if h <= 2 { (Some(3), Some(4)) } else { (Some(4), Some(4)) })
        .collect();
    let standing = standing_from_cells(&singles(0.0, 0.0), &singles_cells(&nets));
    let result = final_result(&standing);
    assert_eq!(result.winner, MatchWinner::A);
    assert_eq!(result.score, "2 UP");
}

#[test]
fn concede_awards_opponent() {
    let r = conceded_result(Team::A);
    assert_eq!(r.winner, MatchWinner::B);
    assert_eq!(r.score, "CONCEDED");
}
