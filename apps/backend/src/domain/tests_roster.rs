use crate::domain::match_types::{MatchFormat, Team};
use crate::domain::roster::MatchRoster;
use crate::domain::test_prelude::{pairs, participant, singles};
use crate::errors::domain::{DomainError, ForbiddenKind, ValidationKind};

#[test]
fn singles_needs_one_player_per_side() {
    let err = MatchRoster::new(
        MatchFormat::Singles,
        vec![
            participant(1, Team::A, 0, 0.0, 2),
            participant(2, Team::A, 1, 0.0, 1),
        ],
    )
    .unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::InvalidParticipants, _)
    ));
}

#[test]
fn marker_must_be_in_match_and_not_self() {
    let outsider = MatchRoster::new(
        MatchFormat::Singles,
        vec![
            participant(1, Team::A, 0, 0.0, 99),
            participant(2, Team::B, 0, 0.0, 1),
        ],
    );
    assert!(outsider.is_err());

    let self_mark = MatchRoster::new(
        MatchFormat::Singles,
        vec![
            participant(1, Team::A, 0, 0.0, 1),
            participant(2, Team::B, 0, 0.0, 1),
        ],
    );
    assert!(self_mark.is_err());
}

#[test]
fn foursomes_teammate_cannot_mark_partner() {
    let roster = MatchRoster::new(
        MatchFormat::Foursomes,
        vec![
            participant(1, Team::A, 0, 0.0, 2),
            participant(2, Team::A, 1, 0.0, 3),
            participant(3, Team::B, 0, 0.0, 1),
            participant(4, Team::B, 1, 0.0, 2),
        ],
    );
    assert!(roster.is_err());
}

#[test]
fn foursomes_cells_collapse_to_representatives() {
    let roster = pairs(MatchFormat::Foursomes, [0.0; 4]);
    assert_eq!(roster.cell_owner(2).unwrap(), 1);
    assert_eq!(roster.cell_owner(4).unwrap(), 3);
    assert_eq!(roster.required_cells(), vec![(1, Team::A), (3, Team::B)]);
    assert_eq!(roster.required_submitters(), vec![1, 3]);
}

#[test]
fn fourball_every_player_owns_a_cell() {
    let roster = pairs(MatchFormat::Fourball, [0.0; 4]);
    assert_eq!(roster.required_cells().len(), 4);
    assert_eq!(roster.required_submitters(), vec![1, 2, 3, 4]);
}

#[test]
fn locks_follow_format() {
    let foursomes = pairs(MatchFormat::Foursomes, [0.0; 4]);
    // Player 2 submitting locks the shared team A cell.
    assert!(foursomes.is_cell_locked(1, &[2]));
    assert!(!foursomes.is_cell_locked(3, &[2]));
    assert!(foursomes.all_submitted(&[2, 4]));
    assert!(!foursomes.all_submitted(&[1, 2]));

    let fourball = pairs(MatchFormat::Fourball, [0.0; 4]);
    assert!(!fourball.is_cell_locked(1, &[2]));
    assert!(!fourball.all_submitted(&[1, 3]));
    assert!(fourball.all_submitted(&[4, 3, 2, 1]));
}

#[test]
fn outsiders_are_not_participants() {
    let roster = singles(0.0, 0.0);
    assert!(matches!(
        roster.require_participant(42),
        Err(DomainError::Forbidden(ForbiddenKind::NotAParticipant, _))
    ));
}
