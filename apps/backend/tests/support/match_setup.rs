//! Competition, round and match fixtures built through `MatchSetupService`.

use matchplay::domain::{HoleInfo, MatchFormat, Participant, Team};
use matchplay::repos::matches::Match;
use matchplay::services::match_setup::NewMatch;
use matchplay::{AppError, MatchSetupService};
use sea_orm::ConnectionTrait;

/// Player id that created every seeded competition.
pub const CREATOR: i64 = 100;

pub const TEAM_A_NAME: &str = "Europe";
pub const TEAM_B_NAME: &str = "USA";

/// Ids of a seeded competition and its first round.
#[derive(Debug, Clone, Copy)]
pub struct Seeded {
    pub competition_id: i64,
    pub round_id: i64,
}

/// Par-4 course with stroke index equal to hole number.
pub fn course() -> Vec<HoleInfo> {
    (1..=18)
        .map(|h| HoleInfo {
            hole_number: h,
            par: 4,
            stroke_index: h,
        })
        .collect()
}

pub fn participant(
    player_id: i64,
    team: Team,
    position: u8,
    playing_handicap: f64,
    marks: i64,
) -> Participant {
    Participant {
        player_id,
        team,
        position,
        playing_handicap,
        tee: "WHITE".to_string(),
        marks_player_id: marks,
    }
}

/// Player 1 (A) vs player 2 (B), marking each other.
pub fn singles_roster(h_a: f64, h_b: f64) -> Vec<Participant> {
    vec![
        participant(1, Team::A, 0, h_a, 2),
        participant(2, Team::B, 0, h_b, 1),
    ]
}

/// Players 1,2 (A) vs 3,4 (B); 1<->3 and 2<->4 mark each other.
pub fn pairs_roster(handicaps: [f64; 4]) -> Vec<Participant> {
    vec![
        participant(1, Team::A, 0, handicaps[0], 3),
        participant(2, Team::A, 1, handicaps[1], 4),
        participant(3, Team::B, 0, handicaps[2], 1),
        participant(4, Team::B, 1, handicaps[3], 2),
    ]
}

pub async fn seed_round<C: ConnectionTrait + Send + Sync>(conn: &C) -> Result<Seeded, AppError> {
    let setup = MatchSetupService::new();
    let competition = setup
        .create_competition(conn, "Autumn Cup", CREATOR, TEAM_A_NAME, TEAM_B_NAME)
        .await?;
    let round = setup
        .create_round(conn, competition.id, 1, &course())
        .await?;
    Ok(Seeded {
        competition_id: competition.id,
        round_id: round.id,
    })
}

pub async fn create_match<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    seeded: Seeded,
    match_no: i16,
    format: MatchFormat,
    participants: Vec<Participant>,
) -> Result<Match, AppError> {
    MatchSetupService::new()
        .create_match(
            conn,
            NewMatch {
                round_id: seeded.round_id,
                match_no,
                format,
                participants,
            },
        )
        .await
}

/// Create and start a match, ready for hole scores.
pub async fn started_match<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    seeded: Seeded,
    match_no: i16,
    format: MatchFormat,
    participants: Vec<Participant>,
) -> Result<Match, AppError> {
    let created = create_match(conn, seeded, match_no, format, participants).await?;
    MatchSetupService::new().start_match(conn, created.id).await
}

/// Seed a round and start one scratch singles match in it.
pub async fn scratch_singles<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<(Seeded, Match), AppError> {
    let seeded = seed_round(conn).await?;
    let m = started_match(conn, seeded, 1, MatchFormat::Singles, singles_roster(0.0, 0.0)).await?;
    Ok((seeded, m))
}
