//! Match participant repository functions.

use std::collections::HashMap;

use sea_orm::ConnectionTrait;

use crate::adapters::match_players_sea as players_adapter;
use crate::domain::match_types::{MatchFormat, Team};
use crate::domain::roster::{MatchRoster, Participant};
use crate::entities::match_players;
use crate::errors::domain::DomainError;
use crate::repos::conversions::small_u8;

fn to_participant(m: match_players::Model) -> Result<Participant, DomainError> {
    Ok(Participant {
        player_id: m.player_id,
        team: Team::from(m.team),
        position: small_u8(m.position, "match_players.position")?,
        playing_handicap: m.playing_handicap,
        tee: m.tee,
        marks_player_id: m.marks_player_id,
    })
}

pub async fn find_by_match<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    match_id: i64,
) -> Result<Vec<Participant>, DomainError> {
    players_adapter::find_by_match(conn, match_id)
        .await?
        .into_iter()
        .map(to_participant)
        .collect()
}

/// Load and validate the roster of a match.
pub async fn load_roster<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    match_id: i64,
    format: MatchFormat,
) -> Result<MatchRoster, DomainError> {
    MatchRoster::new(format, find_by_match(conn, match_id).await?)
}

/// Participants of several matches keyed by match id.
pub async fn find_by_matches<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    match_ids: &[i64],
) -> Result<HashMap<i64, Vec<Participant>>, DomainError> {
    let mut grouped: HashMap<i64, Vec<Participant>> = HashMap::new();
    for row in players_adapter::find_by_matches(conn, match_ids).await? {
        let match_id = row.match_id;
        grouped.entry(match_id).or_default().push(to_participant(row)?);
    }
    Ok(grouped)
}

/// Replace every participant row of a match.
pub async fn replace_players<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    match_id: i64,
    participants: &[Participant],
) -> Result<(), DomainError> {
    players_adapter::delete_by_match(conn, match_id).await?;
    let rows = participants
        .iter()
        .map(|p| players_adapter::MatchPlayerCreate {
            player_id: p.player_id,
            team: p.team.into(),
            position: i16::from(p.position),
            playing_handicap: p.playing_handicap,
            tee: p.tee.clone(),
            marks_player_id: p.marks_player_id,
        })
        .collect();
    players_adapter::insert_players(conn, match_id, rows).await?;
    Ok(())
}
