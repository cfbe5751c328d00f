//! Who plays in a match, which ledger cell each player writes to, and
//! whose scorecard submissions lock which cells.

use serde::{Deserialize, Serialize};

use crate::domain::match_types::{MatchFormat, PlayerId, Team};
use crate::errors::domain::{DomainError, ForbiddenKind, ValidationKind};

/// One player's seat in a match, as supplied by the team/handicap assignment step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    pub player_id: PlayerId,
    pub team: Team,
    /// 0-based order within the team; position 0 represents a foursomes team.
    pub position: u8,
    pub playing_handicap: f64,
    pub tee: String,
    /// The player whose card this participant marks.
    pub marks_player_id: PlayerId,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MatchRoster {
    format: MatchFormat,
    participants: Vec<Participant>,
}

impl MatchRoster {
    /// Build a roster, checking team sizes, unique players and marker assignments.
    pub fn new(format: MatchFormat, mut participants: Vec<Participant>) -> Result<Self, DomainError> {
        participants.sort_by_key(|p| (p.team, p.position));

        let per_team = format.players_per_team();
        for team in [Team::A, Team::B] {
            let count = participants.iter().filter(|p| p.team == team).count();
            if count != per_team {
                return Err(DomainError::validation(
                    ValidationKind::InvalidParticipants,
                    format!("{format:?} needs {per_team} player(s) on team {team:?}, got {count}"),
                ));
            }
            let positions: Vec<u8> = participants
                .iter()
                .filter(|p| p.team == team)
                .map(|p| p.position)
                .collect();
            if positions.iter().enumerate().any(|(i, pos)| usize::from(*pos) != i) {
                return Err(DomainError::validation(
                    ValidationKind::InvalidParticipants,
                    format!("team {team:?} positions must be 0..{per_team}"),
                ));
            }
        }

        for (i, p) in participants.iter().enumerate() {
            if participants[..i].iter().any(|q| q.player_id == p.player_id) {
                return Err(DomainError::validation(
                    ValidationKind::InvalidParticipants,
                    format!("player {} appears twice", p.player_id),
                ));
            }
        }

        let roster = Self {
            format,
            participants,
        };

        for p in &roster.participants {
            let Some(marked) = roster.participant(p.marks_player_id) else {
                return Err(DomainError::validation(
                    ValidationKind::InvalidParticipants,
                    format!(
                        "player {} marks {} who is not in the match",
                        p.player_id, p.marks_player_id
                    ),
                ));
            };
            if roster.cell_owner_of(marked) == roster.cell_owner_of(p) {
                return Err(DomainError::validation(
                    ValidationKind::InvalidParticipants,
                    format!("player {} cannot mark their own score", p.player_id),
                ));
            }
        }

        Ok(roster)
    }

    pub fn format(&self) -> MatchFormat {
        self.format
    }

    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    pub fn participant(&self, player_id: PlayerId) -> Option<&Participant> {
        self.participants.iter().find(|p| p.player_id == player_id)
    }

    /// Like [`participant`](Self::participant) but fails with `NotAParticipant`.
    pub fn require_participant(&self, player_id: PlayerId) -> Result<&Participant, DomainError> {
        self.participant(player_id).ok_or_else(|| {
            DomainError::forbidden(
                ForbiddenKind::NotAParticipant,
                format!("player {player_id} does not play in this match"),
            )
        })
    }

    pub fn team_members(&self, team: Team) -> impl Iterator<Item = &Participant> {
        self.participants.iter().filter(move |p| p.team == team)
    }

    /// The first-positioned player of a team.
    pub fn representative(&self, team: Team) -> Option<&Participant> {
        self.team_members(team).min_by_key(|p| p.position)
    }

    fn cell_owner_of(&self, p: &Participant) -> PlayerId {
        if self.format.shares_team_ball() {
            self.representative(p.team)
                .map(|r| r.player_id)
                .unwrap_or(p.player_id)
        } else {
            p.player_id
        }
    }

    /// Player id keying the ledger cell this player's score lives in.
    /// In foursomes both teammates share the representative's cell.
    pub fn cell_owner(&self, player_id: PlayerId) -> Result<PlayerId, DomainError> {
        let p = self.require_participant(player_id)?;
        Ok(self.cell_owner_of(p))
    }

    /// Every ledger cell a fully-played hole must contain, in team order.
    pub fn required_cells(&self) -> Vec<(PlayerId, Team)> {
        let mut cells: Vec<(PlayerId, Team)> = Vec::new();
        for p in &self.participants {
            let owner = self.cell_owner_of(p);
            if !cells.iter().any(|(id, _)| *id == owner) {
                cells.push((owner, p.team));
            }
        }
        cells
    }

    /// Players whose scorecards must be in before the match can finalize.
    pub fn required_submitters(&self) -> Vec<PlayerId> {
        if self.format.shares_team_ball() {
            self.required_cells().into_iter().map(|(id, _)| id).collect()
        } else {
            self.participants.iter().map(|p| p.player_id).collect()
        }
    }

    /// True when the cell's owner (or, in foursomes, any teammate) has submitted a scorecard.
    pub fn is_cell_locked(&self, cell_owner: PlayerId, submitted: &[PlayerId]) -> bool {
        let Some(owner) = self.participant(cell_owner) else {
            return false;
        };
        if self.format.shares_team_ball() {
            self.team_members(owner.team)
                .any(|p| submitted.contains(&p.player_id))
        } else {
            submitted.contains(&cell_owner)
        }
    }

    /// True when every required submitter, normalized to cells, has submitted.
    pub fn all_submitted(&self, submitted: &[PlayerId]) -> bool {
        if self.format.shares_team_ball() {
            self.required_cells()
                .iter()
                .all(|(owner, _)| self.is_cell_locked(*owner, submitted))
        } else {
            self.required_submitters()
                .iter()
                .all(|id| submitted.contains(id))
        }
    }

    /// Side handicap used by two-sided allocation: the representative's playing handicap.
    pub fn side_handicap(&self, team: Team) -> Option<f64> {
        self.representative(team).map(|p| p.playing_handicap)
    }
}
