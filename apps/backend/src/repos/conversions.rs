//! Mapping between entity column enums and domain types.

use crate::domain::match_types::{MatchFormat, MatchStatus, Team, ValidationStatus};
use crate::domain::result::MatchWinner;
use crate::entities::hole_scores::CellStatus;
use crate::entities::matches::{
    MatchFormat as DbMatchFormat, MatchStatus as DbMatchStatus, WinnerSide,
};
use crate::entities::match_players::TeamSide;
use crate::errors::domain::{DomainError, InfraErrorKind};

impl From<TeamSide> for Team {
    fn from(side: TeamSide) -> Self {
        match side {
            TeamSide::A => Team::A,
            TeamSide::B => Team::B,
        }
    }
}

impl From<Team> for TeamSide {
    fn from(team: Team) -> Self {
        match team {
            Team::A => TeamSide::A,
            Team::B => TeamSide::B,
        }
    }
}

impl From<DbMatchFormat> for MatchFormat {
    fn from(f: DbMatchFormat) -> Self {
        match f {
            DbMatchFormat::Singles => MatchFormat::Singles,
            DbMatchFormat::Fourball => MatchFormat::Fourball,
            DbMatchFormat::Foursomes => MatchFormat::Foursomes,
        }
    }
}

impl From<MatchFormat> for DbMatchFormat {
    fn from(f: MatchFormat) -> Self {
        match f {
            MatchFormat::Singles => DbMatchFormat::Singles,
            MatchFormat::Fourball => DbMatchFormat::Fourball,
            MatchFormat::Foursomes => DbMatchFormat::Foursomes,
        }
    }
}

impl From<DbMatchStatus> for MatchStatus {
    fn from(s: DbMatchStatus) -> Self {
        match s {
            DbMatchStatus::Scheduled => MatchStatus::Scheduled,
            DbMatchStatus::InProgress => MatchStatus::InProgress,
            DbMatchStatus::Completed => MatchStatus::Completed,
            DbMatchStatus::Walkover => MatchStatus::Walkover,
            DbMatchStatus::Conceded => MatchStatus::Conceded,
        }
    }
}

impl From<MatchStatus> for DbMatchStatus {
    fn from(s: MatchStatus) -> Self {
        match s {
            MatchStatus::Scheduled => DbMatchStatus::Scheduled,
            MatchStatus::InProgress => DbMatchStatus::InProgress,
            MatchStatus::Completed => DbMatchStatus::Completed,
            MatchStatus::Walkover => DbMatchStatus::Walkover,
            MatchStatus::Conceded => DbMatchStatus::Conceded,
        }
    }
}

impl From<WinnerSide> for MatchWinner {
    fn from(w: WinnerSide) -> Self {
        match w {
            WinnerSide::A => MatchWinner::A,
            WinnerSide::B => MatchWinner::B,
            WinnerSide::Halved => MatchWinner::Halved,
        }
    }
}

impl From<MatchWinner> for WinnerSide {
    fn from(w: MatchWinner) -> Self {
        match w {
            MatchWinner::A => WinnerSide::A,
            MatchWinner::B => WinnerSide::B,
            MatchWinner::Halved => WinnerSide::Halved,
        }
    }
}

impl From<CellStatus> for ValidationStatus {
    fn from(s: CellStatus) -> Self {
        match s {
            CellStatus::Pending => ValidationStatus::Pending,
            CellStatus::Match => ValidationStatus::Match,
            CellStatus::Mismatch => ValidationStatus::Mismatch,
        }
    }
}

impl From<ValidationStatus> for CellStatus {
    fn from(s: ValidationStatus) -> Self {
        match s {
            ValidationStatus::Pending => CellStatus::Pending,
            ValidationStatus::Match => CellStatus::Match,
            ValidationStatus::Mismatch => CellStatus::Mismatch,
        }
    }
}

/// Narrow a stored small integer, flagging out-of-range values as corruption.
pub fn small_u8(value: i16, column: &str) -> Result<u8, DomainError> {
    u8::try_from(value).map_err(|_| {
        DomainError::infra(
            InfraErrorKind::DataCorruption,
            format!("{column} value {value} out of range"),
        )
    })
}
