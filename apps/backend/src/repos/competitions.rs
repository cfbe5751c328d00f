//! Competition repository functions.

use sea_orm::ConnectionTrait;

use crate::adapters::competitions_sea as competitions_adapter;
use crate::entities::competitions;
use crate::errors::domain::{DomainError, NotFoundKind};

#[derive(Debug, Clone, PartialEq)]
pub struct Competition {
    pub id: i64,
    pub name: String,
    pub created_by: i64,
    pub team_a_name: String,
    pub team_b_name: String,
}

impl From<competitions::Model> for Competition {
    fn from(m: competitions::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            created_by: m.created_by,
            team_a_name: m.team_a_name,
            team_b_name: m.team_b_name,
        }
    }
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    competition_id: i64,
) -> Result<Option<Competition>, DomainError> {
    Ok(competitions_adapter::find_by_id(conn, competition_id)
        .await?
        .map(Competition::from))
}

pub async fn require_competition<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    competition_id: i64,
) -> Result<Competition, DomainError> {
    find_by_id(conn, competition_id).await?.ok_or_else(|| {
        DomainError::not_found(
            NotFoundKind::Competition,
            format!("Competition {competition_id} not found"),
        )
    })
}

pub async fn create_competition<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    name: String,
    created_by: i64,
    team_a_name: String,
    team_b_name: String,
) -> Result<Competition, DomainError> {
    let dto = competitions_adapter::CompetitionCreate {
        name,
        created_by,
        team_a_name,
        team_b_name,
    };
    Ok(Competition::from(
        competitions_adapter::create_competition(conn, dto).await?,
    ))
}
