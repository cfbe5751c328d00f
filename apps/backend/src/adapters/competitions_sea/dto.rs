//! DTOs for competitions_sea adapter.

#[derive(Debug, Clone)]
pub struct CompetitionCreate {
    pub name: String,
    pub created_by: i64,
    pub team_a_name: String,
    pub team_b_name: String,
}
