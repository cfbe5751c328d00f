//! DTOs for rounds_sea adapter.

/// DTO for creating a new round.
#[derive(Debug, Clone)]
pub struct RoundCreate {
    pub competition_id: i64,
    pub round_no: i16,
}

/// One course hole supplied with the round.
#[derive(Debug, Clone, Copy)]
pub struct RoundHoleCreate {
    pub hole_number: i16,
    pub par: i16,
    pub stroke_index: i16,
}
