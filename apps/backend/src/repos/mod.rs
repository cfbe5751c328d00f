//! Domain-facing repository functions, generic over `ConnectionTrait`.

pub mod competitions;
pub mod conversions;
pub mod hole_scores;
pub mod match_players;
pub mod matches;
pub mod rounds;
