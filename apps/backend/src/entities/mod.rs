pub mod competitions;
pub mod hole_scores;
pub mod match_players;
pub mod matches;
pub mod round_holes;
pub mod rounds;

pub use competitions::Entity as Competitions;
pub use competitions::Model as Competition;
pub use hole_scores::Entity as HoleScores;
pub use hole_scores::Model as HoleScore;
pub use match_players::Entity as MatchPlayers;
pub use match_players::Model as MatchPlayer;
pub use matches::Entity as Matches;
pub use matches::Model as Match;
pub use round_holes::Entity as RoundHoles;
pub use round_holes::Model as RoundHole;
pub use rounds::Entity as Rounds;
pub use rounds::Model as Round;
