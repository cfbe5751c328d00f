pub mod leaderboard;
pub mod match_setup;
pub mod scoring;
