//! Backend test support utilities
//!
//! Shared by the `matchplay` unit and integration tests: one-time logging
//! initialization and assertions for `application/problem+json` responses.

pub mod problem_details;
pub mod test_logging;
