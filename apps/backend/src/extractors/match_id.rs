use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use futures_util::future::{ready, Ready};

use super::positive_id;
use crate::error::AppError;
use crate::errors::ErrorCode;

/// Match ID extracted from the `{match_id}` route parameter.
///
/// Existence is checked by the service inside its transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchId(pub i64);

impl FromRequest for MatchId {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(
            positive_id(req.match_info().get("match_id"), "match_id", ErrorCode::InvalidMatchId)
                .map(MatchId),
        )
    }
}
