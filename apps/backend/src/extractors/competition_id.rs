use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use futures_util::future::{ready, Ready};

use super::positive_id;
use crate::error::AppError;
use crate::errors::ErrorCode;

/// Competition ID extracted from the `{competition_id}` route parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompetitionId(pub i64);

impl FromRequest for CompetitionId {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(
            positive_id(
                req.match_info().get("competition_id"),
                "competition_id",
                ErrorCode::InvalidCompetitionId,
            )
            .map(CompetitionId),
        )
    }
}
