use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use futures_util::future::{ready, Ready};

use crate::error::AppError;
use crate::errors::ErrorCode;

/// Header carrying the requester's player id, set by the upstream identity layer.
pub const PLAYER_ID_HEADER: &str = "x-player-id";

/// The player making the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentPlayer(pub i64);

fn parse(req: &HttpRequest) -> Result<CurrentPlayer, AppError> {
    let value = req
        .headers()
        .get(PLAYER_ID_HEADER)
        .ok_or_else(|| AppError::unauthorized("Missing X-Player-Id header"))?;
    let raw = value
        .to_str()
        .map_err(|_| AppError::bad_request(ErrorCode::InvalidHeader, "X-Player-Id is not valid UTF-8"))?;
    match raw.trim().parse::<i64>() {
        Ok(id) if id > 0 => Ok(CurrentPlayer(id)),
        _ => Err(AppError::bad_request(
            ErrorCode::InvalidHeader,
            format!("X-Player-Id must be a positive integer, got '{raw}'"),
        )),
    }
}

impl FromRequest for CurrentPlayer {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(parse(req))
    }
}
