use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::db::txn::with_txn;
use crate::domain::match_types::{MatchFormat, MatchStatus, Team};
use crate::domain::result::MatchResult;
use crate::error::AppError;
use crate::extractors::{CurrentPlayer, MatchId};
use crate::repos::matches::Match;
use crate::services::scoring::{HoleScoreInput, MatchScoringService};
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct ConcedeRequest {
    pub team: Team,
    #[serde(default)]
    pub reason: Option<String>,
}

/// Match header returned by mutations that end a match.
#[derive(Debug, Serialize)]
pub struct MatchResponse {
    pub id: i64,
    pub competition_id: i64,
    pub round_id: i64,
    pub match_no: i16,
    pub format: MatchFormat,
    pub status: MatchStatus,
    pub result: Option<MatchResult>,
    pub conceded_by: Option<Team>,
    pub concede_reason: Option<String>,
    pub lock_version: i32,
}

impl From<Match> for MatchResponse {
    fn from(m: Match) -> Self {
        Self {
            id: m.id,
            competition_id: m.competition_id,
            round_id: m.round_id,
            match_no: m.match_no,
            format: m.format,
            status: m.status,
            result: m.result,
            conceded_by: m.conceded_by,
            concede_reason: m.concede_reason,
            lock_version: m.lock_version,
        }
    }
}

async fn get_scoring(
    match_id: MatchId,
    player: CurrentPlayer,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let MatchId(id) = match_id;
    let CurrentPlayer(requester) = player;
    let view = with_txn(&app_state, move |txn| {
        Box::pin(async move {
            MatchScoringService::new()
                .get_scoring_view(txn, id, requester)
                .await
        })
    })
    .await?;
    Ok(HttpResponse::Ok().json(view))
}

async fn submit_hole(
    match_id: MatchId,
    player: CurrentPlayer,
    body: web::Json<HoleScoreInput>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let MatchId(id) = match_id;
    let CurrentPlayer(requester) = player;
    let input = body.into_inner();
    debug!(match_id = id, requester, hole_number = input.hole_number, "Hole score request");

    let view = with_txn(&app_state, move |txn| {
        Box::pin(async move {
            MatchScoringService::new()
                .submit_hole_score(txn, id, requester, input)
                .await
        })
    })
    .await?;
    Ok(HttpResponse::Ok().json(view))
}

async fn submit_scorecard(
    match_id: MatchId,
    player: CurrentPlayer,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let MatchId(id) = match_id;
    let CurrentPlayer(requester) = player;
    let outcome = with_txn(&app_state, move |txn| {
        Box::pin(async move {
            MatchScoringService::new()
                .submit_scorecard(txn, id, requester)
                .await
        })
    })
    .await?;
    Ok(HttpResponse::Ok().json(outcome))
}

async fn concede(
    match_id: MatchId,
    player: CurrentPlayer,
    body: web::Json<ConcedeRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let MatchId(id) = match_id;
    let CurrentPlayer(requester) = player;
    let ConcedeRequest { team, reason } = body.into_inner();

    let updated = with_txn(&app_state, move |txn| {
        Box::pin(async move {
            MatchScoringService::new()
                .concede(txn, id, team, requester, reason)
                .await
        })
    })
    .await?;
    Ok(HttpResponse::Ok().json(MatchResponse::from(updated)))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/{match_id}/scoring", web::get().to(get_scoring))
        .route("/{match_id}/holes", web::post().to(submit_hole))
        .route("/{match_id}/scorecard", web::post().to(submit_scorecard))
        .route("/{match_id}/concede", web::post().to(concede));
}
