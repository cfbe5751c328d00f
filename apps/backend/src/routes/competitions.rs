use actix_web::{web, HttpResponse};

use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::extractors::CompetitionId;
use crate::services::leaderboard::LeaderboardService;
use crate::state::app_state::AppState;

async fn get_leaderboard(
    competition_id: CompetitionId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let CompetitionId(id) = competition_id;
    let board = with_txn(&app_state, move |txn| {
        Box::pin(async move { LeaderboardService::new().get_leaderboard(txn, id).await })
    })
    .await?;
    Ok(HttpResponse::Ok().json(board))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/{competition_id}/leaderboard", web::get().to(get_leaderboard));
}
