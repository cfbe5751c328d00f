pub mod request_trace;
pub mod structured_logger;
pub mod trace_span;

pub use request_trace::RequestTrace;
pub use structured_logger::StructuredLogger;
pub use trace_span::TraceSpan;

use actix_web::dev::ServiceRequest;

use crate::extractors::current_player::PLAYER_ID_HEADER;

/// Requester id for log fields; absent or malformed headers log as 0.
fn player_id_for_logs(req: &ServiceRequest) -> i64 {
    req.headers()
        .get(PLAYER_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(0)
}

/// `match:<id>` or `competition:<id>` for API paths, empty otherwise.
///
/// App-level middleware runs before routing, so the path is split by hand.
fn resource_for_logs(path: &str) -> String {
    let mut segments = path.trim_start_matches('/').split('/');
    if segments.next() != Some("api") {
        return String::new();
    }
    let kind = match segments.next() {
        Some("matches") => "match",
        Some("competitions") => "competition",
        _ => return String::new(),
    };
    match segments.next().and_then(|id| id.parse::<i64>().ok()) {
        Some(id) => format!("{kind}:{id}"),
        None => String::new(),
    }
}
