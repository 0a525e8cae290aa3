use crate::app_state::AppState;
use crate::domain::VisitorStats;
use crate::error::AppResult;
use crate::handlers::shared_types::ApiResponse;
use crate::session::CurrentAdmin;
use axum::extract::State;

/// Handler for aggregate counts (GET /istatistikler).
///
/// Responds with `total`, `today` (current UTC date) and `last_7_days`.
pub async fn get_stats(
    State(state): State<AppState>,
    _admin: CurrentAdmin,
) -> AppResult<ApiResponse<VisitorStats>> {
    // ---
    let stats = state.services().stats.get_stats().await?;
    Ok(ApiResponse::new(stats))
}
