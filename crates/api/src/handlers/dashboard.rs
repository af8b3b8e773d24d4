//! Handler for the admin dashboard stats grid.

use axum::extract::State;
use axum::Json;
use moviehub_core::dashboard::{dashboard_stats, DashboardStat};
use moviehub_db::repositories::DashboardRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/admin/stats
pub async fn stats(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<DashboardStat>>>> {
    let counts = DashboardRepo::counts(&state.pool).await?;
    Ok(Json(DataResponse {
        data: dashboard_stats(counts),
    }))
}
