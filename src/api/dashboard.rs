//! Admin dashboard endpoints.

use axum::extract::State;
use chrono::Utc;

use super::{success, ApiResult};
use crate::filter::dashboard_stats;
use crate::models::DashboardStats;
use crate::AppState;

/// GET /api/admin/stats - Totals, today's postings and per-category counts.
pub async fn get_stats(State(state): State<AppState>) -> ApiResult<DashboardStats> {
    let jobs = state.repo.list().await;
    success(dashboard_stats(&jobs, Utc::now()))
}
