//! Public listing helpers: drop-down options, ticker headlines and the admin login check.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use super::{success, ApiResult};
use crate::auth::password_matches;
use crate::errors::AppError;
use crate::filter::latest_headlines;
use crate::models::ListingOptions;
use crate::AppState;

/// Headline query parameters.
#[derive(Debug, Deserialize)]
pub struct HeadlinesQuery {
    /// Maximum number of headlines (default: 5).
    #[serde(default = "default_limit")]
    pub limit: usize,
}

fn default_limit() -> usize {
    5
}

/// Maximum number of headlines allowed.
const MAX_HEADLINES: usize = 50;

/// GET /api/options - Categories, locations and qualifications.
pub async fn get_options() -> ApiResult<ListingOptions> {
    success(ListingOptions::default())
}

/// GET /api/headlines - Ticker lines for the newest jobs.
pub async fn get_headlines(
    State(state): State<AppState>,
    Query(params): Query<HeadlinesQuery>,
) -> ApiResult<Vec<String>> {
    let jobs = state.repo.list().await;
    success(latest_headlines(&jobs, params.limit.min(MAX_HEADLINES)))
}

/// Login request body.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub password: String,
}

/// Login result.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub authenticated: bool,
}

/// POST /api/login - Check the admin password before switching to the admin view.
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> ApiResult<LoginResponse> {
    let authenticated = match &state.config.admin_password {
        Some(expected) => password_matches(&request.password, expected),
        None => true,
    };

    if !authenticated {
        tracing::warn!("Rejected admin login attempt");
        return Err(AppError::Unauthorized("Invalid admin password".to_string()));
    }

    success(LoginResponse { authenticated })
}
