//! Job API endpoints.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::Utc;
use serde::Serialize;

use super::{success, ApiResult};
use crate::errors::AppError;
use crate::filter::{filter_jobs, is_expired};
use crate::models::{generate_job_id, to_iso_string, FilterCriteria, Job, JobDraft};
use crate::AppState;

/// A job as shown to the UI, with its computed expiry.
#[derive(Debug, Serialize)]
pub struct JobListing {
    #[serde(flatten)]
    pub job: Job,
    pub expired: bool,
}

impl JobListing {
    fn at(job: Job, now: chrono::DateTime<Utc>) -> Self {
        let expired = is_expired(&job, now);
        Self { job, expired }
    }
}

/// GET /api/jobs - List jobs matching the filter criteria.
pub async fn list_jobs(
    State(state): State<AppState>,
    Query(criteria): Query<FilterCriteria>,
) -> ApiResult<Vec<JobListing>> {
    let jobs = state.repo.list().await;
    let now = Utc::now();

    if !criteria.is_empty() {
        tracing::debug!("Filtering {} jobs with {:?}", jobs.len(), criteria);
    }

    let listings = filter_jobs(&jobs, &criteria)
        .into_iter()
        .map(|job| JobListing::at(job.clone(), now))
        .collect();

    success(listings)
}

/// GET /api/jobs/:id - Get a single job.
pub async fn get_job(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<JobListing> {
    match state.repo.get(&id).await {
        Some(job) => success(JobListing::at(job, Utc::now())),
        None => Err(AppError::NotFound(format!("Job {} not found", id))),
    }
}

/// POST /api/admin/jobs - Add a new job.
pub async fn create_job(
    State(state): State<AppState>,
    Json(draft): Json<JobDraft>,
) -> ApiResult<Job> {
    let now = Utc::now();
    let job = draft.into_job(generate_job_id(), to_iso_string(now), now);

    state.repo.save(job.clone()).await?;
    tracing::info!("Created job {} ({})", job.id, job.title);

    success(job)
}

/// PUT /api/admin/jobs/:id - Edit an existing job.
///
/// The id and posted date always come from the stored record.
pub async fn update_job(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(draft): Json<JobDraft>,
) -> ApiResult<Job> {
    let now = Utc::now();
    let job = state
        .repo
        .update(&id, |existing| draft.into_job(existing.id, existing.posted_date, now))
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Job {} not found", id)))?;

    tracing::info!("Updated job {}", job.id);

    success(job)
}

/// DELETE /api/admin/jobs/:id - Delete a job. Unknown ids succeed.
pub async fn delete_job(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<()> {
    state.repo.delete(&id).await?;
    tracing::info!("Deleted job {}", id);

    success(())
}
