//! Job repository over a key-value store.
//!
//! The collection is read and written as one JSON array under a single key.
//! Mutations hold a lock across read-modify-write.

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::Mutex;

use super::{initial_jobs, KeyValueStore};
use crate::errors::AppError;
use crate::models::Job;

/// Storage key for the job collection. Bump the suffix on format changes.
pub const STORAGE_KEY: &str = "sarkari_jobs_data_v1";

/// Repository owning the canonical job collection.
pub struct JobRepository {
    store: Arc<dyn KeyValueStore>,
    write_lock: Mutex<()>,
}

impl JobRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }

    /// Write the seed dataset if nothing is stored yet.
    ///
    /// Returns `true` when it seeded. Once any value exists under the key,
    /// including an empty collection, this never seeds again.
    pub async fn initialize(&self) -> Result<bool, AppError> {
        let _guard = self.write_lock.lock().await;

        if self.store.get(STORAGE_KEY).await?.is_some() {
            return Ok(false);
        }

        let seed = initial_jobs(Utc::now());
        self.persist(&seed).await?;
        tracing::info!("Seeded job store with {} listings", seed.len());
        Ok(true)
    }

    /// List all jobs, newest insertions first.
    ///
    /// An uninitialised store is seeded on this first read. Unreadable or
    /// corrupted data yields an empty list; this never fails.
    pub async fn list(&self) -> Vec<Job> {
        match self.load().await {
            Ok(Some(jobs)) => jobs,
            Ok(None) => {
                let seed = initial_jobs(Utc::now());
                match self.persist(&seed).await {
                    Ok(()) => {
                        tracing::info!("Seeded job store with {} listings", seed.len());
                        seed
                    }
                    Err(e) => {
                        tracing::error!("Failed to seed job store: {}", e);
                        Vec::new()
                    }
                }
            }
            Err(e) => {
                tracing::error!("Error reading jobs from storage: {}", e);
                Vec::new()
            }
        }
    }

    /// Get a job by ID.
    pub async fn get(&self, id: &str) -> Option<Job> {
        self.list().await.into_iter().find(|job| job.id == id)
    }

    /// Insert or replace a job by ID.
    ///
    /// A replaced job keeps its position and its original `posted_date`.
    /// A new job goes to the front.
    pub async fn save(&self, mut job: Job) -> Result<(), AppError> {
        let _guard = self.write_lock.lock().await;
        let mut jobs = self.load_for_write().await?;

        match jobs.iter().position(|existing| existing.id == job.id) {
            Some(index) => {
                job.posted_date = jobs[index].posted_date.clone();
                tracing::debug!("Replacing job {} at position {}", job.id, index);
                jobs[index] = job;
            }
            None => {
                tracing::debug!("Inserting job {}", job.id);
                jobs.insert(0, job);
            }
        }

        self.persist(&jobs).await
    }

    /// Replace an existing job with the result of `edit`.
    ///
    /// Returns `Ok(None)` without writing when no job has this ID. The edited
    /// job keeps the stored ID, `posted_date` and position.
    pub async fn update<F>(&self, id: &str, edit: F) -> Result<Option<Job>, AppError>
    where
        F: FnOnce(Job) -> Job,
    {
        let _guard = self.write_lock.lock().await;
        let mut jobs = self.load_for_write().await?;

        let Some(index) = jobs.iter().position(|existing| existing.id == id) else {
            tracing::debug!("Update of unknown job {} ignored", id);
            return Ok(None);
        };

        let existing = jobs[index].clone();
        let mut job = edit(existing.clone());
        job.id = existing.id;
        job.posted_date = existing.posted_date;
        jobs[index] = job.clone();

        self.persist(&jobs).await?;
        Ok(Some(job))
    }

    /// Delete a job by ID. Deleting an unknown ID is not an error.
    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        let _guard = self.write_lock.lock().await;
        let mut jobs = self.load_for_write().await?;

        let before = jobs.len();
        jobs.retain(|job| job.id != id);
        if jobs.len() == before {
            tracing::debug!("Delete of unknown job {} ignored", id);
        }

        self.persist(&jobs).await
    }

    async fn load(&self) -> Result<Option<Vec<Job>>, AppError> {
        let Some(raw) = self.store.get(STORAGE_KEY).await? else {
            return Ok(None);
        };

        let jobs = serde_json::from_str(&raw)
            .map_err(|e| AppError::Storage(format!("Corrupted job data: {}", e)))?;
        Ok(Some(jobs))
    }

    /// Current collection as the starting point of a mutation.
    ///
    /// Store errors propagate so a failed read never overwrites stored data.
    /// An uninitialised store starts from the seed; an unparseable payload
    /// starts from empty and is overwritten by the mutation.
    async fn load_for_write(&self) -> Result<Vec<Job>, AppError> {
        let Some(raw) = self.store.get(STORAGE_KEY).await? else {
            return Ok(initial_jobs(Utc::now()));
        };

        match serde_json::from_str(&raw) {
            Ok(jobs) => Ok(jobs),
            Err(e) => {
                tracing::warn!("Overwriting corrupted job data: {}", e);
                Ok(Vec::new())
            }
        }
    }

    async fn persist(&self, jobs: &[Job]) -> Result<(), AppError> {
        let payload = serde_json::to_string(jobs)
            .map_err(|e| AppError::Internal(format!("Failed to encode jobs: {}", e)))?;
        self.store.put(STORAGE_KEY, &payload).await
    }
}
