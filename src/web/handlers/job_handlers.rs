// src/web/handlers/job_handlers.rs
use crate::auth::AuthenticatedUser;
use crate::jobs::{JobStore, NewJob, StoredJob};
use crate::scrape::{JobListing, ScrapeService};
use crate::web::types::{ApiError, JobPostRequest, MessageResponse};

use rocket::serde::json::Json;
use rocket::State;
use tracing::{error, info};

pub async fn list_jobs_handler(
    page: usize,
    scrape: &State<ScrapeService>,
) -> Result<Json<Vec<JobListing>>, ApiError> {
    if page < 1 {
        return Err(ApiError::bad_request("page must be >= 1", "INVALID_PAGE"));
    }

    match scrape.listings(page).await {
        Ok(jobs) => Ok(Json(jobs)),
        Err(e) => {
            error!("Failed to fetch job listings: {}", e);
            Err(ApiError::internal(
                "Failed to fetch job listings",
                "UPSTREAM_ERROR",
            ))
        }
    }
}

pub async fn create_job_handler(
    request: Json<JobPostRequest>,
    auth: AuthenticatedUser,
    jobs: &State<JobStore>,
) -> Json<StoredJob> {
    let request = request.into_inner();
    let job = jobs.create(NewJob {
        title: request.title,
        description: request.description,
        company: request.company,
        location: request.location,
        salary: request.salary,
    });

    info!("Job {} created by {}", job.id, auth.email());
    Json(job)
}

pub async fn get_job_handler(id: u64, jobs: &State<JobStore>) -> Result<Json<StoredJob>, ApiError> {
    jobs.get(id)
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Job not found", "JOB_NOT_FOUND"))
}

pub async fn delete_job_handler(
    id: u64,
    auth: AuthenticatedUser,
    jobs: &State<JobStore>,
) -> Result<Json<MessageResponse>, ApiError> {
    if jobs.delete(id) {
        info!("Job {} deleted by {}", id, auth.email());
        Ok(Json(MessageResponse {
            message: "Job deleted successfully".to_string(),
        }))
    } else {
        Err(ApiError::not_found("Job not found", "JOB_NOT_FOUND"))
    }
}
