// crates/server/src/routes/jobs.rs
//! Job endpoints.
//!
//! - POST   /jobs       (admin) create a job
//! - GET    /jobs       list jobs, filtered by minSalary / hasEquity / title
//! - GET    /jobs/{id}  one job with its company
//! - PATCH  /jobs/{id}  (admin) change title, salary or equity
//! - DELETE /jobs/{id}  (admin) delete a job

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use jobly_db::{Job, JobDetail, JobFilter, JobSummary, JobUpdate, NewJob};
use serde::Serialize;
use serde_json::Value;

use crate::auth::{Admin, Authorized};
use crate::error::ApiResult;
use crate::schemas::{coerce_search_query, validated};
use crate::state::AppState;

/// `{"job": ...}`
#[derive(Debug, Serialize)]
pub struct JobEnvelope<T> {
    pub job: T,
}

/// `{"jobs": [...]}`
#[derive(Debug, Serialize)]
pub struct JobsEnvelope {
    pub jobs: Vec<JobSummary>,
}

/// `{"deleted": id}`
#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub deleted: i64,
}

/// POST /jobs - Create a job. Admin only.
async fn create_job(
    State(state): State<Arc<AppState>>,
    Authorized { claims, .. }: Authorized<Admin>,
    body: Result<Json<Value>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<JobEnvelope<Job>>)> {
    let Json(body) = body?;
    let input: NewJob = validated(&state.schemas.job_new, body)?;

    let job = state.db.create_job(&input).await?;
    tracing::info!(job_id = job.id, by = %claims.username, "Created job");
    Ok((StatusCode::CREATED, Json(JobEnvelope { job })))
}

/// GET /jobs - List jobs matching the query filters, ordered by title.
async fn list_jobs(
    State(state): State<Arc<AppState>>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> ApiResult<Json<JobsEnvelope>> {
    let Query(params) = query?;
    let filter: JobFilter = validated(&state.schemas.job_search, coerce_search_query(params))?;

    let jobs = state.db.list_jobs(&filter).await?;
    Ok(Json(JobsEnvelope { jobs }))
}

/// GET /jobs/{id} - One job with its company embedded.
async fn get_job(
    State(state): State<Arc<AppState>>,
    path: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<JobEnvelope<JobDetail>>> {
    let Path(id) = path?;
    let job = state.db.get_job(id).await?;
    Ok(Json(JobEnvelope { job }))
}

/// PATCH /jobs/{id} - Partial update of title, salary, equity. Admin only.
async fn update_job(
    State(state): State<Arc<AppState>>,
    _admin: Authorized<Admin>,
    path: Result<Path<i64>, PathRejection>,
    body: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Json<JobEnvelope<Job>>> {
    let Path(id) = path?;
    let Json(body) = body?;
    let update: JobUpdate = validated(&state.schemas.job_update, body)?;

    let job = state.db.update_job(id, &update).await?;
    Ok(Json(JobEnvelope { job }))
}

/// DELETE /jobs/{id} - Delete a job. Admin only.
async fn remove_job(
    State(state): State<Arc<AppState>>,
    _admin: Authorized<Admin>,
    path: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<DeletedResponse>> {
    let Path(id) = path?;
    state.db.remove_job(id).await?;
    Ok(Json(DeletedResponse { deleted: id }))
}

/// Build the jobs router.
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/jobs", post(create_job).get(list_jobs))
        .route(
            "/jobs/{id}",
            get(get_job).patch(update_job).delete(remove_job),
        )
}
