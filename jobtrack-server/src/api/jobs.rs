//! Job endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use jobtrack_common::db::jobs;
use jobtrack_common::db::{Job, NewJob, User};

use super::error::{found, ApiError};
use crate::AppState;

/// GET /api/jobs
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Job>>, ApiError> {
    Ok(Json(jobs::list_jobs(&state.db).await?))
}

/// GET /api/jobs/:id
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Job>, ApiError> {
    let job = jobs::get_job(&state.db, id).await?;
    Ok(Json(found(job, "job", id)?))
}

/// POST /api/jobs
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<NewJob>,
) -> Result<(StatusCode, Json<Job>), ApiError> {
    let job = jobs::insert_job(&state.db, &input).await?;
    Ok((StatusCode::CREATED, Json(job)))
}

/// GET /api/jobs/:id/users
pub async fn users(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<User>>, ApiError> {
    found(jobs::get_job(&state.db, id).await?, "job", id)?;
    Ok(Json(jobs::users_for_job(&state.db, id).await?))
}
