//! Application and status endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use jobtrack_common::db::{applications, statuses};
use jobtrack_common::db::{Application, NewApplication, NewStatus, Status};

use super::error::{found, ApiError};
use crate::AppState;

/// GET /api/applications
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Application>>, ApiError> {
    Ok(Json(applications::list_applications(&state.db).await?))
}

/// POST /api/applications
///
/// 409 when the job or user does not exist.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<NewApplication>,
) -> Result<(StatusCode, Json<Application>), ApiError> {
    let application = applications::insert_application(&state.db, &input).await?;
    Ok((StatusCode::CREATED, Json(application)))
}

/// GET /api/applications/:id/statuses
pub async fn statuses(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<Status>>, ApiError> {
    found(applications::get_application(&state.db, id).await?, "application", id)?;
    Ok(Json(statuses::statuses_for_application(&state.db, id).await?))
}

/// POST /api/statuses
pub async fn create_status(
    State(state): State<AppState>,
    Json(input): Json<NewStatus>,
) -> Result<(StatusCode, Json<Status>), ApiError> {
    let status = statuses::insert_status(&state.db, &input).await?;
    Ok((StatusCode::CREATED, Json(status)))
}
