//! User endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use jobtrack_common::db::users;
use jobtrack_common::db::{Job, NewUser, User};

use super::error::{found, ApiError};
use crate::AppState;

/// GET /api/users
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<User>>, ApiError> {
    Ok(Json(users::list_users(&state.db).await?))
}

/// POST /api/users
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<NewUser>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    let user = users::insert_user(&state.db, &input).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// GET /api/users/:id/jobs
pub async fn jobs(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<Job>>, ApiError> {
    found(users::get_user(&state.db, id).await?, "user", id)?;
    Ok(Json(users::jobs_for_user(&state.db, id).await?))
}
