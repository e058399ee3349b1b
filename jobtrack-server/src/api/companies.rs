//! Company endpoints

use axum::{extract::State, http::StatusCode, Json};
use jobtrack_common::db::companies;
use jobtrack_common::db::{Company, NewCompany};

use super::error::ApiError;
use crate::AppState;

/// GET /api/companies
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Company>>, ApiError> {
    Ok(Json(companies::list_companies(&state.db).await?))
}

/// POST /api/companies
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<NewCompany>,
) -> Result<(StatusCode, Json<Company>), ApiError> {
    let company = companies::insert_company(&state.db, &input).await?;
    Ok((StatusCode::CREATED, Json(company)))
}
