//! Job Position API Handlers

use axum::{
    Form, Json,
    extract::{Path, State},
};

use crate::core::ServerState;
use crate::db::models::{JobPosition, JobPositionForm};
use crate::db::repository::job_position;
use crate::utils::{AppError, AppResponse, AppResult};

/// GET /job-position/view
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<JobPosition>>> {
    let jobs = job_position::list(state.pool()).await?;
    Ok(Json(jobs))
}

/// GET /job-position/details/{id}
pub async fn details(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<JobPosition>> {
    let job = job_position::find_by_id(state.pool(), id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Job position {id} not found")))?;
    Ok(Json(job))
}

/// GET /job-position/add — no reference data needed for this form
pub async fn add_form() -> Json<serde_json::Value> {
    Json(serde_json::json!({}))
}

/// POST /job-position/add
pub async fn add(
    State(state): State<ServerState>,
    Form(payload): Form<JobPositionForm>,
) -> AppResult<Json<AppResponse<JobPosition>>> {
    let data = payload
        .validate()
        .map_err(|errors| AppError::form(errors, &payload))?;
    let job = job_position::create(state.pool(), &data).await?;
    Ok(Json(AppResponse::with_message(
        "Job position added successfully",
        job,
    )))
}

/// GET /job-position/edit/{id}
pub async fn edit_form(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<JobPosition>> {
    let job = job_position::find_by_id(state.pool(), id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Job position {id} not found")))?;
    Ok(Json(job))
}

/// POST /job-position/edit/{id}
pub async fn edit(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Form(payload): Form<JobPositionForm>,
) -> AppResult<Json<AppResponse<JobPosition>>> {
    let data = payload
        .validate()
        .map_err(|errors| AppError::form(errors, &payload))?;
    let job = job_position::update(state.pool(), id, &data).await?;
    Ok(Json(AppResponse::with_message(
        "Job position updated successfully",
        job,
    )))
}

/// GET /job-position/delete/{id} — confirmation payload
pub async fn delete_confirm(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<JobPosition>> {
    let job = job_position::find_by_id(state.pool(), id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Job position {id} not found")))?;
    Ok(Json(job))
}

/// POST /job-position/delete/{id}
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<AppResponse<()>>> {
    job_position::delete(state.pool(), id).await?;
    Ok(Json(AppResponse::message("Job position deleted successfully")))
}
