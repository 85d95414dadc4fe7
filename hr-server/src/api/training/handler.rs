//! Training Session API Handlers

use axum::{
    Form, Json,
    extract::{Path, State},
};

use crate::core::ServerState;
use crate::db::models::{TrainingForm, TrainingSession};
use crate::db::repository::training;
use crate::utils::{AppError, AppResponse, AppResult};

/// GET /training/view
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<TrainingSession>>> {
    let sessions = training::list(state.pool()).await?;
    Ok(Json(sessions))
}

/// GET /training/details/{id}
pub async fn details(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<TrainingSession>> {
    let session = training::find_by_id(state.pool(), id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Training session {id} not found")))?;
    Ok(Json(session))
}

/// GET /training/add — no reference data needed for this form
pub async fn add_form() -> Json<serde_json::Value> {
    Json(serde_json::json!({}))
}

/// POST /training/add
pub async fn add(
    State(state): State<ServerState>,
    Form(payload): Form<TrainingForm>,
) -> AppResult<Json<AppResponse<TrainingSession>>> {
    let data = payload
        .validate()
        .map_err(|errors| AppError::form(errors, &payload))?;
    let session = training::create(state.pool(), &data).await?;
    Ok(Json(AppResponse::with_message(
        "Training session added successfully",
        session,
    )))
}

/// GET /training/edit/{id}
pub async fn edit_form(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<TrainingSession>> {
    let session = training::find_by_id(state.pool(), id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Training session {id} not found")))?;
    Ok(Json(session))
}

/// POST /training/edit/{id}
pub async fn edit(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Form(payload): Form<TrainingForm>,
) -> AppResult<Json<AppResponse<TrainingSession>>> {
    let data = payload
        .validate()
        .map_err(|errors| AppError::form(errors, &payload))?;
    let session = training::update(state.pool(), id, &data).await?;
    Ok(Json(AppResponse::with_message(
        "Training session updated successfully",
        session,
    )))
}

/// GET /training/delete/{id} — confirmation payload
pub async fn delete_confirm(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<TrainingSession>> {
    let session = training::find_by_id(state.pool(), id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Training session {id} not found")))?;
    Ok(Json(session))
}

/// POST /training/delete/{id}
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<AppResponse<()>>> {
    training::delete(state.pool(), id).await?;
    Ok(Json(AppResponse::message(
        "Training session deleted successfully",
    )))
}
