//! Employee Training API Handlers
//!
//! Routes address records by the composite (employee, training) key —
//! two path segments. An edit may submit a different pair than the one
//! addressed; the repository re-keys the record atomically.

use axum::{
    Form, Json,
    extract::{Path, State},
};
use serde::Serialize;

use crate::core::ServerState;
use crate::db::models::{
    EmployeeRef, EmployeeTraining, EmployeeTrainingForm, EmployeeTrainingSummary, TrainingRef,
};
use crate::db::repository::{employee, employee_training, training};
use crate::utils::{AppError, AppResponse, AppResult};

/// Reference lists needed to build the employee-training form
#[derive(Debug, Serialize)]
pub struct EmployeeTrainingFormRefs {
    pub employees: Vec<EmployeeRef>,
    pub trainings: Vec<TrainingRef>,
}

/// Current record plus reference lists for the edit form
#[derive(Debug, Serialize)]
pub struct EmployeeTrainingEditContext {
    pub record: EmployeeTraining,
    pub employees: Vec<EmployeeRef>,
    pub trainings: Vec<TrainingRef>,
}

fn record_not_found((employee_id, training_id): (i64, i64)) -> AppError {
    AppError::not_found(format!(
        "Training record for employee {employee_id} and session {training_id} not found"
    ))
}

async fn form_refs(state: &ServerState) -> AppResult<EmployeeTrainingFormRefs> {
    Ok(EmployeeTrainingFormRefs {
        employees: employee::refs(state.pool(), false).await?,
        trainings: training::refs(state.pool()).await?,
    })
}

/// GET /employee-training/view
pub async fn list(
    State(state): State<ServerState>,
) -> AppResult<Json<Vec<EmployeeTrainingSummary>>> {
    let records = employee_training::list(state.pool()).await?;
    Ok(Json(records))
}

/// GET /employee-training/details/{employee_id}/{training_id}
pub async fn details(
    State(state): State<ServerState>,
    Path(key): Path<(i64, i64)>,
) -> AppResult<Json<EmployeeTrainingSummary>> {
    let record = employee_training::find_details(state.pool(), key)
        .await?
        .ok_or_else(|| record_not_found(key))?;
    Ok(Json(record))
}

/// GET /employee-training/add
pub async fn add_form(
    State(state): State<ServerState>,
) -> AppResult<Json<EmployeeTrainingFormRefs>> {
    Ok(Json(form_refs(&state).await?))
}

/// POST /employee-training/add
pub async fn add(
    State(state): State<ServerState>,
    Form(payload): Form<EmployeeTrainingForm>,
) -> AppResult<Json<AppResponse<EmployeeTraining>>> {
    let data = payload
        .validate()
        .map_err(|errors| AppError::form(errors, &payload))?;
    let record = employee_training::create(state.pool(), &data).await?;
    Ok(Json(AppResponse::with_message(
        "Record added successfully",
        record,
    )))
}

/// GET /employee-training/edit/{employee_id}/{training_id}
pub async fn edit_form(
    State(state): State<ServerState>,
    Path(key): Path<(i64, i64)>,
) -> AppResult<Json<EmployeeTrainingEditContext>> {
    let record = employee_training::find_by_key(state.pool(), key)
        .await?
        .ok_or_else(|| record_not_found(key))?;
    let refs = form_refs(&state).await?;
    Ok(Json(EmployeeTrainingEditContext {
        record,
        employees: refs.employees,
        trainings: refs.trainings,
    }))
}

/// POST /employee-training/edit/{employee_id}/{training_id}
///
/// The path carries the original key; the form carries the submitted one.
pub async fn edit(
    State(state): State<ServerState>,
    Path(key): Path<(i64, i64)>,
    Form(payload): Form<EmployeeTrainingForm>,
) -> AppResult<Json<AppResponse<EmployeeTraining>>> {
    let data = payload
        .validate()
        .map_err(|errors| AppError::form(errors, &payload))?;
    let record = employee_training::update(state.pool(), key, &data).await?;
    Ok(Json(AppResponse::with_message(
        "Record updated successfully",
        record,
    )))
}

/// GET /employee-training/delete/{employee_id}/{training_id} — confirmation payload
pub async fn delete_confirm(
    State(state): State<ServerState>,
    Path(key): Path<(i64, i64)>,
) -> AppResult<Json<EmployeeTrainingSummary>> {
    let record = employee_training::find_details(state.pool(), key)
        .await?
        .ok_or_else(|| record_not_found(key))?;
    Ok(Json(record))
}

/// POST /employee-training/delete/{employee_id}/{training_id}
pub async fn delete(
    State(state): State<ServerState>,
    Path(key): Path<(i64, i64)>,
) -> AppResult<Json<AppResponse<()>>> {
    employee_training::delete(state.pool(), key).await?;
    Ok(Json(AppResponse::message("Record deleted successfully")))
}
