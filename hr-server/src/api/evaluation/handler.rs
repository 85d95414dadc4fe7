//! Performance Evaluation API Handlers

use axum::{
    Form, Json,
    extract::{Path, State},
};
use serde::Serialize;

use crate::core::ServerState;
use crate::db::models::{
    EmployeeRef, EvaluationDetails, EvaluationForm, EvaluationSummary, PerformanceEvaluation,
};
use crate::db::repository::{employee, evaluation};
use crate::utils::{AppError, AppResponse, AppResult};

/// Reference lists needed to build the evaluation form (subject and
/// reviewer dropdowns share one list)
#[derive(Debug, Serialize)]
pub struct EvaluationFormRefs {
    pub employees: Vec<EmployeeRef>,
}

/// Current record plus reference lists for the edit form
#[derive(Debug, Serialize)]
pub struct EvaluationEditContext {
    pub evaluation: PerformanceEvaluation,
    pub employees: Vec<EmployeeRef>,
}

/// GET /evaluation/view
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<EvaluationSummary>>> {
    let evaluations = evaluation::list(state.pool()).await?;
    Ok(Json(evaluations))
}

/// GET /evaluation/details/{id}
pub async fn details(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<EvaluationDetails>> {
    let evaluation = evaluation::find_details(state.pool(), id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Evaluation {id} not found")))?;
    Ok(Json(evaluation))
}

/// GET /evaluation/add
pub async fn add_form(State(state): State<ServerState>) -> AppResult<Json<EvaluationFormRefs>> {
    Ok(Json(EvaluationFormRefs {
        employees: employee::refs(state.pool(), false).await?,
    }))
}

/// POST /evaluation/add
pub async fn add(
    State(state): State<ServerState>,
    Form(payload): Form<EvaluationForm>,
) -> AppResult<Json<AppResponse<PerformanceEvaluation>>> {
    let data = payload
        .validate()
        .map_err(|errors| AppError::form(errors, &payload))?;
    let evaluation = evaluation::create(state.pool(), &data).await?;
    Ok(Json(AppResponse::with_message(
        "Evaluation added successfully",
        evaluation,
    )))
}

/// GET /evaluation/edit/{id}
pub async fn edit_form(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<EvaluationEditContext>> {
    let evaluation = evaluation::find_by_id(state.pool(), id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Evaluation {id} not found")))?;
    Ok(Json(EvaluationEditContext {
        evaluation,
        employees: employee::refs(state.pool(), false).await?,
    }))
}

/// POST /evaluation/edit/{id}
pub async fn edit(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Form(payload): Form<EvaluationForm>,
) -> AppResult<Json<AppResponse<PerformanceEvaluation>>> {
    let data = payload
        .validate()
        .map_err(|errors| AppError::form(errors, &payload))?;
    let evaluation = evaluation::update(state.pool(), id, &data).await?;
    Ok(Json(AppResponse::with_message(
        "Evaluation updated successfully",
        evaluation,
    )))
}

/// GET /evaluation/delete/{id} — confirmation payload
pub async fn delete_confirm(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<EvaluationDetails>> {
    let evaluation = evaluation::find_details(state.pool(), id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Evaluation {id} not found")))?;
    Ok(Json(evaluation))
}

/// POST /evaluation/delete/{id}
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<AppResponse<()>>> {
    evaluation::delete(state.pool(), id).await?;
    Ok(Json(AppResponse::message("Evaluation deleted successfully")))
}
