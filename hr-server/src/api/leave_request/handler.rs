//! Leave Request API Handlers

use axum::{
    Form, Json,
    extract::{Path, State},
};
use serde::Serialize;

use crate::core::ServerState;
use crate::db::models::{
    EmployeeRef, LeaveRequest, LeaveRequestDetails, LeaveRequestEditForm, LeaveRequestForm,
    LeaveRequestSummary,
};
use crate::db::repository::{employee, leave_request};
use crate::utils::{AppError, AppResponse, AppResult};

/// Reference lists needed to build the leave request form
#[derive(Debug, Serialize)]
pub struct LeaveRequestFormRefs {
    pub employees: Vec<EmployeeRef>,
}

/// Current record plus reference lists for the edit form
#[derive(Debug, Serialize)]
pub struct LeaveRequestEditContext {
    pub leave: LeaveRequest,
    pub employees: Vec<EmployeeRef>,
}

/// GET /leave-request/view
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<LeaveRequestSummary>>> {
    let leaves = leave_request::list(state.pool()).await?;
    Ok(Json(leaves))
}

/// GET /leave-request/details/{id}
pub async fn details(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<LeaveRequestDetails>> {
    let leave = leave_request::find_details(state.pool(), id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Leave request {id} not found")))?;
    Ok(Json(leave))
}

/// GET /leave-request/add — only Active employees may submit leave
pub async fn add_form(State(state): State<ServerState>) -> AppResult<Json<LeaveRequestFormRefs>> {
    Ok(Json(LeaveRequestFormRefs {
        employees: employee::refs(state.pool(), true).await?,
    }))
}

/// POST /leave-request/add
pub async fn add(
    State(state): State<ServerState>,
    Form(payload): Form<LeaveRequestForm>,
) -> AppResult<Json<AppResponse<LeaveRequest>>> {
    let data = payload
        .validate()
        .map_err(|errors| AppError::form(errors, &payload))?;
    let leave = leave_request::create(state.pool(), &data).await?;
    Ok(Json(AppResponse::with_message(
        "Leave request submitted successfully",
        leave,
    )))
}

/// GET /leave-request/edit/{id}
pub async fn edit_form(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<LeaveRequestEditContext>> {
    let leave = leave_request::find_by_id(state.pool(), id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Leave request {id} not found")))?;
    Ok(Json(LeaveRequestEditContext {
        leave,
        employees: employee::refs(state.pool(), false).await?,
    }))
}

/// POST /leave-request/edit/{id}
pub async fn edit(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Form(payload): Form<LeaveRequestEditForm>,
) -> AppResult<Json<AppResponse<LeaveRequest>>> {
    let data = payload
        .validate()
        .map_err(|errors| AppError::form(errors, &payload))?;
    let leave = leave_request::update(state.pool(), id, &data).await?;
    Ok(Json(AppResponse::with_message(
        "Leave request updated successfully",
        leave,
    )))
}

/// GET /leave-request/delete/{id} — confirmation payload
pub async fn delete_confirm(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<LeaveRequestDetails>> {
    let leave = leave_request::find_details(state.pool(), id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Leave request {id} not found")))?;
    Ok(Json(leave))
}

/// POST /leave-request/delete/{id}
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<AppResponse<()>>> {
    leave_request::delete(state.pool(), id).await?;
    Ok(Json(AppResponse::message(
        "Leave request deleted successfully",
    )))
}
