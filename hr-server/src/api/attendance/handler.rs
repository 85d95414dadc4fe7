//! Attendance API Handlers

use axum::{
    Form, Json,
    extract::{Path, State},
};
use serde::Serialize;

use crate::core::ServerState;
use crate::db::models::{
    Attendance, AttendanceDetails, AttendanceForm, AttendanceSummary, EmployeeRef,
};
use crate::db::repository::{attendance, employee};
use crate::utils::{AppError, AppResponse, AppResult};

/// Reference lists needed to build the attendance form (Active employees only)
#[derive(Debug, Serialize)]
pub struct AttendanceFormRefs {
    pub employees: Vec<EmployeeRef>,
}

/// Current record plus reference lists for the edit form
#[derive(Debug, Serialize)]
pub struct AttendanceEditContext {
    pub attendance: Attendance,
    pub employees: Vec<EmployeeRef>,
}

/// GET /attendance/view
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<AttendanceSummary>>> {
    let attendances = attendance::list(state.pool()).await?;
    Ok(Json(attendances))
}

/// GET /attendance/details/{id}
pub async fn details(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<AttendanceDetails>> {
    let attendance = attendance::find_details(state.pool(), id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Attendance record {id} not found")))?;
    Ok(Json(attendance))
}

/// GET /attendance/add
pub async fn add_form(State(state): State<ServerState>) -> AppResult<Json<AttendanceFormRefs>> {
    Ok(Json(AttendanceFormRefs {
        employees: employee::refs(state.pool(), true).await?,
    }))
}

/// POST /attendance/add
pub async fn add(
    State(state): State<ServerState>,
    Form(payload): Form<AttendanceForm>,
) -> AppResult<Json<AppResponse<Attendance>>> {
    let data = payload
        .validate()
        .map_err(|errors| AppError::form(errors, &payload))?;
    let attendance = attendance::create(state.pool(), &data).await?;
    Ok(Json(AppResponse::with_message(
        "Attendance record added successfully",
        attendance,
    )))
}

/// GET /attendance/edit/{id}
pub async fn edit_form(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<AttendanceEditContext>> {
    let attendance = attendance::find_by_id(state.pool(), id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Attendance record {id} not found")))?;
    Ok(Json(AttendanceEditContext {
        attendance,
        employees: employee::refs(state.pool(), true).await?,
    }))
}

/// POST /attendance/edit/{id}
pub async fn edit(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Form(payload): Form<AttendanceForm>,
) -> AppResult<Json<AppResponse<Attendance>>> {
    let data = payload
        .validate()
        .map_err(|errors| AppError::form(errors, &payload))?;
    let attendance = attendance::update(state.pool(), id, &data).await?;
    Ok(Json(AppResponse::with_message(
        "Attendance record updated successfully",
        attendance,
    )))
}

/// GET /attendance/delete/{id} — confirmation payload
pub async fn delete_confirm(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<AttendanceDetails>> {
    let attendance = attendance::find_details(state.pool(), id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Attendance record {id} not found")))?;
    Ok(Json(attendance))
}

/// POST /attendance/delete/{id}
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<AppResponse<()>>> {
    attendance::delete(state.pool(), id).await?;
    Ok(Json(AppResponse::message(
        "Attendance record deleted successfully",
    )))
}
