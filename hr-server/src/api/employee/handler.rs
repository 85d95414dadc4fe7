//! Employee API Handlers

use axum::{
    Form, Json,
    extract::{Path, State},
};
use serde::Serialize;

use crate::core::ServerState;
use crate::db::models::{
    DepartmentRef, Employee, EmployeeDetails, EmployeeForm, EmployeeSummary, JobPositionRef,
};
use crate::db::repository::{department, employee, job_position};
use crate::utils::{AppError, AppResponse, AppResult};

/// Reference lists needed to build the employee form
#[derive(Debug, Serialize)]
pub struct EmployeeFormRefs {
    pub jobs: Vec<JobPositionRef>,
    pub departments: Vec<DepartmentRef>,
}

/// Current record plus reference lists for the edit form
#[derive(Debug, Serialize)]
pub struct EmployeeEditContext {
    pub employee: Employee,
    pub jobs: Vec<JobPositionRef>,
    pub departments: Vec<DepartmentRef>,
}

async fn form_refs(state: &ServerState) -> AppResult<EmployeeFormRefs> {
    Ok(EmployeeFormRefs {
        jobs: job_position::refs(state.pool()).await?,
        departments: department::refs(state.pool()).await?,
    })
}

/// GET /employee/view
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<EmployeeSummary>>> {
    let employees = employee::list(state.pool()).await?;
    Ok(Json(employees))
}

/// GET /employee/details/{id}
pub async fn details(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<EmployeeDetails>> {
    let employee = employee::find_details(state.pool(), id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Employee {id} not found")))?;
    Ok(Json(employee))
}

/// GET /employee/add
pub async fn add_form(State(state): State<ServerState>) -> AppResult<Json<EmployeeFormRefs>> {
    Ok(Json(form_refs(&state).await?))
}

/// POST /employee/add
pub async fn add(
    State(state): State<ServerState>,
    Form(payload): Form<EmployeeForm>,
) -> AppResult<Json<AppResponse<Employee>>> {
    let data = payload
        .validate()
        .map_err(|errors| AppError::form(errors, &payload))?;
    let employee = employee::create(state.pool(), &data).await?;
    Ok(Json(AppResponse::with_message(
        "Employee added successfully",
        employee,
    )))
}

/// GET /employee/edit/{id}
pub async fn edit_form(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<EmployeeEditContext>> {
    let employee = employee::find_by_id(state.pool(), id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Employee {id} not found")))?;
    let refs = form_refs(&state).await?;
    Ok(Json(EmployeeEditContext {
        employee,
        jobs: refs.jobs,
        departments: refs.departments,
    }))
}

/// POST /employee/edit/{id}
pub async fn edit(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Form(payload): Form<EmployeeForm>,
) -> AppResult<Json<AppResponse<Employee>>> {
    let data = payload
        .validate()
        .map_err(|errors| AppError::form(errors, &payload))?;
    let employee = employee::update(state.pool(), id, &data).await?;
    Ok(Json(AppResponse::with_message(
        "Employee updated successfully",
        employee,
    )))
}

/// GET /employee/delete/{id} — confirmation payload
pub async fn delete_confirm(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<EmployeeDetails>> {
    let employee = employee::find_details(state.pool(), id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Employee {id} not found")))?;
    Ok(Json(employee))
}

/// POST /employee/delete/{id}
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<AppResponse<()>>> {
    employee::delete(state.pool(), id).await?;
    Ok(Json(AppResponse::message("Employee deleted successfully")))
}
