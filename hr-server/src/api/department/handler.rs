//! Department API Handlers

use axum::{
    Form, Json,
    extract::{Path, State},
};
use serde::Serialize;

use crate::core::ServerState;
use crate::db::models::{Department, DepartmentForm, DepartmentSummary, EmployeeRef};
use crate::db::repository::{department, employee};
use crate::utils::{AppError, AppResponse, AppResult};

/// Reference lists needed to build the department form
#[derive(Debug, Serialize)]
pub struct DepartmentFormRefs {
    pub employees: Vec<EmployeeRef>,
}

/// Current record plus reference lists for the edit form
#[derive(Debug, Serialize)]
pub struct DepartmentEditContext {
    pub department: Department,
    pub employees: Vec<EmployeeRef>,
}

/// GET /department/view
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<DepartmentSummary>>> {
    let departments = department::list(state.pool()).await?;
    Ok(Json(departments))
}

/// GET /department/details/{id}
pub async fn details(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<DepartmentSummary>> {
    let department = department::find_details(state.pool(), id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Department {id} not found")))?;
    Ok(Json(department))
}

/// GET /department/add
pub async fn add_form(State(state): State<ServerState>) -> AppResult<Json<DepartmentFormRefs>> {
    Ok(Json(DepartmentFormRefs {
        employees: employee::refs(state.pool(), false).await?,
    }))
}

/// POST /department/add
pub async fn add(
    State(state): State<ServerState>,
    Form(payload): Form<DepartmentForm>,
) -> AppResult<Json<AppResponse<Department>>> {
    let data = payload
        .validate()
        .map_err(|errors| AppError::form(errors, &payload))?;
    let department = department::create(state.pool(), &data).await?;
    Ok(Json(AppResponse::with_message(
        "Department added successfully",
        department,
    )))
}

/// GET /department/edit/{id}
pub async fn edit_form(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<DepartmentEditContext>> {
    let department = department::find_by_id(state.pool(), id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Department {id} not found")))?;
    Ok(Json(DepartmentEditContext {
        department,
        employees: employee::refs(state.pool(), false).await?,
    }))
}

/// POST /department/edit/{id}
pub async fn edit(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Form(payload): Form<DepartmentForm>,
) -> AppResult<Json<AppResponse<Department>>> {
    let data = payload
        .validate()
        .map_err(|errors| AppError::form(errors, &payload))?;
    let department = department::update(state.pool(), id, &data).await?;
    Ok(Json(AppResponse::with_message(
        "Department updated successfully",
        department,
    )))
}

/// GET /department/delete/{id} — confirmation payload
pub async fn delete_confirm(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<DepartmentSummary>> {
    let department = department::find_details(state.pool(), id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Department {id} not found")))?;
    Ok(Json(department))
}

/// POST /department/delete/{id}
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<AppResponse<()>>> {
    department::delete(state.pool(), id).await?;
    Ok(Json(AppResponse::message("Department deleted successfully")))
}
