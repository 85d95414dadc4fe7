//! Payroll API Handlers

use axum::{
    Form, Json,
    extract::{Path, State},
};
use serde::Serialize;

use crate::core::ServerState;
use crate::db::models::{EmployeeRef, PayrollDetails, PayrollForm, PayrollRecord, PayrollSummary};
use crate::db::repository::{employee, payroll};
use crate::utils::{AppError, AppResponse, AppResult};

/// Reference lists needed to build the payroll form
#[derive(Debug, Serialize)]
pub struct PayrollFormRefs {
    pub employees: Vec<EmployeeRef>,
}

/// Current record plus reference lists for the edit form
#[derive(Debug, Serialize)]
pub struct PayrollEditContext {
    pub payroll: PayrollRecord,
    pub employees: Vec<EmployeeRef>,
}

/// GET /payroll/view
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<PayrollSummary>>> {
    let payrolls = payroll::list(state.pool()).await?;
    Ok(Json(payrolls))
}

/// GET /payroll/details/{id}
pub async fn details(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<PayrollDetails>> {
    let payroll = payroll::find_details(state.pool(), id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Payroll record {id} not found")))?;
    Ok(Json(payroll))
}

/// GET /payroll/add
pub async fn add_form(State(state): State<ServerState>) -> AppResult<Json<PayrollFormRefs>> {
    Ok(Json(PayrollFormRefs {
        employees: employee::refs(state.pool(), false).await?,
    }))
}

/// POST /payroll/add
pub async fn add(
    State(state): State<ServerState>,
    Form(payload): Form<PayrollForm>,
) -> AppResult<Json<AppResponse<PayrollRecord>>> {
    let data = payload
        .validate()
        .map_err(|errors| AppError::form(errors, &payload))?;
    let payroll = payroll::create(state.pool(), &data).await?;
    Ok(Json(AppResponse::with_message(
        "Payroll record added successfully",
        payroll,
    )))
}

/// GET /payroll/edit/{id}
pub async fn edit_form(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<PayrollEditContext>> {
    let payroll = payroll::find_by_id(state.pool(), id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Payroll record {id} not found")))?;
    Ok(Json(PayrollEditContext {
        payroll,
        employees: employee::refs(state.pool(), false).await?,
    }))
}

/// POST /payroll/edit/{id}
pub async fn edit(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Form(payload): Form<PayrollForm>,
) -> AppResult<Json<AppResponse<PayrollRecord>>> {
    let data = payload
        .validate()
        .map_err(|errors| AppError::form(errors, &payload))?;
    let payroll = payroll::update(state.pool(), id, &data).await?;
    Ok(Json(AppResponse::with_message(
        "Payroll record updated successfully",
        payroll,
    )))
}

/// GET /payroll/delete/{id} — confirmation payload
pub async fn delete_confirm(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<PayrollDetails>> {
    let payroll = payroll::find_details(state.pool(), id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Payroll record {id} not found")))?;
    Ok(Json(payroll))
}

/// POST /payroll/delete/{id}
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<AppResponse<()>>> {
    payroll::delete(state.pool(), id).await?;
    Ok(Json(AppResponse::message(
        "Payroll record deleted successfully",
    )))
}
