//! API 路由模块
//!
//! # 结构
//!
//! 每个实体一个子模块，统一暴露 `/view`、`/details`、`/add`、`/edit`、
//! `/delete` 五组路由：
//!
//! - [`employee`] - 员工管理接口
//! - [`department`] - 部门管理接口
//! - [`job_position`] - 职位管理接口
//! - [`attendance`] - 考勤管理接口
//! - [`leave_request`] - 请假管理接口
//! - [`payroll`] - 工资管理接口
//! - [`training`] - 培训课程接口
//! - [`employee_training`] - 员工培训记录接口 (复合主键)
//! - [`evaluation`] - 绩效评估接口

pub mod attendance;
pub mod department;
pub mod employee;
pub mod employee_training;
pub mod evaluation;
pub mod job_position;
pub mod leave_request;
pub mod payroll;
pub mod training;

use axum::{Json, Router, routing::get};

use crate::core::ServerState;
use crate::utils::AppError;

/// Compose the full application router.
pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/", get(landing))
        .merge(employee::router())
        .merge(department::router())
        .merge(job_position::router())
        .merge(attendance::router())
        .merge(leave_request::router())
        .merge(payroll::router())
        .merge(training::router())
        .merge(employee_training::router())
        .merge(evaluation::router())
        .fallback(not_found)
}

/// GET / - landing document
async fn landing() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "service": "HR Management System",
        "version": env!("CARGO_PKG_VERSION"),
        "entities": [
            "/employee",
            "/department",
            "/job-position",
            "/attendance",
            "/leave-request",
            "/payroll",
            "/training",
            "/employee-training",
            "/evaluation",
        ],
    }))
}

async fn not_found() -> AppError {
    AppError::not_found("Page not found")
}
