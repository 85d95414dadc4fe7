//! 统一错误处理
//!
//! 提供应用级错误类型和响应结构：
//! - [`AppError`] - 应用错误枚举
//! - [`AppResponse`] - API 响应结构
//!
//! # 错误码规范
//!
//! | 错误码 | 分类 | HTTP |
//! |--------|------|------|
//! | E0002 | 表单校验失败 | 422 |
//! | E0003 | 资源不存在 | 404 |
//! | E0004 | 唯一约束冲突 | 409 |
//! | E0007 | 外键引用阻止删除 | 409 |
//! | E9001 | 内部错误 | 500 |
//! | E9002 | 数据库错误 | 500 |

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::error;

use crate::utils::validation::FieldError;

/// 应用错误枚举
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// 资源不存在 (404)
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// 唯一约束冲突 (409)
    #[error("Resource already exists: {0}")]
    Conflict(String),

    /// 删除被依赖记录阻止 (409)
    #[error("Delete blocked by dependent records: {0}")]
    ReferentialBlock(String),

    /// 表单校验失败 (422)；回显提交的原始字段值
    #[error("Validation failed")]
    Form {
        errors: Vec<FieldError>,
        form: serde_json::Value,
    },

    /// 业务校验失败 (400)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// 数据库错误 (500)
    #[error("Database error: {0}")]
    Database(String),

    /// 内部错误 (500)
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    pub fn referential_block(message: impl Into<String>) -> Self {
        Self::ReferentialBlock(message.into())
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn database(message: impl Into<String>) -> Self {
        Self::Database(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Build a form-validation error echoing the submitted values back,
    /// so the client can re-render the form without retyping.
    pub fn form<T: Serialize>(errors: Vec<FieldError>, submitted: &T) -> Self {
        Self::Form {
            errors,
            form: serde_json::to_value(submitted).unwrap_or_default(),
        }
    }
}

/// 错误响应体
#[derive(Debug, Serialize)]
struct ErrorResponse {
    code: &'static str,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    errors: Option<Vec<FieldError>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    form: Option<serde_json::Value>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, errors, form) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "E0003", msg, None, None),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, "E0004", msg, None, None),
            AppError::ReferentialBlock(msg) => (StatusCode::CONFLICT, "E0007", msg, None, None),
            AppError::Form { errors, form } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "E0002",
                "Validation failed".to_string(),
                Some(errors),
                Some(form),
            ),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "E0002", msg, None, None),
            AppError::Database(msg) => {
                // 完整信息只记日志，客户端只收到通用消息
                error!(target: "database", error = %msg, "Database error occurred");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "E9002",
                    "Database error".to_string(),
                    None,
                    None,
                )
            }
            AppError::Internal(msg) => {
                error!(target: "internal", error = %msg, "Internal error occurred");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "E9001",
                    "Internal server error".to_string(),
                    None,
                    None,
                )
            }
        };

        let body = ErrorResponse {
            code,
            message,
            errors,
            form,
        };

        (status, Json(body)).into_response()
    }
}

/// API 响应结构
///
/// ```json
/// { "success": true, "message": "Employee added successfully", "data": { ... } }
/// ```
///
/// `message` 取代原有的重定向 flash 消息。
#[derive(Debug, Clone, Serialize)]
pub struct AppResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> AppResponse<T> {
    /// 创建成功响应
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
        }
    }

    /// 创建带 flash 消息的成功响应
    pub fn with_message(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            data: Some(data),
        }
    }
}

impl AppResponse<()> {
    /// 创建只有 flash 消息的成功响应 (删除等无数据场景)
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            data: None,
        }
    }
}
