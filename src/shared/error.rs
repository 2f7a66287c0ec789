use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::ports::metadata::UpstreamError;

/// 统一的错误类型
#[derive(Debug, thiserror::Error)]
pub enum TrackerError {
    /// SQLx 数据库错误
    #[error("SQLx error: {0}")]
    Sqlx(#[from] sqlx::Error),

    /// 迁移错误
    #[error("Migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),

    /// IO 错误
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// 外部服务（GitHub）错误
    #[error(transparent)]
    Upstream(#[from] UpstreamError),

    /// 请求参数校验失败
    #[error("Validation error: {0}")]
    Validation(String),

    /// 记录未找到
    #[error("Repository not found: {0}")]
    RepositoryNotFound(String),

    /// 配置错误
    #[error("Configuration error: {0}")]
    Config(String),

    /// 内部错误
    #[error("Internal error: {0}")]
    Internal(String),
}

/// 用于 Axum 的错误响应实现
impl IntoResponse for TrackerError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            TrackerError::Validation(message) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                json!({ "detail": message }),
            ),
            TrackerError::RepositoryNotFound(_) => (
                StatusCode::NOT_FOUND,
                json!({ "detail": "Repository not found" }),
            ),
            TrackerError::Upstream(err) => (
                StatusCode::BAD_REQUEST,
                json!({ "error": err.to_string() }),
            ),
            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "detail": "Internal server error" }),
            ),
        };

        if status.is_server_error() {
            tracing::error!("Request error: {}", self);
        } else {
            tracing::info!(status = status.as_u16(), "Request rejected: {}", self);
        }

        (status, Json(body)).into_response()
    }
}
