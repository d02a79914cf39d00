use crate::models::common::ApiMessage;
use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use color_eyre::eyre::Error;
use database::DatabaseError;
use notify_service::NotifyError;
use thiserror::Error;
use tracing::error;

/// 使用 [`thiserror`] 定义错误类型
/// 方便根据类型转换为相应的http错误码
///
/// 所有错误最终都转换为 `{"success": false, "message": "..."}` 格式的json返回，
/// 不会把内部错误直接抛给传输层。
#[derive(Error, Debug)]
pub enum AppError {
    /// 数据验证错误，这种错误通常都是用户参数不正确导致的，所以需要转换为400
    #[error("{0}")]
    ValidationFailed(String),

    /// 请求体不是合法的json
    #[error(transparent)]
    InvalidBody(#[from] JsonRejection),

    /// 管理口令错误
    #[error("Unauthorized")]
    Unauthorized,

    /// 资源不存在
    #[error("{0}")]
    NotFound(String),

    /// 路径存在但不支持该请求方法
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// 存储层错误
    #[error(transparent)]
    RepositoryError(#[from] DatabaseError),

    /// 联系表单消息投递失败
    #[error(transparent)]
    DeliveryFailed(#[from] NotifyError),

    /// 其他类型错误
    #[error(transparent)]
    InternalError(#[from] Error),
}

impl AppError {
    pub fn review_not_found() -> Self {
        AppError::NotFound("Review not found".to_string())
    }

    fn status_and_message(&self) -> (StatusCode, String) {
        match self {
            AppError::ValidationFailed(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::InvalidBody(rejection) => (StatusCode::BAD_REQUEST, format!("Invalid request body: {}", rejection.body_text())),
            AppError::Unauthorized => (StatusCode::UNAUTHORIZED, "Unauthorized".to_string()),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::MethodNotAllowed => (StatusCode::METHOD_NOT_ALLOWED, "Method not allowed".to_string()),
            AppError::RepositoryError(err) => match err {
                DatabaseError::NotFound(_) => (StatusCode::NOT_FOUND, "Review not found".to_string()),
                DatabaseError::ValidationError(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            },
            AppError::DeliveryFailed(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to send message. Please try again later.".to_string(),
            ),
            AppError::InternalError(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Something went wrong!".to_string()),
        }
    }
}

/// Tell axum how to convert `AppError` into a response.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();
        if status.is_server_error() {
            error!("❌ 请求处理失败: {}", self);
        }

        (status, Json(ApiMessage::failed(message))).into_response()
    }
}
