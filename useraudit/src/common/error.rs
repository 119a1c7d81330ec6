//! エラー型定義
//!
//! 統一エラー型（thiserror使用）
//!
//! `ApiError`は`status_code()`と`external_message()`を提供し、
//! クライアントへ返すレスポンスを内部情報を含まない形で生成できます。

use axum::http::StatusCode;
use thiserror::Error;

/// useraudit error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request body or field could not be used
    #[error("Validation error: {0}")]
    Validation(String),

    /// No user row matched the requested id
    #[error("User not found: {0}")]
    UserNotFound(i64),

    /// Storage failure (connection, query, constraint)
    #[error("Database error: {0}")]
    Database(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ApiError {
    /// Returns a safe error message for external clients.
    ///
    /// The `Display` implementation carries full details (SQL errors, file
    /// paths) and belongs in server logs only.
    pub fn external_message(&self) -> &'static str {
        match self {
            Self::Validation(_) => "Invalid input",
            Self::UserNotFound(_) => "User not found",
            Self::Database(_) => "Internal server error",
            Self::Config(_) => "Internal server error",
        }
    }

    /// Returns the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::UserNotFound(_) => StatusCode::NOT_FOUND,
            Self::Database(_) | Self::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        ApiError::Database(err.to_string())
    }
}
