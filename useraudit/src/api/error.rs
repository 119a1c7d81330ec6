//! APIエラーレスポンス型
//!
//! axum用の共通エラーハンドリング

use axum::{response::IntoResponse, Json};

use crate::common::error::ApiError;
use crate::common::types::MessageResponse;

/// Axum用のエラーレスポンス型
#[derive(Debug)]
pub struct AppError(pub ApiError);

impl From<ApiError> for AppError {
    fn from(err: ApiError) -> Self {
        AppError(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        // Full error details go to the server log; clients only see external_message()
        match &self.0 {
            ApiError::Database(_) | ApiError::Config(_) => {
                tracing::error!("Request failed: {}", self.0);
            }
            ApiError::Validation(_) | ApiError::UserNotFound(_) => {
                tracing::debug!("Request rejected: {}", self.0);
            }
        }

        let status = self.0.status_code();
        let payload = MessageResponse::new(self.0.external_message());

        (status, Json(payload)).into_response()
    }
}
