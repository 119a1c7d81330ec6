//! ユーザーAPI
//!
//! 参照・作成の成功時のみ監査ログを1件送る。
//! 404/400では送らない。監査の成否はレスポンスに影響しない。

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;
use tracing::info;

use super::error::AppError;
use crate::audit::AuditAction;
use crate::common::error::ApiError;
use crate::common::types::User;
use crate::AppState;

/// ユーザー作成リクエスト
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateUserRequest {
    /// ユーザー名
    pub name: String,
}

/// リクエストボディを検証する
///
/// Content-Typeに関係なくJSONとして解釈する。
/// 解釈できない、オブジェクトでない、`name`がない、文字列でない、空文字列のいずれも`Validation`。
pub fn parse_create_user_request(body: &[u8]) -> Result<CreateUserRequest, ApiError> {
    let value: Value = serde_json::from_slice(body)
        .map_err(|e| ApiError::Validation(format!("Invalid request body: {}", e)))?;
    let object = value
        .as_object()
        .ok_or_else(|| ApiError::Validation("request body must be a JSON object".to_string()))?;
    let name = object
        .get("name")
        .and_then(Value::as_str)
        .ok_or_else(|| ApiError::Validation("name must be a string".to_string()))?;
    if name.is_empty() {
        return Err(ApiError::Validation("name must not be empty".to_string()));
    }
    Ok(CreateUserRequest {
        name: name.to_string(),
    })
}

/// GET /user/:id - ユーザー取得
///
/// # Returns
/// * `200 OK` - `{"id", "name"}`
/// * `404 Not Found` - `{"message": "User not found"}`
/// * `500 Internal Server Error` - ストレージエラー
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<Json<User>, AppError> {
    let user = state
        .users
        .find_user_by_id(user_id)
        .await?
        .ok_or(ApiError::UserNotFound(user_id))?;

    state
        .audit
        .send_audit_log(AuditAction::GetUser.as_str(), user.to_detail())
        .await;

    Ok(Json(user))
}

/// POST /user - ユーザー作成
///
/// # Returns
/// * `201 Created` - `{"id", "name"}`
/// * `400 Bad Request` - `{"message": "Invalid input"}`
/// * `500 Internal Server Error` - ストレージエラー
pub async fn create_user(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<User>), AppError> {
    let request = parse_create_user_request(&body)?;

    let user = state.users.insert_user(&request.name).await?;
    info!(user_id = user.id, "User created");

    state
        .audit
        .send_audit_log(AuditAction::CreateUser.as_str(), user.to_detail())
        .await;

    Ok((StatusCode::CREATED, Json(user)))
}
