//! REST APIハンドラー
//!
//! `GET /user/:id`, `POST /user`

/// エラーレスポンス
pub mod error;

/// ユーザーAPI
pub mod users;

use crate::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

/// APIルーターを作成
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/user", post(users::create_user))
        .route("/user/:id", get(users::get_user))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
