//! コアデータ型
//!
//! User と、そのHTTPレスポンス表現

use serde::Serialize;

/// ユーザーレコード
///
/// `id`はストレージ側で採番される。作成後は変更されない。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    /// ユーザーID
    pub id: i64,
    /// ユーザー名
    pub name: String,
}

impl User {
    /// 監査ログの`detail`に載せるJSON表現
    pub fn to_detail(&self) -> serde_json::Value {
        serde_json::json!({ "id": self.id, "name": self.name })
    }
}

/// エラーレスポンスボディ（`{"message": ...}`）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageResponse {
    /// メッセージ
    pub message: String,
}

impl MessageResponse {
    /// メッセージからレスポンスボディを作成
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
