//! 監査ログの型定義

use serde::Serialize;

/// 監査対象の操作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuditAction {
    /// GET /user/{id}
    GetUser,
    /// POST /user
    CreateUser,
}

impl AuditAction {
    /// 送信時の文字列表現
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GetUser => "GET_USER",
            Self::CreateUser => "CREATE_USER",
        }
    }
}

impl std::fmt::Display for AuditAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 監査サービスへPOSTするボディ
///
/// 送信後は保持しない。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuditRecord {
    /// 操作名（例: `GET_USER`）
    pub action: String,
    /// 操作の対象（ユーザーなら`{"id", "name"}`）
    pub detail: serde_json::Value,
    /// 送信時刻（ISO-8601、ローカル時刻）
    pub timestamp: String,
}
