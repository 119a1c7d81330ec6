//! Repository trait定義
//!
//! ハンドラーからストレージを切り離し、テストでダブルに差し替えるためのtrait。

use async_trait::async_trait;

use crate::common::error::ApiError;
use crate::common::types::User;

/// ユーザーテーブルのRepository trait
#[async_trait]
pub trait UserStore: Send + Sync {
    /// IDでユーザーを検索（該当なしは`Ok(None)`）
    async fn find_user_by_id(&self, id: i64) -> Result<Option<User>, ApiError>;
    /// ユーザーを作成し、採番されたIDを含むUserを返す
    ///
    /// `name`は呼び出し側で検証済みであること。
    async fn insert_user(&self, name: &str) -> Result<User, ApiError>;
}
