//! ユーザーテーブル操作
//!
//! 各操作は自前で接続を開き、戻る前に必ず閉じる（プーリングなし）。
//! 1操作1接続で十分であり、操作をまたぐトランザクションも持たない。

use std::str::FromStr;

use async_trait::async_trait;
use sqlx::sqlite::SqliteConnectOptions;
use sqlx::{ConnectOptions, Connection, SqliteConnection};
use tracing::{debug, warn};

use super::traits::UserStore;
use crate::common::error::ApiError;
use crate::common::types::User;
use crate::config::StorageConfig;

/// SQLiteのユーザーストア
#[derive(Debug, Clone)]
pub struct SqliteUserStore {
    options: SqliteConnectOptions,
}

impl SqliteUserStore {
    /// 設定からストアを作成
    ///
    /// データベースファイルが存在しない場合でも作成はしない（接続時にエラー）。
    pub fn new(config: &StorageConfig) -> Result<Self, ApiError> {
        let options = SqliteConnectOptions::from_str(&config.database_url).map_err(|e| {
            ApiError::Config(format!(
                "Invalid database URL '{}': {}",
                config.database_url, e
            ))
        })?;
        Ok(Self { options })
    }

    async fn open(&self) -> Result<SqliteConnection, ApiError> {
        self.options
            .connect()
            .await
            .map_err(|e| ApiError::Database(format!("Failed to open database: {}", e)))
    }
}

/// 接続を閉じる。失敗してもクエリ結果は有効なのでログのみ。
async fn close(conn: SqliteConnection) {
    if let Err(e) = conn.close().await {
        warn!("Failed to close database connection: {}", e);
    }
}

#[derive(sqlx::FromRow)]
struct UserRow {
    id: i64,
    name: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User {
            id: row.id,
            name: row.name,
        }
    }
}

#[async_trait]
impl UserStore for SqliteUserStore {
    async fn find_user_by_id(&self, id: i64) -> Result<Option<User>, ApiError> {
        let mut conn = self.open().await?;
        let row = sqlx::query_as::<_, UserRow>("SELECT id, name FROM users WHERE id = ?")
            .bind(id)
            .fetch_optional(&mut conn)
            .await;
        close(conn).await;

        let row = row.map_err(|e| ApiError::Database(format!("Failed to find user: {}", e)))?;
        debug!(user_id = id, found = row.is_some(), "User lookup finished");
        Ok(row.map(User::from))
    }

    async fn insert_user(&self, name: &str) -> Result<User, ApiError> {
        let mut conn = self.open().await?;
        let result = sqlx::query("INSERT INTO users (name) VALUES (?)")
            .bind(name)
            .execute(&mut conn)
            .await;
        close(conn).await;

        let id = result
            .map_err(|e| ApiError::Database(format!("Failed to create user: {}", e)))?
            .last_insert_rowid();
        debug!(user_id = id, "User inserted");
        Ok(User {
            id,
            name: name.to_string(),
        })
    }
}
