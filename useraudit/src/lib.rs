//! useraudit Server
//!
//! ユーザーの参照・作成APIと、アクセスごとのベストエフォート監査ログ送信

#![warn(missing_docs)]

/// 共通型定義
pub mod common;

/// REST APIハンドラー
pub mod api;

/// データベースアクセス
pub mod db;

/// 監査ログ通知
pub mod audit;

/// 設定管理（環境変数ヘルパー）
pub mod config;

/// ロギング初期化ユーティリティ
pub mod logging;

/// CLIインターフェース
pub mod cli;

use std::sync::Arc;

/// アプリケーション状態
#[derive(Clone)]
pub struct AppState {
    /// ユーザーストア
    pub users: Arc<dyn db::UserStore>,
    /// 監査ログ送信先
    pub audit: Arc<dyn audit::AuditNotifier>,
}

impl AppState {
    /// 設定からSQLiteストアとHTTP Notifierを組み立てる
    pub fn from_config(config: &config::AppConfig) -> Result<Self, common::error::ApiError> {
        let users = db::SqliteUserStore::new(&config.storage)?;
        let audit = audit::HttpAuditNotifier::new(&config.audit)?;
        Ok(Self {
            users: Arc::new(users),
            audit: Arc::new(audit),
        })
    }
}
