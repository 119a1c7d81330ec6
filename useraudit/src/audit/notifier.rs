//! 監査サービスへのHTTP送信
//!
//! 1件ずつ同期的にPOSTする。タイムアウトは設定値で上限を設ける。
//! ネットワークエラー・タイムアウト・非2xxはすべて`warn!`に記録して破棄する。

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;
use tracing::{debug, warn};

use super::clock::{format_timestamp, Clock, SystemClock};
use super::types::AuditRecord;
use super::AuditNotifier;
use crate::common::error::ApiError;
use crate::config::AuditConfig;

/// 送信失敗の内訳（ログ出力専用、呼び出し側には伝播しない）
#[derive(Debug, Error)]
enum AuditDeliveryError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("audit service returned status {0}")]
    Status(u16),
}

/// HTTP POSTで監査レコードを送るNotifier
#[derive(Clone)]
pub struct HttpAuditNotifier {
    client: reqwest::Client,
    url: String,
    clock: Arc<dyn Clock>,
}

impl HttpAuditNotifier {
    /// 設定からNotifierを作成（タイムアウト付きHTTPクライアントを構築）
    pub fn new(config: &AuditConfig) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ApiError::Config(format!("Failed to create audit HTTP client: {}", e)))?;
        Ok(Self::with_client(client, config.url.clone()))
    }

    /// 既存のHTTPクライアントを使って作成
    pub fn with_client(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
            clock: Arc::new(SystemClock),
        }
    }

    /// 時計を差し替える
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// 送信先URL
    pub fn url(&self) -> &str {
        &self.url
    }

    fn build_record(&self, action: &str, detail: serde_json::Value) -> AuditRecord {
        AuditRecord {
            action: action.to_string(),
            detail,
            timestamp: format_timestamp(self.clock.now()),
        }
    }

    async fn dispatch(&self, record: &AuditRecord) -> Result<(), AuditDeliveryError> {
        let response = self.client.post(&self.url).json(record).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(AuditDeliveryError::Status(status.as_u16()));
        }
        Ok(())
    }
}

#[async_trait]
impl AuditNotifier for HttpAuditNotifier {
    async fn send_audit_log(&self, action: &str, detail: serde_json::Value) {
        let record = self.build_record(action, detail);
        match self.dispatch(&record).await {
            Ok(()) => debug!(action, url = %self.url, "Audit log delivered"),
            Err(e) => warn!(action, url = %self.url, error = %e, "Audit log failed"),
        }
    }
}
