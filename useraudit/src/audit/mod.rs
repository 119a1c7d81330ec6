//! 監査ログ通知
//!
//! ユーザー参照・作成の成功時に、外部の監査サービスへ記録を1件送る。
//! 送信はベストエフォート（最大1回、リトライなし）で、失敗はローカルログに残すだけ。
//! 呼び出し側へエラーを返すことはない。

/// 監査レコードの型定義
pub mod types;

/// タイムスタンプ生成
pub mod clock;

/// HTTP送信の実装
pub mod notifier;

use async_trait::async_trait;

pub use clock::{Clock, SystemClock};
pub use notifier::HttpAuditNotifier;
pub use types::{AuditAction, AuditRecord};

/// 監査ログの送信先
///
/// 実装は失敗を内部で処理し、呼び出し側には常に成功として振る舞う。
#[async_trait]
pub trait AuditNotifier: Send + Sync {
    /// `{action, detail, timestamp}`を組み立てて送信する
    async fn send_audit_log(&self, action: &str, detail: serde_json::Value);
}
