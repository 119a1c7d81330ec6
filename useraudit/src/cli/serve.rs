//! serve サブコマンド
//!
//! APIサーバーを起動します。未指定の項目は環境変数の設定を使います。

use clap::Args;

use crate::config::AppConfig;

/// serve サブコマンドの引数
#[derive(Args, Debug, Clone, Default)]
pub struct ServeArgs {
    /// Listen port
    #[arg(short, long, env = "USERAUDIT_PORT")]
    pub port: Option<u16>,

    /// Bind address
    #[arg(short = 'H', long, env = "USERAUDIT_HOST")]
    pub host: Option<String>,

    /// SQLite database URL
    #[arg(long, env = "USERAUDIT_DATABASE_URL")]
    pub database_url: Option<String>,

    /// Audit service endpoint
    #[arg(long, env = "USERAUDIT_AUDIT_URL")]
    pub audit_url: Option<String>,
}

impl ServeArgs {
    /// 指定された引数で設定を上書きする
    pub fn apply(&self, config: &mut AppConfig) {
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(host) = &self.host {
            config.server.host = host.clone();
        }
        if let Some(url) = &self.database_url {
            config.storage.database_url = url.clone();
        }
        if let Some(url) = &self.audit_url {
            config.audit.url = url.clone();
        }
    }
}
