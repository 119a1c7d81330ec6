//! CLI module for useraudit
//!
//! Provides command-line interface for starting the server.

/// serve サブコマンド
pub mod serve;

use clap::{Parser, Subcommand};

/// useraudit - user records API with best-effort audit logging
#[derive(Parser, Debug)]
#[command(name = "useraudit")]
#[command(version, about, long_about = None)]
#[command(after_help = r#"ENVIRONMENT VARIABLES:
    USERAUDIT_HOST                Bind address (default: 0.0.0.0)
    USERAUDIT_PORT                Listen port (default: 5000)
    USERAUDIT_DATABASE_URL        SQLite database URL (default: sqlite://users.db)
    USERAUDIT_AUDIT_URL           Audit service endpoint (default: https://example.com/audit)
    USERAUDIT_AUDIT_TIMEOUT_SECS  Audit dispatch timeout in seconds (default: 5)
    USERAUDIT_LOG_LEVEL           Log level (default: info)
    USERAUDIT_LOG_DIR             Directory for daily-rolling log files
"#)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the API server
    Serve(serve::ServeArgs),
}
