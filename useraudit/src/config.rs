//! Configuration management via environment variables
//!
//! Provides helper functions for reading environment variables with fallback
//! to legacy variable names, and the typed configuration handed to the
//! storage gateway and the audit notifier at construction time.

use std::time::Duration;

/// Default SQLite database (`users.db` in the working directory)
pub const DEFAULT_DATABASE_URL: &str = "sqlite://users.db";

/// Default audit service endpoint
pub const DEFAULT_AUDIT_URL: &str = "https://example.com/audit";

/// Default upper bound for a single audit dispatch
pub const DEFAULT_AUDIT_TIMEOUT_SECS: u64 = 5;

/// Get an environment variable with fallback to a legacy name
///
/// If the new variable name is set, returns its value.
/// If only the legacy variable name is set, returns its value
/// and logs a deprecation warning.
///
/// # Example
/// ```
/// use useraudit::config::get_env_with_fallback;
///
/// let url = get_env_with_fallback("USERAUDIT_DATABASE_URL", "DATABASE_URL");
/// ```
pub fn get_env_with_fallback(new_name: &str, old_name: &str) -> Option<String> {
    if let Ok(val) = std::env::var(new_name) {
        return Some(val);
    }
    if let Ok(val) = std::env::var(old_name) {
        tracing::warn!(
            "Environment variable '{}' is deprecated, use '{}' instead",
            old_name,
            new_name
        );
        return Some(val);
    }
    None
}

/// Get an environment variable with fallback and default value
pub fn get_env_with_fallback_or(new_name: &str, old_name: &str, default: &str) -> String {
    get_env_with_fallback(new_name, old_name).unwrap_or_else(|| default.to_string())
}

/// Get an environment variable with fallback, parsing to a specific type
///
/// Falls back to `default` when neither variable is set or parsing fails.
pub fn get_env_with_fallback_parse<T: std::str::FromStr>(
    new_name: &str,
    old_name: &str,
    default: T,
) -> T {
    get_env_with_fallback(new_name, old_name)
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

/// HTTP listener configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Bind address
    pub host: String,
    /// Listen port
    pub port: u16,
}

impl ServerConfig {
    /// Load listener configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            host: get_env_with_fallback_or("USERAUDIT_HOST", "HOST", "0.0.0.0"),
            port: get_env_with_fallback_parse("USERAUDIT_PORT", "PORT", 5000),
        }
    }

    /// `host:port` string for `TcpListener::bind`
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Storage gateway configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    /// SQLite database URL (e.g. `sqlite://users.db`)
    pub database_url: String,
}

impl StorageConfig {
    /// Load storage configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            database_url: get_env_with_fallback_or(
                "USERAUDIT_DATABASE_URL",
                "DATABASE_URL",
                DEFAULT_DATABASE_URL,
            ),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
        }
    }
}

/// Audit notifier configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditConfig {
    /// Remote endpoint receiving audit records
    pub url: String,
    /// Upper bound on a single dispatch (connect + response)
    pub timeout: Duration,
}

impl AuditConfig {
    /// Load audit configuration from environment variables.
    pub fn from_env() -> Self {
        let timeout_secs = get_env_with_fallback_parse(
            "USERAUDIT_AUDIT_TIMEOUT_SECS",
            "AUDIT_TIMEOUT_SECS",
            DEFAULT_AUDIT_TIMEOUT_SECS,
        );
        Self {
            url: get_env_with_fallback_or("USERAUDIT_AUDIT_URL", "AUDIT_LOG_URL", DEFAULT_AUDIT_URL),
            timeout: Duration::from_secs(timeout_secs),
        }
    }
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_AUDIT_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_AUDIT_TIMEOUT_SECS),
        }
    }
}

/// Full application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Listener
    pub server: ServerConfig,
    /// Storage gateway
    pub storage: StorageConfig,
    /// Audit notifier
    pub audit: AuditConfig,
}

impl AppConfig {
    /// Load the whole configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            storage: StorageConfig::from_env(),
            audit: AuditConfig::from_env(),
        }
    }
}
