//! 共通型定義・エラー型

/// エラー型
pub mod error;

/// コアデータ型
pub mod types;
