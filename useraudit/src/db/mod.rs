//! データベースアクセス層
//!
//! SQLiteベースのユーザーテーブル操作。
//! `users`テーブルは既存である前提で、このクレートはスキーマを作成・変更しない。

/// ユーザー読み書き（呼び出しごとの接続）
pub mod users;

/// Repository traitパターン（テスタビリティ向上）
pub mod traits;

pub use traits::UserStore;
pub use users::SqliteUserStore;
