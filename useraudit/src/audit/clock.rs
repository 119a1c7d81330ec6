//! 監査タイムスタンプ用の時計
//!
//! 日時はサーバーローカル時間（`chrono::Local`）を使用し、オフセットは付けない。

use chrono::{NaiveDateTime, Timelike};

/// 現在時刻の取得元（テストでは固定時刻に差し替える）
pub trait Clock: Send + Sync {
    /// 現在のローカル時刻
    fn now(&self) -> NaiveDateTime;
}

/// システムのローカル時計
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        chrono::Local::now().naive_local()
    }
}

/// ISO-8601形式に整形する
///
/// マイクロ秒が0なら`2000-01-02T03:04:05`、それ以外は`2000-01-02T03:04:05.123456`。
pub fn format_timestamp(ts: NaiveDateTime) -> String {
    if ts.nanosecond() / 1_000 == 0 {
        ts.format("%Y-%m-%dT%H:%M:%S").to_string()
    } else {
        ts.format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
    }
}
