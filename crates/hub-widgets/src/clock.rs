// File: crates/hub-widgets/src/clock.rs
// Summary: Epoch-millisecond helpers shared by the timestamped widgets.

use chrono::{LocalResult, TimeZone, Utc};

pub fn now_ms() -> i64 {
    Utc::now().timestamp_millis()
}

/// Render an epoch-millisecond stamp as "YYYY-MM-DD HH:MM" in UTC.
pub fn format_time_ms(ms: i64) -> String {
    match Utc.timestamp_millis_opt(ms) {
        LocalResult::Single(dt) => dt.format("%Y-%m-%d %H:%M").to_string(),
        _ => "invalid time".to_owned(),
    }
}
