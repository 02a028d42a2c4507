//! Number and date formatting for menu messages

use chrono::Local;
use serde::{Deserialize, Serialize};

use crate::domain::Timestamp;

/// Timezone completion dates are shown in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeDisplay {
    #[default]
    Local,
    Utc,
}

// Month/day/year, 12h clock: "1/2/2024, 3:04:05 AM"
const DATE_TIME_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

/// Group digits in threes with commas, e.g. `1234567` -> `1,234,567`
pub fn group_thousands(value: u128) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// `part / whole * 100`, with no guard for an empty whole
pub fn percentage(part: f64, whole: f64) -> f64 {
    part / whole * 100.0
}

/// One decimal place; non-finite values print as `NaN` / `Infinity`
pub fn format_percent(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        let text = if value > 0.0 { "Infinity" } else { "-Infinity" };
        text.to_string()
    } else {
        format!("{:.1}", value)
    }
}

pub fn format_timestamp(ts: &Timestamp, display: TimeDisplay) -> String {
    let dt = ts.as_datetime();
    match display {
        TimeDisplay::Local => dt.with_timezone(&Local).format(DATE_TIME_FORMAT).to_string(),
        TimeDisplay::Utc => dt.format(DATE_TIME_FORMAT).to_string(),
    }
}
