//! Human-readable rendering of remaining cache lifetimes.

use std::str::FromStr;
use std::time::Duration;

/// How `/api/cache` renders remaining lifetimes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeFormat {
    /// `"{m}分 {s}秒"`, minutes unbounded
    #[default]
    MinutesSeconds,
    /// `"{h}時間 {m}分 {s}秒"` once an hour or more remains
    HoursMinutesSeconds,
}

impl TimeFormat {
    /// Renders `remaining`, rounding partial seconds up.
    pub fn render(self, remaining: Duration) -> String {
        let total_secs = remaining.as_millis().div_ceil(1000) as u64;
        let secs = total_secs % 60;

        match self {
            TimeFormat::HoursMinutesSeconds if total_secs >= 3600 => {
                let hours = total_secs / 3600;
                let mins = (total_secs % 3600) / 60;
                format!("{hours}時間 {mins}分 {secs}秒")
            }
            TimeFormat::HoursMinutesSeconds => format!("{}分 {secs}秒", total_secs / 60),
            TimeFormat::MinutesSeconds => format!("{}分 {secs}秒", total_secs / 60),
        }
    }
}

/// Error for unrecognised `REMAINING_TIME_FORMAT` values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown time format: {0}")]
pub struct UnknownTimeFormat(pub String);

impl FromStr for TimeFormat {
    type Err = UnknownTimeFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ms" | "minutes" => Ok(TimeFormat::MinutesSeconds),
            "hms" | "hours" => Ok(TimeFormat::HoursMinutesSeconds),
            other => Err(UnknownTimeFormat(other.to_string())),
        }
    }
}
