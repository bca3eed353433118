//! Chart time frames.

use chrono::{DateTime, Duration, Months, TimeZone, Utc};
use std::fmt;
use std::str::FromStr;

/// First day with backend data. The year frame has no full year of history
/// until mid 2024, so its midpoint is clamped against this date.
pub fn data_epoch() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2023, 6, 25, 0, 0, 0).unwrap()
}

/// Selectable chart window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeFrame {
    Week,
    Month,
    Year,
}

impl TimeFrame {
    pub const ALL: [TimeFrame; 3] = [TimeFrame::Week, TimeFrame::Month, TimeFrame::Year];

    pub fn label(&self) -> &'static str {
        match self {
            TimeFrame::Week => "Last 7 Days",
            TimeFrame::Month => "Last 30 Days",
            TimeFrame::Year => "Last 365 Days",
        }
    }

    /// Earliest timestamp inside the frame. Month and year step by
    /// calendar units, so month length quirks behave like a wall calendar.
    pub fn start(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        match self {
            TimeFrame::Week => now - Duration::days(7),
            TimeFrame::Month => now - Months::new(1),
            TimeFrame::Year => now - Months::new(12),
        }
    }

    /// Midpoint of the frame, where callouts flip from trailing to
    /// leading. The year frame uses half the distance back to the data
    /// epoch until that exceeds half a year, then stays at 183 days.
    pub fn half_time(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        match self {
            TimeFrame::Week => now - Duration::hours(84),
            TimeFrame::Month => now - Duration::days(15),
            TimeFrame::Year => {
                let half_span = (now - data_epoch()) / 2;
                (now - half_span).max(now - Duration::days(183))
            }
        }
    }
}

impl fmt::Display for TimeFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TimeFrame {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "week" => Ok(TimeFrame::Week),
            "month" => Ok(TimeFrame::Month),
            "year" => Ok(TimeFrame::Year),
            other => Err(format!(
                "unknown time frame {other:?}, expected week, month or year"
            )),
        }
    }
}
