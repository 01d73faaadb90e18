//! Date helper functions

use chrono::{DateTime, Local, TimeZone};

/// Format a date with an strftime-style format string
///
/// # Examples
/// ```ignore
/// format_date(&date, "%B %d, %Y") // -> "January 15, 2024"
/// ```
pub fn format_date<Tz: TimeZone>(date: &DateTime<Tz>, format: &str) -> String
where
    Tz::Offset: std::fmt::Display,
{
    date.format(format).to_string()
}

/// The current year, for page footers
pub fn current_year() -> String {
    Local::now().format("%Y").to_string()
}
