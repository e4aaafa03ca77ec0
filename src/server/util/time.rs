use chrono::{DateTime, Local, TimeZone};

/// Format of timestamps stored on documents (`YYYY-MM-DD HH:mm:ss`).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Returns the current local time formatted with `TIMESTAMP_FORMAT`.
pub fn current_timestamp() -> String {
    format_timestamp(&Local::now())
}

/// Formats `datetime` with `TIMESTAMP_FORMAT`.
pub fn format_timestamp<Tz>(datetime: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    datetime.format(TIMESTAMP_FORMAT).to_string()
}
