use anyhow::{anyhow, Result};
use chrono::{DateTime, NaiveDateTime, TimeZone, Timelike, Utc};

/// Drops seconds and sub-second precision. Reminders are matched at minute
/// resolution, so every stored and swept timestamp goes through this first.
pub fn truncate_to_minute(dt: DateTime<Utc>) -> DateTime<Utc> {
    dt.with_second(0)
        .and_then(|d| d.with_nanosecond(0))
        .unwrap_or(dt)
}

/// Parses the scheduled-time field of an inbound event. Accepts RFC 3339
/// (`2024-01-01T09:00:00Z`) and naive `YYYY-MM-DDTHH:MM[:SS]` forms, the latter
/// assumed UTC.
pub fn parse_datetime(input: &str) -> Result<DateTime<Utc>> {
    let input = input.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Ok(dt.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(input, format) {
            return Ok(Utc.from_utc_datetime(&naive));
        }
    }

    Err(anyhow!("Unrecognized datetime format: '{}'", input))
}

pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.format("%A, %B %d at %I:%M %p").to_string()
}
