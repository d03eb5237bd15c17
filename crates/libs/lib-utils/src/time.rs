//! # Time Utilities
//!
//! Parsing of the date-like values that show up in provider feeds.
//!
//! Feeds are not consistent about timestamps: rewards carry RFC 3339 strings or
//! plain `YYYY-MM-DD` dates, swap transactions carry unix seconds as either a
//! number or a string. [`parse_date_like`] accepts all of them.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Format time as RFC3339 string.
pub fn format_time(time: DateTime<Utc>) -> String {
    time.to_rfc3339()
}

/// Parse RFC3339 string to UTC DateTime.
pub fn parse_utc(moment: &str) -> Result<DateTime<Utc>, Error> {
    DateTime::parse_from_rfc3339(moment)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| Error::FailToDateParse(moment.to_string()))
}

/// Convert unix seconds to UTC DateTime.
pub fn from_unix_secs(secs: i64) -> Result<DateTime<Utc>, Error> {
    DateTime::from_timestamp(secs, 0).ok_or_else(|| Error::FailToDateParse(secs.to_string()))
}

/// Parse any of the timestamp shapes the feeds use.
///
/// Accepted, in order: RFC 3339, `YYYY-MM-DD HH:MM:SS`, `YYYY-MM-DD`
/// (midnight UTC) and integer unix seconds.
pub fn parse_date_like(moment: &str) -> Result<DateTime<Utc>, Error> {
    let moment = moment.trim();

    if let Ok(dt) = parse_utc(moment) {
        return Ok(dt);
    }

    if let Ok(naive) = NaiveDateTime::parse_from_str(moment, "%Y-%m-%d %H:%M:%S") {
        return Ok(naive.and_utc());
    }

    if let Ok(date) = NaiveDate::parse_from_str(moment, "%Y-%m-%d") {
        if let Some(naive) = date.and_hms_opt(0, 0, 0) {
            return Ok(naive.and_utc());
        }
    }

    if let Ok(secs) = moment.parse::<i64>() {
        return from_unix_secs(secs);
    }

    Err(Error::FailToDateParse(moment.to_string()))
}

// region:    --- Error
#[derive(Debug)]
pub enum Error {
    FailToDateParse(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(fmt, "{self:?}")
    }
}

impl std::error::Error for Error {}
// endregion: --- Error
