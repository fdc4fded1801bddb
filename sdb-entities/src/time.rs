use std::{fmt, str::FromStr};

use time::{
    format_description::FormatItem, macros::format_description, Duration, OffsetDateTime,
    PrimitiveDateTime,
};

// All time stamps are stored with second precision.
const TIMESTAMP_FORMAT: &[FormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");

/// A point in time, represented as unix seconds in UTC.
///
/// The textual representation is `YYYY-MM-DD HH:MM:SS` for both parsing
/// and display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(i64);

#[derive(Debug, Clone, Eq, PartialEq, thiserror::Error)]
#[error("Invalid time stamp")]
pub struct TimestampParseError;

impl Timestamp {
    pub fn now() -> Self {
        Self(OffsetDateTime::now_utc().unix_timestamp())
    }

    pub const fn from_secs(secs: i64) -> Self {
        Self(secs)
    }

    pub const fn as_secs(self) -> i64 {
        self.0
    }

    pub fn checked_add(self, duration: Duration) -> Option<Self> {
        self.0.checked_add(duration.whole_seconds()).map(Self)
    }

    pub fn checked_sub(self, duration: Duration) -> Option<Self> {
        self.0.checked_sub(duration.whole_seconds()).map(Self)
    }

    // A value outside the range representable as a calendar date renders as
    // an empty string instead of failing.
    pub fn format_display(self) -> String {
        OffsetDateTime::from_unix_timestamp(self.0)
            .ok()
            .and_then(|dt| dt.format(TIMESTAMP_FORMAT).ok())
            .unwrap_or_default()
    }
}

impl FromStr for Timestamp {
    type Err = TimestampParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PrimitiveDateTime::parse(s.trim(), TIMESTAMP_FORMAT)
            .map(|dt| Self(dt.assume_utc().unix_timestamp()))
            .map_err(|_| TimestampParseError)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        f.write_str(&self.format_display())
    }
}
