//! Calendar dates: parsing client input, "today", and display rendering
//!
//! Exercise dates carry no time of day. Clients may send either a plain
//! `YYYY-MM-DD` date or an RFC 3339 timestamp; timestamps are reduced to the
//! calendar date they fall on in the configured time zone.

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;
use serde::{Serialize, Serializer};

use super::ValidationError;

/// Rendering used in every response, e.g. `Mon Jan 01 2024`.
const CALENDAR_FORMAT: &str = "%a %b %d %Y";

/// Time zone used to decide what "today" is and where timestamps land.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Calendar {
    tz: Tz,
}

impl Calendar {
    pub fn new(tz: Tz) -> Self {
        Self { tz }
    }

    pub fn utc() -> Self {
        Self::new(Tz::UTC)
    }

    pub fn timezone(&self) -> Tz {
        self.tz
    }

    /// Current calendar date in this time zone.
    pub fn today(&self) -> NaiveDate {
        self.date_of(Utc::now())
    }

    /// Calendar date an instant falls on in this time zone.
    pub fn date_of(&self, instant: DateTime<Utc>) -> NaiveDate {
        instant.with_timezone(&self.tz).date_naive()
    }

    /// Parse a client-supplied date.
    ///
    /// # Example
    /// ```
    /// use chrono::NaiveDate;
    /// use extrack_server::models::Calendar;
    ///
    /// let cal = Calendar::utc();
    /// let d = cal.parse_date("date", "2024-01-01").unwrap();
    /// assert_eq!(d, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
    /// assert!(cal.parse_date("date", "yesterday").is_err());
    /// ```
    pub fn parse_date(&self, field: &'static str, raw: &str) -> Result<NaiveDate, ValidationError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(ValidationError::Empty { field });
        }

        if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            return Ok(date);
        }

        DateTime::parse_from_rfc3339(raw)
            .map(|ts| self.date_of(ts.with_timezone(&Utc)))
            .map_err(|_| ValidationError::InvalidFormat {
                field,
                reason: "expected YYYY-MM-DD or an RFC 3339 timestamp",
            })
    }
}

impl Default for Calendar {
    fn default() -> Self {
        Self::utc()
    }
}

/// A date that serializes as a human-readable calendar string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct CalendarDate(pub NaiveDate);

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(CALENDAR_FORMAT))
    }
}

impl Serialize for CalendarDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
