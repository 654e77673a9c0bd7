//! DateTime display utilities.
//!
//! Timestamps are shown in the system time zone; deadlines are plain
//! calendar dates and carry no zone.

use std::fmt;

use jiff::{civil::Date, tz::TimeZone, Timestamp};

/// A wrapper around `Timestamp` that formats it in the system time zone as
/// `DD/MM/YYYY HH:MM`.
pub struct LocalDateTime<'a>(pub &'a Timestamp);

impl fmt::Display for LocalDateTime<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.0
                .to_zoned(TimeZone::system())
                .strftime("%d/%m/%Y %H:%M")
        )
    }
}

/// A wrapper around a calendar date formatted as `DD/MM/YYYY`.
pub struct LocalDate<'a>(pub &'a Date);

impl fmt::Display for LocalDate<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.strftime("%d/%m/%Y"))
    }
}
