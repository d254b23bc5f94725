//! Calendar dates as they appear in a todo.txt line.
//!
//! Dates use the fixed `YYYY-MM-DD` layout. Parsing is lenient: anything
//! that does not fit the layout is treated as "no date" rather than an
//! error, so callers hold dates as `Option<Date>`.

use std::fmt;

use chrono::{Local, NaiveDate};

const DATE_LAYOUT: &str = "%Y-%m-%d";

/// A day-granularity calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(NaiveDate);

impl Date {
    /// Build a date from year, month and day, if it exists on the calendar.
    #[must_use]
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// Today's date in the local time zone.
    #[must_use]
    pub fn today() -> Self {
        Self(Local::now().date_naive())
    }

    /// Parse a `YYYY-MM-DD` string.
    ///
    /// Returns `None` for anything that is not a real date in exactly that
    /// layout; the year must be four digits, month and day two each. Signs
    /// are rejected even though chrono's `%Y` would take them.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let mut parts = s.split('-');
        let layout_ok = matches!(
            (parts.next(), parts.next(), parts.next(), parts.next()),
            (Some(y), Some(m), Some(d), None)
                if is_digits(y, 4) && is_digits(m, 2) && is_digits(d, 2)
        );
        if !layout_ok {
            return None;
        }
        NaiveDate::parse_from_str(s, DATE_LAYOUT).ok().map(Self)
    }

}

fn is_digits(field: &str, width: usize) -> bool {
    field.len() == width && field.bytes().all(|b| b.is_ascii_digit())
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_LAYOUT))
    }
}

/// Render an optional date as a line segment: `"YYYY-MM-DD "` or `""`.
///
/// The trailing space belongs to the segment so segments concatenate
/// straight into a task line.
#[must_use]
pub fn format_segment(date: Option<Date>) -> String {
    date.map_or_else(String::new, |d| format!("{d} "))
}
