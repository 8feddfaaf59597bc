//! Per-line input and the ambient date context.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use crate::error::ParseError;
use crate::normalize::normalize;

/// Date format used for the context and for displaying timestamps.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// The calendar day under which a run of lines was logged.
///
/// muh2 lines only carry a time of day; the caller knows the date (usually
/// from the log file name) and passes it in with every line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LineContext {
    date: NaiveDate,
}

impl LineContext {
    /// Create a context for the given date.
    pub fn new(date: NaiveDate) -> Self {
        Self { date }
    }

    /// The date lines are attributed to.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Combine the context date with a time of day, dropping seconds.
    pub fn timestamp(&self, time: NaiveTime) -> Timestamp {
        let minute = time.with_second(0).unwrap_or(time);
        Timestamp(self.date.and_time(minute))
    }
}

impl FromStr for LineContext {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s, DATE_FORMAT)
            .map(Self::new)
            .map_err(|e| ParseError::InvalidDate {
                input: s.to_string(),
                reason: e.to_string(),
            })
    }
}

/// A point in time with minute resolution: the context date plus the `HH:MM`
/// from the line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(NaiveDateTime);

impl Timestamp {
    /// The underlying date and time.
    pub fn as_datetime(&self) -> NaiveDateTime {
        self.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d %H:%M"))
    }
}

/// A single trimmed and normalized log line with its 1-based line number.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NormalizedLine<'a> {
    number: usize,
    text: Cow<'a, str>,
}

impl<'a> NormalizedLine<'a> {
    /// Normalize `raw` and tag it with its line number.
    ///
    /// Borrows `raw` when no normalization was necessary.
    pub fn new(number: usize, raw: &'a str) -> Self {
        Self {
            number,
            text: normalize(raw),
        }
    }

    /// Wrap text that the caller already normalized.
    pub fn from_normalized(number: usize, text: impl Into<Cow<'a, str>>) -> Self {
        Self {
            number,
            text: text.into(),
        }
    }

    /// 1-based line number.
    pub fn number(&self) -> usize {
        self.number
    }

    /// Normalized text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// True if nothing is left after normalization.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> LineContext {
        "2009-03-14".parse().unwrap()
    }

    #[test]
    fn test_context_from_str() {
        assert_eq!(
            ctx().date(),
            NaiveDate::from_ymd_opt(2009, 3, 14).unwrap()
        );
    }

    #[test]
    fn test_context_rejects_bad_date() {
        let err = "2009-02-30".parse::<LineContext>().unwrap_err();
        assert!(matches!(err, ParseError::InvalidDate { .. }));
        assert!("yesterday".parse::<LineContext>().is_err());
    }

    #[test]
    fn test_timestamp_drops_seconds() {
        let time = NaiveTime::from_hms_opt(21, 15, 42).unwrap();
        assert_eq!(ctx().timestamp(time).to_string(), "2009-03-14 21:15");
    }

    #[test]
    fn test_timestamp_ordering() {
        let early = ctx().timestamp(NaiveTime::from_hms_opt(8, 0, 0).unwrap());
        let late = ctx().timestamp(NaiveTime::from_hms_opt(21, 15, 0).unwrap());
        assert!(early < late);
    }

    #[test]
    fn test_normalized_line_borrows_clean_input() {
        let line = NormalizedLine::new(4, "[21:15] <alice> hi");
        assert_eq!(line.number(), 4);
        assert!(matches!(line.text, Cow::Borrowed(_)));
    }

    #[test]
    fn test_normalized_line_trims() {
        let line = NormalizedLine::new(1, "   \t ");
        assert!(line.is_empty());
    }
}
