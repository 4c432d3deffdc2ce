//! The date value a picker commits.
//!
//! [`DateValue`] is an immutable calendar date with an optional time of day.
//! Months are 0-based like the rest of the crate; the text form is the usual
//! 1-based `YYYY-MM-DD`, optionally followed by `HH:MM`.
//!
//! # Example
//!
//! ```
//! use horizon_datepicker::DateValue;
//!
//! let date: DateValue = "2025-05-26".parse().unwrap();
//! assert_eq!(date.month(), 4);
//! assert_eq!(date.to_string(), "2025-05-26");
//!
//! let with_time = date.with_time(9, 30).unwrap();
//! assert_eq!(with_time.to_string(), "2025-05-26 09:30");
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::calendar::{MONTHS_PER_YEAR, days_in_month};
use crate::error::DateError;

/// A time of day with minute precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct TimeOfDay {
    hour: u32,
    minute: u32,
}

impl TimeOfDay {
    /// 00:00, the time seeded when a value carries none.
    pub const MIDNIGHT: Self = Self { hour: 0, minute: 0 };

    /// Create a time, validating `hour <= 23` and `minute <= 59`.
    pub fn new(hour: u32, minute: u32) -> Result<Self, DateError> {
        if hour > 23 || minute > 59 {
            return Err(DateError::TimeOutOfRange { hour, minute });
        }
        Ok(Self { hour, minute })
    }

    /// Hour, `0..=23`.
    pub fn hour(&self) -> u32 {
        self.hour
    }

    /// Minute, `0..=59`.
    pub fn minute(&self) -> u32 {
        self.minute
    }

    /// Replace the hour, clamping to `0..=23`.
    pub fn with_hour(self, hour: u32) -> Self {
        Self {
            hour: hour.min(23),
            ..self
        }
    }

    /// Replace the minute, clamping to `0..=59`.
    pub fn with_minute(self, minute: u32) -> Self {
        Self {
            minute: minute.min(59),
            ..self
        }
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// A calendar date plus an optional time of day.
///
/// Equality and ordering are field-wise and year-major: year, then month,
/// then day, then time (a value without time sorts before the same day with
/// any time). The day is always valid for its month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateValue {
    year: i32,
    month: u32,
    day: u32,
    time: Option<TimeOfDay>,
}

impl DateValue {
    /// Create a date-only value. `month` is 0-based.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        if month >= MONTHS_PER_YEAR {
            return Err(DateError::MonthOutOfRange { month });
        }
        if day == 0 || day > days_in_month(year, month) {
            return Err(DateError::DayOutOfRange { year, month, day });
        }
        Ok(Self {
            year,
            month,
            day,
            time: None,
        })
    }

    /// Return a copy carrying the given time of day.
    pub fn with_time(self, hour: u32, minute: u32) -> Result<Self, DateError> {
        Ok(self.with_time_of_day(TimeOfDay::new(hour, minute)?))
    }

    /// Return a copy carrying `time`.
    pub fn with_time_of_day(self, time: TimeOfDay) -> Self {
        Self {
            time: Some(time),
            ..self
        }
    }

    /// Return a copy without time fields.
    pub fn date_only(self) -> Self {
        Self { time: None, ..self }
    }

    /// Year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Month, `0..=11`.
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Month, `1..=12`, as written in text.
    pub fn month_number(&self) -> u32 {
        self.month + 1
    }

    /// Day of month, starting at 1.
    pub fn day(&self) -> u32 {
        self.day
    }

    /// Time of day, if this value carries one.
    pub fn time(&self) -> Option<TimeOfDay> {
        self.time
    }

    /// Whether this value carries time fields.
    pub fn has_time(&self) -> bool {
        self.time.is_some()
    }

    /// Compare calendar dates only, ignoring time fields.
    pub fn compare_date_only(&self, other: &Self) -> Ordering {
        (self.year, self.month, self.day).cmp(&(other.year, other.month, other.day))
    }

    /// Whether both values fall on the same calendar day.
    pub fn same_day(&self, other: &Self) -> bool {
        self.compare_date_only(other) == Ordering::Equal
    }

    /// Convert to a chrono date. `None` only outside chrono's year range.
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month + 1, self.day)
    }

    /// Convert to a chrono date-time, using midnight when no time is set.
    pub fn to_naive_datetime(&self) -> Option<NaiveDateTime> {
        let time = self.time.unwrap_or(TimeOfDay::MIDNIGHT);
        self.to_naive_date()?.and_hms_opt(time.hour, time.minute, 0)
    }
}

impl From<NaiveDate> for DateValue {
    fn from(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month0(),
            day: date.day(),
            time: None,
        }
    }
}

impl From<NaiveDateTime> for DateValue {
    /// Seconds and sub-second precision are dropped.
    fn from(datetime: NaiveDateTime) -> Self {
        Self::from(datetime.date()).with_time_of_day(TimeOfDay {
            hour: datetime.hour(),
            minute: datetime.minute(),
        })
    }
}

impl fmt::Display for DateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month + 1, self.day)?;
        if let Some(time) = self.time {
            write!(f, " {time}")?;
        }
        Ok(())
    }
}

impl FromStr for DateValue {
    type Err = DateError;

    /// Accepts `YYYY-MM-DD`, `YYYY-MM-DD HH:MM` and `YYYY-MM-DDTHH:MM`.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();
        let (date_part, time_part) = match trimmed.find(['T', ' ']) {
            Some(idx) => (&trimmed[..idx], Some(trimmed[idx + 1..].trim_start())),
            None => (trimmed, None),
        };

        let (negative, unsigned) = match date_part.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, date_part),
        };
        let mut fields = unsigned.split('-');
        let year: i32 = parse_field(fields.next(), input, "missing or invalid year")?;
        let month: u32 = parse_field(fields.next(), input, "missing or invalid month")?;
        let day: u32 = parse_field(fields.next(), input, "missing or invalid day")?;
        if fields.next().is_some() {
            return Err(DateError::parse(input, "unexpected trailing date field"));
        }
        if !(1..=MONTHS_PER_YEAR).contains(&month) {
            return Err(DateError::MonthOutOfRange {
                month: month.saturating_sub(1),
            });
        }
        let year = if negative { -year } else { year };
        let date = DateValue::new(year, month - 1, day)?;

        match time_part {
            None => Ok(date),
            Some(text) => {
                let mut fields = text.split(':');
                let hour: u32 = parse_field(fields.next(), input, "missing or invalid hour")?;
                let minute: u32 = parse_field(fields.next(), input, "missing or invalid minute")?;
                if fields.next().is_some() {
                    return Err(DateError::parse(input, "expected HH:MM"));
                }
                date.with_time(hour, minute)
            }
        }
    }
}

fn parse_field<T: FromStr>(
    field: Option<&str>,
    input: &str,
    reason: &'static str,
) -> Result<T, DateError> {
    match field {
        Some(text) if !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit()) => {
            text.parse().map_err(|_| DateError::parse(input, reason))
        }
        _ => Err(DateError::parse(input, reason)),
    }
}

impl Serialize for DateValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DateValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> DateValue {
        DateValue::new(year, month, day).unwrap()
    }

    #[test]
    fn test_new_validates_components() {
        assert!(DateValue::new(2024, 1, 29).is_ok());
        assert_eq!(
            DateValue::new(2025, 1, 29),
            Err(DateError::DayOutOfRange {
                year: 2025,
                month: 1,
                day: 29
            })
        );
        assert_eq!(
            DateValue::new(2025, 12, 1),
            Err(DateError::MonthOutOfRange { month: 12 })
        );
        assert!(DateValue::new(2025, 0, 0).is_err());
        assert_eq!(
            date(2025, 0, 1).with_time(24, 0),
            Err(DateError::TimeOutOfRange { hour: 24, minute: 0 })
        );
    }

    #[test]
    fn test_ordering_is_year_major() {
        assert!(date(2024, 11, 31) < date(2025, 0, 1));
        assert!(date(2025, 0, 31) < date(2025, 1, 1));
        assert!(date(2025, 4, 1) < date(2025, 4, 2));

        let plain = date(2025, 4, 26);
        let morning = plain.with_time(9, 0).unwrap();
        let evening = plain.with_time(18, 30).unwrap();
        assert!(plain < morning);
        assert!(morning < evening);
        assert_ne!(plain, morning);
        assert_eq!(plain.compare_date_only(&evening), Ordering::Equal);
        assert!(plain.same_day(&evening));
    }

    #[test]
    fn test_display() {
        assert_eq!(date(2025, 4, 26).to_string(), "2025-05-26");
        assert_eq!(date(987, 0, 5).to_string(), "0987-01-05");
        assert_eq!(
            date(2025, 4, 26).with_time(7, 5).unwrap().to_string(),
            "2025-05-26 07:05"
        );
    }

    #[test]
    fn test_parse_accepts_supported_forms() {
        assert_eq!("2025-05-26".parse::<DateValue>(), Ok(date(2025, 4, 26)));
        assert_eq!(
            "2025-05-26T14:45".parse::<DateValue>(),
            date(2025, 4, 26).with_time(14, 45)
        );
        assert_eq!(
            " 2025-05-26 14:45 ".parse::<DateValue>(),
            date(2025, 4, 26).with_time(14, 45)
        );
        assert_eq!("2024-02-29".parse::<DateValue>(), Ok(date(2024, 1, 29)));
    }

    #[test]
    fn test_parse_rejects_malformed_input() {
        for input in ["", "2025", "2025-05", "2025-05-26-01", "2025/05/26", "2025-5-x"] {
            assert!(
                matches!(input.parse::<DateValue>(), Err(DateError::Parse { .. })),
                "{input:?} should not parse"
            );
        }
        assert_eq!(
            "2025-13-01".parse::<DateValue>(),
            Err(DateError::MonthOutOfRange { month: 12 })
        );
        assert!(matches!(
            "2023-02-29".parse::<DateValue>(),
            Err(DateError::DayOutOfRange { .. })
        ));
        assert!(matches!(
            "2025-05-26 25:00".parse::<DateValue>(),
            Err(DateError::TimeOutOfRange { .. })
        ));
        assert!(matches!(
            "2025-05-26 10:00:00".parse::<DateValue>(),
            Err(DateError::Parse { .. })
        ));
    }

    #[test]
    fn test_chrono_conversions() {
        let naive = NaiveDate::from_ymd_opt(2025, 5, 26).unwrap();
        let value = DateValue::from(naive);
        assert_eq!(value, date(2025, 4, 26));
        assert_eq!(value.to_naive_date(), Some(naive));

        let datetime = naive.and_hms_opt(13, 37, 59).unwrap();
        let value = DateValue::from(datetime);
        assert_eq!(value.time(), Some(TimeOfDay::new(13, 37).unwrap()));
        assert_eq!(value.to_naive_datetime(), naive.and_hms_opt(13, 37, 0));
    }

    #[test]
    fn test_serde_uses_text_form() {
        let value = date(2025, 4, 26).with_time(8, 15).unwrap();
        let json = serde_json::to_string(&value).unwrap();
        assert_eq!(json, "\"2025-05-26 08:15\"");
        let back: DateValue = serde_json::from_str(&json).unwrap();
        assert_eq!(back, value);

        let err = serde_json::from_str::<DateValue>("\"2025-02-30\"").unwrap_err();
        assert!(err.to_string().contains("out of range"));
    }

    #[test]
    fn test_time_clamping_helpers() {
        let time = TimeOfDay::MIDNIGHT.with_hour(30).with_minute(75);
        assert_eq!((time.hour(), time.minute()), (23, 59));
        assert_eq!(time.to_string(), "23:59");
    }
}
