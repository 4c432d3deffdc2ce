//! Display strings for the picker.
//!
//! Localization is the host's business. The picker only asks a [`Labels`]
//! implementation for the few strings it shows and ships an English table.

use chrono::Weekday;

/// Strings shown by the picker surface.
pub trait Labels: Send + Sync {
    /// Full month name for a 0-based month index.
    fn month_name(&self, month: u32) -> &str;

    /// Abbreviated month name for a 0-based month index.
    fn short_month_name(&self, month: u32) -> &str;

    /// Column header for a weekday.
    fn weekday_abbreviation(&self, weekday: Weekday) -> &str;

    /// Trigger text when nothing is committed.
    fn placeholder(&self) -> &str {
        "Select date"
    }

    /// Text of the clear affordance.
    fn clear(&self) -> &str {
        "Clear"
    }

    /// Text of the today affordance.
    fn today(&self) -> &str {
        "Today"
    }
}

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const SHORT_MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// The default English label table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnglishLabels;

impl Labels for EnglishLabels {
    fn month_name(&self, month: u32) -> &str {
        MONTH_NAMES.get(month as usize).copied().unwrap_or("")
    }

    fn short_month_name(&self, month: u32) -> &str {
        SHORT_MONTH_NAMES.get(month as usize).copied().unwrap_or("")
    }

    fn weekday_abbreviation(&self, weekday: Weekday) -> &str {
        match weekday {
            Weekday::Sun => "Su",
            Weekday::Mon => "Mo",
            Weekday::Tue => "Tu",
            Weekday::Wed => "We",
            Weekday::Thu => "Th",
            Weekday::Fri => "Fr",
            Weekday::Sat => "Sa",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_labels() {
        let labels = EnglishLabels;
        assert_eq!(labels.month_name(0), "January");
        assert_eq!(labels.month_name(11), "December");
        assert_eq!(labels.short_month_name(4), "May");
        assert_eq!(labels.weekday_abbreviation(Weekday::Sun), "Su");
        assert_eq!(labels.placeholder(), "Select date");
    }

    #[test]
    fn test_out_of_range_month_is_empty() {
        assert_eq!(EnglishLabels.month_name(12), "");
        assert_eq!(EnglishLabels.short_month_name(99), "");
    }
}
