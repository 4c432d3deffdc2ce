//! Date selectability rules.
//!
//! A [`BoundsValidator`] combines an inclusive minimum, an inclusive maximum
//! and an optional host predicate. The same validator answers for rendering
//! (graying out day cells and navigation hints) and for commits (rejecting a
//! stale click), so both always agree.
//!
//! # Example
//!
//! ```
//! use horizon_datepicker::{BoundsValidator, DateValue};
//!
//! let bounds = BoundsValidator::new()
//!     .with_range(
//!         DateValue::new(2025, 4, 1).unwrap(),
//!         DateValue::new(2025, 4, 31).unwrap(),
//!     )
//!     // No weekends.
//!     .with_predicate(|year, month, day| {
//!         let weekday = horizon_datepicker::calendar::weekday_of_first(year, month);
//!         matches!((weekday + day - 1) % 7, 0 | 6)
//!     });
//!
//! assert!(bounds.is_disabled(2025, 3, 30));
//! assert!(!bounds.is_disabled(2025, 4, 1));
//! assert!(bounds.is_disabled(2025, 4, 3));
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use horizon_datepicker_core::logging::targets;
use horizon_datepicker_core::{picker_trace, picker_warn};

use crate::calendar::{MONTHS_PER_YEAR, days_in_month};
use crate::date::DateValue;

/// Host rule marking additional dates as disabled.
///
/// Called with `(year, month, day)`, month 0-based. Returning `true`
/// disables the date.
pub type DisabledPredicate = Arc<dyn Fn(i32, u32, u32) -> bool + Send + Sync>;

/// Evaluates whether dates are selectable.
///
/// A date is selectable iff it is not before the minimum, not after the
/// maximum, and not disabled by the predicate. Bounds compare calendar dates
/// only, unless both the bound and the compared value carry a time, in which
/// case the time breaks ties.
#[derive(Clone, Default)]
pub struct BoundsValidator {
    /// Inclusive lower bound.
    minimum: Option<DateValue>,
    /// Inclusive upper bound.
    maximum: Option<DateValue>,
    /// Additional exclusion rule.
    predicate: Option<DisabledPredicate>,
}

impl BoundsValidator {
    /// Create a validator that allows every valid date.
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Configuration
    // =========================================================================

    /// Set the minimum using builder pattern.
    pub fn with_minimum(mut self, date: DateValue) -> Self {
        self.set_minimum(Some(date));
        self
    }

    /// Set the maximum using builder pattern.
    pub fn with_maximum(mut self, date: DateValue) -> Self {
        self.set_maximum(Some(date));
        self
    }

    /// Set both bounds using builder pattern.
    pub fn with_range(mut self, min: DateValue, max: DateValue) -> Self {
        self.set_range(Some(min), Some(max));
        self
    }

    /// Set the predicate using builder pattern.
    pub fn with_predicate<F>(mut self, predicate: F) -> Self
    where
        F: Fn(i32, u32, u32) -> bool + Send + Sync + 'static,
    {
        self.predicate = Some(Arc::new(predicate));
        self
    }

    /// Get the minimum selectable date.
    pub fn minimum(&self) -> Option<DateValue> {
        self.minimum
    }

    /// Set the minimum selectable date.
    pub fn set_minimum(&mut self, date: Option<DateValue>) {
        self.minimum = date;
        self.check_configuration();
    }

    /// Get the maximum selectable date.
    pub fn maximum(&self) -> Option<DateValue> {
        self.maximum
    }

    /// Set the maximum selectable date.
    pub fn set_maximum(&mut self, date: Option<DateValue>) {
        self.maximum = date;
        self.check_configuration();
    }

    /// Set both bounds at once, checking consistency once.
    pub fn set_range(&mut self, min: Option<DateValue>, max: Option<DateValue>) {
        self.minimum = min;
        self.maximum = max;
        self.check_configuration();
    }

    /// Replace the disabled-date predicate.
    pub fn set_predicate(&mut self, predicate: Option<DisabledPredicate>) {
        self.predicate = predicate;
    }

    /// Whether a predicate is installed.
    pub fn has_predicate(&self) -> bool {
        self.predicate.is_some()
    }

    /// Whether the minimum lies after the maximum.
    ///
    /// A misconfigured validator still answers every query; it simply finds
    /// nothing selectable.
    pub fn is_misconfigured(&self) -> bool {
        match (&self.minimum, &self.maximum) {
            (Some(min), Some(max)) => compare_with_bound(min, max) == Ordering::Greater,
            _ => false,
        }
    }

    fn check_configuration(&self) {
        if let (true, Some(min), Some(max)) = (self.is_misconfigured(), self.minimum, self.maximum) {
            picker_warn!(
                target: targets::BOUNDS,
                %min,
                %max,
                "minimum date is after maximum date; no date will be selectable"
            );
        }
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Whether the day cell `(year, month, day)` is disabled.
    ///
    /// Also true for days that do not exist in the month, so a stale or
    /// malformed click can never commit.
    pub fn is_disabled(&self, year: i32, month: u32, day: u32) -> bool {
        if month >= MONTHS_PER_YEAR || day == 0 || day > days_in_month(year, month) {
            picker_trace!(target: targets::BOUNDS, year, month, day, "day does not exist in month");
            return true;
        }
        match DateValue::new(year, month, day) {
            Ok(date) => !self.is_value_selectable(&date),
            Err(_) => true,
        }
    }

    /// Whether a full value (possibly carrying time) is selectable.
    pub fn is_value_selectable(&self, value: &DateValue) -> bool {
        if let Some(min) = &self.minimum {
            if compare_with_bound(value, min) == Ordering::Less {
                return false;
            }
        }
        if let Some(max) = &self.maximum {
            if compare_with_bound(value, max) == Ordering::Greater {
                return false;
            }
        }
        match &self.predicate {
            Some(predicate) => !predicate(value.year(), value.month(), value.day()),
            None => true,
        }
    }

    /// Whether every day of the month is disabled.
    ///
    /// Used as a hint on previous/next navigation; it never blocks
    /// navigation itself.
    pub fn is_month_fully_disabled(&self, year: i32, month: u32) -> bool {
        (1..=days_in_month(year, month)).all(|day| self.is_disabled(year, month, day))
    }

    /// Whether every month of the year is disabled.
    pub fn is_year_fully_disabled(&self, year: i32) -> bool {
        (0..MONTHS_PER_YEAR).all(|month| self.is_month_fully_disabled(year, month))
    }
}

/// Compare a value against a bound: dates only, unless both carry a time.
fn compare_with_bound(value: &DateValue, bound: &DateValue) -> Ordering {
    match (value.time(), bound.time()) {
        (Some(_), Some(_)) => value.cmp(bound),
        _ => value.compare_date_only(bound),
    }
}

impl fmt::Debug for BoundsValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundsValidator")
            .field("minimum", &self.minimum)
            .field("maximum", &self.maximum)
            .field("predicate", &self.predicate.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

static_assertions::assert_impl_all!(BoundsValidator: Send, Sync);
