//! Sources of "today".

use chrono::{Local, NaiveDate};

/// Supplies the current calendar date.
///
/// The picker only needs today's date to seed an empty picker, to mark the
/// today cell and for the today affordance.
pub trait Clock: Send + Sync {
    /// The current local date.
    fn today(&self) -> NaiveDate;
}

/// Reads the system clock in the local time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Always reports the same date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
