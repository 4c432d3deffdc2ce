//! DatePicker widget.
//!
//! The DatePicker shows a trigger with the committed date and, when open, a
//! month calendar with:
//! - Month and year navigation
//! - Month and year selectors
//! - Optional hour and minute selectors
//! - Minimum/maximum bounds and a host predicate for disabled dates
//! - Today and clear affordances
//!
//! The widget is headless: hosts feed it [`Gesture`]s and draw the
//! [`CalendarView`] returned by [`DatePicker::view`].
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicU32, Ordering};
//!
//! use chrono::NaiveDate;
//! use horizon_datepicker::widget::{DatePicker, FixedClock, Gesture};
//! use horizon_datepicker::DateValue;
//!
//! let today = NaiveDate::from_ymd_opt(2025, 5, 26).unwrap();
//! let picker = DatePicker::new()
//!     .with_clock(FixedClock(today))
//!     .with_value(Some(DateValue::new(2025, 4, 26).unwrap()));
//!
//! let committed = Arc::new(AtomicU32::new(0));
//! let seen = committed.clone();
//! picker.value_changed.connect(move |value| {
//!     if let Some(value) = value {
//!         seen.store(value.day(), Ordering::SeqCst);
//!     }
//! });
//!
//! let mut picker = picker;
//! picker.handle(Gesture::ToggleClicked);
//! picker.handle(Gesture::DayClicked(15));
//!
//! assert_eq!(committed.load(Ordering::SeqCst), 15);
//! assert_eq!(picker.trigger_label(), "2025-05-15");
//! ```

use std::sync::Arc;

use chrono::{Datelike, NaiveDate, Weekday};
use horizon_datepicker_core::logging::targets;
use horizon_datepicker_core::{Signal, picker_debug, picker_trace};

use crate::bounds::{BoundsValidator, DisabledPredicate};
use crate::config::DatePickerConfig;
use crate::date::DateValue;
use crate::picker::{Commit, PickerState};

use super::clock::{Clock, SystemClock};
use super::labels::{EnglishLabels, Labels};
use super::view::{CalendarView, ViewContext};

/// Default number of years listed on each side of the browsed year.
pub const DEFAULT_YEAR_SPAN: u32 = 10;

/// Largest accepted year span.
pub const MAX_YEAR_SPAN: u32 = 100;

/// A user interaction with the picker surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    /// The trigger was clicked.
    ToggleClicked,
    /// The previous-month arrow was clicked.
    PrevMonth,
    /// The next-month arrow was clicked.
    NextMonth,
    /// The previous-year arrow was clicked.
    PrevYear,
    /// The next-year arrow was clicked.
    NextYear,
    /// A month was picked in the month selector (0-based).
    MonthChosen(i32),
    /// A year was picked in the year selector.
    YearChosen(i32),
    /// A day cell was clicked.
    DayClicked(u32),
    /// An hour was picked.
    HourChosen(u32),
    /// A minute was picked.
    MinuteChosen(u32),
    /// The today affordance was clicked.
    TodayClicked,
    /// The clear affordance was clicked.
    ClearClicked,
    /// A click landed outside the open picker.
    ClickedOutside,
    /// Escape was pressed while the picker had focus.
    EscapePressed,
}

/// A headless date picker widget.
///
/// # Signals
///
/// - `value_changed(Option<DateValue>)`: Emitted once per committed day or
///   clear, never on navigation or time edits.
pub struct DatePicker {
    /// The selection state machine, which also owns the bounds.
    state: PickerState,

    /// Trigger text when nothing is committed; the label table's when unset.
    placeholder: Option<String>,

    /// First grid column.
    first_day_of_week: Weekday,

    /// Granularity of the minute selector.
    minute_step: u32,

    /// Years listed on each side of the browsed year.
    year_span: u32,

    /// Display strings.
    labels: Arc<dyn Labels>,

    /// Source of today's date.
    clock: Arc<dyn Clock>,

    /// Signal emitted when the committed value changes.
    pub value_changed: Signal<Option<DateValue>>,
}

impl DatePicker {
    /// Create a new, empty date picker.
    pub fn new() -> Self {
        Self {
            state: PickerState::default(),
            placeholder: None,
            first_day_of_week: Weekday::Sun,
            minute_step: 1,
            year_span: DEFAULT_YEAR_SPAN,
            labels: Arc::new(EnglishLabels),
            clock: Arc::new(SystemClock),
            value_changed: Signal::new(),
        }
    }

    /// Create a date picker from a loaded configuration.
    ///
    /// The disabled-date predicate cannot live in a file; attach it with
    /// [`with_disabled_predicate`](Self::with_disabled_predicate).
    pub fn from_config(config: &DatePickerConfig) -> Self {
        let mut picker = Self::new()
            .with_value(config.value)
            .with_show_time(config.show_time)
            .with_first_day_of_week(config.first_day_of_week.into())
            .with_minute_step(config.minute_step)
            .with_year_span(config.year_span);
        picker.set_range(config.min, config.max);
        picker.placeholder = config.placeholder.clone();
        picker
    }

    // =========================================================================
    // Builder methods
    // =========================================================================

    /// Set the committed value using builder pattern.
    pub fn with_value(mut self, value: Option<DateValue>) -> Self {
        self.state.set_committed(value);
        self
    }

    /// Set the minimum selectable date using builder pattern.
    pub fn with_minimum(mut self, date: DateValue) -> Self {
        self.set_minimum(Some(date));
        self
    }

    /// Set the maximum selectable date using builder pattern.
    pub fn with_maximum(mut self, date: DateValue) -> Self {
        self.set_maximum(Some(date));
        self
    }

    /// Set both bounds using builder pattern.
    pub fn with_range(mut self, min: DateValue, max: DateValue) -> Self {
        self.set_range(Some(min), Some(max));
        self
    }

    /// Set the disabled-date predicate using builder pattern.
    ///
    /// The predicate receives `(year, month, day)` with a 0-based month.
    pub fn with_disabled_predicate<F>(mut self, predicate: F) -> Self
    where
        F: Fn(i32, u32, u32) -> bool + Send + Sync + 'static,
    {
        self.set_disabled_predicate(Some(Arc::new(predicate)));
        self
    }

    /// Enable time selection using builder pattern.
    pub fn with_show_time(mut self, show: bool) -> Self {
        self.set_show_time(show);
        self
    }

    /// Set the placeholder using builder pattern.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Set the first day of the week using builder pattern.
    pub fn with_first_day_of_week(mut self, day: Weekday) -> Self {
        self.first_day_of_week = day;
        self
    }

    /// Set the minute selector step using builder pattern.
    pub fn with_minute_step(mut self, step: u32) -> Self {
        self.set_minute_step(step);
        self
    }

    /// Set the year selector span using builder pattern.
    pub fn with_year_span(mut self, span: u32) -> Self {
        self.set_year_span(span);
        self
    }

    /// Set the label table using builder pattern.
    pub fn with_labels(mut self, labels: impl Labels + 'static) -> Self {
        self.labels = Arc::new(labels);
        self
    }

    /// Set the clock using builder pattern.
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    // =========================================================================
    // Properties
    // =========================================================================

    /// Get the committed value.
    pub fn value(&self) -> Option<DateValue> {
        self.state.committed()
    }

    /// Reconcile an external value change.
    ///
    /// Never emits `value_changed`, and an open session keeps browsing where
    /// it was.
    pub fn set_value(&mut self, value: Option<DateValue>) {
        self.state.set_committed(value);
    }

    /// Get the selectability rules.
    pub fn bounds(&self) -> &BoundsValidator {
        self.state.bounds()
    }

    /// Set the minimum selectable date.
    pub fn set_minimum(&mut self, date: Option<DateValue>) {
        self.state.bounds_mut().set_minimum(date);
    }

    /// Set the maximum selectable date.
    pub fn set_maximum(&mut self, date: Option<DateValue>) {
        self.state.bounds_mut().set_maximum(date);
    }

    /// Set both bounds.
    pub fn set_range(&mut self, min: Option<DateValue>, max: Option<DateValue>) {
        self.state.bounds_mut().set_range(min, max);
    }

    /// Replace the disabled-date predicate.
    pub fn set_disabled_predicate(&mut self, predicate: Option<DisabledPredicate>) {
        self.state.bounds_mut().set_predicate(predicate);
    }

    /// Whether hour and minute selection is shown.
    pub fn show_time(&self) -> bool {
        self.state.time_enabled()
    }

    /// Enable or disable time selection.
    pub fn set_show_time(&mut self, show: bool) {
        self.state.set_time_enabled(show);
    }

    /// Get the first day of the week.
    pub fn first_day_of_week(&self) -> Weekday {
        self.first_day_of_week
    }

    /// Set the first day of the week.
    pub fn set_first_day_of_week(&mut self, day: Weekday) {
        self.first_day_of_week = day;
    }

    /// Get the minute selector step.
    pub fn minute_step(&self) -> u32 {
        self.minute_step
    }

    /// Set the minute selector step, clamped to `1..=60`.
    pub fn set_minute_step(&mut self, step: u32) {
        self.minute_step = step.clamp(1, 60);
    }

    /// Get the year selector span.
    pub fn year_span(&self) -> u32 {
        self.year_span
    }

    /// Set the year selector span, capped at [`MAX_YEAR_SPAN`].
    pub fn set_year_span(&mut self, span: u32) {
        self.year_span = span.min(MAX_YEAR_SPAN);
    }

    /// The text shown on the trigger.
    ///
    /// `YYYY-MM-DD`, with ` HH:MM` when the value carries time, or the
    /// placeholder when nothing is committed.
    pub fn trigger_label(&self) -> String {
        match self.state.committed() {
            Some(value) => value.to_string(),
            None => self
                .placeholder
                .clone()
                .unwrap_or_else(|| self.labels.placeholder().to_string()),
        }
    }

    /// Whether the picker is open.
    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    /// The underlying state machine.
    pub fn state(&self) -> &PickerState {
        &self.state
    }

    // =========================================================================
    // Operations
    // =========================================================================

    /// Open the picker. Returns `false` if it was already open.
    pub fn open(&mut self) -> bool {
        let today = self.clock.today();
        self.state.open(today)
    }

    /// Close the picker without committing.
    pub fn dismiss(&mut self) -> bool {
        self.state.dismiss()
    }

    /// Select a day of the browsed month. Returns whether it was committed.
    pub fn select_day(&mut self, day: u32) -> bool {
        let commit = self.state.select_day(day);
        self.forward(commit)
    }

    /// Clear the selection. Returns whether the picker was open.
    pub fn clear(&mut self) -> bool {
        let commit = self.state.clear();
        self.forward(commit)
    }

    /// Navigate to today's month and select today if it is allowed.
    ///
    /// A disallowed today leaves the picker open on today's month.
    pub fn select_today(&mut self) -> bool {
        let today = self.clock.today();
        if !self.state.go_to_today(today) {
            return false;
        }
        self.select_day(today.day());
        true
    }

    /// Build the render snapshot, or `None` when closed.
    pub fn view(&self) -> Option<CalendarView> {
        CalendarView::build(&ViewContext {
            state: &self.state,
            labels: self.labels.as_ref(),
            today: self.today(),
            first_day_of_week: self.first_day_of_week,
            minute_step: self.minute_step,
            year_span: self.year_span,
        })
    }

    /// Route a gesture to the state machine.
    ///
    /// Returns whether the gesture was consumed.
    pub fn handle(&mut self, gesture: Gesture) -> bool {
        let _span = tracing::trace_span!(target: targets::WIDGET, "gesture", ?gesture).entered();

        let consumed = match gesture {
            Gesture::ToggleClicked => {
                let today = self.clock.today();
                self.state.toggle(today);
                true
            }
            Gesture::PrevMonth => self.state.step_month(-1),
            Gesture::NextMonth => self.state.step_month(1),
            Gesture::PrevYear => self.state.step_year(-1),
            Gesture::NextYear => self.state.step_year(1),
            Gesture::MonthChosen(month) => self.state.set_month(month),
            Gesture::YearChosen(year) => self.state.set_year(year),
            Gesture::DayClicked(day) => {
                if self.state.is_open() {
                    self.select_day(day);
                    true
                } else {
                    false
                }
            }
            Gesture::HourChosen(hour) => self.state.set_hour(hour),
            Gesture::MinuteChosen(minute) => self.state.set_minute(minute),
            Gesture::TodayClicked => self.select_today(),
            Gesture::ClearClicked => self.clear(),
            Gesture::ClickedOutside | Gesture::EscapePressed => self.state.dismiss(),
        };

        if !consumed {
            picker_trace!(target: targets::WIDGET, ?gesture, "gesture ignored");
        }
        consumed
    }

    fn forward(&self, commit: Option<Commit>) -> bool {
        match commit {
            Some(commit) => {
                picker_debug!(target: targets::WIDGET, value = ?commit.value(), "emitting value_changed");
                self.value_changed.emit(commit.value());
                true
            }
            None => false,
        }
    }

    fn today(&self) -> NaiveDate {
        self.clock.today()
    }
}

impl Default for DatePicker {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for DatePicker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatePicker")
            .field("state", &self.state)
            .field("placeholder", &self.placeholder)
            .field("first_day_of_week", &self.first_day_of_week)
            .field("minute_step", &self.minute_step)
            .field("year_span", &self.year_span)
            .field("value_changed", &self.value_changed)
            .finish_non_exhaustive()
    }
}

static_assertions::assert_impl_all!(DatePicker: Send, Sync);
