//! The picker selection state machine.
//!
//! [`PickerState`] separates the *committed* value, which the host sees, from
//! the *browse session* that exists only while the picker is open: the month
//! being browsed and, in time mode, the pending hour and minute. Navigation
//! and time edits only touch the session. A [`Commit`] is produced by exactly
//! two transitions, [`select_day`](PickerState::select_day) and
//! [`clear`](PickerState::clear); everything else is internal.
//!
//! ```text
//!            open / toggle
//!   Closed ─────────────────▶ Open ──┐ set_month, step_month, set_year,
//!     ▲                        │  ◀──┘ step_year, set_hour, set_minute
//!     │  select_day (allowed)  │
//!     ├────────────────────────┤  → Commit(Some(candidate))
//!     │  clear                 │
//!     ├────────────────────────┤  → Commit(None)
//!     │  dismiss / toggle      │
//!     └────────────────────────┘  (no commit)
//! ```
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use horizon_datepicker::{BoundsValidator, DateValue, PickerState};
//!
//! let today = NaiveDate::from_ymd_opt(2025, 5, 26).unwrap();
//! let mut state = PickerState::new(BoundsValidator::new());
//!
//! state.open(today);
//! state.step_month(1);
//! let commit = state.select_day(15).unwrap();
//!
//! assert_eq!(commit.value(), Some(DateValue::new(2025, 5, 15).unwrap()));
//! assert!(!state.is_open());
//! ```

use chrono::{Datelike, NaiveDate};
use horizon_datepicker_core::logging::targets;
use horizon_datepicker_core::{picker_debug, picker_trace};

use crate::bounds::BoundsValidator;
use crate::calendar::{is_browsable_year, shift_month};
use crate::date::{DateValue, TimeOfDay};

/// The outcome of a committing transition.
///
/// Carries the new committed value; `None` means the selection was cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Commit(Option<DateValue>);

impl Commit {
    /// The committed value, or `None` for a clear.
    pub fn value(&self) -> Option<DateValue> {
        self.0
    }

    /// Whether this commit cleared the selection.
    pub fn is_clear(&self) -> bool {
        self.0.is_none()
    }
}

/// Whether the picker is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PickerPhase {
    /// The navigation surface is hidden.
    #[default]
    Closed,
    /// The user is browsing.
    Open,
}

/// Tentative state that only exists while the picker is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct BrowseSession {
    /// Browsed year.
    year: i32,
    /// Browsed month, always `0..=11`.
    month: u32,
    /// Pending time fields, present iff time mode is on.
    pending_time: Option<TimeOfDay>,
}

/// Why a day selection was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rejection {
    Closed,
    InvalidSelection,
    DisallowedSelection,
}

/// The selection state machine.
#[derive(Debug, Clone)]
pub struct PickerState {
    /// The externally visible selection.
    committed: Option<DateValue>,
    /// Present iff the picker is open.
    session: Option<BrowseSession>,
    /// Whether commits carry time fields.
    time_enabled: bool,
    /// Selectability rules consulted on commit.
    bounds: BoundsValidator,
}

impl PickerState {
    /// Create a closed picker with no committed value.
    pub fn new(bounds: BoundsValidator) -> Self {
        Self {
            committed: None,
            session: None,
            time_enabled: false,
            bounds,
        }
    }

    /// Set the committed value using builder pattern.
    pub fn with_committed(mut self, value: Option<DateValue>) -> Self {
        self.committed = value;
        self
    }

    /// Enable time mode using builder pattern.
    pub fn with_time_enabled(mut self, enabled: bool) -> Self {
        self.time_enabled = enabled;
        self
    }

    // =========================================================================
    // Introspection
    // =========================================================================

    /// The committed value.
    pub fn committed(&self) -> Option<DateValue> {
        self.committed
    }

    /// Whether the picker is open.
    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    /// The current phase.
    pub fn phase(&self) -> PickerPhase {
        if self.is_open() {
            PickerPhase::Open
        } else {
            PickerPhase::Closed
        }
    }

    /// The browsed `(year, month)`, while open.
    pub fn browse_position(&self) -> Option<(i32, u32)> {
        self.session.map(|session| (session.year, session.month))
    }

    /// The browsed year, while open.
    pub fn browse_year(&self) -> Option<i32> {
        self.session.map(|session| session.year)
    }

    /// The browsed month (`0..=11`), while open.
    pub fn browse_month(&self) -> Option<u32> {
        self.session.map(|session| session.month)
    }

    /// Pending time fields, while open in time mode.
    pub fn pending_time(&self) -> Option<TimeOfDay> {
        self.session.and_then(|session| session.pending_time)
    }

    /// Pending hour, while open in time mode.
    pub fn pending_hour(&self) -> Option<u32> {
        self.pending_time().map(|time| time.hour())
    }

    /// Pending minute, while open in time mode.
    pub fn pending_minute(&self) -> Option<u32> {
        self.pending_time().map(|time| time.minute())
    }

    /// Whether commits carry time fields.
    pub fn time_enabled(&self) -> bool {
        self.time_enabled
    }

    /// The selectability rules.
    pub fn bounds(&self) -> &BoundsValidator {
        &self.bounds
    }

    /// Mutable access to the selectability rules.
    ///
    /// Changing bounds never alters the committed value or the session.
    pub fn bounds_mut(&mut self) -> &mut BoundsValidator {
        &mut self.bounds
    }

    // =========================================================================
    // Host-side updates
    // =========================================================================

    /// Reconcile the committed value with an external change.
    ///
    /// An open session is a snapshot taken at open time and is left alone;
    /// the new value is used from the next open.
    pub fn set_committed(&mut self, value: Option<DateValue>) {
        if self.committed != value {
            picker_trace!(target: targets::PICKER, ?value, "committed value reconciled");
            self.committed = value;
        }
    }

    /// Turn time mode on or off.
    ///
    /// When turned on while open, pending time is seeded as on open; when
    /// turned off, pending time is discarded.
    pub fn set_time_enabled(&mut self, enabled: bool) {
        if self.time_enabled == enabled {
            return;
        }
        self.time_enabled = enabled;
        let seeded = self.seed_time();
        if let Some(session) = self.session.as_mut() {
            session.pending_time = seeded;
        }
    }

    fn seed_time(&self) -> Option<TimeOfDay> {
        self.time_enabled.then(|| {
            self.committed
                .and_then(|value| value.time())
                .unwrap_or(TimeOfDay::MIDNIGHT)
        })
    }

    // =========================================================================
    // Open / close
    // =========================================================================

    /// Open the picker, seeding the browse position from the committed
    /// value, or from `today` when nothing is committed.
    ///
    /// Returns `false` if the picker was already open.
    pub fn open(&mut self, today: NaiveDate) -> bool {
        if self.is_open() {
            return false;
        }
        let (year, month) = match self.committed {
            Some(value) => (value.year(), value.month()),
            None => (today.year(), today.month0()),
        };
        self.session = Some(BrowseSession {
            year,
            month,
            pending_time: self.seed_time(),
        });
        picker_trace!(target: targets::PICKER, year, month, "picker opened");
        true
    }

    /// Open when closed, dismiss when open. Returns whether it is now open.
    pub fn toggle(&mut self, today: NaiveDate) -> bool {
        if self.is_open() {
            self.dismiss();
            false
        } else {
            self.open(today)
        }
    }

    /// Close without committing. Returns `false` if already closed.
    pub fn dismiss(&mut self) -> bool {
        if self.session.take().is_some() {
            picker_trace!(target: targets::PICKER, "picker dismissed");
            true
        } else {
            false
        }
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    /// Jump to a month of the browsed year.
    ///
    /// Indices outside `0..=11` roll into adjacent years. Returns `false`
    /// when closed, or when the move would leave the browsable year range.
    pub fn set_month(&mut self, month: i32) -> bool {
        self.navigate(|year, _| shift_month(year, 0, i64::from(month)))
    }

    /// Move the browse position by `delta` months.
    ///
    /// A move past [`MIN_YEAR`](crate::calendar::MIN_YEAR) or
    /// [`MAX_YEAR`](crate::calendar::MAX_YEAR) is refused and leaves the
    /// position unchanged.
    pub fn step_month(&mut self, delta: i32) -> bool {
        self.navigate(|year, month| shift_month(year, month, i64::from(delta)))
    }

    /// Jump to a year, keeping the browsed month.
    pub fn set_year(&mut self, year: i32) -> bool {
        self.navigate(|_, month| is_browsable_year(year).then_some((year, month)))
    }

    /// Move the browse position by `delta` years.
    pub fn step_year(&mut self, delta: i32) -> bool {
        self.navigate(|year, month| {
            year.checked_add(delta)
                .filter(|year| is_browsable_year(*year))
                .map(|year| (year, month))
        })
    }

    /// Move the browse position to today's month.
    pub fn go_to_today(&mut self, today: NaiveDate) -> bool {
        self.navigate(|_, _| Some((today.year(), today.month0())))
    }

    fn navigate(&mut self, to: impl FnOnce(i32, u32) -> Option<(i32, u32)>) -> bool {
        let Some(session) = self.session.as_mut() else {
            return false;
        };
        let Some((year, month)) = to(session.year, session.month) else {
            picker_debug!(
                target: targets::PICKER,
                year = session.year,
                month = session.month,
                "navigation outside the browsable year range refused"
            );
            return false;
        };
        session.year = year;
        session.month = month;
        picker_trace!(target: targets::PICKER, year, month, "browse position changed");
        true
    }

    // =========================================================================
    // Time edits
    // =========================================================================

    /// Set the pending hour, clamped to `0..=23`.
    ///
    /// Ignored when closed or when time mode is off. Time never participates
    /// in bounds checks on day selection.
    pub fn set_hour(&mut self, hour: u32) -> bool {
        self.edit_time(|time| time.with_hour(hour))
    }

    /// Set the pending minute, clamped to `0..=59`.
    pub fn set_minute(&mut self, minute: u32) -> bool {
        self.edit_time(|time| time.with_minute(minute))
    }

    fn edit_time(&mut self, edit: impl FnOnce(TimeOfDay) -> TimeOfDay) -> bool {
        match self.session.as_mut().and_then(|s| s.pending_time.as_mut()) {
            Some(time) => {
                *time = edit(*time);
                picker_trace!(target: targets::PICKER, time = %time, "pending time changed");
                true
            }
            None => false,
        }
    }

    // =========================================================================
    // Commit / clear
    // =========================================================================

    /// The value a click on `day` would commit, without checking bounds.
    ///
    /// `None` when closed or when `day` does not exist in the browsed month.
    pub fn candidate(&self, day: u32) -> Option<DateValue> {
        let session = self.session?;
        let date = DateValue::new(session.year, session.month, day).ok()?;
        Some(match session.pending_time {
            Some(time) if self.time_enabled => date.with_time_of_day(time),
            _ => date,
        })
    }

    /// Select a day of the browsed month and commit it.
    ///
    /// Disabled or nonexistent days are refused without any state change.
    pub fn select_day(&mut self, day: u32) -> Option<Commit> {
        let candidate = match self.check_selection(day) {
            Ok(candidate) => candidate,
            Err(reason) => {
                picker_debug!(target: targets::PICKER, day, ?reason, "day selection rejected");
                return None;
            }
        };
        self.committed = Some(candidate);
        self.session = None;
        picker_debug!(target: targets::PICKER, value = %candidate, "date committed");
        Some(Commit(Some(candidate)))
    }

    fn check_selection(&self, day: u32) -> Result<DateValue, Rejection> {
        let session = self.session.ok_or(Rejection::Closed)?;
        let candidate = self.candidate(day).ok_or(Rejection::InvalidSelection)?;
        if self.bounds.is_disabled(session.year, session.month, day) {
            return Err(Rejection::DisallowedSelection);
        }
        Ok(candidate)
    }

    /// Clear the selection and close. Bounds are not consulted.
    ///
    /// Returns `None` when the picker is closed.
    pub fn clear(&mut self) -> Option<Commit> {
        self.session.take()?;
        self.committed = None;
        picker_debug!(target: targets::PICKER, "selection cleared");
        Some(Commit(None))
    }
}

impl Default for PickerState {
    fn default() -> Self {
        Self::new(BoundsValidator::new())
    }
}

static_assertions::assert_impl_all!(PickerState: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> DateValue {
        DateValue::new(year, month, day).unwrap()
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 10, 19).unwrap()
    }

    fn opened_on(value: Option<DateValue>) -> PickerState {
        let mut state = PickerState::default().with_committed(value);
        assert!(state.open(today()));
        state
    }

    #[test]
    fn test_open_seeds_from_committed() {
        let state = opened_on(Some(date(2025, 4, 26)));
        assert_eq!(state.phase(), PickerPhase::Open);
        assert_eq!(state.browse_position(), Some((2025, 4)));
        assert_eq!(state.pending_time(), None);
    }

    #[test]
    fn test_open_seeds_from_today_when_empty() {
        let state = opened_on(None);
        assert_eq!(state.browse_position(), Some((2025, 9)));
    }

    #[test]
    fn test_browse_state_only_exists_while_open() {
        let mut state = PickerState::default().with_time_enabled(true);
        assert_eq!(state.browse_position(), None);
        assert_eq!(state.pending_hour(), None);
        assert!(!state.step_month(1));
        assert!(!state.set_hour(5));
        assert!(!state.dismiss());
        assert_eq!(state.select_day(1), None);
        assert_eq!(state.clear(), None);
    }

    #[test]
    fn test_open_twice_keeps_session() {
        let mut state = opened_on(Some(date(2025, 4, 26)));
        state.step_month(3);
        assert!(!state.open(today()));
        assert_eq!(state.browse_position(), Some((2025, 7)));
    }

    #[test]
    fn test_toggle() {
        let mut state = PickerState::default();
        assert!(state.toggle(today()));
        assert!(state.is_open());
        assert!(!state.toggle(today()));
        assert!(!state.is_open());
    }

    #[test]
    fn test_step_month_rolls_years() {
        let mut state = opened_on(Some(date(2025, 11, 5)));
        state.step_month(1);
        assert_eq!(state.browse_position(), Some((2026, 0)));
        state.step_month(-1);
        assert_eq!(state.browse_position(), Some((2025, 11)));

        let mut state = opened_on(Some(date(2025, 0, 5)));
        state.step_month(-1);
        assert_eq!(state.browse_position(), Some((2024, 11)));
        state.step_month(1);
        assert_eq!(state.browse_position(), Some((2025, 0)));
    }

    #[test]
    fn test_extreme_month_steps_are_refused() {
        let mut state = opened_on(Some(date(2025, 4, 26)));
        assert!(!state.step_month(i32::MAX));
        assert!(!state.step_month(i32::MIN));
        assert_eq!(state.browse_position(), Some((2025, 4)));
        assert!(state.step_month(1));
        assert!(state.step_month(-1));
        assert_eq!(state.browse_position(), Some((2025, 4)));
    }

    #[test]
    fn test_year_range_edge_keeps_round_trip() {
        use crate::calendar::{MAX_YEAR, MIN_YEAR};

        let mut state = opened_on(Some(date(MAX_YEAR, 11, 1)));
        assert!(!state.step_month(1));
        assert_eq!(state.browse_position(), Some((MAX_YEAR, 11)));
        assert!(state.step_month(-1));
        assert!(state.step_month(1));
        assert_eq!(state.browse_position(), Some((MAX_YEAR, 11)));

        assert!(!state.step_year(1));
        assert!(!state.set_year(i32::MAX));
        assert!(!state.set_month(i32::MAX));
        assert_eq!(state.browse_position(), Some((MAX_YEAR, 11)));

        state.set_year(MIN_YEAR);
        assert!(!state.step_year(i32::MIN));
        assert!(!state.set_month(-1));
        assert_eq!(state.browse_position(), Some((MIN_YEAR, 11)));
    }

    #[test]
    fn test_set_month_direct_and_rollover() {
        let mut state = opened_on(Some(date(2025, 4, 26)));
        assert!(state.set_month(6));
        assert_eq!(state.browse_position(), Some((2025, 6)));
        state.set_month(12);
        assert_eq!(state.browse_position(), Some((2026, 0)));
        state.set_month(-1);
        assert_eq!(state.browse_position(), Some((2025, 11)));
    }

    #[test]
    fn test_year_navigation() {
        let mut state = opened_on(Some(date(2025, 4, 26)));
        state.set_year(1999);
        assert_eq!(state.browse_position(), Some((1999, 4)));
        state.step_year(-1);
        assert_eq!(state.browse_position(), Some((1998, 4)));
        state.go_to_today(today());
        assert_eq!(state.browse_position(), Some((2025, 9)));
    }

    #[test]
    fn test_navigation_never_touches_committed() {
        let committed = Some(date(2025, 4, 26));
        let mut state = opened_on(committed);
        state.step_month(5);
        state.set_month(2);
        state.step_year(3);
        assert_eq!(state.committed(), committed);
    }

    #[test]
    fn test_select_day_commits_and_closes() {
        let mut state = opened_on(Some(date(2025, 4, 26)));
        let commit = state.select_day(15).unwrap();
        assert_eq!(commit.value(), Some(date(2025, 4, 15)));
        assert!(!commit.is_clear());
        assert_eq!(state.committed(), Some(date(2025, 4, 15)));
        assert!(!state.is_open());
    }

    #[test]
    fn test_select_day_in_browsed_month() {
        let mut state = opened_on(Some(date(2025, 4, 26)));
        state.set_month(1);
        let commit = state.select_day(28).unwrap();
        assert_eq!(commit.value(), Some(date(2025, 1, 28)));
    }

    #[test]
    fn test_disallowed_selection_is_noop() {
        let bounds = BoundsValidator::new().with_range(date(2025, 4, 1), date(2025, 4, 31));
        let mut state = PickerState::new(bounds).with_committed(Some(date(2025, 4, 26)));
        state.open(today());
        state.step_month(1);

        assert_eq!(state.select_day(3), None);
        assert!(state.is_open());
        assert_eq!(state.committed(), Some(date(2025, 4, 26)));
        assert_eq!(state.browse_position(), Some((2025, 5)));
    }

    #[test]
    fn test_invalid_selection_is_noop() {
        let mut state = opened_on(Some(date(2025, 1, 10)));
        assert_eq!(state.select_day(30), None);
        assert_eq!(state.select_day(0), None);
        assert!(state.is_open());
        assert_eq!(state.committed(), Some(date(2025, 1, 10)));
    }

    #[test]
    fn test_clear_bypasses_bounds() {
        let bounds = BoundsValidator::new().with_predicate(|_, _, _| true);
        let mut state = PickerState::new(bounds).with_committed(Some(date(2025, 4, 26)));
        state.open(today());
        let commit = state.clear().unwrap();
        assert!(commit.is_clear());
        assert_eq!(state.committed(), None);
        assert!(!state.is_open());
    }

    #[test]
    fn test_dismiss_keeps_committed() {
        let mut state = opened_on(Some(date(2025, 4, 26)));
        state.step_month(2);
        assert!(state.dismiss());
        assert_eq!(state.committed(), Some(date(2025, 4, 26)));
        assert_eq!(state.browse_position(), None);
    }

    #[test]
    fn test_time_mode_seeds_and_commits_pending_time() {
        let committed = date(2025, 4, 26).with_time(9, 45).unwrap();
        let mut state = PickerState::default()
            .with_time_enabled(true)
            .with_committed(Some(committed));
        state.open(today());
        assert_eq!(state.pending_hour(), Some(9));
        assert_eq!(state.pending_minute(), Some(45));

        assert!(state.set_hour(17));
        assert!(state.set_minute(5));
        let commit = state.select_day(15).unwrap();
        assert_eq!(
            commit.value(),
            Some(date(2025, 4, 15).with_time(17, 5).unwrap())
        );
    }

    #[test]
    fn test_time_mode_defaults_to_midnight() {
        let mut state = PickerState::default()
            .with_time_enabled(true)
            .with_committed(Some(date(2025, 4, 26)));
        state.open(today());
        assert_eq!(state.pending_time(), Some(TimeOfDay::MIDNIGHT));
        let commit = state.select_day(15).unwrap();
        assert_eq!(commit.value(), Some(date(2025, 4, 15).with_time(0, 0).unwrap()));
    }

    #[test]
    fn test_time_edits_are_clamped_and_ignored_without_time_mode() {
        let mut state = PickerState::default().with_time_enabled(true);
        state.open(today());
        state.set_hour(99);
        state.set_minute(99);
        assert_eq!(state.pending_hour(), Some(23));
        assert_eq!(state.pending_minute(), Some(59));

        let mut plain = opened_on(None);
        assert!(!plain.set_hour(5));
        assert_eq!(plain.pending_hour(), None);
    }

    #[test]
    fn test_time_edits_discarded_on_dismiss() {
        let mut state = PickerState::default()
            .with_time_enabled(true)
            .with_committed(Some(date(2025, 4, 26).with_time(8, 0).unwrap()));
        state.open(today());
        state.set_hour(20);
        state.dismiss();
        state.open(today());
        assert_eq!(state.pending_hour(), Some(8));
    }

    #[test]
    fn test_toggling_time_mode_while_open() {
        let mut state = opened_on(Some(date(2025, 4, 26)));
        state.set_time_enabled(true);
        assert_eq!(state.pending_time(), Some(TimeOfDay::MIDNIGHT));
        state.set_time_enabled(false);
        assert_eq!(state.pending_time(), None);
        let commit = state.select_day(1).unwrap();
        assert!(!commit.value().unwrap().has_time());
    }

    #[test]
    fn test_external_update_waits_for_next_open() {
        let mut state = opened_on(Some(date(2025, 2, 10)));
        state.set_committed(Some(date(2025, 6, 4)));
        assert_eq!(state.browse_position(), Some((2025, 2)));
        state.dismiss();
        state.open(today());
        assert_eq!(state.browse_month(), Some(6));
    }

    #[test]
    fn test_candidate_does_not_commit() {
        let state = opened_on(Some(date(2025, 4, 26)));
        assert_eq!(state.candidate(15), Some(date(2025, 4, 15)));
        assert_eq!(state.candidate(32), None);
        assert_eq!(state.committed(), Some(date(2025, 4, 26)));
        assert!(state.is_open());
    }
}
