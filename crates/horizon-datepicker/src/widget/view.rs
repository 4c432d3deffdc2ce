//! Render-ready snapshot of an open picker.
//!
//! A [`CalendarView`] is rebuilt from the state machine on demand and holds
//! no references back into it. Hosts draw it however they like; its
//! [`Display`](std::fmt::Display) impl draws a plain text grid:
//!
//! ```text
//!           May 2025
//!  Su  Mo  Tu  We  Th  Fr  Sa
//!                   1   2 ( 3)
//! ( 4)  5   6   7   8   9 (10)
//! ```
//!
//! Disabled days are wrapped in parentheses and the committed day in
//! brackets.

use std::fmt;

use chrono::{NaiveDate, Weekday};
use horizon_datepicker_core::PerfSpan;
use horizon_datepicker_core::logging::span_names;

use crate::calendar::{MONTHS_PER_YEAR, month_grid, normalize_month};
use crate::date::DateValue;
use crate::picker::PickerState;

use super::labels::Labels;

const CELL_WIDTH: usize = 4;

/// Inputs for building a view.
pub(crate) struct ViewContext<'a> {
    pub state: &'a PickerState,
    pub labels: &'a dyn Labels,
    pub today: NaiveDate,
    pub first_day_of_week: Weekday,
    pub minute_step: u32,
    pub year_span: u32,
}

/// Month/year header with navigation hints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderView {
    /// Browsed year.
    pub year: i32,
    /// Browsed month, 0-based.
    pub month: u32,
    /// Full month name and year, e.g. `"May 2025"`.
    pub title: String,
    /// Every day of the previous month is disabled.
    ///
    /// A rendering hint only; navigating there still works.
    pub prev_month_disabled: bool,
    /// Every day of the next month is disabled.
    pub next_month_disabled: bool,
}

/// One day of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    /// Day of month, 1-based.
    pub day: u32,
    /// Clicking this day is refused.
    pub disabled: bool,
    /// This day is the committed date.
    pub selected: bool,
    /// This day is today.
    pub today: bool,
}

/// A grid position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridCell {
    /// Padding before day 1 or after the last day.
    Blank,
    /// A day of the browsed month.
    Day(DayCell),
}

impl GridCell {
    /// The day cell, if this is not padding.
    pub fn day(&self) -> Option<&DayCell> {
        match self {
            GridCell::Blank => None,
            GridCell::Day(cell) => Some(cell),
        }
    }
}

/// An entry of the month selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthOption {
    /// 0-based month index.
    pub index: u32,
    /// Display name.
    pub label: String,
    /// This is the browsed month.
    pub current: bool,
    /// No day of this month is selectable.
    pub fully_disabled: bool,
}

/// An entry of the year selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearOption {
    pub year: i32,
    pub current: bool,
    pub fully_disabled: bool,
}

/// An entry of the hour or minute selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeOption {
    pub value: u32,
    /// Two-digit label.
    pub label: String,
    /// Matches the pending value.
    pub selected: bool,
}

/// Hour and minute selectors, present in time mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeSelectors {
    /// Hours `0..=23`.
    pub hours: Vec<TimeOption>,
    /// Minutes `0..=59` by the configured step.
    pub minutes: Vec<TimeOption>,
}

impl TimeSelectors {
    /// The selected hour and minute.
    pub fn selected(&self) -> (Option<u32>, Option<u32>) {
        let pick = |options: &[TimeOption]| options.iter().find(|o| o.selected).map(|o| o.value);
        (pick(&self.hours), pick(&self.minutes))
    }
}

/// Everything needed to draw an open picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarView {
    pub header: HeaderView,
    /// Weekday column labels, starting at the configured first day.
    pub weekdays: Vec<String>,
    /// Grid cells, row-major, a whole number of weeks.
    pub cells: Vec<GridCell>,
    pub months: Vec<MonthOption>,
    pub years: Vec<YearOption>,
    /// Present iff time mode is on.
    pub time: Option<TimeSelectors>,
    pub today_label: String,
    pub clear_label: String,
}

impl CalendarView {
    /// Build a view of the open picker, or `None` when it is closed.
    pub(crate) fn build(ctx: &ViewContext<'_>) -> Option<Self> {
        let (year, month) = ctx.state.browse_position()?;
        let _span = PerfSpan::new(span_names::VIEW);

        let bounds = ctx.state.bounds();
        let committed = ctx.state.committed();
        let today = DateValue::from(ctx.today);

        let (prev_year, prev_month) = normalize_month(year, month as i32 - 1);
        let (next_year, next_month) = normalize_month(year, month as i32 + 1);
        let header = HeaderView {
            year,
            month,
            title: format!("{} {}", ctx.labels.month_name(month), year),
            prev_month_disabled: bounds.is_month_fully_disabled(prev_year, prev_month),
            next_month_disabled: bounds.is_month_fully_disabled(next_year, next_month),
        };

        let weekdays = week_order(ctx.first_day_of_week)
            .map(|weekday| ctx.labels.weekday_abbreviation(weekday).to_string())
            .collect();

        let cells = month_grid(year, month, ctx.first_day_of_week)
            .into_iter()
            .map(|slot| match slot {
                None => GridCell::Blank,
                Some(day) => {
                    let date = DateValue::new(year, month, day).ok();
                    let matches = |other: Option<DateValue>| {
                        matches!((date, other), (Some(a), Some(b)) if a.same_day(&b))
                    };
                    GridCell::Day(DayCell {
                        day,
                        disabled: bounds.is_disabled(year, month, day),
                        selected: matches(committed),
                        today: matches(Some(today)),
                    })
                }
            })
            .collect();

        let months = (0..MONTHS_PER_YEAR)
            .map(|index| MonthOption {
                index,
                label: ctx.labels.short_month_name(index).to_string(),
                current: index == month,
                fully_disabled: bounds.is_month_fully_disabled(year, index),
            })
            .collect();

        let span = ctx.year_span as i32;
        let years = (year.saturating_sub(span)..=year.saturating_add(span))
            .map(|option| YearOption {
                year: option,
                current: option == year,
                fully_disabled: bounds.is_year_fully_disabled(option),
            })
            .collect();

        let time = ctx.state.pending_time().map(|pending| TimeSelectors {
            hours: time_options(0..24, 1, pending.hour()),
            minutes: time_options(0..60, ctx.minute_step.max(1), pending.minute()),
        });

        Some(Self {
            header,
            weekdays,
            cells,
            months,
            years,
            time,
            today_label: ctx.labels.today().to_string(),
            clear_label: ctx.labels.clear().to_string(),
        })
    }

    /// Grid rows of seven cells.
    pub fn rows(&self) -> impl Iterator<Item = &[GridCell]> {
        self.cells.chunks(7)
    }

    /// The cell for `day`, if it is in the grid.
    pub fn day(&self, day: u32) -> Option<&DayCell> {
        self.cells
            .iter()
            .filter_map(GridCell::day)
            .find(|cell| cell.day == day)
    }

    /// Days that can be clicked.
    pub fn enabled_days(&self) -> Vec<u32> {
        self.cells
            .iter()
            .filter_map(GridCell::day)
            .filter(|cell| !cell.disabled)
            .map(|cell| cell.day)
            .collect()
    }
}

fn week_order(first: Weekday) -> impl Iterator<Item = Weekday> {
    std::iter::successors(Some(first), |day| Some(day.succ())).take(7)
}

fn time_options(range: std::ops::Range<u32>, step: u32, selected: u32) -> Vec<TimeOption> {
    range
        .step_by(step as usize)
        .map(|value| TimeOption {
            value,
            label: format!("{value:02}"),
            selected: value == selected,
        })
        .collect()
}

impl fmt::Display for CalendarView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = CELL_WIDTH * 7;
        writeln!(f, "{}", format!("{:^width$}", self.header.title).trim_end())?;

        let header: String = self.weekdays.iter().map(|w| format!(" {w:<2} ")).collect();
        writeln!(f, "{}", header.trim_end())?;

        for row in self.rows() {
            let line: String = row
                .iter()
                .map(|cell| match cell {
                    GridCell::Blank => " ".repeat(CELL_WIDTH),
                    GridCell::Day(day) if day.selected => format!("[{:>2}]", day.day),
                    GridCell::Day(day) if day.disabled => format!("({:>2})", day.day),
                    GridCell::Day(day) => format!(" {:>2} ", day.day),
                })
                .collect();
            writeln!(f, "{}", line.trim_end())?;
        }

        if let Some(time) = &self.time {
            if let (Some(hour), Some(minute)) = time.selected() {
                writeln!(f, "{hour:02}:{minute:02}")?;
            }
        }
        Ok(())
    }
}
