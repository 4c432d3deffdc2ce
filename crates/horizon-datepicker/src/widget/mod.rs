//! The date picker widget surface.
//!
//! This module wraps the [`PickerState`](crate::PickerState) machine in a
//! host-facing widget:
//!
//! - [`DatePicker`]: configuration, gesture routing and the
//!   `value_changed` signal
//! - [`CalendarView`]: a render-ready snapshot of the open picker
//! - [`Labels`]: display strings, with an English default
//! - [`Clock`]: the source of "today"
//!
//! # Overview
//!
//! The widget draws nothing itself. A host forwards user input as
//! [`Gesture`]s, calls [`DatePicker::view`] after each one and draws what it
//! gets back. Only a committed day or a clear reaches the host through
//! `value_changed`.
//!
//! ```
//! use chrono::NaiveDate;
//! use horizon_datepicker::widget::{DatePicker, FixedClock, Gesture};
//!
//! let mut picker = DatePicker::new()
//!     .with_clock(FixedClock(NaiveDate::from_ymd_opt(2025, 5, 26).unwrap()));
//!
//! picker.handle(Gesture::ToggleClicked);
//! let view = picker.view().unwrap();
//! assert_eq!(view.header.title, "May 2025");
//! println!("{view}");
//! ```

mod clock;
mod date_picker;
mod labels;
mod view;

pub use clock::{Clock, FixedClock, SystemClock};
pub use date_picker::{DEFAULT_YEAR_SPAN, DatePicker, Gesture, MAX_YEAR_SPAN};
pub use labels::{EnglishLabels, Labels};
pub use view::{
    CalendarView, DayCell, GridCell, HeaderView, MonthOption, TimeOption, TimeSelectors,
    YearOption,
};
