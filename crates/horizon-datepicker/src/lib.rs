//! Horizon Datepicker - an embeddable, headless date selection widget.
//!
//! The picker lets a user browse months and years, pick a day and optionally
//! a time of day, while minimum/maximum bounds and a host predicate keep
//! disallowed dates out. The chosen value, or an explicit clear, reaches the
//! host through a single `value_changed` signal.
//!
//! The crate is layered:
//!
//! - [`calendar`]: Gregorian arithmetic on 0-based months
//! - [`DateValue`]: a calendar date with optional hour and minute
//! - [`BoundsValidator`]: which dates may be selected
//! - [`PickerState`]: the committed value and the browse session
//! - [`widget`]: the host-facing [`DatePicker`](widget::DatePicker)
//! - [`config`]: TOML/JSON picker configuration
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use horizon_datepicker::DateValue;
//! use horizon_datepicker::widget::{DatePicker, FixedClock, Gesture};
//!
//! let mut picker = DatePicker::new()
//!     .with_clock(FixedClock(NaiveDate::from_ymd_opt(2025, 5, 26).unwrap()))
//!     .with_range(
//!         DateValue::new(2025, 4, 1).unwrap(),
//!         DateValue::new(2025, 4, 31).unwrap(),
//!     );
//!
//! picker.value_changed.connect(|value| println!("committed: {value:?}"));
//!
//! picker.handle(Gesture::ToggleClicked);
//! picker.handle(Gesture::DayClicked(15));
//! assert_eq!(picker.trigger_label(), "2025-05-15");
//! ```

pub mod bounds;
pub mod calendar;
pub mod config;
pub mod date;
pub mod error;
pub mod picker;
pub mod prelude;
pub mod widget;

pub use bounds::{BoundsValidator, DisabledPredicate};
pub use date::{DateValue, TimeOfDay};
pub use error::{ConfigError, DateError, Error, Result};
pub use picker::{Commit, PickerPhase, PickerState};

pub use horizon_datepicker_core::{ConnectionId, CoreError, PerfSpan, Signal, logging};
