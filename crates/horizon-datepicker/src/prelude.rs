//! Prelude module for Horizon Datepicker.
//!
//! This module re-exports the most commonly used types for convenient importing:
//!
//! ```
//! use horizon_datepicker::prelude::*;
//! ```
//!
//! This provides access to:
//! - The date model (`DateValue`, `TimeOfDay`)
//! - Selection rules and state (`BoundsValidator`, `PickerState`)
//! - The widget surface (`DatePicker`, `Gesture`, `CalendarView`)
//! - Signals and errors

// ============================================================================
// Date Model
// ============================================================================

pub use crate::date::{DateValue, TimeOfDay};

// ============================================================================
// Selection
// ============================================================================

pub use crate::bounds::{BoundsValidator, DisabledPredicate};
pub use crate::picker::{Commit, PickerPhase, PickerState};

// ============================================================================
// Widget
// ============================================================================

pub use crate::config::{DatePickerConfig, WeekStart};
pub use crate::widget::{
    CalendarView, Clock, DatePicker, EnglishLabels, FixedClock, Gesture, GridCell, Labels,
    SystemClock,
};

// ============================================================================
// Signals and Errors
// ============================================================================

pub use crate::error::{ConfigError, DateError, Error, Result};
pub use horizon_datepicker_core::{ConnectionId, Signal};
