//! Core systems for Horizon Datepicker.
//!
//! This crate provides the foundational pieces shared by the date picker
//! widgets:
//!
//! - **Signal/Slot System**: Type-safe change notification to the host
//! - **Logging**: `tracing` targets, span names and helper macros
//! - **Errors**: The core error type and `Result` alias
//!
//! # Signal/Slot Example
//!
//! ```
//! use horizon_datepicker_core::Signal;
//!
//! // A signal that reports a committed day, or `None` when cleared
//! let value_changed = Signal::<Option<u32>>::new();
//!
//! let conn_id = value_changed.connect(|value| {
//!     println!("Value changed to: {:?}", value);
//! });
//!
//! value_changed.emit(Some(15));
//! value_changed.disconnect(conn_id);
//! ```

mod error;
pub mod logging;
pub mod signal;

pub use error::{CoreError, Result};
pub use logging::PerfSpan;
pub use signal::{ConnectionGuard, ConnectionId, Signal};

#[doc(hidden)]
pub use tracing;
