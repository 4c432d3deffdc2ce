//! Logging facilities for Horizon Datepicker.
//!
//! Horizon Datepicker uses the `tracing` crate for instrumentation. The
//! library never installs a subscriber; to see logs, install one in your
//! application:
//!
//! ```ignore
//! fn main() {
//!     tracing_subscriber::fmt()
//!         .with_env_filter("horizon_datepicker=debug")
//!         .init();
//! }
//! ```
//!
//! State transitions log at `trace`, rejected selections at `debug` and
//! invalid configuration at `warn`. Use the constants in [`targets`] to
//! filter by subsystem.

/// Span names used throughout Horizon Datepicker for tracing.
pub mod span_names {
    /// Building a calendar view for rendering.
    pub const VIEW: &str = "horizon_datepicker::view";
}

/// Target names for log filtering.
pub mod targets {
    /// Core framework target.
    pub const CORE: &str = "horizon_datepicker_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "horizon_datepicker_core::signal";
    /// Picker state machine target.
    pub const PICKER: &str = "horizon_datepicker::picker";
    /// Bounds validation target.
    pub const BOUNDS: &str = "horizon_datepicker::bounds";
    /// Widget surface target.
    pub const WIDGET: &str = "horizon_datepicker::widget";
    /// Configuration loading target.
    pub const CONFIG: &str = "horizon_datepicker::config";
    /// Performance spans.
    pub const PERF: &str = "horizon_datepicker::perf";
}

/// A guard that keeps a tracing span entered until dropped.
///
/// This is useful for tracking the duration of operations.
#[derive(Debug)]
pub struct PerfSpan {
    #[allow(dead_code)]
    span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Create a new performance span.
    ///
    /// The span will be active until the guard is dropped.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::info_span!(target: targets::PERF, "perf", operation = name);
        Self {
            span: span.entered(),
        }
    }
}

/// Trace-level log with an optional `target:` prefix.
///
/// Without a target the core target is used.
#[macro_export]
macro_rules! picker_trace {
    (target: $target:expr, $($arg:tt)*) => {
        $crate::tracing::trace!(target: $target, $($arg)*)
    };
    ($($arg:tt)*) => {
        $crate::tracing::trace!(target: "horizon_datepicker_core", $($arg)*)
    };
}

/// Debug-level log with an optional `target:` prefix.
#[macro_export]
macro_rules! picker_debug {
    (target: $target:expr, $($arg:tt)*) => {
        $crate::tracing::debug!(target: $target, $($arg)*)
    };
    ($($arg:tt)*) => {
        $crate::tracing::debug!(target: "horizon_datepicker_core", $($arg)*)
    };
}

/// Warn-level log with an optional `target:` prefix.
#[macro_export]
macro_rules! picker_warn {
    (target: $target:expr, $($arg:tt)*) => {
        $crate::tracing::warn!(target: $target, $($arg)*)
    };
    ($($arg:tt)*) => {
        $crate::tracing::warn!(target: "horizon_datepicker_core", $($arg)*)
    };
}
