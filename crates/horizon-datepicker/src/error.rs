//! Error types for Horizon Datepicker.
//!
//! User gestures never fail: a rejected selection is a silent no-op. Errors
//! only exist at the edges, when a host builds dates from raw components or
//! strings, or loads a picker configuration from disk.

use std::path::PathBuf;

/// Result type alias for date picker operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised when constructing or parsing a [`DateValue`](crate::DateValue).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    /// Month index outside `0..=11`.
    #[error("month index {month} is out of range (expected 0..=11)")]
    MonthOutOfRange { month: u32 },

    /// Day outside `1..=days_in_month(year, month)`.
    #[error("day {day} is out of range for {year}-{month_number:02}", month_number = .month + 1)]
    DayOutOfRange { year: i32, month: u32, day: u32 },

    /// Hour outside `0..=23` or minute outside `0..=59`.
    #[error("time {hour:02}:{minute:02} is out of range")]
    TimeOutOfRange { hour: u32, minute: u32 },

    /// Text that is not `YYYY-MM-DD` optionally followed by `HH:MM`.
    #[error("cannot parse '{input}' as a date: {reason}")]
    Parse { input: String, reason: &'static str },
}

impl DateError {
    pub(crate) fn parse(input: &str, reason: &'static str) -> Self {
        Self::Parse {
            input: input.to_string(),
            reason,
        }
    }
}

/// Errors raised while loading a picker configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Reading or writing the configuration file failed.
    #[error("failed to access config '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The TOML document is malformed or does not match the config shape.
    #[error("invalid TOML config: {0}")]
    Toml(#[from] toml::de::Error),

    /// The configuration could not be written as TOML.
    #[error("failed to serialize TOML config: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// The JSON document is malformed or does not match the config shape.
    #[error("invalid JSON config: {0}")]
    Json(#[from] serde_json::Error),

    /// The file extension is neither `.toml` nor `.json`.
    #[error("unsupported config format for '{path}' (expected .toml or .json)")]
    UnsupportedFormat { path: PathBuf },
}

impl ConfigError {
    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// The main error type for Horizon Datepicker operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Date construction or parsing failed.
    #[error(transparent)]
    Date(#[from] DateError),

    /// Configuration loading failed.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Core signal machinery was misused.
    #[error(transparent)]
    Core(#[from] horizon_datepicker_core::CoreError),
}
