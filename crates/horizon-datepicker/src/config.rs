//! Declarative picker configuration.
//!
//! A [`DatePickerConfig`] carries everything about a picker that can be
//! written down: the initial value, bounds, time mode and presentation
//! options. Dates use the [`DateValue`] string form (`2025-05-26` or
//! `2025-05-26 14:30`). Configs load from TOML or JSON:
//!
//! ```
//! use horizon_datepicker::config::{DatePickerConfig, WeekStart};
//!
//! let config = DatePickerConfig::from_toml_str(r#"
//!     value = "2025-05-26"
//!     min = "2025-05-01"
//!     max = "2025-05-31"
//!     first_day_of_week = "monday"
//! "#).unwrap();
//!
//! assert_eq!(config.first_day_of_week, WeekStart::Monday);
//! assert_eq!(config.value.unwrap().day(), 26);
//! ```
//!
//! The disabled-date predicate is code, not data, and is attached to the
//! built [`DatePicker`](crate::widget::DatePicker) instead.

use std::fs;
use std::path::Path;

use chrono::Weekday;
use horizon_datepicker_core::logging::targets;
use horizon_datepicker_core::{picker_debug, picker_warn};
use serde::{Deserialize, Serialize};

use crate::date::DateValue;
use crate::error::ConfigError;
use crate::widget::DEFAULT_YEAR_SPAN;

/// Result type for configuration operations.
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// First column of the month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    /// Weeks start on Sunday.
    #[default]
    Sunday,
    /// Weeks start on Monday.
    Monday,
}

impl From<WeekStart> for Weekday {
    fn from(start: WeekStart) -> Self {
        match start {
            WeekStart::Sunday => Weekday::Sun,
            WeekStart::Monday => Weekday::Mon,
        }
    }
}

/// Supported configuration file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Json,
}

impl ConfigFormat {
    /// Pick the format from a file extension.
    pub fn from_path(path: &Path) -> ConfigResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Ok(Self::Toml),
            Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(Self::Json),
            _ => Err(ConfigError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }
}

/// Serializable picker configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DatePickerConfig {
    /// Initially committed value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<DateValue>,
    /// Inclusive minimum selectable date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<DateValue>,
    /// Inclusive maximum selectable date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<DateValue>,
    /// Whether hour and minute selectors are shown.
    pub show_time: bool,
    /// Trigger text when nothing is committed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    pub first_day_of_week: WeekStart,
    /// Minute selector granularity, `1..=60`.
    pub minute_step: u32,
    /// Years listed on each side of the browsed year.
    pub year_span: u32,
}

impl Default for DatePickerConfig {
    fn default() -> Self {
        Self {
            value: None,
            min: None,
            max: None,
            show_time: false,
            placeholder: None,
            first_day_of_week: WeekStart::Sunday,
            minute_step: 1,
            year_span: DEFAULT_YEAR_SPAN,
        }
    }
}

impl DatePickerConfig {
    /// Parse a TOML document.
    pub fn from_toml_str(text: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(text)?;
        Ok(config.normalized())
    }

    /// Parse a JSON document.
    pub fn from_json_str(text: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(text)?;
        Ok(config.normalized())
    }

    /// Load a config file, picking the format from its extension.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let format = ConfigFormat::from_path(path)?;
        let text = fs::read_to_string(path).map_err(|e| ConfigError::io(path, e))?;
        picker_debug!(target: targets::CONFIG, path = %path.display(), ?format, "loading picker config");
        match format {
            ConfigFormat::Toml => Self::from_toml_str(&text),
            ConfigFormat::Json => Self::from_json_str(&text),
        }
    }

    /// Render as a TOML document.
    pub fn to_toml_string(&self) -> ConfigResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Render as a pretty-printed JSON document.
    pub fn to_json_string(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write a config file, picking the format from its extension.
    pub fn save(&self, path: impl AsRef<Path>) -> ConfigResult<()> {
        let path = path.as_ref();
        let text = match ConfigFormat::from_path(path)? {
            ConfigFormat::Toml => self.to_toml_string()?,
            ConfigFormat::Json => self.to_json_string()?,
        };
        fs::write(path, text).map_err(|e| ConfigError::io(path, e))?;
        picker_debug!(target: targets::CONFIG, path = %path.display(), "saved picker config");
        Ok(())
    }

    /// Repair values that would make the picker misbehave, with a warning.
    fn normalized(mut self) -> Self {
        if self.minute_step == 0 || self.minute_step > 60 {
            picker_warn!(
                target: targets::CONFIG,
                minute_step = self.minute_step,
                "minute_step must be within 1..=60; clamping"
            );
            self.minute_step = self.minute_step.clamp(1, 60);
        }
        if let (Some(min), Some(max)) = (self.min, self.max) {
            if min.compare_date_only(&max).is_gt() {
                picker_warn!(target: targets::CONFIG, %min, %max, "config min is after max");
            }
        }
        self
    }
}
