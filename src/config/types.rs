//! Configuration types for exit reconciliation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from `reconciliation.yaml`. Every field has a default,
//! so a partial file only overrides what it names.

use std::fmt::Write;

use chrono::{Duration, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// How punches are matched to expected times.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchingConfig {
    /// Maximum distance, in minutes, between a punch and an expected time.
    pub window_minutes: u32,
    /// Whether the day's first and last punch are excluded from matching.
    pub trim_extremes: bool,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            window_minutes: 60,
            trim_extremes: true,
        }
    }
}

impl MatchingConfig {
    /// The match window as a duration.
    pub fn window(&self) -> Duration {
        Duration::minutes(i64::from(self.window_minutes))
    }
}

/// Deviation thresholds used to classify a matched punch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThresholdConfig {
    /// Deviations at or above this many minutes are warnings.
    pub warning_minutes: u32,
    /// Deviations at or above this many minutes are violations.
    pub violation_minutes: u32,
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            warning_minutes: 15,
            violation_minutes: 60,
        }
    }
}

impl ThresholdConfig {
    /// The warning threshold as a duration.
    pub fn warning(&self) -> Duration {
        Duration::minutes(i64::from(self.warning_minutes))
    }

    /// The violation threshold as a duration.
    pub fn violation(&self) -> Duration {
        Duration::minutes(i64::from(self.violation_minutes))
    }
}

/// Date format used when `display.date_format` is unset or unusable.
pub const DEFAULT_DATE_FORMAT: &str = "%d-%m-%Y";

/// Time format used when `display.time_format` is unset or unusable.
pub const DEFAULT_TIME_FORMAT: &str = "%H:%M";

/// Formats used when rendering report rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// `strftime` pattern for dates.
    pub date_format: String,
    /// `strftime` pattern for times of day.
    pub time_format: String,
    /// Shown in place of a punch that could not be matched.
    pub missing_punch: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            time_format: DEFAULT_TIME_FORMAT.to_string(),
            missing_punch: "-".to_string(),
        }
    }
}

/// The complete reconciliation configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReconciliationConfig {
    /// Punch matching settings.
    pub matching: MatchingConfig,
    /// Compliance classification thresholds.
    pub thresholds: ThresholdConfig,
    /// Report display settings.
    pub display: DisplayConfig,
}

impl ReconciliationConfig {
    /// Checks that the configured values are usable.
    ///
    /// # Example
    ///
    /// ```
    /// use exit_compliance_engine::config::ReconciliationConfig;
    ///
    /// let mut config = ReconciliationConfig::default();
    /// assert!(config.validate().is_ok());
    ///
    /// config.thresholds.warning_minutes = 90;
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> EngineResult<()> {
        if self.matching.window_minutes == 0 {
            return Err(EngineError::InvalidConfig {
                field: "matching.window_minutes".to_string(),
                message: "must be greater than zero".to_string(),
            });
        }
        if self.thresholds.warning_minutes == 0 {
            return Err(EngineError::InvalidConfig {
                field: "thresholds.warning_minutes".to_string(),
                message: "must be greater than zero".to_string(),
            });
        }
        if self.thresholds.warning_minutes >= self.thresholds.violation_minutes {
            return Err(EngineError::InvalidConfig {
                field: "thresholds.warning_minutes".to_string(),
                message: format!(
                    "must be below violation_minutes ({})",
                    self.thresholds.violation_minutes
                ),
            });
        }
        let mut probe = String::new();
        if write!(probe, "{}", NaiveDate::default().format(&self.display.date_format)).is_err() {
            return Err(EngineError::InvalidConfig {
                field: "display.date_format".to_string(),
                message: format!("'{}' cannot format a date", self.display.date_format),
            });
        }
        if write!(probe, "{}", NaiveTime::MIN.format(&self.display.time_format)).is_err() {
            return Err(EngineError::InvalidConfig {
                field: "display.time_format".to_string(),
                message: format!("'{}' cannot format a time", self.display.time_format),
            });
        }
        if self.display.missing_punch.is_empty() {
            return Err(EngineError::InvalidConfig {
                field: "display.missing_punch".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}
