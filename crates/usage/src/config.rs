//! Configuration for the notification time table.
//!
//! The fixed clock-time defaults used by
//! [`infer_notification_times`](crate::infer_notification_times) are a
//! configuration table passed into the engine rather than hard-coded
//! constants, so downstream customization (per-institution or per-locale
//! defaults) does not require touching the parsing logic itself.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced when validating a notification time table.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A slot value is not a zero-padded 24-hour `HH:MM` string.
    #[error("invalid clock time for {slot}: {value:?} (expected \"HH:MM\")")]
    InvalidClockTime {
        /// Which slot carried the bad value.
        slot: &'static str,
        /// The offending value.
        value: String,
    },
}

/// Canonical clock times for the four parts of the day the heuristics
/// distinguish.
///
/// Values are zero-padded 24-hour `"HH:MM"` strings; keeping them in that
/// form means lexicographic order equals clock order, which the engine
/// relies on when sorting suggested times.
///
/// # Defaults
///
/// | Slot | Time |
/// |---------|-------|
/// | morning | 08:00 |
/// | noon | 12:00 |
/// | evening | 18:00 |
/// | night | 22:00 |
///
/// # Example
///
/// ```rust
/// use usage::NotificationDefaults;
///
/// let mut table = NotificationDefaults::default();
/// table.morning = "07:30".to_string();
/// assert!(table.validate().is_ok());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NotificationDefaults {
    /// Morning / on-rising slot.
    pub morning: String,
    /// Noon slot.
    pub noon: String,
    /// Evening / night-meal slot.
    pub evening: String,
    /// Before-bed slot.
    pub night: String,
}

impl Default for NotificationDefaults {
    fn default() -> Self {
        Self {
            morning: "08:00".to_string(),
            noon: "12:00".to_string(),
            evening: "18:00".to_string(),
            night: "22:00".to_string(),
        }
    }
}

impl NotificationDefaults {
    /// Checks every slot is a well-formed zero-padded `HH:MM` value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (slot, value) in [
            ("morning", &self.morning),
            ("noon", &self.noon),
            ("evening", &self.evening),
            ("night", &self.night),
        ] {
            if !is_clock_time(value) {
                return Err(ConfigError::InvalidClockTime {
                    slot,
                    value: value.clone(),
                });
            }
        }
        Ok(())
    }
}

fn is_clock_time(value: &str) -> bool {
    let bytes = value.as_bytes();
    if bytes.len() != 5 || bytes[2] != b':' {
        return false;
    }
    let digits = [bytes[0], bytes[1], bytes[3], bytes[4]];
    if !digits.iter().all(u8::is_ascii_digit) {
        return false;
    }
    let hour = (bytes[0] - b'0') * 10 + (bytes[1] - b'0');
    let minute = (bytes[3] - b'0') * 10 + (bytes[4] - b'0');
    hour < 24 && minute < 60
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid_and_clock_ordered() {
        let table = NotificationDefaults::default();
        assert!(table.validate().is_ok());
        assert!(table.morning < table.noon);
        assert!(table.noon < table.evening);
        assert!(table.evening < table.night);
    }

    #[test]
    fn malformed_slot_is_rejected() {
        let table = NotificationDefaults {
            evening: "6pm".to_string(),
            ..Default::default()
        };
        assert_eq!(
            table.validate(),
            Err(ConfigError::InvalidClockTime {
                slot: "evening",
                value: "6pm".to_string(),
            })
        );
    }

    #[test]
    fn out_of_range_hour_is_rejected() {
        let table = NotificationDefaults {
            night: "25:00".to_string(),
            ..Default::default()
        };
        assert!(table.validate().is_err());
    }
}
