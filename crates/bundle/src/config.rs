//! Decoder configuration shared across dialect decoders.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Configuration accepted by every dialect decoder.
///
/// The only shared knob today is the fallback dispense date. Payloads that
/// do not carry a recognizable date keep this value; leaving it `None`
/// resolves to the current UTC date at decode time.
///
/// Tests that assert structural equality across repeated decodes should pin
/// the date instead of relying on the wall clock:
///
/// ```rust
/// use bundle::DecodeConfig;
/// use chrono::NaiveDate;
///
/// let cfg = DecodeConfig {
///     fallback_date: NaiveDate::from_ymd_opt(2024, 9, 12),
/// };
/// assert_eq!(cfg.effective_fallback_date(), "2024-09-12");
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DecodeConfig {
    /// Dispense date used when the payload carries none. `None` means
    /// "today in UTC", resolved once per decode call.
    pub fallback_date: Option<NaiveDate>,
}

impl DecodeConfig {
    /// Resolves the fallback date to its `YYYY-MM-DD` form.
    pub fn effective_fallback_date(&self) -> String {
        self.fallback_date
            .unwrap_or_else(|| Utc::now().date_naive())
            .format("%Y-%m-%d")
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pinned_date_formats_as_iso() {
        let cfg = DecodeConfig {
            fallback_date: NaiveDate::from_ymd_opt(2025, 1, 3),
        };
        assert_eq!(cfg.effective_fallback_date(), "2025-01-03");
    }

    #[test]
    fn default_resolves_to_some_iso_date() {
        let value = DecodeConfig::default().effective_fallback_date();
        assert_eq!(value.len(), 10);
        assert_eq!(value.as_bytes()[4], b'-');
        assert_eq!(value.as_bytes()[7], b'-');
    }
}
