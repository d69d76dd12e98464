//! Core data model types shared by all label decoders.
//!
//! These types represent the normalized result of one parse call. They are
//! designed to be:
//!
//! - **Serializable**: JSON and other formats via serde, so the host
//!   application can hand them to its persistence layer unchanged
//! - **Cloneable**: cheap to clone for downstream processing
//! - **Comparable**: structural equality for testing
//!
//! # Type Hierarchy
//!
//! ```text
//! MedicationBundle
//! ├── prescribed_date: String ("YYYY-MM-DD")
//! ├── hospital_name: String (empty when not recovered)
//! ├── patient_name: String (empty when not recovered)
//! └── medications: Vec<ParsedMedication> (never empty on success)
//!     ├── name: String (never empty)
//!     ├── usage_text: String (newline-joined, never truncated)
//!     ├── quantity / unit / days: Option<String>
//!     └── estimated_count / estimated_dose: Option<u32> / Option<f64>
//! ```

use serde::{Deserialize, Serialize};

/// One medication extracted from a scanned label.
///
/// `usage_text` is the verbatim concatenation (newline-joined) of every
/// usage and remark contribution for this medication. It is display data and
/// the sole input to the usage heuristics; it is never truncated or
/// summarized.
///
/// `estimated_count` and `estimated_dose` are heuristic scheduling hints
/// mined from `usage_text`, not clinical facts. `None` means no reliable
/// estimate, not zero.
///
/// # Examples
///
/// ```rust
/// use bundle::ParsedMedication;
///
/// let med = ParsedMedication {
///     name: "ベタメタゾンリン酸塩錠10mg".to_string(),
///     usage_text: "1日3回 毎食後".to_string(),
///     quantity: Some("21".to_string()),
///     unit: Some("錠".to_string()),
///     days: Some("7".to_string()),
///     estimated_count: Some(3),
///     estimated_dose: None,
/// };
/// assert!(med.has_usage_text());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ParsedMedication {
    /// Drug name as printed on the label. Decoders guarantee this is
    /// non-empty: an accumulator without a name is discarded, never emitted.
    pub name: String,

    /// Free-form usage/dosage instructions, newline-joined across records.
    /// Empty when the label carried no usage information.
    pub usage_text: String,

    /// Total dispensed quantity as printed (e.g. `"21"`). Kept as a string:
    /// vendors emit fractions, ranges, and unit-glued values.
    pub quantity: Option<String>,

    /// Quantity unit as printed (e.g. `"錠"`, `"mL"`).
    pub unit: Option<String>,

    /// Prescribed duration in days, digits only (`"7"`, unit words such as
    /// `日分` already stripped).
    pub days: Option<String>,

    /// Heuristic administrations-per-day estimate mined from `usage_text`.
    pub estimated_count: Option<u32>,

    /// Heuristic dose-per-administration estimate mined from `usage_text`.
    pub estimated_dose: Option<f64>,
}

impl ParsedMedication {
    /// Creates an entry carrying only a name, all optional fields unset.
    /// Decoders use this for placeholder and low-fidelity entries.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            usage_text: String::new(),
            quantity: None,
            unit: None,
            days: None,
            estimated_count: None,
            estimated_dose: None,
        }
    }

    /// Returns true when any usage instruction text was recovered.
    pub fn has_usage_text(&self) -> bool {
        !self.usage_text.is_empty()
    }
}

/// The normalized result of parsing one scanned label payload.
///
/// Constructed once at the end of a successful decode and never mutated
/// afterwards. Storage is the caller's concern; this crate never persists.
///
/// # Guarantees
///
/// - `prescribed_date` is always a `YYYY-MM-DD` string: either mined from
///   the payload or the configured fallback date
/// - `medications` is non-empty (decoders fail with a typed error instead
///   of returning an empty bundle)
/// - `hospital_name` / `patient_name` are empty strings when the payload
///   did not carry them, never sentinel text
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MedicationBundle {
    /// Dispense date, ISO-8601 (`YYYY-MM-DD`).
    pub prescribed_date: String,

    /// Dispensing institution name, empty when not recovered.
    pub hospital_name: String,

    /// Patient name, empty when not recovered.
    pub patient_name: String,

    /// Medications extracted from the payload. Non-empty on every
    /// successfully decoded bundle.
    pub medications: Vec<ParsedMedication>,
}

impl MedicationBundle {
    /// Number of medications in the bundle.
    pub fn medication_count(&self) -> usize {
        self.medications.len()
    }

    /// Returns true when the institution name was recovered from the payload.
    pub fn has_hospital_name(&self) -> bool {
        !self.hospital_name.is_empty()
    }

    /// Returns true when the patient name was recovered from the payload.
    pub fn has_patient_name(&self) -> bool {
        !self.patient_name.is_empty()
    }
}
