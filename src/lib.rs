//! Umbrella crate for the medication label QR parsing core.
//!
//! A scanned dispensing label hands over one raw string in one of several
//! mutually incompatible dialects. This crate stitches the stages together
//! so callers get a single entry point:
//!
//! 1. [`classify`] tags the payload with its [`DialectTag`]
//! 2. the matching decoder produces a [`MedicationBundle`]
//! 3. the usage heuristics fill per-medication scheduling hints
//!
//! [`parse_label`] runs all three; [`notification_plan`] turns a decoded
//! bundle into per-medication reminder suggestions for the delivery
//! surface.
//!
//! Parsing is deterministic and pure: no storage, no network, no retry
//! logic. Failures come back as [`ParseError`] values carrying a
//! machine-readable [`code`](ParseError::code) so the caller can render a
//! specific message instead of a generic one.
//!
//! # Example
//!
//! ```rust
//! use medqr::{parse_label, ParseConfig};
//!
//! let cfg = ParseConfig::default();
//! let bundle = parse_label("201,1,テスト錠,10,錠\n301,1,,1日3回 毎食後,7日分", &cfg)?;
//! assert_eq!(bundle.medication_count(), 1);
//! assert_eq!(bundle.medications[0].estimated_count, Some(3));
//! # Ok::<(), medqr::ParseError>(())
//! ```

pub use bundle::{DecodeConfig, MedicationBundle, ParsedMedication};
pub use dialect::{classification_cues, classify, ClassificationCues, DialectTag};
pub use records::{decode_csv, RecordError};
pub use standard::{decode_binary, decode_pipe, StandardError};
pub use usage::{
    estimate_count, estimate_dose, has_frequency_limit, infer_notification_times,
    normalize_usage_text, ConfigError, NotificationDefaults,
};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info_span, warn};

/// Failures a parse call can surface to the caller.
///
/// Decoders never panic on malformed individual records; these four
/// categories are the only ways a parse terminates early, and they are
/// always returned as values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The classifier returned [`DialectTag::Unknown`]; no decoder was
    /// attempted.
    #[error("unsupported payload format")]
    UnsupportedFormat,

    /// A standard-dialect structural precondition failed.
    #[error(transparent)]
    Standard(#[from] StandardError),

    /// The record-stream decoder extracted zero usable medications.
    #[error(transparent)]
    Records(#[from] RecordError),

    /// A decoder returned an empty bundle. Unreachable when decoders hold
    /// their non-empty guarantee; checked anyway so the invariant failure
    /// is a typed value rather than silent bad data.
    #[error("decoder returned an empty bundle")]
    EmptyResult,
}

impl ParseError {
    /// Machine-readable reason code for the host application's UI layer.
    pub fn code(&self) -> &'static str {
        match self {
            ParseError::UnsupportedFormat => "unsupported_format",
            ParseError::Standard(StandardError::InvalidStructure { .. }) => "invalid_structure",
            ParseError::Records(RecordError::NoMedicationsFound) => "no_medications_found",
            ParseError::EmptyResult => "empty_result",
        }
    }
}

/// Configuration for one parse call.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ParseConfig {
    /// Knobs shared by every dialect decoder.
    pub decode: DecodeConfig,
    /// Clock-time table used when building notification plans.
    pub notifications: NotificationDefaults,
}

/// Per-medication reminder suggestion derived from a decoded bundle.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MedicationSchedule {
    /// Medication name, copied from the bundle entry.
    pub name: String,
    /// Suggested `"HH:MM"` times, ascending, deduplicated. Empty when the
    /// usage text carried no timing cue.
    pub times: Vec<String>,
    /// False when the medication reads as as-needed with no fixed daily
    /// schedule; the reminder surface should not pin clock times to it.
    pub schedule_bound: bool,
}

/// Parses one raw label payload into a medication bundle.
///
/// Classification picks the dialect, the matching decoder runs, and the
/// aggregator re-checks the non-empty guarantee before handing the bundle
/// back. Calling this twice on the same input with a pinned
/// [`DecodeConfig::fallback_date`] yields structurally equal output.
pub fn parse_label(raw: &str, cfg: &ParseConfig) -> Result<MedicationBundle, ParseError> {
    let span = info_span!("parse_label", len = raw.len());
    let _guard = span.enter();

    let tag = classify(raw);
    debug!(?tag, "dialect classified");

    let bundle = match tag {
        DialectTag::Unknown => return Err(ParseError::UnsupportedFormat),
        DialectTag::PipeStandard => decode_pipe(raw, &cfg.decode)?,
        DialectTag::BinaryStandard => decode_binary(raw, &cfg.decode),
        DialectTag::CsvRecordStream => decode_csv(raw, &cfg.decode)?,
    };

    if bundle.medications.is_empty() {
        return Err(ParseError::EmptyResult);
    }
    Ok(bundle)
}

/// Builds per-medication reminder suggestions from a decoded bundle.
///
/// Times come from the usage heuristics over each entry's free text; the
/// `defaults` table supplies the canonical clock times. These are hints
/// subject to user confirmation, not a transcription of the prescription.
///
/// An injected table that fails [`NotificationDefaults::validate`] is
/// replaced by the built-in defaults with a warning: plans are suggestions,
/// so a malformed table degrades softly instead of failing the call.
pub fn notification_plan(
    bundle: &MedicationBundle,
    defaults: &NotificationDefaults,
) -> Vec<MedicationSchedule> {
    let fallback;
    let table = match defaults.validate() {
        Ok(()) => defaults,
        Err(err) => {
            warn!(%err, "invalid notification table, using built-in defaults");
            fallback = NotificationDefaults::default();
            &fallback
        }
    };
    bundle
        .medications
        .iter()
        .map(|med| MedicationSchedule {
            name: med.name.clone(),
            times: infer_notification_times(&med.usage_text, table),
            schedule_bound: has_frequency_limit(&med.usage_text),
        })
        .collect()
}
