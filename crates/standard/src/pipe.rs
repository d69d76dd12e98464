//! Pipe-form decoder: `JAHIS|1|<further-encoded block>`.

use std::time::Instant;

use bundle::{DecodeConfig, MedicationBundle, ParsedMedication};
use tracing::{debug, info, warn};

use crate::error::StandardError;

/// Name given to the single placeholder entry on this path. Explicitly
/// marked so downstream surfaces can tell it apart from real drug names.
pub const PIPE_PLACEHOLDER_NAME: &str = "JAHIS収載薬剤（内包ブロック未展開）";

/// Usage text attached to the placeholder entry.
const PIPE_PLACEHOLDER_USAGE: &str = "用法・用量は内包ブロック内（未展開）";

/// Decodes the pipe form of the standard dialect.
///
/// The payload is split on `|`: field 0 is the literal dialect tag, field 2
/// (when present) is an embedded, further-encoded data block. Expanding
/// that block is outside this core's contract, so the decoder produces a
/// well-formed bundle carrying one explicitly marked placeholder medication.
/// Fewer than three fields is the one structural failure on this path.
pub fn decode_pipe(
    raw: &str,
    cfg: &DecodeConfig,
) -> Result<MedicationBundle, StandardError> {
    let start = Instant::now();
    let trimmed = raw.trim();
    let fields: Vec<&str> = trimmed.split('|').collect();
    if fields.len() < 3 {
        let elapsed_micros = start.elapsed().as_micros();
        warn!(found = fields.len(), elapsed_micros, "decode_failure");
        return Err(StandardError::InvalidStructure {
            found: fields.len(),
        });
    }

    // The block is opaque to us; its size is still useful diagnostics.
    debug!(
        tag = fields[0],
        version = fields[1],
        block_len = fields[2].len(),
        "embedded block left unexpanded"
    );

    let mut placeholder = ParsedMedication::named(PIPE_PLACEHOLDER_NAME);
    placeholder.usage_text = PIPE_PLACEHOLDER_USAGE.to_string();
    placeholder.estimated_count = usage::estimate_count(&placeholder.usage_text);
    placeholder.estimated_dose = usage::estimate_dose(&placeholder.usage_text);

    let bundle = MedicationBundle {
        prescribed_date: cfg.effective_fallback_date(),
        hospital_name: String::new(),
        patient_name: String::new(),
        medications: vec![placeholder],
    };

    let elapsed_micros = start.elapsed().as_micros();
    info!(medications = 1, elapsed_micros, "decode_success");
    Ok(bundle)
}
