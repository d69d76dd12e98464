//! Binary-form decoder: 0x1C-framed records with 0x1D-separated fields.
//!
//! This path is intentionally lower-fidelity than the CSV decoder. Sections
//! are scanned for loose lexical cues; a section carrying a drug marker
//! token contributes one medication entry whose usage text is the section's
//! printable content, so the heuristics engine can still mine whatever the
//! vendor put there.

use std::time::Instant;

use bundle::{DecodeConfig, MedicationBundle, ParsedMedication};
use tracing::{debug, info};

use crate::iso_from_compact_date;

/// Record separator between sections.
const RECORD_SEPARATOR: char = '\u{1c}';
/// Field separator inside one section.
const FIELD_SEPARATOR: char = '\u{1d}';

/// Section code of the framing header record (date, institution).
const HEADER_CODE: &str = "100";
/// Section code of the patient record.
const PATIENT_CODE: &str = "110";

/// Tokens that mark a section as carrying a medication entry.
const DRUG_MARKERS: &[&str] = &["薬", "Drug"];

/// Name synthesized when no section carries a recognizable drug marker.
pub const BINARY_PLACEHOLDER_NAME: &str = "JAHISバイナリ薬剤（内容未認識）";

/// Decodes the binary form of the standard dialect. Infallible: the
/// presence of standard framing is itself informative, so a payload with no
/// recognizable content still yields a single diagnostic placeholder entry
/// rather than a failure.
pub fn decode_binary(raw: &str, cfg: &DecodeConfig) -> MedicationBundle {
    let start = Instant::now();

    let mut prescribed_date = cfg.effective_fallback_date();
    let mut hospital_name = String::new();
    let mut patient_name = String::new();
    let mut medications: Vec<ParsedMedication> = Vec::new();

    for section in raw.split(RECORD_SEPARATOR) {
        if section.is_empty() {
            continue;
        }
        let fields: Vec<&str> = section.split(FIELD_SEPARATOR).collect();
        match fields[0] {
            HEADER_CODE => {
                if let Some(name) = fields.get(3).filter(|v| !v.is_empty()) {
                    hospital_name = (*name).to_string();
                }
                if let Some(date) = fields.get(5).and_then(|v| iso_from_compact_date(v)) {
                    prescribed_date = date;
                }
            }
            PATIENT_CODE => {
                if let Some(name) = fields.get(2).filter(|v| !v.is_empty()) {
                    patient_name = (*name).to_string();
                }
            }
            _ => {
                if DRUG_MARKERS.iter().any(|marker| section.contains(marker)) {
                    medications.push(medication_from_section(section, medications.len() + 1));
                } else {
                    debug!(
                        section_len = section.len(),
                        "section without drug marker skipped"
                    );
                }
            }
        }
    }

    if medications.is_empty() {
        medications.push(ParsedMedication::named(BINARY_PLACEHOLDER_NAME));
    }

    let elapsed_micros = start.elapsed().as_micros();
    info!(
        medications = medications.len(),
        elapsed_micros, "decode_success"
    );

    MedicationBundle {
        prescribed_date,
        hospital_name,
        patient_name,
        medications,
    }
}

/// Builds one low-fidelity entry from a drug-marked section. The printable
/// section text becomes the usage text; field semantics beyond the marker
/// are not guaranteed recoverable on this path.
fn medication_from_section(section: &str, ordinal: usize) -> ParsedMedication {
    let printable: String = section
        .chars()
        .map(|ch| if ch.is_control() { ' ' } else { ch })
        .collect();
    let usage_text = printable.trim().to_string();

    let mut med = ParsedMedication::named(format!("JAHISバイナリ薬剤 {ordinal}"));
    med.estimated_count = usage::estimate_count(&usage_text);
    med.estimated_dose = usage::estimate_dose(&usage_text);
    med.usage_text = usage_text;
    med
}
