//! Decoder for the comma-separated record-stream dialect.
//!
//! Non-standard labels carry a stream of comma-separated records, each
//! typed by its leading code (`201` medication, `301` usage, `311` remark,
//! plus `1`/`5`/`51` identity records). [`decode_csv`] segments the raw
//! payload, mines the header for a dispense date, then folds the records
//! into a [`MedicationBundle`](bundle::MedicationBundle).
//!
//! Malformed individual records are skipped with a diagnostic; the only
//! failure is a stream that yields zero usable medications.

mod error;
mod fold;
mod segment;

use std::time::Instant;

use bundle::{DecodeConfig, MedicationBundle};
use tracing::{debug, info, warn};

pub use crate::error::RecordError;
use crate::fold::{FoldState, RecordCode};

/// Decodes a comma-separated record stream into a bundle.
///
/// Deterministic and pure apart from the fallback date resolution in
/// `cfg`; calling it twice on the same input yields structurally equal
/// output when the fallback date is pinned.
pub fn decode_csv(raw: &str, cfg: &DecodeConfig) -> Result<MedicationBundle, RecordError> {
    let start = Instant::now();
    let records = segment::split_records(raw);
    debug!(records = records.len(), "record stream segmented");

    let mut header_date = None;
    if let Some(first) = records.first() {
        let code = RecordCode::from_field(first.split(',').next().unwrap_or(""));
        if !matches!(code, RecordCode::Medication | RecordCode::Usage) {
            header_date = segment::mine_header_date(first);
        }
    }

    let mut state = FoldState::default();
    for record in &records {
        state.apply(record);
    }
    state.flush();

    if state.medications.is_empty() {
        let elapsed_micros = start.elapsed().as_micros();
        warn!(
            records = records.len(),
            elapsed_micros, "decode_failure"
        );
        return Err(RecordError::NoMedicationsFound);
    }

    let prescribed_date = state
        .dispense_date
        .or(header_date)
        .unwrap_or_else(|| cfg.effective_fallback_date());

    let bundle = MedicationBundle {
        prescribed_date,
        hospital_name: state.hospital_name.unwrap_or_default(),
        patient_name: state.patient_name.unwrap_or_default(),
        medications: state.medications,
    };

    let elapsed_micros = start.elapsed().as_micros();
    info!(
        medications = bundle.medication_count(),
        elapsed_micros, "decode_success"
    );
    Ok(bundle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn cfg() -> DecodeConfig {
        DecodeConfig {
            fallback_date: NaiveDate::from_ymd_opt(2024, 9, 12),
        }
    }

    #[test]
    fn newline_free_payload_decodes_end_to_end() {
        let raw = "32971101830,1,301,1,1 日 1 回(朝食) 2 錠毎,1,調剤,5,1,,1,\
                   201,2,ベタメタゾンリン酸塩錠10mg「タナベ」,2,錠,4,4980022F2042,1,\
                   301,2,,(朝 タ)食後,30,日分,1,1,,1";
        let bundle = decode_csv(raw, &cfg()).expect("decode");
        // The leading usage record has no open medication and is skipped.
        assert_eq!(bundle.medication_count(), 1);
        let med = &bundle.medications[0];
        assert_eq!(med.name, "ベタメタゾンリン酸塩錠10mg「タナベ」");
        assert_eq!(med.quantity.as_deref(), Some("2"));
        assert_eq!(med.unit.as_deref(), Some("錠"));
        assert_eq!(med.days.as_deref(), Some("30"));
        assert!(med.usage_text.contains("(朝 タ)食後"));
        // Header digits mine as the dispense date.
        assert_eq!(bundle.prescribed_date, "3297-11-01");
    }

    #[test]
    fn newline_framed_payload_decodes_each_line() {
        let raw = "329711Q1030,1\r\n\
                   301,1,１日１回(眠前)２噴霧,1,調剤,5,1,,1\r\n\
                   201,2,ベポタスチンベシル酸塩錠１０ｍｇ「タナベ」,2,錠,4,4490022F2042,1\r\n\
                   301,2,(朝･夕)食後,30,日分,1,1,,1";
        let bundle = decode_csv(raw, &cfg()).expect("decode");
        assert_eq!(bundle.medication_count(), 1);
        let med = &bundle.medications[0];
        assert_eq!(med.name, "ベポタスチンベシル酸塩錠１０ｍｇ「タナベ」");
        assert_eq!(med.usage_text, "(朝･夕)食後");
        // Header has no 8-digit run, so the pinned fallback date holds.
        assert_eq!(bundle.prescribed_date, "2024-09-12");
    }

    #[test]
    fn stream_without_medications_is_a_typed_failure() {
        let err = decode_csv("foo,bar,baz", &cfg()).unwrap_err();
        assert_eq!(err, RecordError::NoMedicationsFound);
    }

    #[test]
    fn dispense_date_record_overrides_header_date() {
        let raw = "20200101XYZ,1\r\n5,20240301\r\n201,1,DrugA,10,tablets";
        let bundle = decode_csv(raw, &cfg()).expect("decode");
        assert_eq!(bundle.prescribed_date, "2024-03-01");
    }

    #[test]
    fn identity_records_populate_bundle_headers() {
        let raw = "1,山田太郎\r\n51,中央病院\r\n201,1,DrugA,10,tablets";
        let bundle = decode_csv(raw, &cfg()).expect("decode");
        assert_eq!(bundle.patient_name, "山田太郎");
        assert_eq!(bundle.hospital_name, "中央病院");
        assert!(bundle.has_patient_name());
    }
}
