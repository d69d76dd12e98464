//! The record fold: a pure left-fold over the record sequence.
//!
//! The accumulator pairs the output list with an optional in-progress
//! medication. Each record type maps to one state transition, which keeps
//! the flush-on-`201`-or-end rule independently testable.

use bundle::ParsedMedication;
use tracing::{debug, warn};

/// Record type codes observed on dispensing labels. Anything else is
/// carried through the fold untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RecordCode {
    /// `1`: patient identity.
    Patient,
    /// `5`: dispense date, 8-digit `YYYYMMDD`.
    DispenseDate,
    /// `51`: institution name.
    Institution,
    /// `201`: medication identity, starts a new medication.
    Medication,
    /// `301`: usage/dosage for the most recently started medication.
    Usage,
    /// `311`: free-text remark, appended to the current usage text.
    Remark,
    /// Unrecognized code, skipped.
    Other,
}

impl RecordCode {
    pub(crate) fn from_field(field: &str) -> Self {
        match field.trim() {
            "1" => Self::Patient,
            "5" => Self::DispenseDate,
            "51" => Self::Institution,
            "201" => Self::Medication,
            "301" => Self::Usage,
            "311" => Self::Remark,
            _ => Self::Other,
        }
    }
}

/// The medication currently being built. Flushed on the next `201` record
/// or at end of stream, and only if a name was recovered.
#[derive(Debug, Default)]
struct WorkingMedication {
    name: String,
    quantity: Option<String>,
    unit: Option<String>,
    days: Option<String>,
    usage_parts: Vec<String>,
}

impl WorkingMedication {
    fn push_usage(&mut self, text: &str) {
        if !text.is_empty() {
            self.usage_parts.push(text.to_string());
        }
    }

    /// Converts the accumulator into a final entry, running the usage
    /// heuristics over the joined text. Nameless accumulators yield `None`.
    fn finish(self) -> Option<ParsedMedication> {
        if self.name.is_empty() {
            debug!("discarding nameless medication accumulator");
            return None;
        }
        let usage_text = self.usage_parts.join("\n");
        Some(ParsedMedication {
            estimated_count: usage::estimate_count(&usage_text),
            estimated_dose: usage::estimate_dose(&usage_text),
            name: self.name,
            usage_text,
            quantity: self.quantity,
            unit: self.unit,
            days: self.days,
        })
    }
}

/// Fold accumulator over the record sequence.
#[derive(Debug, Default)]
pub(crate) struct FoldState {
    pub(crate) medications: Vec<ParsedMedication>,
    pub(crate) patient_name: Option<String>,
    pub(crate) hospital_name: Option<String>,
    pub(crate) dispense_date: Option<String>,
    current: Option<WorkingMedication>,
}

impl FoldState {
    /// Applies one record to the state. Malformed individual records are
    /// skipped with a diagnostic, never fatal.
    pub(crate) fn apply(&mut self, record: &str) {
        let trimmed = record.trim();
        if trimmed.is_empty() {
            return;
        }
        let fields: Vec<&str> = trimmed.split(',').collect();
        match RecordCode::from_field(fields[0]) {
            RecordCode::Medication => self.open_medication(&fields),
            RecordCode::Usage => self.append_usage(&fields),
            RecordCode::Remark => self.append_remark(&fields),
            RecordCode::Patient => {
                self.patient_name = non_empty_field(&fields, 1);
            }
            RecordCode::DispenseDate => {
                if let Some(date) = fields.get(1).and_then(|v| compact_to_iso(v.trim())) {
                    self.dispense_date = Some(date);
                }
            }
            RecordCode::Institution => {
                self.hospital_name = non_empty_field(&fields, 1);
            }
            RecordCode::Other => {
                debug!(code = fields[0], "unrecognized record code skipped");
            }
        }
    }

    /// `201`: flush the open accumulator, then start a new one.
    fn open_medication(&mut self, fields: &[&str]) {
        self.flush();
        let mut med = WorkingMedication {
            name: fields.get(2).map(|v| v.trim().to_string()).unwrap_or_default(),
            ..WorkingMedication::default()
        };
        med.quantity = non_empty_field(fields, 3);
        med.unit = non_empty_field(fields, 4);
        self.current = Some(med);
    }

    /// `301`: usage text and duration for the open accumulator.
    ///
    /// Two field layouts occur in the wild: usage at field 2 with duration
    /// at field 3, and (when field 2 is blank) usage shifted to field 3
    /// with duration at field 4. An empty field 2 selects the shifted
    /// layout.
    fn append_usage(&mut self, fields: &[&str]) {
        let Some(current) = self.current.as_mut() else {
            warn!("usage record with no open medication skipped");
            return;
        };
        let (usage_index, days_index) = match non_empty_field(fields, 2) {
            Some(_) => (2, 3),
            None => (3, 4),
        };
        if let Some(text) = fields.get(usage_index) {
            current.push_usage(text.trim());
        }
        if let Some(days) = fields.get(days_index).and_then(|v| digit_run(v)) {
            current.days = Some(days);
        }
    }

    /// `311`: remark, appended as a parenthesized usage contribution.
    fn append_remark(&mut self, fields: &[&str]) {
        let Some(current) = self.current.as_mut() else {
            warn!("remark record with no open medication skipped");
            return;
        };
        if let Some(text) = non_empty_field(fields, 2) {
            current.push_usage(&format!("({text})"));
        }
    }

    /// Flushes the open accumulator into the output list. Nameless
    /// accumulators are dropped here.
    pub(crate) fn flush(&mut self) {
        if let Some(med) = self.current.take().and_then(WorkingMedication::finish) {
            self.medications.push(med);
        }
    }
}

fn non_empty_field(fields: &[&str], index: usize) -> Option<String> {
    fields
        .get(index)
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// First run of ASCII digits in a field, as a string. Strips unit words
/// such as `日分` around a duration.
fn digit_run(field: &str) -> Option<String> {
    let digits: String = field
        .chars()
        .skip_while(|ch| !ch.is_ascii_digit())
        .take_while(char::is_ascii_digit)
        .collect();
    (!digits.is_empty()).then_some(digits)
}

/// `YYYYMMDD` (exactly 8 digits) to `YYYY-MM-DD`.
fn compact_to_iso(digits: &str) -> Option<String> {
    if digits.len() != 8 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(format!(
        "{}-{}-{}",
        &digits[0..4],
        &digits[4..6],
        &digits[6..8]
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fold(records: &[&str]) -> FoldState {
        let mut state = FoldState::default();
        for record in records {
            state.apply(record);
        }
        state.flush();
        state
    }

    #[test]
    fn medication_and_usage_pair_into_one_entry() {
        let state = fold(&["201,1,DrugA,10,tablets", "301,1,,1日3回毎食後,7日分"]);
        assert_eq!(state.medications.len(), 1);
        let med = &state.medications[0];
        assert_eq!(med.name, "DrugA");
        assert_eq!(med.quantity.as_deref(), Some("10"));
        assert_eq!(med.unit.as_deref(), Some("tablets"));
        assert_eq!(med.days.as_deref(), Some("7"));
        assert!(med.usage_text.contains("1日3回毎食後"));
        assert_eq!(med.estimated_count, Some(3));
    }

    #[test]
    fn usage_at_field_two_uses_field_three_for_days() {
        let state = fold(&["201,1,DrugA,2,錠", "301,1,1日1回(朝食)2錠毎,1,調剤"]);
        let med = &state.medications[0];
        assert_eq!(med.usage_text, "1日1回(朝食)2錠毎");
        assert_eq!(med.days.as_deref(), Some("1"));
    }

    #[test]
    fn usage_before_any_medication_is_skipped() {
        let state = fold(&["301,1,,食後,7日分", "201,1,DrugA,10,tablets"]);
        assert_eq!(state.medications.len(), 1);
        assert!(!state.medications[0].has_usage_text());
    }

    #[test]
    fn nameless_medication_is_never_emitted() {
        let state = fold(&["201,1,,10,tablets", "301,1,,1日2回,7日分"]);
        assert!(state.medications.is_empty());
    }

    #[test]
    fn remark_joins_usage_text_in_parentheses() {
        let state = fold(&[
            "201,1,DrugA,10,tablets",
            "301,1,,1日2回 朝夕食後,7日分",
            "311,1,冷所保存",
        ]);
        let med = &state.medications[0];
        assert_eq!(med.usage_text, "1日2回 朝夕食後\n(冷所保存)");
    }

    #[test]
    fn identity_records_fill_bundle_headers() {
        let state = fold(&[
            "1,山田太郎",
            "5,20240912",
            "51,中央病院",
            "201,1,DrugA,10,tablets",
        ]);
        assert_eq!(state.patient_name.as_deref(), Some("山田太郎"));
        assert_eq!(state.dispense_date.as_deref(), Some("2024-09-12"));
        assert_eq!(state.hospital_name.as_deref(), Some("中央病院"));
    }

    #[test]
    fn consecutive_medications_each_flush() {
        let state = fold(&[
            "201,1,DrugA,10,tablets",
            "301,1,,1日3回,7日分",
            "201,2,DrugB,5,mL",
            "301,2,,1日1回 就寝前,14日分",
        ]);
        assert_eq!(state.medications.len(), 2);
        assert_eq!(state.medications[0].name, "DrugA");
        assert_eq!(state.medications[1].name, "DrugB");
        assert_eq!(state.medications[1].days.as_deref(), Some("14"));
    }
}
