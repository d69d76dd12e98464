//! Parsing is a pure function of the payload and the configuration: same
//! input, same output, no hidden clocks or counters. The only ambient
//! value is the fallback date, which these tests pin.

use chrono::NaiveDate;
use medqr::{decode_csv, parse_label, DecodeConfig, ParseConfig};

fn pinned() -> ParseConfig {
    ParseConfig {
        decode: DecodeConfig {
            fallback_date: NaiveDate::from_ymd_opt(2024, 9, 12),
        },
        ..ParseConfig::default()
    }
}

#[test]
fn repeated_parses_are_structurally_equal() {
    let raw = "201,1,DrugA,10,tablets\n301,1,,1日3回毎食後,7日分";
    let first = parse_label(raw, &pinned()).expect("first parse");
    let second = parse_label(raw, &pinned()).expect("second parse");
    assert_eq!(first, second);
}

#[test]
fn record_fold_pairs_medication_with_usage() {
    let raw = "201,1,DrugA,10,tablets\n301,1,,1日3回毎食後,7日分";
    let bundle = decode_csv(raw, &pinned().decode).expect("decode");
    assert_eq!(bundle.medication_count(), 1);

    let med = &bundle.medications[0];
    assert_eq!(med.name, "DrugA");
    assert_eq!(med.quantity.as_deref(), Some("10"));
    assert_eq!(med.unit.as_deref(), Some("tablets"));
    assert_eq!(med.days.as_deref(), Some("7"));
    assert!(med.usage_text.contains("1日3回毎食後"));
    assert_eq!(med.estimated_count, Some(3));
}

#[test]
fn usage_before_its_medication_does_not_leak_forward() {
    // A 301 ahead of any 201 is tolerated but never attached to a later,
    // unrelated medication; the count still equals the number of 201s.
    let raw = "301,1,,1日9回,99日分\n201,1,DrugA,10,tablets\n301,1,,1日2回 朝夕,7日分";
    let bundle = decode_csv(raw, &pinned().decode).expect("decode");
    assert_eq!(bundle.medication_count(), 1);

    let med = &bundle.medications[0];
    assert!(!med.usage_text.contains("1日9回"));
    assert_eq!(med.days.as_deref(), Some("7"));
    assert_eq!(med.estimated_count, Some(2));
}

#[test]
fn nameless_medication_never_flushes() {
    let raw = "201,1,,10,tablets\n301,1,,1日2回,7日分\n201,2,DrugB,5,mL";
    let bundle = decode_csv(raw, &pinned().decode).expect("decode");
    assert_eq!(bundle.medication_count(), 1);
    assert_eq!(bundle.medications[0].name, "DrugB");
}

#[test]
fn pinned_fallback_date_flows_to_the_bundle() {
    let raw = "201,1,DrugA,10,tablets";
    let bundle = decode_csv(raw, &pinned().decode).expect("decode");
    assert_eq!(bundle.prescribed_date, "2024-09-12");
}
