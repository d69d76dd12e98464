//! Failure taxonomy coverage: every parse failure must come back as a
//! typed value with a stable machine-readable code.

use medqr::{parse_label, ParseConfig, ParseError, RecordError, StandardError};

fn cfg() -> ParseConfig {
    ParseConfig::default()
}

#[test]
fn empty_payload_is_unsupported() {
    let err = parse_label("", &cfg()).unwrap_err();
    assert_eq!(err, ParseError::UnsupportedFormat);
}

#[test]
fn whitespace_only_payload_is_unsupported() {
    let err = parse_label("   \r\n  ", &cfg()).unwrap_err();
    assert_eq!(err, ParseError::UnsupportedFormat);
}

#[test]
fn plain_text_without_cues_is_unsupported() {
    let err = parse_label("ただの文字列です", &cfg()).unwrap_err();
    assert_eq!(err, ParseError::UnsupportedFormat);
    assert_eq!(err.code(), "unsupported_format");
}

#[test]
fn truncated_pipe_payload_is_a_structural_failure() {
    let err = parse_label("JAHIS|1", &cfg()).unwrap_err();
    assert_eq!(
        err,
        ParseError::Standard(StandardError::InvalidStructure { found: 2 })
    );
    assert_eq!(err.code(), "invalid_structure");
}

#[test]
fn comma_payload_without_medication_records_fails_typed() {
    let err = parse_label("foo,bar,baz,qux", &cfg()).unwrap_err();
    assert_eq!(err, ParseError::Records(RecordError::NoMedicationsFound));
    assert_eq!(err.code(), "no_medications_found");
}

#[test]
fn nameless_medication_records_count_as_none_found() {
    // A 201 with an empty name field must never produce an entry, so a
    // stream of only nameless records fails the same way.
    let err = parse_label("201,1,,10,tablets\n301,1,,1日2回,7日分", &cfg()).unwrap_err();
    assert_eq!(err, ParseError::Records(RecordError::NoMedicationsFound));
}

#[test]
fn malformed_usage_records_do_not_abort_the_parse() {
    // Short, trailing-comma, and out-of-place records are skipped with a
    // diagnostic; the valid medication still comes through.
    let raw = "301,\n201,1,DrugA,10,tablets\n301\n311,1,\n999,junk";
    let bundle = parse_label(raw, &cfg()).expect("parse");
    assert_eq!(bundle.medication_count(), 1);
    assert_eq!(bundle.medications[0].name, "DrugA");
}

#[test]
fn error_display_is_human_readable() {
    assert_eq!(
        ParseError::UnsupportedFormat.to_string(),
        "unsupported payload format"
    );
    let structural = ParseError::Standard(StandardError::InvalidStructure { found: 1 });
    assert!(structural.to_string().contains("found 1"));
}
