//! Record segmentation and header-record mining.
//!
//! Scanners do not agree on framing: some deliver the records on separate
//! lines, others strip the newlines entirely and hand over one long string.
//! Segmentation handles both without discarding a single character.

use tracing::debug;

/// Tokens that open a new record when the payload arrives newline-free.
const RECORD_OPENERS: [&str; 2] = ["201,", "301,"];

/// Splits a raw payload into records.
///
/// Newline sequences (`\r\n`, `\r`, `\n`) are the primary boundary. When
/// none are present, a boundary is inserted immediately before every
/// occurrence of `201,` or `301,` past position zero, so the header prefix
/// and every field survive intact.
pub(crate) fn split_records(raw: &str) -> Vec<&str> {
    let lines: Vec<&str> = raw
        .split(['\r', '\n'])
        .filter(|line| !line.trim().is_empty())
        .collect();
    if lines.len() > 1 {
        return lines;
    }

    debug!("no newline framing, splitting on record openers");
    let mut cuts: Vec<usize> = RECORD_OPENERS
        .iter()
        .flat_map(|opener| raw.match_indices(opener).map(|(i, _)| i))
        .filter(|&i| i > 0)
        .collect();
    cuts.sort_unstable();
    cuts.dedup();

    let mut records = Vec::with_capacity(cuts.len() + 1);
    let mut start = 0;
    for cut in cuts {
        if !raw[start..cut].trim().is_empty() {
            records.push(&raw[start..cut]);
        }
        start = cut;
    }
    if !raw[start..].trim().is_empty() {
        records.push(&raw[start..]);
    }
    records
}

/// Mines a dispense date out of a header record.
///
/// The header is a vendor-specific jumble; the one reliable cue is a run of
/// eight or more consecutive digits, whose first eight read as `YYYYMMDD`.
/// No run means no date, which the caller treats as a soft fallback to the
/// configured default rather than a failure.
pub(crate) fn mine_header_date(record: &str) -> Option<String> {
    let bytes = record.as_bytes();
    let mut start = 0;
    let mut len = 0;
    for (i, b) in bytes.iter().enumerate() {
        if b.is_ascii_digit() {
            if len == 0 {
                start = i;
            }
            len += 1;
            if len == 8 {
                let digits = &record[start..start + 8];
                return Some(format!(
                    "{}-{}-{}",
                    &digits[0..4],
                    &digits[4..6],
                    &digits[6..8]
                ));
            }
        } else {
            len = 0;
        }
    }
    None
}
