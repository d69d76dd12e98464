//! Dialect classification for scanned medication label payloads.
//!
//! A pharmacy label QR symbol carries one of several mutually incompatible
//! text encodings, and in the wild almost none of them carry a reliable
//! content-type tag. This crate inspects the raw payload and returns a
//! [`DialectTag`] using an ordered rule cascade over the few lexical cues
//! that do exist.
//!
//! The cascade order is load-bearing, not incidental. The comma rule for
//! [`DialectTag::CsvRecordStream`] is deliberately the broadest and weakest
//! signal available (the CSV dialect has no tag at all), so it must never
//! run before the stronger textual and control-character checks — a
//! standard-dialect payload that happens to contain a comma would otherwise
//! be misclassified. Any change to classification accuracy is a versioned
//! behavior change, not a silent fix.
//!
//! # Example
//!
//! ```rust
//! use dialect::{classify, DialectTag};
//!
//! assert_eq!(classify("JAHIS|1|eyJ0ZXN0In0="), DialectTag::PipeStandard);
//! assert_eq!(classify("201,1,テスト錠,10,錠"), DialectTag::CsvRecordStream);
//! assert_eq!(classify("ただの文字列です"), DialectTag::Unknown);
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Record separator used by the binary framing of the standard dialect.
const RECORD_SEPARATOR: char = '\u{1c}';
/// Field separator used by the binary framing of the standard dialect.
const FIELD_SEPARATOR: char = '\u{1d}';
/// Leading token of the pipe-delimited standard dialect.
const STANDARD_TOKEN: &str = "JAHIS";

/// The encoding dialect of one raw payload.
///
/// Exactly one tag is computed per payload and never re-derived
/// mid-pipeline. `Unknown` is a valid, frequent result, not an error.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum DialectTag {
    /// Pipe-delimited national-standard variant (`JAHIS|1|...`).
    PipeStandard,
    /// Control-character-delimited binary variant of the standard.
    BinaryStandard,
    /// Ad-hoc comma-separated record stream used by dispensing-system
    /// vendors. The dominant dialect by volume.
    CsvRecordStream,
    /// No rule matched. No decoder is attempted for this tag.
    Unknown,
}

impl DialectTag {
    /// Returns true for either framing of the national-standard dialect.
    pub fn is_standard(self) -> bool {
        matches!(self, DialectTag::PipeStandard | DialectTag::BinaryStandard)
    }
}

/// Classifies a raw payload into its dialect.
///
/// Pure and total: never fails, always returns a tag. The empty string is
/// valid input and yields [`DialectTag::Unknown`].
///
/// Rules, first match wins:
///
/// 1. trimmed payload starts with `JAHIS|1|`, or starts with `JAHIS|`, or
///    contains `JAHIS` anywhere → `PipeStandard`
/// 2. payload contains both 0x1C and 0x1D → `BinaryStandard`
/// 3. payload contains a comma → `CsvRecordStream`
/// 4. otherwise → `Unknown`
pub fn classify(raw: &str) -> DialectTag {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return DialectTag::Unknown;
    }

    // Rule 1: the standard token anywhere outranks everything else. Real
    // pipe payloads also contain commas inside the embedded block.
    if trimmed.starts_with("JAHIS|1|")
        || trimmed.starts_with("JAHIS|")
        || trimmed.contains(STANDARD_TOKEN)
    {
        return DialectTag::PipeStandard;
    }

    // Rule 2: binary framing requires both separators; 0x1C alone shows up
    // in corrupted scans of other dialects.
    if trimmed.contains(RECORD_SEPARATOR) && trimmed.contains(FIELD_SEPARATOR) {
        return DialectTag::BinaryStandard;
    }

    // Rule 3: comma presence is the only signal the CSV dialect has.
    if trimmed.contains(',') {
        return DialectTag::CsvRecordStream;
    }

    debug!(
        len = trimmed.len(),
        head = trimmed.chars().take(16).collect::<String>().as_str(),
        "no dialect rule matched"
    );
    DialectTag::Unknown
}

/// Lexical census of one payload, for host debug tooling.
///
/// Reports the cues [`classify`] looks at without deciding anything itself;
/// the resulting tag is included for convenience.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClassificationCues {
    /// Resulting tag from [`classify`] on the same input.
    pub tag: DialectTag,
    /// Payload length in bytes after trimming.
    pub trimmed_len: usize,
    /// Number of commas in the payload.
    pub comma_count: usize,
    /// Whether the `JAHIS` token appears anywhere.
    pub has_standard_token: bool,
    /// Occurrences of each framing control character 0x1C..=0x1F.
    pub control_counts: [usize; 4],
}

/// Collects the lexical cues of one payload.
pub fn classification_cues(raw: &str) -> ClassificationCues {
    let trimmed = raw.trim();
    let mut control_counts = [0usize; 4];
    let mut comma_count = 0usize;
    for ch in trimmed.chars() {
        match ch {
            ',' => comma_count += 1,
            '\u{1c}'..='\u{1f}' => control_counts[ch as usize - 0x1c] += 1,
            _ => {}
        }
    }
    ClassificationCues {
        tag: classify(raw),
        trimmed_len: trimmed.len(),
        comma_count,
        has_standard_token: trimmed.contains(STANDARD_TOKEN),
        control_counts,
    }
}
