//! Decoders for the national-standard (JAHIS) label dialect.
//!
//! Two physical framings share this dialect:
//!
//! - the **pipe form** (`JAHIS|1|<block>`), where the interesting data sits
//!   in a further-encoded block whose expansion is outside this core's
//!   responsibility — [`decode_pipe`] still produces a well-formed bundle
//!   with an explicitly marked placeholder entry so the pipeline never
//!   dead-ends on this path
//! - the **binary form**, framed by the 0x1C record and 0x1D field
//!   separators — [`decode_binary`] extracts what the loose lexical cues
//!   allow and always returns at least one medication entry, synthesizing a
//!   diagnostic placeholder when nothing is recognized, since the presence
//!   of standard framing is itself informative
//!
//! Both decoders are pure functions of their input string and the shared
//! [`DecodeConfig`](bundle::DecodeConfig); neither holds state across calls.

mod binary;
mod error;
mod pipe;

pub use crate::binary::decode_binary;
pub use crate::error::StandardError;
pub use crate::pipe::decode_pipe;

/// Converts an exactly-8-digit `YYYYMMDD` run into `YYYY-MM-DD`.
pub(crate) fn iso_from_compact_date(digits: &str) -> Option<String> {
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

    #[test]
    fn compact_date_conversion() {
        assert_eq!(
            iso_from_compact_date("20240912").as_deref(),
            Some("2024-09-12")
        );
        assert_eq!(iso_from_compact_date("2024091"), None);
        assert_eq!(iso_from_compact_date("2024O912"), None);
    }
}
