//! Character-level pattern scanning over normalized usage text.
//!
//! Vendors print the same instruction in half-width, full-width, and
//! space-riddled variants (`1日3回`, `１日３回`, `1 日 3 回`). Everything in
//! this module therefore works on NFKC-normalized text and tolerates ASCII
//! whitespace between pattern elements.

use unicode_normalization::UnicodeNormalization;

/// NFKC-normalizes usage text so full-width digits and latin letters match
/// the same patterns as their ASCII forms.
///
/// ```rust
/// use usage::normalize_usage_text;
///
/// assert_eq!(normalize_usage_text("１日３回"), "1日3回");
/// ```
pub fn normalize_usage_text(text: &str) -> String {
    text.nfkc().collect()
}

/// Scans for the explicit daily-frequency pattern `1日N回`, whitespace
/// tolerated between elements. Returns `N`.
///
/// The leading `1` must not be part of a larger number, so `21日分` and
/// `31日` never match.
pub(crate) fn daily_count(chars: &[char]) -> Option<u32> {
    for (i, &ch) in chars.iter().enumerate() {
        if ch != '日' {
            continue;
        }
        let Some(one) = prev_non_space(chars, i) else {
            continue;
        };
        if chars[one] != '1' || is_digit_at(chars, one.checked_sub(1)) {
            continue;
        }
        let after = next_non_space(chars, i + 1);
        let Some((count, end)) = digit_run(chars, after) else {
            continue;
        };
        let after_count = next_non_space(chars, end);
        if chars.get(after_count) == Some(&'回') {
            return count.parse().ok();
        }
    }
    None
}

/// Scans for a generic `N回` occurrence and returns the first `N`.
pub(crate) fn generic_count(chars: &[char]) -> Option<u32> {
    for (i, &ch) in chars.iter().enumerate() {
        if ch != '回' {
            continue;
        }
        let Some(last_digit) = prev_non_space(chars, i) else {
            continue;
        };
        if !chars[last_digit].is_ascii_digit() {
            continue;
        }
        let mut start = last_digit;
        while start > 0 && chars[start - 1].is_ascii_digit() {
            start -= 1;
        }
        let run: String = chars[start..=last_digit].iter().collect();
        if let Ok(n) = run.parse() {
            return Some(n);
        }
    }
    None
}

/// Returns the first bare digit run that parses as a number. The weakest
/// fallback of the frequency ladder.
pub(crate) fn first_digit_run(chars: &[char]) -> Option<u32> {
    let mut i = 0;
    while i < chars.len() {
        if chars[i].is_ascii_digit() {
            let (run, end) = digit_run(chars, i)?;
            if let Ok(n) = run.parse() {
                return Some(n);
            }
            i = end;
        } else {
            i += 1;
        }
    }
    None
}

/// Scans for the per-administration dose pattern `1回N`, where `N` may carry
/// a decimal fraction (`1回0.5錠`). Returns `N`.
pub(crate) fn per_dose(chars: &[char]) -> Option<f64> {
    for (i, &ch) in chars.iter().enumerate() {
        if ch != '回' {
            continue;
        }
        let Some(one) = prev_non_space(chars, i) else {
            continue;
        };
        if chars[one] != '1' || is_digit_at(chars, one.checked_sub(1)) {
            continue;
        }
        let after = next_non_space(chars, i + 1);
        let Some((mut number, end)) = digit_run(chars, after) else {
            continue;
        };
        if chars.get(end) == Some(&'.') {
            if let Some((frac, _)) = digit_run(chars, end + 1) {
                number.push('.');
                number.push_str(&frac);
            }
        }
        if let Ok(value) = number.parse() {
            return Some(value);
        }
    }
    None
}

/// Collects the maximal ASCII digit run starting at `start`, returning the
/// run and the index one past its end. `None` when `start` is not a digit.
fn digit_run(chars: &[char], start: usize) -> Option<(String, usize)> {
    let mut end = start;
    while chars.get(end).is_some_and(|c| c.is_ascii_digit()) {
        end += 1;
    }
    if end == start {
        return None;
    }
    Some((chars[start..end].iter().collect(), end))
}

fn prev_non_space(chars: &[char], before: usize) -> Option<usize> {
    chars[..before]
        .iter()
        .rposition(|c| !c.is_whitespace())
}

fn next_non_space(chars: &[char], from: usize) -> usize {
    let mut i = from;
    while chars.get(i).is_some_and(|c| c.is_whitespace()) {
        i += 1;
    }
    i
}

fn is_digit_at(chars: &[char], index: Option<usize>) -> bool {
    index.and_then(|i| chars.get(i)).is_some_and(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(text: &str) -> Vec<char> {
        normalize_usage_text(text).chars().collect()
    }

    #[test]
    fn daily_count_matches_compact_and_spaced_forms() {
        assert_eq!(daily_count(&chars("1日3回毎食後")), Some(3));
        assert_eq!(daily_count(&chars("1 日 1 回(朝食)")), Some(1));
        assert_eq!(daily_count(&chars("１日２回")), Some(2));
    }

    #[test]
    fn daily_count_rejects_duration_lookalikes() {
        // 21日 and 31日 end in 1 but are day counts, not frequencies.
        assert_eq!(daily_count(&chars("21日分 3回")), None);
        assert_eq!(daily_count(&chars("31日処方")), None);
    }

    #[test]
    fn generic_count_picks_first_numbered_occurrence() {
        assert_eq!(generic_count(&chars("3回まで")), Some(3));
        assert_eq!(generic_count(&chars("回数は指示どおり")), None);
    }

    #[test]
    fn first_digit_run_is_the_weakest_fallback() {
        assert_eq!(first_digit_run(&chars("用法 2 のとおり")), Some(2));
        assert_eq!(first_digit_run(&chars("指示どおり")), None);
    }

    #[test]
    fn per_dose_supports_decimal_fractions() {
        assert_eq!(per_dose(&chars("1回2錠")), Some(2.0));
        assert_eq!(per_dose(&chars("1回0.5錠")), Some(0.5));
        assert_eq!(per_dose(&chars("１回１包")), Some(1.0));
        assert_eq!(per_dose(&chars("1日3回毎食後")), None);
    }

    #[test]
    fn per_dose_rejects_larger_leading_numbers() {
        assert_eq!(per_dose(&chars("11回2錠")), None);
    }
}
