//! Administrations-per-day and dose-per-administration estimation.

use tracing::trace;

use crate::keywords;
use crate::pattern;

/// Estimates how many times per day a medication is taken.
///
/// Checked in strict priority order; later rules are deliberately weaker
/// fallbacks and must not shadow earlier, more specific matches:
///
/// 1. explicit `1日N回` pattern → N
/// 2. an "every meal" keyword → 3
/// 3. morning + noon + evening/night keywords → 3
/// 4. morning + evening/night keywords only → 2
/// 5. a single standalone timing keyword (就寝前, 起床時, 食間, …) with no
///    other timing keyword present → 1
/// 6. a generic `N回` anywhere → N
/// 7. the first bare digit run → that number
/// 8. `None` — no reliable estimate
///
/// # Examples
///
/// ```rust
/// use usage::estimate_count;
///
/// assert_eq!(estimate_count("1日3回毎食後"), Some(3));
/// // Rule 1 outranks the meal keyword.
/// assert_eq!(estimate_count("1日2回 毎食後のうち朝夕"), Some(2));
/// assert_eq!(estimate_count("就寝前"), Some(1));
/// assert_eq!(estimate_count("指示どおり"), None);
/// ```
pub fn estimate_count(usage_text: &str) -> Option<u32> {
    let text = pattern::normalize_usage_text(usage_text);
    let chars: Vec<char> = text.chars().collect();

    if let Some(n) = pattern::daily_count(&chars) {
        trace!(count = n, rule = "daily_pattern", "estimated count");
        return Some(n);
    }
    if keywords::mentions_every_meal(&text) {
        return Some(3);
    }

    let morning = keywords::mentions_morning(&text);
    let noon = keywords::mentions_noon(&text);
    let evening = keywords::mentions_evening(&text);
    if morning && noon && evening {
        return Some(3);
    }
    if morning && evening {
        return Some(2);
    }

    if standalone_once(&text) {
        return Some(1);
    }
    if let Some(n) = pattern::generic_count(&chars) {
        trace!(count = n, rule = "generic_count", "estimated count");
        return Some(n);
    }
    pattern::first_digit_run(&chars)
}

/// True when exactly one standalone once-a-day keyword appears and no other
/// timing keyword accompanies it.
fn standalone_once(text: &str) -> bool {
    let mut matched = None;
    for keyword in keywords::STANDALONE_ONCE {
        if text.contains(keyword) {
            if matched.is_some() {
                return false;
            }
            matched = Some(*keyword);
        }
    }
    let Some(keyword) = matched else {
        return false;
    };
    // 起床時 itself contains the morning marker 起床, so the co-occurrence
    // check must run on the text with the matched keyword removed.
    let rest = text.replace(keyword, "");
    !keywords::mentions_every_meal(&rest)
        && !keywords::mentions_morning(&rest)
        && !keywords::mentions_noon(&rest)
        && !keywords::mentions_evening(&rest)
}

/// Estimates the dose taken per administration.
///
/// A single pattern: `1回N`, optionally with a decimal fraction
/// (`1回0.5錠`) → N. Anything else is `None`.
///
/// ```rust
/// use usage::estimate_dose;
///
/// assert_eq!(estimate_dose("1回2錠を1日3回"), Some(2.0));
/// assert_eq!(estimate_dose("毎食後"), None);
/// ```
pub fn estimate_dose(usage_text: &str) -> Option<f64> {
    let text = pattern::normalize_usage_text(usage_text);
    let chars: Vec<char> = text.chars().collect();
    pattern::per_dose(&chars)
}
