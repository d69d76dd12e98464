//! Notification time suggestion and as-needed detection.

use std::collections::BTreeSet;

use crate::config::NotificationDefaults;
use crate::keywords;
use crate::pattern;

/// Maps timing keywords in usage text to suggested notification clock times.
///
/// An "every meal" keyword maps to the morning, noon, and evening defaults;
/// the individual part-of-day keywords each map to one slot. The result is
/// deduplicated and sorted ascending by clock time. Empty text yields an
/// empty list.
///
/// This is a scheduling hint, not a transcription: the canonical default
/// time stands in for "sometime in that part of the day".
///
/// ```rust
/// use usage::{infer_notification_times, NotificationDefaults};
///
/// let table = NotificationDefaults::default();
/// assert_eq!(
///     infer_notification_times("1日3回 毎食後", &table),
///     vec!["08:00", "12:00", "18:00"],
/// );
/// assert_eq!(
///     infer_notification_times("就寝前", &table),
///     vec!["22:00"],
/// );
/// assert!(infer_notification_times("", &table).is_empty());
/// ```
pub fn infer_notification_times(usage_text: &str, table: &NotificationDefaults) -> Vec<String> {
    if usage_text.trim().is_empty() {
        return Vec::new();
    }
    let text = pattern::normalize_usage_text(usage_text);

    // BTreeSet gives dedup and ascending clock order in one move, since the
    // table values are zero-padded HH:MM strings.
    let mut times: BTreeSet<&str> = BTreeSet::new();
    if keywords::mentions_every_meal(&text) {
        times.insert(&table.morning);
        times.insert(&table.noon);
        times.insert(&table.evening);
    }
    if keywords::mentions_morning(&text) {
        times.insert(&table.morning);
    }
    if keywords::mentions_noon(&text) {
        times.insert(&table.noon);
    }
    if keywords::mentions_evening(&text) {
        times.insert(&table.evening);
    }
    if keywords::mentions_bedtime(&text) {
        times.insert(&table.night);
    }
    times.into_iter().map(str::to_string).collect()
}

/// Decides whether a medication is schedule-bound or taken as needed.
///
/// Returns `false` only when an explicit as-needed keyword (頓服, 疼痛時,
/// 必要時, …) is present and no numeric or timing cue co-occurs. Every
/// other case — including fully unknown text — returns `true`: assuming a
/// schedule is the conservative choice, since an unscheduled reminder is
/// less harmful than a missed one.
///
/// ```rust
/// use usage::has_frequency_limit;
///
/// assert!(!has_frequency_limit("疼痛時"));
/// // An as-needed keyword with a daily cap stays schedule-bound.
/// assert!(has_frequency_limit("頓服 1日3回まで"));
/// assert!(has_frequency_limit("なんらかの指示"));
/// ```
pub fn has_frequency_limit(usage_text: &str) -> bool {
    let text = pattern::normalize_usage_text(usage_text);
    if text.trim().is_empty() {
        return true;
    }
    if !keywords::contains_any(&text, keywords::AS_NEEDED) {
        return true;
    }

    let chars: Vec<char> = text.chars().collect();
    let numeric_cue = pattern::generic_count(&chars).is_some() || text.contains("回数");
    numeric_cue || keywords::mentions_any_timing(&text)
}
