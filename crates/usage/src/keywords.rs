//! Fixed keyword tables for Japanese usage-instruction text.
//!
//! Read-only; constructed at compile time and shared freely across threads.

/// "Every meal" markers. Covers 毎食後 and 毎食前 via substring match.
pub(crate) const EVERY_MEAL: &[&str] = &["毎食"];

/// Morning / on-rising markers.
pub(crate) const MORNING: &[&str] = &["朝", "起床"];

/// Noon markers.
pub(crate) const NOON: &[&str] = &["昼"];

/// Evening markers.
pub(crate) const EVENING: &[&str] = &["夕", "晩", "夜"];

/// Before-bed markers. Single characters so 就寝前, 寝る前, 眠前 all match.
pub(crate) const BEDTIME: &[&str] = &["寝", "眠"];

/// Standalone timing keywords that alone imply once-per-day dosing when no
/// other timing keyword is present.
pub(crate) const STANDALONE_ONCE: &[&str] = &["就寝前", "眠前", "寝る前", "起床時", "食間"];

/// As-needed / pain-triggered / ad-lib markers that lift the fixed daily
/// frequency.
pub(crate) const AS_NEEDED: &[&str] = &[
    "疼痛時",
    "痛み時",
    "必要時",
    "適宜",
    "随時",
    "発作時",
    "症状時",
    "頓用",
    "頓服",
];

pub(crate) fn contains_any(text: &str, table: &[&str]) -> bool {
    table.iter().any(|keyword| text.contains(keyword))
}

pub(crate) fn mentions_every_meal(text: &str) -> bool {
    contains_any(text, EVERY_MEAL)
}

pub(crate) fn mentions_morning(text: &str) -> bool {
    contains_any(text, MORNING)
}

pub(crate) fn mentions_noon(text: &str) -> bool {
    contains_any(text, NOON)
}

pub(crate) fn mentions_evening(text: &str) -> bool {
    contains_any(text, EVENING)
}

pub(crate) fn mentions_bedtime(text: &str) -> bool {
    contains_any(text, BEDTIME)
}

/// Any timing cue at all: meal, part-of-day, or bed markers.
pub(crate) fn mentions_any_timing(text: &str) -> bool {
    mentions_every_meal(text)
        || mentions_morning(text)
        || mentions_noon(text)
        || mentions_evening(text)
        || mentions_bedtime(text)
}
