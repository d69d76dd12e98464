//! Usage Heuristics Engine
//!
//! A meaningful fraction of the clinically relevant information on a
//! dispensing label — how many times per day, at what time of day — exists
//! only as free-form natural-language text (`1日3回 毎食後`, `疼痛時`,
//! `就寝前`). This crate mines that text for scheduling purposes.
//!
//! ## What we do here
//!
//! - **Estimate administrations per day** — [`estimate_count`], a strict
//!   priority ladder from explicit `1日N回` patterns down to bare digit runs
//! - **Estimate dose per administration** — [`estimate_dose`], the single
//!   `1回N` pattern
//! - **Suggest notification times** — [`infer_notification_times`], keyword
//!   to canonical clock-time mapping driven by a [`NotificationDefaults`]
//!   table so per-institution customization never touches parsing logic
//! - **Detect as-needed medications** — [`has_frequency_limit`], defaulting
//!   to "assume scheduled" whenever the text is ambiguous
//!
//! All four functions are pure, total, and deterministic over the same
//! free-text field; none consult external state. Input is NFKC-normalized
//! first so full-width digits (`１日３回`) match the same patterns as ASCII.
//!
//! These are scheduling *hints*, not transcriptions of the prescription:
//! canonical default times stand in for "sometime in that part of the day",
//! and the reminder surface treats them as suggestions subject to user
//! confirmation.
//!
//! ## Example
//!
//! ```rust
//! use usage::{estimate_count, infer_notification_times, NotificationDefaults};
//!
//! let text = "1日2回 朝夕食後";
//! assert_eq!(estimate_count(text), Some(2));
//!
//! let times = infer_notification_times(text, &NotificationDefaults::default());
//! assert_eq!(times, vec!["08:00".to_string(), "18:00".to_string()]);
//! ```

mod config;
mod frequency;
mod keywords;
mod pattern;
mod schedule;

pub use crate::config::{ConfigError, NotificationDefaults};
pub use crate::frequency::{estimate_count, estimate_dose};
pub use crate::pattern::normalize_usage_text;
pub use crate::schedule::{has_frequency_limit, infer_notification_times};
