//! Shared output model for the medication label parsing pipeline.
//!
//! Every decoder in the workspace produces the same two value types defined
//! here: [`ParsedMedication`] (one drug entry) and [`MedicationBundle`] (the
//! whole label). Both are immutable once constructed, serializable, and
//! scoped to a single parse call — nothing in this crate persists or is
//! shared between parses.
//!
//! The crate also hosts [`DecodeConfig`], the one knob shared by all
//! decoders: the dispense date to fall back on when the payload does not
//! carry one.

mod config;
mod types;

pub use crate::config::DecodeConfig;
pub use crate::types::{MedicationBundle, ParsedMedication};
