use thiserror::Error;

/// Errors produced by the record-stream decoder.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// The fold ran to completion but no record yielded a usable
    /// medication entry.
    #[error("no medication entries recognized in record stream")]
    NoMedicationsFound,
}
