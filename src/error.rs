//! Error type shared by the factory and the word record.

use thiserror::Error;

/// Errors raised while declaring a stage schema or building a word from a row.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    /// Neither a target field list nor target initial values were declared.
    #[error(
        "configuration error: target fields or target field initial values must be given"
    )]
    MissingTargets,

    /// The number of row values does not match the number of input fields.
    #[error(
        "{expected} values expected, {provided} provided:\nFeatures: {fields:?}\nValues: {values:?}"
    )]
    ValueCount {
        expected: usize,
        provided: usize,
        fields: Vec<String>,
        values: Vec<String>,
    },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, WordError>;
