//! Error types for suggestion and vocabulary operations.
//!
//! The distance and similarity functions themselves never fail; errors only
//! arise at the edges: configuration, algorithm lookup, strict selection and
//! vocabulary I/O.

use thiserror::Error;

/// Errors returned by this crate
#[derive(Error, Debug)]
pub enum Error {
    /// Strict selection was asked to choose from zero candidates
    #[error("Candidate set is empty")]
    EmptyCandidateSet,

    /// Algorithm name did not match any known metric
    #[error("Unknown algorithm: {0}. Valid: jaro, levenshtein, damerau_levenshtein, indel")]
    UnknownAlgorithm(String),

    /// Threshold was non-finite or outside [0.0, 1.0]
    #[error("Threshold must be a finite number in range [0.0, 1.0], got {0}")]
    InvalidThreshold(f64),

    /// Reading a vocabulary failed
    #[error("Failed to read vocabulary: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
