//! Named similarity algorithms.
//!
//! Lets callers pick a metric by name (from configuration or user input)
//! and hand it to the selector as a plain function.
//!
//! The naive recursive Levenshtein is not selectable here; call
//! `algorithms::levenshtein_recursive` directly.

use crate::algorithms::{
    damerau_levenshtein_similarity, indel_similarity, jaro_similarity, levenshtein_similarity,
};
use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Similarity algorithm used to score candidates
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    /// Jaro similarity, the fastest option
    #[default]
    Jaro,
    /// Levenshtein distance, normalized by combined length
    Levenshtein,
    /// Damerau-Levenshtein (optimal string alignment), normalized
    DamerauLevenshtein,
    /// Insertion/deletion-only distance, normalized
    Indel,
}

impl Algorithm {
    /// All algorithms, in declaration order.
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Jaro,
        Algorithm::Levenshtein,
        Algorithm::DamerauLevenshtein,
        Algorithm::Indel,
    ];

    /// Score two strings, 0.0 to 1.0.
    #[inline]
    #[must_use]
    pub fn similarity(self, a: &str, b: &str) -> f64 {
        (self.similarity_fn())(a, b)
    }

    /// The underlying similarity function.
    #[must_use]
    pub fn similarity_fn(self) -> fn(&str, &str) -> f64 {
        match self {
            Algorithm::Jaro => jaro_similarity,
            Algorithm::Levenshtein => levenshtein_similarity,
            Algorithm::DamerauLevenshtein => damerau_levenshtein_similarity,
            Algorithm::Indel => indel_similarity,
        }
    }

    /// Canonical name, as accepted by `FromStr`.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Jaro => "jaro",
            Algorithm::Levenshtein => "levenshtein",
            Algorithm::DamerauLevenshtein => "damerau_levenshtein",
            Algorithm::Indel => "indel",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "jaro" => Ok(Algorithm::Jaro),
            "levenshtein" => Ok(Algorithm::Levenshtein),
            "damerau_levenshtein" | "damerau" => Ok(Algorithm::DamerauLevenshtein),
            "indel" => Ok(Algorithm::Indel),
            _ => Err(Error::UnknownAlgorithm(s.to_string())),
        }
    }
}
