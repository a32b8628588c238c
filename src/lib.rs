//! Spellmatch - approximate string similarity and word suggestion
//!
//! Finds the closest match for a misspelled word in a candidate vocabulary.
//!
//! # Features
//! - Edit distances: Levenshtein, Damerau-Levenshtein, Indel
//! - Jaro similarity
//! - Length-normalized similarity from any edit distance
//! - Best-match selection with deterministic tie-breaking
//! - Parallel selection that returns the same result as the sequential scan
//! - Unicode support: every algorithm compares `char`s, never bytes
//!
//! # Example
//! ```
//! use spellmatch::algorithms::jaro_similarity;
//! use spellmatch::{suggest_word, suggest_word_with_threshold};
//!
//! let words = ["hi", "hello", "bonjour", "alumni"];
//!
//! let suggestion = suggest_word("almni", &words, jaro_similarity);
//! assert_eq!(suggestion.word, "alumni");
//!
//! assert_eq!(suggest_word_with_threshold("almni", &words, 0.99, jaro_similarity), None);
//! ```

pub mod algorithm;
pub mod algorithms;
pub mod config;
pub mod error;
pub mod speller;
pub mod suggest;
pub mod vocabulary;

pub use algorithm::Algorithm;
pub use algorithms::{EditDistance, Similarity};
pub use config::SuggestConfig;
pub use error::{Error, Result};
pub use speller::Speller;
pub use suggest::{
    suggest_word, suggest_word_parallel, suggest_word_shared_best, suggest_word_with_threshold,
    try_suggest_word, Suggestion, PARALLEL_THRESHOLD,
};
pub use vocabulary::Vocabulary;
