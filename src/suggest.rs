//! Best-match selection over a candidate list.
//!
//! Every selector returns the first candidate (in input order) that reaches
//! the strictly highest score. Scores must be greater than zero to count, so
//! an empty candidate list and a list where nothing scores both produce
//! [`Suggestion::default`].
//!
//! The parallel selectors track each candidate's original index and break
//! equal scores towards the lower index, so they return exactly what the
//! sequential scan returns regardless of how work is split.

use crate::error::{Error, Result};
use parking_lot::Mutex;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Minimum number of candidates for parallel processing.
///
/// Below this the sequential scan is faster than coordinating the thread
/// pool, especially for cheap metrics like Jaro.
pub const PARALLEL_THRESHOLD: usize = 100;

/// A suggested word and how confident the suggestion is
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    /// The suggested word, empty when nothing was suggested
    pub word: String,
    /// Similarity score of `word`, between 0.0 and 1.0
    pub likelihood: f64,
}

impl Suggestion {
    #[must_use]
    pub fn new(word: impl Into<String>, likelihood: f64) -> Self {
        Self {
            word: word.into(),
            likelihood,
        }
    }

    /// True for the "nothing to suggest" result.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.word.is_empty() && self.likelihood == 0.0
    }

    /// The suggested word, if its likelihood is strictly above `threshold`.
    ///
    /// The empty suggestion never passes, whatever the threshold.
    #[must_use]
    pub fn into_word_above(self, threshold: f64) -> Option<String> {
        if self.likelihood > threshold && !self.is_empty() {
            Some(self.word)
        } else {
            None
        }
    }
}

/// Index and score of the best candidate seen so far.
type Best = Option<(usize, f64)>;

/// Keep `a` unless `b` scores strictly higher, or scores the same at an
/// earlier position.
#[inline]
fn pick(a: Best, b: Best) -> Best {
    match (a, b) {
        (None, other) | (other, None) => other,
        (Some((ai, asc)), Some((bi, bsc))) => {
            if bsc > asc || (bsc == asc && bi < ai) {
                b
            } else {
                a
            }
        }
    }
}

/// Sequential argmax over `candidates`, reporting indices shifted by `offset`.
fn scan<S, F>(query: &str, candidates: &[S], offset: usize, similarity: &F) -> Best
where
    S: AsRef<str>,
    F: Fn(&str, &str) -> f64,
{
    let mut best: Best = None;
    let mut highest = 0.0;

    for (i, candidate) in candidates.iter().enumerate() {
        let score = similarity(query, candidate.as_ref());
        if score > highest {
            highest = score;
            best = Some((offset + i, score));
        }
    }

    best
}

fn to_suggestion<S: AsRef<str>>(candidates: &[S], best: Best) -> Suggestion {
    let suggestion = match best {
        Some((index, likelihood)) => Suggestion::new(candidates[index].as_ref(), likelihood),
        None => Suggestion::default(),
    };
    trace!(word = %suggestion.word, likelihood = suggestion.likelihood, "selected suggestion");
    suggestion
}

/// Suggest the candidate most similar to `query`.
///
/// Scores every candidate once, in order. A later candidate replaces the
/// current best only with a strictly higher score, so the first of several
/// equal maxima wins. Returns an empty [`Suggestion`] with likelihood 0.0
/// when `candidates` is empty.
///
/// # Example
/// ```
/// use spellmatch::algorithms::jaro_similarity;
/// use spellmatch::suggest_word;
///
/// let words = ["hi", "hello", "bonjour", "alumni"];
/// let suggestion = suggest_word("almni", &words, jaro_similarity);
/// assert_eq!(suggestion.word, "alumni");
/// assert!((suggestion.likelihood - 0.944).abs() < 1e-3);
/// ```
#[must_use]
pub fn suggest_word<S, F>(query: &str, candidates: &[S], similarity: F) -> Suggestion
where
    S: AsRef<str>,
    F: Fn(&str, &str) -> f64,
{
    to_suggestion(candidates, scan(query, candidates, 0, &similarity))
}

/// Like [`suggest_word`], but an empty candidate list is an error.
pub fn try_suggest_word<S, F>(query: &str, candidates: &[S], similarity: F) -> Result<Suggestion>
where
    S: AsRef<str>,
    F: Fn(&str, &str) -> f64,
{
    if candidates.is_empty() {
        return Err(Error::EmptyCandidateSet);
    }
    Ok(suggest_word(query, candidates, similarity))
}

/// Suggest a word only if its likelihood is strictly above `threshold`.
///
/// Runs [`suggest_word`] once and filters its result.
///
/// # Example
/// ```
/// use spellmatch::algorithms::jaro_similarity;
/// use spellmatch::suggest_word_with_threshold;
///
/// let words = ["hi", "hello", "bonjour", "alumni"];
/// assert_eq!(
///     suggest_word_with_threshold("almni", &words, 0.9, jaro_similarity),
///     Some("alumni".to_string())
/// );
/// assert_eq!(suggest_word_with_threshold("almni", &words, 0.95, jaro_similarity), None);
/// ```
#[must_use]
pub fn suggest_word_with_threshold<S, F>(
    query: &str,
    candidates: &[S],
    threshold: f64,
    similarity: F,
) -> Option<String>
where
    S: AsRef<str>,
    F: Fn(&str, &str) -> f64,
{
    suggest_word(query, candidates, similarity).into_word_above(threshold)
}

/// Parallel [`suggest_word`] using fan-out/fan-in.
///
/// Candidates are split into contiguous chunks. Each chunk computes a local
/// best without any shared state, and the local results are reduced by
/// score, then by original index. Inputs smaller than
/// [`PARALLEL_THRESHOLD`] are scanned sequentially.
#[must_use]
pub fn suggest_word_parallel<S, F>(query: &str, candidates: &[S], similarity: F) -> Suggestion
where
    S: AsRef<str> + Sync,
    F: Fn(&str, &str) -> f64 + Send + Sync,
{
    if candidates.len() < PARALLEL_THRESHOLD {
        debug!(candidates = candidates.len(), "below parallel threshold, scanning sequentially");
        return suggest_word(query, candidates, similarity);
    }

    let chunk_size = candidates
        .len()
        .div_ceil(rayon::current_num_threads() * 4)
        .max(1);
    debug!(candidates = candidates.len(), chunk_size, "scoring candidates in parallel chunks");

    let best = candidates
        .par_chunks(chunk_size)
        .enumerate()
        .map(|(chunk_index, chunk)| scan(query, chunk, chunk_index * chunk_size, &similarity))
        .reduce(|| None, pick);

    to_suggestion(candidates, best)
}

/// Parallel [`suggest_word`] with one task per candidate and a single
/// lock-guarded best register.
///
/// Only worth it when each comparison is expensive (long strings under
/// Damerau-Levenshtein, say); for cheap metrics lock traffic dominates and
/// [`suggest_word_parallel`] or the sequential scan is faster. The register
/// records candidate indices, so the result matches [`suggest_word`].
#[must_use]
pub fn suggest_word_shared_best<S, F>(query: &str, candidates: &[S], similarity: F) -> Suggestion
where
    S: AsRef<str> + Sync,
    F: Fn(&str, &str) -> f64 + Send + Sync,
{
    let register: Mutex<Best> = Mutex::new(None);

    candidates
        .par_iter()
        .enumerate()
        .for_each(|(index, candidate)| {
            let score = similarity(query, candidate.as_ref());
            if score > 0.0 {
                let mut best = register.lock();
                *best = pick(*best, Some((index, score)));
            }
        });

    to_suggestion(candidates, register.into_inner())
}
