//! Damerau-Levenshtein distance implementation
//!
//! Extends Levenshtein with transposition of two adjacent characters as a
//! single unit-cost operation. Particularly useful for typo detection where
//! letter swaps are common.
//!
//! This is the restricted variant (optimal string alignment): a transposed
//! pair is not edited again afterwards, so `"ca"` to `"abc"` costs 3, not 2.
//!
//! The recurrence runs over suffix pairs `(a[i..], b[j..])`. Sub-results are
//! memoized in a dense `(m+1) x (n+1)` table indexed by the suffix start
//! positions, filled from the ends of both strings towards the front, so each
//! pair is computed exactly once and no recursion depth is needed.

use super::{normalized_similarity, EditDistance};
use smallvec::SmallVec;

/// Damerau-Levenshtein distance calculator
///
/// # Complexity
/// - Time: O(m*n) where m and n are string lengths
/// - Space: O(m*n) for the memo table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DamerauLevenshtein;

impl DamerauLevenshtein {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl EditDistance for DamerauLevenshtein {
    fn distance(&self, a: &str, b: &str) -> usize {
        damerau_levenshtein(a, b)
    }

    fn name(&self) -> &'static str {
        "damerau_levenshtein"
    }
}

/// Distances for every suffix pair of one comparison.
///
/// Lives for a single top-level call and is dropped with it.
struct MemoTable {
    cells: Vec<usize>,
    width: usize,
}

impl MemoTable {
    fn new(m: usize, n: usize) -> Self {
        Self {
            cells: vec![0; (m + 1) * (n + 1)],
            width: n + 1,
        }
    }

    #[inline]
    fn get(&self, i: usize, j: usize) -> usize {
        self.cells[i * self.width + j]
    }

    #[inline]
    fn set(&mut self, i: usize, j: usize, value: usize) {
        self.cells[i * self.width + j] = value;
    }
}

/// Damerau-Levenshtein distance between two strings.
///
/// # Example
/// ```
/// use spellmatch::algorithms::damerau_levenshtein;
///
/// assert_eq!(damerau_levenshtein("teh", "the"), 1);
/// assert_eq!(damerau_levenshtein("kitten", "sitting"), 3);
/// ```
#[must_use]
pub fn damerau_levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_chars: SmallVec<[char; 64]> = a.chars().collect();
    let b_chars: SmallVec<[char; 64]> = b.chars().collect();

    let m = a_chars.len();
    let n = b_chars.len();

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    let mut memo = MemoTable::new(m, n);

    // Empty suffix of one side costs the remaining length of the other
    for i in 0..=m {
        memo.set(i, n, m - i);
    }
    for j in 0..=n {
        memo.set(m, j, n - j);
    }

    for i in (0..m).rev() {
        for j in (0..n).rev() {
            let cost = if a_chars[i] == b_chars[j] {
                memo.get(i + 1, j + 1)
            } else {
                let insertion = memo.get(i, j + 1);
                let deletion = memo.get(i + 1, j);
                let substitution = memo.get(i + 1, j + 1);
                let mut best = 1 + insertion.min(deletion).min(substitution);

                if i + 1 < m
                    && j + 1 < n
                    && a_chars[i] == b_chars[j + 1]
                    && a_chars[i + 1] == b_chars[j]
                {
                    best = best.min(1 + memo.get(i + 2, j + 2));
                }
                best
            };
            memo.set(i, j, cost);
        }
    }

    memo.get(0, 0)
}

/// Damerau-Levenshtein similarity normalized by combined length (0.0 to 1.0)
#[inline]
#[must_use]
pub fn damerau_levenshtein_similarity(a: &str, b: &str) -> f64 {
    normalized_similarity(a, b, damerau_levenshtein)
}
