//! Levenshtein (edit) distance implementation
//!
//! Insertions, deletions and substitutions each cost 1.
//!
//! - Wagner-Fischer DP with two rolling rows, O(min(m,n)) space
//! - Early termination with max distance threshold
//! - Naive recursive baseline, kept only for performance comparisons

use super::{normalized_similarity, EditDistance};
use smallvec::SmallVec;

// ============================================================================
// Dynamic Programming
// ============================================================================

/// Two-row Wagner-Fischer over char slices.
///
/// The shorter slice goes on the column axis so the rows stay small.
#[inline]
fn dp_distance(a: &[char], b: &[char]) -> usize {
    let (source, target) = if a.len() < b.len() { (b, a) } else { (a, b) };
    let n = target.len();

    let mut prev: SmallVec<[usize; 64]> = (0..=n).collect();
    let mut curr: SmallVec<[usize; 64]> = smallvec::smallvec![0; n + 1];

    for (i, &sc) in source.iter().enumerate() {
        curr[0] = i + 1;

        for (j, &tc) in target.iter().enumerate() {
            curr[j + 1] = if sc == tc {
                prev[j]
            } else {
                1 + prev[j + 1] // deletion
                    .min(curr[j]) // insertion
                    .min(prev[j]) // substitution
            };
        }

        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n]
}

/// Two-row DP that gives up once every cell of a row exceeds `max_distance`.
#[inline]
fn dp_distance_bounded(a: &[char], b: &[char], max_distance: usize) -> Option<usize> {
    if a.len().abs_diff(b.len()) > max_distance {
        return None;
    }

    let (source, target) = if a.len() < b.len() { (b, a) } else { (a, b) };
    let n = target.len();

    let mut prev: SmallVec<[usize; 64]> = (0..=n).collect();
    let mut curr: SmallVec<[usize; 64]> = smallvec::smallvec![0; n + 1];

    for (i, &sc) in source.iter().enumerate() {
        curr[0] = i + 1;
        let mut row_min = curr[0];

        for (j, &tc) in target.iter().enumerate() {
            let cell = if sc == tc {
                prev[j]
            } else {
                1 + prev[j + 1].min(curr[j]).min(prev[j])
            };
            curr[j + 1] = cell;
            row_min = row_min.min(cell);
        }

        if row_min > max_distance {
            return None;
        }

        std::mem::swap(&mut prev, &mut curr);
    }

    let result = prev[n];
    if result <= max_distance {
        Some(result)
    } else {
        None
    }
}

// ============================================================================
// Public API
// ============================================================================

/// Levenshtein distance calculator with optional early termination
///
/// # Complexity
/// - Time: O(m*n) where m and n are string lengths
/// - Space: O(min(m,n)) using two-row DP
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Levenshtein {
    /// Maximum distance to compute (for early termination)
    pub max_distance: Option<usize>,
}

impl Levenshtein {
    #[must_use]
    pub fn new() -> Self {
        Self { max_distance: None }
    }

    #[must_use]
    pub fn with_max_distance(max_distance: usize) -> Self {
        Self {
            max_distance: Some(max_distance),
        }
    }

    /// Returns `None` if distance exceeds the max_distance threshold.
    #[must_use]
    pub fn compute(&self, a: &str, b: &str) -> Option<usize> {
        levenshtein_distance_bounded(a, b, self.max_distance)
    }
}

impl EditDistance for Levenshtein {
    fn distance(&self, a: &str, b: &str) -> usize {
        // Past the threshold we report max_distance + 1
        match self.max_distance {
            Some(max_d) => levenshtein_distance_bounded(a, b, Some(max_d))
                .unwrap_or(max_d.saturating_add(1)),
            None => levenshtein(a, b),
        }
    }

    fn name(&self) -> &'static str {
        "levenshtein"
    }
}

/// Levenshtein distance between two strings.
///
/// # Example
/// ```
/// use spellmatch::algorithms::levenshtein;
///
/// assert_eq!(levenshtein("kitten", "sitting"), 3);
/// assert_eq!(levenshtein("", "abc"), 3);
/// ```
#[inline]
#[must_use]
pub fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_chars: SmallVec<[char; 64]> = a.chars().collect();
    let b_chars: SmallVec<[char; 64]> = b.chars().collect();

    if a_chars.is_empty() {
        return b_chars.len();
    }
    if b_chars.is_empty() {
        return a_chars.len();
    }

    dp_distance(&a_chars, &b_chars)
}

/// Compute Levenshtein distance with optional max threshold.
///
/// Returns `None` if distance exceeds `max_distance` (early termination).
///
/// # Example
/// ```
/// use spellmatch::algorithms::levenshtein_distance_bounded;
///
/// assert_eq!(levenshtein_distance_bounded("kitten", "sitting", None), Some(3));
/// assert_eq!(levenshtein_distance_bounded("abc", "abd", Some(2)), Some(1));
/// assert_eq!(levenshtein_distance_bounded("abcdef", "ghijkl", Some(3)), None);
/// ```
#[inline]
#[must_use]
pub fn levenshtein_distance_bounded(a: &str, b: &str, max_distance: Option<usize>) -> Option<usize> {
    let Some(max_d) = max_distance else {
        return Some(levenshtein(a, b));
    };

    if a == b {
        return Some(0);
    }

    let a_chars: SmallVec<[char; 64]> = a.chars().collect();
    let b_chars: SmallVec<[char; 64]> = b.chars().collect();

    dp_distance_bounded(&a_chars, &b_chars, max_d)
}

/// Levenshtein similarity normalized by combined length (0.0 to 1.0)
#[inline]
#[must_use]
pub fn levenshtein_similarity(a: &str, b: &str) -> f64 {
    normalized_similarity(a, b, levenshtein)
}

// ============================================================================
// Recursive Baseline
// ============================================================================

/// Naive recursive Levenshtein calculator.
///
/// Exists only as a baseline for benchmarks. Runs in O(3^n); never use it
/// on vocabulary-scale inputs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecursiveLevenshtein;

impl RecursiveLevenshtein {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl EditDistance for RecursiveLevenshtein {
    fn distance(&self, a: &str, b: &str) -> usize {
        levenshtein_recursive(a, b)
    }

    fn name(&self) -> &'static str {
        "recursive_levenshtein"
    }
}

/// Unmemoized recursive Levenshtein distance. Exponential time.
#[must_use]
pub fn levenshtein_recursive(a: &str, b: &str) -> usize {
    let a_chars: SmallVec<[char; 64]> = a.chars().collect();
    let b_chars: SmallVec<[char; 64]> = b.chars().collect();
    recurse(&a_chars, &b_chars)
}

fn recurse(a: &[char], b: &[char]) -> usize {
    match (a.split_first(), b.split_first()) {
        (None, _) => b.len(),
        (_, None) => a.len(),
        (Some((ac, a_rest)), Some((bc, b_rest))) => {
            if ac == bc {
                return recurse(a_rest, b_rest);
            }
            1 + recurse(a, b_rest) // insertion
                .min(recurse(a_rest, b)) // deletion
                .min(recurse(a_rest, b_rest)) // substitution
        }
    }
}

/// Similarity from the recursive baseline. Same values as
/// [`levenshtein_similarity`], exponentially slower.
#[must_use]
pub fn recursive_levenshtein_similarity(a: &str, b: &str) -> f64 {
    normalized_similarity(a, b, levenshtein_recursive)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levenshtein_basic() {
        assert_eq!(levenshtein("", ""), 0);
        assert_eq!(levenshtein("abc", "abc"), 0);
        assert_eq!(levenshtein("abc", ""), 3);
        assert_eq!(levenshtein("", "abc"), 3);
        assert_eq!(levenshtein("kitten", "sitting"), 3);
        assert_eq!(levenshtein("saturday", "sunday"), 3);
    }

    #[test]
    fn test_levenshtein_unicode() {
        assert_eq!(levenshtein("café", "cafe"), 1);
        assert_eq!(levenshtein("日本語", "日本"), 1);
        assert_eq!(levenshtein("", "日本"), 2);
    }

    #[test]
    fn test_levenshtein_examples() {
        assert_eq!(levenshtein("algorithm", "altruistic"), 6);
        assert_eq!(levenshtein("intention", "execution"), 5);
        assert_eq!(levenshtein("a", "b"), 1);
        assert_eq!(levenshtein("ab", "ba"), 2); // swap is 2 edits in Levenshtein
    }

    #[test]
    fn test_levenshtein_long_strings() {
        let a = "a".repeat(100);
        let b = format!("{}b", "a".repeat(99));
        assert_eq!(levenshtein(&a, &b), 1);
    }

    #[test]
    fn test_levenshtein_bounded() {
        assert_eq!(levenshtein_distance_bounded("abcdef", "ghijkl", Some(3)), None);
        assert_eq!(levenshtein_distance_bounded("abc", "abd", Some(2)), Some(1));
        assert_eq!(levenshtein_distance_bounded("abc", "abc", Some(0)), Some(0));
        assert_eq!(levenshtein_distance_bounded("", "abc", Some(2)), None);
        assert_eq!(levenshtein_distance_bounded("", "abc", Some(3)), Some(3));
        assert_eq!(levenshtein_distance_bounded("kitten", "sitting", None), Some(3));
    }

    #[test]
    fn test_levenshtein_struct() {
        let lev = Levenshtein::with_max_distance(2);
        assert_eq!(lev.compute("abc", "abd"), Some(1));
        assert_eq!(lev.compute("abc", "xyz"), None);
        assert_eq!(EditDistance::distance(&lev, "abc", "xyz"), 3);

        let unbounded = Levenshtein::new();
        assert_eq!(unbounded.compute("abc", "xyz"), Some(3));
    }

    #[test]
    fn test_recursive_matches_dp() {
        let pairs = [
            ("", ""),
            ("a", ""),
            ("kitten", "sitting"),
            ("flaw", "lawn"),
            ("café", "cafe"),
        ];
        for (a, b) in pairs {
            assert_eq!(levenshtein_recursive(a, b), levenshtein(a, b), "{a} vs {b}");
        }
    }

    #[test]
    fn test_levenshtein_similarity() {
        assert_eq!(levenshtein_similarity("", ""), 1.0);
        assert_eq!(levenshtein_similarity("abc", "xyz"), 0.5);
        assert_eq!(recursive_levenshtein_similarity("abc", "xyz"), 0.5);
    }
}
