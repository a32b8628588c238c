//! Indel distance implementation
//!
//! Edit distance restricted to insertions and deletions. Equivalent to
//! Levenshtein with a substitution cost of 2, and to
//! `len(a) + len(b) - 2 * lcs(a, b)`.

use super::{normalized_similarity, EditDistance};
use smallvec::SmallVec;

/// Indel distance calculator
///
/// # Complexity
/// - Time: O(m*n)
/// - Space: O(min(m,n)) using two-row DP over prefix lengths
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Indel;

impl Indel {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl EditDistance for Indel {
    fn distance(&self, a: &str, b: &str) -> usize {
        indel_distance(a, b)
    }

    fn name(&self) -> &'static str {
        "indel"
    }
}

/// Indel distance between two strings.
///
/// # Example
/// ```
/// use spellmatch::algorithms::indel_distance;
///
/// // a substitution is one deletion plus one insertion
/// assert_eq!(indel_distance("cat", "cut"), 2);
/// assert_eq!(indel_distance("kitten", "sitting"), 5);
/// ```
#[inline]
#[must_use]
pub fn indel_distance(a: &str, b: &str) -> usize {
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

    let (source, target) = if a_chars.len() < b_chars.len() {
        (&b_chars[..], &a_chars[..])
    } else {
        (&a_chars[..], &b_chars[..])
    };
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
            };
        }

        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n]
}

/// Indel similarity normalized by combined length (0.0 to 1.0)
#[inline]
#[must_use]
pub fn indel_similarity(a: &str, b: &str) -> f64 {
    normalized_similarity(a, b, indel_distance)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 0.001
    }

    #[test]
    fn test_indel_basic() {
        assert_eq!(indel_distance("", ""), 0);
        assert_eq!(indel_distance("abc", ""), 3);
        assert_eq!(indel_distance("", "abc"), 3);
        assert_eq!(indel_distance("abc", "abc"), 0);
        assert_eq!(indel_distance("abc", "xyz"), 6);
        assert_eq!(indel_distance("ab", "ba"), 2);
    }

    #[test]
    fn test_indel_matches_lcs_identity() {
        // lcs("kitten", "sitting") = "ittn", 6 + 7 - 2 * 4
        assert_eq!(indel_distance("kitten", "sitting"), 5);
        // lcs("alumni", "almni") = 5
        assert_eq!(indel_distance("alumni", "almni"), 1);
    }

    #[test]
    fn test_indel_unicode() {
        assert_eq!(indel_distance("café", "cafe"), 2);
        assert_eq!(indel_distance("日本語", "日本"), 1);
    }

    #[test]
    fn test_indel_long_input_is_polynomial() {
        // Naive recursion would not finish on this input
        let a = "ab".repeat(200);
        let b = "ba".repeat(200);
        assert_eq!(indel_distance(&a, &b), 2);
    }

    #[test]
    fn test_indel_similarity() {
        assert_eq!(indel_similarity("", ""), 1.0);
        assert_eq!(indel_similarity("abc", "xyz"), 0.0);
        assert!(approx_eq(indel_similarity("kitten", "sitting"), 1.0 - 5.0 / 13.0));
    }
}
