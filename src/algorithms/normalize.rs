//! Distance-to-similarity normalization
//!
//! Converts an integer edit distance into a score in [0.0, 1.0] by dividing
//! by the combined length of both strings.

/// Convert a distance into a similarity score.
///
/// Equal strings short-circuit to 1.0 before the distance function runs,
/// which also covers the empty/empty case. Otherwise the result is
/// `1 - d / (len(a) + len(b))`, with lengths counted in `char`s.
///
/// The result stays in [0.0, 1.0] as long as `distance` never exceeds
/// `len(a) + len(b)`, which holds for Levenshtein, Indel and
/// Damerau-Levenshtein. Use [`normalized_similarity_clamped`] for distance
/// functions with a larger range.
///
/// # Example
/// ```
/// use spellmatch::algorithms::{levenshtein, normalized_similarity};
///
/// assert_eq!(normalized_similarity("", "", levenshtein), 1.0);
/// assert!((normalized_similarity("kitten", "sitting", levenshtein) - 0.769).abs() < 1e-3);
/// ```
#[inline]
#[must_use]
pub fn normalized_similarity<F>(a: &str, b: &str, distance: F) -> f64
where
    F: Fn(&str, &str) -> usize,
{
    if a == b {
        return 1.0;
    }

    let total_len = a.chars().count() + b.chars().count();
    let dist = distance(a, b);

    1.0 - (dist as f64 / total_len as f64)
}

/// [`normalized_similarity`] clamped to [0.0, 1.0].
#[inline]
#[must_use]
pub fn normalized_similarity_clamped<F>(a: &str, b: &str, distance: F) -> f64
where
    F: Fn(&str, &str) -> usize,
{
    normalized_similarity(a, b, distance).clamp(0.0, 1.0)
}
