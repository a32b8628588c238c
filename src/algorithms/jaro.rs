//! Jaro similarity implementation
//!
//! A window-bounded character matching metric that accounts for
//! transpositions. Not derived from an edit distance.
//!
//! # Performance Optimization
//!
//! ASCII inputs are compared as bytes, which avoids decoding to `char`
//! buffers. Every byte of an ASCII string is a whole scalar value, so both
//! paths produce identical scores.

use super::Similarity;
use smallvec::SmallVec;

/// Jaro similarity calculator
///
/// # Complexity
/// - Time: O(m * window) for matching characters
/// - Space: O(m+n) for match flags
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Jaro;

impl Jaro {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Similarity for Jaro {
    fn similarity(&self, a: &str, b: &str) -> f64 {
        jaro_similarity(a, b)
    }

    fn name(&self) -> &'static str {
        "jaro"
    }
}

/// Calculate Jaro similarity between two strings.
/// Returns a value between 0.0 and 1.0.
///
/// # Example
/// ```
/// use spellmatch::algorithms::jaro_similarity;
///
/// assert_eq!(jaro_similarity("alumni", "alumni"), 1.0);
/// assert!((jaro_similarity("MARTHA", "MARHTA") - 0.944).abs() < 1e-3);
/// ```
#[inline]
#[must_use]
pub fn jaro_similarity(a: &str, b: &str) -> f64 {
    if a == b {
        return 1.0;
    }

    if a.is_ascii() && b.is_ascii() {
        return jaro_slices(a.as_bytes(), b.as_bytes());
    }

    let a_chars: SmallVec<[char; 64]> = a.chars().collect();
    let b_chars: SmallVec<[char; 64]> = b.chars().collect();
    jaro_slices(&a_chars[..], &b_chars[..])
}

/// Distance version (1.0 - similarity)
#[inline]
#[must_use]
pub fn jaro_distance(a: &str, b: &str) -> f64 {
    1.0 - jaro_similarity(a, b)
}

/// Jaro over already-decoded units. Callers handle the equal-input case.
fn jaro_slices<T: PartialEq>(a: &[T], b: &[T]) -> f64 {
    let a_len = a.len();
    let b_len = b.len();

    if a_len == 0 || b_len == 0 {
        return 0.0;
    }

    // floor(max/2) - 1, negative only when both inputs have at most one unit.
    // A negative window leaves every search range empty.
    let window = (a_len.max(b_len) / 2) as isize - 1;

    let mut a_matched: SmallVec<[bool; 64]> = smallvec::smallvec![false; a_len];
    let mut b_matched: SmallVec<[bool; 64]> = smallvec::smallvec![false; b_len];

    let mut matches = 0usize;

    for i in 0..a_len {
        let start = (i as isize - window).max(0) as usize;
        let end = (i as isize + window + 1).clamp(0, b_len as isize) as usize;

        for j in start..end {
            if b_matched[j] || a[i] != b[j] {
                continue;
            }
            a_matched[i] = true;
            b_matched[j] = true;
            matches += 1;
            break;
        }
    }

    if matches == 0 {
        return 0.0;
    }

    // Walk matched units of both sides in order
    let mut mismatches = 0usize;
    let mut k = 0usize;
    for i in (0..a_len).filter(|&i| a_matched[i]) {
        while !b_matched[k] {
            k += 1;
        }
        if a[i] != b[k] {
            mismatches += 1;
        }
        k += 1;
    }

    // Integer halving: an odd mismatch count rounds down
    let transpositions = (mismatches / 2) as f64;
    let m = matches as f64;

    (m / a_len as f64 + m / b_len as f64 + (m - transpositions) / m) / 3.0
}
