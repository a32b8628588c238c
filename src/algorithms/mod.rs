//! Core string similarity algorithms
//!
//! Each algorithm is implemented as a standalone function for composability,
//! plus a trait-based interface for extensibility.
//!
//! All algorithms operate on Unicode scalar values (`char`), never on raw
//! bytes, so multi-byte text is compared character by character.

pub mod damerau;
pub mod indel;
pub mod jaro;
pub mod levenshtein;
pub mod normalize;

pub use damerau::*;
pub use indel::*;
pub use jaro::*;
pub use levenshtein::*;
pub use normalize::*;

/// Trait for all similarity metrics.
/// Returns a value between 0.0 (no detected similarity) and 1.0 (identical).
pub trait Similarity: Send + Sync {
    fn similarity(&self, a: &str, b: &str) -> f64;

    /// Convenience method for distance (1.0 - similarity)
    fn distance(&self, a: &str, b: &str) -> f64 {
        1.0 - self.similarity(a, b)
    }

    /// Name of the algorithm for debugging/logging
    fn name(&self) -> &'static str;
}

/// Trait for edit distance algorithms that return integer distances
pub trait EditDistance: Send + Sync {
    fn distance(&self, a: &str, b: &str) -> usize;

    /// Convert to normalized similarity score (0.0 to 1.0).
    ///
    /// Normalizes by the combined length of both strings, see
    /// [`normalized_similarity`].
    fn similarity(&self, a: &str, b: &str) -> f64 {
        normalized_similarity(a, b, |a, b| EditDistance::distance(self, a, b))
    }

    fn name(&self) -> &'static str;
}

/// Blanket implementation: any EditDistance is also a Similarity
impl<T: EditDistance> Similarity for T {
    fn similarity(&self, a: &str, b: &str) -> f64 {
        EditDistance::similarity(self, a, b)
    }

    fn name(&self) -> &'static str {
        EditDistance::name(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_distance_is_similarity() {
        let metrics: Vec<Box<dyn Similarity>> = vec![
            Box::new(Levenshtein::new()),
            Box::new(Indel::new()),
            Box::new(DamerauLevenshtein::new()),
            Box::new(Jaro::new()),
        ];
        for metric in &metrics {
            assert_eq!(metric.similarity("spell", "spell"), 1.0, "{}", metric.name());
            assert_eq!(metric.distance("spell", "spell"), 0.0, "{}", metric.name());
        }
    }

    #[test]
    fn test_trait_names() {
        assert_eq!(EditDistance::name(&Levenshtein::new()), "levenshtein");
        assert_eq!(EditDistance::name(&Indel::new()), "indel");
        assert_eq!(Similarity::name(&Jaro::new()), "jaro");
    }
}
