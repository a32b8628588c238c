//! Configured spelling suggester.

use crate::algorithm::Algorithm;
use crate::config::SuggestConfig;
use crate::error::Result;
use crate::suggest::{suggest_word, suggest_word_parallel, Suggestion};
use crate::vocabulary::Vocabulary;
use std::sync::Arc;

/// Suggests corrections from a shared vocabulary.
///
/// Cloning is cheap: clones share the same vocabulary, which is never
/// mutated, so one `Speller` can serve concurrent queries.
///
/// # Example
/// ```
/// use spellmatch::{Speller, Vocabulary};
///
/// let speller = Speller::new(Vocabulary::from_words(["hi", "hello", "bonjour", "alumni"]));
/// assert_eq!(speller.suggest("almni").word, "alumni");
/// ```
#[derive(Debug, Clone)]
pub struct Speller {
    vocabulary: Arc<Vocabulary>,
    config: SuggestConfig,
}

impl Speller {
    /// Speller with the default configuration (Jaro, no threshold).
    pub fn new(vocabulary: impl Into<Arc<Vocabulary>>) -> Self {
        Self {
            vocabulary: vocabulary.into(),
            config: SuggestConfig::default(),
        }
    }

    /// Speller with a validated configuration.
    pub fn with_config(vocabulary: impl Into<Arc<Vocabulary>>, config: SuggestConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            vocabulary: vocabulary.into(),
            config,
        })
    }

    #[must_use]
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    #[must_use]
    pub fn config(&self) -> &SuggestConfig {
        &self.config
    }

    /// Best candidate under the configured algorithm.
    #[must_use]
    pub fn suggest(&self, word: &str) -> Suggestion {
        self.suggest_with(word, self.config.algorithm)
    }

    /// Best candidate under a specific algorithm, ignoring the configured one.
    #[must_use]
    pub fn suggest_with(&self, word: &str, algorithm: Algorithm) -> Suggestion {
        let candidates = self.vocabulary.as_slice();
        let similarity = algorithm.similarity_fn();
        if self.config.parallel {
            suggest_word_parallel(word, candidates, similarity)
        } else {
            suggest_word(word, candidates, similarity)
        }
    }

    /// Corrected word, if any.
    ///
    /// With a configured threshold the suggestion must strictly exceed it.
    #[must_use]
    pub fn correct(&self, word: &str) -> Option<String> {
        let threshold = self.config.threshold.unwrap_or(f64::NEG_INFINITY);
        self.suggest(word).into_word_above(threshold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::jaro_similarity;
    use crate::error::Error;
    use crate::suggest::suggest_word_with_threshold;

    fn greetings() -> Vocabulary {
        Vocabulary::from_words(["hi", "hello", "bonjour", "alumni"])
    }

    #[test]
    fn test_default_uses_jaro() {
        let speller = Speller::new(greetings());
        let suggestion = speller.suggest("almni");
        assert_eq!(suggestion.word, "alumni");
        assert!((suggestion.likelihood - 0.944).abs() < 0.001);
    }

    #[test]
    fn test_suggest_with_algorithm() {
        let speller = Speller::new(greetings());
        for algorithm in Algorithm::ALL {
            assert_eq!(speller.suggest_with("alumni", algorithm).word, "alumni", "{algorithm}");
        }
        assert_eq!(speller.suggest_with("helo", Algorithm::Levenshtein).word, "hello");
    }

    #[test]
    fn test_correct_threshold() {
        let config = SuggestConfig::new().with_threshold(0.95);
        let strict = Speller::with_config(greetings(), config).unwrap();
        assert_eq!(strict.correct("almni"), None);
        assert_eq!(strict.correct("alumni"), Some("alumni".to_string()));

        let lenient = Speller::new(greetings());
        assert_eq!(lenient.correct("almni"), Some("alumni".to_string()));
    }

    #[test]
    fn test_correct_agrees_with_threshold_selector() {
        let words = greetings();
        let exact = jaro_similarity("almni", "alumni");
        for threshold in [exact, exact - 1e-9, 0.0] {
            let config = SuggestConfig::new().with_threshold(threshold);
            let speller = Speller::with_config(words.clone(), config).unwrap();
            assert_eq!(
                speller.correct("almni"),
                suggest_word_with_threshold("almni", words.as_slice(), threshold, jaro_similarity),
                "threshold {threshold}"
            );
        }
        let at_score = Speller::with_config(words, SuggestConfig::new().with_threshold(exact));
        assert_eq!(at_score.unwrap().correct("almni"), None);
    }

    #[test]
    fn test_correct_empty_vocabulary() {
        let speller = Speller::new(Vocabulary::default());
        assert!(speller.suggest("word").is_empty());
        assert_eq!(speller.correct("word"), None);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = SuggestConfig::new().with_threshold(2.0);
        assert!(matches!(
            Speller::with_config(greetings(), config),
            Err(Error::InvalidThreshold(_))
        ));
    }

    #[test]
    fn test_parallel_config_agrees() {
        let words: Vocabulary = (0..400).map(|i| format!("term{}", i % 50)).collect();
        let shared = Arc::new(words);
        let sequential = Speller::new(Arc::clone(&shared));
        let parallel =
            Speller::with_config(shared, SuggestConfig::new().with_parallel(true)).unwrap();
        for query in ["term7", "tmre42", "xyz"] {
            assert_eq!(parallel.suggest(query), sequential.suggest(query), "query {query}");
        }
    }

    #[test]
    fn test_clone_shares_vocabulary() {
        let speller = Speller::new(greetings());
        let clone = speller.clone();
        assert!(std::ptr::eq(speller.vocabulary(), clone.vocabulary()));
    }
}
