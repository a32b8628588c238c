//! Candidate vocabulary loading.
//!
//! A vocabulary is an ordered list of words. Order matters: when two words
//! score the same, the earlier one is suggested. Duplicates are kept.

use crate::error::Result;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::debug;

/// Ordered, read-only list of candidate words
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    words: Vec<String>,
}

impl Vocabulary {
    /// Build a vocabulary from in-memory words, keeping their order.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// Read one word per line.
    ///
    /// Handles both `\n` and `\r\n` line endings and skips blank lines.
    /// Lines are otherwise taken verbatim.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut words = Vec::new();
        for line in reader.lines() {
            let line = line?;
            let word = line.strip_suffix('\r').unwrap_or(&line);
            if !word.is_empty() {
                words.push(word.to_string());
            }
        }
        debug!(words = words.len(), "loaded vocabulary");
        Ok(Self { words })
    }

    /// Read a word list file, one word per line.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "opening vocabulary file");
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.words
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for Vocabulary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_words(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::io::{Cursor, Write};

    #[test]
    fn test_from_words_keeps_order_and_duplicates() {
        let vocab = Vocabulary::from_words(["b", "a", "b"]);
        assert_eq!(vocab.as_slice(), ["b", "a", "b"]);
        assert_eq!(vocab.len(), 3);
        assert!(!vocab.is_empty());
    }

    #[test]
    fn test_from_reader_crlf() {
        let vocab = Vocabulary::from_reader(Cursor::new("apple\r\nbanana\r\ncherry\r\n")).unwrap();
        assert_eq!(vocab.iter().collect::<Vec<_>>(), ["apple", "banana", "cherry"]);
    }

    #[test]
    fn test_from_reader_lf_and_blank_lines() {
        let vocab = Vocabulary::from_reader(Cursor::new("apple\n\nbanana\n\r\n")).unwrap();
        assert_eq!(vocab.as_slice(), ["apple", "banana"]);
    }

    #[test]
    fn test_from_reader_unicode() {
        let vocab = Vocabulary::from_reader(Cursor::new("café\r\n日本語")).unwrap();
        assert_eq!(vocab.as_slice(), ["café", "日本語"]);
    }

    #[test]
    fn test_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "alumni\r\nhello\r\n").unwrap();
        let vocab = Vocabulary::from_path(file.path()).unwrap();
        assert_eq!(vocab.as_slice(), ["alumni", "hello"]);
    }

    #[test]
    fn test_from_missing_path() {
        let dir = tempfile::tempdir().unwrap();
        let result = Vocabulary::from_path(dir.path().join("missing.txt"));
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn test_collect() {
        let vocab: Vocabulary = vec!["x".to_string(), "y".to_string()].into_iter().collect();
        assert_eq!(vocab.len(), 2);
        assert!(Vocabulary::default().is_empty());
    }
}
