//! Word lists.
//!
//! A [`Corpus`] is the fixed universe of equal-length words a run works with.
//! It is never mutated after loading; each solving session takes its own
//! [`CandidateSet`] copy and narrows that instead.

use crate::error::{CorpusError, Result};
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// A lowercase ASCII word.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word(String);

impl Word {
    /// Parse a word, lowercasing it. Returns `None` for empty input or
    /// anything outside a-z.
    pub fn parse(s: &str) -> Option<Self> {
        let word = s.trim().to_ascii_lowercase();
        if word.is_empty() || !word.bytes().all(|b| b.is_ascii_lowercase()) {
            return None;
        }
        Some(Self(word))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, letter: u8) -> bool {
        self.0.as_bytes().contains(&letter)
    }

    pub fn count(&self, letter: u8) -> usize {
        self.0.bytes().filter(|&b| b == letter).count()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// The full, validated word list for a run.
#[derive(Debug, Clone)]
pub struct Corpus {
    words: Vec<Word>,
    word_length: usize,
}

impl Corpus {
    /// Build a corpus from in-memory words. Blank entries are skipped.
    pub fn from_words<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut parsed = Vec::new();
        let mut word_length = None;

        for (index, raw) in words.into_iter().enumerate() {
            let raw = raw.as_ref().trim();
            if raw.is_empty() {
                continue;
            }
            let line = index + 1;
            let word = Word::parse(raw).ok_or_else(|| CorpusError::InvalidLetter {
                line,
                word: raw.to_string(),
            })?;

            let expected = *word_length.get_or_insert(word.len());
            if word.len() != expected {
                return Err(CorpusError::MixedLengths {
                    line,
                    word: raw.to_string(),
                    expected,
                    found: word.len(),
                }
                .into());
            }
            parsed.push(word);
        }

        match word_length {
            Some(word_length) => Ok(Self {
                words: parsed,
                word_length,
            }),
            None => Err(CorpusError::Empty.into()),
        }
    }

    /// Load a newline-delimited word list.
    pub fn load<R: BufRead>(reader: R) -> Result<Self> {
        let lines = reader.lines().collect::<std::io::Result<Vec<_>>>()?;
        Self::from_words(lines)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Self::load(BufReader::new(file))
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn word_length(&self) -> usize {
        self.word_length
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false for a loaded corpus.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }

    /// A fresh candidate set covering the whole corpus.
    pub fn candidates(&self) -> CandidateSet {
        CandidateSet {
            words: self.words.clone(),
        }
    }
}

/// The words still consistent with every feedback seen in a session.
///
/// Keeps the corpus order, which is what guess tie-breaking relies on. The
/// set only ever shrinks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateSet {
    words: Vec<Word>,
}

impl CandidateSet {
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }

    pub(crate) fn retain<F: FnMut(&Word) -> bool>(&mut self, keep: F) {
        self.words.retain(keep);
    }
}

impl<'a> IntoIterator for &'a CandidateSet {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}
