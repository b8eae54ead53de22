//! Per-position letter frequencies over a candidate set.

use crate::corpus::{CandidateSet, Word};

const ALPHABET: usize = 26;

/// Relative frequency of each letter at each position.
///
/// Empty (no positions at all) when built from an empty candidate set.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionDistribution {
    positions: Vec<[f64; ALPHABET]>,
}

impl PositionDistribution {
    /// Count letters per position across `candidates` and normalise by the
    /// number of candidates. Always rebuilt from scratch.
    pub fn build(candidates: &CandidateSet) -> Self {
        Self::from_words(candidates.words())
    }

    pub fn from_words(words: &[Word]) -> Self {
        let Some(first) = words.first() else {
            return Self {
                positions: Vec::new(),
            };
        };

        let mut counts = vec![[0u32; ALPHABET]; first.len()];
        for word in words {
            for (slot, &letter) in counts.iter_mut().zip(word.as_bytes()) {
                slot[(letter - b'a') as usize] += 1;
            }
        }

        let total = words.len() as f64;
        let positions = counts
            .into_iter()
            .map(|slot| slot.map(|count| count as f64 / total))
            .collect();
        Self { positions }
    }

    /// Probability of `letter` at `position`; zero when unseen or out of range.
    pub fn probability(&self, position: usize, letter: u8) -> f64 {
        if !letter.is_ascii_lowercase() {
            return 0.0;
        }
        self.positions
            .get(position)
            .map_or(0.0, |slot| slot[(letter - b'a') as usize])
    }

    /// Number of positions covered; zero for an empty distribution.
    pub fn word_length(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Letters seen at `position` with their probabilities, in alphabetical order.
    pub fn letters_at(&self, position: usize) -> impl Iterator<Item = (char, f64)> + '_ {
        self.positions
            .get(position)
            .into_iter()
            .flat_map(|slot| slot.iter().enumerate())
            .filter(|&(_, &p)| p > 0.0)
            .map(|(i, &p)| ((b'a' + i as u8) as char, p))
    }
}
