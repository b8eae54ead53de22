//! Guess scoring.
//!
//! A word's score is the sum over positions of `-p * log2(p)`, where `p` is
//! the frequency of the word's letter at that position among the remaining
//! candidates. This treats positions as independent, so it approximates the
//! information a guess yields rather than computing the joint entropy of the
//! feedback distribution.

use crate::corpus::{CandidateSet, Word};
use crate::model::PositionDistribution;
use rayon::prelude::*;

/// A scored guess
#[derive(Debug, Clone, PartialEq)]
pub struct GuessAnalysis {
    pub word: Word,
    pub entropy: f64,
}

/// Score a word against a distribution. Letters with probability zero
/// contribute nothing.
pub fn score(word: &Word, dist: &PositionDistribution) -> f64 {
    word.as_bytes()
        .iter()
        .enumerate()
        .map(|(position, &letter)| {
            let p = dist.probability(position, letter);
            if p > 0.0 {
                -p * p.log2()
            } else {
                0.0
            }
        })
        .sum()
}

/// The highest scoring candidate. Ties go to whichever comes first in
/// candidate order. `None` only for an empty candidate set.
pub fn select_best(candidates: &CandidateSet, dist: &PositionDistribution) -> Option<GuessAnalysis> {
    let mut best: Option<GuessAnalysis> = None;
    for word in candidates {
        let entropy = score(word, dist);
        if best.as_ref().map_or(true, |b| entropy > b.entropy) {
            best = Some(GuessAnalysis {
                word: word.clone(),
                entropy,
            });
        }
    }
    best
}

/// The `n` highest scoring candidates, best first, ties in candidate order.
pub fn rank(candidates: &CandidateSet, dist: &PositionDistribution, n: usize) -> Vec<GuessAnalysis> {
    let mut analyses: Vec<GuessAnalysis> = candidates
        .words()
        .par_iter()
        .map(|word| GuessAnalysis {
            word: word.clone(),
            entropy: score(word, dist),
        })
        .collect();

    // stable: equal scores keep candidate order
    analyses.sort_by(|a, b| b.entropy.total_cmp(&a.entropy));
    analyses.truncate(n);
    analyses
}
