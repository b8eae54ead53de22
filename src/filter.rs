//! Candidate elimination from a guess and its feedback.
//!
//! Marks are grouped per distinct guess letter before anything is checked.
//! For a letter marked only `Absent`, candidates must not contain it at all.
//! When the same letter carries both `Absent` and `Exact`/`Present` marks,
//! the `Absent` ones only mean "not here" plus a cap: the candidate holds
//! exactly as many copies as there were non-absent marks. Otherwise each mark
//! keeps its plain per-position meaning.

use crate::corpus::{CandidateSet, Word};
use crate::error::FeedbackError;
use crate::feedback::{Feedback, Mark};

/// Everything one guess/feedback pair says about a single letter.
#[derive(Debug, Clone, PartialEq, Eq)]
struct LetterRule {
    letter: u8,
    exact_at: Vec<usize>,
    not_at: Vec<usize>,
    min_count: usize,
    max_count: Option<usize>,
}

impl LetterRule {
    fn new(letter: u8) -> Self {
        Self {
            letter,
            exact_at: Vec::new(),
            not_at: Vec::new(),
            min_count: 0,
            max_count: None,
        }
    }

    fn matches(&self, word: &[u8]) -> bool {
        if self.exact_at.iter().any(|&p| word[p] != self.letter) {
            return false;
        }
        if self.not_at.iter().any(|&p| word[p] == self.letter) {
            return false;
        }
        let count = word.iter().filter(|&&b| b == self.letter).count();
        count >= self.min_count && self.max_count.map_or(true, |max| count <= max)
    }
}

/// The constraints implied by a single guess and its feedback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constraints {
    word_length: usize,
    rules: Vec<LetterRule>,
}

impl Constraints {
    pub fn new(guess: &Word, feedback: &Feedback) -> Result<Self, FeedbackError> {
        if feedback.len() != guess.len() {
            return Err(FeedbackError::WrongLength {
                expected: guess.len(),
                found: feedback.len(),
            });
        }

        let mut rules: Vec<LetterRule> = Vec::new();
        for &letter in guess.as_bytes() {
            if rules.iter().all(|r| r.letter != letter) {
                rules.push(LetterRule::new(letter));
            }
        }

        for rule in &mut rules {
            let mut non_absent = 0;
            let mut absent_at = Vec::new();
            for (position, (&letter, &mark)) in
                guess.as_bytes().iter().zip(feedback.marks()).enumerate()
            {
                if letter != rule.letter {
                    continue;
                }
                match mark {
                    Mark::Exact => {
                        rule.exact_at.push(position);
                        non_absent += 1;
                    }
                    Mark::Present => {
                        rule.not_at.push(position);
                        rule.min_count = 1;
                        non_absent += 1;
                    }
                    Mark::Absent => absent_at.push(position),
                }
            }

            if absent_at.is_empty() {
                continue;
            }
            if non_absent == 0 {
                rule.max_count = Some(0);
            } else {
                rule.not_at.extend(absent_at);
                rule.min_count = non_absent;
                rule.max_count = Some(non_absent);
            }
        }

        Ok(Self {
            word_length: guess.len(),
            rules,
        })
    }

    /// Whether `word` is consistent with the feedback.
    pub fn matches(&self, word: &Word) -> bool {
        let bytes = word.as_bytes();
        bytes.len() == self.word_length && self.rules.iter().all(|rule| rule.matches(bytes))
    }
}

/// Drop every candidate inconsistent with `feedback` for `guess`.
///
/// The result may be empty; deciding what that means is up to the caller.
pub fn apply(
    guess: &Word,
    feedback: &Feedback,
    mut candidates: CandidateSet,
) -> Result<CandidateSet, FeedbackError> {
    let constraints = Constraints::new(guess, feedback)?;
    candidates.retain(|word| constraints.matches(word));
    Ok(candidates)
}
