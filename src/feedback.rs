//! Feedback marks for a guess.
//!
//! Feedback arrives either from a human (a `g`/`y`/`b` string) or is generated
//! by comparing a guess against a known solution. Two generators exist:
//! [`Feedback::score_naive`] checks every position independently and is what
//! the benchmark uses by default, while [`Feedback::score_standard`] follows
//! the game's duplicate-letter accounting.

use crate::corpus::Word;
use crate::error::FeedbackError;
use std::fmt;

/// The verdict for a single letter position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    /// Correct letter in correct position (green)
    Exact,
    /// Letter is in the word but elsewhere (yellow)
    Present,
    /// Letter not in the word, or all its occurrences already accounted for (gray)
    Absent,
}

impl Mark {
    /// Convert to a tile for display
    pub fn to_emoji(self) -> char {
        match self {
            Mark::Exact => '🟩',
            Mark::Present => '🟨',
            Mark::Absent => '⬛',
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Mark::Exact => 'g',
            Mark::Present => 'y',
            Mark::Absent => 'b',
        }
    }

    /// Parse from a character (g=green, y=yellow, b=black/gray)
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'g' => Some(Mark::Exact),
            'y' => Some(Mark::Present),
            'b' => Some(Mark::Absent),
            _ => None,
        }
    }
}

/// Which synthetic generator produces feedback in benchmark mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeedbackRule {
    /// Independent per-position check, see [`Feedback::score_naive`].
    #[default]
    Naive,
    /// Duplicate-aware game scoring, see [`Feedback::score_standard`].
    Standard,
}

impl FeedbackRule {
    pub fn score(self, guess: &Word, solution: &Word) -> Feedback {
        match self {
            FeedbackRule::Naive => Feedback::score_naive(guess, solution),
            FeedbackRule::Standard => Feedback::score_standard(guess, solution),
        }
    }
}

/// A complete feedback pattern, one mark per letter of the guess.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Feedback(Vec<Mark>);

impl Feedback {
    pub fn new(marks: Vec<Mark>) -> Self {
        Self(marks)
    }

    /// Feedback for a correct guess of the given length.
    pub fn all_exact(len: usize) -> Self {
        Self(vec![Mark::Exact; len])
    }

    /// Parse a string like "gybbb" for a word of `len` letters.
    pub fn parse(s: &str, len: usize) -> Result<Self, FeedbackError> {
        let found = s.chars().count();
        if found != len {
            return Err(FeedbackError::WrongLength {
                expected: len,
                found,
            });
        }
        s.chars()
            .enumerate()
            .map(|(position, mark)| {
                Mark::from_char(mark).ok_or(FeedbackError::InvalidMark { mark, position })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }

    /// Literal per-position comparison: `Exact` on a match, `Present` if the
    /// guess letter occurs anywhere in the solution, `Absent` otherwise.
    ///
    /// Repeated guess letters are each judged on their own, so "eerie"
    /// against "crane" marks all three `e`s although the solution has one.
    pub fn score_naive(guess: &Word, solution: &Word) -> Self {
        let marks = guess
            .as_bytes()
            .iter()
            .zip(solution.as_bytes())
            .map(|(&g, &s)| {
                if g == s {
                    Mark::Exact
                } else if solution.contains(g) {
                    Mark::Present
                } else {
                    Mark::Absent
                }
            })
            .collect();
        Self(marks)
    }

    /// Game scoring: exact matches first, then `Present` for remaining
    /// occurrences up to the count left in the solution, surplus `Absent`.
    ///
    /// Like [`Feedback::score_naive`], only the overlapping prefix of two
    /// words of different lengths is scored.
    pub fn score_standard(guess: &Word, solution: &Word) -> Self {
        let pairs: Vec<(u8, u8)> = guess
            .as_bytes()
            .iter()
            .copied()
            .zip(solution.as_bytes().iter().copied())
            .collect();

        // solution letters not already matched in place
        let mut unmatched = [0u8; 26];
        for &(g, s) in &pairs {
            if g != s {
                unmatched[(s - b'a') as usize] += 1;
            }
        }

        let marks = pairs
            .iter()
            .map(|&(g, s)| {
                if g == s {
                    return Mark::Exact;
                }
                let left = &mut unmatched[(g - b'a') as usize];
                if *left > 0 {
                    *left -= 1;
                    Mark::Present
                } else {
                    Mark::Absent
                }
            })
            .collect();
        Self(marks)
    }

    pub fn marks(&self) -> &[Mark] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check if this pattern represents a win (all exact)
    pub fn is_win(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|&m| m == Mark::Exact)
    }

    /// Display as emoji string
    pub fn to_emoji_string(&self) -> String {
        self.0.iter().map(|m| m.to_emoji()).collect()
    }
}

/// Formats as the `g`/`y`/`b` string accepted by [`Feedback::parse`].
impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for mark in &self.0 {
            write!(f, "{}", mark.to_char())?;
        }
        Ok(())
    }
}
