//! Error types shared by every stage of a solving session.

use thiserror::Error;

/// Why a word list was rejected at load time.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CorpusError {
    #[error("word list contains no words")]
    Empty,
    #[error("line {line}: `{word}` has {found} letters, expected {expected}")]
    MixedLengths {
        line: usize,
        word: String,
        expected: usize,
        found: usize,
    },
    #[error("line {line}: `{word}` contains characters outside a-z")]
    InvalidLetter { line: usize, word: String },
}

/// Why a feedback string was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FeedbackError {
    #[error("expected {expected} marks, got {found}")]
    WrongLength { expected: usize, found: usize },
    #[error("invalid mark `{mark}` at position {position} (use g, y or b)")]
    InvalidMark { mark: char, position: usize },
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid corpus: {0}")]
    InvalidCorpus(#[from] CorpusError),
    #[error("invalid feedback: {0}")]
    InvalidFeedback(#[from] FeedbackError),
    #[error("no candidates remain after `{feedback}` for guess `{guess}` on turn {turn}")]
    CandidateExhaustion {
        guess: String,
        feedback: String,
        turn: usize,
    },
    #[error("session did not finish within {limit} turns")]
    TurnLimit { limit: usize },
    #[error("session is already finished")]
    SessionFinished,
    #[error("feedback supplied before a guess was made")]
    NoPendingGuess,
    #[error("failed to read word list: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
