//! # Wordle Entropy
//!
//! A Wordle solver that picks each guess by a per-position letter entropy
//! heuristic, narrows the candidate list from the feedback, and can
//! benchmark itself against every word in its corpus.

pub mod corpus;
pub mod entropy;
pub mod error;
pub mod evaluator;
pub mod feedback;
pub mod filter;
pub mod model;
pub mod solver;

pub use corpus::{CandidateSet, Corpus, Word};
pub use entropy::GuessAnalysis;
pub use error::{CorpusError, Error, FeedbackError, Result};
pub use evaluator::{EvaluationReport, Evaluator, EvaluatorConfig};
pub use feedback::{Feedback, FeedbackRule, Mark};
pub use model::PositionDistribution;
pub use solver::{FeedbackSource, Phase, Session, SessionReport, SolverConfig, SyntheticFeedback};
