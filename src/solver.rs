//! The turn loop.
//!
//! A [`Session`] plays one game from the full corpus down to a solution. Each
//! turn it rebuilds the letter distribution from the remaining candidates,
//! guesses the highest scoring word, waits for feedback and filters. The loop
//! is an explicit state machine:
//!
//! ```text
//! Initial -> Guessing -> AwaitingFeedback -> Filtering -> Guessing
//!                                                      -> Solved
//!                                                      -> Exhausted
//! ```
//!
//! Every non-winning feedback eliminates at least the guess itself, so a
//! session over `n` words needs at most `n` turns; [`SolverConfig::max_turns`]
//! is only a guard.

use crate::corpus::{CandidateSet, Corpus, Word};
use crate::entropy::{self, GuessAnalysis};
use crate::error::{Error, FeedbackError, Result};
use crate::feedback::{Feedback, FeedbackRule};
use crate::filter;
use crate::model::PositionDistribution;
use log::{debug, info};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SolverConfig {
    /// Turn limit for one session; `None` means the corpus size.
    pub max_turns: Option<usize>,
    /// Generator used when feedback is synthesised from a known solution.
    pub feedback_rule: FeedbackRule,
}

/// Supplies feedback for each guess. Blocks until it has an answer.
pub trait FeedbackSource {
    /// `remaining` is the candidate count the guess was chosen from.
    fn feedback(&mut self, guess: &GuessAnalysis, remaining: usize) -> Result<Feedback>;
}

impl<F> FeedbackSource for F
where
    F: FnMut(&GuessAnalysis, usize) -> Result<Feedback>,
{
    fn feedback(&mut self, guess: &GuessAnalysis, remaining: usize) -> Result<Feedback> {
        self(guess, remaining)
    }
}

/// Feedback computed against a known solution.
#[derive(Debug, Clone)]
pub struct SyntheticFeedback {
    solution: Word,
    rule: FeedbackRule,
}

impl SyntheticFeedback {
    pub fn new(solution: Word, rule: FeedbackRule) -> Self {
        Self { solution, rule }
    }

    pub fn solution(&self) -> &Word {
        &self.solution
    }
}

impl FeedbackSource for SyntheticFeedback {
    fn feedback(&mut self, guess: &GuessAnalysis, _remaining: usize) -> Result<Feedback> {
        if self.solution.len() != guess.word.len() {
            return Err(FeedbackError::WrongLength {
                expected: guess.word.len(),
                found: self.solution.len(),
            }
            .into());
        }
        Ok(self.rule.score(&guess.word, &self.solution))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Initial,
    Guessing,
    AwaitingFeedback,
    Filtering,
    Solved,
    Exhausted,
}

impl Phase {
    pub fn is_terminal(self) -> bool {
        matches!(self, Phase::Solved | Phase::Exhausted)
    }
}

/// Mutable state of one session.
#[derive(Debug, Clone)]
pub struct SolverState {
    pub candidates: CandidateSet,
    pub turn: usize,
    pub last_guess: Option<Word>,
    pub last_feedback: Option<Feedback>,
    pub solved: bool,
}

/// One completed turn.
#[derive(Debug, Clone)]
pub struct TurnRecord {
    pub guess: Word,
    pub entropy: f64,
    /// Candidates before this turn's feedback was applied.
    pub remaining: usize,
    pub feedback: Feedback,
}

/// Outcome of a solved session.
#[derive(Debug, Clone)]
pub struct SessionReport {
    pub solution: Word,
    pub turns: usize,
    pub history: Vec<TurnRecord>,
}

#[derive(Debug, Clone)]
pub struct Session {
    state: SolverState,
    phase: Phase,
    max_turns: usize,
    word_length: usize,
    pending: Option<GuessAnalysis>,
    history: Vec<TurnRecord>,
}

impl Session {
    pub fn new(corpus: &Corpus, config: &SolverConfig) -> Self {
        Self {
            state: SolverState {
                candidates: corpus.candidates(),
                turn: 0,
                last_guess: None,
                last_feedback: None,
                solved: false,
            },
            phase: Phase::Initial,
            max_turns: config.max_turns.unwrap_or(corpus.len()),
            word_length: corpus.word_length(),
            pending: None,
            history: Vec::new(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn state(&self) -> &SolverState {
        &self.state
    }

    pub fn history(&self) -> &[TurnRecord] {
        &self.history
    }

    pub fn remaining_count(&self) -> usize {
        self.state.candidates.len()
    }

    pub fn word_length(&self) -> usize {
        self.word_length
    }

    /// Pick and emit this turn's guess. Asking again before feedback arrives
    /// returns the same guess without starting a new turn.
    pub fn next_guess(&mut self) -> Result<GuessAnalysis> {
        match self.phase {
            Phase::AwaitingFeedback => {
                if let Some(pending) = &self.pending {
                    return Ok(pending.clone());
                }
            }
            Phase::Solved | Phase::Exhausted => return Err(Error::SessionFinished),
            _ => {}
        }

        self.phase = Phase::Guessing;
        if self.state.turn >= self.max_turns {
            self.phase = Phase::Exhausted;
            return Err(Error::TurnLimit {
                limit: self.max_turns,
            });
        }

        let dist = PositionDistribution::build(&self.state.candidates);
        let Some(best) = entropy::select_best(&self.state.candidates, &dist) else {
            self.phase = Phase::Exhausted;
            return Err(self.exhaustion());
        };

        self.state.turn += 1;
        debug!(
            "turn {}: guess {} (entropy {:.3}, {} candidates)",
            self.state.turn,
            best.word,
            best.entropy,
            self.state.candidates.len()
        );

        self.pending = Some(best.clone());
        self.phase = Phase::AwaitingFeedback;
        Ok(best)
    }

    /// Apply feedback for the pending guess and return the resulting phase.
    pub fn submit_feedback(&mut self, feedback: Feedback) -> Result<Phase> {
        match self.phase {
            Phase::AwaitingFeedback => {}
            Phase::Solved | Phase::Exhausted => return Err(Error::SessionFinished),
            _ => return Err(Error::NoPendingGuess),
        }
        let guess = self.pending.take().ok_or(Error::NoPendingGuess)?;

        if feedback.len() != self.word_length {
            self.phase = Phase::Exhausted;
            return Err(FeedbackError::WrongLength {
                expected: self.word_length,
                found: feedback.len(),
            }
            .into());
        }

        self.phase = Phase::Filtering;
        let won = feedback.is_win();
        let remaining = self.state.candidates.len();
        let candidates = std::mem::take(&mut self.state.candidates);
        self.state.candidates = filter::apply(&guess.word, &feedback, candidates)?;

        self.history.push(TurnRecord {
            guess: guess.word.clone(),
            entropy: guess.entropy,
            remaining,
            feedback: feedback.clone(),
        });
        self.state.last_guess = Some(guess.word);
        self.state.last_feedback = Some(feedback);

        if won {
            self.state.solved = true;
            self.phase = Phase::Solved;
        } else if self.state.candidates.is_empty() {
            self.phase = Phase::Exhausted;
            return Err(self.exhaustion());
        } else {
            self.phase = Phase::Guessing;
        }
        Ok(self.phase)
    }

    /// Drive the session to completion.
    pub fn run<S: FeedbackSource + ?Sized>(mut self, source: &mut S) -> Result<SessionReport> {
        loop {
            let guess = self.next_guess()?;
            let feedback = match source.feedback(&guess, self.remaining_count()) {
                Ok(feedback) => feedback,
                Err(err) => {
                    self.phase = Phase::Exhausted;
                    return Err(err);
                }
            };
            if self.submit_feedback(feedback)? == Phase::Solved {
                return Ok(self.into_report());
            }
        }
    }

    fn exhaustion(&self) -> Error {
        Error::CandidateExhaustion {
            guess: self.state.last_guess.as_ref().map(Word::to_string).unwrap_or_default(),
            feedback: self.state.last_feedback.as_ref().map(Feedback::to_string).unwrap_or_default(),
            turn: self.state.turn,
        }
    }

    fn into_report(self) -> SessionReport {
        let solution = self.state.last_guess.unwrap_or_default();
        info!("solved {} in {} turns", solution, self.state.turn);
        SessionReport {
            solution,
            turns: self.state.turn,
            history: self.history,
        }
    }
}

/// Solve for a known solution using the configured synthetic feedback.
pub fn solve_for_target(corpus: &Corpus, target: &Word, config: &SolverConfig) -> Result<SessionReport> {
    let mut source = SyntheticFeedback::new(target.clone(), config.feedback_rule);
    Session::new(corpus, config).run(&mut source)
}
