//! Self-play benchmark.
//!
//! Every corpus word is used once as the hidden solution for a fresh session
//! with synthetic feedback. Sessions share nothing mutable, so they fan out
//! over rayon; results are gathered in corpus order and summed afterwards, so
//! the parallel and sequential runs report identical numbers.
//!
//! A session that fails (exhausted candidates, turn limit) is recorded as a
//! per-word failure and left out of the mean; the run itself carries on.

use crate::corpus::{Corpus, Word};
use crate::error::Error;
use crate::solver::{self, SessionReport, SolverConfig};
use log::{info, warn};
use rayon::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvaluatorConfig {
    pub solver: SolverConfig,
    pub parallel: bool,
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            solver: SolverConfig::default(),
            parallel: true,
        }
    }
}

/// A word the solver could not finish.
#[derive(Debug)]
pub struct SessionFailure {
    pub word: Word,
    pub error: Error,
}

#[derive(Debug)]
pub struct EvaluationReport {
    pub total_words: usize,
    pub solved: usize,
    pub total_turns: usize,
    /// `(turns, words solved in that many turns)`, ascending by turns.
    pub distribution: Vec<(usize, usize)>,
    pub failures: Vec<SessionFailure>,
}

impl EvaluationReport {
    /// Mean turns over solved words.
    pub fn mean_turns(&self) -> Option<f64> {
        if self.solved == 0 {
            return None;
        }
        Some(self.total_turns as f64 / self.solved as f64)
    }

    /// Mean turns rounded to three decimal places, exact halves to even.
    pub fn rounded_mean(&self) -> Option<f64> {
        self.mean_turns()
            .map(|mean| (mean * 1000.0).round_ties_even() / 1000.0)
    }

    pub fn max_turns(&self) -> usize {
        self.distribution.last().map_or(0, |&(turns, _)| turns)
    }
}

pub struct Evaluator {
    corpus: Corpus,
    config: EvaluatorConfig,
}

impl Evaluator {
    pub fn new(corpus: Corpus, config: EvaluatorConfig) -> Self {
        Self { corpus, config }
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    /// Solve for a single target word.
    pub fn solve(&self, target: &Word) -> Result<SessionReport, Error> {
        solver::solve_for_target(&self.corpus, target, &self.config.solver)
    }

    pub fn run(&self) -> EvaluationReport {
        let outcomes: Vec<(&Word, Result<SessionReport, Error>)> = if self.config.parallel {
            self.corpus
                .words()
                .par_iter()
                .map(|target| (target, self.solve(target)))
                .collect()
        } else {
            self.corpus
                .words()
                .iter()
                .map(|target| (target, self.solve(target)))
                .collect()
        };

        let mut counts: Vec<usize> = Vec::new();
        let mut failures = Vec::new();
        let mut total_turns = 0;
        let mut solved = 0;

        for (target, outcome) in outcomes {
            match outcome {
                Ok(report) => {
                    if counts.len() <= report.turns {
                        counts.resize(report.turns + 1, 0);
                    }
                    counts[report.turns] += 1;
                    total_turns += report.turns;
                    solved += 1;
                }
                Err(error) => {
                    warn!("failed to solve {}: {}", target, error);
                    failures.push(SessionFailure {
                        word: target.clone(),
                        error,
                    });
                }
            }
        }

        let distribution = counts
            .into_iter()
            .enumerate()
            .filter(|(_, count)| *count > 0)
            .collect();

        let report = EvaluationReport {
            total_words: self.corpus.len(),
            solved,
            total_turns,
            distribution,
            failures,
        };
        info!(
            "evaluated {} words: {} solved, {} failed, mean {:?} turns",
            report.total_words,
            report.solved,
            report.failures.len(),
            report.rounded_mean()
        );
        report
    }
}
