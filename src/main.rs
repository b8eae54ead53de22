//! Wordle Entropy CLI
//!
//! Interactive solver, single-word solve, opening suggestions and the
//! self-play benchmark.

use anyhow::{bail, Context};
use clap::{Parser, Subcommand, ValueEnum};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::{Duration, Instant};
use wordle_entropy::{
    entropy, Corpus, Evaluator, EvaluatorConfig, Feedback, FeedbackRule, FeedbackSource,
    GuessAnalysis, PositionDistribution, Session, SolverConfig, Word,
};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Newline-delimited word list, all words the same length
    #[arg(short, long, global = true, default_value = "data/words.txt")]
    words: PathBuf,

    /// Log every turn
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Solve interactively, entering feedback as g/y/b strings
    Play,
    /// Solve for a known word
    Solve {
        target: String,
        #[arg(long, value_enum, default_value_t = Rule::Naive)]
        rule: Rule,
    },
    /// Show the best opening guesses
    Suggest {
        #[arg(short, default_value = "5")]
        n: usize,
    },
    /// Solve every word in the list and report the mean number of turns
    Bench {
        #[arg(long, value_enum, default_value_t = Rule::Naive)]
        rule: Rule,
        /// Run sessions one after another instead of in parallel
        #[arg(long)]
        sequential: bool,
        /// Give up on a word after this many turns
        #[arg(long)]
        max_turns: Option<usize>,
    },
}

/// How synthetic feedback treats repeated letters
#[derive(ValueEnum, Debug, Clone, Copy)]
enum Rule {
    /// Each position checked on its own
    Naive,
    /// Game scoring, repeated letters counted
    Standard,
}

impl From<Rule> for FeedbackRule {
    fn from(rule: Rule) -> Self {
        match rule {
            Rule::Naive => FeedbackRule::Naive,
            Rule::Standard => FeedbackRule::Standard,
        }
    }
}

const SPINNER_FRAMES: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

/// Run `work` while animating `message` on stderr; returns its result and
/// how long it took.
fn with_progress<T: Send>(message: &str, work: impl FnOnce() -> T + Send) -> (T, Duration) {
    let done = AtomicBool::new(false);
    let start = Instant::now();

    let result = thread::scope(|scope| {
        scope.spawn(|| {
            let mut stderr = io::stderr();
            for frame in SPINNER_FRAMES.iter().cycle() {
                if done.load(Ordering::Relaxed) {
                    break;
                }
                let _ = write!(stderr, "\r{} {}", frame, message);
                let _ = stderr.flush();
                thread::sleep(Duration::from_millis(80));
            }
            let _ = write!(stderr, "\r{}\r", " ".repeat(message.chars().count() + 2));
            let _ = stderr.flush();
        });

        let result = work();
        done.store(true, Ordering::Relaxed);
        result
    });

    (result, start.elapsed())
}

/// The per-turn progress line, counting the other words still in play
/// besides the guess.
fn progress_line(guess: &GuessAnalysis, remaining: usize) -> String {
    format!(
        "Best word: {} of entropy: {:.3}. Remaining words: {}",
        guess.word.as_str().to_uppercase(),
        guess.entropy,
        remaining.saturating_sub(1)
    )
}

/// Reads feedback for each guess from stdin.
struct Prompt {
    word_length: usize,
}

impl FeedbackSource for Prompt {
    fn feedback(&mut self, guess: &GuessAnalysis, remaining: usize) -> wordle_entropy::Result<Feedback> {
        println!("{}", progress_line(guess, remaining));
        print!("Enter a response: ");
        io::stdout().flush()?;

        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        Ok(Feedback::parse(line.trim(), self.word_length)?)
    }
}

fn run_interactive(corpus: &Corpus) -> anyhow::Result<()> {
    println!("Loaded {} words.", corpus.len());
    println!("Enter feedback as {} marks: g=green, y=yellow, b=gray.", corpus.word_length());
    println!();

    let mut prompt = Prompt {
        word_length: corpus.word_length(),
    };
    let report = Session::new(corpus, &SolverConfig::default()).run(&mut prompt)?;

    println!();
    println!(
        "Solved: {} in {} guesses.",
        report.solution.as_str().to_uppercase(),
        report.turns
    );
    Ok(())
}

fn run_solve(corpus: &Corpus, target: &str, rule: Rule) -> anyhow::Result<()> {
    let Some(target) = Word::parse(target) else {
        bail!("`{}` is not a word", target);
    };
    if target.len() != corpus.word_length() {
        bail!("Word must be {} letters.", corpus.word_length());
    }

    println!("Solving for: {}", target.as_str().to_uppercase());
    println!();

    let config = SolverConfig {
        feedback_rule: rule.into(),
        ..SolverConfig::default()
    };
    let report = wordle_entropy::solver::solve_for_target(corpus, &target, &config)
        .with_context(|| format!("failed to solve for {}", target))?;

    for (i, turn) in report.history.iter().enumerate() {
        println!(
            "Guess {}: {} → {}  ({:.3} bits, {} candidates)",
            i + 1,
            turn.guess.as_str().to_uppercase(),
            turn.feedback.to_emoji_string(),
            turn.entropy,
            turn.remaining
        );
    }
    println!();
    println!("Solved in {} guesses.", report.turns);
    Ok(())
}

fn run_suggest(corpus: &Corpus, n: usize) {
    let candidates = corpus.candidates();
    let dist = PositionDistribution::build(&candidates);
    let top = entropy::rank(&candidates, &dist, n);

    println!("{:>4} {:>8} {:>8}", "#", "Word", "Entropy");
    println!("{}", "-".repeat(22));
    for (i, analysis) in top.iter().enumerate() {
        println!(
            "{:>4} {:>8} {:>8.3}",
            i + 1,
            analysis.word.as_str().to_uppercase(),
            analysis.entropy
        );
    }
}

fn run_bench(corpus: Corpus, rule: Rule, sequential: bool, max_turns: Option<usize>) {
    println!("Running benchmark on all {} words...", corpus.len());

    let config = EvaluatorConfig {
        solver: SolverConfig {
            max_turns,
            feedback_rule: rule.into(),
        },
        parallel: !sequential,
    };
    let evaluator = Evaluator::new(corpus, config);

    let (report, elapsed) = with_progress("Computing...", || evaluator.run());

    println!("Guess distribution:");
    for (turns, count) in &report.distribution {
        let pct = *count as f64 / report.total_words as f64 * 100.0;
        let bar = "█".repeat((*count * 40 / report.total_words).max(1));
        println!("  {:>2} guesses: {:>5} ({:>5.1}%) {}", turns, count, pct, bar);
    }
    println!();
    if !report.failures.is_empty() {
        println!("Failed words: {}", report.failures.len());
        for failure in report.failures.iter().take(10) {
            println!("  {}: {}", failure.word, failure.error);
        }
    }
    println!("Time: {:.2?}", elapsed);
    match report.rounded_mean() {
        Some(mean) => println!("Average guesses: {:.3}", mean),
        None => println!("Average guesses: n/a"),
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();

    let corpus = Corpus::from_path(&args.words)
        .with_context(|| format!("loading word list {}", args.words.display()))?;

    match args.command.unwrap_or(Command::Play) {
        Command::Play => run_interactive(&corpus)?,
        Command::Solve { target, rule } => run_solve(&corpus, &target, rule)?,
        Command::Suggest { n } => run_suggest(&corpus, n),
        Command::Bench {
            rule,
            sequential,
            max_turns,
        } => run_bench(corpus, rule, sequential, max_turns),
    }
    Ok(())
}
