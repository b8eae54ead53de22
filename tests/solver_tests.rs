use std::io::Cursor;
use wordle_entropy::solver::solve_for_target;
use wordle_entropy::{
    Corpus, Error, Feedback, FeedbackError, FeedbackRule, GuessAnalysis, Mark, Phase, Session,
    SolverConfig, SyntheticFeedback, Word,
};

fn get_test_words() -> Corpus {
    Corpus::from_words([
        "crane", "slate", "trace", "crate", "raise", "arise", "stare", "roast", "toast", "beast",
    ])
    .unwrap()
}

fn small_corpus() -> Corpus {
    Corpus::from_words(["apple", "angle", "ankle", "table"]).unwrap()
}

fn word(s: &str) -> Word {
    Word::parse(s).unwrap()
}

#[test]
fn test_session_creation() {
    let corpus = get_test_words();
    let session = Session::new(&corpus, &SolverConfig::default());
    assert_eq!(session.phase(), Phase::Initial);
    assert_eq!(session.remaining_count(), corpus.len());
    assert_eq!(session.state().turn, 0);
    assert!(session.state().last_guess.is_none());
    assert!(!session.state().solved);
}

#[test]
fn test_turn_by_turn() {
    let corpus = small_corpus();
    let mut session = Session::new(&corpus, &SolverConfig::default());

    let first = session.next_guess().unwrap();
    assert_eq!(first.word, word("table"));
    assert_eq!(session.phase(), Phase::AwaitingFeedback);
    assert_eq!(session.state().turn, 1);

    // asking again does not start a new turn
    assert_eq!(session.next_guess().unwrap(), first);
    assert_eq!(session.state().turn, 1);

    let phase = session.submit_feedback(Feedback::parse("bybgg", 5).unwrap()).unwrap();
    assert_eq!(phase, Phase::Guessing);
    assert_eq!(session.remaining_count(), 3);
    assert_eq!(session.state().last_guess, Some(word("table")));

    let second = session.next_guess().unwrap();
    assert_eq!(second.word, word("apple"));
    let phase = session.submit_feedback(Feedback::all_exact(5)).unwrap();
    assert_eq!(phase, Phase::Solved);
    assert!(session.state().solved);
    assert_eq!(session.state().turn, 2);
    assert_eq!(session.history().len(), 2);
    assert_eq!(session.history()[0].remaining, 4);
    assert_eq!(session.history()[1].remaining, 3);

    assert!(matches!(session.next_guess(), Err(Error::SessionFinished)));
}

#[test]
fn test_feedback_before_guess() {
    let corpus = small_corpus();
    let mut session = Session::new(&corpus, &SolverConfig::default());
    assert!(matches!(
        session.submit_feedback(Feedback::all_exact(5)),
        Err(Error::NoPendingGuess)
    ));
}

#[test]
fn test_contradictory_feedback_exhausts() {
    let corpus = small_corpus();
    let mut session = Session::new(&corpus, &SolverConfig::default());
    session.next_guess().unwrap();

    match session.submit_feedback(Feedback::parse("ggggb", 5).unwrap()) {
        Err(Error::CandidateExhaustion { guess, feedback, turn }) => {
            assert_eq!(guess, "table");
            assert_eq!(feedback, "ggggb");
            assert_eq!(turn, 1);
        }
        other => panic!("expected exhaustion, got {:?}", other),
    }
    assert_eq!(session.phase(), Phase::Exhausted);
    assert!(session.phase().is_terminal());
    assert!(matches!(session.next_guess(), Err(Error::SessionFinished)));
}

#[test]
fn test_wrong_length_feedback_ends_session() {
    let corpus = small_corpus();
    let mut session = Session::new(&corpus, &SolverConfig::default());
    session.next_guess().unwrap();

    let result = session.submit_feedback(Feedback::new(vec![Mark::Exact; 3]));
    assert!(matches!(
        result,
        Err(Error::InvalidFeedback(FeedbackError::WrongLength { expected: 5, found: 3 }))
    ));
    assert_eq!(session.phase(), Phase::Exhausted);
}

#[test]
fn test_source_error_is_fatal() {
    let corpus = small_corpus();
    let mut calls = 0;
    let mut source = |_: &GuessAnalysis, _: usize| -> wordle_entropy::Result<Feedback> {
        calls += 1;
        Ok(Feedback::parse("gg?gg", 5)?)
    };
    let result = Session::new(&corpus, &SolverConfig::default()).run(&mut source);
    assert!(matches!(
        result,
        Err(Error::InvalidFeedback(FeedbackError::InvalidMark { mark: '?', position: 2 }))
    ));
    assert_eq!(calls, 1);
}

#[test]
fn test_turn_limit() {
    let corpus = small_corpus();
    let config = SolverConfig {
        max_turns: Some(1),
        ..SolverConfig::default()
    };
    let result = solve_for_target(&corpus, &word("ankle"), &config);
    assert!(matches!(result, Err(Error::TurnLimit { limit: 1 })));
}

#[test]
fn test_end_to_end_small_corpus() {
    let corpus = small_corpus();
    let report = solve_for_target(&corpus, &word("apple"), &SolverConfig::default()).unwrap();

    assert_eq!(report.solution, word("apple"));
    assert_eq!(report.turns, 2);
    let guesses: Vec<String> = report.history.iter().map(|t| t.guess.to_string()).collect();
    assert_eq!(guesses, vec!["table", "apple"]);
    assert_eq!(report.history[0].feedback.to_string(), "bybgg");
    assert!(report.history[1].feedback.is_win());
}

#[test]
fn test_solve_for_target() {
    let corpus = get_test_words();
    let report = solve_for_target(&corpus, &word("crate"), &SolverConfig::default()).unwrap();

    assert!(report.turns >= 1);
    assert!(report.turns <= corpus.len());
    assert_eq!(report.solution, word("crate"));
    assert_eq!(report.history.len(), report.turns);
}

#[test]
fn test_solve_various_targets() {
    let corpus = get_test_words();

    for rule in [FeedbackRule::Naive, FeedbackRule::Standard] {
        let config = SolverConfig {
            feedback_rule: rule,
            ..SolverConfig::default()
        };
        for target in corpus.words() {
            let report = solve_for_target(&corpus, target, &config)
                .unwrap_or_else(|e| panic!("failed to solve {}: {}", target, e));
            assert_eq!(&report.solution, target);
            assert!(report.turns <= corpus.len(), "too many guesses for {}", target);

            // every turn strictly narrows the candidates
            for pair in report.history.windows(2) {
                assert!(pair[1].remaining < pair[0].remaining);
            }
        }
    }
}

#[test]
fn test_closure_source() {
    let corpus = get_test_words();
    let target = word("toast");
    let mut guesses = Vec::new();
    let mut source = |guess: &GuessAnalysis, _: usize| -> wordle_entropy::Result<Feedback> {
        guesses.push(guess.word.clone());
        Ok(Feedback::score_standard(&guess.word, &target))
    };

    let report = Session::new(&corpus, &SolverConfig::default())
        .run(&mut source)
        .unwrap();
    assert_eq!(report.solution, target);
    assert_eq!(guesses.len(), report.turns);
}

#[test]
fn test_synthetic_source() {
    let corpus = get_test_words();
    let mut source = SyntheticFeedback::new(word("beast"), FeedbackRule::Naive);
    let report = Session::new(&corpus, &SolverConfig::default())
        .run(&mut source)
        .unwrap();
    assert_eq!(&report.solution, source.solution());
}

#[test]
fn test_single_word_corpus() {
    let corpus = Corpus::from_words(["crane"]).unwrap();
    let report = solve_for_target(&corpus, &word("crane"), &SolverConfig::default()).unwrap();
    assert_eq!(report.turns, 1);
    assert_eq!(report.history[0].entropy, 0.0);
}

#[test]
fn test_bundled_word_list() {
    let corpus = Corpus::load(Cursor::new(include_str!("../data/words.txt"))).unwrap();
    for target in ["crane", "geese", "eerie", "youth"] {
        let report = solve_for_target(&corpus, &word(target), &SolverConfig::default()).unwrap();
        assert_eq!(report.solution, word(target));
    }
}

#[test]
fn test_solve_for_target_of_other_length() {
    let corpus = Corpus::from_words(["crane", "slate"]).unwrap();
    for feedback_rule in [FeedbackRule::Naive, FeedbackRule::Standard] {
        let config = SolverConfig {
            feedback_rule,
            ..SolverConfig::default()
        };
        let result = solve_for_target(&corpus, &word("cat"), &config);
        assert!(
            matches!(
                result,
                Err(Error::InvalidFeedback(FeedbackError::WrongLength {
                    expected: 5,
                    found: 3
                }))
            ),
            "{:?}: {:?}",
            feedback_rule,
            result
        );
    }
}
