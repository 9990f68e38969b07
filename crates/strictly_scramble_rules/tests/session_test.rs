//! Tests for the session submission pipeline.

use rand::SeedableRng;
use rand::rngs::StdRng;
use strictly_scramble_rules::{
    FALLBACK_ROOT_WORD, GameSession, InvariantSet, Rejection, RejectionKind, ScoringRules,
    SessionInvariants, SessionSetup, StaticWordSource, Submission, WordPool, WordSource,
    WordSourceError,
};

fn session_with_root(root: &str) -> GameSession {
    let source = StaticWordSource::new(vec![root.to_string()]);
    SessionSetup::seeded(&source, 0).expect("static source").start()
}

fn expect_kind(result: Result<Submission, Rejection>) -> RejectionKind {
    result.expect_err("expected a rejection").kind()
}

#[test]
fn test_blank_input_is_a_no_op() {
    let mut session = session_with_root("silkworm");
    session.submit("silk").expect("accepted");

    for raw in ["", "   ", "\n", " \t\r\n "] {
        session.set_pending_input(raw);
        let outcome = session.submit(raw).expect("blank input is never rejected");
        assert_eq!(outcome, Submission::Ignored);
        assert_eq!(session.score(), 4);
        assert_eq!(session.used_words().len(), 1);
        assert_eq!(session.pending_input(), raw);
        assert!(!*session.error().visible());
    }
}

#[test]
fn test_multiset_containment() {
    let mut session = session_with_root("silkworm");

    let accepted = session.submit("silk").expect("accepted");
    assert_eq!(accepted.accepted().map(|a| a.award().total()), Some(4));
    assert_eq!(session.score(), 4);

    assert_eq!(expect_kind(session.submit("silks")), RejectionKind::NotPossible);
    assert_eq!(expect_kind(session.submit("mills")), RejectionKind::NotPossible);
    assert_eq!(expect_kind(session.submit("worry")), RejectionKind::NotPossible);
    assert_eq!(session.score(), 4);

    // Every letter of "worms" occurs once in the root
    let accepted = session.submit("worms").expect("accepted");
    assert_eq!(accepted.accepted().map(|a| a.award().total()), Some(5));
    assert_eq!(session.score(), 9);
}

#[test]
fn test_root_word_rejected_on_first_submission() {
    let mut session = session_with_root("silkworm");
    assert_eq!(expect_kind(session.submit("silkworm")), RejectionKind::IsRootWord);
    assert_eq!(expect_kind(session.submit("  SILKWORM\n")), RejectionKind::IsRootWord);
    assert!(session.used_words().is_empty());
    assert_eq!(session.score(), 0);
}

#[test]
fn test_duplicate_reported_before_feasibility() {
    let mut session = session_with_root("silkworm");
    session.submit("silk").expect("accepted");
    assert_eq!(expect_kind(session.submit("silk")), RejectionKind::AlreadyUsed);
    assert_eq!(expect_kind(session.submit(" Silk ")), RejectionKind::AlreadyUsed);
}

#[test]
fn test_rejection_messages() {
    let mut session = session_with_root("silkworm");
    session.submit("silk").expect("accepted");

    let used = session.submit("silk").expect_err("duplicate");
    assert_eq!(used.title(), "Word used already");
    assert_eq!(used.message(), "Be more original!");

    let impossible = session.submit("mills").expect_err("not possible");
    assert_eq!(impossible.title(), "Word not possible");
    assert_eq!(impossible.message(), "You can't spell that word from 'silkworm'!");

    let root = session.submit("silkworm").expect_err("root word");
    assert_eq!(root.title(), "Word is the rootword");
    assert_eq!(
        root.message(),
        "You can't use your answer because it is the rootword!"
    );
    assert_eq!(session.error().title(), "Word is the rootword");
}

#[test]
fn test_fifth_word_bonus() {
    let mut session = session_with_root("silkworm");
    let mut scores = Vec::new();
    for word in ["ski", "row", "owl", "mil", "sow"] {
        session.submit(word).expect("accepted");
        scores.push(session.score());
    }
    assert_eq!(scores, [3, 6, 9, 12, 20]);
}

#[test]
fn test_tenth_word_bonus() {
    let mut session = session_with_root("silkworm");
    let words = [
        "ski", "row", "owl", "mil", "sow", "silk", "worm", "milk", "skim", "slow",
    ];
    for word in words {
        session.submit(word).expect("accepted");
    }
    let letters: u32 = words.iter().map(|w| w.len() as u32).sum();
    assert_eq!(session.score(), letters + 10);
}

#[test]
fn test_huge_configured_bonus_saturates_score() {
    let source = StaticWordSource::new(vec!["silkworm".to_string()]);
    let rules = ScoringRules::default()
        .with_milestone_every(1)
        .with_milestone_bonus(u32::MAX);
    let mut session = SessionSetup::seeded(&source, 0)
        .expect("static source")
        .with_rules(rules)
        .start();

    session.submit("silk").expect("accepted");
    assert_eq!(session.score(), u32::MAX);
    session.submit("milk").expect("accepted");
    assert_eq!(session.score(), u32::MAX);
    assert!(SessionInvariants::check_all(session.state()).is_ok());
}

#[test]
fn test_used_words_most_recent_first() {
    let mut session = session_with_root("silkworm");
    session.submit("silk").expect("accepted");
    session.submit("Worm").expect("accepted");
    let words: Vec<&str> = session.used_words().iter().map(|w| w.as_str()).collect();
    assert_eq!(words, ["worm", "silk"]);
}

#[test]
fn test_restart_resets_state() {
    let pool = ["alphabet", "bookcase", "silkworm"];
    let source = StaticWordSource::new(pool.iter().map(|w| w.to_string()).collect());
    let mut session = SessionSetup::seeded(&source, 3).expect("static source").start();

    let root = session.root_word().as_str().to_string();
    let first = root.chars().take(2).collect::<String>();
    let _ = session.submit(&first);
    let _ = session.submit(&root);
    let _ = session.submit("qqqq");

    let new_root = session.start_game().clone();
    assert!(pool.contains(&new_root.as_str()));
    assert_eq!(session.score(), 0);
    assert!(session.used_words().is_empty());
    assert!(!*session.error().visible());
}

#[test]
fn test_invariants_hold_through_a_session() {
    let mut session = session_with_root("silkworm");
    for raw in ["silk", "silk", "x", "", "worm", "silkworm", "milk", "ski", "row", "owl"] {
        let _ = session.submit(raw);
        assert!(SessionInvariants::check_all(session.state()).is_ok());
    }
}

#[test]
fn test_empty_pool_uses_fallback_root() {
    let session = SessionSetup::new(WordPool::default(), StdRng::seed_from_u64(9)).start();
    assert_eq!(session.root_word().as_str(), FALLBACK_ROOT_WORD);
}

struct MissingResource;

impl WordSource for MissingResource {
    fn load_word_pool(&self) -> Result<WordPool, WordSourceError> {
        Err(WordSourceError::new("Could not load start.txt"))
    }
}

#[test]
fn test_missing_word_source_is_fatal() {
    let result = SessionSetup::from_source(&MissingResource);
    let err = result.expect_err("missing resource");
    assert!(err.message.contains("start.txt"));
}

#[test]
fn test_same_seed_same_root() {
    let source = StaticWordSource::new(
        ["alphabet", "bookcase", "calendar", "daylight", "elephant"]
            .iter()
            .map(|w| w.to_string())
            .collect(),
    );
    let a = SessionSetup::seeded(&source, 11).expect("static source").start();
    let b = SessionSetup::seeded(&source, 11).expect("static source").start();
    assert_eq!(a.root_word(), b.root_word());
}

#[test]
fn test_view_snapshot() {
    let mut session = session_with_root("silkworm");
    session.submit("silk").expect("accepted");
    session.set_pending_input("wor");
    let view = session.view();
    assert_eq!(view.root_word(), "silkworm");
    assert_eq!(view.used_words()[0].word(), "silk");
    assert_eq!(*view.used_words()[0].letters(), 4);
    assert_eq!(*view.score(), 4);
    assert_eq!(*view.words_until_bonus(), Some(4));
    assert_eq!(view.pending_input(), "wor");
}
