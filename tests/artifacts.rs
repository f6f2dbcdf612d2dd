use std::path::{Path, PathBuf};
use wordle_strategist::core::{Feedback, Word};
use wordle_strategist::solver::{MinimaxStrategy, PrecomputedStrategy, Strategy, StrategyError};
use wordle_strategist::tree::{ArtifactError, PrecomputedArtifact};
use wordle_strategist::wordlists::{DEFAULT_WORDS, loader::words_from_slice};

fn fixture() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/data/precomputed_small.json")
}

fn word(text: &str) -> Word {
    Word::new(text).unwrap()
}

fn feedback(text: &str) -> Feedback {
    text.parse().unwrap()
}

#[test]
fn loads_fixture() {
    let mut s = PrecomputedStrategy::load(fixture()).unwrap();

    assert_eq!(s.dictionary(), &[word("aaaaa"), word("abbbb"), word("aabbb")]);
    assert_eq!(s.guess().unwrap(), word("aaaaa"));

    s.update(word("aaaaa"), feedback("XX___")).unwrap();
    assert_eq!(s.guess().unwrap(), word("aabbb"));

    s.reset();
    s.update(word("aaaaa"), feedback("X____")).unwrap();
    assert_eq!(s.guess().unwrap(), word("abbbb"));
}

#[test]
fn fixture_null_children_are_dropped() {
    let s = PrecomputedStrategy::load(fixture()).unwrap();
    assert_eq!(s.tree().choice().len(), 2);
    assert!(s.tree().child(Feedback::WIN).is_none());
}

#[test]
fn fixture_rejects_unknown_branches() {
    let mut s = PrecomputedStrategy::load(fixture()).unwrap();
    assert_eq!(
        s.update(word("aaaaa"), feedback("XXX__")),
        Err(StrategyError::UnexpectedFeedback {
            guess: word("aaaaa"),
            feedback: feedback("XXX__"),
        })
    );
}

#[test]
fn saved_tree_replays_identically() {
    let live = MinimaxStrategy::new(words_from_slice(&DEFAULT_WORDS[..80]));
    let built = PrecomputedStrategy::build(&live).unwrap();

    let path = std::env::temp_dir().join(format!(
        "wordle_strategist_{}_round_trip.json",
        std::process::id()
    ));
    built.to_artifact().save(&path).unwrap();
    let loaded = PrecomputedStrategy::load(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(loaded.tree(), built.tree());
    assert_eq!(loaded.dictionary(), built.dictionary());
}

#[test]
fn missing_artifact_is_not_found() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/data/doesnt_exist.json");
    assert!(matches!(
        PrecomputedStrategy::load(&path),
        Err(ArtifactError::NotFound(p)) if p == path
    ));
}

#[test]
fn no_tree_source_is_an_error() {
    assert_eq!(
        PrecomputedStrategy::from_sources::<MinimaxStrategy>(None, None).unwrap_err(),
        StrategyError::NoTreeSource
    );

    let artifact = PrecomputedArtifact::load(fixture()).unwrap();
    let s = PrecomputedStrategy::from_sources::<MinimaxStrategy>(Some(artifact), None).unwrap();
    assert_eq!(s.tree().guess(), word("aaaaa"));
}
