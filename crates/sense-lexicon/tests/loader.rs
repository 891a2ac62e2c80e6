use std::path::PathBuf;

use sense_lexicon::{Lexicon, LoadMode};
use tagset::Pos;

fn fixture_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("wn")
}

#[test]
fn loads_senses_in_index_order() {
    let lex = Lexicon::load(fixture_dir()).expect("load fixtures");
    let senses = lex.senses(Pos::Noun, "bank");
    assert_eq!(senses.len(), 2);
    assert!(senses[0].definition().starts_with("a financial institution"));
    assert!(senses[1].definition().starts_with("sloping land"));
    assert_eq!(senses[0].examples(), ["he cashed a check at the bank"]);
}

#[test]
fn synonyms_come_from_the_whole_synset() {
    let lex = Lexicon::load(fixture_dir()).expect("load fixtures");
    let senses = lex.senses(Pos::Noun, "bank");
    assert_eq!(
        senses[0].synonyms(),
        ["bank", "depository_financial_institution"]
    );
    assert_eq!(senses[1].synonyms(), ["bank"]);
}

#[test]
fn antonym_pointers_resolve_to_target_lemmas() {
    let lex = Lexicon::load(fixture_dir()).expect("load fixtures");
    let happy = lex.senses(Pos::Adj, "happy");
    assert_eq!(happy.len(), 1);
    assert_eq!(happy[0].antonyms(), ["unhappy"]);

    let unhappy = lex.senses(Pos::Adj, "unhappy");
    assert_eq!(unhappy[0].antonyms(), ["happy"]);
}

#[test]
fn verb_frame_sections_are_tolerated() {
    let lex = Lexicon::load(fixture_dir()).expect("load fixtures");
    let approve = lex.senses(Pos::Verb, "approve");
    assert_eq!(approve.len(), 1);
    assert_eq!(approve[0].definition(), "judge acceptable");
    assert_eq!(approve[0].examples(), ["the committee approved the loan"]);
}

#[test]
fn lookup_across_categories() {
    let lex = Lexicon::load(fixture_dir()).expect("load fixtures");
    assert!(lex.lemma_exists(Pos::Noun, "bank"));
    assert!(lex.lemma_exists(Pos::Verb, "approve"));
    assert!(!lex.lemma_exists(Pos::Verb, "bank"));

    assert_eq!(lex.senses_any_pos("bank").len(), 2);
    assert_eq!(lex.senses_any_pos("swiftly").len(), 1);
    assert!(lex.senses(Pos::Noun, "nonesuch").is_empty());
}

#[test]
fn owned_mode_matches_mmap() {
    let mapped = Lexicon::load_with_mode(fixture_dir(), LoadMode::Mmap).expect("mmap");
    let owned = Lexicon::load_with_mode(fixture_dir(), LoadMode::Owned).expect("owned");
    assert_eq!(mapped.synset_count(), owned.synset_count());
    assert_eq!(mapped.lemma_count(), owned.lemma_count());
    assert_eq!(
        mapped.senses(Pos::Noun, "loan")[0].definition(),
        owned.senses(Pos::Noun, "loan")[0].definition()
    );
}

#[test]
fn missing_directory_is_a_load_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Lexicon::load(dir.path()).unwrap_err();
    assert!(err.to_string().contains("missing required dictionary file"));
}
