use std::env;
use std::path::PathBuf;

use sense_lexicon::{Lexicon, LoadMode};
use tagset::Pos;

fn dict_dir() -> Option<PathBuf> {
    env::var("WORDNET_DIR").ok().map(PathBuf::from)
}

#[test]
fn loads_open_english_wordnet() {
    let Some(dir) = dict_dir() else {
        eprintln!("skipping: WORDNET_DIR not set");
        return;
    };
    let lex = Lexicon::load_with_mode(&dir, LoadMode::Mmap).expect("load open english wordnet");

    assert!(lex.lemma_count() > 10_000, "lemma index too small");
    assert!(lex.synset_count() > 10_000, "synsets too small");
    assert!(lex.senses(Pos::Noun, "bank").len() > 1);
    assert!(!lex.senses(Pos::Verb, "run").is_empty());
    let happy = lex.senses(Pos::Adj, "happy");
    assert!(happy.iter().any(|s| !s.antonyms().is_empty()));
}
