use std::env;
use std::path::PathBuf;

use morphotag::{Morph, tag_tokens, tokenize};
use sense_lexicon::Lexicon;
use tagset::{Pos, Tag};

fn dict_dir() -> Option<PathBuf> {
    env::var("WORDNET_DIR").ok().map(PathBuf::from)
}

#[test]
fn lemmatizes_and_tags_against_open_english_wordnet() {
    let Some(dir) = dict_dir() else {
        eprintln!("skipping: WORDNET_DIR not set");
        return;
    };
    let lex = Lexicon::load(&dir).expect("load lexicon");
    let morph = Morph::load(&dir).expect("load exception lists");
    let exists = |pos, lemma: &str| lex.lemma_exists(pos, lemma);

    assert_eq!(morph.lemmatize(Pos::Verb, "running", &exists), "run");
    assert_eq!(morph.lemmatize(Pos::Noun, "children", &exists), "child");

    let tokens = tokenize("The dogs must run quickly");
    let tagged = tag_tokens(&tokens, &morph, &exists);
    assert_eq!(tagged[0].tag, Tag::Determiner);
    assert_eq!(tagged[1].tag, Tag::Noun);
    assert_eq!(tagged[2].tag, Tag::Modal);
    assert_eq!(tagged[4].tag, Tag::Adverb);
}
