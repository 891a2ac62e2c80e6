use morphotag::{TaggedToken, tag_tokens, tokenize};
use tagset::Tag;

use crate::analyzer::Analyzer;

/// Tokenize a passage and tag every token.
pub(crate) fn tagged_tokens<'a>(an: &Analyzer, text: &'a str) -> Vec<TaggedToken<'a>> {
    let tokens = tokenize(text);
    tag_tokens(&tokens, &an.morph, |pos, lemma| {
        an.lexicon.lemma_exists(pos, lemma)
    })
}

/// Reduce one tagged token to its lemma. Tokens outside the four dictionary
/// categories pass through lowercased, so the output always lines up with
/// the token sequence.
pub(crate) fn lemma_of(an: &Analyzer, surface: &str, tag: Tag) -> String {
    match tag.pos_category() {
        Some(pos) => an.morph.lemmatize(pos, surface, |p, lemma| {
            an.lexicon.lemma_exists(p, lemma)
        }),
        None => surface.to_lowercase(),
    }
}

/// Lemmatize a whole passage: one lemma per token, in order.
pub(crate) fn lemmatize_all(an: &Analyzer, text: &str) -> Vec<String> {
    tagged_tokens(an, text)
        .iter()
        .map(|token| lemma_of(an, token.surface, token.tag))
        .collect()
}
