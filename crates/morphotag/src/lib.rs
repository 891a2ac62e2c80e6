//! Surface-text processing for the disambiguation pipeline: split a passage
//! into word tokens, assign each a word-class [`Tag`], and reduce tagged
//! tokens to dictionary lemmas.
//!
//! The tagger is deliberately deterministic. Closed classes (modals,
//! pronouns, determiners, function words) come from fixed word tables;
//! everything else is decided by suffix shape and by whether a lemma
//! candidate actually exists in the dictionary. Existence is checked through
//! a caller-provided predicate, so this crate stays decoupled from any
//! particular lexicon; the lemmatizer uses the same seam.
//!
//! Lemmatization follows the classic morphy algorithm: try the surface form,
//! then exception lists (`*.exc` files), then POS-specific suffix rules,
//! keeping only candidates the predicate confirms.
//!
//! # Example
//! ```
//! use morphotag::{Morph, tag_tokens, tokenize};
//! use tagset::{Pos, Tag};
//!
//! let morph = Morph::empty();
//! let exists = |pos, lemma: &str| pos == Pos::Verb && lemma == "run";
//! let tokens = tokenize("She must keep running");
//! let tagged = tag_tokens(&tokens, &morph, &exists);
//! assert_eq!(tagged[1].tag, Tag::Modal);
//! assert_eq!(tagged[3].tag, Tag::Verb);
//! assert_eq!(morph.lemmatize(Pos::Verb, "running", &exists), "run");
//! ```

mod morph;
mod tagger;

pub use morph::Morph;
pub use tagger::{TaggedToken, tag_tokens};

use unicode_segmentation::UnicodeSegmentation;

/// Split text into word tokens in passage order.
///
/// Unicode word segmentation keeps word-internal apostrophes and drops
/// punctuation; a token count of zero means the passage had no words at all.
pub fn tokenize(text: &str) -> Vec<&str> {
    text.unicode_words().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenize_drops_punctuation_and_keeps_contractions() {
        let tokens = tokenize("Well, she can't stop now.");
        assert_eq!(tokens, ["Well", "she", "can't", "stop", "now"]);
    }

    #[test]
    fn tokenize_empty_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize(" ,;! ").is_empty());
    }
}
