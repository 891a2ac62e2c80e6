use tagset::{Pos, Tag};

use crate::morph::{Morph, normalize};

/// A surface token paired with its word-class tag. Position is the token's
/// index in the sequence that produced it.
#[derive(Clone, Debug)]
pub struct TaggedToken<'a> {
    pub surface: &'a str,
    pub tag: Tag,
}

const MODALS: &[&str] = &[
    "can", "could", "may", "might", "must", "shall", "should", "will", "would",
];

const AUX_VERBS: &[&str] = &[
    "is", "am", "are", "was", "were", "be", "been", "being", "do", "does", "did", "doing", "have",
    "has", "had", "having",
];

const PRONOUNS: &[&str] = &[
    "i", "me", "my", "mine", "myself", "we", "us", "our", "ours", "ourselves", "you", "your",
    "yours", "yourself", "yourselves", "he", "him", "his", "himself", "she", "her", "hers",
    "herself", "it", "its", "itself", "they", "them", "their", "theirs", "themselves", "who",
    "whom", "whose", "what", "which",
];

const DETERMINERS: &[&str] = &[
    "the", "a", "an", "this", "that", "these", "those", "each", "every", "either", "neither",
    "both", "all", "any", "some", "no", "another", "such", "there",
];

const FUNCTION_WORDS: &[&str] = &[
    "and", "or", "but", "nor", "so", "yet", "if", "because", "although", "though", "while",
    "whereas", "when", "whenever", "where", "wherever", "as", "than", "of", "in", "on", "at",
    "by", "for", "with", "about", "against", "between", "into", "through", "during", "before",
    "after", "above", "below", "from", "up", "down", "out", "off", "over", "under", "again",
    "further", "then", "once", "to", "until", "unless", "since", "upon", "onto", "toward",
    "towards", "within", "without", "across", "behind", "beyond", "despite", "except",
];

const NEGATIONS: &[&str] = &["not", "never"];

/// Tag every token in sequence. The `lemma_exists` predicate decides the
/// open-class cases, typically by delegating to a loaded lexicon.
pub fn tag_tokens<'a, F>(tokens: &[&'a str], morph: &Morph, lemma_exists: F) -> Vec<TaggedToken<'a>>
where
    F: Fn(Pos, &str) -> bool,
{
    tokens
        .iter()
        .map(|token| TaggedToken {
            surface: token,
            tag: tag_word(token, morph, &lemma_exists),
        })
        .collect()
}

/// Classify one token: closed word tables first, then suffix shape, then
/// dictionary presence in noun → verb → adjective → adverb order.
fn tag_word<F>(token: &str, morph: &Morph, lemma_exists: &F) -> Tag
where
    F: Fn(Pos, &str) -> bool,
{
    let word = normalize(token);
    let word = word.as_str();

    if MODALS.contains(&word) {
        return Tag::Modal;
    }
    if AUX_VERBS.contains(&word) {
        return Tag::Verb;
    }
    if PRONOUNS.contains(&word) {
        return Tag::Pronoun;
    }
    if DETERMINERS.contains(&word) {
        return Tag::Determiner;
    }
    if FUNCTION_WORDS.contains(&word) {
        return Tag::Function;
    }
    if NEGATIONS.contains(&word) {
        return Tag::Adverb;
    }

    if word.ends_with("ly") {
        return Tag::Adverb;
    }
    if (word.ends_with("ing") || word.ends_with("ed"))
        && morph.has_lemma(Pos::Verb, word, lemma_exists)
    {
        return Tag::Verb;
    }
    if (word.ends_with("er") || word.ends_with("est"))
        && morph.has_lemma(Pos::Adj, word, lemma_exists)
    {
        return Tag::Adjective;
    }

    for pos in [Pos::Noun, Pos::Verb, Pos::Adj, Pos::Adv] {
        if morph.has_lemma(pos, word, lemma_exists) {
            return match pos {
                Pos::Noun => Tag::Noun,
                Pos::Verb => Tag::Verb,
                Pos::Adj => Tag::Adjective,
                Pos::Adv => Tag::Adverb,
            };
        }
    }

    Tag::Other
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exists_in(targets: &'static [(&'static str, Pos)]) -> impl Fn(Pos, &str) -> bool {
        move |pos, lemma| targets.iter().any(|(l, p)| *p == pos && *l == lemma)
    }

    #[test]
    fn closed_classes_win_over_the_lexicon() {
        let morph = Morph::empty();
        // "can" exists as a verb, but the modal table is consulted first.
        let exists = exists_in(&[("can", Pos::Verb)]);
        assert_eq!(tag_word("can", &morph, &exists), Tag::Modal);
        assert_eq!(tag_word("The", &morph, &exists), Tag::Determiner);
        assert_eq!(tag_word("she", &morph, &exists), Tag::Pronoun);
        assert_eq!(tag_word("of", &morph, &exists), Tag::Function);
        assert_eq!(tag_word("not", &morph, &exists), Tag::Adverb);
        assert_eq!(tag_word("is", &morph, &exists), Tag::Verb);
    }

    #[test]
    fn suffix_shape_decides_inflected_forms() {
        let morph = Morph::empty();
        let exists = exists_in(&[("approve", Pos::Verb), ("approve", Pos::Noun)]);
        assert_eq!(tag_word("approved", &morph, &exists), Tag::Verb);
        assert_eq!(tag_word("quickly", &morph, &exists), Tag::Adverb);

        let exists = exists_in(&[("soft", Pos::Adj)]);
        assert_eq!(tag_word("softer", &morph, &exists), Tag::Adjective);
    }

    #[test]
    fn dictionary_presence_breaks_open_class_ties() {
        let morph = Morph::empty();
        let exists = exists_in(&[("bank", Pos::Noun), ("bank", Pos::Verb)]);
        assert_eq!(tag_word("bank", &morph, &exists), Tag::Noun);

        let exists = exists_in(&[("sprint", Pos::Verb)]);
        assert_eq!(tag_word("sprint", &morph, &exists), Tag::Verb);
    }

    #[test]
    fn unknown_tokens_are_unclassified() {
        let morph = Morph::empty();
        let exists = exists_in(&[]);
        assert_eq!(tag_word("zyxwv", &morph, &exists), Tag::Other);
    }

    #[test]
    fn sequences_keep_token_order() {
        let morph = Morph::empty();
        let exists = exists_in(&[("bank", Pos::Noun)]);
        let tokens = ["The", "bank"];
        let tagged = tag_tokens(&tokens, &morph, &exists);
        assert_eq!(tagged.len(), 2);
        assert_eq!(tagged[0].surface, "The");
        assert_eq!(tagged[0].tag, Tag::Determiner);
        assert_eq!(tagged[1].tag, Tag::Noun);
    }
}
