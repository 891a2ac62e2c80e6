//! Shared tag vocabulary for the disambiguation pipeline.
//!
//! Two levels of classification live here. [`Tag`] is what the tagger assigns
//! to a surface token (closed word classes kept distinct because the pipeline
//! treats them differently downstream), and [`Pos`] is the four-way dictionary
//! category the lexicon is keyed by. [`Tag::pos_category`] maps one to the
//! other; tags that map to `None` are passed through the pipeline untouched.
//!
//! ```rust
//! use tagset::{Pos, Tag};
//!
//! assert_eq!(Tag::Modal.pos_category(), Some(Pos::Verb));
//! assert_eq!(Tag::Pronoun.pos_category(), None);
//! assert_eq!(Pos::from_char('n'), Some(Pos::Noun));
//! ```

use std::fmt;

/// Dictionary part-of-speech as used by WordNet-format files (`n`, `v`, `a`/`s`, `r`).
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Pos {
    Noun,
    Verb,
    Adj,
    Adv,
}

impl Pos {
    /// Parse a POS character from `index.*`/`data.*` into an enum.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'n' => Some(Pos::Noun),
            'v' => Some(Pos::Verb),
            'a' | 's' => Some(Pos::Adj),
            'r' => Some(Pos::Adv),
            _ => None,
        }
    }

    /// All four categories, in dictionary lookup order.
    pub const ALL: [Pos; 4] = [Pos::Noun, Pos::Verb, Pos::Adj, Pos::Adv];
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Pos::Noun => "noun",
            Pos::Verb => "verb",
            Pos::Adj => "adj",
            Pos::Adv => "adv",
        })
    }
}

/// Word class assigned to a surface token by the tagger.
///
/// Closed classes (modals, determiners, pronouns, function words) are listed
/// before the open classes because the tagger resolves them from fixed word
/// tables; `Other` covers tokens no rule claims.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Tag {
    Noun,
    Verb,
    Adjective,
    Adverb,
    Modal,
    Determiner,
    Pronoun,
    Function,
    Other,
}

impl Tag {
    /// Map a word class to the dictionary category used for lemmatization and
    /// sense lookup.
    ///
    /// Modals count as verbs and determiners default to noun. Pronouns,
    /// function words, and unclassified tokens yield `None`: such tokens skip
    /// lemmatization and sense lookup entirely.
    pub fn pos_category(self) -> Option<Pos> {
        match self {
            Tag::Noun => Some(Pos::Noun),
            Tag::Verb | Tag::Modal => Some(Pos::Verb),
            Tag::Adjective => Some(Pos::Adj),
            Tag::Adverb => Some(Pos::Adv),
            Tag::Determiner => Some(Pos::Noun),
            Tag::Pronoun | Tag::Function | Tag::Other => None,
        }
    }
}
