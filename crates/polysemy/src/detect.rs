use tagset::Tag;

use crate::analyzer::Analyzer;
use crate::sense::{Sense, modal_definition};
use crate::text;

/// One token flagged for disambiguation, with its candidate senses.
#[derive(Clone, Debug)]
pub struct AmbiguousWord {
    /// Lowercased surface form.
    pub surface: String,
    pub lemma: String,
    /// Token position within the passage.
    pub index: usize,
    pub senses: Vec<Sense>,
}

/// Scan the passage for words worth disambiguating.
///
/// A token qualifies when its lemma has more than one sense in the lexicon,
/// or when it is a known modal verb. Modals are surfaced even with a single
/// candidate sense: their functional meaning shifts with context no matter
/// what the dictionary says, and when the lexicon has nothing at all the
/// candidate is synthesized from the modal definition table.
pub(crate) fn ambiguous_words(an: &Analyzer, text: &str) -> Vec<AmbiguousWord> {
    let mut out = Vec::new();
    for (index, token) in text::tagged_tokens(an, text).iter().enumerate() {
        let Some(pos) = token.tag.pos_category() else {
            continue;
        };
        let surface = token.surface.to_lowercase();
        let lemma = text::lemma_of(an, token.surface, token.tag);

        let mut senses: Vec<Sense> = an
            .lexicon
            .senses(pos, &lemma)
            .into_iter()
            .cloned()
            .map(Sense::Lexical)
            .collect();

        let known_modal = token.tag == Tag::Modal && modal_definition(&lemma).is_some();
        if senses.is_empty() && known_modal {
            if let Some(sense) = Sense::synthetic_modal(&lemma) {
                senses.push(sense);
            }
        }

        if senses.len() > 1 || known_modal {
            out.push(AmbiguousWord {
                surface,
                lemma,
                index,
                senses,
            });
        }
    }
    out
}
