use sense_lexicon::LexicalSense;

/// One candidate meaning of a word.
///
/// Most senses come straight from the lexicon. Modal verbs are the
/// exception: dictionaries rarely carry their functional meanings, so the
/// detector fabricates a [`ModalSense`] from a fixed definition table. Both
/// variants expose the same read contract, which is all the scorer and the
/// fallback ever look at.
#[derive(Clone, Debug)]
pub enum Sense {
    Lexical(LexicalSense),
    SyntheticModal(ModalSense),
}

impl Sense {
    /// Build the synthetic sense for a known modal verb, or `None` for any
    /// other word.
    pub fn synthetic_modal(word: &str) -> Option<Self> {
        ModalSense::new(word).map(Sense::SyntheticModal)
    }

    pub fn definition(&self) -> &str {
        match self {
            Sense::Lexical(sense) => sense.definition(),
            Sense::SyntheticModal(sense) => sense.definition,
        }
    }

    pub fn examples(&self) -> &[String] {
        match self {
            Sense::Lexical(sense) => sense.examples(),
            Sense::SyntheticModal(sense) => std::slice::from_ref(&sense.example),
        }
    }

    pub fn synonyms(&self) -> &[String] {
        match self {
            Sense::Lexical(sense) => sense.synonyms(),
            Sense::SyntheticModal(sense) => std::slice::from_ref(&sense.word),
        }
    }

    pub fn antonyms(&self) -> &[String] {
        match self {
            Sense::Lexical(sense) => sense.antonyms(),
            Sense::SyntheticModal(_) => &[],
        }
    }
}

/// Fabricated sense for a modal verb: the fixed functional definition, one
/// templated example, the word itself as sole synonym, and no antonyms.
#[derive(Clone, Debug)]
pub struct ModalSense {
    word: String,
    definition: &'static str,
    example: String,
}

impl ModalSense {
    pub fn new(word: &str) -> Option<Self> {
        let definition = modal_definition(word)?;
        Some(Self {
            word: word.to_string(),
            definition,
            example: format!("He {word} do it."),
        })
    }
}

/// Fixed functional definitions for the nine English modal verbs.
pub fn modal_definition(word: &str) -> Option<&'static str> {
    match word {
        "can" => Some("Used to express ability or possibility."),
        "could" => Some("Used to express conditional possibility or past ability."),
        "may" => Some("Used to express permission or possibility."),
        "might" => Some("Used to express a lower probability."),
        "must" => Some("Used to express necessity or strong obligation."),
        "shall" => Some("Used to express future intention or obligation."),
        "should" => Some("Used to express advisability or expectation."),
        "will" => Some("Used to express future actions or willingness."),
        "would" => Some("Used to express habitual past actions or polite requests."),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_modal_has_a_definition() {
        for word in [
            "can", "could", "may", "might", "must", "shall", "should", "will", "would",
        ] {
            assert!(modal_definition(word).is_some(), "missing entry for {word}");
        }
        assert_eq!(modal_definition("walk"), None);
    }

    #[test]
    fn synthetic_sense_read_contract() {
        let sense = Sense::synthetic_modal("must").expect("known modal");
        assert_eq!(
            sense.definition(),
            "Used to express necessity or strong obligation."
        );
        assert_eq!(sense.examples(), ["He must do it."]);
        assert_eq!(sense.synonyms(), ["must"]);
        assert!(sense.antonyms().is_empty());
    }

    #[test]
    fn unknown_words_get_no_synthetic_sense() {
        assert!(Sense::synthetic_modal("bank").is_none());
    }
}
