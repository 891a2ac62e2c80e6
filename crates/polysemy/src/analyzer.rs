use std::sync::Arc;

use morphotag::Morph;
use sense_embed::SentenceEncoder;
use sense_lexicon::Lexicon;

use crate::detect::{self, AmbiguousWord};
use crate::fallback;
use crate::keywords::{self, KeywordConfig};
use crate::result::{AnalysisResult, DecisionSource, OccurrenceReport};
use crate::score::{self, Confidence, NO_MATCH, ScoreWeights};
use crate::text;

const NO_DEFINITION: &str = "No definition found.";

/// The passage analyzer: every resource the pipeline needs, constructed once
/// at process start and shared read-only afterwards.
///
/// Analysis itself is a pure function of the passage text; nothing here
/// mutates between calls, so one `Analyzer` serves concurrent requests. The
/// encoder is optional; without it the heuristic's verdict is final.
pub struct Analyzer {
    pub(crate) lexicon: Arc<Lexicon>,
    pub(crate) morph: Morph,
    pub(crate) keywords: KeywordConfig,
    pub(crate) weights: ScoreWeights,
    encoder: Option<Arc<dyn SentenceEncoder>>,
}

impl Analyzer {
    pub fn new(lexicon: Arc<Lexicon>, morph: Morph) -> Self {
        Self {
            lexicon,
            morph,
            keywords: KeywordConfig::default(),
            weights: ScoreWeights::default(),
            encoder: None,
        }
    }

    /// Attach the embedding fallback stage.
    pub fn with_encoder(mut self, encoder: Arc<dyn SentenceEncoder>) -> Self {
        self.encoder = Some(encoder);
        self
    }

    pub fn with_weights(mut self, weights: ScoreWeights) -> Self {
        self.weights = weights;
        self
    }

    pub fn with_keyword_config(mut self, config: KeywordConfig) -> Self {
        self.keywords = config;
        self
    }

    /// Cap the number of context keywords (default 10).
    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.keywords.top_n = top_n;
        self
    }

    /// Lemmatize a passage: one lemma per token, in order. Deterministic for
    /// a fixed lexicon.
    pub fn lemmatized_tokens(&self, text: &str) -> Vec<String> {
        text::lemmatize_all(self, text)
    }

    /// The passage's context keywords, repeated by frequency.
    pub fn context_keywords(&self, text: &str) -> Vec<String> {
        keywords::extract(self, text)
    }

    /// The passage's flagged occurrences with their candidate senses.
    pub fn ambiguous_words(&self, text: &str) -> Vec<AmbiguousWord> {
        detect::ambiguous_words(self, text)
    }

    /// Run the full pipeline over one passage.
    ///
    /// Two-stage decision per occurrence: the lexical heuristic first; when
    /// it chooses nothing or lands below High confidence, the embedding
    /// fallback (if configured) may override, and the report records which
    /// stage won.
    pub fn analyze(&self, text: &str) -> AnalysisResult {
        let context_keywords = keywords::extract(self, text);

        let mut ambiguous = Vec::new();
        for occurrence in detect::ambiguous_words(self, text) {
            ambiguous.push(self.resolve(text, &context_keywords, occurrence));
        }

        let lemmas = text::lemmatize_all(self, text);
        let meaningful = lemmas
            .iter()
            .filter(|lemma| {
                !lemma.is_empty()
                    && lemma.chars().all(char::is_alphabetic)
                    && !self.keywords.is_stopword(lemma)
            })
            .count();
        let ambiguity_score = if meaningful == 0 {
            0.0
        } else {
            round_to(ambiguous.len() as f64 / meaningful as f64, 2).min(1.0)
        };

        AnalysisResult {
            text: text.to_string(),
            context_keywords,
            ambiguous,
            ambiguity_score,
        }
    }

    fn resolve(
        &self,
        text: &str,
        context_keywords: &[String],
        occurrence: AmbiguousWord,
    ) -> OccurrenceReport {
        let senses: Vec<String> = occurrence
            .senses
            .iter()
            .take(3)
            .map(|sense| sense.definition())
            .filter(|definition| !definition.is_empty())
            .map(str::to_string)
            .collect();

        let (mut best, mut confidence) =
            score::guess_sense(self, &occurrence.senses, context_keywords);
        let mut decision_source = DecisionSource::Wordnet;
        let mut fallback_similarity = None;

        let inconclusive =
            best.is_none() || matches!(confidence, Confidence::Low | Confidence::Medium);
        if inconclusive && let Some(encoder) = &self.encoder {
            let (choice, similarity) =
                fallback::embedding_fallback(encoder.as_ref(), text, &occurrence.senses);
            if let Some(index) = choice {
                best = Some(index);
                confidence = Confidence::TransformerMedium;
                decision_source = DecisionSource::Transformer;
                fallback_similarity = Some(round_to(f64::from(similarity), 3));
            }
        }

        let best_sense = match best {
            Some(index) => {
                let definition = occurrence.senses[index].definition();
                if definition.is_empty() {
                    NO_DEFINITION.to_string()
                } else {
                    definition.to_string()
                }
            }
            None => NO_MATCH.to_string(),
        };

        OccurrenceReport {
            word: occurrence.surface,
            index: occurrence.index,
            senses,
            best_sense,
            confidence,
            decision_source,
            fallback_similarity,
        }
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounding_to_fixed_decimals() {
        assert_eq!(round_to(0.3333333, 2), 0.33);
        assert_eq!(round_to(0.6666666, 2), 0.67);
        assert_eq!(round_to(0.1234567, 3), 0.123);
        assert_eq!(round_to(1.0, 2), 1.0);
    }
}
