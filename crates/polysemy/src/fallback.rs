use sense_embed::{SentenceEncoder, cosine_similarity};
use tracing::warn;

use crate::sense::Sense;

/// Similarity reported when no sense could be compared at all; any accepted
/// candidate scores strictly above it.
pub(crate) const NO_SIMILARITY: f32 = -1.0;

/// Pick the candidate whose definition embeds closest to the passage.
///
/// Encoder failures degrade rather than abort: if the passage cannot be
/// encoded the fallback is skipped entirely, and a sense whose definition is
/// empty or fails to encode is skipped individually.
pub(crate) fn embedding_fallback(
    encoder: &dyn SentenceEncoder,
    text: &str,
    senses: &[Sense],
) -> (Option<usize>, f32) {
    let passage = match encoder.encode(text) {
        Ok(embedding) => embedding,
        Err(err) => {
            warn!("embedding fallback unavailable: {err}");
            return (None, NO_SIMILARITY);
        }
    };

    let mut best = None;
    let mut best_score = NO_SIMILARITY;
    for (index, sense) in senses.iter().enumerate() {
        let definition = sense.definition();
        if definition.is_empty() {
            continue;
        }
        let embedding = match encoder.encode(definition) {
            Ok(embedding) => embedding,
            Err(err) => {
                warn!("skipping unencodable sense definition: {err}");
                continue;
            }
        };
        let similarity = cosine_similarity(&passage, &embedding);
        if similarity > best_score {
            best_score = similarity;
            best = Some(index);
        }
    }

    (best, best_score)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sense_embed::{EncodeError, HashEncoder};
    use sense_lexicon::LexicalSense;

    struct BrokenEncoder;

    impl SentenceEncoder for BrokenEncoder {
        fn encode(&self, _text: &str) -> Result<Vec<f32>, EncodeError> {
            Err(EncodeError::Inference("model offline".into()))
        }
    }

    fn lexical(definition: &str) -> Sense {
        Sense::Lexical(LexicalSense::new(definition, vec![], vec![], vec![]))
    }

    #[test]
    fn picks_the_definition_sharing_passage_words() {
        let encoder = HashEncoder::new(384);
        let senses = vec![
            lexical("sloping land beside a body of water"),
            lexical("a financial institution that accepts deposits"),
        ];
        let (best, score) = embedding_fallback(
            &encoder,
            "the financial institution accepts deposits",
            &senses,
        );
        assert_eq!(best, Some(1));
        assert!(score > NO_SIMILARITY);
    }

    #[test]
    fn empty_definitions_are_skipped() {
        let encoder = HashEncoder::default();
        let senses = vec![lexical(""), lexical("money lent at interest")];
        let (best, _) = embedding_fallback(&encoder, "a loan of money", &senses);
        assert_eq!(best, Some(1));
    }

    #[test]
    fn encoder_failure_degrades_to_no_choice() {
        let senses = vec![lexical("anything")];
        let (best, score) = embedding_fallback(&BrokenEncoder, "some text", &senses);
        assert_eq!(best, None);
        assert_eq!(score, NO_SIMILARITY);
    }

    #[test]
    fn no_encodable_senses_returns_the_sentinel() {
        let encoder = HashEncoder::default();
        let senses = vec![lexical("")];
        let (best, score) = embedding_fallback(&encoder, "some text", &senses);
        assert_eq!(best, None);
        assert_eq!(score, NO_SIMILARITY);
    }
}
