use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::analyzer::Analyzer;
use crate::sense::Sense;
use crate::text;

/// The string reported when no candidate sense survives scoring.
pub const NO_MATCH: &str = "None of the above meanings";

/// How sure the pipeline is about a chosen sense.
///
/// `TransformerMedium` marks a choice made by the embedding fallback rather
/// than lexical overlap; `NoMatch` is the label that accompanies an empty
/// choice.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub enum Confidence {
    High,
    Medium,
    Low,
    #[serde(rename = "Transformer-Medium")]
    TransformerMedium,
    #[serde(rename = "None of the above meanings")]
    NoMatch,
}

/// Overlap weights and confidence thresholds for the heuristic scorer.
///
/// The defaults are empirical constants carried over for behavioral
/// compatibility; treat them as tunable parameters, not invariants.
#[derive(Clone, Copy, Debug)]
pub struct ScoreWeights {
    /// Extended-context word found in a candidate's gloss.
    pub gloss_context: f64,
    /// Extended-context word that is one of the candidate's synonyms.
    pub synonym_context: f64,
    /// Extended-context word that is one of the candidate's antonyms.
    pub antonym_context: f64,
    /// Raw keyword found in a candidate's gloss.
    pub gloss_keyword: f64,
    /// Raw keyword that is one of the candidate's synonyms.
    pub synonym_keyword: f64,
    /// Raw keyword that is one of the candidate's antonyms.
    pub antonym_keyword: f64,
    /// Minimum top score for `Medium` confidence.
    pub medium_score: f64,
    /// Minimum top score for `High` confidence.
    pub high_score: f64,
    /// Candidates all at or below this score mean no usable choice.
    pub reject_score: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            gloss_context: 1.5,
            synonym_context: 0.5,
            antonym_context: -0.5,
            gloss_keyword: 2.0,
            synonym_keyword: 1.0,
            antonym_keyword: -1.0,
            medium_score: 2.0,
            high_score: 4.0,
            reject_score: 1.0,
        }
    }
}

/// Rank candidate senses against the context keywords by lexical overlap.
///
/// Returns the index of the winning sense and the confidence tier of its
/// score, or `(None, NoMatch)` when there are no candidates or every score
/// sits at or below the rejection threshold. The sort is stable, so equal
/// scores keep dictionary candidate order.
pub(crate) fn guess_sense(
    an: &Analyzer,
    senses: &[Sense],
    context_keywords: &[String],
) -> (Option<usize>, Confidence) {
    let weights = &an.weights;
    let context = extended_context(an, context_keywords);

    let mut scored: Vec<(usize, f64)> = senses
        .iter()
        .enumerate()
        .map(|(index, sense)| {
            let gloss = gloss_tokens(an, sense);
            let synonyms: HashSet<&str> = sense.synonyms().iter().map(String::as_str).collect();
            let antonyms: HashSet<&str> = sense.antonyms().iter().map(String::as_str).collect();

            let mut score = 0.0;
            for context_set in context.values() {
                for word in context_set {
                    if gloss.contains(word.as_str()) {
                        score += weights.gloss_context;
                    }
                    if synonyms.contains(word.as_str()) {
                        score += weights.synonym_context;
                    }
                    if antonyms.contains(word.as_str()) {
                        score += weights.antonym_context;
                    }
                }
            }
            // Raw keywords count once per repetition, which is how keyword
            // salience reaches the score.
            for keyword in context_keywords {
                if gloss.contains(keyword.as_str()) {
                    score += weights.gloss_keyword;
                }
                if synonyms.contains(keyword.as_str()) {
                    score += weights.synonym_keyword;
                }
                if antonyms.contains(keyword.as_str()) {
                    score += weights.antonym_keyword;
                }
            }
            (index, score)
        })
        .collect();

    scored.sort_by(|a, b| b.1.total_cmp(&a.1));

    if scored.is_empty() || scored.iter().all(|(_, score)| *score <= weights.reject_score) {
        return (None, Confidence::NoMatch);
    }

    let top = scored[0].1;
    let confidence = if top >= weights.high_score {
        Confidence::High
    } else if top >= weights.medium_score {
        Confidence::Medium
    } else {
        Confidence::Low
    };
    (Some(scored[0].0), confidence)
}

/// Expand each distinct keyword into everything its own senses talk about:
/// gloss and example lemmas plus synonym and antonym lemmas.
fn extended_context(an: &Analyzer, context_keywords: &[String]) -> HashMap<String, HashSet<String>> {
    let mut map: HashMap<String, HashSet<String>> = HashMap::new();
    for keyword in context_keywords {
        if map.contains_key(keyword) {
            continue;
        }
        let mut set = HashSet::new();
        for sense in an.lexicon.senses_any_pos(keyword) {
            set.extend(text::lemmatize_all(an, sense.definition()));
            for example in sense.examples() {
                set.extend(text::lemmatize_all(an, example));
            }
            for synonym in sense.synonyms() {
                set.insert(synonym.to_lowercase());
            }
            for antonym in sense.antonyms() {
                set.insert(antonym.to_lowercase());
            }
        }
        map.insert(keyword.clone(), set);
    }
    map
}

/// Lemmatized token set of a candidate's gloss: definition plus examples.
fn gloss_tokens(an: &Analyzer, sense: &Sense) -> HashSet<String> {
    let mut gloss = sense.definition().to_string();
    for example in sense.examples() {
        gloss.push(' ');
        gloss.push_str(example);
    }
    text::lemmatize_all(an, &gloss).into_iter().collect()
}
