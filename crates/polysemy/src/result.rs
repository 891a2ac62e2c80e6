use serde::Serialize;

use crate::score::Confidence;

/// Which scoring stage produced the reported best sense.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub enum DecisionSource {
    /// The lexical-overlap heuristic.
    #[serde(rename = "wordnet")]
    Wordnet,
    /// The embedding-similarity fallback.
    #[serde(rename = "transformer")]
    Transformer,
}

/// One ambiguous occurrence as reported to the caller.
#[derive(Clone, Debug, Serialize)]
pub struct OccurrenceReport {
    /// Lowercased surface form.
    pub word: String,
    /// Token position within the passage.
    pub index: usize,
    /// Up to three candidate definitions, for display.
    pub senses: Vec<String>,
    /// The chosen definition, or the no-match marker.
    pub best_sense: String,
    pub confidence: Confidence,
    pub decision_source: DecisionSource,
    /// Cosine similarity of the fallback choice, three decimals; absent when
    /// the heuristic decided.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback_similarity: Option<f64>,
}

/// Everything the analysis produced for one passage.
#[derive(Clone, Debug, Serialize)]
pub struct AnalysisResult {
    pub text: String,
    pub context_keywords: Vec<String>,
    pub ambiguous: Vec<OccurrenceReport>,
    /// Flagged occurrences over meaningful tokens, two decimals, in [0, 1].
    pub ambiguity_score: f64,
}
