//! Passage-level word-sense ambiguity analysis.
//!
//! Given a short passage, the [`Analyzer`] reports every word with more than
//! one plausible meaning, a best-guess sense with a confidence label, and an
//! aggregate ambiguity score. The pipeline runs in one direction:
//!
//! 1. tokenize, tag, and lemmatize the passage (`morphotag`);
//! 2. extract context keywords by frequency, with stopword filtering and a
//!    contextual-importance override for modal-like words;
//! 3. flag tokens whose lemma carries multiple senses in the lexicon
//!    (`sense-lexicon`), synthesizing a sense for modal verbs the dictionary
//!    lacks;
//! 4. rank each flagged word's candidate senses by lexical overlap with the
//!    keywords' extended context;
//! 5. when the heuristic is inconclusive, fall back to embedding similarity
//!    between the passage and each candidate definition (`sense-embed`).
//!
//! Results serialize to the JSON shape the serving layer stores and returns;
//! see [`AnalysisResult`].
//!
//! # Example
//! ```no_run
//! use std::sync::Arc;
//!
//! use morphotag::Morph;
//! use polysemy::Analyzer;
//! use sense_lexicon::Lexicon;
//!
//! # fn main() -> anyhow::Result<()> {
//! let dict = "/path/to/wordnet";
//! let lexicon = Arc::new(Lexicon::load(dict)?);
//! let analyzer = Analyzer::new(lexicon, Morph::load(dict)?);
//!
//! let result = analyzer.analyze("The bank approved my loan application.");
//! println!("ambiguity score: {}", result.ambiguity_score);
//! # Ok(()) }
//! ```

mod analyzer;
mod detect;
mod fallback;
mod keywords;
mod result;
mod score;
mod sense;
mod text;

pub use analyzer::Analyzer;
pub use detect::AmbiguousWord;
pub use keywords::KeywordConfig;
pub use result::{AnalysisResult, DecisionSource, OccurrenceReport};
pub use score::{Confidence, NO_MATCH, ScoreWeights};
pub use sense::{ModalSense, Sense, modal_definition};
