use std::collections::{HashMap, HashSet};

use crate::analyzer::Analyzer;
use crate::text;

const DEFAULT_TOP_N: usize = 10;

const STOPWORDS: &[&str] = &[
    "the", "is", "and", "a", "an", "to", "of", "in", "that", "on", "for", "with", "as", "by",
    "was", "were", "it", "he", "she", "they", "we", "this", "his", "her", "from", "at", "or",
    "not", "but", "be", "been", "are", "you", "i", "me", "my", "your", "their", "our", "them",
    "us", "do", "does", "did", "doing", "so", "if", "because", "while", "up", "down", "out",
    "about", "into", "over", "after", "again", "further", "then", "once",
];

/// Modal-like words that stay keywords even though they read like stopwords.
const IMPORTANT_STOPWORDS: &[&str] = &[
    "can", "not", "will", "must", "should", "may", "might", "shall", "could", "would",
];

/// Stopword tables and the keyword budget, built once and handed to the
/// analyzer rather than living in globals.
#[derive(Clone, Debug)]
pub struct KeywordConfig {
    pub stopwords: HashSet<String>,
    pub important: HashSet<String>,
    pub top_n: usize,
}

impl Default for KeywordConfig {
    fn default() -> Self {
        Self {
            stopwords: STOPWORDS.iter().map(|w| w.to_string()).collect(),
            important: IMPORTANT_STOPWORDS.iter().map(|w| w.to_string()).collect(),
            top_n: DEFAULT_TOP_N,
        }
    }
}

impl KeywordConfig {
    pub(crate) fn is_stopword(&self, lemma: &str) -> bool {
        self.stopwords.contains(lemma)
    }
}

/// Extract context keywords: alphabetic lemmas that survive the stopword
/// filter, each repeated by its frequency, ordered by descending frequency
/// (first seen wins ties), truncated to the configured budget.
pub(crate) fn extract(an: &Analyzer, text: &str) -> Vec<String> {
    let lemmas = text::lemmatize_all(an, text);
    // The passage's own lemma set is computed once and reused for every
    // contextual-importance probe.
    let passage: HashSet<&str> = lemmas.iter().map(String::as_str).collect();

    let mut decisions: HashMap<&str, bool> = HashMap::new();
    let mut order: Vec<String> = Vec::new();
    let mut counts: HashMap<String, usize> = HashMap::new();
    for lemma in &lemmas {
        if lemma.is_empty() || !lemma.chars().all(char::is_alphabetic) {
            continue;
        }
        let keep = *decisions
            .entry(lemma.as_str())
            .or_insert_with(|| survives_filter(an, lemma, &passage));
        if !keep {
            continue;
        }
        let count = counts.entry(lemma.clone()).or_insert(0);
        if *count == 0 {
            order.push(lemma.clone());
        }
        *count += 1;
    }

    let mut ranked: Vec<(String, usize)> = order
        .into_iter()
        .map(|lemma| {
            let count = counts[&lemma];
            (lemma, count)
        })
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));

    let mut out = Vec::new();
    for (lemma, count) in ranked {
        for _ in 0..count {
            out.push(lemma.clone());
        }
    }
    out.truncate(an.keywords.top_n);
    out
}

fn survives_filter(an: &Analyzer, lemma: &str, passage: &HashSet<&str>) -> bool {
    !an.keywords.is_stopword(lemma)
        || an.keywords.important.contains(lemma)
        || contextually_important(an, lemma, passage)
}

/// A stopword earns keyword status when any of its sense definitions shares
/// a lemma with the passage itself.
fn contextually_important(an: &Analyzer, lemma: &str, passage: &HashSet<&str>) -> bool {
    an.lexicon.senses_any_pos(lemma).iter().any(|sense| {
        text::lemmatize_all(an, sense.definition())
            .iter()
            .any(|token| passage.contains(token.as_str()))
    })
}
