use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tagset::Pos;

/// Morphy-style lemmatizer: exception lists plus POS-specific suffix rules,
/// validated against a caller-provided lemma existence predicate.
pub struct Morph {
    exceptions: HashMap<Pos, HashMap<String, Vec<String>>>,
}

impl Morph {
    /// Load morphy exception lists (`*.exc`) from a dictionary directory.
    ///
    /// The files are optional; missing ones are treated as empty.
    pub fn load(dict_dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dict_dir.as_ref();
        Ok(Self {
            exceptions: HashMap::from([
                (Pos::Noun, load_exc(dir.join("noun.exc"))?),
                (Pos::Verb, load_exc(dir.join("verb.exc"))?),
                (Pos::Adj, load_exc(dir.join("adj.exc"))?),
                (Pos::Adv, load_exc(dir.join("adv.exc"))?),
            ]),
        })
    }

    /// A lemmatizer with no exception lists; suffix rules still apply.
    pub fn empty() -> Self {
        Self {
            exceptions: HashMap::new(),
        }
    }

    /// Reduce a surface form to its dictionary lemma under the given
    /// category.
    ///
    /// Of the candidates the predicate confirms, the shortest wins (first
    /// seen on ties). When nothing is confirmed the normalized surface form
    /// is returned unchanged, so this never fails.
    pub fn lemmatize<F>(&self, pos: Pos, surface: &str, lemma_exists: F) -> String
    where
        F: Fn(Pos, &str) -> bool,
    {
        let surface = normalize(surface);
        let candidates = self.candidates(pos, &surface, lemma_exists);
        candidates
            .into_iter()
            .min_by_key(String::len)
            .unwrap_or(surface)
    }

    /// True when the surface form reduces to at least one confirmed lemma.
    pub fn has_lemma<F>(&self, pos: Pos, surface: &str, lemma_exists: F) -> bool
    where
        F: Fn(Pos, &str) -> bool,
    {
        !self
            .candidates(pos, &normalize(surface), lemma_exists)
            .is_empty()
    }

    /// All confirmed lemma candidates for a normalized surface form, in
    /// surface → exception → rule order, deduplicated.
    fn candidates<F>(&self, pos: Pos, surface: &str, lemma_exists: F) -> Vec<String>
    where
        F: Fn(Pos, &str) -> bool,
    {
        let mut seen = HashSet::new();
        let mut out = Vec::new();

        if lemma_exists(pos, surface) {
            seen.insert(surface.to_string());
            out.push(surface.to_string());
        }

        if let Some(exc_map) = self.exceptions.get(&pos)
            && let Some(entries) = exc_map.get(surface)
        {
            for lemma in entries {
                if lemma_exists(pos, lemma) && seen.insert(lemma.clone()) {
                    out.push(lemma.clone());
                }
            }
        }

        for (suffix, replacement) in rules_for(pos) {
            if let Some(candidate) = apply_rule(surface, suffix, replacement)
                && lemma_exists(pos, &candidate)
                && seen.insert(candidate.clone())
            {
                out.push(candidate);
            }
        }

        out
    }
}

fn load_exc(path: PathBuf) -> Result<HashMap<String, Vec<String>>> {
    if !path.exists() {
        return Ok(HashMap::new());
    }
    let file =
        File::open(&path).with_context(|| format!("open exception file {}", path.display()))?;
    let reader = BufReader::new(file);
    let mut map = HashMap::new();
    for (lineno, line) in reader.lines().enumerate() {
        let line =
            line.with_context(|| format!("read line {} in {}", lineno + 1, path.display()))?;
        let mut parts = line.split_whitespace();
        let surface = match parts.next() {
            Some(s) => normalize(s),
            None => continue,
        };
        let lemmas: Vec<String> = parts.map(normalize).collect();
        if !lemmas.is_empty() {
            map.insert(surface, lemmas);
        }
    }
    Ok(map)
}

pub(crate) fn normalize(text: &str) -> String {
    text.trim().to_lowercase().replace(' ', "_")
}

fn apply_rule(surface: &str, suffix: &str, replacement: &str) -> Option<String> {
    surface.strip_suffix(suffix).map(|stem| {
        let mut candidate = if replacement.is_empty() {
            stem.to_string()
        } else {
            format!("{stem}{replacement}")
        };

        // Undo doubled consonants from inflection ("stopped" -> "stopp").
        if replacement.is_empty() && candidate.len() >= 2 {
            let mut chars = candidate.chars();
            let last = chars.next_back();
            let prev = chars.next_back();
            if let (Some(a), Some(b)) = (last, prev)
                && a == b
            {
                candidate.pop();
            }
        }

        candidate
    })
}

fn rules_for(pos: Pos) -> &'static [(&'static str, &'static str)] {
    match pos {
        Pos::Noun => &[
            ("s", ""),
            ("ses", "s"),
            ("xes", "x"),
            ("zes", "z"),
            ("ches", "ch"),
            ("shes", "sh"),
            ("men", "man"),
            ("ies", "y"),
        ],
        Pos::Verb => &[
            ("s", ""),
            ("ies", "y"),
            ("es", "e"),
            ("es", ""),
            ("ed", "e"),
            ("ed", ""),
            ("ing", "e"),
            ("ing", ""),
        ],
        Pos::Adj | Pos::Adv => &[("er", ""), ("er", "e"), ("est", ""), ("est", "e")],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fake_exists(targets: &[(&str, Pos)]) -> impl Fn(Pos, &str) -> bool {
        let set: HashSet<(Pos, String)> = targets
            .iter()
            .map(|(lemma, pos)| (*pos, normalize(lemma)))
            .collect();
        move |pos, lemma| set.contains(&(pos, normalize(lemma)))
    }

    #[test]
    fn exceptions_take_effect() {
        let mut morph = Morph::empty();
        morph.exceptions.insert(
            Pos::Noun,
            HashMap::from([("children".into(), vec!["child".into()])]),
        );

        let lemma = morph.lemmatize(Pos::Noun, "children", fake_exists(&[("child", Pos::Noun)]));
        assert_eq!(lemma, "child");
    }

    #[test]
    fn shortest_confirmed_candidate_wins() {
        let morph = Morph::empty();
        let exists = fake_exists(&[("running", Pos::Verb), ("run", Pos::Verb)]);
        assert_eq!(morph.lemmatize(Pos::Verb, "running", &exists), "run");
        assert!(morph.has_lemma(Pos::Verb, "running", &exists));
    }

    #[test]
    fn unconfirmed_surface_passes_through() {
        let morph = Morph::empty();
        let exists = fake_exists(&[]);
        assert_eq!(morph.lemmatize(Pos::Noun, "Gizmos", &exists), "gizmos");
        assert!(!morph.has_lemma(Pos::Noun, "gizmos", &exists));
    }

    #[test]
    fn doubled_consonant_is_undone() {
        let morph = Morph::empty();
        let exists = fake_exists(&[("stop", Pos::Verb)]);
        assert_eq!(morph.lemmatize(Pos::Verb, "stopped", &exists), "stop");
    }
}
