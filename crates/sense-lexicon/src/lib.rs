//! Load WordNet-format dictionaries as a sense lookup table.
//!
//! This crate ingests the canonical `data.*`/`index.*` files and turns them
//! into the one thing the disambiguation pipeline asks for: the list of
//! [`LexicalSense`] records for a (lemma, [`Pos`]) pair, each carrying a
//! definition, example sentences, the synonym lemmas sharing the synset, and
//! the antonym lemmas reachable through `!` pointers. Antonyms are resolved
//! once at load time, so lookups after [`Lexicon::load`] never chase
//! cross-synset references.
//!
//! The loader reads each file through [`LoadMode::Mmap`] by default and falls
//! back to owned buffers with [`LoadMode::Owned`]; either way the parsed
//! lexicon owns its strings and the source files are released after loading.
//! All lookup methods take `&self` over immutable maps, so a loaded lexicon
//! can be shared across threads behind an `Arc` without locking.
//!
//! # Example
//! ```no_run
//! use sense_lexicon::Lexicon;
//! use tagset::Pos;
//!
//! # fn main() -> anyhow::Result<()> {
//! let lex = Lexicon::load("/path/to/wordnet")?;
//! for sense in lex.senses(Pos::Noun, "bank") {
//!     println!("{}", sense.definition());
//! }
//! # Ok(()) }
//! ```
//!
//! For a runnable demo, see `cargo run -p sense-lexicon --example stats -- <dict>`.

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use memmap2::Mmap;
use tagset::Pos;

/// Strategy for reading dictionary files during load.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LoadMode {
    /// Memory-map each file while parsing (fast, no copy of the source).
    Mmap,
    /// Read each file into an owned buffer first (portable fallback).
    Owned,
}

/// One word sense: a definition, its example sentences, and the synonym and
/// antonym lemmas attached to it. All strings are owned and lowercased where
/// WordNet lowercases (lemmas keep their `_` collocation joints).
#[derive(Clone, Debug)]
pub struct LexicalSense {
    definition: String,
    examples: Vec<String>,
    synonyms: Vec<String>,
    antonyms: Vec<String>,
}

impl LexicalSense {
    /// Assemble a sense from its parts. Exposed so callers can build senses
    /// for tests or for sources other than dictionary files.
    pub fn new(
        definition: impl Into<String>,
        examples: Vec<String>,
        synonyms: Vec<String>,
        antonyms: Vec<String>,
    ) -> Self {
        Self {
            definition: definition.into(),
            examples,
            synonyms,
            antonyms,
        }
    }

    pub fn definition(&self) -> &str {
        &self.definition
    }

    pub fn examples(&self) -> &[String] {
        &self.examples
    }

    pub fn synonyms(&self) -> &[String] {
        &self.synonyms
    }

    pub fn antonyms(&self) -> &[String] {
        &self.antonyms
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
struct SynsetId {
    pos: Pos,
    offset: u32,
}

struct RawSynset {
    words: Vec<String>,
    antonym_links: Vec<(SynsetId, Option<u16>)>,
    definition: String,
    examples: Vec<String>,
}

/// In-memory sense table built from a WordNet-format dictionary directory.
#[derive(Debug)]
pub struct Lexicon {
    senses: HashMap<SynsetId, LexicalSense>,
    lemma_index: HashMap<(Pos, String), Vec<SynsetId>>,
}

impl Lexicon {
    /// Load a dictionary from a directory containing `data.*`/`index.*` files,
    /// memory-mapping the sources.
    pub fn load(dict_dir: impl AsRef<Path>) -> Result<Self> {
        Self::load_with_mode(dict_dir, LoadMode::Mmap)
    }

    /// Load a dictionary choosing between mmap and owned buffers at runtime.
    pub fn load_with_mode(dict_dir: impl AsRef<Path>, mode: LoadMode) -> Result<Self> {
        let dir = dict_dir.as_ref();
        let files = [
            ("index.noun", "data.noun", Pos::Noun),
            ("index.verb", "data.verb", Pos::Verb),
            ("index.adj", "data.adj", Pos::Adj),
            ("index.adv", "data.adv", Pos::Adv),
        ];
        for (index_name, data_name, _) in &files {
            for name in [index_name, data_name] {
                let path = dir.join(name);
                if !path.exists() {
                    anyhow::bail!("missing required dictionary file: {}", path.display());
                }
            }
        }

        let mut lemma_index = HashMap::new();
        let mut raw = HashMap::new();
        for (index_name, data_name, pos) in files {
            let index_bytes = read_file(dir.join(index_name), mode)?;
            parse_index(index_bytes.as_slice(), index_name, pos, &mut lemma_index)?;
            let data_bytes = read_file(dir.join(data_name), mode)?;
            parse_data(data_bytes.as_slice(), data_name, pos, &mut raw)?;
        }

        let senses = resolve_senses(&raw);
        Ok(Self {
            senses,
            lemma_index,
        })
    }

    /// Check whether a lemma has at least one sense under the given category.
    pub fn lemma_exists(&self, pos: Pos, lemma: &str) -> bool {
        self.lemma_index
            .contains_key(&(pos, normalize_lemma(lemma)))
    }

    /// Senses for (lemma, category) in dictionary order, most frequent first.
    /// Unknown lemmas yield an empty list.
    pub fn senses(&self, pos: Pos, lemma: &str) -> Vec<&LexicalSense> {
        let key = (pos, normalize_lemma(lemma));
        let Some(ids) = self.lemma_index.get(&key) else {
            return Vec::new();
        };
        ids.iter().filter_map(|id| self.senses.get(id)).collect()
    }

    /// Senses for a lemma across every category, noun through adverb.
    pub fn senses_any_pos(&self, lemma: &str) -> Vec<&LexicalSense> {
        Pos::ALL
            .iter()
            .flat_map(|pos| self.senses(*pos, lemma))
            .collect()
    }

    /// Number of (lemma, category) keys.
    pub fn lemma_count(&self) -> usize {
        self.lemma_index.len()
    }

    /// Number of synsets parsed.
    pub fn synset_count(&self) -> usize {
        self.senses.len()
    }
}

enum FileBytes {
    Mapped(Mmap),
    Owned(Vec<u8>),
}

impl FileBytes {
    fn as_slice(&self) -> &[u8] {
        match self {
            FileBytes::Mapped(m) => m.as_ref(),
            FileBytes::Owned(v) => v.as_slice(),
        }
    }
}

fn read_file(path: PathBuf, mode: LoadMode) -> Result<FileBytes> {
    let file = File::open(&path).with_context(|| format!("open {}", path.display()))?;
    match mode {
        LoadMode::Mmap => unsafe { Mmap::map(&file) }
            .map(FileBytes::Mapped)
            .with_context(|| format!("mmap {}", path.display())),
        LoadMode::Owned => {
            let mut file = file;
            let mut buf = Vec::new();
            file.read_to_end(&mut buf)
                .with_context(|| format!("read {}", path.display()))?;
            Ok(FileBytes::Owned(buf))
        }
    }
}

fn parse_index(
    bytes: &[u8],
    name: &str,
    pos: Pos,
    lemma_index: &mut HashMap<(Pos, String), Vec<SynsetId>>,
) -> Result<()> {
    for (lineno, line) in lines(bytes) {
        let tokens: Vec<&str> = line.split_ascii_whitespace().collect();
        if tokens.len() < 6 {
            anyhow::bail!("{name}:{lineno} malformed index line (too few tokens)");
        }

        let lemma = normalize_lemma(tokens[0]);
        let synset_cnt: usize = tokens[2]
            .parse()
            .with_context(|| format!("{name}:{lineno} synset_cnt"))?;
        let p_cnt: usize = tokens[3]
            .parse()
            .with_context(|| format!("{name}:{lineno} p_cnt"))?;

        // Skip the pointer-symbol list and the two sense-count fields; only
        // the trailing synset offsets matter for sense lookup.
        let offsets_at = 4 + p_cnt + 2;
        if tokens.len() < offsets_at + synset_cnt {
            anyhow::bail!("{name}:{lineno} synset offsets truncated");
        }
        let ids = tokens[offsets_at..offsets_at + synset_cnt]
            .iter()
            .map(|t| {
                t.parse::<u32>()
                    .map(|offset| SynsetId { pos, offset })
                    .with_context(|| format!("{name}:{lineno} synset offset"))
            })
            .collect::<Result<Vec<_>>>()?;

        lemma_index.insert((pos, lemma), ids);
    }
    Ok(())
}

fn parse_data(
    bytes: &[u8],
    name: &str,
    pos: Pos,
    raw: &mut HashMap<SynsetId, RawSynset>,
) -> Result<()> {
    for (lineno, line) in lines(bytes) {
        let (left, gloss) = match line.split_once('|') {
            Some((l, g)) => (l.trim(), g),
            None => (line.trim(), ""),
        };
        let tokens: Vec<&str> = left.split_ascii_whitespace().collect();
        if tokens.len() < 4 {
            anyhow::bail!("{name}:{lineno} malformed data line");
        }

        let offset: u32 = tokens[0]
            .parse()
            .with_context(|| format!("{name}:{lineno} offset"))?;
        let ss_type = tokens[2]
            .chars()
            .next()
            .and_then(Pos::from_char)
            .with_context(|| format!("{name}:{lineno} ss_type"))?;
        // Satellite adjectives ('s') live in data.adj; accept any marker that
        // agrees with the file's category.
        if ss_type != pos {
            anyhow::bail!("{name}:{lineno} ss_type disagrees with file");
        }

        let w_cnt = usize::from_str_radix(tokens[3], 16)
            .with_context(|| format!("{name}:{lineno} w_cnt"))?;
        let mut idx = 4;
        if tokens.len() < idx + w_cnt * 2 {
            anyhow::bail!("{name}:{lineno} not enough word/lex_id pairs");
        }
        let mut words = Vec::with_capacity(w_cnt);
        for _ in 0..w_cnt {
            words.push(tokens[idx].to_string());
            idx += 2;
        }

        if tokens.len() <= idx {
            anyhow::bail!("{name}:{lineno} missing pointer count");
        }
        let p_cnt: usize = tokens[idx]
            .parse()
            .with_context(|| format!("{name}:{lineno} p_cnt"))?;
        idx += 1;

        let mut antonym_links = Vec::new();
        for _ in 0..p_cnt {
            if tokens.len() < idx + 4 {
                anyhow::bail!("{name}:{lineno} incomplete pointer block");
            }
            if tokens[idx] == "!" {
                let target_offset: u32 = tokens[idx + 1]
                    .parse()
                    .with_context(|| format!("{name}:{lineno} pointer offset"))?;
                let target_pos = tokens[idx + 2]
                    .chars()
                    .next()
                    .and_then(Pos::from_char)
                    .with_context(|| format!("{name}:{lineno} pointer pos"))?;
                antonym_links.push((
                    SynsetId {
                        pos: target_pos,
                        offset: target_offset,
                    },
                    target_word_number(tokens[idx + 3]),
                ));
            }
            idx += 4;
        }
        // Verb lines carry a trailing frame section; nothing in sense lookup
        // uses it, so the remaining tokens are ignored.

        let (definition, examples) = split_gloss(gloss);
        let id = SynsetId { pos, offset };
        raw.insert(
            id,
            RawSynset {
                words,
                antonym_links,
                definition,
                examples,
            },
        );
    }
    Ok(())
}

/// Turn raw synsets into sense records, chasing antonym links now so lookups
/// never have to.
fn resolve_senses(raw: &HashMap<SynsetId, RawSynset>) -> HashMap<SynsetId, LexicalSense> {
    let mut senses = HashMap::with_capacity(raw.len());
    for (id, synset) in raw {
        let synonyms: Vec<String> = synset.words.iter().map(|w| word_to_lemma(w)).collect();
        let mut antonyms = Vec::new();
        for (target, word_number) in &synset.antonym_links {
            let Some(target_synset) = raw.get(target) else {
                continue;
            };
            match word_number {
                // Word numbers are 1-based in the pointer encoding.
                Some(n) => {
                    if let Some(word) = target_synset.words.get(*n as usize - 1) {
                        antonyms.push(word_to_lemma(word));
                    }
                }
                None => {
                    antonyms.extend(target_synset.words.iter().map(|w| word_to_lemma(w)));
                }
            }
        }
        senses.insert(
            *id,
            LexicalSense {
                definition: synset.definition.clone(),
                examples: synset.examples.clone(),
                synonyms,
                antonyms,
            },
        );
    }
    senses
}

/// Iterate content lines with 1-based numbering, skipping the license header
/// (lines starting with whitespace) and blank lines.
fn lines(bytes: &[u8]) -> impl Iterator<Item = (usize, &str)> {
    bytes
        .split(|b| *b == b'\n')
        .enumerate()
        .filter_map(|(i, raw_line)| {
            let line = match raw_line.strip_suffix(b"\r") {
                Some(stripped) => stripped,
                None => raw_line,
            };
            if line.is_empty() || matches!(line.first(), Some(b' ' | b'\t')) {
                return None;
            }
            std::str::from_utf8(line).ok().map(|s| (i + 1, s))
        })
}

/// Split a gloss into the definition (text before the first `;` outside
/// quotes) and the quoted example sentences.
fn split_gloss(gloss: &str) -> (String, Vec<String>) {
    let trimmed = gloss.trim();
    let mut examples = Vec::new();
    let mut in_quote = false;
    let mut quote_start: Option<usize> = None;
    let mut def_end = trimmed.len();
    for (idx, ch) in trimmed.char_indices() {
        match ch {
            '"' => {
                if in_quote {
                    if let Some(start) = quote_start.take()
                        && idx > start + 1
                    {
                        examples.push(trimmed[start + 1..idx].to_string());
                    }
                } else {
                    quote_start = Some(idx);
                }
                in_quote = !in_quote;
            }
            ';' if !in_quote && def_end == trimmed.len() => {
                def_end = idx;
            }
            _ => {}
        }
    }
    (trimmed[..def_end].trim().to_string(), examples)
}

/// Low byte of the four-hex pointer source/target field: the 1-based word
/// number inside the target synset, or `None` when unspecified.
fn target_word_number(hex4: &str) -> Option<u16> {
    if hex4.len() != 4 {
        return None;
    }
    match u16::from_str_radix(hex4, 16) {
        Ok(val) => {
            let dst = val & 0x00FF;
            if dst == 0 { None } else { Some(dst) }
        }
        Err(_) => None,
    }
}

fn normalize_lemma(text: &str) -> String {
    let mut s = text.trim().to_string();
    s.make_ascii_lowercase();
    s.replace(' ', "_")
}

/// Lowercase a data-file word and drop the adjective syntactic marker
/// (`happy(p)` carries position information, not part of the lemma).
fn word_to_lemma(word: &str) -> String {
    let base = match word.find('(') {
        Some(open) if word.ends_with(')') => &word[..open],
        _ => word,
    };
    base.to_lowercase()
}
