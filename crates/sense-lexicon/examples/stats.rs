use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use sense_lexicon::{Lexicon, LoadMode};
use tagset::Pos;

fn main() -> Result<()> {
    let dict_dir = env::args()
        .nth(1)
        .map(PathBuf::from)
        .context("usage: cargo run -p sense-lexicon --example stats -- <path-to-dict-dir>")?;

    let lex = Lexicon::load_with_mode(&dict_dir, LoadMode::Mmap)
        .with_context(|| format!("loading dictionary from {}", dict_dir.display()))?;

    println!("Dictionary: {}", dict_dir.display());
    println!("Lemma keys: {}", lex.lemma_count());
    println!("Synsets   : {}", lex.synset_count());

    // Spot-check a few lemmas to confirm sense lookup.
    for (pos, lemma) in [(Pos::Noun, "bank"), (Pos::Verb, "run"), (Pos::Adj, "happy")] {
        let senses = lex.senses(pos, lemma);
        println!("\n'{}' ({}): {} sense(s)", lemma, pos, senses.len());
        for sense in senses.iter().take(3) {
            println!("  - {}", sense.definition());
            if !sense.antonyms().is_empty() {
                println!("    antonyms: {}", sense.antonyms().join(", "));
            }
        }
    }

    Ok(())
}
