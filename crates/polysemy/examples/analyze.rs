use std::env;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result, bail};
use morphotag::Morph;
use polysemy::Analyzer;
use sense_embed::{HashEncoder, OnnxEncoder, SentenceEncoder};
use sense_lexicon::{Lexicon, LoadMode};
use tracing::info;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: cargo run -p polysemy --example analyze -- \
[--wordnet-dir <dir>] [--wordnet-mode=mmap|owned] [--encoder=onnx|hash|none] <text>";

fn main() -> Result<()> {
    init_tracing();

    let config = load_config()?;
    info!(
        "using wordnet at {} (mode: {:?})",
        config.wordnet_dir.display(),
        config.wordnet_mode
    );

    let start = Instant::now();
    let lexicon = Arc::new(
        Lexicon::load_with_mode(&config.wordnet_dir, config.wordnet_mode).with_context(|| {
            format!("loading dictionary from {}", config.wordnet_dir.display())
        })?,
    );
    let morph = Morph::load(&config.wordnet_dir).with_context(|| {
        format!(
            "loading exception lists from {}",
            config.wordnet_dir.display()
        )
    })?;
    info!(
        "dictionary loaded in {} ms ({} lemmas)",
        start.elapsed().as_millis(),
        lexicon.lemma_count()
    );

    let mut analyzer = Analyzer::new(lexicon, morph);
    if let Some(encoder) = build_encoder(&config.encoder_kind)? {
        analyzer = analyzer.with_encoder(encoder);
    }

    let result = analyzer.analyze(&config.passage);
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

#[derive(Debug, Clone)]
struct Config {
    wordnet_dir: PathBuf,
    wordnet_mode: LoadMode,
    encoder_kind: String,
    passage: String,
}

fn load_config() -> Result<Config> {
    let mut cli_wordnet_dir: Option<PathBuf> = None;
    let mut cli_wordnet_mode: Option<LoadMode> = None;
    let mut encoder_kind = env::var("ENCODER").unwrap_or_else(|_| "hash".to_string());
    let mut passage: Option<String> = None;

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--wordnet-dir" {
            if let Some(path) = args.next() {
                cli_wordnet_dir = Some(PathBuf::from(path));
            }
        } else if let Some(path) = arg.strip_prefix("--wordnet-dir=") {
            cli_wordnet_dir = Some(PathBuf::from(path));
        } else if let Some(mode) = arg.strip_prefix("--wordnet-mode=") {
            cli_wordnet_mode = parse_load_mode(mode);
        } else if let Some(kind) = arg.strip_prefix("--encoder=") {
            encoder_kind = kind.to_string();
        } else if passage.is_none() {
            passage = Some(arg);
        } else {
            bail!(USAGE);
        }
    }

    let wordnet_dir = cli_wordnet_dir
        .or_else(|| env::var("WORDNET_DIR").ok().map(PathBuf::from))
        .context("set WORDNET_DIR or pass --wordnet-dir <dictionary directory>")?;
    let wordnet_mode = cli_wordnet_mode
        .or_else(|| {
            env::var("WORDNET_LOAD_MODE")
                .ok()
                .as_deref()
                .and_then(parse_load_mode)
        })
        .unwrap_or(LoadMode::Mmap);
    let passage = passage.context(USAGE)?;

    Ok(Config {
        wordnet_dir,
        wordnet_mode,
        encoder_kind,
        passage,
    })
}

fn parse_load_mode(raw: &str) -> Option<LoadMode> {
    match raw.to_ascii_lowercase().as_str() {
        "mmap" => Some(LoadMode::Mmap),
        "owned" => Some(LoadMode::Owned),
        _ => None,
    }
}

fn build_encoder(kind: &str) -> Result<Option<Arc<dyn SentenceEncoder>>> {
    match kind {
        "none" => Ok(None),
        "hash" => Ok(Some(Arc::new(HashEncoder::default()))),
        "onnx" => {
            let model = env::var("ENCODER_ONNX_PATH")
                .context("ENCODER_ONNX_PATH must point at the model file")?;
            let tokenizer = env::var("ENCODER_TOKENIZER_PATH")
                .context("ENCODER_TOKENIZER_PATH must point at tokenizer.json")?;
            let encoder = OnnxEncoder::load(model, tokenizer)?;
            Ok(Some(Arc::new(encoder)))
        }
        other => bail!("unknown encoder kind '{other}' (expected onnx, hash, or none)"),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .init();
}
