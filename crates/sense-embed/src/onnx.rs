use std::collections::HashMap;
use std::path::Path;
use std::sync::Mutex;

use ndarray::{Array, Axis, Ix2, Ix3};
use ort::session::builder::GraphOptimizationLevel;
use ort::session::{Session, SessionInputs};
use ort::value::{DynTensor, Tensor};
use tokenizers::{Tokenizer, TruncationParams};
use tracing::info;

use crate::{EncodeError, SentenceEncoder, normalize};

const DEFAULT_MAX_LENGTH: usize = 512;

/// Transformer sentence encoder backed by a local ONNX model.
///
/// The model and tokenizer are loaded once; after that the instance is
/// read-only except for the session lock. ONNX Runtime sessions are not
/// assumed reentrant, so encode calls are serialized behind that lock;
/// callers doing lexical-only work are never blocked by it.
#[derive(Debug)]
pub struct OnnxEncoder {
    session: Mutex<Session>,
    tokenizer: Tokenizer,
}

impl OnnxEncoder {
    /// Load a sentence-embedding model from an ONNX file and its matching
    /// `tokenizer.json`.
    pub fn load(
        model_path: impl AsRef<Path>,
        tokenizer_path: impl AsRef<Path>,
    ) -> Result<Self, EncodeError> {
        let model_path = model_path.as_ref();
        let tokenizer_path = tokenizer_path.as_ref();
        if !model_path.exists() || !tokenizer_path.exists() {
            return Err(EncodeError::Model(format!(
                "model files missing: expected ONNX at {} and tokenizer at {}",
                model_path.display(),
                tokenizer_path.display(),
            )));
        }

        let mut tokenizer = Tokenizer::from_file(tokenizer_path)
            .map_err(|e| EncodeError::Model(format!("tokenizer load failed: {e}")))?;
        tokenizer
            .with_truncation(Some(TruncationParams {
                max_length: DEFAULT_MAX_LENGTH,
                ..TruncationParams::default()
            }))
            .map_err(|e| EncodeError::Model(format!("tokenizer truncation setup failed: {e}")))?;

        let session = Session::builder()
            .map_err(|e| EncodeError::Model(e.to_string()))?
            .with_optimization_level(GraphOptimizationLevel::Level3)
            .map_err(|e| EncodeError::Model(e.to_string()))?
            .with_intra_threads(1)
            .map_err(|e| EncodeError::Model(e.to_string()))?
            .commit_from_file(model_path)
            .map_err(|e| EncodeError::Model(format!("failed to load ONNX model: {e}")))?;

        info!("loaded ONNX sentence encoder from {}", model_path.display());

        Ok(Self {
            session: Mutex::new(session),
            tokenizer,
        })
    }
}

impl SentenceEncoder for OnnxEncoder {
    fn encode(&self, text: &str) -> Result<Vec<f32>, EncodeError> {
        let encoding = self
            .tokenizer
            .encode(text, true)
            .map_err(|e| EncodeError::Tokenize(e.to_string()))?;
        let seq_len = encoding.len();
        if seq_len == 0 {
            return Err(EncodeError::Tokenize("empty token sequence".into()));
        }

        let ids: Vec<i64> = encoding.get_ids().iter().map(|v| i64::from(*v)).collect();
        let mask: Vec<i64> = encoding
            .get_attention_mask()
            .iter()
            .map(|v| i64::from(*v))
            .collect();
        let type_ids: Vec<i64> = encoding
            .get_type_ids()
            .iter()
            .map(|v| i64::from(*v))
            .collect();

        let mut available: HashMap<&str, DynTensor> = HashMap::new();
        available.insert("input_ids", dyn_tensor(seq_len, ids)?);
        available.insert("attention_mask", dyn_tensor(seq_len, mask.clone())?);
        available.insert("token_type_ids", dyn_tensor(seq_len, type_ids)?);

        let array = {
            let mut session = self
                .session
                .lock()
                .map_err(|_| EncodeError::Inference("encoder lock poisoned".into()))?;

            let mut feed: HashMap<String, DynTensor> = HashMap::new();
            for input in session.inputs() {
                let name = input.name();
                match available.get(name) {
                    Some(tensor) => {
                        feed.insert(name.to_string(), tensor.clone());
                    }
                    None => {
                        return Err(EncodeError::Inference(format!(
                            "model expects unsupported input '{name}'"
                        )));
                    }
                }
            }

            let outputs = session
                .run(SessionInputs::from(feed))
                .map_err(|e| EncodeError::Inference(e.to_string()))?;
            if outputs.len() == 0 {
                return Err(EncodeError::Output("model returned no outputs".into()));
            }
            outputs[0]
                .try_extract_array::<f32>()
                .map_err(|e| EncodeError::Output(e.to_string()))?
                .to_owned()
        };

        let mut embedding = match array.ndim() {
            // Pooled output: one row per input text.
            2 => {
                let pooled = array
                    .into_dimensionality::<Ix2>()
                    .map_err(|e| EncodeError::Output(e.to_string()))?;
                pooled
                    .outer_iter()
                    .next()
                    .ok_or_else(|| EncodeError::Output("empty pooled output".into()))?
                    .to_owned()
                    .to_vec()
            }
            // Token-level hidden states: mean-pool over attended tokens.
            3 => {
                let hidden = array
                    .into_dimensionality::<Ix3>()
                    .map_err(|e| EncodeError::Output(e.to_string()))?;
                let sample = hidden
                    .outer_iter()
                    .next()
                    .ok_or_else(|| EncodeError::Output("empty hidden states".into()))?;
                mean_pool(sample, &mask)
            }
            other => {
                return Err(EncodeError::Output(format!(
                    "unexpected output rank {other}"
                )));
            }
        };

        normalize(&mut embedding);
        Ok(embedding)
    }
}

fn dyn_tensor(seq_len: usize, values: Vec<i64>) -> Result<DynTensor, EncodeError> {
    let array = Array::from_shape_vec((1, seq_len), values)
        .map_err(|e| EncodeError::Inference(format!("tensor shape error: {e}")))?;
    Ok(Tensor::from_array(array.into_dyn())
        .map_err(|e| EncodeError::Inference(e.to_string()))?
        .upcast())
}

fn mean_pool(sample: ndarray::ArrayView2<'_, f32>, mask: &[i64]) -> Vec<f32> {
    let hidden = sample.len_of(Axis(1));
    let mut sum = vec![0.0f32; hidden];
    let mut count = 0.0f32;

    for (token_idx, token) in sample.outer_iter().enumerate() {
        if *mask.get(token_idx).unwrap_or(&0) == 0 {
            continue;
        }
        count += 1.0;
        for (dim, value) in token.iter().enumerate() {
            sum[dim] += value;
        }
    }

    if count == 0.0 {
        return sum;
    }
    for value in &mut sum {
        *value /= count;
    }
    sum
}
