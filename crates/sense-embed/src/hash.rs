use unicode_segmentation::UnicodeSegmentation;

use crate::{EncodeError, SentenceEncoder, normalize};

const DEFAULT_DIMENSION: usize = 256;

/// Deterministic bag-of-words encoder built on feature hashing.
///
/// Each lowercased word token hashes to a pseudo-random unit-range vector;
/// the text embedding is the normalized sum. Two texts score high only when
/// they share tokens, which is exactly the degraded behavior wanted when no
/// transformer model is available. Encoding never fails.
#[derive(Clone, Debug)]
pub struct HashEncoder {
    dimension: usize,
}

impl HashEncoder {
    pub fn new(dimension: usize) -> Self {
        Self { dimension }
    }
}

impl Default for HashEncoder {
    fn default() -> Self {
        Self::new(DEFAULT_DIMENSION)
    }
}

impl SentenceEncoder for HashEncoder {
    fn encode(&self, text: &str) -> Result<Vec<f32>, EncodeError> {
        let mut sum = vec![0.0f32; self.dimension];
        for word in text.unicode_words() {
            let token = word.to_lowercase();
            accumulate_token(&mut sum, &token);
        }
        normalize(&mut sum);
        Ok(sum)
    }
}

fn accumulate_token(sum: &mut [f32], token: &str) {
    let mut state = fnv1a_64(token.as_bytes())
        ^ (sum.len() as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15);
    for slot in sum.iter_mut() {
        let bits = splitmix64(&mut state);
        let mantissa = ((bits >> 32) as u32) >> 9;
        let unit = f32::from_bits(0x3f80_0000 | mantissa) - 1.0;
        *slot += unit.mul_add(2.0, -1.0);
    }
}

fn fnv1a_64(bytes: &[u8]) -> u64 {
    let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
    for byte in bytes {
        hash ^= u64::from(*byte);
        hash = hash.wrapping_mul(0x0000_0100_0000_01b3);
    }
    hash
}

fn splitmix64(state: &mut u64) -> u64 {
    *state = state.wrapping_add(0x9E37_79B9_7F4A_7C15);
    let mut z = *state;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cosine_similarity;

    #[test]
    fn encoding_is_deterministic() {
        let enc = HashEncoder::default();
        let a = enc.encode("the bank approved the loan").unwrap();
        let b = enc.encode("the bank approved the loan").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn embeddings_are_unit_length() {
        let enc = HashEncoder::default();
        let v = enc.encode("sloping land beside a river").unwrap();
        let norm: f32 = v.iter().map(|x| x * x).sum::<f32>().sqrt();
        assert!((norm - 1.0).abs() < 1e-5);
    }

    #[test]
    fn empty_text_encodes_to_zero() {
        let enc = HashEncoder::default();
        let v = enc.encode("").unwrap();
        assert!(v.iter().all(|x| *x == 0.0));
    }

    #[test]
    fn shared_tokens_raise_similarity() {
        let enc = HashEncoder::new(384);
        let anchor = enc.encode("loan").unwrap();
        let overlapping = enc.encode("loan application").unwrap();
        let disjoint = enc.encode("zebra quartz").unwrap();
        assert!(
            cosine_similarity(&anchor, &overlapping) > cosine_similarity(&anchor, &disjoint)
        );
    }
}
