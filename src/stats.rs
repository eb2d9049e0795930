use crate::Symbol;
use crate::codebook::{Codebook, WeightTrace};

/// Average code lengths of a message, for comparing a Huffman code against
/// a fixed-width code over the same alphabet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CodeStats {
    /// Symbols in the message.
    pub message_len: usize,
    /// Bits in the Huffman-encoded message.
    pub encoded_bits: usize,
    /// log2 of the alphabet size.
    pub naive_bits_per_symbol: f64,
    pub huffman_bits_per_symbol: f64,
}

impl CodeStats {
    /// `weights` must come from the same walk as `codebook`, and the message
    /// must be the one the tree was built from.
    pub fn new<S: Symbol>(
        codebook: &Codebook<S>,
        weights: &WeightTrace,
        message_len: usize,
    ) -> Self {
        // Every internal node is crossed once per symbol beneath it, so the
        // trace sums to the encoded length. A one-leaf tree has no trace.
        let encoded_bits = if weights.is_empty() {
            codebook.iter().map(|(_, code)| code.len()).sum::<usize>() * message_len
        } else {
            weights.total()
        };

        let naive_bits_per_symbol = match codebook.len() {
            0 | 1 => 0.0,
            n => (n as f64).log2(),
        };
        let huffman_bits_per_symbol = if message_len == 0 {
            0.0
        } else {
            encoded_bits as f64 / message_len as f64
        };

        CodeStats {
            message_len,
            encoded_bits,
            naive_bits_per_symbol,
            huffman_bits_per_symbol,
        }
    }
}
