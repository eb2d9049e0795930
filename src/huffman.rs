//! All four stages in one value: count symbols, build leaves, build the
//! tree, derive the codebook.

use crate::Symbol;
use crate::codebook::{Codebook, SingleSymbolCode, WeightTrace, build_codebook_with};
use crate::decoder::{Decoder, DecoderOutput};
use crate::encoder::{Encoder, EncoderOutput};
use crate::frequency::FrequencyTable;
use crate::node::{Node, build_leaves};
use crate::stats::CodeStats;
use crate::tree::{BuildError, build_tree};
use biterator::Bit;
use log::debug;

/// A Huffman code together with everything it was derived from.
#[derive(Debug, Clone, PartialEq)]
pub struct HuffmanCode<S: Symbol> {
    frequencies: FrequencyTable<S>,
    tree: Node<S>,
    codebook: Codebook<S>,
    weights: WeightTrace,
}

impl<S: Symbol> HuffmanCode<S> {
    /// Build the code that is optimal for this particular input.
    pub fn from_symbols<I: IntoIterator<Item = S>>(symbols: I) -> Result<Self, BuildError> {
        Self::from_frequencies(symbols.into_iter().collect())
    }

    pub fn from_frequencies(frequencies: FrequencyTable<S>) -> Result<Self, BuildError> {
        Self::with_policy(frequencies, SingleSymbolCode::default())
    }

    /// Build the code, choosing what a one-symbol alphabet is encoded as.
    ///
    /// With [`SingleSymbolCode::Empty`] a one-symbol input encodes to no bits
    /// at all, so [`decode`](Self::decode) cannot recover it.
    pub fn with_policy(
        frequencies: FrequencyTable<S>,
        single: SingleSymbolCode,
    ) -> Result<Self, BuildError> {
        let tree = build_tree(build_leaves(&frequencies))?;
        let (codebook, weights) = build_codebook_with(&tree, single);
        debug!(
            "{} symbols, {} distinct, {} encoded bits",
            frequencies.total(),
            frequencies.len(),
            codebook.total_bits(&frequencies)
        );

        Ok(HuffmanCode {
            frequencies,
            tree,
            codebook,
            weights,
        })
    }

    pub fn frequencies(&self) -> &FrequencyTable<S> {
        &self.frequencies
    }

    pub fn tree(&self) -> &Node<S> {
        &self.tree
    }

    pub fn codebook(&self) -> &Codebook<S> {
        &self.codebook
    }

    pub fn weights(&self) -> &WeightTrace {
        &self.weights
    }

    pub fn encode<I>(&self, input: I) -> EncoderOutput<'_, S, I::IntoIter>
    where
        I: IntoIterator<Item = S>,
    {
        Encoder::new(&self.codebook).encode(input)
    }

    /// Decode bits produced by [`encode`](Self::encode). A one-symbol code
    /// built with [`SingleSymbolCode::Empty`] decodes to nothing.
    pub fn decode<I>(&self, input: I) -> DecoderOutput<'_, S, I::IntoIter>
    where
        I: IntoIterator<Item = Bit>,
    {
        Decoder::new(&self.tree).decode(input)
    }

    /// Statistics for the input the code was built from.
    pub fn stats(&self) -> CodeStats {
        CodeStats::new(&self.codebook, &self.weights, self.frequencies.total())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::example::HALLO_WELT;
    use crate::frequency::frequency;

    #[test_log::test]
    fn test_hallo_welt_codebook() {
        let code = HuffmanCode::from_symbols(HALLO_WELT.chars()).unwrap();
        let codes: Vec<(char, String)> = code
            .codebook()
            .iter()
            .map(|(symbol, code)| (*symbol, code.to_string()))
            .collect();
        assert_eq!(
            codes,
            vec![
                (' ', "0001".to_string()),
                ('H', "0000".to_string()),
                ('W', "111".to_string()),
                ('a', "110".to_string()),
                ('e', "101".to_string()),
                ('l', "01".to_string()),
                ('o', "100".to_string()),
                ('t', "001".to_string()),
            ]
        );
        assert_eq!(code.weights().as_slice(), &[10, 4, 2, 2, 6, 3, 2]);
    }

    #[test]
    fn test_hallo_welt_stats() {
        let stats = HuffmanCode::from_symbols(HALLO_WELT.chars())
            .unwrap()
            .stats();
        assert_eq!(stats.message_len, 10);
        assert_eq!(stats.encoded_bits, 29);
        assert_eq!(stats.naive_bits_per_symbol, 3.0);
        assert!((stats.huffman_bits_per_symbol - 2.9).abs() < 1e-12);
    }

    #[test]
    fn test_encode_decode() {
        let code = HuffmanCode::from_symbols(HALLO_WELT.bytes()).unwrap();
        let bits: Vec<Bit> = code
            .encode(HALLO_WELT.bytes())
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(bits.len(), 29);

        let decoded: Vec<u8> = code.decode(bits).collect::<Result<_, _>>().unwrap();
        assert_eq!(decoded, HALLO_WELT.as_bytes());
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(
            HuffmanCode::from_symbols(Vec::<u8>::new()),
            Err(BuildError::EmptyInput)
        );
    }

    #[test]
    fn test_single_symbol_round_trip() {
        let code = HuffmanCode::from_symbols("zzzz".chars()).unwrap();
        assert_eq!(code.tree(), &Node::leaf('z', 4));
        let bits: Vec<Bit> = code.encode("zz".chars()).collect::<Result<_, _>>().unwrap();
        let decoded: String = code.decode(bits).collect::<Result<_, _>>().unwrap();
        assert_eq!(decoded, "zz");
    }

    #[test]
    fn test_single_symbol_empty_policy() {
        let code = HuffmanCode::with_policy(frequency("zzzz".chars()), SingleSymbolCode::Empty)
            .unwrap();
        assert!(code.codebook().get(&'z').is_some_and(|c| c.is_empty()));
        assert_eq!(code.stats().encoded_bits, 0);
    }

    #[test]
    fn test_empty_policy_is_not_decodable() {
        let code = HuffmanCode::with_policy(frequency("zzzz".chars()), SingleSymbolCode::Empty)
            .unwrap();
        let bits: Vec<Bit> = code.encode("zzzz".chars()).collect::<Result<_, _>>().unwrap();
        assert!(bits.is_empty());
        let decoded: String = code.decode(bits).collect::<Result<_, _>>().unwrap();
        assert_eq!(decoded, "");
    }
}
