use crate::Symbol;
use crate::codebook::Codebook;
use biterator::Bit;
use std::slice;

pub struct Encoder<'c, S: Symbol> {
    codebook: &'c Codebook<S>,
}

/// Errors that can occur while encoding
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum EncodeError<S: Symbol> {
    #[error("symbol {0:?} has no code in the codebook")]
    UnknownSymbol(S),
}

/// The bits of an encoded symbol stream, produced lazily.
///
/// After an error the stream ends.
pub struct EncoderOutput<'c, S, I>
where
    S: Symbol,
    I: Iterator<Item = S>,
{
    input: I,
    codebook: &'c Codebook<S>,
    pending: slice::Iter<'c, Bit>,
    failed: bool,
}

impl<S: Symbol, I: Iterator<Item = S>> Iterator for EncoderOutput<'_, S, I> {
    type Item = Result<Bit, EncodeError<S>>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(bit) = self.pending.next().cloned() {
                return Some(Ok(bit));
            }
            if self.failed {
                return None;
            }

            let symbol = self.input.next()?;
            match self.codebook.get(&symbol) {
                Some(code) => self.pending = code.bits().iter(),
                None => {
                    self.failed = true;
                    return Some(Err(EncodeError::UnknownSymbol(symbol)));
                }
            }
        }
    }
}

impl<'c, S: Symbol> Encoder<'c, S> {
    /// Create an encoder that emits the codes of the given codebook.
    pub fn new(codebook: &'c Codebook<S>) -> Self {
        Self { codebook }
    }

    /// Encode a stream of symbols as a stream of bits, one code per symbol.
    ///
    /// Every symbol must have a code in the encoder's codebook.
    pub fn encode<I>(&self, input: I) -> EncoderOutput<'c, S, I::IntoIter>
    where
        I: IntoIterator<Item = S>,
    {
        EncoderOutput {
            input: input.into_iter(),
            codebook: self.codebook,
            pending: Default::default(),
            failed: false,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::codebook::{SingleSymbolCode, build_codebook, build_codebook_with};
    use crate::example::lom_tree;
    use crate::node::Node;
    use biterator::Bit::{One, Zero};

    /// Convenience function for encoding a message with the codebook of the
    /// example tree, collecting the output into a single Result.
    fn encode(input: &str) -> Result<Vec<Bit>, EncodeError<char>> {
        let (codebook, _) = build_codebook(&lom_tree());
        Encoder::new(&codebook).encode(input.chars()).collect()
    }

    #[test]
    fn encode_empty_message() {
        assert_eq!(encode(""), Ok(vec![]));
    }

    #[test]
    fn encode_small_message() {
        assert_eq!(encode("mol"), Ok(vec![Zero, One, One, Zero, Zero]));
    }

    #[test]
    fn error_on_unknown_symbol() {
        assert_eq!(encode("mox"), Err(EncodeError::UnknownSymbol('x')));
    }

    #[test]
    fn stream_ends_after_error() {
        let (codebook, _) = build_codebook(&lom_tree());
        let output: Vec<_> = Encoder::new(&codebook).encode("oxo".chars()).collect();
        assert_eq!(output, vec![Ok(One), Err(EncodeError::UnknownSymbol('x'))]);
    }

    #[test]
    fn encode_single_symbol_alphabet() {
        let root = Node::leaf(b'a', 3);
        let (one_bit, _) = build_codebook(&root);
        let bits: Result<Vec<_>, _> = Encoder::new(&one_bit).encode(*b"aaa").collect();
        assert_eq!(bits, Ok(vec![One, One, One]));

        let (empty, _) = build_codebook_with(&root, SingleSymbolCode::Empty);
        let bits: Result<Vec<_>, _> = Encoder::new(&empty).encode(*b"aaa").collect();
        assert_eq!(bits, Ok(vec![]));
    }
}
