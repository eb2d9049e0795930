use crate::Symbol;
use crate::node::Node;
use biterator::Bit;

pub struct Decoder<'t, S: Symbol> {
    root: &'t Node<S>,
}

/// Errors that can occur while decoding
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum DecodeError {
    /// The input ended partway down the tree.
    #[error("bit stream ended in the middle of a code after {consumed} bits")]
    TruncatedCode { consumed: usize },
    /// A one-leaf tree only has the single-bit code `1`.
    #[error("unexpected 0 bit at position {position} for a single-symbol tree")]
    InvalidBit { position: usize },
}

/// The symbols of a decoded bit stream, produced lazily.
///
/// After an error the stream ends.
pub struct DecoderOutput<'t, S, I>
where
    S: Symbol,
    I: Iterator<Item = Bit>,
{
    input: I,
    root: &'t Node<S>,
    consumed: usize,
    failed: bool,
}

impl<S: Symbol, I: Iterator<Item = Bit>> DecoderOutput<'_, S, I> {
    fn fail(&mut self, error: DecodeError) -> Option<Result<S, DecodeError>> {
        self.failed = true;
        Some(Err(error))
    }
}

impl<S: Symbol, I: Iterator<Item = Bit>> Iterator for DecoderOutput<'_, S, I> {
    type Item = Result<S, DecodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        let mut node = self.root;
        if let Node::Leaf { symbol, .. } = node {
            let bit = self.input.next()?;
            let position = self.consumed;
            self.consumed += 1;
            return match bit {
                Bit::One => Some(Ok(*symbol)),
                Bit::Zero => self.fail(DecodeError::InvalidBit { position }),
            };
        }

        let start = self.consumed;
        loop {
            match node {
                Node::Leaf { symbol, .. } => return Some(Ok(*symbol)),
                Node::Internal { left, right, .. } => {
                    let Some(bit) = self.input.next() else {
                        // Running out between codes is a clean end.
                        if self.consumed == start {
                            return None;
                        }
                        let consumed = self.consumed;
                        return self.fail(DecodeError::TruncatedCode { consumed });
                    };
                    self.consumed += 1;
                    node = match bit {
                        Bit::One => &**left,
                        Bit::Zero => &**right,
                    };
                }
            }
        }
    }
}

impl<'t, S: Symbol> Decoder<'t, S> {
    /// Create a decoder that reads codes by walking the given tree.
    pub fn new(root: &'t Node<S>) -> Self {
        Decoder { root }
    }

    /// Decode a stream of bits as a stream of symbols.
    ///
    /// Bits are read with the same convention the codebook is built with:
    /// `One` takes the left branch, `Zero` the right one. A one-leaf tree
    /// reads a single `One` bit per symbol.
    pub fn decode<I>(&self, input: I) -> DecoderOutput<'t, S, I::IntoIter>
    where
        I: IntoIterator<Item = Bit>,
    {
        DecoderOutput {
            input: input.into_iter(),
            root: self.root,
            consumed: 0,
            failed: false,
        }
    }
}
