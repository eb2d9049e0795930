use crate::Symbol;
use crate::frequency::FrequencyTable;
use crate::node::{Node, Visitor};
use biterator::Bit;
use log::debug;
use std::collections::BTreeMap;
use std::fmt;

/// The bits along the path from the root to a leaf, first edge first.
/// A left edge is `One`, a right edge is `Zero`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Code(Vec<Bit>);

/// Mapping from every symbol of a tree to its code.
#[derive(Debug, Clone, PartialEq)]
pub struct Codebook<S: Symbol> {
    codes: BTreeMap<S, Code>,
}

/// Weights of the internal nodes of a tree, in the order the codebook walk
/// visits them. Their sum is the length in bits of the encoded input.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WeightTrace(Vec<usize>);

/// What code to give the only symbol of a one-leaf tree, whose path from
/// the root is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SingleSymbolCode {
    /// A single `One` bit, so every occurrence still takes up one bit and
    /// the output can be decoded.
    #[default]
    OneBit,
    /// The empty path itself. Nothing is emitted when encoding.
    Empty,
}

/// Assign every leaf of the tree its code, using the default policy for
/// one-leaf trees.
pub fn build_codebook<S: Symbol>(root: &Node<S>) -> (Codebook<S>, WeightTrace) {
    build_codebook_with(root, SingleSymbolCode::default())
}

/// Assign every leaf of the tree its code, and record the weight of every
/// internal node on the way.
pub fn build_codebook_with<S: Symbol>(
    root: &Node<S>,
    single: SingleSymbolCode,
) -> (Codebook<S>, WeightTrace) {
    let mut collector = Collector {
        codes: BTreeMap::new(),
        weights: Vec::new(),
    };
    root.accept(&mut collector);

    if let (Some(symbol), SingleSymbolCode::OneBit) = (root.symbol(), single) {
        collector.codes.insert(symbol, Code(vec![Bit::One]));
    }

    debug!(
        "codebook for {} symbols, {} internal nodes",
        collector.codes.len(),
        collector.weights.len()
    );
    (
        Codebook {
            codes: collector.codes,
        },
        WeightTrace(collector.weights),
    )
}

struct Collector<S: Symbol> {
    codes: BTreeMap<S, Code>,
    weights: Vec<usize>,
}

impl<S: Symbol> Visitor<S> for Collector<S> {
    fn visit_internal(&mut self, weight: usize, _path: &[Bit]) {
        self.weights.push(weight);
    }

    fn visit_leaf(&mut self, symbol: S, _weight: usize, path: &[Bit]) {
        self.codes.insert(symbol, Code(path.to_vec()));
    }
}

impl Code {
    pub fn bits(&self) -> &[Bit] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn starts_with(&self, prefix: &Code) -> bool {
        self.0.starts_with(&prefix.0)
    }
}

impl From<Vec<Bit>> for Code {
    fn from(bits: Vec<Bit>) -> Self {
        Code(bits)
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in &self.0 {
            let c = match bit {
                Bit::One => '1',
                Bit::Zero => '0',
            };
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

impl<S: Symbol> Codebook<S> {
    pub fn get(&self, symbol: &S) -> Option<&Code> {
        self.codes.get(symbol)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Entries in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (&S, &Code)> {
        self.codes.iter()
    }

    /// Whether no code is a prefix of another one.
    pub fn is_prefix_free(&self) -> bool {
        self.codes.iter().all(|(a, code)| {
            self.codes
                .iter()
                .all(|(b, other)| a == b || !other.starts_with(code))
        })
    }

    /// Number of bits needed to encode input with these symbol counts.
    /// Symbols without a code contribute nothing.
    pub fn total_bits(&self, frequencies: &FrequencyTable<S>) -> usize {
        frequencies
            .iter()
            .filter_map(|(symbol, &count)| self.get(symbol).map(|code| code.len() * count))
            .sum()
    }
}

impl WeightTrace {
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn total(&self) -> usize {
        self.0.iter().sum()
    }
}
