pub mod codebook;
pub mod decoder;
pub mod encoder;
pub mod frequency;
pub mod huffman;
pub mod node;
pub mod stats;
pub mod tree;

#[cfg(test)]
mod example;

use std::fmt::Debug;

pub use codebook::{
    Code, Codebook, SingleSymbolCode, WeightTrace, build_codebook, build_codebook_with,
};
pub use frequency::{FrequencyTable, frequency};
pub use huffman::HuffmanCode;
pub use node::{Node, Visitor, build_leaves, merge};
pub use tree::{BuildError, build_tree, find_lowest};

/// An atomic unit of the input alphabet.
///
/// Symbols must be totally ordered so that every table in this crate iterates
/// in a fixed order; trees never depend on hashing.
pub trait Symbol: Ord + Copy + Debug {}

impl<T: Ord + Copy + Debug> Symbol for T {}
