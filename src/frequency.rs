use crate::Symbol;
use std::collections::BTreeMap;
use std::collections::btree_map;

/// Occurrence counts for every distinct symbol seen in some input.
///
/// Iteration is in ascending symbol order, which is also the order in which
/// [`build_leaves`](crate::build_leaves) hands leaves to the tree builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable<S: Symbol> {
    counts: BTreeMap<S, usize>,
}

/// Count how many times each distinct symbol occurs in the input.
///
/// Empty input yields an empty table.
pub fn frequency<S, I>(symbols: I) -> FrequencyTable<S>
where
    S: Symbol,
    I: IntoIterator<Item = S>,
{
    symbols.into_iter().collect()
}

impl<S: Symbol> FrequencyTable<S> {
    pub fn new() -> Self {
        Self {
            counts: BTreeMap::new(),
        }
    }

    /// Record one more occurrence of `symbol`.
    pub fn add(&mut self, symbol: S) {
        *self.counts.entry(symbol).or_insert(0) += 1;
    }

    pub fn get(&self, symbol: &S) -> Option<usize> {
        self.counts.get(symbol).copied()
    }

    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// The sum of all counts, i.e. the length of the counted input.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&S, &usize)> {
        self.counts.iter()
    }

    pub fn into_inner(self) -> BTreeMap<S, usize> {
        self.counts
    }
}

impl<S: Symbol> Default for FrequencyTable<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Symbol> FromIterator<S> for FrequencyTable<S> {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut table = Self::new();
        for symbol in iter {
            table.add(symbol);
        }
        table
    }
}

impl<S: Symbol> From<BTreeMap<S, usize>> for FrequencyTable<S> {
    fn from(counts: BTreeMap<S, usize>) -> Self {
        Self { counts }
    }
}

impl<S: Symbol> IntoIterator for FrequencyTable<S> {
    type Item = (S, usize);
    type IntoIter = btree_map::IntoIter<S, usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.counts.into_iter()
    }
}
