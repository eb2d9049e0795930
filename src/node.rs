use crate::Symbol;
use crate::frequency::FrequencyTable;
use biterator::Bit;

/// A node of a Huffman tree.
///
/// Internal nodes exclusively own both of their children, so a tree is a
/// strict binary tree with no sharing. Equality is structural: two nodes are
/// equal when their symbols, weights and both subtrees are equal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node<S: Symbol> {
    Leaf {
        symbol: S,
        weight: usize,
    },
    Internal {
        weight: usize,
        left: Box<Node<S>>,
        right: Box<Node<S>>,
    },
}

/// Read-only callbacks for walking a tree, e.g. to render it.
///
/// `path` is the sequence of edges taken from the root to the visited node,
/// `One` for a left edge and `Zero` for a right edge. The root's path is empty.
pub trait Visitor<S: Symbol> {
    fn visit_internal(&mut self, weight: usize, path: &[Bit]);

    fn visit_leaf(&mut self, symbol: S, weight: usize, path: &[Bit]);
}

/// Create one childless leaf per distinct symbol, weighted by its count.
pub fn build_leaves<S: Symbol>(frequencies: &FrequencyTable<S>) -> Vec<Node<S>> {
    frequencies
        .iter()
        .map(|(&symbol, &weight)| Node::leaf(symbol, weight))
        .collect()
}

/// Join two nodes under a new internal node. `n1` becomes the left child.
///
/// Panics if the combined weight does not fit in a `usize`.
pub fn merge<S: Symbol>(n1: Node<S>, n2: Node<S>) -> Node<S> {
    let weight = n1
        .weight()
        .checked_add(n2.weight())
        .expect("merged weight overflows usize");
    Node::Internal {
        weight,
        left: Box::new(n1),
        right: Box::new(n2),
    }
}

impl<S: Symbol> Node<S> {
    pub fn leaf(symbol: S, weight: usize) -> Self {
        Node::Leaf { symbol, weight }
    }

    pub fn weight(&self) -> usize {
        match self {
            Node::Leaf { weight, .. } | Node::Internal { weight, .. } => *weight,
        }
    }

    /// The symbol of a leaf; internal nodes carry none.
    pub fn symbol(&self) -> Option<S> {
        match self {
            Node::Leaf { symbol, .. } => Some(*symbol),
            Node::Internal { .. } => None,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    pub fn left(&self) -> Option<&Node<S>> {
        self.children().map(|(left, _)| left)
    }

    pub fn right(&self) -> Option<&Node<S>> {
        self.children().map(|(_, right)| right)
    }

    /// Both children of an internal node, left first.
    pub fn children(&self) -> Option<(&Node<S>, &Node<S>)> {
        match self {
            Node::Leaf { .. } => None,
            Node::Internal { left, right, .. } => Some((&**left, &**right)),
        }
    }

    pub fn leaf_count(&self) -> usize {
        match self.children() {
            None => 1,
            Some((left, right)) => left.leaf_count() + right.leaf_count(),
        }
    }

    pub fn internal_count(&self) -> usize {
        match self.children() {
            None => 0,
            Some((left, right)) => 1 + left.internal_count() + right.internal_count(),
        }
    }

    /// Walk the tree depth first, visiting each node before its children and
    /// the left subtree before the right one.
    pub fn accept<V: Visitor<S>>(&self, visitor: &mut V) {
        let mut stack: Vec<(&Node<S>, Vec<Bit>)> = vec![(self, Vec::new())];

        while let Some((node, path)) = stack.pop() {
            match node {
                Node::Leaf { symbol, weight } => visitor.visit_leaf(*symbol, *weight, &path),
                Node::Internal {
                    weight,
                    left,
                    right,
                } => {
                    visitor.visit_internal(*weight, &path);

                    // Each branch gets its own copy of the path.
                    let mut right_path = path.clone();
                    right_path.push(Bit::Zero);
                    let mut left_path = path;
                    left_path.push(Bit::One);

                    // Pushed last so it is popped first.
                    stack.push((&**right, right_path));
                    stack.push((&**left, left_path));
                }
            }
        }
    }
}
