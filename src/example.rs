use crate::node::{Node, merge};

/// The tree from the classic three-symbol example: `o` on the left, and an
/// internal node holding `m` (left) and `l` (right) on the right.
pub fn lom_tree() -> Node<char> {
    merge(
        Node::leaf('o', 2),
        merge(Node::leaf('m', 1), Node::leaf('l', 1)),
    )
}

/// Leaves in the order `l`, `o`, `m`, which the tree builder turns into
/// [`lom_tree`] with `l` and `m` swapped.
pub fn lom_leaves() -> Vec<Node<char>> {
    vec![Node::leaf('l', 1), Node::leaf('o', 2), Node::leaf('m', 1)]
}

pub const HALLO_WELT: &str = "Hallo Welt";

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_lom_tree_weights() {
        let root = lom_tree();
        assert_eq!(root.weight(), 4);
        assert_eq!(root.right().map(Node::weight), Some(2));
    }

    #[test]
    fn test_lom_leaves_total() {
        assert_eq!(lom_leaves().iter().map(Node::weight).sum::<usize>(), 4);
    }
}
