use crate::Symbol;
use crate::node::{Node, merge};
use log::{debug, trace};

/// Errors that can occur while building a tree
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum BuildError {
    #[error("cannot build a tree from zero nodes")]
    EmptyInput,
}

/// Find the two lightest nodes in a single pass, returning their indices as
/// `(n1, n2)` with `n1` the lightest. Returns `None` for fewer than two nodes.
///
/// Ties go to the earlier node. When a new minimum is found, the previous
/// minimum only takes second place if it was strictly lighter than the node
/// already there, so among equal weights the second slot keeps the node it
/// saw first.
pub fn find_lowest<S: Symbol>(nodes: &[Node<S>]) -> Option<(usize, usize)> {
    // An empty slot is heavier than any node.
    fn lighter(a: Option<usize>, b: Option<usize>) -> bool {
        match (a, b) {
            (Some(a), Some(b)) => a < b,
            (Some(_), None) => true,
            (None, _) => false,
        }
    }

    let weight_of = |slot: Option<usize>| slot.map(|i| nodes[i].weight());
    let mut n1: Option<usize> = None;
    let mut n2: Option<usize> = None;

    for (i, node) in nodes.iter().enumerate() {
        let weight = Some(node.weight());
        if lighter(weight, weight_of(n1)) {
            if lighter(weight_of(n1), weight_of(n2)) {
                n2 = n1;
            }
            n1 = Some(i);
        } else if lighter(weight, weight_of(n2)) {
            n2 = Some(i);
        }
    }

    Some((n1?, n2?))
}

/// Combine the nodes into a single tree by repeatedly merging the two
/// lightest, and return its root.
///
/// Each round removes the pair picked by [`find_lowest`] and appends their
/// parent to the end of the collection, so the result depends only on the
/// input order. A single node is returned as is.
pub fn build_tree<S: Symbol>(mut nodes: Vec<Node<S>>) -> Result<Node<S>, BuildError> {
    if nodes.is_empty() {
        return Err(BuildError::EmptyInput);
    }

    let mut merges = 0;
    while let Some((i1, i2)) = find_lowest(&nodes) {
        // Remove the higher index first so the lower one stays put.
        let (n1, n2) = if i1 > i2 {
            let n1 = nodes.remove(i1);
            (n1, nodes.remove(i2))
        } else {
            let n2 = nodes.remove(i2);
            (nodes.remove(i1), n2)
        };
        trace!(
            "merging {:?}/{} with {:?}/{}",
            n1.symbol(),
            n1.weight(),
            n2.symbol(),
            n2.weight()
        );
        nodes.push(merge(n1, n2));
        merges += 1;
    }

    let root = nodes.pop().ok_or(BuildError::EmptyInput)?;
    debug!("built tree of weight {} in {merges} merges", root.weight());
    Ok(root)
}
