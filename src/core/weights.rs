//! Leaf-weight normalization and bottom-up propagation to internal nodes.

use std::collections::HashMap;

use super::node::{Tree, get, get_mut, set};

/// Writes raw cluster memberships onto every leaf and zeroes every internal
/// node's weight. Returns the sum of squared leaf memberships, used by the
/// caller as the normalizing constant for [`normalize`].
///
/// A leaf absent from `cluster` is treated as membership `0.0`, matching a
/// taxonomy leaf that the clustering never assigned any weight.
pub fn annotate(tree: &mut Tree, cluster: &HashMap<String, f64>) -> f64 {
    let mut sum = 0.0;
    for id in tree.post_order() {
        if tree.is_leaf(id) {
            let membership = cluster.get(&tree.node(id).name).copied().unwrap_or(0.0);
            let node = tree.node_mut(id);
            node.score = membership;
            node.u = membership;
            sum += membership * membership;
        } else {
            let node = tree.node_mut(id);
            node.score = 0.0;
            node.u = 0.0;
        }
    }
    sum
}

/// Divides every leaf's `u` by `√sum`, leaving internal nodes untouched.
///
/// Returns every leaf's `(u, name)` pair, for reporting only — nothing
/// downstream reads this list back.
pub fn normalize(tree: &mut Tree, sum: f64) -> Vec<(f64, String)> {
    let denom = sum.sqrt();
    let mut leaf_weights = Vec::new();
    for id in tree.post_order() {
        if tree.is_leaf(id) {
            let node = tree.node_mut(id);
            node.u /= denom;
            leaf_weights.push((node.u, node.name.clone()));
        }
    }
    leaf_weights
}

/// Zeroes any leaf weight below `theta`. Returns the sum of squared weights
/// that survived, for the caller to feed back into a second [`normalize`].
pub fn truncate(tree: &mut Tree, theta: f64) -> f64 {
    let mut sum = 0.0;
    for id in tree.post_order() {
        if tree.is_leaf(id) {
            let node = tree.node_mut(id);
            if node.u < theta {
                node.u = 0.0;
            } else {
                sum += node.u * node.u;
            }
        }
    }
    sum
}

/// Propagates normalized leaf weights up through internal nodes: each
/// internal node's `u` becomes `√(Σ child contribution)`, where a leaf's
/// contribution is `u²` and an internal node's contribution is that same
/// sum (so its parent sees `u²` in turn without recomputing it).
///
/// Runs over `post_order()` with a scratch buffer of contributions, since
/// children are always visited before the parent that needs them.
pub fn propagate_to_internals(tree: &mut Tree) -> f64 {
    let mut contribution = tree.scratch(0.0_f64);
    let order = tree.post_order();
    for &id in &order {
        let value = if tree.is_leaf(id) {
            let u = tree.node(id).u;
            u * u
        } else {
            let sum: f64 = tree.node(id).children().iter().map(|&c| *get(&contribution, c)).sum();
            tree.node_mut(id).u = sum.sqrt();
            sum
        };
        set(&mut contribution, id, value);
    }
    *get_mut(&mut contribution, tree.root())
}
