//! Subtree collapsing and the gap/parameter bookkeeping the DP step reads.

use std::collections::HashSet;

use super::node::Tree;

/// Collapses every internal node whose propagated weight is exactly zero:
/// its children are discarded, and if every one of those children was
/// itself a leaf, the node becomes its own sole gap.
///
/// Runs over `post_order()` so a chain of zero-weight ancestors collapses
/// from the bottom up, exactly as the recursive original processes
/// children before deciding whether to prune their parent.
pub fn prune(tree: &mut Tree) {
    for id in tree.post_order() {
        if tree.is_leaf(id) || tree.node(id).u != 0.0 {
            continue;
        }
        let g_label = tree.node(id).children().iter().all(|&c| tree.is_leaf(c));
        tree.set_children(id, Vec::new());
        if g_label {
            tree.node_mut(id).g = vec![id];
        }
    }
}

/// For every node whose gap set is still empty, fills it with the node's
/// zero-weight children. A node `prune` already gave a self-gap keeps it.
///
/// Runs over `pre_order()`, though the order does not matter here: each
/// node's gap set depends only on its own children's `u`, never on its
/// ancestors or descendants.
pub fn set_gaps(tree: &mut Tree) {
    for id in tree.pre_order() {
        if !tree.node(id).g.is_empty() {
            continue;
        }
        let gaps: Vec<_> = tree
            .node(id)
            .children()
            .iter()
            .copied()
            .filter(|&child| tree.node(child).u == 0.0)
            .collect();
        tree.node_mut(id).g = gaps;
    }
}

/// Aggregates each node's gap set upward, and sets `v`/`V`.
///
/// Runs over `post_order()`. A node's final `G` is its own gap list
/// followed by each child's `G` left to right, de-duplicated by name on
/// first occurrence. `v` is `parent.u` (or `1.0` at the root) and is
/// written before `V` is summed, so a node that is its own sole gap member
/// sees its own fresh `v` when the sum reaches it.
pub fn set_parameters(tree: &mut Tree) {
    for id in tree.post_order() {
        let mut seen = HashSet::new();
        let mut g_result = Vec::new();

        for gap in tree.node(id).g.clone() {
            if seen.insert(tree.node(gap).name.clone()) {
                g_result.push(gap);
            }
        }
        for child in tree.node(id).children().to_vec() {
            for gap in tree.node(child).g.clone() {
                if seen.insert(tree.node(gap).name.clone()) {
                    g_result.push(gap);
                }
            }
        }
        tree.node_mut(id).g = g_result;

        let v = match tree.parent(id) {
            Some(parent) => tree.node(parent).u,
            None => 1.0,
        };
        tree.node_mut(id).v = v;

        let big_v: f64 = tree.node(id).g.clone().iter().map(|&gap| tree.node(gap).v).sum();
        tree.node_mut(id).big_v = big_v;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::node::Tree;
    use float_cmp::approx_eq;

    #[test]
    fn prune_collapses_a_zero_weight_subtree_of_leaves() {
        let mut tree = Tree::new("", "root");
        let x = tree.add_child(tree.root(), "1", "x");
        let a = tree.add_child(x, "1.1", "a");
        let b = tree.add_child(x, "1.2", "b");
        tree.node_mut(a).u = 0.0;
        tree.node_mut(b).u = 0.0;
        tree.node_mut(x).u = 0.0;

        prune(&mut tree);

        assert!(tree.is_leaf(x));
        assert_eq!(tree.node(x).g, vec![x]);
    }

    #[test]
    fn prune_self_gaps_a_chain_of_collapsed_internals_bottom_up() {
        // root -> x -> y -> {a, b}; y collapses to a leaf first (post-order),
        // so by the time x is processed its only child (y) already reads as
        // a leaf, and x self-gaps too.
        let mut tree = Tree::new("", "root");
        let x = tree.add_child(tree.root(), "1", "x");
        let y = tree.add_child(x, "1.1", "y");
        let a = tree.add_child(y, "1.1.1", "a");
        let b = tree.add_child(y, "1.1.2", "b");
        tree.node_mut(a).u = 0.0;
        tree.node_mut(b).u = 0.0;
        tree.node_mut(y).u = 0.0;
        tree.node_mut(x).u = 0.0;

        prune(&mut tree);

        assert!(tree.is_leaf(y));
        assert_eq!(tree.node(y).g, vec![y]);
        assert!(tree.is_leaf(x));
        // y collapsed first (post-order), so by the time x is processed its
        // only child (y) is already a leaf: g_label sees "all children are
        // leaves" and x becomes its own self-gap too.
        assert_eq!(tree.node(x).g, vec![x]);
    }

    #[test]
    fn set_gaps_collects_zero_weight_children() {
        let mut tree = Tree::new("", "root");
        let a = tree.add_child(tree.root(), "1", "a");
        let b = tree.add_child(tree.root(), "2", "b");
        tree.node_mut(a).u = 0.0;
        tree.node_mut(b).u = 0.5;

        set_gaps(&mut tree);

        assert_eq!(tree.node(tree.root()).g, vec![a]);
    }

    #[test]
    fn set_parameters_aggregates_own_gaps_before_childrens_and_dedups_by_name() {
        let mut tree = Tree::new("", "root");
        let x = tree.add_child(tree.root(), "1", "x");
        let gap_x = tree.add_child(x, "1.1", "shared");
        let y = tree.add_child(tree.root(), "2", "y");
        let gap_y = tree.add_child(y, "2.1", "shared");

        tree.node_mut(x).g = vec![gap_x];
        tree.node_mut(y).g = vec![gap_y];
        tree.node_mut(gap_x).v = 0.4;
        tree.node_mut(gap_y).v = 0.4;

        set_parameters(&mut tree);

        // root aggregates x's G then y's G; the second "shared" is a duplicate by name.
        assert_eq!(tree.node(tree.root()).g, vec![gap_x]);
        assert_eq!(tree.node(tree.root()).v, 1.0);
    }

    #[test]
    fn set_parameters_lets_a_self_gap_see_its_own_fresh_v() {
        let mut tree = Tree::new("", "root");
        let x = tree.add_child(tree.root(), "1", "x");
        let root = tree.root();
        tree.node_mut(root).u = 1.0;
        tree.node_mut(x).g = vec![x];

        set_parameters(&mut tree);

        // x.v = parent(root).u = 1.0, and x is its own sole gap, so V == x.v.
        assert!(approx_eq!(f64, tree.node(x).v, 1.0, epsilon = 1e-9));
        assert!(approx_eq!(f64, tree.node(x).big_v, tree.node(x).v, epsilon = 1e-9));
    }
}
