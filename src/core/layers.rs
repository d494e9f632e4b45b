//! Depth bookkeeping: layer numbering and degree-one edge reduction.

use super::node::{NodeId, Tree, get, set};

/// Sets `e = 0` on the root and `e = parent.e + 1` on every descendant.
///
/// Must run before anything that depends on depth — currently only
/// `reduce_edges` (whose own `e` bookkeeping assumes layers are already
/// numbered) and the serialized-tree writer.
pub fn enumerate_layers(tree: &mut Tree) {
    for id in tree.pre_order() {
        let e = match tree.parent(id) {
            Some(parent) => tree.node(parent).e + 1,
            None => 0,
        };
        tree.node_mut(id).e = e;
    }
}

/// Compresses degree-one spines: a node with exactly one child is rewired to
/// that child's children, and `e` is decremented by one across the node's
/// new subtree.
///
/// Applied top-down with an explicit stack, mirroring the original
/// recursive shape exactly: a chain of several single-child nodes is
/// compressed one link per stack frame (the node that absorbs its only
/// child is not re-examined for a *second* absorption within the same
/// pass), not flattened all at once. The collapsed child's own annotations
/// are discarded — only its children survive, reparented onto the node
/// that absorbed it.
pub fn reduce_edges(tree: &mut Tree) {
    let mut stack = vec![tree.root()];
    while let Some(id) = stack.pop() {
        let children = tree.node(id).children().to_vec();
        if children.len() == 1 {
            let only_child = children[0];
            let grandchildren = tree.node(only_child).children().to_vec();
            decrement_subtree(tree, &grandchildren);
            tree.set_children(id, grandchildren);
        }
        stack.extend(tree.node(id).children().iter().copied());
    }
}

/// Decrements `e` by one across every node in `roots` and their descendants.
fn decrement_subtree(tree: &mut Tree, roots: &[NodeId]) {
    let mut visited = tree.scratch(false);
    let mut stack = roots.to_vec();
    while let Some(id) = stack.pop() {
        if *get(&visited, id) {
            continue;
        }
        set(&mut visited, id, true);
        tree.node_mut(id).e -= 1;
        stack.extend(tree.node(id).children().iter().copied());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::node::Tree;

    #[test]
    fn enumerate_layers_assigns_depth_from_root() {
        let mut tree = Tree::new("", "root");
        let x = tree.add_child(tree.root(), "1", "x");
        let y = tree.add_child(x, "1.1", "y");
        enumerate_layers(&mut tree);
        assert_eq!(tree.node(tree.root()).e, 0);
        assert_eq!(tree.node(x).e, 1);
        assert_eq!(tree.node(y).e, 2);
    }

    #[test]
    fn reduce_edges_absorbs_a_single_child_and_keeps_grandchildren() {
        // root -> x -> {a, b}
        let mut tree = Tree::new("", "root");
        let x = tree.add_child(tree.root(), "1", "x");
        let a = tree.add_child(x, "1.1", "a");
        let b = tree.add_child(x, "1.2", "b");
        enumerate_layers(&mut tree);
        reduce_edges(&mut tree);

        assert_eq!(tree.node(tree.root()).children(), &[a, b]);
        assert_eq!(tree.node(tree.root()).e, 0);
        assert_eq!(tree.node(a).e, 1);
        assert_eq!(tree.node(b).e, 1);
    }

    #[test]
    fn reduce_edges_compresses_one_link_per_chain_node() {
        // root -> b -> c -> d (leaf); b and c are both single-child.
        let mut tree = Tree::new("", "root");
        let b = tree.add_child(tree.root(), "1", "b");
        let c = tree.add_child(b, "1.1", "c");
        let d = tree.add_child(c, "1.1.1", "d");
        enumerate_layers(&mut tree);
        reduce_edges(&mut tree);

        // root absorbs b, taking b's child c: root.children == [c].
        // c then absorbs d (a leaf, so c.children == d.children == []).
        assert_eq!(tree.node(tree.root()).children(), &[c]);
        assert!(tree.is_leaf(c));
        // c's depth is recomputed relative to its new parent (root), not
        // reset to zero: one absorbed layer (b) means one fewer edge.
        assert_eq!(tree.node(c).e, 1);
        let _ = d;
    }
}
