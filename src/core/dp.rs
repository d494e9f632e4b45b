//! The ParGenFS dynamic program: per-node head/loss/penalty selection.

use super::node::Tree;

/// Sets `H`, `L`, `p`, `o` on every leaf: a surviving leaf (`u > 0`) becomes
/// its own sole head subject at cost `γ·u`; a gap leaf (`u == 0`) is left
/// with empty sets and zero cost. Internal nodes are untouched here — `o`
/// stays `false` on them, which is what [`recur`] uses to skip leaves on its
/// own pass.
pub fn init(tree: &mut Tree, gamma: f64) {
    for id in tree.post_order() {
        if !tree.is_leaf(id) {
            continue;
        }
        let node = tree.node_mut(id);
        if node.u > 0.0 {
            node.h = vec![id];
            node.l = Vec::new();
            node.p = gamma * node.u;
        } else {
            node.h = Vec::new();
            node.l = Vec::new();
            node.p = 0.0;
        }
        node.o = true;
    }
}

/// At every internal node, compares lifting to this node against keeping
/// its children's already-decided heads, choosing whichever costs less.
///
/// Runs over `post_order()` so every child's `p`/`H`/`L` are final before
/// the parent reads them. Leaves are skipped (`o` was set by [`init`]).
/// Ties go to KEEP: the comparison is a strict `<`, so equal cost keeps the
/// finer-grained child heads rather than lifting.
pub fn recur(tree: &mut Tree, gamma: f64, lambda: f64) {
    let _ = gamma;
    for id in tree.post_order() {
        if tree.node(id).o {
            continue;
        }
        let children = tree.node(id).children().to_vec();
        let sum_children_p: f64 = children.iter().map(|&c| tree.node(c).p).sum();
        let lift_cost = tree.node(id).u + lambda * tree.node(id).big_v;

        if lift_cost < sum_children_p {
            let gaps = tree.node(id).g.clone();
            let node = tree.node_mut(id);
            node.h = vec![id];
            node.l = gaps;
            node.p = lift_cost;
        } else {
            let mut h = Vec::new();
            let mut l = Vec::new();
            for &c in &children {
                h.extend(tree.node(c).h.iter().copied());
                l.extend(tree.node(c).l.iter().copied());
            }
            let node = tree.node_mut(id);
            node.h = h;
            node.l = l;
            node.p = sum_children_p;
        }
    }
}

/// Marks every surviving leaf whose parent ended up with no head subject.
/// An offshoot is a leaf the DP's head-set does not cover through any
/// ancestor; it has to be reported on its own.
pub fn mark_offshoots(tree: &mut Tree) {
    for id in tree.pre_order() {
        if !tree.is_leaf(id) {
            continue;
        }
        if let Some(parent) = tree.parent(id) {
            if tree.node(parent).h.is_empty() {
                tree.node_mut(id).of = true;
            }
        }
    }
}
