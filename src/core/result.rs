//! Result extraction: the tab-separated table and the bracketed serialized
//! tree the external renderer consumes.

use super::node::{get, set, NodeId, Tree};
use crate::utils::round3;
use std::collections::HashSet;

/// One row of the result table, in column order `index, name, u, p, V, G, H, L`.
pub type ResultRow = Vec<String>;

fn format_members_with_index(tree: &Tree, members: &[NodeId]) -> String {
    members
        .iter()
        .map(|&id| format!("{} {}", tree.node(id).index, tree.node(id).name))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Builds one row per tree node (post-order, so children precede their
/// parent in the unsorted table), then sorts rows by `(len, row)` as the
/// original does — every row has the same column count, so this reduces to
/// a plain lexicographic sort on the row's string tuple.
pub fn result_table(tree: &Tree) -> Vec<ResultRow> {
    let header: ResultRow = ["index", "name", "u", "p", "V", "G", "H", "L"]
        .iter()
        .map(|s| s.to_string())
        .collect();

    let mut rows: Vec<ResultRow> = tree
        .post_order()
        .into_iter()
        .map(|id| {
            let node = tree.node(id);
            vec![
                node.index.trim_end_matches('.').to_string(),
                node.name.clone(),
                round3(node.u).to_string(),
                round3(node.p).to_string(),
                round3(node.big_v).to_string(),
                format_members_with_index(tree, &node.g),
                format_members_with_index(tree, &node.h),
                format_members_with_index(tree, &node.l),
            ]
        })
        .collect();

    rows.sort_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)));

    let mut table = Vec::with_capacity(rows.len() + 1);
    table.push(header);
    table.extend(rows);
    table
}

/// Joins member *names* (no index) by `;`, eliding the middle of a list of
/// three or more into a literal `...` entry between the first and last name.
fn format_members_truncated(tree: &Tree, members: &[NodeId]) -> String {
    if members.len() < 3 {
        members
            .iter()
            .map(|&id| tree.node(id).name.clone())
            .collect::<Vec<_>>()
            .join(";")
    } else {
        let first = tree.node(members[0]).name.clone();
        let last = tree.node(*members.last().unwrap()).name.clone();
        [first, "...".to_string(), last].join(";")
    }
}

/// The per-node rendering plan computed by pass 1 of [`serialized_tree`]:
/// which children to emit, in what order, and what display name (if not the
/// node's own) to use for a node that stands in for an elided run.
struct RenderPlan {
    sq: Vec<bool>,
    display_name: Vec<Option<String>>,
    emission_order: Vec<Vec<NodeId>>,
}

/// Computes, for one internal node's already-u-sorted children, the ids to
/// actually emit (a run of two-or-more leading zero-`u` children collapses
/// to its last member) and installs that member's synthetic display label.
fn plan_children(tree: &Tree, sorted: &[NodeId], display_name: &mut [Option<String>]) -> Vec<NodeId> {
    let mut j = 0;
    while j < sorted.len() && tree.node(sorted[j]).u == 0.0 {
        j += 1;
    }

    let mut emission = Vec::with_capacity(sorted.len() - j.saturating_sub(1));
    if j >= 2 {
        let representative = sorted[j - 1];
        let first_name = tree.node(sorted[0]).name.clone();
        let last_name = tree.node(representative).name.clone();
        let label = if j == 2 {
            format!("{first_name}. {last_name}")
        } else {
            format!("{first_name}...{last_name} {j} items")
        };
        set(display_name, representative, Some(label));
        emission.push(representative);
    } else if j == 1 {
        emission.push(sorted[0]);
    }
    emission.extend_from_slice(&sorted[j..]);
    emission
}

/// Pass 1 (top-down): propagates the head-subject-or-descendant-of-one (`Sq`)
/// flag and computes each internal node's emission plan, without mutating
/// the tree's real node names.
fn plan(tree: &Tree, head_subjects: &HashSet<String>) -> RenderPlan {
    let mut sq = tree.scratch(false);
    let mut display_name: Vec<Option<String>> = tree.scratch(None);
    let mut emission_order: Vec<Vec<NodeId>> = tree.scratch(Vec::new());

    let root = tree.root();
    set(&mut sq, root, head_subjects.contains(&tree.node(root).index));

    let mut stack = vec![root];
    while let Some(id) = stack.pop() {
        if tree.is_leaf(id) {
            continue;
        }
        let node_sq = *get(&sq, id);
        let mut sorted = tree.node(id).children().to_vec();
        sorted.sort_by(|&a, &b| tree.node(a).u.partial_cmp(&tree.node(b).u).unwrap());

        let emission = plan_children(tree, &sorted, &mut display_name);
        for &child in &emission {
            set(&mut sq, child, node_sq || head_subjects.contains(&tree.node(child).index));
            stack.push(child);
        }
        set(&mut emission_order, id, emission);
    }

    RenderPlan {
        sq,
        display_name,
        emission_order,
    }
}

/// Pass 2 (bottom-up): assembles each node's bracketed text from its
/// already-rendered (planned) children plus its own `[&&NHX: ...]` block.
fn render(tree: &Tree, plan: &RenderPlan, print_all: bool) -> Vec<String> {
    let mut rendered = tree.scratch(String::new());

    for id in tree.post_order() {
        let node = tree.node(id);
        let mut text = String::new();

        if tree.is_internal(id) {
            text.push('(');
            let children = get(&plan.emission_order, id);
            for (i, &child) in children.iter().enumerate() {
                if i > 0 {
                    text.push(',');
                }
                text.push_str(get(&rendered, child));
            }
            text.push(')');
        }

        if node.u > 0.0 || print_all {
            let display = get(&plan.display_name, id).clone().unwrap_or_else(|| node.name.clone());
            let h = format_members_truncated(tree, &node.h);
            let g = format_members_truncated(tree, &node.g);
            let l = format_members_truncated(tree, &node.l);
            let hd = if tree.node(tree.root()).h.contains(&id) { 1 } else { 0 };
            let ch = if tree.is_internal(id) { 1 } else { 0 };
            let sq = if *get(&plan.sq, id) { 1 } else { 0 };

            text.push_str(&display);
            text.push_str(&format!(
                "[&&NHX:p={}:e={}:H={{{h}}}:u={}:v={}:G={{{g}}}:L={{{l}}}:Hd={hd}:Ch={ch}:Sq={sq}]",
                round3(node.p),
                node.e,
                round3(node.u),
                round3(node.v),
            ));
        }

        set(&mut rendered, id, text);
    }

    rendered
}

/// Emits a nested bracketed tree description compatible with the external
/// renderer. Built as two flat passes (see [`plan`] and [`render`]) rather
/// than mutually-recursive calls that mutate node names in place.
pub fn serialized_tree(tree: &Tree, print_all: bool) -> String {
    let head_subjects: HashSet<String> = tree.node(tree.root()).h.iter().map(|&id| tree.node(id).index.clone()).collect();
    let plan = plan(tree, &head_subjects);
    let rendered = render(tree, &plan, print_all);
    format!("{};", get(&rendered, tree.root()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::node::Tree;

    #[test]
    fn result_table_has_header_and_one_row_per_node() {
        let mut tree = Tree::new("", "root");
        let a = tree.add_child(tree.root(), "1", "a");
        tree.node_mut(a).u = 0.5;
        let table = result_table(&tree);
        assert_eq!(table[0], vec!["index", "name", "u", "p", "V", "G", "H", "L"]);
        assert_eq!(table.len(), 3); // header + a + root
    }

    #[test]
    fn result_row_strips_trailing_dot_from_index() {
        let mut tree = Tree::new("1.", "root");
        let root = tree.root();
        tree.node_mut(root).u = 1.0;
        let table = result_table(&tree);
        assert_eq!(table[1][0], "1");
    }

    #[test]
    fn serialized_tree_wraps_internal_nodes_and_terminates_with_semicolon() {
        let mut tree = Tree::new("", "root");
        let a = tree.add_child(tree.root(), "1", "a");
        tree.node_mut(a).u = 0.6;
        let root = tree.root();
        tree.node_mut(root).u = 1.0;
        tree.node_mut(root).h = vec![a];

        let output = serialized_tree(&tree, true);
        assert!(output.starts_with('('));
        assert!(output.ends_with(';'));
        assert!(output.contains("Hd=1"));
    }

    #[test]
    fn serialized_tree_elides_three_or_more_leading_zero_children() {
        let mut tree = Tree::new("", "root");
        let root = tree.root();
        let z1 = tree.add_child(root, "1", "z1");
        let z2 = tree.add_child(root, "2", "z2");
        let z3 = tree.add_child(root, "3", "z3");
        let survivor = tree.add_child(root, "4", "surv");
        tree.node_mut(z1).u = 0.0;
        tree.node_mut(z2).u = 0.0;
        tree.node_mut(z3).u = 0.0;
        tree.node_mut(survivor).u = 1.0;
        tree.node_mut(root).u = 1.0;

        let output = serialized_tree(&tree, true);
        assert!(output.contains("z1...z3 3 items"));
        assert!(!output.contains("z2"));
    }

    #[test]
    fn serialized_tree_does_not_elide_a_single_leading_zero_child() {
        let mut tree = Tree::new("", "root");
        let root = tree.root();
        let z1 = tree.add_child(root, "1", "z1");
        let survivor = tree.add_child(root, "2", "surv");
        tree.node_mut(z1).u = 0.0;
        tree.node_mut(survivor).u = 1.0;
        tree.node_mut(root).u = 1.0;

        let output = serialized_tree(&tree, true);
        assert!(output.contains("z1["));
    }
}
