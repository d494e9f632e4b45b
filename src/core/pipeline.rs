//! Orchestrates the full ParGenFS lift over an already-parsed taxonomy tree.

use std::collections::HashMap;

use log::{debug, info};

use super::dp::{init, mark_offshoots, recur};
use super::gaps::{prune, set_gaps, set_parameters};
use super::layers::{enumerate_layers, reduce_edges};
use super::node::Tree;
use super::result::{result_table, serialized_tree, ResultRow};
use super::weights::{annotate, normalize, propagate_to_internals, truncate};
use crate::config::Config;
use crate::error::{PargenfsError, Result};

/// The two artifacts a successful lift produces: the result table (one row
/// per node) and the serialized annotated tree, ready for the output
/// writers to hand to a file.
pub struct LiftOutput {
    /// One row per node, header included; see [`result_table`].
    pub table: Vec<ResultRow>,
    /// The bracketed tree description; see [`serialized_tree`].
    pub tree: String,
}

/// Runs every stage of §2's pipeline, in order, over `tree`: layer
/// numbering, the weight pipeline, pruning and gap bookkeeping, the
/// ParGenFS DP, edge reduction, and result extraction.
///
/// Fails with [`PargenfsError::EmptyMembership`] if no leaf has a nonzero
/// cluster weight, or [`PargenfsError::ThresholdTooLarge`] if truncating at
/// `config.threshold` zeroes every surviving weight. Neither failure
/// mutates `tree` any further than the stages already run — the caller must
/// not reuse a `Tree` across a failed and a retried lift.
pub fn lift(tree: &mut Tree, cluster: &HashMap<String, f64>, config: &Config) -> Result<LiftOutput> {
    debug!("enumerating taxonomy layers");
    enumerate_layers(tree);

    debug!("annotating leaves with cluster membership");
    let raw_sum = annotate(tree, cluster);
    if raw_sum == 0.0 {
        return Err(PargenfsError::EmptyMembership);
    }
    let leaf_weights = normalize(tree, raw_sum);
    debug!("number of leaves: {}", leaf_weights.len());
    log_positive_leaf_weights("all positive weights:", leaf_weights);

    debug!("truncating leaf weights at threshold {}", config.threshold);
    let truncated_sum = truncate(tree, config.threshold);
    if truncated_sum == 0.0 {
        return Err(PargenfsError::ThresholdTooLarge {
            threshold: config.threshold,
        });
    }
    let leaf_weights = normalize(tree, truncated_sum);
    log_positive_leaf_weights("after transformation:", leaf_weights);

    debug!("propagating weights to internal nodes");
    let root_u = propagate_to_internals(tree);
    info!("membership at root: {:.5}", root_u.sqrt());

    debug!("pruning zero-weight subtrees");
    prune(tree);
    debug!("installing gap sets");
    set_gaps(tree);
    set_parameters(tree);
    reduce_edges(tree);

    debug!("running ParGenFS init and recursive steps");
    init(tree, config.gamma);
    recur(tree, config.gamma, config.lambda);
    mark_offshoots(tree);

    info!("lift complete, extracting result");
    let table = result_table(tree);
    let tree_description = serialized_tree(tree, true);

    Ok(LiftOutput {
        table,
        tree: tree_description,
    })
}

/// Logs `weights` (a leaf's `u` alongside its name, as returned by
/// [`normalize`]) sorted by descending weight, stopping at the first
/// non-positive entry — the remainder are gaps, not worth reporting.
fn log_positive_leaf_weights(label: &str, mut weights: Vec<(f64, String)>) {
    weights.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap());
    debug!("{label}");
    for (weight, name) in weights {
        if weight <= 0.0 {
            break;
        }
        debug!("{name:<60} {weight:.5}");
    }
}
