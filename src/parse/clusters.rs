//! Parses the cluster membership matrix and selects one column as the
//! membership vector for a single cluster.

use std::collections::HashMap;
use std::path::Path;

use crate::error::{PargenfsError, Result};

/// Reads the membership matrix: one row per line, each a tab- or
/// space-separated sequence of `f64`s. A row is first tried as
/// tab-separated; if that fails to parse as all-numeric, it is retried as
/// space-separated, matching the source format's mixed delimiter use.
pub fn parse_clusters(path: impl AsRef<Path>) -> Result<Vec<Vec<f64>>> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|e| PargenfsError::io(path, e))?;

    contents
        .lines()
        .enumerate()
        .map(|(i, line)| parse_row(line, i + 1))
        .collect()
}

fn parse_row(line: &str, line_number: usize) -> Result<Vec<f64>> {
    parse_numbers(line, '\t', line_number).or_else(|_| parse_numbers(line, ' ', line_number))
}

fn parse_numbers(line: &str, separator: char, line_number: usize) -> Result<Vec<f64>> {
    line.split(separator)
        .map(|token| {
            token
                .trim()
                .parse::<f64>()
                .map_err(|source| PargenfsError::MalformedClusterRow {
                    line: line_number,
                    source,
                })
        })
        .collect()
}

/// Builds the membership map for the `k`-th cluster column: `leaf_names[i]`
/// is paired with `matrix[i][k]`, mirroring the row-per-leaf, column-per-
/// cluster layout of the membership matrix.
///
/// A leaf name absent from the result (because the taxonomy has a leaf not
/// covered by any matrix row) is handled downstream, not here — see
/// [`crate::core::weights::annotate`].
pub fn cluster_column(leaf_names: &[String], matrix: &[Vec<f64>], k: usize) -> Result<HashMap<String, f64>> {
    leaf_names
        .iter()
        .zip(matrix.iter())
        .enumerate()
        .map(|(i, (name, row))| {
            row.get(k)
                .copied()
                .map(|weight| (name.clone(), weight))
                .ok_or(PargenfsError::ClusterColumnOutOfRange {
                    line: i + 1,
                    needed: k + 1,
                    found: row.len(),
                })
        })
        .collect()
}
