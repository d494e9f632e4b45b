//! Parses the taxonomy leaves file: one name per line, tab-separated, used
//! to align cluster-matrix rows with taxonomy leaf names.

use std::path::Path;

use crate::error::{PargenfsError, Result};

/// Reads one leaf name per line. A line with a tab-separated second column
/// supplies that column as the name; otherwise the first column is used.
///
/// Line order is preserved — it is the alignment key the caller zips
/// against cluster-matrix rows in [`crate::parse::clusters::cluster_column`].
pub fn parse_leaves(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|e| PargenfsError::io(path, e))?;

    Ok(contents
        .lines()
        .map(|line| {
            let mut columns = line.split('\t');
            let first = columns.next().unwrap_or("").trim();
            match columns.next() {
                Some(second) => second.trim().to_string(),
                None => first.to_string(),
            }
        })
        .collect())
}
