//! Input parsers for the three external file formats this crate consumes:
//! the taxonomy source, the taxonomy leaves list, and the cluster
//! membership matrix.

pub mod clusters;
pub mod leaves;
pub mod taxonomy;

pub use clusters::{cluster_column, parse_clusters};
pub use leaves::parse_leaves;
pub use taxonomy::parse_taxonomy;
