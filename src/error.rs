//! The single error type returned by every fallible operation in this crate.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while parsing inputs, validating configuration, or
/// running the lifting pipeline.
#[derive(Debug, Error)]
pub enum PargenfsError {
    /// Truncation at the configured threshold zeroed every leaf weight.
    #[error("threshold too large: truncating at θ={threshold} zeroed every leaf weight")]
    ThresholdTooLarge {
        /// The threshold that produced the all-zero result.
        threshold: f64,
    },

    /// Every leaf's cluster weight was already zero before truncation.
    #[error("cluster membership is empty: no taxonomy leaf has a nonzero weight")]
    EmptyMembership,

    /// A cluster membership row contained a token that did not parse as `f64`.
    #[error("malformed cluster row at line {line}: {source}")]
    MalformedClusterRow {
        /// 1-based line number of the offending row.
        line: usize,
        /// The underlying parse failure.
        #[source]
        source: std::num::ParseFloatError,
    },

    /// A cluster membership row did not have enough columns for the requested cluster.
    #[error("cluster row at line {line} has {found} columns, need at least {needed}")]
    ClusterColumnOutOfRange {
        /// 1-based line number of the offending row.
        line: usize,
        /// Number of columns required to reach `cluster_number`.
        needed: usize,
        /// Number of columns actually present.
        found: usize,
    },

    /// The taxonomy source file contained no recognizable index/name pairs,
    /// or its nodes could not be linked into a tree.
    #[error("taxonomy source `{path}` could not be parsed into a tree: {reason}")]
    TaxonomyParse {
        /// Path to the offending file.
        path: PathBuf,
        /// Human-readable explanation.
        reason: String,
    },

    /// A configuration value (θ, γ, or λ) fell outside its documented domain.
    #[error("invalid configuration: {message}")]
    InvalidConfig {
        /// Human-readable explanation.
        message: String,
    },

    /// Any underlying file I/O failure.
    #[error("I/O error for `{path}`: {source}")]
    Io {
        /// Path being read or written when the failure occurred.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl PargenfsError {
    /// Wraps an [`std::io::Error`] with the path that produced it.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Builds a [`PargenfsError::TaxonomyParse`] with a human-readable reason.
    pub fn taxonomy_parse(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::TaxonomyParse {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

/// Convenience alias used throughout this crate.
pub type Result<T> = std::result::Result<T, PargenfsError>;
