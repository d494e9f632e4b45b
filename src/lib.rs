//! Parsimonious generalization of a fuzzy cluster over a labeled taxonomy.
//!
//! Given a rooted taxonomy and a membership vector over its leaves, the
//! ParGenFS lift ([`core::lift`]) produces a small set of "head subjects"
//! that generalize the cluster, together with the "gaps" and "losses" the
//! generalization trades off against. [`parse`] reads the three external
//! file formats this crate consumes; [`output`] writes the two it
//! produces; [`bin/pargenfs`](../bin/pargenfs.rs) wires them together as a
//! CLI.

pub mod config;
pub mod core;
pub mod error;
pub mod output;
pub mod parse;
pub mod utils;

pub use config::Config;
pub use core::{lift, LiftOutput, Tree};
pub use error::{PargenfsError, Result};
