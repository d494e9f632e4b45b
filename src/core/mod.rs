//! The ParGenFS lifting algorithm: tree model, depth bookkeeping, the
//! weight pipeline, gap bookkeeping, the dynamic program, and result
//! extraction, wired together by [`pipeline::lift`].

pub mod dp;
pub mod gaps;
pub mod layers;
pub mod node;
pub mod pipeline;
pub mod result;
pub mod weights;

pub use node::{NodeId, Tree};
pub use pipeline::{lift, LiftOutput};
