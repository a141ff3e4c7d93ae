//! Candidate generation: pools, the lazy stream and its size estimate.

pub mod estimate;
mod generate;
pub mod pools;

pub use generate::{Candidates, Generator};
pub use pools::Pools;
