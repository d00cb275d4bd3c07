//! Chunk-size planning.
//!
//! - [`ChunkPlan`] - How an input of a given size is cut into chunks

mod planner;

pub use planner::ChunkPlan;
