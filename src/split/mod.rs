//! Splitting: slicing planned chunks and persisting them as files.
//!
//! - [`split_bytes`] - Pure slicing of input bytes per a [`crate::ChunkPlan`]
//! - [`Splitter`] - Owns the output directory and writes chunk files
//! - [`split_file`] - Whole-file convenience pipeline

mod splitter;

pub use splitter::{Splitter, derive_split_dir, split_bytes, split_file};
