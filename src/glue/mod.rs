//! Gluing: reassembling chunk files into the original byte sequence.
//!
//! - [`Gluer`] - Discovers, orders, and concatenates chunk files
//! - [`ChunkFile`] - One discovered chunk file with its parsed order key

mod gluer;

pub use gluer::{ChunkFile, Gluer};
