//! Chunk-size arithmetic.
//!
//! [`ChunkPlan`] partitions an input byte length into a run of equal-sized
//! chunks followed by one remainder chunk. The plan is pure arithmetic; it
//! never touches the input bytes themselves.

use crate::config::SizingDirective;
use crate::error::SplitError;

/// How an input of a given size is cut into chunks.
///
/// A plan is either `Whole` (the input stays a single chunk) or `Chunked`,
/// in which case the invariant
/// `normal_count * normal_size + last_size == input_size` holds and
/// `last_size` is never zero.
///
/// # Example
///
/// ```
/// use splitrs::{ChunkPlan, SizingDirective};
///
/// let plan = ChunkPlan::for_input(10, SizingDirective::ByCount(3))?;
/// assert_eq!(
///     plan,
///     ChunkPlan::Chunked { normal_count: 2, normal_size: 4, last_size: 2 }
/// );
/// assert_eq!(plan.chunk_count(), 3);
/// # Ok::<(), splitrs::SplitError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChunkPlan {
    /// No chunking: the input is emitted as a single whole chunk.
    Whole,

    /// The input is cut into `normal_count` chunks of `normal_size` bytes
    /// followed by one chunk of `last_size` bytes.
    Chunked {
        /// Number of equal-sized chunks before the trailing one.
        normal_count: u64,
        /// Byte length of each equal-sized chunk.
        normal_size: u64,
        /// Byte length of the trailing chunk (1..=normal_size).
        last_size: u64,
    },
}

impl ChunkPlan {
    /// Computes the plan for an input of `input_size` bytes.
    ///
    /// Returns an error for a zero count or zero max size. `ByCount(1)`,
    /// an empty input, and `ByMaxSize(s)` with `s >= input_size` all
    /// produce [`ChunkPlan::Whole`].
    pub fn for_input(
        input_size: u64,
        directive: SizingDirective,
    ) -> Result<Self, SplitError> {
        let plan = match directive {
            SizingDirective::ByCount(0) => {
                return Err(SplitError::InvalidConfig {
                    message: "chunk count must be non-zero",
                });
            }
            // A single requested chunk is the whole input; the general
            // formula would divide by zero here.
            SizingDirective::ByCount(1) => ChunkPlan::Whole,
            SizingDirective::ByCount(n) => {
                if input_size == 0 {
                    ChunkPlan::Whole
                } else {
                    Self::layout(input_size, input_size.div_ceil(n))
                }
            }
            SizingDirective::ByMaxSize(0) => {
                return Err(SplitError::InvalidConfig {
                    message: "chunk size must be non-zero",
                });
            }
            SizingDirective::ByMaxSize(s) => {
                if s >= input_size {
                    ChunkPlan::Whole
                } else {
                    Self::layout(input_size, s)
                }
            }
        };

        log::debug!(
            "plan for {} bytes with {:?}: {:?}",
            input_size,
            directive,
            plan
        );
        Ok(plan)
    }

    /// Cuts `input_size` into `normal_size` pieces plus a trailing
    /// remainder. When the division is exact the trailing chunk is a
    /// full-size one, so no empty chunk is ever planned.
    fn layout(input_size: u64, normal_size: u64) -> Self {
        debug_assert!(normal_size >= 1 && input_size >= 1);
        let rem = input_size % normal_size;
        if rem == 0 {
            ChunkPlan::Chunked {
                normal_count: input_size / normal_size - 1,
                normal_size,
                last_size: normal_size,
            }
        } else {
            ChunkPlan::Chunked {
                normal_count: input_size / normal_size,
                normal_size,
                last_size: rem,
            }
        }
    }

    /// Returns the total number of chunks this plan produces.
    pub fn chunk_count(&self) -> u64 {
        match *self {
            ChunkPlan::Whole => 1,
            ChunkPlan::Chunked { normal_count, .. } => normal_count + 1,
        }
    }

    /// Returns true if the plan leaves the input as a single whole chunk.
    pub fn is_whole(&self) -> bool {
        matches!(self, ChunkPlan::Whole)
    }
}
