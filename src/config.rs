//! Configuration for split behavior.
//!
//! - [`SplitConfig`] - Collects the mutually exclusive sizing options
//! - [`SizingDirective`] - The validated choice of count vs max size
//!
//! # Example
//!
//! ```
//! use splitrs::{SplitConfig, SizingDirective};
//!
//! let config = SplitConfig::new().with_count(3);
//! assert_eq!(config.directive()?, SizingDirective::ByCount(3));
//!
//! # Ok::<(), splitrs::SplitError>(())
//! ```

use crate::error::SplitError;

/// Default output file name for glued data.
pub const DEFAULT_GLUE_OUTPUT: &str = "splitrs.out";

/// Suffix appended to an input file's stem to derive the split directory.
pub const SPLIT_DIR_SUFFIX: &str = "_split";

/// The validated sizing choice: split into a fixed number of chunks, or
/// into chunks of at most a fixed byte size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SizingDirective {
    /// Split the input into this many chunks.
    ByCount(u64),
    /// Split the input into chunks of at most this many bytes.
    ByMaxSize(u64),
}

/// Configuration for a split operation.
///
/// Exactly one of the two sizing options must be set. Both come in as
/// `Option`s because that is how they arrive from the command line; the
/// both-set and neither-set cases are rejected by [`SplitConfig::directive`]
/// rather than at the type level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SplitConfig {
    count: Option<u64>,
    max_size: Option<u64>,
}

impl SplitConfig {
    /// Creates an empty configuration with neither sizing option set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a configuration from the raw optional values.
    pub fn from_options(count: Option<u64>, max_size: Option<u64>) -> Self {
        Self { count, max_size }
    }

    /// Sets the target chunk count.
    pub fn with_count(mut self, count: u64) -> Self {
        self.count = Some(count);
        self
    }

    /// Sets the maximum chunk size in bytes.
    pub fn with_max_size(mut self, max_size: u64) -> Self {
        self.max_size = Some(max_size);
        self
    }

    /// Returns the configured chunk count, if set.
    pub fn count(&self) -> Option<u64> {
        self.count
    }

    /// Returns the configured maximum chunk size, if set.
    pub fn max_size(&self) -> Option<u64> {
        self.max_size
    }

    /// Resolves the configuration into a [`SizingDirective`].
    ///
    /// Returns an error if both options are set, neither is set, or the set
    /// one is zero.
    pub fn directive(&self) -> Result<SizingDirective, SplitError> {
        match (self.count, self.max_size) {
            (Some(_), Some(_)) => Err(SplitError::InvalidConfig {
                message: "cannot specify chunk size and chunk count at the same time",
            }),
            (None, None) => Err(SplitError::InvalidConfig {
                message: "neither chunk size nor chunk count specified",
            }),
            (Some(0), None) => Err(SplitError::InvalidConfig {
                message: "chunk count must be non-zero",
            }),
            (None, Some(0)) => Err(SplitError::InvalidConfig {
                message: "chunk size must be non-zero",
            }),
            (Some(n), None) => Ok(SizingDirective::ByCount(n)),
            (None, Some(s)) => Ok(SizingDirective::ByMaxSize(s)),
        }
    }

    /// Validates the current configuration.
    pub fn validate(&self) -> Result<(), SplitError> {
        self.directive().map(|_| ())
    }
}
