//! splitrs
//!
//! Split a file into sequentially numbered chunk files and glue them back.
//!
//! `splitrs` partitions an input byte sequence into N equal-sized pieces
//! plus one remainder piece, persists them as `{dirname}_1`, `{dirname}_2`,
//! ... inside an output directory, and reassembles them by sorting on the
//! integer suffix. Gluing is the exact inverse of splitting: concatenating
//! the chunk files in numeric order reproduces the original file
//! byte-for-byte.
//!
//! The crate intentionally:
//! - does NOT compress or encrypt chunk data
//! - does NOT embed checksums, headers, or any metadata in chunk files
//! - does NOT stream; the whole input is held in memory
//! - does NOT keep state across invocations beyond the files it writes
//!
//! Chunk files are pure byte slices of the original; ordering lives
//! entirely in the file names.
//!
//! # Split
//!
//! ```no_run
//! use std::path::Path;
//! use splitrs::{SplitConfig, split_file};
//!
//! fn main() -> Result<(), splitrs::SplitError> {
//!     let config = SplitConfig::new().with_count(3);
//!     let dir = split_file(Path::new("report.txt"), &config, None)?;
//!     println!("chunks written to {}", dir.display());
//!     Ok(())
//! }
//! ```
//!
//! # Glue
//!
//! ```no_run
//! use std::path::Path;
//! use splitrs::Gluer;
//!
//! fn main() -> Result<(), splitrs::SplitError> {
//!     Gluer::new("report_split").glue_to(Path::new("report.restored"))?;
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod chunk;
mod config;
mod error;
mod glue;
mod plan;
mod split;

//
// Public surface (intentionally tiny)
//

pub use chunk::{CHUNK_NAME_SEPARATOR, Chunk, chunk_file_name, is_hidden, order_key};
pub use config::{DEFAULT_GLUE_OUTPUT, SPLIT_DIR_SUFFIX, SizingDirective, SplitConfig};
pub use error::SplitError;
pub use glue::{ChunkFile, Gluer};
pub use plan::ChunkPlan;
pub use split::{Splitter, derive_split_dir, split_bytes, split_file};
