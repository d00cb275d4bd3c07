//! Reassembling chunk files into the original byte sequence.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::chunk::name;
use crate::error::SplitError;

/// One chunk file discovered during glue, with its parsed order key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkFile {
    /// Full path of the chunk file.
    pub path: PathBuf,
    /// Order key parsed from the file name.
    pub index: u64,
}

impl ChunkFile {
    /// Returns the file name of this chunk.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .into_owned()
    }
}

/// Reassembles the chunk files of a directory into one byte sequence.
///
/// The gluer treats the directory as a read-only input collection: it never
/// creates, renames, or deletes anything inside it. Candidate files are all
/// non-hidden entries; their order is recovered from the integer after the
/// last `_` in each name, never from the directory listing order.
///
/// # Example
///
/// ```no_run
/// use splitrs::Gluer;
///
/// let gluer = Gluer::new("report_split");
/// let bytes = gluer.glue()?;
/// # Ok::<(), splitrs::SplitError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Gluer {
    dir: PathBuf,
}

impl Gluer {
    /// Creates a gluer over the given chunk directory.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Returns the chunk directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Lists candidate chunk files sorted by order key.
    ///
    /// Hidden entries are skipped; any other entry whose name has no
    /// parseable trailing integer fails the whole discovery with
    /// [`SplitError::MalformedChunkName`]. Gaps and duplicate indices are
    /// accepted (the set is concatenated as-is in sorted order) but logged
    /// as a warning.
    pub fn discover(&self) -> Result<Vec<ChunkFile>, SplitError> {
        let meta = match fs::metadata(&self.dir) {
            Ok(meta) => meta,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(SplitError::InputNotFound {
                    path: self.dir.clone(),
                });
            }
            Err(e) => return Err(e.into()),
        };
        if !meta.is_dir() {
            return Err(SplitError::NotADirectory {
                path: self.dir.clone(),
            });
        }

        let mut files = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let entry = entry?;
            let file_name = entry.file_name().to_string_lossy().into_owned();
            if name::is_hidden(&file_name) {
                continue;
            }
            let index = name::order_key(&file_name)?;
            files.push(ChunkFile {
                path: entry.path(),
                index,
            });
        }
        files.sort_by_key(|f| f.index);

        self.warn_on_gaps(&files);
        Ok(files)
    }

    /// Reads the given files in order and concatenates their raw contents.
    pub fn concat(&self, files: &[ChunkFile]) -> Result<Vec<u8>, SplitError> {
        let mut contents = Vec::new();
        for file in files {
            let data = fs::read(&file.path)?;
            log::debug!("read {} ({} bytes)", file.path.display(), data.len());
            contents.extend_from_slice(&data);
        }
        Ok(contents)
    }

    /// Discovers and concatenates all chunk files of the directory.
    pub fn glue(&self) -> Result<Vec<u8>, SplitError> {
        let files = self.discover()?;
        self.concat(&files)
    }

    /// Glues the directory and writes the result verbatim to `out`.
    pub fn glue_to(&self, out: &Path) -> Result<(), SplitError> {
        let contents = self.glue()?;
        fs::write(out, &contents)?;
        log::info!("glued {} bytes into {}", contents.len(), out.display());
        Ok(())
    }

    // The chunk set is not required to be contiguous; a gap or duplicate is
    // concatenated as-is, surfaced here instead of silently accepted.
    fn warn_on_gaps(&self, files: &[ChunkFile]) {
        for (i, file) in files.iter().enumerate() {
            if file.index != i as u64 + 1 {
                log::warn!(
                    "chunk indices in {} are not contiguous from 1: found {:?}",
                    self.dir.display(),
                    files.iter().map(|f| f.index).collect::<Vec<_>>()
                );
                return;
            }
        }
    }
}
