//! Splitting input bytes into ordered chunks and persisting them.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use bytes::Bytes;

use crate::chunk::Chunk;
use crate::config::{SPLIT_DIR_SUFFIX, SplitConfig};
use crate::error::SplitError;
use crate::plan::ChunkPlan;

/// Slices `data` into ordered 1-indexed chunks according to `plan`.
///
/// Chunk `i` (for `i <= normal_count`) is the zero-copy slice
/// `data[(i-1)*normal_size .. i*normal_size]`; the trailing chunk is the
/// last `last_size` bytes. A [`ChunkPlan::Whole`] plan yields a single
/// chunk equal to the entire input. Concatenating the chunks in order
/// reproduces `data` byte-for-byte.
///
/// The plan must have been computed for `data.len()` bytes.
///
/// # Example
///
/// ```
/// use bytes::Bytes;
/// use splitrs::{ChunkPlan, SizingDirective, split_bytes};
///
/// let data = Bytes::from_static(&[0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
/// let plan = ChunkPlan::for_input(10, SizingDirective::ByCount(3))?;
/// let chunks = split_bytes(data, &plan);
///
/// assert_eq!(chunks.len(), 3);
/// assert_eq!(chunks[0].data(), &Bytes::from_static(&[0, 1, 2, 3]));
/// assert_eq!(chunks[2].data(), &Bytes::from_static(&[8, 9]));
/// # Ok::<(), splitrs::SplitError>(())
/// ```
pub fn split_bytes(data: Bytes, plan: &ChunkPlan) -> Vec<Chunk> {
    match *plan {
        ChunkPlan::Whole => vec![Chunk::new(data, 1)],
        ChunkPlan::Chunked {
            normal_count,
            normal_size,
            last_size,
        } => {
            let normal_size = normal_size as usize;
            let last_size = last_size as usize;
            debug_assert_eq!(
                normal_count as usize * normal_size + last_size,
                data.len()
            );

            let mut chunks = Vec::with_capacity(normal_count as usize + 1);
            let mut offset = 0;
            for index in 1..=normal_count {
                chunks.push(Chunk::new(data.slice(offset..offset + normal_size), index));
                offset += normal_size;
            }
            chunks.push(Chunk::new(
                data.slice(offset..offset + last_size),
                normal_count + 1,
            ));
            chunks
        }
    }
}

/// Derives the split output directory for `input`: the file name with its
/// last extension removed, plus the `_split` suffix, next to the input.
pub fn derive_split_dir(input: &Path) -> PathBuf {
    let stem = input.file_stem().unwrap_or_default().to_string_lossy();
    let dir_name = format!("{}{}", stem, SPLIT_DIR_SUFFIX);
    match input.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.join(dir_name),
        _ => PathBuf::from(dir_name),
    }
}

/// Writes chunks into an output directory it owns.
///
/// Each chunk is persisted as `{dir_base}_{index}`. Directory creation is
/// idempotent: writing into an existing directory succeeds.
#[derive(Debug, Clone)]
pub struct Splitter {
    dir: PathBuf,
}

impl Splitter {
    /// Creates a splitter targeting an explicit output directory.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Creates a splitter whose directory is derived from the input file
    /// name (see [`derive_split_dir`]).
    pub fn for_input(input: &Path) -> Self {
        Self {
            dir: derive_split_dir(input),
        }
    }

    /// Returns the output directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Consumes the splitter and returns the output directory.
    pub fn into_dir(self) -> PathBuf {
        self.dir
    }

    /// Creates the output directory if absent and writes one file per
    /// chunk, named after the directory base name and the chunk index.
    ///
    /// Partially written chunk files are not rolled back on failure.
    pub fn write(&self, chunks: &[Chunk]) -> Result<(), SplitError> {
        fs::create_dir_all(&self.dir)?;
        let base = self
            .dir
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .into_owned();

        for chunk in chunks {
            let path = self.dir.join(chunk.file_name(&base));
            fs::write(&path, chunk.data())?;
            log::debug!("wrote {} ({} bytes)", path.display(), chunk.len());
        }
        Ok(())
    }
}

/// Splits a file on disk: reads it fully, plans per `config`, slices, and
/// persists the chunk files. Returns the output directory.
///
/// The directory is `out_dir` when given, otherwise derived from the input
/// file name. Fails with [`SplitError::InputNotFound`] for a missing path
/// and [`SplitError::NotAFile`] when the path is not a regular file.
pub fn split_file(
    input: &Path,
    config: &SplitConfig,
    out_dir: Option<&Path>,
) -> Result<PathBuf, SplitError> {
    // Validate the directive before touching the filesystem so a bad
    // configuration never leaves files behind.
    let directive = config.directive()?;

    let meta = match fs::metadata(input) {
        Ok(meta) => meta,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(SplitError::InputNotFound {
                path: input.to_path_buf(),
            });
        }
        Err(e) => return Err(e.into()),
    };
    if !meta.is_file() {
        return Err(SplitError::NotAFile {
            path: input.to_path_buf(),
        });
    }

    let data = Bytes::from(fs::read(input)?);
    log::info!("input size: {} bytes", data.len());

    let plan = ChunkPlan::for_input(data.len() as u64, directive)?;
    let chunks = split_bytes(data, &plan);

    let splitter = match out_dir {
        Some(dir) => Splitter::new(dir),
        None => Splitter::for_input(input),
    };
    splitter.write(&chunks)?;
    log::info!(
        "wrote {} chunk(s) to {}",
        chunks.len(),
        splitter.dir().display()
    );

    Ok(splitter.into_dir())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SizingDirective;

    fn plan_for(input_size: u64, directive: SizingDirective) -> ChunkPlan {
        ChunkPlan::for_input(input_size, directive).unwrap()
    }

    #[test]
    fn test_split_ten_bytes_into_three() {
        let data = Bytes::from_static(&[0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
        let plan = plan_for(10, SizingDirective::ByCount(3));
        let chunks = split_bytes(data, &plan);

        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[0].data().as_ref(), &[0, 1, 2, 3]);
        assert_eq!(chunks[1].data().as_ref(), &[4, 5, 6, 7]);
        assert_eq!(chunks[2].data().as_ref(), &[8, 9]);
        assert_eq!(
            chunks.iter().map(|c| c.index()).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
    }

    #[test]
    fn test_split_whole() {
        let data = Bytes::from_static(b"unsplit");
        let chunks = split_bytes(data.clone(), &ChunkPlan::Whole);
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].data(), &data);
        assert_eq!(chunks[0].index(), 1);
    }

    #[test]
    fn test_split_exact_division_no_empty_chunk() {
        let data = Bytes::from(vec![0xAB; 9]);
        let plan = plan_for(9, SizingDirective::ByMaxSize(3));
        let chunks = split_bytes(data, &plan);

        assert_eq!(chunks.len(), 3);
        for chunk in &chunks {
            assert_eq!(chunk.len(), 3);
            assert!(!chunk.is_empty());
        }
    }

    #[test]
    fn test_concat_reproduces_input() {
        let data: Vec<u8> = (0..200).map(|i| (i % 256) as u8).collect();
        let input = Bytes::from(data.clone());

        for directive in [
            SizingDirective::ByCount(1),
            SizingDirective::ByCount(3),
            SizingDirective::ByCount(7),
            SizingDirective::ByMaxSize(1),
            SizingDirective::ByMaxSize(64),
            SizingDirective::ByMaxSize(1000),
        ] {
            let plan = plan_for(input.len() as u64, directive);
            let chunks = split_bytes(input.clone(), &plan);

            let combined: Vec<u8> = chunks
                .iter()
                .flat_map(|c| c.data().as_ref().to_vec())
                .collect();
            assert_eq!(combined, data, "round trip failed for {:?}", directive);
        }
    }

    #[test]
    fn test_chunks_are_zero_copy_slices() {
        let original = Bytes::from(vec![0x5A; 100]);
        let plan = plan_for(100, SizingDirective::ByMaxSize(32));
        let chunks = split_bytes(original.clone(), &plan);

        for chunk in &chunks {
            assert!(
                chunk.data().as_ptr() >= original.as_ptr()
                    && (chunk.data().as_ptr() as usize + chunk.len())
                        <= (original.as_ptr() as usize + original.len()),
                "chunk data must be a slice of the original Bytes"
            );
        }
    }

    #[test]
    fn test_derive_split_dir_strips_last_extension() {
        assert_eq!(
            derive_split_dir(Path::new("report.txt")),
            PathBuf::from("report_split")
        );
        assert_eq!(
            derive_split_dir(Path::new("archive.tar.gz")),
            PathBuf::from("archive.tar_split")
        );
    }

    #[test]
    fn test_derive_split_dir_without_extension() {
        assert_eq!(
            derive_split_dir(Path::new("notes")),
            PathBuf::from("notes_split")
        );
    }

    #[test]
    fn test_derive_split_dir_keeps_parent() {
        assert_eq!(
            derive_split_dir(Path::new("/data/in/report.txt")),
            PathBuf::from("/data/in/report_split")
        );
    }
}
