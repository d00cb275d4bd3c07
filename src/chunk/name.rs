//! Chunk file name codec.
//!
//! Chunk order is encoded entirely in file names: the integer after the
//! last separator is the sort key. The encoding lives behind this pair of
//! pure functions so an alternative scheme (zero-padded names, an explicit
//! index file) would be a drop-in replacement.

use crate::error::SplitError;

/// Separator between the directory base name and the chunk index.
pub const CHUNK_NAME_SEPARATOR: char = '_';

/// Builds the file name for the chunk at `index` inside a directory whose
/// base name is `dir_base`, e.g. `report_split_3`.
pub fn chunk_file_name(dir_base: &str, index: u64) -> String {
    format!("{}{}{}", dir_base, CHUNK_NAME_SEPARATOR, index)
}

/// Extracts the order key from a chunk file name: the integer parsed from
/// the substring after the last separator.
///
/// A name without a separator is parsed as a whole; parse failure is a
/// [`SplitError::MalformedChunkName`].
///
/// # Example
///
/// ```
/// use splitrs::order_key;
///
/// assert_eq!(order_key("report_split_10")?, 10);
/// assert!(order_key("notes.txt").is_err());
/// # Ok::<(), splitrs::SplitError>(())
/// ```
pub fn order_key(name: &str) -> Result<u64, SplitError> {
    let tail = match name.rfind(CHUNK_NAME_SEPARATOR) {
        Some(pos) => &name[pos + 1..],
        None => name,
    };
    tail.parse::<u64>()
        .map_err(|_| SplitError::MalformedChunkName {
            name: name.to_string(),
        })
}

/// Returns true for hidden directory entries, which are never chunk
/// candidates.
pub fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let name = chunk_file_name("archive_split", 7);
        assert_eq!(name, "archive_split_7");
        assert_eq!(order_key(&name).unwrap(), 7);
    }

    #[test]
    fn test_numeric_not_lexicographic() {
        // x_10 sorts after x_2 by order key even though it sorts before it
        // lexicographically.
        let k2 = order_key("x_2").unwrap();
        let k10 = order_key("x_10").unwrap();
        assert!("x_10" < "x_2");
        assert!(k2 < k10);
    }

    #[test]
    fn test_multiple_separators() {
        // Only the last segment counts.
        assert_eq!(order_key("a_b_3").unwrap(), 3);
    }

    #[test]
    fn test_no_separator() {
        assert_eq!(order_key("42").unwrap(), 42);
        assert!(order_key("notes").is_err());
    }

    #[test]
    fn test_malformed() {
        assert!(order_key("notes.txt").is_err());
        assert!(order_key("chunk_").is_err());
        assert!(order_key("chunk_-1").is_err());
    }

    #[test]
    fn test_malformed_carries_name() {
        let err = order_key("stray.log").unwrap_err();
        assert!(err.to_string().contains("stray.log"));
    }

    #[test]
    fn test_is_hidden() {
        assert!(is_hidden(".DS_Store"));
        assert!(is_hidden(".hidden_1"));
        assert!(!is_hidden("visible_1"));
    }
}
