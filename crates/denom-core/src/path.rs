//! Byte-packed encoding of a decomposition path.
//!
//! A path is the ordered list of indices the search picked from the active
//! denomination sequence. Each index fits in one byte and at most eight terms
//! are allowed, so the whole path packs into a single `u64`: the most recent
//! index lives in the low byte, the oldest in the highest populated byte.
//! Decoding needs the term count because trailing zero bytes are ambiguous
//! with index 0.

use crate::errors::{DenomError, ErrorInfo};

/// Maximum number of terms a packed path can hold (one byte per index).
pub const MAX_PATH_TERMS: usize = 8;

/// A decomposition path packed into a single 64-bit word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct EncodedPath(u64);

impl EncodedPath {
    /// The empty path, the accumulator every search branch starts from.
    pub fn empty() -> Self {
        Self(0)
    }

    /// Creates a path from its raw packed representation.
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw packed representation.
    pub fn as_raw(&self) -> u64 {
        self.0
    }

    /// Returns a new path with `index` appended as the most recent term.
    pub fn push(self, index: u8) -> Self {
        Self((self.0 << 8) | u64::from(index))
    }

    /// Recovers the indices in append order (oldest first).
    pub fn decode(self, count: usize) -> Vec<u8> {
        (0..count)
            .rev()
            .map(|term| ((self.0 >> (8 * term)) & 0xff) as u8)
            .collect()
    }
}

/// Packs an index sequence into an [`EncodedPath`].
///
/// Fails with [`DenomError::Path`] when the sequence is empty or longer than
/// [`MAX_PATH_TERMS`].
pub fn encode_path(indices: &[u8]) -> Result<EncodedPath, DenomError> {
    if indices.is_empty() || indices.len() > MAX_PATH_TERMS {
        return Err(DenomError::Path(
            ErrorInfo::new("path-length", "path length outside 1..=8")
                .with_context("length", indices.len().to_string()),
        ));
    }
    Ok(indices
        .iter()
        .fold(EncodedPath::empty(), |path, &index| path.push(index)))
}

/// Unpacks an [`EncodedPath`] back into its index sequence (append order).
pub fn decode_path(path: EncodedPath, count: usize) -> Result<Vec<u8>, DenomError> {
    if count == 0 || count > MAX_PATH_TERMS {
        return Err(DenomError::Path(
            ErrorInfo::new("path-length", "term count outside 1..=8")
                .with_context("count", count.to_string()),
        ));
    }
    Ok(path.decode(count))
}
