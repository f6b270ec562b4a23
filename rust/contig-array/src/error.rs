//! Error type for the checked element accessors.

use thiserror::Error as ThisError;

/// Error returned by the bounds-checked accessors of
/// [`DynArray`](crate::array::DynArray).
///
/// Positional contract violations (inserting or removing outside the valid
/// range, unchecked indexing past the logical size) are caller bugs and
/// panic instead of surfacing here; see the `# Panics` sections on the
/// respective operations.
#[derive(Debug, ThisError, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The requested index lies at or beyond the logical size.
    #[error("index {index} out of bounds for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, Error>;

#[cold]
pub(crate) fn index_out_of_bounds<T>(index: usize, len: usize) -> Result<T> {
    Err(Error::IndexOutOfBounds { index, len })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_out_of_bounds_display() {
        let err = Error::IndexOutOfBounds { index: 7, len: 3 };
        assert_eq!(err.to_string(), "index 7 out of bounds for length 3");
    }
}
