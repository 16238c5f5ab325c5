//! List error types.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListError {
    #[error("row index {index} out of range for list of {len} rows")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("cannot pop from an empty list")]
    Empty,
}
