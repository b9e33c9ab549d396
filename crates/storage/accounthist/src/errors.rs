//! Error types for the account history key codec.

use thiserror::Error;

/// Errors returned by the action key codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum KeyError {
    /// The output buffer cannot hold a full key.
    #[error("buffer too small for action key: expected at least {expected} bytes, got {actual}")]
    BufferTooSmall {
        /// Required buffer length.
        expected: usize,
        /// Provided buffer length.
        actual: usize,
    },
    /// The input is not exactly one key long.
    #[error("malformed action key: expected {expected} bytes, got {actual}")]
    MalformedKey {
        /// Required key length.
        expected: usize,
        /// Provided key length.
        actual: usize,
    },
}
