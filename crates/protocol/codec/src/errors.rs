//! Error types for the block normalizer.

use thiserror::Error;

/// A type-erased error raised by a [`crate::NativeDecoder`] backend.
pub type BoxedDecoderError = Box<dyn core::error::Error + Send + Sync + 'static>;

/// An error raised while turning raw bytes into a native record.
///
/// Normalization of a decoded record never fails; this is the only error the hydrator surfaces,
/// and it wraps the decoder's error opaquely.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The block state could not be decoded.
    #[error("unmarshalling binary block state: {0}")]
    BlockState(#[source] BoxedDecoderError),
    /// A transaction trace could not be decoded.
    #[error("unmarshalling binary transaction trace: {0}")]
    TransactionTrace(#[source] BoxedDecoderError),
}
