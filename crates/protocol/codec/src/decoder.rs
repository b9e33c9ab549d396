//! The decoding capability the hydrator is built on.

use crate::native::{BlockState, TransactionTrace};
use auto_impl::auto_impl;

/// Decodes raw chain-native bytes into native records.
///
/// This is the boundary to the wire format: any backend that understands the chain's binary
/// serialization can drive a [`crate::Hydrator`] by implementing it.
#[auto_impl(&, Box, Arc)]
pub trait NativeDecoder {
    /// The error returned when the input cannot be decoded.
    type Error: core::error::Error + Send + Sync + 'static;

    /// Decodes a serialized block state.
    fn decode_block_state(&self, input: &[u8]) -> Result<BlockState, Self::Error>;

    /// Decodes a serialized transaction trace.
    fn decode_transaction_trace(&self, input: &[u8]) -> Result<TransactionTrace, Self::Error>;
}
