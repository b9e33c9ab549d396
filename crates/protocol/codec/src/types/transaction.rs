//! Transaction receipts.

use alloy_primitives::{B256, Bytes};

/// Execution status of a transaction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TransactionStatus {
    /// The status was not recognized.
    #[default]
    Unknown,
    /// Succeeded, no error handler executed.
    Executed,
    /// Objectively failed, error handler executed.
    SoftFail,
    /// Objectively failed and error handler objectively failed.
    HardFail,
    /// Delayed.
    Delayed,
    /// Expired.
    Expired,
}

/// Compression scheme of a packed transaction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CompressionType {
    /// Uncompressed.
    #[default]
    None,
    /// Zlib compressed.
    Zlib,
}

/// A packed, signed transaction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PackedTransaction {
    /// Signatures.
    pub signatures: Vec<String>,
    /// Compression of the packed payloads.
    pub compression: CompressionType,
    /// Packed context free data.
    pub packed_context_free_data: Bytes,
    /// Packed transaction body.
    pub packed_transaction: Bytes,
}

/// A transaction receipt of a block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct TransactionReceipt {
    /// The transaction id.
    pub id: B256,
    /// Zero-based position of the receipt in its block.
    pub index: u64,
    /// Execution status.
    pub status: TransactionStatus,
    /// Billed CPU, in microseconds.
    pub cpu_usage_micro_seconds: u32,
    /// Billed NET, in 8-byte words.
    pub net_usage_words: u32,
    /// The packed transaction, absent for deferred transactions.
    pub packed_transaction: Option<PackedTransaction>,
}

/// The receipt header embedded in a transaction trace.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct TransactionReceiptHeader {
    /// Execution status.
    pub status: TransactionStatus,
    /// Billed CPU, in microseconds.
    pub cpu_usage_micro_seconds: u32,
    /// Billed NET, in 8-byte words.
    pub net_usage_words: u32,
}
