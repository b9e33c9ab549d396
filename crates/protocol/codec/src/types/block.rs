//! The canonical block record.

use crate::types::{
    BlockSigning, BlockSigningAuthority, PendingProducerSchedule, ProducerAuthoritySchedule,
    ProducerSchedule, Schedule, TransactionReceipt, TransactionTrace,
};
use alloy_primitives::{B256, Bytes};

/// A point in time, split in whole seconds and nanoseconds since the Unix epoch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Timestamp {
    /// Whole seconds since the Unix epoch.
    pub seconds: i64,
    /// Sub-second nanoseconds, always in `0..1_000_000_000`.
    pub nanos: i32,
}

impl Timestamp {
    /// Builds a timestamp from milliseconds since the Unix epoch.
    pub const fn from_unix_millis(millis: u64) -> Self {
        Self { seconds: (millis / 1_000) as i64, nanos: ((millis % 1_000) * 1_000_000) as i32 }
    }

    /// Returns the timestamp as milliseconds since the Unix epoch.
    pub const fn unix_millis(&self) -> i64 {
        self.seconds * 1_000 + (self.nanos / 1_000_000) as i64
    }
}

/// A typed block or header extension.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Extension {
    /// The extension type identifier.
    pub r#type: u32,
    /// The raw extension payload.
    pub data: Bytes,
}

/// The canonical block header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct BlockHeader {
    /// Block production time.
    pub timestamp: Timestamp,
    /// The producer account name.
    pub producer: String,
    /// The number of prior blocks confirmed by the producer.
    pub confirmed: u32,
    /// Id of the parent block.
    pub previous: B256,
    /// Merkle root of the transaction receipts.
    pub transaction_mroot: B256,
    /// Merkle root of the action receipts.
    pub action_mroot: B256,
    /// The active schedule version.
    pub schedule_version: u32,
    /// A newly proposed legacy schedule. Only legacy revisions carry it.
    pub new_producers_v1: Option<ProducerSchedule>,
    /// Header extensions.
    pub header_extensions: Vec<Extension>,
}

/// Incremental Merkle state of the block roots.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct BlockRootMerkle {
    /// Number of leaves appended so far.
    pub node_count: u64,
    /// The active nodes.
    pub active_nodes: Vec<B256>,
}

/// Last block produced by a producer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ProducerToLastProduced {
    /// The producer account name.
    pub name: String,
    /// The block number.
    pub last_block_num_produced: u32,
}

/// Last block a producer implied irreversible.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ProducerToLastImpliedIrb {
    /// The producer account name.
    pub name: String,
    /// The block number.
    pub last_block_num_produced: u32,
}

/// Digests of the activated protocol features.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ActivatedProtocolFeatures {
    /// Feature digests, in activation order.
    pub protocol_features: Vec<B256>,
}

/// The canonical block record.
///
/// Built fresh by [`crate::normalize`] for every source block. The legacy/v2 schedule and signing
/// variants are held as tagged unions so a record can never carry both shapes of the same pair.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Block {
    /// The block id.
    pub id: B256,
    /// The block number.
    pub number: u32,
    /// Schema version, see [`crate::BLOCK_VERSION`].
    pub version: u32,
    /// The block header.
    pub header: BlockHeader,
    /// The producer signature, in its string form.
    pub producer_signature: String,
    /// Block extensions.
    pub block_extensions: Vec<Extension>,
    /// DPoS proposed last irreversible block number.
    pub dpos_proposed_irreversible_blocknum: u32,
    /// DPoS last irreversible block number.
    pub dpos_irreversible_blocknum: u32,
    /// Block root Merkle state.
    pub blockroot_merkle: BlockRootMerkle,
    /// Last block produced, per producer.
    pub producer_to_last_produced: Vec<ProducerToLastProduced>,
    /// Last implied irreversible block, per producer.
    pub producer_to_last_implied_irb: Vec<ProducerToLastImpliedIrb>,
    /// Activated protocol features.
    pub activated_protocol_features: Option<ActivatedProtocolFeatures>,
    /// Confirmation counts, one per unconfirmed ancestor, in source order.
    pub confirm_count: Vec<u32>,
    /// The pending producer schedule.
    pub pending_schedule: Option<PendingProducerSchedule>,
    /// The active producer schedule, in the shape the source carried.
    pub active_schedule: Option<Schedule>,
    /// The block signing key or authority, in the shape the source carried.
    pub block_signing: Option<BlockSigning>,
    /// Whether the emitting node validated the block.
    pub validated: bool,
    /// All transaction receipts of the block.
    pub unfiltered_transactions: Vec<TransactionReceipt>,
    /// Transaction traces of the block.
    pub unfiltered_transaction_traces: Vec<TransactionTrace>,
    /// Number of entries in `unfiltered_transactions`.
    pub unfiltered_transaction_count: u32,
    /// Number of entries in `unfiltered_transaction_traces`.
    pub unfiltered_transaction_trace_count: u32,
    /// Number of input action traces across all transaction traces.
    pub unfiltered_executed_input_action_count: u32,
    /// Number of action traces across all transaction traces.
    pub unfiltered_executed_total_action_count: u32,
}

impl Block {
    /// Returns the legacy active schedule, if that is the shape the block carries.
    pub const fn active_schedule_v1(&self) -> Option<&ProducerSchedule> {
        match &self.active_schedule {
            Some(Schedule::V1(schedule)) => Some(schedule),
            _ => None,
        }
    }

    /// Returns the authority active schedule, if that is the shape the block carries.
    pub const fn active_schedule_v2(&self) -> Option<&ProducerAuthoritySchedule> {
        match &self.active_schedule {
            Some(Schedule::V2(schedule)) => Some(schedule),
            _ => None,
        }
    }

    /// Returns the legacy block signing key, if that is the shape the block carries.
    pub fn block_signing_key(&self) -> Option<&str> {
        match &self.block_signing {
            Some(BlockSigning::Key(key)) => Some(key.as_str()),
            _ => None,
        }
    }

    /// Returns the block signing authority, if that is the shape the block carries.
    pub const fn valid_block_signing_authority_v2(&self) -> Option<&BlockSigningAuthority> {
        match &self.block_signing {
            Some(BlockSigning::Authority(authority)) => Some(authority),
            _ => None,
        }
    }
}
