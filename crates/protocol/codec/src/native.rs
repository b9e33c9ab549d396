//! Native block and trace records, as produced by an EOSIO wire decoder.
//!
//! These types mirror the chain's own structures across protocol revisions. Fields that only exist
//! in a given revision are modeled as independent [`Option`]s, exactly as a decoder observes them;
//! reconciling them is the job of [`crate::normalize`].

use alloy_primitives::{B256, Bytes};

/// A block timestamp, expressed as the number of half-second slots since the EOSIO epoch
/// (`2000-01-01T00:00:00Z`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BlockTimestamp(pub u32);

impl BlockTimestamp {
    /// Unix time of the EOSIO block timestamp epoch, in milliseconds.
    pub const EPOCH_MS: u64 = 946_684_800_000;

    /// Duration of one block slot, in milliseconds.
    pub const SLOT_MS: u64 = 500;

    /// Returns the timestamp as milliseconds since the Unix epoch.
    pub const fn unix_millis(&self) -> u64 {
        self.0 as u64 * Self::SLOT_MS + Self::EPOCH_MS
    }
}

/// An opaque, typed extension attached to a block or a block header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Extension {
    /// The extension type identifier.
    pub kind: u16,
    /// The raw extension payload.
    pub data: Bytes,
}

/// A legacy producer schedule entry: one producer and its single signing key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProducerKey {
    /// The producer account name.
    pub producer_name: String,
    /// The block signing public key, in its string form.
    pub block_signing_key: String,
}

/// The legacy producer schedule.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProducerSchedule {
    /// The schedule version.
    pub version: u32,
    /// The scheduled producers, in rotation order.
    pub producers: Vec<ProducerKey>,
}

/// A weighted public key inside a [`BlockSigningAuthority`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KeyWeight {
    /// The public key, in its string form.
    pub public_key: String,
    /// The weight the key contributes toward the threshold.
    pub weight: u16,
}

/// A block signing authority.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BlockSigningAuthority {
    /// Weighted-threshold key authority.
    V0 {
        /// The weight required to sign.
        threshold: u32,
        /// The weighted keys.
        keys: Vec<KeyWeight>,
    },
}

/// An authority-based producer schedule entry.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProducerAuthority {
    /// The producer account name.
    pub producer_name: String,
    /// The authority that signs this producer's blocks.
    pub authority: BlockSigningAuthority,
}

/// The authority-based producer schedule.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProducerAuthoritySchedule {
    /// The schedule version.
    pub version: u32,
    /// The scheduled producers, in rotation order.
    pub producers: Vec<ProducerAuthority>,
}

/// The schedule slots a decoder fills depending on the protocol revision that produced the
/// record. Legacy revisions populate `v1`, later ones `v2`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScheduleVariants {
    /// Legacy key schedule.
    pub v1: Option<ProducerSchedule>,
    /// Authority schedule.
    pub v2: Option<ProducerAuthoritySchedule>,
}

/// A schedule that was proposed but is not active yet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PendingSchedule {
    /// The block number at which the schedule became irreversible.
    pub schedule_lib_num: u32,
    /// The hash of the pending schedule.
    pub schedule_hash: B256,
    /// The pending schedule itself.
    pub schedule: ScheduleVariants,
}

/// Incremental Merkle state of the block roots.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IncrementalMerkle {
    /// The active nodes of the tree.
    pub active_nodes: Vec<B256>,
    /// The number of leaves appended so far.
    pub node_count: u64,
}

/// A `(producer, block number)` pair.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PairAccountBlockNum {
    /// The producer account name.
    pub account: String,
    /// The associated block number.
    pub block_num: u32,
}

/// The set of activated protocol features.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProtocolFeatureActivationSet {
    /// Feature digests, in activation order.
    pub protocol_features: Vec<B256>,
}

/// A block header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BlockHeader {
    /// The slot timestamp of the block.
    pub timestamp: BlockTimestamp,
    /// The producer account name.
    pub producer: String,
    /// The number of prior blocks confirmed by the producer.
    pub confirmed: u16,
    /// The id of the previous block.
    pub previous: B256,
    /// Merkle root of the transaction receipts.
    pub transaction_mroot: B256,
    /// Merkle root of the action receipts.
    pub action_mroot: B256,
    /// The active schedule version.
    pub schedule_version: u32,
    /// A newly proposed legacy schedule, only set by legacy revisions.
    pub new_producers_v1: Option<ProducerSchedule>,
    /// Header extensions.
    pub header_extensions: Vec<Extension>,
}

/// Transaction receipt status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransactionStatus {
    /// Succeeded, no error handler executed.
    #[default]
    Executed,
    /// Objectively failed, error handler executed.
    SoftFail,
    /// Objectively failed and error handler objectively failed.
    HardFail,
    /// Transaction delayed.
    Delayed,
    /// Transaction expired.
    Expired,
    /// Status byte not known to the decoder.
    Unknown,
}

/// Compression scheme of a packed transaction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
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
pub struct PackedTransaction {
    /// Signatures, in their string form.
    pub signatures: Vec<String>,
    /// How `packed_context_free_data` and `packed_transaction` are compressed.
    pub compression: CompressionType,
    /// Packed context free data.
    pub packed_context_free_data: Bytes,
    /// Packed transaction body.
    pub packed_transaction: Bytes,
}

/// The transaction referenced by a receipt: its id, and the packed form when the block carries it
/// inline (deferred transactions only carry the id).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransactionWithId {
    /// The transaction id.
    pub id: B256,
    /// The packed transaction, if inline.
    pub packed: Option<PackedTransaction>,
}

/// A transaction receipt as included in a signed block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransactionReceipt {
    /// Execution status.
    pub status: TransactionStatus,
    /// Billed CPU, in microseconds.
    pub cpu_usage_micro_seconds: u32,
    /// Billed NET, in 8-byte words.
    pub net_usage_words: u32,
    /// The receipted transaction.
    pub transaction: TransactionWithId,
}

/// A signed block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SignedBlock {
    /// The block header.
    pub header: BlockHeader,
    /// The producer signature over the header, in its string form.
    pub producer_signature: String,
    /// Receipts of the transactions included in the block.
    pub transactions: Vec<TransactionReceipt>,
    /// Block extensions.
    pub block_extensions: Vec<Extension>,
}

/// The decoded block state, the unit the normalizer consumes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BlockState {
    /// The block number.
    pub block_num: u32,
    /// The block id.
    pub block_id: B256,
    /// The DPoS proposed last irreversible block number.
    pub dpos_proposed_irreversible_blocknum: u32,
    /// The DPoS last irreversible block number.
    pub dpos_irreversible_blocknum: u32,
    /// The active producer schedule, in whichever shape the revision uses.
    pub active_schedule: ScheduleVariants,
    /// The block root Merkle state.
    pub blockroot_merkle: IncrementalMerkle,
    /// Last block produced, per producer.
    pub producer_to_last_produced: Vec<PairAccountBlockNum>,
    /// Last implied irreversible block, per producer.
    pub producer_to_last_implied_irb: Vec<PairAccountBlockNum>,
    /// The block signing key. Only legacy revisions populate it.
    pub block_signing_key_v1: Option<String>,
    /// The valid block signing authority. Only later revisions populate it.
    pub valid_block_signing_authority_v2: Option<BlockSigningAuthority>,
    /// Confirmation counts of the unconfirmed ancestors.
    pub confirm_count: Vec<u8>,
    /// The pending producer schedule, if any.
    pub pending_schedule: Option<PendingSchedule>,
    /// Activated protocol features, if tracked.
    pub activated_protocol_features: Option<ProtocolFeatureActivationSet>,
    /// The signed block.
    pub signed_block: SignedBlock,
    /// Whether the block was validated by the node that emitted it.
    pub validated: bool,
}

/// Header of a transaction receipt embedded in a trace.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransactionReceiptHeader {
    /// Execution status.
    pub status: TransactionStatus,
    /// Billed CPU, in microseconds.
    pub cpu_usage_micro_seconds: u32,
    /// Billed NET, in 8-byte words.
    pub net_usage_words: u32,
}

/// An `actor@permission` pair.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PermissionLevel {
    /// The authorizing account.
    pub actor: String,
    /// The permission used.
    pub permission: String,
}

/// An action, as submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Action {
    /// The contract account.
    pub account: String,
    /// The action name.
    pub name: String,
    /// Authorizations.
    pub authorization: Vec<PermissionLevel>,
    /// ABI-encoded action payload.
    pub data: Bytes,
}

/// Authorization sequence of one account in an [`ActionReceipt`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AuthSequence {
    /// The account.
    pub account: String,
    /// Its authorization sequence.
    pub sequence: u64,
}

/// Receipt of an executed action.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionReceipt {
    /// The receiver account.
    pub receiver: String,
    /// Digest of the action.
    pub act_digest: B256,
    /// Chain-wide action sequence.
    pub global_sequence: u64,
    /// Receiver sequence.
    pub recv_sequence: u64,
    /// Authorization sequences.
    pub auth_sequence: Vec<AuthSequence>,
    /// Code sequence.
    pub code_sequence: u32,
    /// ABI sequence.
    pub abi_sequence: u32,
}

/// A RAM usage change charged to an account.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AccountRamDelta {
    /// The account charged.
    pub account: String,
    /// The delta, in bytes.
    pub delta: i64,
}

/// A chain exception.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Except {
    /// Exception code.
    pub code: i32,
    /// Exception name.
    pub name: String,
    /// Human readable message.
    pub message: String,
}

/// Trace of a single action execution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionTrace {
    /// One-based ordinal of this action in its transaction.
    pub action_ordinal: u32,
    /// Ordinal of the action that created this one, zero for input actions.
    pub creator_action_ordinal: u32,
    /// Ordinal of the closest ancestor that was not a notification.
    pub closest_unnotified_ancestor_action_ordinal: u32,
    /// The action receipt, absent when the action failed.
    pub receipt: Option<ActionReceipt>,
    /// The account the action executed on.
    pub receiver: String,
    /// The action.
    pub action: Action,
    /// Whether this is a context free action.
    pub context_free: bool,
    /// Execution time, in microseconds.
    pub elapsed: i64,
    /// Console output.
    pub console: String,
    /// Owning transaction id.
    pub transaction_id: B256,
    /// Owning block number.
    pub block_num: u32,
    /// Owning block timestamp.
    pub block_time: BlockTimestamp,
    /// Owning block id, when known at trace time.
    pub producer_block_id: Option<B256>,
    /// RAM deltas.
    pub account_ram_deltas: Vec<AccountRamDelta>,
    /// Exception raised, if any.
    pub except: Option<Except>,
    /// Error code, if any.
    pub error_code: Option<u64>,
}

/// Trace of a transaction execution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransactionTrace {
    /// The transaction id.
    pub id: B256,
    /// Owning block number.
    pub block_num: u32,
    /// Owning block timestamp.
    pub block_time: BlockTimestamp,
    /// Owning block id, when known at trace time.
    pub producer_block_id: Option<B256>,
    /// The receipt header, absent when the transaction failed.
    pub receipt: Option<TransactionReceiptHeader>,
    /// Execution time, in microseconds.
    pub elapsed: i64,
    /// NET usage, in bytes.
    pub net_usage: u64,
    /// Whether the transaction was scheduled (deferred).
    pub scheduled: bool,
    /// Action traces, in execution order.
    pub action_traces: Vec<ActionTrace>,
    /// Trace of the failed deferred transaction this one replaced, if any.
    pub failed_dtrx_trace: Option<Box<TransactionTrace>>,
    /// Exception raised, if any.
    pub except: Option<Except>,
    /// Error code, if any.
    pub error_code: Option<u64>,
}
