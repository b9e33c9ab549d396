//! The canonical, version-stable block schema.
//!
//! Every downstream consumer reads these types regardless of the protocol revision that produced
//! the source block. Field names and shapes are a data contract, versioned by [`BLOCK_VERSION`].

mod block;
pub use block::{
    ActivatedProtocolFeatures, Block, BlockHeader, BlockRootMerkle, Extension,
    ProducerToLastImpliedIrb, ProducerToLastProduced, Timestamp,
};

mod schedule;
pub use schedule::{
    BlockSigning, BlockSigningAuthority, KeyWeight, PendingProducerSchedule, ProducerAuthority,
    ProducerAuthoritySchedule, ProducerKey, ProducerSchedule, Schedule,
};

mod transaction;
pub use transaction::{
    CompressionType, PackedTransaction, TransactionReceipt, TransactionReceiptHeader,
    TransactionStatus,
};

mod trace;
pub use trace::{
    AccountRamDelta, Action, ActionReceipt, ActionTrace, AuthSequence, Exception, PermissionLevel,
    TransactionTrace,
};

/// Schema version stamped on every normalized [`Block`].
///
/// Version 1 added the unfiltered total counts: transaction count, transaction trace count,
/// executed total action count and executed input action count.
pub const BLOCK_VERSION: u32 = 1;
