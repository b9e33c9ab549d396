//! Structural translations from [`crate::native`] records to [`crate::types`].
//!
//! Each sub-structure has its own small, pure mapping function so that a field missed in one
//! translation shows up in that translation's test rather than deep inside the block normalizer.

use crate::{native, types};

/// Converts a slot-based block timestamp.
pub const fn timestamp(ts: native::BlockTimestamp) -> types::Timestamp {
    types::Timestamp::from_unix_millis(ts.unix_millis())
}

/// Converts a list of block or header extensions.
pub fn extensions(extensions: &[native::Extension]) -> Vec<types::Extension> {
    extensions
        .iter()
        .map(|ext| types::Extension { r#type: u32::from(ext.kind), data: ext.data.clone() })
        .collect()
}

/// Converts a block header.
pub fn block_header(header: &native::BlockHeader) -> types::BlockHeader {
    types::BlockHeader {
        timestamp: timestamp(header.timestamp),
        producer: header.producer.clone(),
        confirmed: u32::from(header.confirmed),
        previous: header.previous,
        transaction_mroot: header.transaction_mroot,
        action_mroot: header.action_mroot,
        schedule_version: header.schedule_version,
        new_producers_v1: header.new_producers_v1.as_ref().map(producer_schedule),
        header_extensions: extensions(&header.header_extensions),
    }
}

/// Converts the block root Merkle state.
pub fn blockroot_merkle(merkle: &native::IncrementalMerkle) -> types::BlockRootMerkle {
    types::BlockRootMerkle {
        node_count: merkle.node_count,
        active_nodes: merkle.active_nodes.clone(),
    }
}

/// Converts the last-produced mapping.
pub fn producer_to_last_produced(
    pairs: &[native::PairAccountBlockNum],
) -> Vec<types::ProducerToLastProduced> {
    pairs
        .iter()
        .map(|pair| types::ProducerToLastProduced {
            name: pair.account.clone(),
            last_block_num_produced: pair.block_num,
        })
        .collect()
}

/// Converts the last-implied-irreversible mapping.
pub fn producer_to_last_implied_irb(
    pairs: &[native::PairAccountBlockNum],
) -> Vec<types::ProducerToLastImpliedIrb> {
    pairs
        .iter()
        .map(|pair| types::ProducerToLastImpliedIrb {
            name: pair.account.clone(),
            last_block_num_produced: pair.block_num,
        })
        .collect()
}

/// Converts the activated protocol feature set.
pub fn activated_protocol_features(
    set: &native::ProtocolFeatureActivationSet,
) -> types::ActivatedProtocolFeatures {
    types::ActivatedProtocolFeatures { protocol_features: set.protocol_features.clone() }
}

/// Converts a legacy producer schedule.
pub fn producer_schedule(schedule: &native::ProducerSchedule) -> types::ProducerSchedule {
    types::ProducerSchedule {
        version: schedule.version,
        producers: schedule
            .producers
            .iter()
            .map(|p| types::ProducerKey {
                account_name: p.producer_name.clone(),
                block_signing_key: p.block_signing_key.clone(),
            })
            .collect(),
    }
}

/// Converts a block signing authority.
pub fn block_signing_authority(
    authority: &native::BlockSigningAuthority,
) -> types::BlockSigningAuthority {
    match authority {
        native::BlockSigningAuthority::V0 { threshold, keys } => types::BlockSigningAuthority {
            threshold: *threshold,
            keys: keys
                .iter()
                .map(|k| types::KeyWeight {
                    public_key: k.public_key.clone(),
                    weight: u32::from(k.weight),
                })
                .collect(),
        },
    }
}

/// Converts an authority producer schedule.
pub fn producer_authority_schedule(
    schedule: &native::ProducerAuthoritySchedule,
) -> types::ProducerAuthoritySchedule {
    types::ProducerAuthoritySchedule {
        version: schedule.version,
        producers: schedule
            .producers
            .iter()
            .map(|p| types::ProducerAuthority {
                account_name: p.producer_name.clone(),
                block_signing_authority: block_signing_authority(&p.authority),
            })
            .collect(),
    }
}

/// Resolves the schedule variant a record carries.
///
/// A decoder only fills the slot of the revision it decoded. Should both be filled, the
/// authority schedule is kept since it is the only shape later revisions understand.
pub fn schedule(variants: &native::ScheduleVariants) -> Option<types::Schedule> {
    match (&variants.v1, &variants.v2) {
        (_, Some(v2)) => Some(types::Schedule::V2(producer_authority_schedule(v2))),
        (Some(v1), None) => Some(types::Schedule::V1(producer_schedule(v1))),
        (None, None) => None,
    }
}

/// Resolves the block signing variant a record carries, with the same precedence as
/// [`schedule`].
pub fn block_signing(
    key_v1: Option<&str>,
    authority_v2: Option<&native::BlockSigningAuthority>,
) -> Option<types::BlockSigning> {
    match (key_v1, authority_v2) {
        (_, Some(authority)) => {
            Some(types::BlockSigning::Authority(block_signing_authority(authority)))
        }
        (Some(key), None) => Some(types::BlockSigning::Key(key.to_string())),
        (None, None) => None,
    }
}

/// Converts a pending producer schedule.
pub fn pending_schedule(pending: &native::PendingSchedule) -> types::PendingProducerSchedule {
    types::PendingProducerSchedule {
        schedule_lib_num: pending.schedule_lib_num,
        schedule_hash: pending.schedule_hash,
        schedule: schedule(&pending.schedule),
    }
}

/// Converts a receipt status.
pub const fn transaction_status(status: native::TransactionStatus) -> types::TransactionStatus {
    match status {
        native::TransactionStatus::Executed => types::TransactionStatus::Executed,
        native::TransactionStatus::SoftFail => types::TransactionStatus::SoftFail,
        native::TransactionStatus::HardFail => types::TransactionStatus::HardFail,
        native::TransactionStatus::Delayed => types::TransactionStatus::Delayed,
        native::TransactionStatus::Expired => types::TransactionStatus::Expired,
        native::TransactionStatus::Unknown => types::TransactionStatus::Unknown,
    }
}

/// Converts a packed transaction.
pub fn packed_transaction(packed: &native::PackedTransaction) -> types::PackedTransaction {
    types::PackedTransaction {
        signatures: packed.signatures.clone(),
        compression: match packed.compression {
            native::CompressionType::None => types::CompressionType::None,
            native::CompressionType::Zlib => types::CompressionType::Zlib,
        },
        packed_context_free_data: packed.packed_context_free_data.clone(),
        packed_transaction: packed.packed_transaction.clone(),
    }
}

/// Converts a block transaction receipt. The index is left at zero, positions are assigned by
/// the block normalizer.
pub fn transaction_receipt(receipt: &native::TransactionReceipt) -> types::TransactionReceipt {
    types::TransactionReceipt {
        id: receipt.transaction.id,
        index: 0,
        status: transaction_status(receipt.status),
        cpu_usage_micro_seconds: receipt.cpu_usage_micro_seconds,
        net_usage_words: receipt.net_usage_words,
        packed_transaction: receipt.transaction.packed.as_ref().map(packed_transaction),
    }
}

/// Converts a trace receipt header.
pub const fn transaction_receipt_header(
    header: &native::TransactionReceiptHeader,
) -> types::TransactionReceiptHeader {
    types::TransactionReceiptHeader {
        status: transaction_status(header.status),
        cpu_usage_micro_seconds: header.cpu_usage_micro_seconds,
        net_usage_words: header.net_usage_words,
    }
}

/// Converts an exception.
pub fn exception(except: &native::Except) -> types::Exception {
    types::Exception {
        code: except.code,
        name: except.name.clone(),
        message: except.message.clone(),
    }
}

/// Converts an action.
pub fn action(action: &native::Action) -> types::Action {
    types::Action {
        account: action.account.clone(),
        name: action.name.clone(),
        authorization: action
            .authorization
            .iter()
            .map(|level| types::PermissionLevel {
                actor: level.actor.clone(),
                permission: level.permission.clone(),
            })
            .collect(),
        raw_data: action.data.clone(),
    }
}

/// Converts an action receipt.
pub fn action_receipt(receipt: &native::ActionReceipt) -> types::ActionReceipt {
    types::ActionReceipt {
        receiver: receipt.receiver.clone(),
        digest: receipt.act_digest,
        global_sequence: receipt.global_sequence,
        auth_sequence: receipt
            .auth_sequence
            .iter()
            .map(|auth| types::AuthSequence {
                account_name: auth.account.clone(),
                sequence: auth.sequence,
            })
            .collect(),
        recv_sequence: receipt.recv_sequence,
        code_sequence: u64::from(receipt.code_sequence),
        abi_sequence: u64::from(receipt.abi_sequence),
    }
}

/// Truncates `console` to at most `limit` bytes, backing off to the previous UTF-8 character
/// boundary.
pub fn truncate_console(console: &str, limit: Option<usize>) -> String {
    match limit {
        Some(limit) if console.len() > limit => {
            let mut end = limit;
            while !console.is_char_boundary(end) {
                end -= 1;
            }
            console[..end].to_string()
        }
        _ => console.to_string(),
    }
}

/// Converts an action trace found at `execution_index` in its transaction.
pub fn action_trace(
    trace: &native::ActionTrace,
    execution_index: u32,
    max_console_length: Option<usize>,
) -> types::ActionTrace {
    types::ActionTrace {
        receiver: trace.receiver.clone(),
        receipt: trace.receipt.as_ref().map(action_receipt),
        action: action(&trace.action),
        context_free: trace.context_free,
        elapsed: trace.elapsed,
        console: truncate_console(&trace.console, max_console_length),
        transaction_id: trace.transaction_id,
        block_num: u64::from(trace.block_num),
        producer_block_id: trace.producer_block_id.unwrap_or_default(),
        block_time: timestamp(trace.block_time),
        account_ram_deltas: trace
            .account_ram_deltas
            .iter()
            .map(|delta| types::AccountRamDelta {
                account: delta.account.clone(),
                delta: delta.delta,
            })
            .collect(),
        exception: trace.except.as_ref().map(exception),
        error_code: trace.error_code,
        action_ordinal: trace.action_ordinal,
        creator_action_ordinal: trace.creator_action_ordinal,
        closest_unnotified_ancestor_action_ordinal: trace
            .closest_unnotified_ancestor_action_ordinal,
        execution_index,
    }
}

/// Converts a transaction trace, including a failed deferred trace it may embed.
pub fn transaction_trace(
    trace: &native::TransactionTrace,
    max_console_length: Option<usize>,
) -> types::TransactionTrace {
    types::TransactionTrace {
        id: trace.id,
        block_num: u64::from(trace.block_num),
        index: 0,
        block_time: timestamp(trace.block_time),
        producer_block_id: trace.producer_block_id.unwrap_or_default(),
        receipt: trace.receipt.as_ref().map(transaction_receipt_header),
        elapsed: trace.elapsed,
        net_usage: trace.net_usage,
        scheduled: trace.scheduled,
        action_traces: trace
            .action_traces
            .iter()
            .zip(0u32..)
            .map(|(action, idx)| action_trace(action, idx, max_console_length))
            .collect(),
        failed_dtrx_trace: trace
            .failed_dtrx_trace
            .as_deref()
            .map(|failed| Box::new(transaction_trace(failed, max_console_length))),
        exception: trace.except.as_ref().map(exception),
        error_code: trace.error_code,
    }
}
