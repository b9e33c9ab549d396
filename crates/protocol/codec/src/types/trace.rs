//! Transaction and action traces.

use crate::types::{Timestamp, TransactionReceiptHeader};
use alloy_primitives::{B256, Bytes};

/// An `actor@permission` pair.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PermissionLevel {
    /// The authorizing account.
    pub actor: String,
    /// The permission used.
    pub permission: String,
}

/// An action.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Action {
    /// The contract account.
    pub account: String,
    /// The action name.
    pub name: String,
    /// Authorizations.
    pub authorization: Vec<PermissionLevel>,
    /// ABI-encoded payload.
    pub raw_data: Bytes,
}

/// Authorization sequence of one account.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct AuthSequence {
    /// The account name.
    pub account_name: String,
    /// The sequence.
    pub sequence: u64,
}

/// Receipt of an executed action.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ActionReceipt {
    /// The receiver account.
    pub receiver: String,
    /// Digest of the action.
    pub digest: B256,
    /// Chain-wide action sequence.
    pub global_sequence: u64,
    /// Authorization sequences.
    pub auth_sequence: Vec<AuthSequence>,
    /// Receiver sequence.
    pub recv_sequence: u64,
    /// Code sequence.
    pub code_sequence: u64,
    /// ABI sequence.
    pub abi_sequence: u64,
}

/// A RAM usage change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct AccountRamDelta {
    /// The account charged.
    pub account: String,
    /// The delta, in bytes.
    pub delta: i64,
}

/// A chain exception.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Exception {
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
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ActionTrace {
    /// The account the action executed on.
    pub receiver: String,
    /// The action receipt, absent when the action failed.
    pub receipt: Option<ActionReceipt>,
    /// The action.
    pub action: Action,
    /// Whether the action is context free.
    pub context_free: bool,
    /// Execution time, in microseconds.
    pub elapsed: i64,
    /// Console output, possibly truncated.
    pub console: String,
    /// Owning transaction id.
    pub transaction_id: B256,
    /// Owning block number.
    pub block_num: u64,
    /// Owning block id.
    pub producer_block_id: B256,
    /// Owning block time.
    pub block_time: Timestamp,
    /// RAM deltas.
    pub account_ram_deltas: Vec<AccountRamDelta>,
    /// Exception raised, if any.
    pub exception: Option<Exception>,
    /// Error code, if any.
    pub error_code: Option<u64>,
    /// One-based ordinal of the action in its transaction.
    pub action_ordinal: u32,
    /// Ordinal of the creating action, zero for input actions.
    pub creator_action_ordinal: u32,
    /// Ordinal of the closest ancestor that was not a notification.
    pub closest_unnotified_ancestor_action_ordinal: u32,
    /// Zero-based position of the trace in its transaction's execution order.
    pub execution_index: u32,
}

impl ActionTrace {
    /// Returns `true` if the action was part of the submitted transaction rather than created
    /// by another action (inline action or notification).
    pub const fn is_input(&self) -> bool {
        self.creator_action_ordinal == 0
    }

    /// Returns `true` if the action trace is a notification, i.e. it executed on an account other
    /// than the contract that defines the action.
    pub fn is_notification(&self) -> bool {
        self.receiver != self.action.account
    }
}

/// Trace of a transaction execution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct TransactionTrace {
    /// The transaction id.
    pub id: B256,
    /// Owning block number.
    pub block_num: u64,
    /// Zero-based position of the trace in its block.
    pub index: u64,
    /// Owning block time.
    pub block_time: Timestamp,
    /// Owning block id.
    pub producer_block_id: B256,
    /// The receipt header, absent when the transaction failed.
    pub receipt: Option<TransactionReceiptHeader>,
    /// Execution time, in microseconds.
    pub elapsed: i64,
    /// NET usage, in bytes.
    pub net_usage: u64,
    /// Whether the transaction was deferred.
    pub scheduled: bool,
    /// Action traces, in execution order.
    pub action_traces: Vec<ActionTrace>,
    /// Trace of the failed deferred transaction this one replaced.
    pub failed_dtrx_trace: Option<Box<TransactionTrace>>,
    /// Exception raised, if any.
    pub exception: Option<Exception>,
    /// Error code, if any.
    pub error_code: Option<u64>,
}

impl TransactionTrace {
    /// Returns the number of input actions in this trace.
    pub fn input_action_count(&self) -> usize {
        self.action_traces.iter().filter(|trace| trace.is_input()).count()
    }
}
