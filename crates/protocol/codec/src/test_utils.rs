//! Fixtures shared by the normalizer tests.

use crate::{
    NativeDecoder, native,
    types::{Action, ActionTrace, TransactionTrace},
};
use alloy_primitives::{B256, Bytes};

/// A decoder returning canned records, or an error when no record is set.
#[derive(Debug, Clone, Default)]
pub(crate) struct MockDecoder {
    pub(crate) block_state: Option<native::BlockState>,
    pub(crate) trace: Option<native::TransactionTrace>,
}

#[derive(Debug, thiserror::Error)]
#[error("no record in mock decoder")]
pub(crate) struct MockDecoderError;

impl NativeDecoder for MockDecoder {
    type Error = MockDecoderError;

    fn decode_block_state(&self, _input: &[u8]) -> Result<native::BlockState, Self::Error> {
        self.block_state.clone().ok_or(MockDecoderError)
    }

    fn decode_transaction_trace(
        &self,
        _input: &[u8],
    ) -> Result<native::TransactionTrace, Self::Error> {
        self.trace.clone().ok_or(MockDecoderError)
    }
}

fn base_block_state(block_num: u32) -> native::BlockState {
    native::BlockState {
        block_num,
        block_id: B256::repeat_byte(0x0b),
        dpos_proposed_irreversible_blocknum: block_num - 2,
        dpos_irreversible_blocknum: block_num - 10,
        blockroot_merkle: native::IncrementalMerkle {
            active_nodes: vec![B256::repeat_byte(0x0c)],
            node_count: u64::from(block_num) - 1,
        },
        producer_to_last_produced: vec![native::PairAccountBlockNum {
            account: "bp1".to_string(),
            block_num,
        }],
        producer_to_last_implied_irb: vec![native::PairAccountBlockNum {
            account: "bp1".to_string(),
            block_num: block_num - 10,
        }],
        confirm_count: vec![1, 2],
        signed_block: native::SignedBlock {
            header: native::BlockHeader {
                timestamp: native::BlockTimestamp(1_000),
                producer: "bp1".to_string(),
                previous: B256::repeat_byte(0x0a),
                ..Default::default()
            },
            producer_signature: "SIG_K1_fixture".to_string(),
            transactions: vec![],
            block_extensions: vec![native::Extension {
                kind: 0,
                data: Bytes::from_static(b"\x01"),
            }],
        },
        validated: true,
        ..Default::default()
    }
}

/// A block state as emitted by a legacy revision: key schedule and a single signing key.
pub(crate) fn legacy_block_state() -> native::BlockState {
    native::BlockState {
        active_schedule: native::ScheduleVariants {
            v1: Some(native::ProducerSchedule {
                version: 1,
                producers: vec![native::ProducerKey {
                    producer_name: "eosio".to_string(),
                    block_signing_key: "EOS6MRyAjQq8ud7hVNYcfnVPJqcVpscN5So8BhtHuGYqET5GDW5CV"
                        .to_string(),
                }],
            }),
            v2: None,
        },
        block_signing_key_v1: Some(
            "EOS6MRyAjQq8ud7hVNYcfnVPJqcVpscN5So8BhtHuGYqET5GDW5CV".to_string(),
        ),
        ..base_block_state(50)
    }
}

/// A block state as emitted by a later revision: authority schedule and signing authority.
pub(crate) fn v2_block_state() -> native::BlockState {
    let authority = native::BlockSigningAuthority::V0 {
        threshold: 1,
        keys: vec![native::KeyWeight { public_key: "PUB_K1_fixture".to_string(), weight: 1 }],
    };
    let schedule = native::ProducerAuthoritySchedule {
        version: 2,
        producers: vec![native::ProducerAuthority {
            producer_name: "bp1".to_string(),
            authority: authority.clone(),
        }],
    };

    native::BlockState {
        active_schedule: native::ScheduleVariants { v1: None, v2: Some(schedule.clone()) },
        valid_block_signing_authority_v2: Some(authority),
        pending_schedule: Some(native::PendingSchedule {
            schedule_lib_num: 95,
            schedule_hash: B256::repeat_byte(0x0d),
            schedule: native::ScheduleVariants { v1: None, v2: Some(schedule) },
        }),
        activated_protocol_features: Some(native::ProtocolFeatureActivationSet {
            protocol_features: vec![B256::repeat_byte(0x0e)],
        }),
        ..base_block_state(100)
    }
}

/// A canonical trace with `actions` action traces, the first `inputs` of which are input
/// actions.
pub(crate) fn trace_with_actions(actions: u32, inputs: u32) -> TransactionTrace {
    TransactionTrace {
        id: B256::repeat_byte(0x01),
        action_traces: (0..actions)
            .map(|i| ActionTrace {
                receiver: "eosio.token".to_string(),
                action: Action {
                    account: "eosio.token".to_string(),
                    name: "transfer".to_string(),
                    ..Default::default()
                },
                action_ordinal: i + 1,
                creator_action_ordinal: if i < inputs { 0 } else { 1 },
                execution_index: i,
                ..Default::default()
            })
            .collect(),
        ..Default::default()
    }
}
