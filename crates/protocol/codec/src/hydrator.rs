//! Block normalization.
//!
//! [`normalize`] is the pure core: it maps a decoded [`BlockState`] to the canonical [`Block`].
//! The [`Hydrator`] wraps it with a [`NativeDecoder`] so callers can go straight from raw bytes to
//! a canonical block.

use crate::{
    BLOCK_VERSION, DecodeError, HydratorConfig, NativeDecoder, convert,
    native::BlockState,
    types::{Block, TransactionTrace},
};
use tracing::{debug, trace};

/// Normalizes a decoded block state into a canonical [`Block`].
///
/// `traces` are the canonical transaction traces selected for this block by an upstream step.
/// They are re-indexed by position and stamped with the block's time, id and number, and the
/// derived action counters are computed from them. Normalization is total: every shape a native
/// record can take maps to a canonical block.
pub fn normalize(state: &BlockState, traces: Vec<TransactionTrace>) -> Block {
    let signed_block = &state.signed_block;

    let mut block = Block {
        id: state.block_id,
        number: state.block_num,
        version: BLOCK_VERSION,
        header: convert::block_header(&signed_block.header),
        producer_signature: signed_block.producer_signature.clone(),
        block_extensions: convert::extensions(&signed_block.block_extensions),
        dpos_proposed_irreversible_blocknum: state.dpos_proposed_irreversible_blocknum,
        dpos_irreversible_blocknum: state.dpos_irreversible_blocknum,
        blockroot_merkle: convert::blockroot_merkle(&state.blockroot_merkle),
        producer_to_last_produced: convert::producer_to_last_produced(
            &state.producer_to_last_produced,
        ),
        producer_to_last_implied_irb: convert::producer_to_last_implied_irb(
            &state.producer_to_last_implied_irb,
        ),
        activated_protocol_features: state
            .activated_protocol_features
            .as_ref()
            .map(convert::activated_protocol_features),
        confirm_count: state.confirm_count.iter().copied().map(u32::from).collect(),
        pending_schedule: state.pending_schedule.as_ref().map(convert::pending_schedule),
        active_schedule: convert::schedule(&state.active_schedule),
        block_signing: convert::block_signing(
            state.block_signing_key_v1.as_deref(),
            state.valid_block_signing_authority_v2.as_ref(),
        ),
        validated: state.validated,
        ..Default::default()
    };

    block.unfiltered_transactions = signed_block
        .transactions
        .iter()
        .zip(0u64..)
        .map(|(receipt, index)| {
            let mut receipt = convert::transaction_receipt(receipt);
            receipt.index = index;
            receipt
        })
        .collect();
    block.unfiltered_transaction_count = count(block.unfiltered_transactions.len());

    block.unfiltered_transaction_traces = traces;
    block.unfiltered_transaction_trace_count = count(block.unfiltered_transaction_traces.len());

    let mut total_actions = 0usize;
    let mut input_actions = 0usize;
    for (trace, index) in block.unfiltered_transaction_traces.iter_mut().zip(0u64..) {
        trace.index = index;
        trace.block_time = block.header.timestamp;
        trace.producer_block_id = block.id;
        trace.block_num = u64::from(block.number);

        total_actions += trace.action_traces.len();
        input_actions += trace.input_action_count();
    }
    block.unfiltered_executed_total_action_count = count(total_actions);
    block.unfiltered_executed_input_action_count = count(input_actions);

    block
}

fn count(len: usize) -> u32 {
    u32::try_from(len).unwrap_or(u32::MAX)
}

/// Turns raw block and trace bytes into canonical records through a [`NativeDecoder`].
///
/// The hydrator holds no mutable state; a single instance can serve any number of concurrent
/// callers as long as its decoder can.
#[derive(Debug, Clone)]
pub struct Hydrator<D> {
    decoder: D,
    config: HydratorConfig,
}

impl<D: NativeDecoder> Hydrator<D> {
    /// Creates a new [`Hydrator`].
    pub const fn new(decoder: D, config: HydratorConfig) -> Self {
        Self { decoder, config }
    }

    /// Returns the configuration in use.
    pub const fn config(&self) -> &HydratorConfig {
        &self.config
    }

    /// Decodes a serialized block state and normalizes it, see [`normalize`].
    pub fn hydrate_block(
        &self,
        input: &[u8],
        traces: Vec<TransactionTrace>,
    ) -> Result<Block, DecodeError> {
        debug!(target: "hydrator", input_len = input.len(), "Hydrating block from bytes");

        let state = self
            .decoder
            .decode_block_state(input)
            .map_err(|err| DecodeError::BlockState(Box::new(err)))?;
        let block = normalize(&state, traces);

        trace!(
            target: "hydrator",
            number = block.number,
            id = %block.id,
            transactions = block.unfiltered_transaction_count,
            traces = block.unfiltered_transaction_trace_count,
            total_actions = block.unfiltered_executed_total_action_count,
            input_actions = block.unfiltered_executed_input_action_count,
            "Hydrated block"
        );
        Ok(block)
    }

    /// Decodes a serialized transaction trace into its canonical form.
    ///
    /// Action traces get their execution index, and console output is truncated according to
    /// [`HydratorConfig::max_console_length`]. The trace keeps the block context it was decoded
    /// with; [`normalize`] restamps it once the trace is attached to a block.
    pub fn decode_transaction_trace(&self, input: &[u8]) -> Result<TransactionTrace, DecodeError> {
        let trace = self
            .decoder
            .decode_transaction_trace(input)
            .map_err(|err| DecodeError::TransactionTrace(Box::new(err)))?;
        Ok(convert::transaction_trace(&trace, self.config.max_console_length))
    }
}
