use ckb_fixed_hash::H256;
use gw_types::{
    bytes::Bytes,
    godwoken::{DepositionLockArgs, DepositionRequest, HeaderInfo, L2Block},
    offchain::CellInfo,
    packed::Transaction,
};

/// This runner always acts as aggregator 0.
pub const DEFAULT_AGGREGATOR_ID: u32 = 0;

/// A live deposition cell accepted for the next block.
#[derive(Debug, Clone)]
pub struct DepositionEntry {
    pub cell: CellInfo,
    pub request: DepositionRequest,
    pub lock_args: DepositionLockArgs,
    /// Lock args without the rollup type hash prefix.
    pub raw_lock_args: Bytes,
}

#[derive(Debug, Eq, PartialEq, Clone)]
pub struct NextBlockContext {
    pub aggregator_id: u32,
    /// Seconds.
    pub timestamp: u64,
}

#[derive(Debug, Eq, PartialEq, Clone)]
pub enum L1ActionContext {
    SubmitTxs {
        /// deposition requests
        deposition_requests: Vec<DepositionRequest>,
    },
    Revert {
        /// packed challenge target
        challenge_target: Bytes,
    },
}

#[derive(Debug, Clone)]
pub struct L1Action {
    /// transaction
    pub transaction: Transaction,
    /// transactions' header info
    pub header_info: HeaderInfo,
    pub context: L1ActionContext,
}

/// sync params
#[derive(Debug, Clone)]
pub struct SyncParam {
    /// contains transitions from tip to fork point
    pub reverts: Vec<L1Action>,
    /// contains transitions from fork point to new tips
    pub updates: Vec<L1Action>,
    pub next_block_context: NextBlockContext,
}

/// Produce block param
#[derive(Debug, Eq, PartialEq, Clone)]
pub struct ProduceBlockParam {
    /// aggregator of this block
    pub aggregator_id: u32,
    pub deposition_requests: Vec<DepositionRequest>,
}

#[derive(Debug, Clone)]
pub struct ProduceBlockResult {
    pub block: L2Block,
    /// packed global state, stored as the new rollup cell data
    pub global_state: Bytes,
}

/// How a production cycle ended. Errors are returned separately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleOutcome {
    /// The aggregator lock refused to issue a block.
    NotEligible,
    Submitted(H256),
    /// The node rejected the transaction, issuance was cancelled.
    SubmissionFailed,
}
