use anyhow::Result;
use async_trait::async_trait;
use gw_types::{godwoken::HeaderInfo, offchain::CellInfo};
use gw_utils::transaction_skeleton::TransactionSkeleton;

use crate::types::{ProduceBlockParam, ProduceBlockResult, SyncParam};

/// The layer2 state machine.
#[async_trait]
pub trait ChainService: Send + Sync {
    /// Last base-chain header the state machine has processed.
    async fn last_synced(&self) -> Result<HeaderInfo>;

    async fn sync(&self, param: SyncParam) -> Result<()>;

    async fn produce_block(&self, param: ProduceBlockParam) -> Result<ProduceBlockResult>;
}

/// Turn-taking between aggregators.
#[async_trait]
pub trait AggregatorLock: Send + Sync {
    /// `median_time` is in milliseconds.
    async fn should_issue_block(&self, median_time: u64, rollup_cell: &CellInfo) -> Result<bool>;

    /// Inject the cells or witnesses proving it is our turn.
    async fn fix_skeleton(
        &self,
        median_time: u64,
        tx_skeleton: TransactionSkeleton,
    ) -> Result<TransactionSkeleton>;

    async fn cancel_issuance(&self) -> Result<()>;
}
