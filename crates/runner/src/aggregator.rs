use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use gw_config::AggregatorKind;
use gw_types::offchain::CellInfo;
use gw_utils::transaction_skeleton::TransactionSkeleton;

use crate::traits::AggregatorLock;

/// Issues a block on every tick.
#[derive(Debug, Default, Clone, Copy)]
pub struct AlwaysSuccess;

#[async_trait]
impl AggregatorLock for AlwaysSuccess {
    async fn should_issue_block(&self, _median_time: u64, _rollup_cell: &CellInfo) -> Result<bool> {
        Ok(true)
    }

    async fn fix_skeleton(
        &self,
        _median_time: u64,
        tx_skeleton: TransactionSkeleton,
    ) -> Result<TransactionSkeleton> {
        Ok(tx_skeleton)
    }

    async fn cancel_issuance(&self) -> Result<()> {
        Ok(())
    }
}

pub fn build_aggregator_lock(kind: AggregatorKind) -> Arc<dyn AggregatorLock> {
    match kind {
        AggregatorKind::AlwaysSuccess => Arc::new(AlwaysSuccess),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_always_success() {
        let lock = build_aggregator_lock(AggregatorKind::AlwaysSuccess);
        assert!(lock
            .should_issue_block(0, &CellInfo::default())
            .await
            .unwrap());
        let tx_skeleton = lock
            .fix_skeleton(0, TransactionSkeleton::default())
            .await
            .unwrap();
        assert!(tx_skeleton.inputs().is_empty());
        lock.cancel_issuance().await.unwrap();
    }
}
