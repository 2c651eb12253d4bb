use std::{
    sync::Arc,
    time::{Duration, SystemTime, UNIX_EPOCH},
};

use anyhow::{Context, Result};
use ckb_fixed_hash::H256;
use gw_config::SyncConfig;
use gw_rpc_client::{error::is_request_error, traits::L1Client};
use gw_types::{
    core::{BlockView, TransactionView},
    godwoken::HeaderInfo,
    offchain::RollupContext,
    packed::Script,
    prelude::*,
};
use gw_utils::exponential_backoff::{retry_with_backoff, ExponentialBackoff};
use tracing::instrument;

use crate::{
    deposition::DepositionScanner,
    traits::ChainService,
    types::{L1Action, L1ActionContext, NextBlockContext, SyncParam, DEFAULT_AGGREGATOR_ID},
};

const MAX_RETRY_SLEEP: Duration = Duration::from_secs(30);

/// Follows the base chain block by block and feeds rollup transactions
/// to the chain service.
pub struct SyncEngine {
    client: Arc<dyn L1Client>,
    chain_service: Arc<dyn ChainService>,
    scanner: DepositionScanner,
    rollup_type_script: Script,
    config: SyncConfig,
    last_synced_block_number: u64,
}

impl SyncEngine {
    pub fn new(
        client: Arc<dyn L1Client>,
        chain_service: Arc<dyn ChainService>,
        scanner: DepositionScanner,
        rollup_context: &RollupContext,
        config: SyncConfig,
        last_synced_block_number: u64,
    ) -> Self {
        SyncEngine {
            client,
            chain_service,
            scanner,
            rollup_type_script: rollup_context.rollup_type_script.clone(),
            config,
            last_synced_block_number,
        }
    }

    pub fn last_synced_block_number(&self) -> u64 {
        self.last_synced_block_number
    }

    #[instrument(skip_all, fields(from = self.last_synced_block_number))]
    pub async fn sync_to_tip(&mut self) -> Result<()> {
        loop {
            let number = self.last_synced_block_number + 1;
            let block = match self.fetch_block(number).await? {
                Some(block) => block,
                None => break,
            };
            self.sync_block(&block).await?;
            self.last_synced_block_number = number;
        }

        self.wait_for_indexer(self.last_synced_block_number).await?;
        log::debug!("synced to {}", self.last_synced_block_number);
        Ok(())
    }

    /// Block until the indexer has processed `block_number`.
    pub async fn wait_for_indexer(&self, block_number: u64) -> Result<()> {
        let poll_interval = Duration::from_millis(self.config.poll_interval_ms);
        loop {
            if let Some(tip) = self.client.get_indexer_tip().await? {
                let indexed: u64 = tip.block_number.into();
                if indexed >= block_number {
                    return Ok(());
                }
                log::debug!("waiting for indexer {} to reach {}", indexed, block_number);
            }
            tokio::time::sleep(poll_interval).await;
        }
    }

    /// Whether `tx` creates a cell of the rollup type script.
    pub fn is_rollup_tx(&self, tx: &TransactionView) -> bool {
        tx.outputs().into_iter().any(|output| match output.type_().to_opt() {
            Some(type_) => type_.as_slice() == self.rollup_type_script.as_slice(),
            None => false,
        })
    }

    async fn fetch_block(&self, number: u64) -> Result<Option<BlockView>> {
        let backoff = ExponentialBackoff::new(Duration::from_millis(self.config.retry_base_ms))
            .with_max_sleep(MAX_RETRY_SLEEP)
            .with_jitter(true);
        let client = &self.client;
        retry_with_backoff(backoff, self.config.max_retries, is_request_error, move || {
            client.get_block_by_number(number)
        })
        .await
        .with_context(|| format!("fetch block {}", number))
    }

    async fn sync_block(&self, block: &BlockView) -> Result<()> {
        let header = block.header();
        let block_hash: H256 = header.hash().unpack();
        let header_info = HeaderInfo {
            number: header.number(),
            block_hash: block_hash.0,
        };

        for tx in block.transactions() {
            if !self.is_rollup_tx(&tx) {
                continue;
            }
            let deposition_requests = self
                .scanner
                .scan_committed(self.client.as_ref(), &tx)
                .await?;
            log::info!(
                "sync rollup tx {} in block {}, deposits: {}",
                tx.hash(),
                header_info.number,
                deposition_requests.len()
            );

            let update = L1Action {
                transaction: tx.data(),
                header_info,
                context: L1ActionContext::SubmitTxs {
                    deposition_requests,
                },
            };
            let param = SyncParam {
                reverts: Vec::new(),
                updates: vec![update],
                next_block_context: next_block_context()?,
            };
            self.chain_service.sync(param).await?;
        }
        Ok(())
    }
}

fn next_block_context() -> Result<NextBlockContext> {
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .context("system time before unix epoch")?
        .as_secs();
    Ok(NextBlockContext {
        aggregator_id: DEFAULT_AGGREGATOR_ID,
        timestamp,
    })
}
