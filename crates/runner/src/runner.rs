use std::{sync::Arc, time::Duration};

use anyhow::{anyhow, Result};
use ckb_fixed_hash::H256;
use gw_config::Config;
use gw_rpc_client::{error::is_request_error, rpc_client::RPCClient, traits::L1Client};
use gw_types::{offchain::RollupContext, prelude::*};
use gw_utils::{exponential_backoff::ExponentialBackoff, wallet::Wallet};
use tokio::{
    sync::{mpsc, Mutex},
    task::JoinHandle,
};
use tracing::{info_span, instrument, Instrument};

use crate::{
    aggregator::build_aggregator_lock,
    block_producer::BlockProducer,
    chain_service::ChainServiceClient,
    deposition::DepositionScanner,
    signer::TransactionSigner,
    sync_l1::SyncEngine,
    traits::ChainService,
    types::CycleOutcome,
};

/// State owned by the running cycle.
pub struct ChainTaskContext {
    pub sync: SyncEngine,
    /// `None` in read-only mode.
    pub block_producer: Option<BlockProducer>,
}

impl ChainTaskContext {
    pub async fn create(
        client: Arc<dyn L1Client>,
        chain_service: Arc<dyn ChainService>,
        config: &Config,
        rollup_context: RollupContext,
    ) -> Result<Self> {
        let scanner = DepositionScanner::new(&config.deployment, &rollup_context);
        let last_synced = chain_service.last_synced().await?;
        log::info!(
            "chain service last synced block #{} 0x{}",
            last_synced.number,
            hex::encode(last_synced.block_hash)
        );
        let sync = SyncEngine::new(
            client.clone(),
            chain_service.clone(),
            scanner,
            &rollup_context,
            config.sync.clone(),
            last_synced.number,
        );

        let block_producer = match config.block_producer {
            Some(ref producer_config) => {
                let wallet = Wallet::from_config(&producer_config.wallet)?;
                log::info!("aggregator lock script: {}", wallet.lock_script());
                let aggregator = build_aggregator_lock(producer_config.aggregator);
                let signer = TransactionSigner::new(
                    client.clone(),
                    aggregator.clone(),
                    wallet,
                    producer_config.fee_rate,
                );
                Some(BlockProducer::new(
                    client,
                    chain_service,
                    aggregator,
                    signer,
                    config.deployment.clone(),
                    rollup_context,
                    producer_config.clone(),
                ))
            }
            None => {
                log::info!("read-only mode, blocks are synced but never produced");
                None
            }
        };

        Ok(ChainTaskContext {
            sync,
            block_producer,
        })
    }

    #[instrument(skip(self))]
    pub async fn run_cycle(&mut self, median_time: u64) -> Result<()> {
        let block_producer = match self.block_producer {
            Some(ref block_producer) => block_producer,
            None => return self.sync.sync_to_tip().await,
        };
        match block_producer
            .produce_next_block(&mut self.sync, median_time)
            .await?
        {
            CycleOutcome::NotEligible => log::debug!("skip block production"),
            CycleOutcome::Submitted(tx_hash) => log::info!("block submitted in tx {}", tx_hash),
            CycleOutcome::SubmissionFailed => log::warn!("block submission failed"),
        }
        Ok(())
    }
}

/// Polls the base chain and starts one cycle per median time change.
pub struct ChainTask {
    client: Arc<dyn L1Client>,
    ctx: Arc<Mutex<ChainTaskContext>>,
    poll_interval: Duration,
    last_median_time: Option<u64>,
    cycle_error_tx: mpsc::UnboundedSender<anyhow::Error>,
    cycle_error_rx: mpsc::UnboundedReceiver<anyhow::Error>,
}

impl ChainTask {
    pub fn create(
        client: Arc<dyn L1Client>,
        ctx: ChainTaskContext,
        poll_interval: Duration,
    ) -> Self {
        let (cycle_error_tx, cycle_error_rx) = mpsc::unbounded_channel();
        ChainTask {
            client,
            ctx: Arc::new(Mutex::new(ctx)),
            poll_interval,
            last_median_time: None,
            cycle_error_tx,
            cycle_error_rx,
        }
    }

    pub fn poll_interval(&self) -> Duration {
        self.poll_interval
    }

    pub async fn run(&mut self) -> Result<()> {
        // errors of finished cycles
        if let Ok(err) = self.cycle_error_rx.try_recv() {
            return Err(err);
        }

        let tip = self.client.get_tip_header().await?;
        let tip_hash: H256 = tip.hash().unpack();
        let median_time = self
            .client
            .get_block_median_time(&tip_hash)
            .await?
            .ok_or_else(|| anyhow!("can't get median time of block {}", tip_hash))?;
        if self.last_median_time == Some(median_time) {
            return Ok(());
        }
        self.last_median_time = Some(median_time);
        self.trigger(median_time);
        Ok(())
    }

    /// Spawn a cycle unless one is in flight, in which case the trigger
    /// is dropped.
    pub fn trigger(&self, median_time: u64) -> Option<JoinHandle<()>> {
        let mut ctx = match self.ctx.clone().try_lock_owned() {
            Ok(ctx) => ctx,
            Err(_) => {
                log::info!("a cycle is in flight, skip median time {}", median_time);
                return None;
            }
        };
        let cycle_error_tx = self.cycle_error_tx.clone();
        let handle = tokio::spawn(async move {
            if let Err(err) = ctx.run_cycle(median_time).await {
                log::error!("cycle error: {:#}", err);
                // the receiver lives as long as the task
                let _ = cycle_error_tx.send(err);
            }
        });
        Some(handle)
    }
}

pub async fn run(config: Config) -> Result<()> {
    let rollup_context = RollupContext::new(config.chain.rollup_type_script());
    log::info!(
        "rollup type hash: 0x{}",
        hex::encode(rollup_context.rollup_type_hash)
    );

    let client: Arc<dyn L1Client> = Arc::new(RPCClient::with_urls(
        &config.rpc_client.ckb_url,
        &config.rpc_client.indexer_url,
    )?);
    let chain_service: Arc<dyn ChainService> =
        Arc::new(ChainServiceClient::with_url(&config.chain_service.url)?);

    let mut ctx =
        ChainTaskContext::create(client.clone(), chain_service, &config, rollup_context).await?;

    // catch up before accepting ticks
    let tip = client.get_tip_header().await?;
    log::info!("waiting for indexer to reach block #{}", tip.number());
    ctx.sync.wait_for_indexer(tip.number()).await?;
    ctx.sync.sync_to_tip().await?;
    log::info!("synced to block #{}", ctx.sync.last_synced_block_number());

    let poll_interval = Duration::from_millis(match config.block_producer {
        Some(ref producer_config) => producer_config.poll_interval_ms,
        None => config.sync.poll_interval_ms,
    });
    let chain_task = ChainTask::create(client, ctx, poll_interval);

    tokio::select! {
        result = sigint_or_sigterm() => result,
        result = poll_chain(chain_task) => result,
    }
}

/// Returns only on errors other than request errors, which are retried
/// with backoff.
async fn poll_chain(mut chain_task: ChainTask) -> Result<()> {
    let mut backoff = ExponentialBackoff::new(Duration::from_secs(1));
    loop {
        let run_span = info_span!("chain_task_run");
        match chain_task.run().instrument(run_span.clone()).await {
            Ok(()) => {
                backoff.reset();
                let sleep_span = info_span!(parent: &run_span, "chain_task interval sleep");
                tokio::time::sleep(chain_task.poll_interval())
                    .instrument(sleep_span)
                    .await;
            }
            Err(err) if is_request_error(&err) => {
                let backoff_sleep = backoff.next_sleep();
                log::error!(
                    "chain polling loop request error, will retry in {}s: {:#}",
                    backoff_sleep.as_secs(),
                    err
                );
                let sleep_span = info_span!(parent: &run_span, "chain_task backoff sleep");
                tokio::time::sleep(backoff_sleep).instrument(sleep_span).await;
            }
            Err(err) => {
                log::error!("chain polling loop exit unexpected, error: {:#}", err);
                return Err(err);
            }
        }
    }
}

async fn sigint_or_sigterm() -> Result<()> {
    let int = tokio::signal::ctrl_c();
    #[cfg(unix)]
    {
        let mut term =
            tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())?;
        tokio::select! {
            result = int => result?,
            _ = term.recv() => {}
        }
    }
    #[cfg(not(unix))]
    int.await?;

    log::info!("received sigint or sigterm, shutting down");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing_tools::{Fixture, MockChainService, MockL1};
    use gw_config::SyncConfig;

    fn read_only_task(fixture: &Fixture, l1: Arc<MockL1>) -> ChainTask {
        let chain_service = Arc::new(MockChainService::default());
        let sync = SyncEngine::new(
            l1.clone(),
            chain_service,
            fixture.scanner(),
            &fixture.rollup_context,
            SyncConfig {
                poll_interval_ms: 1,
                ..Default::default()
            },
            0,
        );
        let ctx = ChainTaskContext {
            sync,
            block_producer: None,
        };
        ChainTask::create(l1, ctx, Duration::from_millis(1))
    }

    #[tokio::test]
    async fn test_trigger_is_dropped_while_cycle_in_flight() {
        let fixture = Fixture::new();
        let l1 = Arc::new(MockL1::default());
        l1.push_empty_block();
        let task = read_only_task(&fixture, l1);

        let guard = task.ctx.clone().lock_owned().await;
        assert!(task.trigger(1000).is_none());
        drop(guard);

        let handle = task.trigger(1000).unwrap();
        handle.await.unwrap();
        assert_eq!(task.ctx.lock().await.sync.last_synced_block_number(), 1);
    }

    #[tokio::test]
    async fn test_cycle_per_median_time_change() {
        let fixture = Fixture::new();
        let l1 = Arc::new(MockL1::default());
        l1.push_empty_block();
        l1.set_median_time(1000);
        let mut task = read_only_task(&fixture, l1.clone());

        // the lock is taken before spawning, waiting on it waits for the cycle
        task.run().await.unwrap();
        assert_eq!(task.last_median_time, Some(1000));
        assert_eq!(task.ctx.lock().await.sync.last_synced_block_number(), 1);

        l1.push_empty_block();
        task.run().await.unwrap();
        assert_eq!(task.ctx.lock().await.sync.last_synced_block_number(), 1);

        l1.set_median_time(2000);
        task.run().await.unwrap();
        assert_eq!(task.ctx.lock().await.sync.last_synced_block_number(), 2);
    }
}
