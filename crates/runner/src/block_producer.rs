use std::sync::Arc;

use anyhow::{anyhow, Result};
use ckb_fixed_hash::H256;
use futures::future::try_join_all;
use gw_config::{BlockProducerConfig, DeploymentConfig};
use gw_rpc_client::{
    collector::CellCollector,
    indexer_types::{Order, SearchKey},
    traits::L1Client,
};
use gw_types::{
    bytes::Bytes,
    core::{DepType, ScriptHashType},
    godwoken::L2Block,
    offchain::{CellInfo, InputCellInfo, RollupContext},
    packed::{CellDep, OutPoint, OutPointVec, Script, WitnessArgs},
    prelude::*,
};
use gw_utils::transaction_skeleton::TransactionSkeleton;
use thiserror::Error;
use tracing::instrument;

use crate::{
    custodian::generate_custodian_cells,
    deposition::DepositionScanner,
    signer::TransactionSigner,
    sync_l1::SyncEngine,
    traits::{AggregatorLock, ChainService},
    types::{
        CycleOutcome, DepositionEntry, ProduceBlockParam, ProduceBlockResult,
        DEFAULT_AGGREGATOR_ID,
    },
    withdrawal::WithdrawalProcessor,
};

#[derive(Error, Debug)]
pub enum BlockProducerError {
    #[error("expected exactly one live rollup cell, found {count}")]
    RollupCellCount { count: usize },
    #[error("can't find the cell dep of type script {code_hash} used by deposition cell {out_point}")]
    TypeDepNotFound { out_point: OutPoint, code_hash: H256 },
}

/// The single live cell carrying the rollup type script.
pub async fn query_rollup_cell(
    client: &dyn L1Client,
    rollup_type_script: &Script,
) -> Result<CellInfo> {
    let search_key = SearchKey::with_type(rollup_type_script.clone());
    let cells = CellCollector::new(client, search_key, Order::Desc)
        .collect_all()
        .await?;
    // the indexer matches args by prefix
    let mut cells: Vec<CellInfo> = cells
        .into_iter()
        .map(|cell| cell.info())
        .filter(|cell| match cell.output.type_().to_opt() {
            Some(type_) => type_.as_slice() == rollup_type_script.as_slice(),
            None => false,
        })
        .collect();
    if cells.len() != 1 {
        return Err(BlockProducerError::RollupCellCount { count: cells.len() }.into());
    }
    cells
        .pop()
        .ok_or_else(|| anyhow!("can't find rollup cell"))
}

async fn resolve_dep_cells(client: &dyn L1Client, dep: &CellDep) -> Result<Vec<CellInfo>> {
    let cell = match client.get_live_cell(&dep.out_point(), true).await? {
        Some(cell) => cell,
        None => return Ok(Vec::new()),
    };
    if dep.dep_type() == DepType::Code.into() {
        return Ok(vec![cell]);
    }

    // parse dep group
    let out_points =
        OutPointVec::from_slice(&cell.data).map_err(|_| anyhow!("invalid dep group"))?;
    let cells = try_join_all(
        out_points
            .into_iter()
            .map(|out_point| async move { client.get_live_cell(&out_point, true).await }),
    )
    .await?;
    Ok(cells.into_iter().flatten().collect())
}

fn defines_script(cell: &CellInfo, script: &Script) -> bool {
    let code_hash = script.code_hash();
    if script.hash_type() == ScriptHashType::Type.into() {
        match cell.output.type_().to_opt() {
            Some(type_) => type_.hash() == code_hash.as_slice(),
            None => false,
        }
    } else {
        ckb_hash::blake2b_256(&cell.data) == code_hash.as_slice()
    }
}

/// The cell dep of the transaction which created `cell` that provides
/// the code of `type_script`.
pub async fn resolve_type_dep(
    client: &dyn L1Client,
    cell: &CellInfo,
    type_script: &Script,
) -> Result<CellDep> {
    let tx_hash: H256 = cell.out_point.tx_hash().unpack();
    let tx = client
        .get_transaction(&tx_hash)
        .await?
        .ok_or_else(|| anyhow!("can't find deposition tx {}", tx_hash))?;
    for dep in tx.cell_deps().into_iter() {
        let dep_cells = resolve_dep_cells(client, &dep).await?;
        if dep_cells
            .iter()
            .any(|dep_cell| defines_script(dep_cell, type_script))
        {
            return Ok(dep);
        }
    }
    Err(BlockProducerError::TypeDepNotFound {
        out_point: cell.out_point.clone(),
        code_hash: type_script.code_hash().unpack(),
    }
    .into())
}

pub struct BlockProducer {
    client: Arc<dyn L1Client>,
    chain_service: Arc<dyn ChainService>,
    aggregator: Arc<dyn AggregatorLock>,
    scanner: DepositionScanner,
    withdrawal_processor: WithdrawalProcessor,
    signer: TransactionSigner,
    deployment: DeploymentConfig,
    rollup_context: RollupContext,
    config: BlockProducerConfig,
}

impl BlockProducer {
    pub fn new(
        client: Arc<dyn L1Client>,
        chain_service: Arc<dyn ChainService>,
        aggregator: Arc<dyn AggregatorLock>,
        signer: TransactionSigner,
        deployment: DeploymentConfig,
        rollup_context: RollupContext,
        config: BlockProducerConfig,
    ) -> Self {
        let scanner = DepositionScanner::new(&deployment, &rollup_context);
        let withdrawal_processor =
            WithdrawalProcessor::new(deployment.clone(), rollup_context.clone());
        BlockProducer {
            client,
            chain_service,
            aggregator,
            scanner,
            withdrawal_processor,
            signer,
            deployment,
            rollup_context,
            config,
        }
    }

    /// One production cycle, `median_time` is in milliseconds.
    #[instrument(skip_all, fields(median_time = median_time))]
    pub async fn produce_next_block(
        &self,
        sync: &mut SyncEngine,
        median_time: u64,
    ) -> Result<CycleOutcome> {
        sync.sync_to_tip().await?;

        let client = self.client.as_ref();
        let rollup_type_script = &self.rollup_context.rollup_type_script;
        let rollup_cell = query_rollup_cell(client, rollup_type_script).await?;
        if !self
            .aggregator
            .should_issue_block(median_time, &rollup_cell)
            .await?
        {
            log::debug!("not our turn to issue a block");
            return Ok(CycleOutcome::NotEligible);
        }

        let tip = client.get_tip_header().await?;
        let deposits = self
            .scanner
            .query_valid_deposits(
                client,
                &tip,
                self.config.max_deposits_per_block,
                self.config.min_deposit_capacity,
            )
            .await?;
        log::info!("produce block with {} deposits", deposits.len());

        let param = ProduceBlockParam {
            aggregator_id: DEFAULT_AGGREGATOR_ID,
            deposition_requests: deposits.iter().map(|d| d.request.clone()).collect(),
        };
        let ProduceBlockResult {
            block,
            global_state,
        } = self.chain_service.produce_block(param).await?;
        log::info!(
            "produced block #{} with {} withdrawals",
            block.number(),
            block.withdrawal_requests().len()
        );

        let rollup_cell = query_rollup_cell(client, rollup_type_script).await?;
        let tx_skeleton = self
            .complete_tx_skeleton(rollup_cell, &block, global_state, &deposits)
            .await?;
        let mut tx_skeleton = self
            .aggregator
            .fix_skeleton(median_time, tx_skeleton)
            .await?;
        self.withdrawal_processor
            .process(client, &block, &mut tx_skeleton)
            .await?;

        self.signer.sign_and_submit(tx_skeleton).await
    }

    async fn complete_tx_skeleton(
        &self,
        rollup_cell: CellInfo,
        block: &L2Block,
        global_state: Bytes,
        deposits: &[DepositionEntry],
    ) -> Result<TransactionSkeleton> {
        let mut tx_skeleton = TransactionSkeleton::default();
        // rollup deps
        tx_skeleton.add_cell_dep(self.deployment.state_validator_lock_dep.clone().into());
        tx_skeleton.add_cell_dep(self.deployment.state_validator_type_dep.clone().into());
        // deposit lock dep
        if !deposits.is_empty() {
            tx_skeleton.add_cell_dep(self.deployment.deposition_lock_dep.clone().into());
        }

        // rollup cell
        let output = rollup_cell.output.clone();
        tx_skeleton.inputs_mut().push(InputCellInfo::new(rollup_cell));
        tx_skeleton.witnesses_mut().push(
            WitnessArgs::new_builder()
                .output_type(Some(block.as_bytes()).pack())
                .build()
                .as_bytes(),
        );
        tx_skeleton.outputs_mut().push((output, global_state));

        // deposit cells
        for deposit in deposits {
            tx_skeleton
                .inputs_mut()
                .push(InputCellInfo::new(deposit.cell.clone()));
            tx_skeleton.witnesses_mut().push(Bytes::new());
        }

        // custodian cells
        let custodian_cells =
            generate_custodian_cells(&self.deployment, &self.rollup_context, block, deposits);
        tx_skeleton.outputs_mut().extend(custodian_cells);

        // sudt deposits need the dep defining their type script
        for deposit in deposits {
            if let Some(type_) = deposit.cell.output.type_().to_opt() {
                let dep = resolve_type_dep(self.client.as_ref(), &deposit.cell, &type_).await?;
                tx_skeleton.add_cell_dep(dep);
            }
        }

        Ok(tx_skeleton)
    }
}
