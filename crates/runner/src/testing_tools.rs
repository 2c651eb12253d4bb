//! Fixtures and in-memory doubles of the base chain, the chain service
//! and the aggregator lock.

use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicU32, AtomicUsize, Ordering},
        Mutex,
    },
};

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use ckb_crypto::secp::Privkey;
use ckb_fixed_hash::H256;
use ckb_jsonrpc_types::{
    BlockNumber, CellDep as JsonCellDep, DepType, JsonBytes, OutPoint as JsonOutPoint,
    ScriptHashType,
};
use gw_config::{DeploymentConfig, ScriptTemplate};
use gw_rpc_client::{
    indexer_types::{Cell, IndexerTip, Order, Pagination, ScriptType, SearchKey},
    traits::L1Client,
};
use gw_types::{
    bytes::Bytes,
    core::{BlockBuilder, BlockView, HeaderView, TransactionBuilder, TransactionView},
    godwoken::{
        pack_lock_args, CustodianLockArgs, DepositionLockArgs, HeaderInfo, L2Block,
        RawL2Block, RawWithdrawalRequest, WithdrawalRequest,
    },
    offchain::{CellInfo, RollupContext},
    packed::{CellInput, CellOutput, OutPoint, Script, Transaction},
    prelude::*,
};
use gw_utils::{transaction_skeleton::TransactionSkeleton, wallet::Wallet};

use crate::{
    custodian::custodian_lock,
    deposition::DepositionScanner,
    traits::{AggregatorLock, ChainService},
    types::{DepositionEntry, ProduceBlockParam, ProduceBlockResult, SyncParam},
};

pub const CKB: u64 = 100_000_000;

/// Relative since of 1000 blocks.
pub const CANCEL_TIMEOUT: u64 = (1 << 63) | 1000;

static OUT_POINT_COUNTER: AtomicU32 = AtomicU32::new(1);

/// A fresh out point, never returned twice within a test binary.
pub fn next_out_point() -> OutPoint {
    let n = OUT_POINT_COUNTER.fetch_add(1, Ordering::SeqCst);
    let mut tx_hash = [0xeeu8; 32];
    tx_hash[..4].copy_from_slice(&n.to_le_bytes());
    OutPoint::new_builder()
        .tx_hash(tx_hash.pack())
        .index(0u32.pack())
        .build()
}

fn template(n: u8) -> ScriptTemplate {
    ScriptTemplate {
        code_hash: H256([n; 32]),
        hash_type: ScriptHashType::Type,
    }
}

fn cell_dep(n: u8, dep_type: DepType) -> JsonCellDep {
    JsonCellDep {
        out_point: JsonOutPoint {
            tx_hash: H256([n; 32]),
            index: 0u32.into(),
        },
        dep_type,
    }
}

pub struct Fixture {
    pub deployment: DeploymentConfig,
    pub rollup_context: RollupContext,
}

impl Fixture {
    pub fn new() -> Self {
        let deployment = DeploymentConfig {
            deposition_lock: template(0x02),
            custodian_lock: template(0x03),
            withdrawal_lock: template(0x04),
            sudt_type: template(0x05),
            state_validator_lock_dep: cell_dep(0x06, DepType::Code),
            state_validator_type_dep: cell_dep(0x07, DepType::Code),
            deposition_lock_dep: cell_dep(0x08, DepType::Code),
            custodian_lock_dep: cell_dep(0x09, DepType::Code),
            sudt_type_dep: cell_dep(0x0a, DepType::DepGroup),
        };
        let rollup_type_script = template(0x01).to_script(Bytes::from(vec![0x01u8; 32]));
        Fixture {
            deployment,
            rollup_context: RollupContext::new(rollup_type_script),
        }
    }

    pub fn scanner(&self) -> DepositionScanner {
        DepositionScanner::new(&self.deployment, &self.rollup_context)
    }

    pub fn sudt_script(&self, args: [u8; 32]) -> Script {
        self.deployment
            .sudt_type
            .to_script(Bytes::copy_from_slice(&args))
    }

    pub fn deposition_lock(&self, lock_args: &DepositionLockArgs) -> Script {
        let args = pack_lock_args(&self.rollup_context.rollup_type_hash, lock_args);
        self.deployment.deposition_lock.to_script(args)
    }

    pub fn rollup_output(&self, capacity: u64) -> CellOutput {
        CellOutput::new_builder()
            .capacity(capacity.pack())
            .lock(Script::default())
            .type_(Some(self.rollup_context.rollup_type_script.clone()).pack())
            .build()
    }
}

pub fn layer2_lock() -> Script {
    Script::new_builder()
        .code_hash([0x0bu8; 32].pack())
        .args(Bytes::from(vec![0x0cu8; 20]).pack())
        .build()
}

pub fn deposition_lock_args(cancel_timeout: u64) -> DepositionLockArgs {
    DepositionLockArgs {
        owner_lock_hash: [0x0du8; 32],
        layer2_lock: layer2_lock(),
        cancel_timeout,
    }
}

/// Output and data of a deposition cell, `sudt` is the token type and amount.
pub fn deposit_output(
    fixture: &Fixture,
    capacity: u64,
    sudt: Option<(Script, u128)>,
    cancel_timeout: u64,
) -> (CellOutput, Bytes) {
    let lock = fixture.deposition_lock(&deposition_lock_args(cancel_timeout));
    let (type_, data) = match sudt {
        Some((type_, amount)) => (Some(type_), Bytes::copy_from_slice(&amount.to_le_bytes())),
        None => (None, Bytes::new()),
    };
    let output = CellOutput::new_builder()
        .capacity(capacity.pack())
        .lock(lock)
        .type_(type_.pack())
        .build();
    (output, data)
}

pub fn deposit_cell(
    fixture: &Fixture,
    capacity: u64,
    sudt: Option<(Script, u128)>,
    cancel_timeout: u64,
) -> CellInfo {
    let (output, data) = deposit_output(fixture, capacity, sudt, cancel_timeout);
    CellInfo {
        out_point: next_out_point(),
        output,
        data,
    }
}

pub fn deposit_entry(
    fixture: &Fixture,
    capacity: u64,
    sudt: Option<(Script, u128)>,
) -> DepositionEntry {
    let cell = deposit_cell(fixture, capacity, sudt, CANCEL_TIMEOUT);
    fixture
        .scanner()
        .try_extract(&cell, None)
        .unwrap()
        .unwrap()
}

pub fn custodian_lock_args() -> CustodianLockArgs {
    CustodianLockArgs {
        deposition_lock_args: deposition_lock_args(CANCEL_TIMEOUT),
        deposition_block_hash: [0x44u8; 32],
        deposition_block_number: 7,
    }
}

pub fn custodian_output(
    fixture: &Fixture,
    capacity: u64,
    sudt: Option<([u8; 32], u128)>,
) -> (CellOutput, Bytes) {
    let lock = custodian_lock(
        &fixture.deployment,
        &fixture.rollup_context,
        &custodian_lock_args(),
    );
    let (type_, data) = match sudt {
        Some((args, amount)) => (
            Some(fixture.sudt_script(args)),
            Bytes::copy_from_slice(&amount.to_le_bytes()),
        ),
        None => (None, Bytes::new()),
    };
    let output = CellOutput::new_builder()
        .capacity(capacity.pack())
        .lock(lock)
        .type_(type_.pack())
        .build();
    (output, data)
}

pub fn custodian_cell(
    fixture: &Fixture,
    capacity: u64,
    sudt: Option<([u8; 32], u128)>,
) -> CellInfo {
    let (output, data) = custodian_output(fixture, capacity, sudt);
    CellInfo {
        out_point: next_out_point(),
        output,
        data,
    }
}

pub fn withdrawal_request(capacity: u64, sudt: Option<([u8; 32], u128)>) -> WithdrawalRequest {
    let (sudt_script_hash, amount) = sudt.unwrap_or_default();
    WithdrawalRequest {
        raw: RawWithdrawalRequest {
            nonce: 1,
            capacity,
            amount,
            sudt_script_hash,
            account_script_hash: [0x0eu8; 32],
            sell_amount: 0,
            sell_capacity: 0,
            owner_lock_hash: [0x0fu8; 32],
            payment_lock_hash: [0x10u8; 32],
        },
        signature: [0u8; 65],
    }
}

pub fn block_with_withdrawals(number: u64, withdrawals: Vec<WithdrawalRequest>) -> L2Block {
    L2Block::new(
        RawL2Block {
            number,
            aggregator_id: 0,
            timestamp: 1_600_000_000,
        },
        withdrawals,
    )
}

pub fn test_wallet() -> Wallet {
    let privkey = Privkey::from_slice(&[7u8; 32]);
    Wallet::try_from(privkey).unwrap()
}

/// A transaction creating `outputs`, its input spends a fresh out point so
/// every call yields a distinct hash.
pub fn build_tx(inputs: Vec<OutPoint>, outputs: Vec<(CellOutput, Bytes)>) -> TransactionView {
    let inputs = if inputs.is_empty() {
        vec![next_out_point()]
    } else {
        inputs
    };
    let mut builder = TransactionBuilder::default();
    for out_point in inputs {
        builder = builder.input(CellInput::new(out_point, 0));
    }
    for (output, data) in outputs {
        builder = builder.output(output).output_data(data.pack());
    }
    builder.build()
}

#[derive(Default)]
struct MockL1State {
    blocks: Vec<BlockView>,
    transactions: HashMap<H256, TransactionView>,
    /// Live cells with the number of the block that created them.
    live_cells: Vec<(CellInfo, u64)>,
    median_time: u64,
    indexer_tip: Option<u64>,
    sent: Vec<Transaction>,
    fail_send: bool,
}

/// A base chain node and indexer kept in memory. Committed blocks spend
/// their inputs and create their outputs.
pub struct MockL1 {
    state: Mutex<MockL1State>,
}

impl Default for MockL1 {
    fn default() -> Self {
        let l1 = MockL1 {
            state: Mutex::new(MockL1State::default()),
        };
        l1.push_block(vec![]);
        l1
    }
}

impl MockL1 {
    pub fn push_empty_block(&self) -> BlockView {
        self.push_block(vec![])
    }

    pub fn push_block(&self, txs: Vec<TransactionView>) -> BlockView {
        let mut state = self.state.lock().unwrap();
        let number = state.blocks.len() as u64;
        let mut builder = BlockBuilder::default()
            .number(number.pack())
            .timestamp((number * 1000).pack());
        if let Some(parent) = state.blocks.last() {
            builder = builder.parent_hash(parent.hash());
        }
        let block = builder.transactions(txs.clone()).build();

        for tx in txs {
            for input in tx.inputs().into_iter() {
                let out_point = input.previous_output();
                state
                    .live_cells
                    .retain(|(cell, _)| cell.out_point.as_slice() != out_point.as_slice());
            }
            for (index, (output, data)) in tx.outputs_with_data_iter().enumerate() {
                let out_point = OutPoint::new_builder()
                    .tx_hash(tx.hash())
                    .index((index as u32).pack())
                    .build();
                state
                    .live_cells
                    .push((CellInfo { out_point, output, data }, number));
            }
            state.transactions.insert(tx.hash().unpack(), tx);
        }
        state.blocks.push(block.clone());
        block
    }

    /// Commit a block with one transaction creating `outputs`.
    pub fn commit_cells(&self, outputs: Vec<(CellOutput, Bytes)>) -> Vec<CellInfo> {
        let tx = build_tx(vec![], outputs);
        self.push_block(vec![tx.clone()]);
        let state = self.state.lock().unwrap();
        state
            .live_cells
            .iter()
            .filter(|(cell, _)| cell.out_point.tx_hash().as_slice() == tx.hash().as_slice())
            .map(|(cell, _)| cell.clone())
            .collect()
    }

    /// Register a transaction without committing it in a block.
    pub fn insert_transaction(&self, tx: TransactionView) {
        let mut state = self.state.lock().unwrap();
        state.transactions.insert(tx.hash().unpack(), tx);
    }

    /// Make `cell` live without a creating transaction.
    pub fn insert_live_cell(&self, cell: CellInfo, block_number: u64) {
        self.state.lock().unwrap().live_cells.push((cell, block_number));
    }

    pub fn set_median_time(&self, median_time: u64) {
        self.state.lock().unwrap().median_time = median_time;
    }

    pub fn set_indexer_tip(&self, number: u64) {
        self.state.lock().unwrap().indexer_tip = Some(number);
    }

    pub fn set_fail_send(&self, fail_send: bool) {
        self.state.lock().unwrap().fail_send = fail_send;
    }

    pub fn sent_transactions(&self) -> Vec<Transaction> {
        self.state.lock().unwrap().sent.clone()
    }

    pub fn tip_number(&self) -> u64 {
        self.state.lock().unwrap().blocks.len() as u64 - 1
    }
}

fn matches_prefix(script: &Script, prefix: &Script) -> bool {
    script.code_hash().as_slice() == prefix.code_hash().as_slice()
        && script.hash_type().as_slice() == prefix.hash_type().as_slice()
        && script
            .args()
            .raw_data()
            .starts_with(&prefix.args().raw_data())
}

#[async_trait]
impl L1Client for MockL1 {
    async fn get_tip_header(&self) -> Result<HeaderView> {
        let state = self.state.lock().unwrap();
        let tip = state.blocks.last().ok_or_else(|| anyhow!("empty chain"))?;
        Ok(tip.header())
    }

    async fn get_header(&self, block_hash: &H256) -> Result<Option<HeaderView>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .blocks
            .iter()
            .find(|block| block.hash().as_slice() == block_hash.as_bytes())
            .map(|block| block.header()))
    }

    async fn get_header_by_number(&self, number: u64) -> Result<Option<HeaderView>> {
        let state = self.state.lock().unwrap();
        Ok(state.blocks.get(number as usize).map(|block| block.header()))
    }

    async fn get_block_by_number(&self, number: u64) -> Result<Option<BlockView>> {
        let state = self.state.lock().unwrap();
        Ok(state.blocks.get(number as usize).cloned())
    }

    async fn get_block_median_time(&self, _block_hash: &H256) -> Result<Option<u64>> {
        Ok(Some(self.state.lock().unwrap().median_time))
    }

    async fn get_transaction(&self, tx_hash: &H256) -> Result<Option<TransactionView>> {
        Ok(self.state.lock().unwrap().transactions.get(tx_hash).cloned())
    }

    async fn get_live_cell(
        &self,
        out_point: &OutPoint,
        _with_data: bool,
    ) -> Result<Option<CellInfo>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .live_cells
            .iter()
            .find(|(cell, _)| cell.out_point.as_slice() == out_point.as_slice())
            .map(|(cell, _)| cell.clone()))
    }

    async fn get_cells(
        &self,
        search_key: &SearchKey,
        order: &Order,
        limit: u32,
        cursor: Option<JsonBytes>,
    ) -> Result<Pagination<Cell>> {
        let prefix: Script = search_key.script.clone().into();
        let block_range = search_key
            .filter
            .as_ref()
            .and_then(|filter| filter.block_range.clone())
            .map(|[start, end]| (u64::from(start), u64::from(end)));

        let state = self.state.lock().unwrap();
        let mut cells: Vec<Cell> = state
            .live_cells
            .iter()
            .filter(|(cell, number)| {
                let script = match search_key.script_type {
                    ScriptType::Lock => Some(cell.output.lock()),
                    ScriptType::Type => cell.output.type_().to_opt(),
                };
                let in_range = match block_range {
                    Some((start, end)) => *number >= start && *number < end,
                    None => true,
                };
                in_range && script.map_or(false, |script| matches_prefix(&script, &prefix))
            })
            .map(|(cell, number)| Cell {
                output: cell.output.clone().into(),
                output_data: JsonBytes::from_bytes(cell.data.clone()),
                out_point: cell.out_point.clone().into(),
                block_number: BlockNumber::from(*number),
                tx_index: 0u32.into(),
            })
            .collect();
        if *order == Order::Desc {
            cells.reverse();
        }

        let start = match cursor {
            Some(cursor) => {
                let mut buf = [0u8; 4];
                buf.copy_from_slice(&cursor.as_bytes()[..4]);
                u32::from_le_bytes(buf) as usize
            }
            None => 0,
        };
        let start = start.min(cells.len());
        let end = (start + limit as usize).min(cells.len());
        Ok(Pagination {
            objects: cells[start..end].to_vec(),
            last_cursor: JsonBytes::from_vec((end as u32).to_le_bytes().to_vec()),
        })
    }

    async fn get_indexer_tip(&self) -> Result<Option<IndexerTip>> {
        let state = self.state.lock().unwrap();
        let tip = state.blocks.last().ok_or_else(|| anyhow!("empty chain"))?;
        let block_number = state.indexer_tip.unwrap_or_else(|| tip.number());
        Ok(Some(IndexerTip {
            block_hash: tip.hash().unpack(),
            block_number: block_number.into(),
        }))
    }

    async fn send_transaction(&self, tx: Transaction) -> Result<H256> {
        let mut state = self.state.lock().unwrap();
        if state.fail_send {
            return Err(anyhow!("transaction rejected"));
        }
        let tx_hash: H256 = tx.calc_tx_hash().unpack();
        state.sent.push(tx);
        Ok(tx_hash)
    }
}

/// Records sync calls and answers block production with a fixed block.
pub struct MockChainService {
    pub last_synced: Mutex<HeaderInfo>,
    pub synced: Mutex<Vec<SyncParam>>,
    pub produce_params: Mutex<Vec<ProduceBlockParam>>,
    pub block: Mutex<L2Block>,
    pub global_state: Bytes,
}

impl Default for MockChainService {
    fn default() -> Self {
        MockChainService {
            last_synced: Mutex::new(HeaderInfo::default()),
            synced: Mutex::new(Vec::new()),
            produce_params: Mutex::new(Vec::new()),
            block: Mutex::new(block_with_withdrawals(1, vec![])),
            global_state: Bytes::from(vec![0xaau8; 8]),
        }
    }
}

impl MockChainService {
    pub fn with_block(block: L2Block) -> Self {
        MockChainService {
            block: Mutex::new(block),
            ..Default::default()
        }
    }
}

#[async_trait]
impl ChainService for MockChainService {
    async fn last_synced(&self) -> Result<HeaderInfo> {
        Ok(*self.last_synced.lock().unwrap())
    }

    async fn sync(&self, param: SyncParam) -> Result<()> {
        if let Some(update) = param.updates.last() {
            *self.last_synced.lock().unwrap() = update.header_info;
        }
        self.synced.lock().unwrap().push(param);
        Ok(())
    }

    async fn produce_block(&self, param: ProduceBlockParam) -> Result<ProduceBlockResult> {
        self.produce_params.lock().unwrap().push(param);
        Ok(ProduceBlockResult {
            block: self.block.lock().unwrap().clone(),
            global_state: self.global_state.clone(),
        })
    }
}

#[derive(Default)]
pub struct MockAggregator {
    pub refuse: bool,
    pub cancelled: AtomicUsize,
}

#[async_trait]
impl AggregatorLock for MockAggregator {
    async fn should_issue_block(&self, _median_time: u64, _rollup_cell: &CellInfo) -> Result<bool> {
        Ok(!self.refuse)
    }

    async fn fix_skeleton(
        &self,
        _median_time: u64,
        tx_skeleton: TransactionSkeleton,
    ) -> Result<TransactionSkeleton> {
        Ok(tx_skeleton)
    }

    async fn cancel_issuance(&self) -> Result<()> {
        self.cancelled.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
