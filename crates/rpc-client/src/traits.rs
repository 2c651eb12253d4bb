use crate::indexer_types::{Cell, IndexerTip, Order, Pagination, SearchKey};

use anyhow::Result;
use async_trait::async_trait;
use ckb_fixed_hash::H256;
use ckb_jsonrpc_types::JsonBytes;
use gw_types::{
    core::{BlockView, HeaderView, TransactionView},
    offchain::CellInfo,
    packed::{OutPoint, Transaction},
};

/// Queries and submission against the base chain and its indexer.
#[async_trait]
pub trait L1Client: Send + Sync {
    async fn get_tip_header(&self) -> Result<HeaderView>;

    async fn get_header(&self, block_hash: &H256) -> Result<Option<HeaderView>>;

    async fn get_header_by_number(&self, number: u64) -> Result<Option<HeaderView>>;

    async fn get_block_by_number(&self, number: u64) -> Result<Option<BlockView>>;

    /// Milliseconds.
    async fn get_block_median_time(&self, block_hash: &H256) -> Result<Option<u64>>;

    async fn get_transaction(&self, tx_hash: &H256) -> Result<Option<TransactionView>>;

    async fn get_live_cell(&self, out_point: &OutPoint, with_data: bool)
        -> Result<Option<CellInfo>>;

    async fn get_cells(
        &self,
        search_key: &SearchKey,
        order: &Order,
        limit: u32,
        cursor: Option<JsonBytes>,
    ) -> Result<Pagination<Cell>>;

    async fn get_indexer_tip(&self) -> Result<Option<IndexerTip>>;

    async fn send_transaction(&self, tx: Transaction) -> Result<H256>;
}
