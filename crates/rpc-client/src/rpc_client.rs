use crate::{
    ckb_client::CKBClient,
    indexer_client::CKBIndexerClient,
    indexer_types::{Cell, IndexerTip, Order, Pagination, SearchKey},
    traits::L1Client,
};
use anyhow::Result;
use async_trait::async_trait;
use ckb_fixed_hash::H256;
use ckb_jsonrpc_types::JsonBytes;
use gw_types::{
    core::{BlockView, HeaderView, TransactionView},
    offchain::CellInfo,
    packed::{OutPoint, Transaction},
};

/// Base-chain client backed by a CKB node and a ckb-indexer.
#[derive(Clone)]
pub struct RPCClient {
    pub ckb: CKBClient,
    pub indexer: CKBIndexerClient,
}

impl RPCClient {
    pub fn new(ckb: CKBClient, indexer: CKBIndexerClient) -> Self {
        RPCClient { ckb, indexer }
    }

    pub fn with_urls(ckb_url: &str, indexer_url: &str) -> Result<Self> {
        Ok(Self::new(
            CKBClient::with_url(ckb_url)?,
            CKBIndexerClient::with_url(indexer_url)?,
        ))
    }
}

#[async_trait]
impl L1Client for RPCClient {
    async fn get_tip_header(&self) -> Result<HeaderView> {
        self.ckb.get_tip_header().await
    }

    async fn get_header(&self, block_hash: &H256) -> Result<Option<HeaderView>> {
        self.ckb.get_header(block_hash).await
    }

    async fn get_header_by_number(&self, number: u64) -> Result<Option<HeaderView>> {
        self.ckb.get_header_by_number(number).await
    }

    async fn get_block_by_number(&self, number: u64) -> Result<Option<BlockView>> {
        self.ckb.get_block_by_number(number).await
    }

    async fn get_block_median_time(&self, block_hash: &H256) -> Result<Option<u64>> {
        self.ckb.get_block_median_time(block_hash).await
    }

    async fn get_transaction(&self, tx_hash: &H256) -> Result<Option<TransactionView>> {
        self.ckb.get_transaction(tx_hash).await
    }

    async fn get_live_cell(
        &self,
        out_point: &OutPoint,
        with_data: bool,
    ) -> Result<Option<CellInfo>> {
        self.ckb.get_live_cell(out_point, with_data).await
    }

    async fn get_cells(
        &self,
        search_key: &SearchKey,
        order: &Order,
        limit: u32,
        cursor: Option<JsonBytes>,
    ) -> Result<Pagination<Cell>> {
        self.indexer
            .get_cells(search_key, order, limit, cursor)
            .await
    }

    async fn get_indexer_tip(&self) -> Result<Option<IndexerTip>> {
        self.indexer.get_tip().await
    }

    async fn send_transaction(&self, tx: Transaction) -> Result<H256> {
        self.ckb.send_transaction(tx).await
    }
}
