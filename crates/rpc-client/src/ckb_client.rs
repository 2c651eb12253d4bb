use crate::{
    error::RPCRequestError,
    utils::{to_result, DEFAULT_HTTP_TIMEOUT},
};
use anyhow::Result;
use async_jsonrpc_client::{HttpClient, Params as ClientParams, Transport};
use ckb_fixed_hash::H256;
use ckb_jsonrpc_types::{BlockNumber, CellWithStatus, TransactionWithStatus, Uint64};
use gw_types::{
    core::{BlockView, HeaderView, TransactionView},
    offchain::CellInfo,
    packed::{OutPoint, Transaction},
    prelude::*,
};
use serde::de::DeserializeOwned;
use serde_json::json;
use tracing::instrument;

#[derive(Clone)]
pub struct CKBClient(HttpClient);

impl CKBClient {
    pub fn new(ckb_client: HttpClient) -> Self {
        Self(ckb_client)
    }

    pub fn with_url(url: &str) -> Result<Self> {
        let client = HttpClient::builder()
            .timeout(DEFAULT_HTTP_TIMEOUT)
            .build(url)?;
        Ok(Self::new(client))
    }

    fn client(&self) -> &HttpClient {
        &self.0
    }

    #[instrument(skip_all, fields(method = method))]
    pub async fn request<T: DeserializeOwned>(
        &self,
        method: &str,
        params: Option<ClientParams>,
    ) -> Result<T> {
        let response = self
            .client()
            .request(method, params)
            .await
            .map_err(|err| RPCRequestError::new("ckb client", method.to_string(), err))?;
        let response_str = response.to_string();
        match to_result::<T>(response) {
            Ok(r) => Ok(r),
            Err(err) => {
                log::error!(
                    "[ckb-client] Failed to parse response, method: {}, response: {}",
                    method,
                    response_str
                );
                Err(err)
            }
        }
    }

    pub async fn get_tip_header(&self) -> Result<HeaderView> {
        let header: ckb_jsonrpc_types::HeaderView = self.request("get_tip_header", None).await?;
        Ok(header.into())
    }

    pub async fn get_header(&self, block_hash: &H256) -> Result<Option<HeaderView>> {
        let header: Option<ckb_jsonrpc_types::HeaderView> = self
            .request(
                "get_header",
                Some(ClientParams::Array(vec![json!(block_hash)])),
            )
            .await?;
        Ok(header.map(Into::into))
    }

    pub async fn get_header_by_number(&self, number: u64) -> Result<Option<HeaderView>> {
        let header: Option<ckb_jsonrpc_types::HeaderView> = self
            .request(
                "get_header_by_number",
                Some(ClientParams::Array(vec![json!(BlockNumber::from(number))])),
            )
            .await?;
        Ok(header.map(Into::into))
    }

    pub async fn get_block_by_number(&self, number: u64) -> Result<Option<BlockView>> {
        let block: Option<ckb_jsonrpc_types::BlockView> = self
            .request(
                "get_block_by_number",
                Some(ClientParams::Array(vec![json!(BlockNumber::from(number))])),
            )
            .await?;
        Ok(block.map(Into::into))
    }

    /// Median time of the block's ancestors, in milliseconds.
    pub async fn get_block_median_time(&self, block_hash: &H256) -> Result<Option<u64>> {
        let median_time: Option<Uint64> = self
            .request(
                "get_block_median_time",
                Some(ClientParams::Array(vec![json!(block_hash)])),
            )
            .await?;
        Ok(median_time.map(Into::into))
    }

    pub async fn get_transaction(&self, tx_hash: &H256) -> Result<Option<TransactionView>> {
        let tx_with_status: Option<TransactionWithStatus> = self
            .request(
                "get_transaction",
                Some(ClientParams::Array(vec![json!(tx_hash)])),
            )
            .await?;
        Ok(tx_with_status.map(|tx_with_status| {
            let tx: Transaction = tx_with_status.transaction.inner.into();
            tx.into_view()
        }))
    }

    /// Live cell at `out_point`, `None` when it is dead or unknown.
    pub async fn get_live_cell(
        &self,
        out_point: &OutPoint,
        with_data: bool,
    ) -> Result<Option<CellInfo>> {
        let json_out_point: ckb_jsonrpc_types::OutPoint = out_point.to_owned().into();
        let cell_with_status: CellWithStatus = self
            .request(
                "get_live_cell",
                Some(ClientParams::Array(vec![
                    json!(json_out_point),
                    json!(with_data),
                ])),
            )
            .await?;
        if cell_with_status.status != "live" {
            return Ok(None);
        }
        Ok(cell_with_status.cell.map(|cell| CellInfo {
            out_point: out_point.to_owned(),
            output: cell.output.into(),
            data: cell
                .data
                .map(|cell_data| cell_data.content.into_bytes())
                .unwrap_or_default(),
        }))
    }

    pub async fn send_transaction(&self, tx: Transaction) -> Result<H256> {
        let tx: ckb_jsonrpc_types::Transaction = tx.into();
        self.request(
            "send_transaction",
            Some(ClientParams::Array(vec![json!(tx), json!("passthrough")])),
        )
        .await
    }
}
