use crate::error::RPCRequestError;
use crate::indexer_types::{Cell, IndexerTip, Order, Pagination, SearchKey};
use crate::utils::{to_result, DEFAULT_HTTP_TIMEOUT};
use anyhow::{Context, Result};
use async_jsonrpc_client::{HttpClient, Params as ClientParams, Transport};
use ckb_jsonrpc_types::{JsonBytes, Uint32};
use serde::de::DeserializeOwned;
use serde_json::json;
use tracing::instrument;

#[derive(Clone)]
pub struct CKBIndexerClient(HttpClient);

impl CKBIndexerClient {
    pub fn new(ckb_indexer_client: HttpClient) -> Self {
        Self(ckb_indexer_client)
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
        let response =
            self.client().request(method, params).await.map_err(|err| {
                RPCRequestError::new("ckb indexer client", method.to_string(), err)
            })?;
        log::trace!("indexer {} response: {}", method, response);
        to_result(response).with_context(|| format!("indexer {} response", method))
    }

    /// One page of live cells matching `search_key`, resumed from `cursor`.
    pub async fn get_cells(
        &self,
        search_key: &SearchKey,
        order: &Order,
        limit: u32,
        cursor: Option<JsonBytes>,
    ) -> Result<Pagination<Cell>> {
        self.request(
            "get_cells",
            Some(ClientParams::Array(vec![
                json!(search_key),
                json!(order),
                json!(Uint32::from(limit)),
                json!(cursor),
            ])),
        )
        .await
    }

    /// Last block the indexer has processed, `None` before the first one.
    pub async fn get_tip(&self) -> Result<Option<IndexerTip>> {
        self.request("get_tip", None).await
    }
}
