//! JSON-RPC client of the external rollup state machine.

use anyhow::{Context, Result};
use async_jsonrpc_client::{HttpClient, Params as ClientParams, Transport};
use async_trait::async_trait;
use ckb_jsonrpc_types::{JsonBytes, Script, Transaction, Uint128, Uint32, Uint64};
use gw_rpc_client::{
    error::RPCRequestError,
    utils::{to_result, DEFAULT_HTTP_TIMEOUT},
};
use gw_types::godwoken::{DepositionRequest, HeaderInfo, L2Block, RollupEntity};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::json;
use tracing::instrument;

use crate::{
    traits::ChainService,
    types::{
        L1Action, L1ActionContext, NextBlockContext, ProduceBlockParam, ProduceBlockResult,
        SyncParam,
    },
};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonHeaderInfo {
    pub number: String,
    pub block_hash: String,
}

impl From<&HeaderInfo> for JsonHeaderInfo {
    fn from(info: &HeaderInfo) -> Self {
        JsonHeaderInfo {
            number: format!("{:#x}", info.number),
            block_hash: format!("0x{}", hex::encode(info.block_hash)),
        }
    }
}

impl TryFrom<JsonHeaderInfo> for HeaderInfo {
    type Error = gw_types::CodecError;

    fn try_from(json: JsonHeaderInfo) -> Result<Self, Self::Error> {
        HeaderInfo::from_hex(&json.number, &json.block_hash)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonDepositionRequest {
    pub layer2_lock: Script,
    pub sudt_script: Script,
    pub amount: Uint128,
}

impl From<&DepositionRequest> for JsonDepositionRequest {
    fn from(request: &DepositionRequest) -> Self {
        JsonDepositionRequest {
            layer2_lock: request.layer2_lock.clone().into(),
            sudt_script: request.sudt_script.clone().into(),
            amount: request.amount.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum JsonL1ActionContext {
    SubmitTxs {
        deposition_requests: Vec<JsonDepositionRequest>,
    },
    Revert {
        challenge_target: JsonBytes,
    },
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonL1Action {
    pub transaction: Transaction,
    pub header_info: JsonHeaderInfo,
    pub context: JsonL1ActionContext,
}

impl From<&L1Action> for JsonL1Action {
    fn from(action: &L1Action) -> Self {
        let context = match &action.context {
            L1ActionContext::SubmitTxs {
                deposition_requests,
            } => JsonL1ActionContext::SubmitTxs {
                deposition_requests: deposition_requests.iter().map(Into::into).collect(),
            },
            L1ActionContext::Revert { challenge_target } => JsonL1ActionContext::Revert {
                challenge_target: JsonBytes::from_bytes(challenge_target.clone()),
            },
        };
        JsonL1Action {
            transaction: action.transaction.clone().into(),
            header_info: (&action.header_info).into(),
            context,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonNextBlockContext {
    pub aggregator_id: Uint32,
    pub timestamp: Uint64,
}

impl From<&NextBlockContext> for JsonNextBlockContext {
    fn from(context: &NextBlockContext) -> Self {
        JsonNextBlockContext {
            aggregator_id: context.aggregator_id.into(),
            timestamp: context.timestamp.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonSyncParam {
    pub reverts: Vec<JsonL1Action>,
    pub updates: Vec<JsonL1Action>,
    pub next_block_context: JsonNextBlockContext,
}

impl From<&SyncParam> for JsonSyncParam {
    fn from(param: &SyncParam) -> Self {
        JsonSyncParam {
            reverts: param.reverts.iter().map(Into::into).collect(),
            updates: param.updates.iter().map(Into::into).collect(),
            next_block_context: (&param.next_block_context).into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonProduceBlockParam {
    pub aggregator_id: Uint32,
    pub deposition_requests: Vec<JsonDepositionRequest>,
}

impl From<&ProduceBlockParam> for JsonProduceBlockParam {
    fn from(param: &ProduceBlockParam) -> Self {
        JsonProduceBlockParam {
            aggregator_id: param.aggregator_id.into(),
            deposition_requests: param.deposition_requests.iter().map(Into::into).collect(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonProduceBlockResult {
    pub block: JsonBytes,
    pub global_state: JsonBytes,
}

impl TryFrom<JsonProduceBlockResult> for ProduceBlockResult {
    type Error = gw_types::CodecError;

    fn try_from(json: JsonProduceBlockResult) -> Result<Self, Self::Error> {
        Ok(ProduceBlockResult {
            block: L2Block::from_slice(json.block.as_bytes())?,
            global_state: json.global_state.into_bytes(),
        })
    }
}

#[derive(Clone)]
pub struct ChainServiceClient(HttpClient);

impl ChainServiceClient {
    pub fn new(client: HttpClient) -> Self {
        Self(client)
    }

    pub fn with_url(url: &str) -> Result<Self> {
        let client = HttpClient::builder()
            .timeout(DEFAULT_HTTP_TIMEOUT)
            .build(url)?;
        Ok(Self::new(client))
    }

    #[instrument(skip_all, fields(method = method))]
    async fn request<T: DeserializeOwned>(
        &self,
        method: &str,
        params: Option<ClientParams>,
    ) -> Result<T> {
        let response = self
            .0
            .request(method, params)
            .await
            .map_err(|err| RPCRequestError::new("chain service", method.to_string(), err))?;
        to_result::<T>(response)
    }
}

#[async_trait]
impl ChainService for ChainServiceClient {
    async fn last_synced(&self) -> Result<HeaderInfo> {
        let header_info: JsonHeaderInfo = self.request("gw_last_synced", None).await?;
        let header_info: HeaderInfo = header_info.try_into()?;
        Ok(header_info)
    }

    async fn sync(&self, param: SyncParam) -> Result<()> {
        let param: JsonSyncParam = (&param).into();
        let _: serde_json::Value = self
            .request("gw_sync", Some(ClientParams::Array(vec![json!(param)])))
            .await?;
        Ok(())
    }

    async fn produce_block(&self, param: ProduceBlockParam) -> Result<ProduceBlockResult> {
        let param: JsonProduceBlockParam = (&param).into();
        let result: JsonProduceBlockResult = self
            .request(
                "gw_produce_block",
                Some(ClientParams::Array(vec![json!(param)])),
            )
            .await?;
        let result: ProduceBlockResult = result.try_into().context("decode produced block")?;
        Ok(result)
    }
}
