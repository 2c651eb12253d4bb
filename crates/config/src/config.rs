use std::path::PathBuf;

use ckb_fixed_hash::H256;
use ckb_jsonrpc_types::{CellDep, JsonBytes, Script, ScriptHashType};
use gw_types::{bytes::Bytes, core::ScriptHashType as ScriptHashTypeCore, packed, prelude::*};
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_FEE_RATE, DEFAULT_MAX_DEPOSITS_PER_BLOCK, DEFAULT_MIN_DEPOSIT_CAPACITY,
    DEFAULT_POLL_INTERVAL_MS, DEFAULT_SYNC_MAX_RETRIES, DEFAULT_SYNC_RETRY_BASE_MS,
};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub rpc_client: RPCClientConfig,
    pub chain_service: ChainServiceConfig,
    pub chain: ChainConfig,
    pub deployment: DeploymentConfig,
    /// Missing section means read-only mode: sync only, never produce blocks.
    pub block_producer: Option<BlockProducerConfig>,
    #[serde(default)]
    pub sync: SyncConfig,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RPCClientConfig {
    pub ckb_url: String,
    pub indexer_url: String,
}

impl Default for RPCClientConfig {
    fn default() -> Self {
        RPCClientConfig {
            ckb_url: "http://127.0.0.1:8114".to_string(),
            indexer_url: "http://127.0.0.1:8116".to_string(),
        }
    }
}

/// Endpoint of the layer2 state machine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChainServiceConfig {
    pub url: String,
}

impl Default for ChainServiceConfig {
    fn default() -> Self {
        ChainServiceConfig {
            url: "http://127.0.0.1:8119".to_string(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChainConfig {
    pub rollup_type_script: Script,
}

impl ChainConfig {
    pub fn rollup_type_script(&self) -> packed::Script {
        self.rollup_type_script.clone().into()
    }
}

/// Code hash and hash type of a deployed script, args are filled per cell.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScriptTemplate {
    pub code_hash: H256,
    pub hash_type: ScriptHashType,
}

impl ScriptTemplate {
    pub fn to_script(&self, args: Bytes) -> packed::Script {
        Script {
            code_hash: self.code_hash.clone(),
            hash_type: self.hash_type.clone(),
            args: JsonBytes::from_bytes(args),
        }
        .into()
    }

    /// Same code hash and hash type, args are not compared.
    pub fn matches(&self, script: &packed::Script) -> bool {
        let hash_type: ScriptHashTypeCore = self.hash_type.clone().into();
        let hash_type: packed::Byte = hash_type.into();
        script.code_hash().as_slice() == self.code_hash.as_bytes()
            && script.hash_type().as_slice() == hash_type.as_slice()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DeploymentConfig {
    pub deposition_lock: ScriptTemplate,
    pub custodian_lock: ScriptTemplate,
    pub withdrawal_lock: ScriptTemplate,
    pub sudt_type: ScriptTemplate,
    pub state_validator_lock_dep: CellDep,
    pub state_validator_type_dep: CellDep,
    pub deposition_lock_dep: CellDep,
    pub custodian_lock_dep: CellDep,
    pub sudt_type_dep: CellDep,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WalletConfig {
    pub privkey_path: PathBuf,
}

/// Decides whether this node may issue the next block.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AggregatorKind {
    AlwaysSuccess,
}

impl Default for AggregatorKind {
    fn default() -> Self {
        AggregatorKind::AlwaysSuccess
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BlockProducerConfig {
    #[serde(default)]
    pub aggregator: AggregatorKind,
    #[serde(default = "default_fee_rate")]
    pub fee_rate: u64,
    #[serde(default = "default_max_deposits_per_block")]
    pub max_deposits_per_block: usize,
    #[serde(default = "default_min_deposit_capacity")]
    pub min_deposit_capacity: u64,
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
    pub wallet: WalletConfig,
}

impl Default for BlockProducerConfig {
    fn default() -> Self {
        BlockProducerConfig {
            wallet: Default::default(),
            aggregator: Default::default(),
            fee_rate: DEFAULT_FEE_RATE,
            max_deposits_per_block: DEFAULT_MAX_DEPOSITS_PER_BLOCK,
            min_deposit_capacity: DEFAULT_MIN_DEPOSIT_CAPACITY,
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
        }
    }
}

fn default_fee_rate() -> u64 {
    DEFAULT_FEE_RATE
}

fn default_max_deposits_per_block() -> usize {
    DEFAULT_MAX_DEPOSITS_PER_BLOCK
}

fn default_min_deposit_capacity() -> u64 {
    DEFAULT_MIN_DEPOSIT_CAPACITY
}

fn default_poll_interval_ms() -> u64 {
    DEFAULT_POLL_INTERVAL_MS
}

/// Bounded retry of base-chain fetches while syncing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SyncConfig {
    pub max_retries: u32,
    pub retry_base_ms: u64,
    pub poll_interval_ms: u64,
}

impl Default for SyncConfig {
    fn default() -> Self {
        SyncConfig {
            max_retries: DEFAULT_SYNC_MAX_RETRIES,
            retry_base_ms: DEFAULT_SYNC_RETRY_BASE_MS,
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = r#"
[rpc_client]
ckb_url = "http://127.0.0.1:8114"
indexer_url = "http://127.0.0.1:8116"

[chain_service]
url = "http://127.0.0.1:8119"

[chain.rollup_type_script]
code_hash = "0x0000000000000000000000000000000000000000000000000000000000000001"
hash_type = "type"
args = "0x01"

[deployment.deposition_lock]
code_hash = "0x0000000000000000000000000000000000000000000000000000000000000002"
hash_type = "data"

[deployment.custodian_lock]
code_hash = "0x0000000000000000000000000000000000000000000000000000000000000003"
hash_type = "type"

[deployment.withdrawal_lock]
code_hash = "0x0000000000000000000000000000000000000000000000000000000000000004"
hash_type = "type"

[deployment.sudt_type]
code_hash = "0x0000000000000000000000000000000000000000000000000000000000000005"
hash_type = "type"

[deployment.state_validator_lock_dep]
dep_type = "code"
[deployment.state_validator_lock_dep.out_point]
tx_hash = "0x0000000000000000000000000000000000000000000000000000000000000006"
index = "0x0"

[deployment.state_validator_type_dep]
dep_type = "code"
[deployment.state_validator_type_dep.out_point]
tx_hash = "0x0000000000000000000000000000000000000000000000000000000000000006"
index = "0x1"

[deployment.deposition_lock_dep]
dep_type = "code"
[deployment.deposition_lock_dep.out_point]
tx_hash = "0x0000000000000000000000000000000000000000000000000000000000000006"
index = "0x2"

[deployment.custodian_lock_dep]
dep_type = "code"
[deployment.custodian_lock_dep.out_point]
tx_hash = "0x0000000000000000000000000000000000000000000000000000000000000006"
index = "0x3"

[deployment.sudt_type_dep]
dep_type = "dep_group"
[deployment.sudt_type_dep.out_point]
tx_hash = "0x0000000000000000000000000000000000000000000000000000000000000007"
index = "0x0"

[block_producer.wallet]
privkey_path = "./privkey"
"#;

    #[test]
    fn test_parse_config_with_defaults() {
        let config: Config = toml::from_str(EXAMPLE).unwrap();
        let producer = config.block_producer.unwrap();
        assert_eq!(producer.fee_rate, DEFAULT_FEE_RATE);
        assert_eq!(producer.max_deposits_per_block, 20);
        assert_eq!(producer.min_deposit_capacity, 40_000_000_000);
        assert_eq!(producer.aggregator, AggregatorKind::AlwaysSuccess);
        assert_eq!(config.sync, SyncConfig::default());
    }

    #[test]
    fn test_read_only_without_block_producer() {
        let example = EXAMPLE.replace("[block_producer.wallet]\nprivkey_path = \"./privkey\"\n", "");
        let config: Config = toml::from_str(&example).unwrap();
        assert!(config.block_producer.is_none());
    }

    #[test]
    fn test_script_template() {
        let config: Config = toml::from_str(EXAMPLE).unwrap();
        let template = &config.deployment.deposition_lock;
        let script = template.to_script(Bytes::from(vec![1u8; 32]));
        assert!(template.matches(&script));
        assert_eq!(
            u8::from(script.hash_type()),
            ScriptHashTypeCore::Data as u8
        );
        assert!(!config.deployment.custodian_lock.matches(&script));
    }

    #[test]
    fn test_example_config_round_trip() {
        let config = Config {
            block_producer: Some(Default::default()),
            ..Default::default()
        };
        let value = toml::Value::try_from(&config).unwrap();
        let content = toml::to_string_pretty(&value).unwrap();
        let parsed: Config = toml::from_str(&content).unwrap();
        assert_eq!(parsed, config);
    }
}
