// Request and response types of the ckb-indexer `get_cells` / `get_tip` RPCs.

use ckb_fixed_hash::H256;
use ckb_jsonrpc_types::{BlockNumber, CellOutput, JsonBytes, OutPoint, Script, Uint32, Uint64};
use gw_types::{offchain::CellInfo, packed};
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct SearchKey {
    pub script: Script,
    pub script_type: ScriptType,
    pub filter: Option<SearchKeyFilter>,
}

impl SearchKey {
    /// Build a SearchKey to search for cells with this lock script prefix.
    pub fn with_lock(script: packed::Script) -> Self {
        Self {
            script: script.into(),
            script_type: ScriptType::Lock,
            filter: None,
        }
    }

    /// Build a SearchKey to search for cells with this type script prefix.
    pub fn with_type(script: packed::Script) -> Self {
        Self {
            script: script.into(),
            script_type: ScriptType::Type,
            filter: None,
        }
    }

    pub fn with_filter(self, filter: Option<SearchKeyFilter>) -> Self {
        Self { filter, ..self }
    }
}

/// Ranges are half-open: `[start, end)`.
#[derive(Deserialize, Serialize, Default, Clone, Debug)]
pub struct SearchKeyFilter {
    pub script: Option<Script>,
    pub output_data_len_range: Option<[Uint64; 2]>,
    pub output_capacity_range: Option<[Uint64; 2]>,
    pub block_range: Option<[BlockNumber; 2]>,
}

#[derive(Deserialize, Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ScriptType {
    Lock,
    Type,
}

#[derive(Deserialize, Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Order {
    Desc,
    Asc,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Cell {
    pub output: CellOutput,
    pub output_data: JsonBytes,
    pub out_point: OutPoint,
    pub block_number: BlockNumber,
    pub tx_index: Uint32,
}

impl Cell {
    pub fn info(self) -> CellInfo {
        CellInfo {
            out_point: self.out_point.into(),
            output: self.output.into(),
            data: self.output_data.into_bytes(),
        }
    }
}

#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct IndexerTip {
    pub block_hash: H256,
    pub block_number: BlockNumber,
}

#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct Pagination<T> {
    pub objects: Vec<T>,
    pub last_cursor: JsonBytes,
}
