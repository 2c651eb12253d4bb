use crate::{
    bytes::Bytes,
    packed::{CellInput, CellOutput, OutPoint, Script},
    prelude::*,
};

#[derive(Debug, Clone, Default)]
pub struct CellInfo {
    pub out_point: OutPoint,
    pub output: CellOutput,
    pub data: Bytes,
}

impl CellInfo {
    pub fn capacity(&self) -> u64 {
        self.output.capacity().unpack()
    }
}

#[derive(Debug, Clone)]
pub struct InputCellInfo {
    pub input: CellInput,
    pub cell: CellInfo,
}

impl InputCellInfo {
    pub fn new(cell: CellInfo) -> Self {
        let input = CellInput::new_builder()
            .previous_output(cell.out_point.clone())
            .build();
        InputCellInfo { input, cell }
    }
}

/// Identity of the rollup this node follows.
#[derive(Debug, Clone)]
pub struct RollupContext {
    pub rollup_type_script: Script,
    pub rollup_type_hash: [u8; 32],
}

impl RollupContext {
    pub fn new(rollup_type_script: Script) -> Self {
        let rollup_type_hash = rollup_type_script.hash();
        RollupContext {
            rollup_type_script,
            rollup_type_hash,
        }
    }

    /// Highest base-chain block whose cells count as finalized, `None`
    /// while the chain is shorter than the finality window.
    pub fn last_finalized_block_number(&self, tip_number: u64, finality: u64) -> Option<u64> {
        tip_number.checked_sub(finality)
    }
}
