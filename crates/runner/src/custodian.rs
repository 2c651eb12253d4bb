use anyhow::{anyhow, Result};
use ckb_jsonrpc_types::BlockNumber;
use gw_config::DeploymentConfig;
use gw_rpc_client::{
    collector::CellCollector,
    indexer_types::{Order, SearchKey, SearchKeyFilter},
    traits::L1Client,
};
use gw_types::{
    bytes::Bytes,
    core::Capacity,
    godwoken::{pack_lock_args, CustodianLockArgs, L2Block},
    offchain::{CellInfo, RollupContext},
    packed::{CellOutput, Script},
    prelude::*,
};

use crate::types::DepositionEntry;

pub fn custodian_lock(
    deployment: &DeploymentConfig,
    rollup_context: &RollupContext,
    args: &CustodianLockArgs,
) -> Script {
    let args = pack_lock_args(&rollup_context.rollup_type_hash, args);
    deployment.custodian_lock.to_script(args)
}

/// Re-lock each deposit under the custodian lock, recording the block
/// which consumed it.
pub fn generate_custodian_cells(
    deployment: &DeploymentConfig,
    rollup_context: &RollupContext,
    block: &L2Block,
    deposits: &[DepositionEntry],
) -> Vec<(CellOutput, Bytes)> {
    deposits
        .iter()
        .map(|deposit| {
            let lock_args = CustodianLockArgs {
                deposition_lock_args: deposit.lock_args.clone(),
                deposition_block_hash: block.hash(),
                deposition_block_number: block.number(),
            };
            let lock = custodian_lock(deployment, rollup_context, &lock_args);

            // use custodian lock
            let output = deposit
                .cell
                .output
                .clone()
                .as_builder()
                .lock(lock)
                .build();
            (output, deposit.cell.data.clone())
        })
        .collect()
}

/// Live custodian cells created at or before `last_finalized_block_number`.
pub async fn query_finalized_custodians(
    client: &dyn L1Client,
    deployment: &DeploymentConfig,
    rollup_context: &RollupContext,
    last_finalized_block_number: u64,
) -> Result<Vec<CellInfo>> {
    let lock = deployment
        .custodian_lock
        .to_script(Bytes::copy_from_slice(&rollup_context.rollup_type_hash));
    let filter = SearchKeyFilter {
        block_range: Some([
            BlockNumber::from(0),
            BlockNumber::from(last_finalized_block_number.saturating_add(1)),
        ]),
        ..Default::default()
    };
    let search_key = SearchKey::with_lock(lock).with_filter(Some(filter));
    let cells = CellCollector::new(client, search_key, Order::Asc)
        .collect_all()
        .await?;
    Ok(cells.into_iter().map(|cell| cell.info()).collect())
}

pub fn minimal_capacity(output: &CellOutput, data: &Bytes) -> Result<u64> {
    let data_capacity =
        Capacity::bytes(data.len()).map_err(|err| anyhow!("data capacity: {:?}", err))?;
    let capacity = output
        .occupied_capacity(data_capacity)
        .map_err(|err| anyhow!("occupied capacity: {:?}", err))?;
    Ok(capacity.as_u64())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing_tools::{deposit_entry, Fixture};
    use gw_types::godwoken::{unpack_lock_args, RawL2Block, RollupEntity};

    #[test]
    fn test_custodian_cells_keep_deposit_content() {
        let fixture = Fixture::new();
        let deposit = deposit_entry(&fixture, 500_00000000, None);
        let block = L2Block::new(
            RawL2Block {
                number: 12,
                ..Default::default()
            },
            vec![],
        );
        let cells = generate_custodian_cells(
            &fixture.deployment,
            &fixture.rollup_context,
            &block,
            &[deposit.clone()],
        );
        assert_eq!(cells.len(), 1);
        let (output, data) = &cells[0];
        assert_eq!(output.capacity().as_slice(), deposit.cell.output.capacity().as_slice());
        assert_eq!(data, &deposit.cell.data);
        assert!(fixture.deployment.custodian_lock.matches(&output.lock()));

        let args: Bytes = output.lock().args().unpack();
        let (rollup_type_hash, args) = unpack_lock_args::<CustodianLockArgs>(&args).unwrap();
        assert_eq!(rollup_type_hash, fixture.rollup_context.rollup_type_hash);
        assert_eq!(args.deposition_block_number, 12);
        assert_eq!(args.deposition_block_hash, block.hash());
        assert_eq!(args.deposition_lock_args, deposit.lock_args);
        assert_eq!(
            args.deposition_lock_args.to_bytes(),
            deposit.raw_lock_args
        );
    }

    #[test]
    fn test_minimal_capacity() {
        let output = CellOutput::new_builder()
            .lock(Script::default())
            .build();
        // capacity 8 + code hash 32 + hash type 1
        assert_eq!(minimal_capacity(&output, &Bytes::new()).unwrap(), 41_00000000);
        assert_eq!(
            minimal_capacity(&output, &Bytes::from(vec![0u8; 16])).unwrap(),
            57_00000000
        );
    }
}
