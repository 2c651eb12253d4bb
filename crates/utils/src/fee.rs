#![allow(clippy::mutable_key_type)]

use std::collections::HashSet;

use crate::transaction_skeleton::TransactionSkeleton;
use anyhow::{bail, Result};
use gw_rpc_client::{
    collector::CellCollector,
    indexer_types::{Order, SearchKey},
    traits::L1Client,
};
use gw_types::{
    offchain::{CellInfo, InputCellInfo},
    packed::{CellOutput, OutPoint, Script},
    prelude::*,
};

/// Capacity reserved for the change cell while estimating.
pub const CHANGE_CELL_CAPACITY: u64 = 61_00000000;

/// `fee_rate` is in shannons per KB.
pub fn calculate_required_tx_fee(tx_size: usize, fee_rate: u64) -> u64 {
    (tx_size as u64) * fee_rate / 1000
}

/// Pay the transaction fee from cells of `lock_script` and return the
/// remainder to it in a change cell.
pub async fn fill_tx_fee(
    tx_skeleton: &mut TransactionSkeleton,
    client: &dyn L1Client,
    lock_script: Script,
    fee_rate: u64,
) -> Result<()> {
    let lock_hash = lock_script.hash();
    let estimate_tx_size_with_change = |tx_skeleton: &mut TransactionSkeleton| -> Result<usize> {
        let change_cell = CellOutput::new_builder()
            .lock(lock_script.clone())
            .capacity(CHANGE_CELL_CAPACITY.pack())
            .build();

        tx_skeleton
            .outputs_mut()
            .push((change_cell, Default::default()));

        let tx_size = tx_skeleton.tx_in_block_size(&lock_hash);
        tx_skeleton.outputs_mut().pop();

        tx_size
    };

    // Try to generate a change output cell. If input cannot cover fee, query payment cells.
    let tx_size = estimate_tx_size_with_change(tx_skeleton)?;
    let tx_fee = calculate_required_tx_fee(tx_size, fee_rate);
    let max_paid_fee = tx_skeleton
        .calculate_fee()?
        .saturating_sub(CHANGE_CELL_CAPACITY);

    let mut required_fee = tx_fee.saturating_sub(max_paid_fee);
    let mut change_capacity = max_paid_fee + CHANGE_CELL_CAPACITY - tx_fee.min(max_paid_fee);
    if required_fee > 0 {
        required_fee += CHANGE_CELL_CAPACITY;
    }

    while required_fee > 0 {
        // to filter used input cells
        let taken_outpoints = tx_skeleton.taken_outpoints()?;
        let cells = collect_payment_cells(
            client,
            lock_script.clone(),
            required_fee,
            &taken_outpoints,
        )
        .await?;
        if cells.is_empty() {
            bail!("no payment cells to pay fee {}", required_fee);
        }

        tx_skeleton
            .inputs_mut()
            .extend(cells.into_iter().map(InputCellInfo::new));

        let tx_size = estimate_tx_size_with_change(tx_skeleton)?;
        let tx_fee = calculate_required_tx_fee(tx_size, fee_rate);
        let max_paid_fee = tx_skeleton
            .calculate_fee()?
            .saturating_sub(CHANGE_CELL_CAPACITY);

        required_fee = tx_fee.saturating_sub(max_paid_fee);
        change_capacity = max_paid_fee + CHANGE_CELL_CAPACITY - tx_fee.min(max_paid_fee);
    }

    let change_cell = CellOutput::new_builder()
        .lock(lock_script)
        .capacity(change_capacity.pack())
        .build();

    tx_skeleton
        .outputs_mut()
        .push((change_cell, Default::default()));

    Ok(())
}

/// query payment cells, the returned cells should provide at least required_capacity fee,
/// and the remained fees should be enough to cover a charge cell
pub async fn collect_payment_cells(
    client: &dyn L1Client,
    lock: Script,
    required_capacity: u64,
    taken_outpoints: &HashSet<OutPoint>,
) -> Result<Vec<CellInfo>> {
    let mut collected_cells = Vec::new();
    let mut collected_capacity = 0u64;

    let search_key = SearchKey::with_lock(lock);
    let mut collector = CellCollector::new(client, search_key, Order::Desc);

    while collected_capacity < required_capacity {
        let cell = match collector.next().await? {
            Some(cell) => cell.info(),
            None => bail!(
                "no enough payment cells, required: {}, collected: {}",
                required_capacity,
                collected_capacity,
            ),
        };

        if !cell.data.is_empty()
            || cell.output.type_().to_opt().is_some()
            || taken_outpoints.contains(&cell.out_point)
        {
            continue;
        }

        collected_capacity = collected_capacity.saturating_add(cell.capacity());
        collected_cells.push(cell);
    }
    Ok(collected_cells)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_fee() {
        assert_eq!(calculate_required_tx_fee(1000, 1000), 1000);
        assert_eq!(calculate_required_tx_fee(1500, 1000), 1500);
        assert_eq!(calculate_required_tx_fee(999, 1), 0);
    }
}
