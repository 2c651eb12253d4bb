use anyhow::{anyhow, Result};
use ckb_fixed_hash::H256;
use gw_config::{DeploymentConfig, ScriptTemplate};
use gw_rpc_client::{
    collector::CellCollector,
    indexer_types::{Order, SearchKey},
    traits::L1Client,
};
use gw_types::{
    bytes::Bytes,
    core::{HeaderView, TransactionView},
    godwoken::{
        split_rollup_prefix, zero_script, DepositionLockArgs, DepositionRequest, RollupEntity,
    },
    offchain::{CellInfo, RollupContext},
    packed::OutPoint,
    prelude::*,
    CodecError,
};
use gw_utils::since::Since;
use thiserror::Error;

use crate::types::DepositionEntry;

const SUDT_AMOUNT_SIZE: usize = 16;

/// A cell under the deposition lock that breaks the lock's layout.
#[derive(Error, Debug)]
pub enum DepositionError {
    #[error("deposition cell {out_point} has invalid lock args: {source}")]
    InvalidLockArgs {
        out_point: OutPoint,
        source: CodecError,
    },
    #[error("deposition cell {out_point} holds {actual} bytes of sudt data, expected at least 16")]
    InvalidSudtAmount { out_point: OutPoint, actual: usize },
}

/// Tip and the header of the block that created the cell.
#[derive(Clone, Copy)]
pub struct CancelTimeoutCheck<'a> {
    pub tip: &'a HeaderView,
    pub cell_header: &'a HeaderView,
}

/// Recognizes deposition cells of one rollup deployment.
#[derive(Clone)]
pub struct DepositionScanner {
    deposition_lock: ScriptTemplate,
    rollup_type_hash: [u8; 32],
}

impl DepositionScanner {
    pub fn new(deployment: &DeploymentConfig, rollup_context: &RollupContext) -> Self {
        DepositionScanner {
            deposition_lock: deployment.deposition_lock.clone(),
            rollup_type_hash: rollup_context.rollup_type_hash,
        }
    }

    /// Returns `Ok(None)` for cells of other locks or other rollups, and for
    /// deposits whose cancel timeout has passed.
    pub fn try_extract(
        &self,
        cell: &CellInfo,
        timeout_check: Option<CancelTimeoutCheck>,
    ) -> Result<Option<DepositionEntry>, DepositionError> {
        let lock = cell.output.lock();
        if !self.deposition_lock.matches(&lock) {
            return Ok(None);
        }

        let args: Bytes = lock.args().unpack();
        let invalid_args = |source| DepositionError::InvalidLockArgs {
            out_point: cell.out_point.clone(),
            source,
        };
        let (rollup_type_hash, raw_lock_args) =
            split_rollup_prefix(&args, "deposition_lock.args").map_err(invalid_args)?;
        if rollup_type_hash != self.rollup_type_hash {
            return Ok(None);
        }
        let lock_args = DepositionLockArgs::from_slice(raw_lock_args).map_err(invalid_args)?;

        if let Some(check) = timeout_check {
            let since = Since::new(lock_args.cancel_timeout);
            match since.is_elapsed(check.cell_header, check.tip) {
                Ok(false) => {}
                Ok(true) => {
                    log::debug!(
                        "deposition cell {} timed out, since: {:#x}",
                        cell.out_point,
                        since.as_u64()
                    );
                    return Ok(None);
                }
                Err(err) => {
                    log::warn!("skip deposition cell {}: {}", cell.out_point, err);
                    return Ok(None);
                }
            }
        }

        let (sudt_script, amount) = match cell.output.type_().to_opt() {
            Some(type_) => {
                if cell.data.len() < SUDT_AMOUNT_SIZE {
                    return Err(DepositionError::InvalidSudtAmount {
                        out_point: cell.out_point.clone(),
                        actual: cell.data.len(),
                    });
                }
                let mut buf = [0u8; SUDT_AMOUNT_SIZE];
                buf.copy_from_slice(&cell.data[..SUDT_AMOUNT_SIZE]);
                (type_, u128::from_le_bytes(buf))
            }
            None => (zero_script(), cell.capacity() as u128),
        };

        let request = DepositionRequest {
            layer2_lock: lock_args.layer2_lock.clone(),
            sudt_script,
            amount,
        };
        Ok(Some(DepositionEntry {
            cell: cell.clone(),
            request,
            lock_args,
            raw_lock_args: Bytes::copy_from_slice(raw_lock_args),
        }))
    }

    /// Deposition requests consumed by a committed rollup transaction.
    ///
    /// Every input must resolve to a known output, cancel timeouts are not
    /// checked since the deposits are already consumed.
    pub async fn scan_committed(
        &self,
        client: &dyn L1Client,
        tx: &TransactionView,
    ) -> Result<Vec<DepositionRequest>> {
        let mut requests = Vec::new();
        for input in tx.inputs().into_iter() {
            let cell = resolve_out_point(client, &input.previous_output()).await?;
            if let Some(entry) = self.try_extract(&cell, None)? {
                requests.push(entry.request);
            }
        }
        Ok(requests)
    }

    /// Live deposits of this rollup in ascending order, skipping the ones
    /// below `min_capacity` and the timed out ones, at most `maximum`.
    pub async fn query_valid_deposits(
        &self,
        client: &dyn L1Client,
        tip: &HeaderView,
        maximum: usize,
        min_capacity: u64,
    ) -> Result<Vec<DepositionEntry>> {
        let lock = self
            .deposition_lock
            .to_script(Bytes::copy_from_slice(&self.rollup_type_hash));
        let mut collector = CellCollector::new(client, SearchKey::with_lock(lock), Order::Asc);

        let mut entries = Vec::new();
        while entries.len() < maximum {
            let cell = match collector.next().await? {
                Some(cell) => cell,
                None => break,
            };
            let block_number: u64 = cell.block_number.into();
            let cell = cell.info();
            // custodian cells need much more storage than tiny deposits can pay
            if cell.capacity() < min_capacity {
                continue;
            }

            let cell_header = client
                .get_header_by_number(block_number)
                .await?
                .ok_or_else(|| anyhow!("can't find header of block {}", block_number))?;
            let check = CancelTimeoutCheck {
                tip,
                cell_header: &cell_header,
            };
            if let Some(entry) = self.try_extract(&cell, Some(check))? {
                entries.push(entry);
            }
        }
        Ok(entries)
    }
}

async fn resolve_out_point(client: &dyn L1Client, out_point: &OutPoint) -> Result<CellInfo> {
    let tx_hash: H256 = out_point.tx_hash().unpack();
    let index: u32 = out_point.index().unpack();
    let tx = client
        .get_transaction(&tx_hash)
        .await?
        .ok_or_else(|| anyhow!("transaction {} cannot be found", tx_hash))?;
    let output = tx
        .outputs()
        .get(index as usize)
        .ok_or_else(|| anyhow!("transaction {} does not have output {}", tx_hash, index))?;
    let data = tx
        .outputs_data()
        .get(index as usize)
        .map(|data| data.raw_data())
        .unwrap_or_default();
    Ok(CellInfo {
        out_point: out_point.to_owned(),
        output,
        data,
    })
}
