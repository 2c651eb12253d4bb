#![allow(clippy::mutable_key_type)]

use std::collections::HashSet;

use anyhow::{anyhow, Result};
use gw_config::{constants::FINALIZED_BLOCKS, DeploymentConfig};
use gw_rpc_client::traits::L1Client;
use gw_types::{
    bytes::Bytes,
    godwoken::{
        pack_lock_args, unpack_lock_args, CustodianLockArgs, L2Block, WithdrawalLockArgs,
    },
    offchain::{CellInfo, InputCellInfo, RollupContext},
    packed::{CellDep, CellOutput, OutPoint, Script},
    prelude::*,
    CodecError,
};
use gw_utils::transaction_skeleton::TransactionSkeleton;
use thiserror::Error;
use tracing::instrument;

use crate::custodian::{custodian_lock, minimal_capacity, query_finalized_custodians};

const SUDT_AMOUNT_SIZE: usize = 16;

#[derive(Error, Debug)]
pub enum WithdrawalError {
    #[error("no valid custodian cell to settle {withdrawals} withdrawals")]
    NoValidCustodian { withdrawals: usize },
    #[error("custodian cell {out_point} is malformed: {source}")]
    MalformedCustodian {
        out_point: OutPoint,
        source: CodecError,
    },
    #[error("withdrawal {index} capacity {capacity} is less than minimal capacity {minimal}")]
    CapacityBelowMinimal {
        index: usize,
        capacity: u64,
        minimal: u64,
    },
    #[error(
        "insufficient sudt {} in valid custodian cells, required: {required}, collected: {collected}",
        hex::encode(.sudt_script_hash)
    )]
    InsufficientSudt {
        sudt_script_hash: [u8; 32],
        required: u128,
        collected: u128,
    },
    #[error("insufficient capacity in valid custodian cells, required: {required}, collected: {collected}")]
    InsufficientCapacity { required: u128, collected: u128 },
    #[error("sudt {} amount overflow", hex::encode(.sudt_script_hash))]
    AmountOverflow { sudt_script_hash: [u8; 32] },
}

#[derive(Debug)]
pub struct GeneratedWithdrawals {
    pub deps: Vec<CellDep>,
    pub inputs: Vec<InputCellInfo>,
    pub outputs: Vec<(CellOutput, Bytes)>,
}

/// Custodian inputs picked so far, shared by every asset.
#[derive(Default)]
struct CustodianInputs {
    used: HashSet<OutPoint>,
    inputs: Vec<InputCellInfo>,
    capacity: u128,
}

impl CustodianInputs {
    fn take(&mut self, cell: &CellInfo) -> bool {
        if !self.used.insert(cell.out_point.clone()) {
            return false;
        }
        self.capacity += cell.capacity() as u128;
        self.inputs.push(InputCellInfo::new(cell.clone()));
        true
    }
}

/// Settles the withdrawal requests of a block from finalized custodian cells.
#[derive(Clone)]
pub struct WithdrawalProcessor {
    deployment: DeploymentConfig,
    rollup_context: RollupContext,
}

impl WithdrawalProcessor {
    pub fn new(deployment: DeploymentConfig, rollup_context: RollupContext) -> Self {
        WithdrawalProcessor {
            deployment,
            rollup_context,
        }
    }

    /// Append the custodian inputs, withdrawal outputs and change outputs
    /// of `block` to the skeleton. Does nothing for blocks without
    /// withdrawals.
    #[instrument(skip_all, fields(block = block.number()))]
    pub async fn process(
        &self,
        client: &dyn L1Client,
        block: &L2Block,
        tx_skeleton: &mut TransactionSkeleton,
    ) -> Result<()> {
        if block.withdrawal_requests().is_empty() {
            return Ok(());
        }

        let custodians = match self
            .rollup_context
            .last_finalized_block_number(block.number(), FINALIZED_BLOCKS)
        {
            Some(last_finalized) => {
                query_finalized_custodians(
                    client,
                    &self.deployment,
                    &self.rollup_context,
                    last_finalized,
                )
                .await?
            }
            None => Vec::new(),
        };
        log::debug!("valid custodian cells {}", custodians.len());

        let generated = match self.generate(block, &custodians)? {
            Some(generated) => generated,
            None => return Ok(()),
        };
        for dep in generated.deps {
            tx_skeleton.add_cell_dep(dep);
        }
        tx_skeleton.inputs_mut().extend(generated.inputs);
        tx_skeleton.outputs_mut().extend(generated.outputs);
        Ok(())
    }

    /// `custodians` are the valid custodian cells in scan order.
    pub fn generate(
        &self,
        block: &L2Block,
        custodians: &[CellInfo],
    ) -> Result<Option<GeneratedWithdrawals>> {
        let requests = block.withdrawal_requests();
        if requests.is_empty() {
            return Ok(None);
        }

        let mut deps = vec![self.deployment.custodian_lock_dep.clone().into()];

        // every withdrawal lock reuses the provenance of the first valid custodian
        let first_custodian = custodians
            .first()
            .ok_or(WithdrawalError::NoValidCustodian {
                withdrawals: requests.len(),
            })?;
        let provenance = decode_custodian_args(first_custodian)?;

        let mut outputs = Vec::with_capacity(requests.len());
        let mut withdrawal_capacity: u128 = 0;
        let mut sudt_demands: Vec<([u8; 32], u128)> = Vec::new();
        for (index, request) in requests.iter().enumerate() {
            let raw = &request.raw;
            withdrawal_capacity += raw.capacity as u128;

            let lock_args = WithdrawalLockArgs {
                deposition_block_hash: provenance.deposition_block_hash,
                deposition_block_number: provenance.deposition_block_number,
                withdrawal_block_hash: block.hash(),
                withdrawal_block_number: block.number(),
                sudt_script_hash: raw.sudt_script_hash,
                sell_amount: raw.sell_amount,
                sell_capacity: raw.sell_capacity,
                owner_lock_hash: raw.owner_lock_hash,
                payment_lock_hash: raw.payment_lock_hash,
            };
            let lock = self.deployment.withdrawal_lock.to_script(pack_lock_args(
                &self.rollup_context.rollup_type_hash,
                &lock_args,
            ));

            let (type_, data) = if raw.is_native() {
                (None, Bytes::new())
            } else {
                match sudt_demands
                    .iter_mut()
                    .find(|(hash, _)| hash == &raw.sudt_script_hash)
                {
                    Some((_, demand)) => {
                        *demand = demand.checked_add(raw.amount).ok_or(
                            WithdrawalError::AmountOverflow {
                                sudt_script_hash: raw.sudt_script_hash,
                            },
                        )?;
                    }
                    None => sudt_demands.push((raw.sudt_script_hash, raw.amount)),
                }
                let data = Bytes::copy_from_slice(&raw.amount.to_le_bytes());
                (Some(self.sudt_script(&raw.sudt_script_hash)), data)
            };

            let output = CellOutput::new_builder()
                .capacity(raw.capacity.pack())
                .lock(lock)
                .type_(type_.pack())
                .build();
            let minimal = minimal_capacity(&output, &data)?;
            if raw.capacity < minimal {
                return Err(WithdrawalError::CapacityBelowMinimal {
                    index,
                    capacity: raw.capacity,
                    minimal,
                }
                .into());
            }
            outputs.push((output, data));
        }
        if !sudt_demands.is_empty() {
            deps.push(self.deployment.sudt_type_dep.clone().into());
        }

        let mut collected = CustodianInputs::default();

        // sudt custodians and their change
        let mut sudt_change_capacity: u128 = 0;
        for (sudt_script_hash, demand) in sudt_demands {
            let mut amount: u128 = 0;
            for cell in custodians {
                if amount >= demand {
                    break;
                }
                if !self.is_sudt_custodian(cell, &sudt_script_hash)
                    || collected.used.contains(&cell.out_point)
                {
                    continue;
                }
                let cell_amount = sudt_amount(cell)?;
                collected.take(cell);
                amount = amount
                    .checked_add(cell_amount)
                    .ok_or(WithdrawalError::AmountOverflow { sudt_script_hash })?;
            }
            if amount < demand {
                return Err(WithdrawalError::InsufficientSudt {
                    sudt_script_hash,
                    required: demand,
                    collected: amount,
                }
                .into());
            }

            let data = Bytes::copy_from_slice(&(amount - demand).to_le_bytes());
            let output = CellOutput::new_builder()
                .lock(self.change_lock())
                .type_(Some(self.sudt_script(&sudt_script_hash)).pack())
                .build();
            let capacity = minimal_capacity(&output, &data)?;
            sudt_change_capacity += capacity as u128;
            let output = output.as_builder().capacity(capacity.pack()).build();
            outputs.push((output, data));
        }

        // native coin change
        let demand = withdrawal_capacity + sudt_change_capacity;
        if collected.capacity != demand {
            // a zero sudt amount
            let change_data = Bytes::from(vec![0u8; SUDT_AMOUNT_SIZE]);
            let change = CellOutput::new_builder().lock(self.change_lock()).build();
            let minimal = minimal_capacity(&change, &change_data)? as u128;
            if collected.capacity < demand + minimal {
                for cell in custodians {
                    if collected.capacity >= demand + minimal {
                        break;
                    }
                    if cell.output.type_().to_opt().is_none() {
                        collected.take(cell);
                    }
                }
            }
            if collected.capacity < demand + minimal {
                return Err(WithdrawalError::InsufficientCapacity {
                    required: demand + minimal,
                    collected: collected.capacity,
                }
                .into());
            }

            let change_capacity = u64::try_from(collected.capacity - demand)
                .map_err(|_| anyhow!("change capacity overflow"))?;
            let change = change.as_builder().capacity(change_capacity.pack()).build();
            outputs.push((change, change_data));
        }

        Ok(Some(GeneratedWithdrawals {
            deps,
            inputs: collected.inputs,
            outputs,
        }))
    }

    fn sudt_script(&self, sudt_script_hash: &[u8; 32]) -> Script {
        self.deployment
            .sudt_type
            .to_script(Bytes::copy_from_slice(sudt_script_hash))
    }

    fn is_sudt_custodian(&self, cell: &CellInfo, sudt_script_hash: &[u8; 32]) -> bool {
        match cell.output.type_().to_opt() {
            Some(type_) => {
                let args: Bytes = type_.args().unpack();
                self.deployment.sudt_type.matches(&type_) && args.as_ref() == sudt_script_hash
            }
            None => false,
        }
    }

    // change custodians carry the placeholder provenance
    fn change_lock(&self) -> Script {
        custodian_lock(
            &self.deployment,
            &self.rollup_context,
            &CustodianLockArgs::default(),
        )
    }
}

fn decode_custodian_args(cell: &CellInfo) -> Result<CustodianLockArgs, WithdrawalError> {
    let args: Bytes = cell.output.lock().args().unpack();
    let (_rollup_type_hash, lock_args) =
        unpack_lock_args::<CustodianLockArgs>(&args).map_err(|source| {
            WithdrawalError::MalformedCustodian {
                out_point: cell.out_point.clone(),
                source,
            }
        })?;
    Ok(lock_args)
}

fn sudt_amount(cell: &CellInfo) -> Result<u128, WithdrawalError> {
    if cell.data.len() < SUDT_AMOUNT_SIZE {
        return Err(WithdrawalError::MalformedCustodian {
            out_point: cell.out_point.clone(),
            source: CodecError::TooShort {
                path: "custodian.data".to_string(),
                expected: SUDT_AMOUNT_SIZE,
                actual: cell.data.len(),
            },
        });
    }
    let mut buf = [0u8; SUDT_AMOUNT_SIZE];
    buf.copy_from_slice(&cell.data[..SUDT_AMOUNT_SIZE]);
    Ok(u128::from_le_bytes(buf))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing_tools::{
        block_with_withdrawals, custodian_cell, withdrawal_request, Fixture, CKB,
    };

    const TOKEN: [u8; 32] = [0x11; 32];

    fn processor(fixture: &Fixture) -> WithdrawalProcessor {
        WithdrawalProcessor::new(
            fixture.deployment.clone(),
            fixture.rollup_context.clone(),
        )
    }

    fn capacity_of(outputs: &[(CellOutput, Bytes)]) -> u128 {
        outputs
            .iter()
            .map(|(output, _)| {
                let capacity: u64 = output.capacity().unpack();
                capacity as u128
            })
            .sum()
    }

    fn token_amount(data: &Bytes) -> u128 {
        let mut buf = [0u8; 16];
        buf.copy_from_slice(&data[..16]);
        u128::from_le_bytes(buf)
    }

    #[test]
    fn test_no_withdrawals() {
        let fixture = Fixture::new();
        let block = block_with_withdrawals(200, vec![]);
        let generated = processor(&fixture).generate(&block, &[]).unwrap();
        assert!(generated.is_none());
    }

    #[test]
    fn test_sudt_selection_and_change() {
        let fixture = Fixture::new();
        let custodians = vec![
            custodian_cell(&fixture, 200 * CKB, Some((TOKEN, 80))),
            custodian_cell(&fixture, 200 * CKB, Some((TOKEN, 90))),
            custodian_cell(&fixture, 200 * CKB, Some((TOKEN, 10))),
            custodian_cell(&fixture, 1000 * CKB, None),
        ];
        let block = block_with_withdrawals(
            200,
            vec![
                withdrawal_request(400 * CKB, Some((TOKEN, 100))),
                withdrawal_request(400 * CKB, Some((TOKEN, 50))),
            ],
        );

        let generated = processor(&fixture)
            .generate(&block, &custodians)
            .unwrap()
            .unwrap();

        let inputs: Vec<_> = generated
            .inputs
            .iter()
            .map(|input| input.cell.out_point.clone())
            .collect();
        assert_eq!(
            inputs,
            vec![
                custodians[0].out_point.clone(),
                custodians[1].out_point.clone(),
                custodians[3].out_point.clone(),
            ]
        );

        // two withdrawals, sudt change, ckb change
        assert_eq!(generated.outputs.len(), 4);
        let (sudt_change, sudt_change_data) = &generated.outputs[2];
        assert_eq!(token_amount(sudt_change_data), 20);
        let type_ = sudt_change.type_().to_opt().unwrap();
        let args: Bytes = type_.args().unpack();
        assert_eq!(args.as_ref(), &TOKEN);

        // token conservation
        let withdrawn: u128 = generated.outputs[..2]
            .iter()
            .map(|(_, data)| token_amount(data))
            .sum();
        assert_eq!(withdrawn, 150);
        assert_eq!(80 + 90, withdrawn + token_amount(sudt_change_data));

        // capacity conservation
        let input_capacity: u128 = generated
            .inputs
            .iter()
            .map(|input| input.cell.capacity() as u128)
            .sum();
        assert_eq!(input_capacity, capacity_of(&generated.outputs));

        assert_eq!(generated.deps.len(), 2);
        assert_eq!(
            generated.deps[1].as_slice(),
            CellDep::from(fixture.deployment.sudt_type_dep.clone()).as_slice()
        );
    }

    #[test]
    fn test_change_cells_are_minimal() {
        let fixture = Fixture::new();
        let custodians = vec![
            custodian_cell(&fixture, 300 * CKB, Some((TOKEN, 500))),
            custodian_cell(&fixture, 1000 * CKB, None),
        ];
        let block = block_with_withdrawals(
            150,
            vec![withdrawal_request(400 * CKB, Some((TOKEN, 100)))],
        );
        let generated = processor(&fixture)
            .generate(&block, &custodians)
            .unwrap()
            .unwrap();
        for (output, data) in &generated.outputs {
            let capacity: u64 = output.capacity().unpack();
            assert!(capacity >= minimal_capacity(output, data).unwrap());
        }
        let (sudt_change, data) = &generated.outputs[1];
        let capacity: u64 = sudt_change.capacity().unpack();
        assert_eq!(capacity, minimal_capacity(sudt_change, data).unwrap());
    }

    #[test]
    fn test_top_up_for_change_cell() {
        let fixture = Fixture::new();
        let custodians = vec![
            custodian_cell(&fixture, 410 * CKB, None),
            custodian_cell(&fixture, 500 * CKB, None),
        ];
        let block = block_with_withdrawals(150, vec![withdrawal_request(400 * CKB, None)]);
        let generated = processor(&fixture)
            .generate(&block, &custodians)
            .unwrap()
            .unwrap();
        // 410 CKB covers the withdrawal but leaves 10 CKB for the change cell
        assert_eq!(generated.inputs.len(), 2);
        assert_eq!(generated.outputs.len(), 2);
        let (change, data) = &generated.outputs[1];
        let capacity: u64 = change.capacity().unpack();
        assert_eq!(capacity, 510 * CKB);
        assert_eq!(data, &Bytes::from(vec![0u8; 16]));
        assert!(change.type_().to_opt().is_none());
        assert!(fixture.deployment.custodian_lock.matches(&change.lock()));
    }

    #[test]
    fn test_native_change_minimal_capacity() {
        let fixture = Fixture::new();
        let processor = processor(&fixture);
        let change = CellOutput::new_builder()
            .lock(processor.change_lock())
            .build();
        // capacity 8, code hash 32, hash type 1, lock args 32 + 165, data 16
        assert_eq!(
            minimal_capacity(&change, &Bytes::from(vec![0u8; 16])).unwrap(),
            254 * CKB
        );

        // 654 CKB is exactly the withdrawal plus a minimal change cell
        let custodians = vec![
            custodian_cell(&fixture, 653 * CKB, None),
            custodian_cell(&fixture, CKB, None),
        ];
        let block = block_with_withdrawals(150, vec![withdrawal_request(400 * CKB, None)]);
        let generated = processor.generate(&block, &custodians).unwrap().unwrap();
        assert_eq!(generated.inputs.len(), 2);
        let capacity: u64 = generated.outputs[1].0.capacity().unpack();
        assert_eq!(capacity, 254 * CKB);
    }

    #[test]
    fn test_exact_capacity_needs_no_change() {
        let fixture = Fixture::new();
        let processor = processor(&fixture);
        let sudt_change = CellOutput::new_builder()
            .lock(processor.change_lock())
            .type_(Some(processor.sudt_script(&TOKEN)).pack())
            .build();
        let sudt_change_capacity =
            minimal_capacity(&sudt_change, &Bytes::from(vec![0u8; 16])).unwrap();

        let custodians = vec![
            custodian_cell(&fixture, 400 * CKB + sudt_change_capacity, Some((TOKEN, 100))),
            custodian_cell(&fixture, 1000 * CKB, None),
        ];
        let block = block_with_withdrawals(
            150,
            vec![withdrawal_request(400 * CKB, Some((TOKEN, 100)))],
        );
        let generated = processor.generate(&block, &custodians).unwrap().unwrap();
        assert_eq!(generated.inputs.len(), 1);
        // withdrawal and an empty sudt change
        assert_eq!(generated.outputs.len(), 2);
        assert_eq!(token_amount(&generated.outputs[1].1), 0);
    }

    #[test]
    fn test_withdrawal_lock_args() {
        let fixture = Fixture::new();
        let custodians = vec![custodian_cell(&fixture, 1000 * CKB, None)];
        let provenance = decode_custodian_args(&custodians[0]).unwrap();
        let request = withdrawal_request(400 * CKB, None);
        let block = block_with_withdrawals(150, vec![request.clone()]);
        let generated = processor(&fixture)
            .generate(&block, &custodians)
            .unwrap()
            .unwrap();

        let (withdrawal, _) = &generated.outputs[0];
        assert!(fixture.deployment.withdrawal_lock.matches(&withdrawal.lock()));
        let args: Bytes = withdrawal.lock().args().unpack();
        let (rollup_type_hash, args) = unpack_lock_args::<WithdrawalLockArgs>(&args).unwrap();
        assert_eq!(rollup_type_hash, fixture.rollup_context.rollup_type_hash);
        assert_eq!(args.deposition_block_hash, provenance.deposition_block_hash);
        assert_eq!(args.deposition_block_number, provenance.deposition_block_number);
        assert_eq!(args.withdrawal_block_hash, block.hash());
        assert_eq!(args.withdrawal_block_number, 150);
        assert_eq!(args.owner_lock_hash, request.raw.owner_lock_hash);
        assert_eq!(args.payment_lock_hash, request.raw.payment_lock_hash);
    }

    #[test]
    fn test_capacity_below_minimal() {
        let fixture = Fixture::new();
        let custodians = vec![custodian_cell(&fixture, 1000 * CKB, None)];
        let block = block_with_withdrawals(150, vec![withdrawal_request(10 * CKB, None)]);
        let err = processor(&fixture)
            .generate(&block, &custodians)
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<WithdrawalError>(),
            Some(WithdrawalError::CapacityBelowMinimal { index: 0, .. })
        ));
    }

    #[test]
    fn test_insufficient_sudt() {
        let fixture = Fixture::new();
        let custodians = vec![
            custodian_cell(&fixture, 200 * CKB, Some((TOKEN, 10))),
            custodian_cell(&fixture, 200 * CKB, Some(([0x22; 32], 1000))),
        ];
        let block = block_with_withdrawals(
            150,
            vec![withdrawal_request(400 * CKB, Some((TOKEN, 100)))],
        );
        let err = processor(&fixture)
            .generate(&block, &custodians)
            .unwrap_err();
        match err.downcast_ref::<WithdrawalError>() {
            Some(WithdrawalError::InsufficientSudt {
                required,
                collected,
                ..
            }) => {
                assert_eq!(*required, 100);
                assert_eq!(*collected, 10);
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_insufficient_capacity() {
        let fixture = Fixture::new();
        let custodians = vec![
            custodian_cell(&fixture, 300 * CKB, None),
            custodian_cell(&fixture, 300 * CKB, None),
        ];
        let block = block_with_withdrawals(
            150,
            vec![
                withdrawal_request(400 * CKB, None),
                withdrawal_request(400 * CKB, None),
            ],
        );
        let err = processor(&fixture)
            .generate(&block, &custodians)
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<WithdrawalError>(),
            Some(WithdrawalError::InsufficientCapacity { .. })
        ));
    }

    #[test]
    fn test_no_valid_custodian() {
        let fixture = Fixture::new();
        let block = block_with_withdrawals(150, vec![withdrawal_request(400 * CKB, None)]);
        let err = processor(&fixture).generate(&block, &[]).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<WithdrawalError>(),
            Some(WithdrawalError::NoValidCustodian { withdrawals: 1 })
        ));
    }

    #[test]
    fn test_custodians_are_never_reused() {
        let fixture = Fixture::new();
        let other_token = [0x33; 32];
        let custodians = vec![
            custodian_cell(&fixture, 200 * CKB, Some((TOKEN, 60))),
            custodian_cell(&fixture, 200 * CKB, Some((other_token, 60))),
            custodian_cell(&fixture, 200 * CKB, Some((TOKEN, 60))),
            custodian_cell(&fixture, 1000 * CKB, None),
            custodian_cell(&fixture, 1000 * CKB, None),
            custodian_cell(&fixture, 1000 * CKB, None),
        ];
        let block = block_with_withdrawals(
            150,
            vec![
                withdrawal_request(400 * CKB, Some((TOKEN, 100))),
                withdrawal_request(400 * CKB, Some((other_token, 10))),
                withdrawal_request(300 * CKB, None),
            ],
        );
        let generated = processor(&fixture)
            .generate(&block, &custodians)
            .unwrap()
            .unwrap();
        let mut seen = HashSet::new();
        for input in &generated.inputs {
            assert!(seen.insert(input.cell.out_point.clone()));
        }
        let input_capacity: u128 = generated
            .inputs
            .iter()
            .map(|input| input.cell.capacity() as u128)
            .sum();
        assert_eq!(input_capacity, capacity_of(&generated.outputs));
    }

    #[test]
    fn test_sudt_demand_overflow() {
        let fixture = Fixture::new();
        let custodians = vec![custodian_cell(&fixture, 1000 * CKB, Some((TOKEN, 1)))];
        let block = block_with_withdrawals(
            150,
            vec![
                withdrawal_request(400 * CKB, Some((TOKEN, u128::MAX))),
                withdrawal_request(400 * CKB, Some((TOKEN, 1))),
            ],
        );
        let err = processor(&fixture)
            .generate(&block, &custodians)
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<WithdrawalError>(),
            Some(WithdrawalError::AmountOverflow {
                sudt_script_hash: TOKEN
            })
        ));
    }

    #[test]
    fn test_custodian_amount_overflow() {
        let fixture = Fixture::new();
        let custodians = vec![
            custodian_cell(&fixture, 200 * CKB, Some((TOKEN, u128::MAX - 1))),
            custodian_cell(&fixture, 200 * CKB, Some((TOKEN, 5))),
        ];
        let block = block_with_withdrawals(
            150,
            vec![withdrawal_request(400 * CKB, Some((TOKEN, u128::MAX)))],
        );
        let err = processor(&fixture)
            .generate(&block, &custodians)
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<WithdrawalError>(),
            Some(WithdrawalError::AmountOverflow { .. })
        ));
    }
}
