#![allow(clippy::mutable_key_type)]

use anyhow::{anyhow, bail, Result};
use gw_types::{
    bytes::Bytes,
    offchain::InputCellInfo,
    packed::{CellDep, CellOutput, OutPoint, RawTransaction, Transaction, WitnessArgs},
    prelude::*,
};
use std::collections::{HashMap, HashSet};

pub const SIGNATURE_SIZE: usize = 65;

/// Inputs unlocked by one signature, the first index holds the witness lock.
#[derive(Clone, Debug)]
pub struct SignatureEntry {
    pub indexes: Vec<usize>,
    pub lock_hash: [u8; 32],
}

pub struct SealedTransaction {
    pub transaction: Transaction,
    pub fee: u64,
}

impl SealedTransaction {
    /// `fee_rate` is in shannons per KB.
    pub fn check_fee_rate(&self, fee_rate: u64) -> Result<()> {
        let tx_in_block_size = self.transaction.as_slice().len() + 4;
        let expected_fee = tx_in_block_size as u64 * fee_rate / 1000;

        if self.fee < expected_fee {
            return Err(anyhow!(
                "Insufficient tx fee, expected_fee: {}, tx_fee: {}",
                expected_fee,
                self.fee
            ));
        }
        Ok(())
    }
}

/// An unsigned transaction under construction.
///
/// Cell deps are deduplicated by their serialized form. Witnesses are raw
/// bytes aligned with inputs, missing ones are filled with empty
/// `WitnessArgs` on seal.
#[derive(Default, Clone)]
pub struct TransactionSkeleton {
    inputs: Vec<InputCellInfo>,
    cell_deps: Vec<CellDep>,
    witnesses: Vec<Bytes>,
    cell_outputs: Vec<(CellOutput, Bytes)>,
}

impl TransactionSkeleton {
    pub fn inputs(&self) -> &Vec<InputCellInfo> {
        &self.inputs
    }

    pub fn inputs_mut(&mut self) -> &mut Vec<InputCellInfo> {
        &mut self.inputs
    }

    pub fn cell_deps(&self) -> &Vec<CellDep> {
        &self.cell_deps
    }

    /// Returns false if an identical dep is already present.
    pub fn add_cell_dep(&mut self, cell_dep: CellDep) -> bool {
        if self
            .cell_deps
            .iter()
            .any(|dep| dep.as_slice() == cell_dep.as_slice())
        {
            return false;
        }
        self.cell_deps.push(cell_dep);
        true
    }

    pub fn outputs(&self) -> &Vec<(CellOutput, Bytes)> {
        &self.cell_outputs
    }

    pub fn outputs_mut(&mut self) -> &mut Vec<(CellOutput, Bytes)> {
        &mut self.cell_outputs
    }

    pub fn witnesses(&self) -> &Vec<Bytes> {
        &self.witnesses
    }

    pub fn witnesses_mut(&mut self) -> &mut Vec<Bytes> {
        &mut self.witnesses
    }

    /// Group the inputs locked by `lock_hash` into one signature entry.
    /// Inputs whose witness already carries a lock are left alone.
    pub fn signature_entries(&self, lock_hash: &[u8; 32]) -> Vec<SignatureEntry> {
        let mut entries: HashMap<[u8; 32], SignatureEntry> = Default::default();
        for (index, input) in self.inputs.iter().enumerate() {
            if let Some(witness) = self.witnesses.get(index) {
                let locked = WitnessArgs::from_slice(witness)
                    .map(|args| args.lock().to_opt().is_some())
                    .unwrap_or(false);
                if locked {
                    continue;
                }
            }

            let input_lock_hash = input.cell.output.lock().hash();
            if &input_lock_hash != lock_hash {
                continue;
            }
            let entry = entries
                .entry(input_lock_hash)
                .or_insert_with(|| SignatureEntry {
                    lock_hash: input_lock_hash,
                    indexes: Vec::new(),
                });
            entry.indexes.push(index);
        }

        entries.into_values().collect()
    }

    pub fn seal(
        &self,
        entries: &[SignatureEntry],
        signatures: Vec<Bytes>,
    ) -> Result<SealedTransaction> {
        if entries.len() != signatures.len() {
            bail!(
                "{} signature entries but {} signatures",
                entries.len(),
                signatures.len()
            );
        }
        // build raw tx
        let inputs = self
            .inputs
            .iter()
            .map(|input_cell| input_cell.input.clone())
            .collect::<Vec<_>>();
        let outputs = self
            .outputs()
            .iter()
            .map(|(output, _data)| output.to_owned())
            .collect::<Vec<_>>();
        let outputs_data = self
            .outputs()
            .iter()
            .map(|(_output, data)| data.to_owned())
            .collect::<Vec<_>>();
        let raw_tx = RawTransaction::new_builder()
            .inputs(inputs.pack())
            .outputs(outputs.pack())
            .outputs_data(outputs_data.pack())
            .cell_deps(self.cell_deps.clone().pack())
            .build();

        // build witnesses
        let mut witnesses: Vec<Bytes> = self.witnesses.clone();
        if witnesses.len() < self.inputs.len() {
            witnesses.resize(self.inputs.len(), WitnessArgs::default().as_bytes());
        }
        // set signature to witnesses
        for (entry, signature) in entries.iter().zip(signatures) {
            let index = *entry
                .indexes
                .first()
                .ok_or_else(|| anyhow!("empty signature entry"))?;
            let witness = witnesses
                .get_mut(index)
                .ok_or_else(|| anyhow!("can't find witness {}", index))?;
            let witness_args = if witness.is_empty() {
                WitnessArgs::default()
            } else {
                WitnessArgs::from_slice(witness)
                    .map_err(|err| anyhow!("invalid witness {}: {}", index, err))?
            };
            if witness_args.lock().to_opt().is_some() {
                return Err(anyhow!(
                    "entry signature conflict with the witness index: {}",
                    index
                ));
            }

            *witness = witness_args
                .as_builder()
                .lock(Some(signature).pack())
                .build()
                .as_bytes();
        }

        let transaction = Transaction::new_builder()
            .raw(raw_tx)
            .witnesses(witnesses.pack())
            .build();
        let fee = self.calculate_fee()?;

        Ok(SealedTransaction { transaction, fee })
    }

    pub fn calculate_fee(&self) -> Result<u64> {
        let inputs_capacity: u64 = self.inputs.iter().map(|input| input.cell.capacity()).sum();

        let outputs_capacity: u64 = self
            .cell_outputs
            .iter()
            .map(|(output, _data)| {
                let capacity: u64 = output.capacity().unpack();
                capacity
            })
            .sum();

        let tx_fee = inputs_capacity.saturating_sub(outputs_capacity);
        Ok(tx_fee)
    }

    /// Serialized size once signed by `lock_hash`, including the 4 bytes
    /// block serialization cost.
    pub fn tx_in_block_size(&self, lock_hash: &[u8; 32]) -> Result<usize> {
        let entries = self.signature_entries(lock_hash);
        let dummy_signatures = entries
            .iter()
            .map(|_| Bytes::from(vec![0u8; SIGNATURE_SIZE]))
            .collect();
        let sealed_tx = self.seal(&entries, dummy_signatures)?;
        Ok(sealed_tx.transaction.as_slice().len() + 4)
    }

    pub fn taken_outpoints(&self) -> Result<HashSet<OutPoint>> {
        let mut taken_outpoints = HashSet::with_capacity(self.inputs.len());
        for (index, input) in self.inputs().iter().enumerate() {
            if !taken_outpoints.insert(input.cell.out_point.clone()) {
                bail!("Duplicated input: {}, index: {}", input.cell.out_point, index);
            }
        }
        Ok(taken_outpoints)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gw_types::{
        core::ScriptHashType,
        offchain::CellInfo,
        packed::{CellDepBuilder, Script},
    };

    fn cell(lock: &Script, capacity: u64, index: u32) -> InputCellInfo {
        InputCellInfo::new(CellInfo {
            out_point: OutPoint::new_builder().index(index.pack()).build(),
            output: CellOutput::new_builder()
                .lock(lock.clone())
                .capacity(capacity.pack())
                .build(),
            data: Bytes::new(),
        })
    }

    fn lock(byte: u8) -> Script {
        Script::new_builder()
            .code_hash([byte; 32].pack())
            .hash_type(ScriptHashType::Type.into())
            .build()
    }

    #[test]
    fn test_cell_deps_are_deduplicated() {
        let mut tx_skeleton = TransactionSkeleton::default();
        let dep = CellDepBuilder::default()
            .out_point(OutPoint::new_builder().index(1u32.pack()).build())
            .build();
        assert!(tx_skeleton.add_cell_dep(dep.clone()));
        assert!(!tx_skeleton.add_cell_dep(dep));
        assert_eq!(tx_skeleton.cell_deps().len(), 1);
    }

    #[test]
    fn test_signature_entries_only_cover_signer_inputs() {
        let signer = lock(1);
        let other = lock(2);
        let mut tx_skeleton = TransactionSkeleton::default();
        tx_skeleton.inputs_mut().push(cell(&other, 100, 0));
        tx_skeleton.inputs_mut().push(cell(&signer, 100, 1));
        tx_skeleton.inputs_mut().push(cell(&signer, 100, 2));

        let lock_hash = signer.hash();
        let entries = tx_skeleton.signature_entries(&lock_hash);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].indexes, vec![1, 2]);

        let sealed = tx_skeleton
            .seal(&entries, vec![Bytes::from(vec![1u8; SIGNATURE_SIZE])])
            .unwrap();
        let witnesses = sealed.transaction.witnesses();
        assert_eq!(witnesses.len(), 3);
        let signed = WitnessArgs::from_slice(&witnesses.get(1).unwrap().raw_data()).unwrap();
        assert!(signed.lock().to_opt().is_some());
        let unsigned = WitnessArgs::from_slice(&witnesses.get(0).unwrap().raw_data()).unwrap();
        assert!(unsigned.lock().to_opt().is_none());
    }

    #[test]
    fn test_fee_and_duplicated_inputs() {
        let signer = lock(1);
        let mut tx_skeleton = TransactionSkeleton::default();
        tx_skeleton.inputs_mut().push(cell(&signer, 1000, 0));
        tx_skeleton.outputs_mut().push((
            CellOutput::new_builder()
                .lock(signer.clone())
                .capacity(900u64.pack())
                .build(),
            Bytes::new(),
        ));
        assert_eq!(tx_skeleton.calculate_fee().unwrap(), 100);
        assert_eq!(tx_skeleton.taken_outpoints().unwrap().len(), 1);

        tx_skeleton.inputs_mut().push(cell(&signer, 1000, 0));
        assert!(tx_skeleton.taken_outpoints().is_err());
    }

    #[test]
    fn test_empty_witness_is_kept_and_signable() {
        let signer = lock(1);
        let other = lock(2);
        let mut tx_skeleton = TransactionSkeleton::default();
        tx_skeleton.inputs_mut().push(cell(&other, 100, 0));
        tx_skeleton.witnesses_mut().push(Bytes::new());
        tx_skeleton.inputs_mut().push(cell(&signer, 100, 1));
        tx_skeleton.witnesses_mut().push(Bytes::new());

        let entries = tx_skeleton.signature_entries(&signer.hash());
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].indexes, vec![1]);

        let sealed = tx_skeleton
            .seal(&entries, vec![Bytes::from(vec![1u8; SIGNATURE_SIZE])])
            .unwrap();
        let witnesses = sealed.transaction.witnesses();
        assert!(witnesses.get(0).unwrap().raw_data().is_empty());
        let signed = WitnessArgs::from_slice(&witnesses.get(1).unwrap().raw_data()).unwrap();
        assert_eq!(
            signed.lock().to_opt().unwrap().raw_data(),
            Bytes::from(vec![1u8; SIGNATURE_SIZE])
        );
    }
}
