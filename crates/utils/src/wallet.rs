use std::path::Path;

use anyhow::{anyhow, ensure, Context, Result};
use ckb_crypto::secp::Privkey;
use ckb_hash::new_blake2b;
use faster_hex::hex_decode;
use gw_config::WalletConfig;
use gw_types::{
    bytes::Bytes,
    core::ScriptHashType,
    packed::{Script, Transaction},
    prelude::*,
};

use crate::transaction_skeleton::{TransactionSkeleton, SIGNATURE_SIZE};

/// Code hash of the secp256k1-blake160 sighash-all lock.
pub const SIGHASH_TYPE_HASH: [u8; 32] = [
    0x9b, 0xd7, 0xe0, 0x6f, 0x3e, 0xcf, 0x4b, 0xe0,
    0xf2, 0xfc, 0xd2, 0x18, 0x8b, 0x23, 0xf1, 0xb9,
    0xfc, 0xc8, 0x8e, 0x5d, 0x4b, 0x65, 0xa8, 0x63,
    0x7b, 0x17, 0x72, 0x3b, 0xbd, 0xa3, 0xcc, 0xe8,
];

/// The aggregator's secp256k1 key and its sighash-all lock.
pub struct Wallet {
    privkey: Privkey,
    lock: Script,
    lock_hash: [u8; 32],
}

impl TryFrom<Privkey> for Wallet {
    type Error = ckb_crypto::secp::Error;

    fn try_from(privkey: Privkey) -> Result<Self, Self::Error> {
        let pk = privkey.pubkey()?.serialize();
        let pk160 = &ckb_hash::blake2b_256(&pk)[..20];
        let lock = Script::new_builder()
            .code_hash(SIGHASH_TYPE_HASH.pack())
            .hash_type(ScriptHashType::Type.into())
            .args(Bytes::copy_from_slice(pk160).pack())
            .build();
        Ok(Self::new(privkey, lock))
    }
}

impl Wallet {
    pub fn new(privkey: Privkey, lock: Script) -> Self {
        let lock_hash = lock.hash();
        Wallet {
            privkey,
            lock,
            lock_hash,
        }
    }

    pub fn from_privkey_path(p: &Path) -> Result<Self> {
        let privkey = {
            let content = std::fs::read_to_string(p).context("read wallet privkey")?;
            let content = content.trim().trim_start_matches("0x");
            ensure!(content.as_bytes().len() == 64, "invalid privkey length");
            let mut decoded = [0u8; 32];
            hex_decode(content.as_bytes(), &mut decoded)?;
            Privkey::from_slice(&decoded)
        };
        let wallet = Self::try_from(privkey)?;
        Ok(wallet)
    }

    pub fn from_config(config: &WalletConfig) -> Result<Self> {
        Self::from_privkey_path(&config.privkey_path)
    }

    pub fn lock_script(&self) -> &Script {
        &self.lock
    }

    pub fn lock_hash(&self) -> &[u8; 32] {
        &self.lock_hash
    }

    // sign message
    pub fn sign_message(&self, msg: [u8; 32]) -> Result<[u8; SIGNATURE_SIZE]> {
        let signature = self
            .privkey
            .sign_recoverable(&msg.into())
            .map_err(|err| anyhow!("signing error: {}", err))?;
        let mut inner = [0u8; SIGNATURE_SIZE];
        inner.copy_from_slice(&signature.serialize());
        Ok(inner)
    }

    /// Sign every input locked by this wallet and seal the transaction.
    pub fn sign_tx_skeleton(
        &self,
        tx_skeleton: &TransactionSkeleton,
        min_fee_rate: u64,
    ) -> Result<Transaction> {
        let signature_entries = tx_skeleton.signature_entries(&self.lock_hash);
        let dummy_signatures = signature_entries
            .iter()
            .map(|_| Bytes::from(vec![0u8; SIGNATURE_SIZE]))
            .collect();

        // seal a dummy tx for calculation
        let tx = tx_skeleton
            .seal(&signature_entries, dummy_signatures)?
            .transaction;
        let tx_hash = ckb_hash::blake2b_256(tx.raw().as_slice());
        let witness = |index: usize| -> Result<Bytes> {
            let witness = tx
                .witnesses()
                .get(index)
                .ok_or_else(|| anyhow!("get witness {}", index))?;
            Ok(witness.raw_data())
        };

        let mut signatures = Vec::with_capacity(signature_entries.len());
        for entry in &signature_entries {
            let mut hasher = new_blake2b();
            // hash tx_hash
            hasher.update(&tx_hash);
            // hash the witnesses of the group, the first one with a zeroed lock
            for &index in &entry.indexes {
                let witness = witness(index)?;
                hasher.update(&(witness.len() as u64).to_le_bytes());
                hasher.update(&witness);
            }
            // hash witnesses which do not in any input group
            for index in tx.raw().inputs().len()..tx.witnesses().len() {
                let witness = witness(index)?;
                hasher.update(&(witness.len() as u64).to_le_bytes());
                hasher.update(&witness);
            }
            let mut message = [0u8; 32];
            hasher.finalize(&mut message);
            // sign tx
            let signature = self.sign_message(message)?;
            signatures.push(Bytes::from(signature.to_vec()));
        }
        // seal
        let sealed_tx = tx_skeleton.seal(&signature_entries, signatures)?;
        // check fee rate
        sealed_tx.check_fee_rate(min_fee_rate)?;
        Ok(sealed_tx.transaction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ckb_crypto::secp::Signature;
    use gw_types::{
        offchain::{CellInfo, InputCellInfo},
        packed::{CellOutput, OutPoint, WitnessArgs},
    };

    fn wallet() -> Wallet {
        let privkey = Privkey::from_slice(&[7u8; 32]);
        Wallet::try_from(privkey).unwrap()
    }

    #[test]
    fn test_wallet_lock() {
        let wallet = wallet();
        let lock = wallet.lock_script();
        assert_eq!(lock.args().raw_data().len(), 20);
        assert_eq!(lock.code_hash().as_slice(), &SIGHASH_TYPE_HASH);
        assert_eq!(wallet.lock_hash(), &lock.hash());
    }

    #[test]
    fn test_sign_tx_skeleton() {
        let wallet = wallet();
        let mut tx_skeleton = TransactionSkeleton::default();
        let cell = CellInfo {
            out_point: OutPoint::new_builder().index(0u32.pack()).build(),
            output: CellOutput::new_builder()
                .lock(wallet.lock_script().clone())
                .capacity(1000_00000000u64.pack())
                .build(),
            data: Bytes::new(),
        };
        tx_skeleton.inputs_mut().push(InputCellInfo::new(cell));
        tx_skeleton.outputs_mut().push((
            CellOutput::new_builder()
                .lock(wallet.lock_script().clone())
                .capacity(999_00000000u64.pack())
                .build(),
            Bytes::new(),
        ));

        let tx = wallet.sign_tx_skeleton(&tx_skeleton, 1000).unwrap();
        let witness = WitnessArgs::from_slice(&tx.witnesses().get(0).unwrap().raw_data()).unwrap();
        let signature: Bytes = witness.lock().to_opt().unwrap().raw_data();
        assert_eq!(signature.len(), SIGNATURE_SIZE);

        // recompute the signing message with a zeroed lock
        let zeroed = witness
            .as_builder()
            .lock(Some(Bytes::from(vec![0u8; SIGNATURE_SIZE])).pack())
            .build()
            .as_bytes();
        let mut hasher = new_blake2b();
        hasher.update(&ckb_hash::blake2b_256(tx.raw().as_slice()));
        hasher.update(&(zeroed.len() as u64).to_le_bytes());
        hasher.update(&zeroed);
        let mut message = [0u8; 32];
        hasher.finalize(&mut message);

        let pubkey = Signature::from_slice(&signature)
            .unwrap()
            .recover(&message.into())
            .unwrap();
        assert_eq!(
            &ckb_hash::blake2b_256(&pubkey.serialize())[..20],
            wallet.lock_script().args().raw_data().as_ref()
        );
    }
}
