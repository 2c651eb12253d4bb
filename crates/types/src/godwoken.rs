//! Rollup structures stored in cell lock args, witnesses and layer2 blocks.
//!
//! The binary layout is defined by `schemas/godwoken.mol`, the packed
//! entities live in [`crate::packed`]. The types here are their owned
//! counterparts used by the runner.

use molecule::error::VerificationResult;

use crate::{
    bytes::Bytes,
    core::ScriptHashType,
    error::CodecError,
    packed::{self, Script},
    prelude::*,
};

/// Lock args of every rollup lock start with the rollup type hash.
pub const ROLLUP_TYPE_HASH_SIZE: usize = 32;
pub const SIGNATURE_SIZE: usize = 65;

/// Binary (de)serialization of a rollup structure.
pub trait RollupEntity: Sized {
    type Packed: Entity;

    /// Field path reported by decoding errors.
    const NAME: &'static str;

    fn to_packed(&self) -> Self::Packed;

    fn verify_and_unpack(slice: &[u8]) -> VerificationResult<Self>;

    fn to_bytes(&self) -> Bytes {
        self.to_packed().as_bytes()
    }

    /// Decode, accepting trailing table fields of newer writers.
    fn from_slice(slice: &[u8]) -> Result<Self, CodecError> {
        Self::verify_and_unpack(slice).map_err(|source| CodecError::molecule(Self::NAME, source))
    }
}

macro_rules! impl_rollup_entity {
    ($type:ident, $reader:ident, $name:expr) => {
        impl RollupEntity for $type {
            type Packed = packed::$type;
            const NAME: &'static str = $name;

            fn to_packed(&self) -> Self::Packed {
                self.pack()
            }

            fn verify_and_unpack(slice: &[u8]) -> VerificationResult<Self> {
                packed::$reader::from_compatible_slice(slice).map(|reader| reader.unpack())
            }
        }
    };
}

/// `rollup_type_hash ++ serialize(args)`
pub fn pack_lock_args<T: RollupEntity>(rollup_type_hash: &[u8; 32], args: &T) -> Bytes {
    let packed = args.to_bytes();
    let mut buf = Vec::with_capacity(ROLLUP_TYPE_HASH_SIZE + packed.len());
    buf.extend_from_slice(rollup_type_hash);
    buf.extend_from_slice(&packed);
    Bytes::from(buf)
}

/// Split lock args into the rollup type hash prefix and the remaining bytes.
pub fn split_rollup_prefix<'a>(
    args: &'a [u8],
    path: &str,
) -> Result<([u8; 32], &'a [u8]), CodecError> {
    if args.len() < ROLLUP_TYPE_HASH_SIZE {
        return Err(CodecError::TooShort {
            path: path.to_string(),
            expected: ROLLUP_TYPE_HASH_SIZE,
            actual: args.len(),
        });
    }
    let (prefix, rest) = args.split_at(ROLLUP_TYPE_HASH_SIZE);
    let mut rollup_type_hash = [0u8; 32];
    rollup_type_hash.copy_from_slice(prefix);
    Ok((rollup_type_hash, rest))
}

pub fn unpack_lock_args<T: RollupEntity>(args: &[u8]) -> Result<([u8; 32], T), CodecError> {
    let (rollup_type_hash, rest) = split_rollup_prefix(args, "lock.args")?;
    let args = T::from_slice(rest)?;
    Ok((rollup_type_hash, args))
}

/// The script used when a cell carries no token type: zero code hash,
/// data hash type, empty args.
pub fn zero_script() -> Script {
    Script::new_builder()
        .code_hash([0u8; 32].pack())
        .hash_type(ScriptHashType::Data.into())
        .args(Bytes::new().pack())
        .build()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepositionLockArgs {
    pub owner_lock_hash: [u8; 32],
    pub layer2_lock: Script,
    pub cancel_timeout: u64,
}

impl Default for DepositionLockArgs {
    fn default() -> Self {
        DepositionLockArgs {
            owner_lock_hash: [0u8; 32],
            layer2_lock: Script::new_builder()
                .code_hash([0u8; 32].pack())
                .hash_type(ScriptHashType::Type.into())
                .args(Bytes::new().pack())
                .build(),
            cancel_timeout: 0,
        }
    }
}

impl_rollup_entity!(
    DepositionLockArgs,
    DepositionLockArgsReader,
    "deposition_lock_args"
);

/// Lock args of a custodian cell. The default value is the placeholder
/// used for change cells: zero owner, empty layer2 lock and zero
/// provenance.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CustodianLockArgs {
    pub deposition_lock_args: DepositionLockArgs,
    pub deposition_block_hash: [u8; 32],
    pub deposition_block_number: u64,
}

impl_rollup_entity!(
    CustodianLockArgs,
    CustodianLockArgsReader,
    "custodian_lock_args"
);

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WithdrawalLockArgs {
    pub deposition_block_hash: [u8; 32],
    pub deposition_block_number: u64,
    pub withdrawal_block_hash: [u8; 32],
    pub withdrawal_block_number: u64,
    pub sudt_script_hash: [u8; 32],
    pub sell_amount: u128,
    pub sell_capacity: u64,
    pub owner_lock_hash: [u8; 32],
    pub payment_lock_hash: [u8; 32],
}

impl_rollup_entity!(
    WithdrawalLockArgs,
    WithdrawalLockArgsReader,
    "withdrawal_lock_args"
);

/// Number and hash of a base-chain block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HeaderInfo {
    pub number: u64,
    pub block_hash: [u8; 32],
}

impl_rollup_entity!(HeaderInfo, HeaderInfoReader, "header_info");

/// A request to credit `amount` of a token to a layer2 account.
///
/// `sudt_script` is [`zero_script`] for the native coin, in which case
/// `amount` is the cell capacity in shannons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepositionRequest {
    pub layer2_lock: Script,
    pub sudt_script: Script,
    pub amount: u128,
}

impl DepositionRequest {
    pub fn is_native(&self) -> bool {
        self.sudt_script.as_slice() == zero_script().as_slice()
    }
}

impl_rollup_entity!(
    DepositionRequest,
    DepositionRequestReader,
    "deposition_request"
);

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawWithdrawalRequest {
    pub nonce: u32,
    pub capacity: u64,
    pub amount: u128,
    pub sudt_script_hash: [u8; 32],
    pub account_script_hash: [u8; 32],
    pub sell_amount: u128,
    pub sell_capacity: u64,
    pub owner_lock_hash: [u8; 32],
    pub payment_lock_hash: [u8; 32],
}

impl RawWithdrawalRequest {
    /// Native coin withdrawals carry an all-zero token hash.
    pub fn is_native(&self) -> bool {
        self.sudt_script_hash == [0u8; 32]
    }
}

impl_rollup_entity!(
    RawWithdrawalRequest,
    RawWithdrawalRequestReader,
    "raw_withdrawal_request"
);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WithdrawalRequest {
    pub raw: RawWithdrawalRequest,
    pub signature: [u8; SIGNATURE_SIZE],
}

impl_rollup_entity!(
    WithdrawalRequest,
    WithdrawalRequestReader,
    "withdrawal_request"
);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RawL2Block {
    pub number: u64,
    pub aggregator_id: u32,
    pub timestamp: u64,
}

impl_rollup_entity!(RawL2Block, RawL2BlockReader, "raw_l2block");

/// A layer2 block as produced by the state machine.
///
/// Only the raw header and the withdrawal requests are interpreted, the
/// remaining fields are carried through untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct L2Block {
    raw: RawL2Block,
    hash: [u8; 32],
    withdrawal_requests: Vec<WithdrawalRequest>,
    bytes: Bytes,
}

impl L2Block {
    /// Build a block with empty state, transaction and proof fields.
    pub fn new(raw: RawL2Block, withdrawal_requests: Vec<WithdrawalRequest>) -> Self {
        let block = packed::L2Block::new_builder()
            .raw(raw.pack())
            .withdrawal_requests(
                packed::WithdrawalRequestVec::new_builder()
                    .extend(withdrawal_requests.iter().map(|request| request.pack()))
                    .build(),
            )
            .build();
        L2Block {
            raw,
            hash: ckb_hash::blake2b_256(block.raw().as_slice()),
            withdrawal_requests,
            bytes: block.as_bytes(),
        }
    }

    pub fn raw(&self) -> &RawL2Block {
        &self.raw
    }

    pub fn number(&self) -> u64 {
        self.raw.number
    }

    /// Blake2b hash of the serialized raw block.
    pub fn hash(&self) -> [u8; 32] {
        self.hash
    }

    pub fn withdrawal_requests(&self) -> &[WithdrawalRequest] {
        &self.withdrawal_requests
    }

    pub fn as_bytes(&self) -> Bytes {
        self.bytes.clone()
    }
}

impl RollupEntity for L2Block {
    type Packed = packed::L2Block;
    const NAME: &'static str = "l2block";

    fn to_packed(&self) -> Self::Packed {
        packed::L2Block::new_unchecked(self.bytes.clone())
    }

    fn verify_and_unpack(slice: &[u8]) -> VerificationResult<Self> {
        let reader = packed::L2BlockReader::from_compatible_slice(slice)?;
        Ok(L2Block {
            raw: reader.raw().unpack(),
            hash: ckb_hash::blake2b_256(reader.raw().as_slice()),
            withdrawal_requests: reader
                .withdrawal_requests()
                .iter()
                .map(|request| request.unpack())
                .collect(),
            bytes: Bytes::copy_from_slice(slice),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layer2_lock() -> Script {
        Script::new_builder()
            .code_hash([7u8; 32].pack())
            .hash_type(ScriptHashType::Type.into())
            .args(Bytes::from(vec![1u8; 20]).pack())
            .build()
    }

    #[test]
    fn test_custodian_lock_args_round_trip() {
        let args = CustodianLockArgs {
            deposition_lock_args: DepositionLockArgs {
                owner_lock_hash: [3u8; 32],
                layer2_lock: layer2_lock(),
                cancel_timeout: 0xc000_0000_0000_0064,
            },
            deposition_block_hash: [9u8; 32],
            deposition_block_number: 42,
        };
        let rollup_type_hash = [5u8; 32];
        let packed = pack_lock_args(&rollup_type_hash, &args);
        assert_eq!(&packed[..32], &rollup_type_hash);

        let (prefix, decoded) = unpack_lock_args::<CustodianLockArgs>(&packed).unwrap();
        assert_eq!(prefix, rollup_type_hash);
        assert_eq!(decoded, args);
    }

    #[test]
    fn test_withdrawal_lock_args_layout() {
        let args = WithdrawalLockArgs {
            deposition_block_number: 1,
            withdrawal_block_number: 2,
            sell_amount: 3,
            sell_capacity: 4,
            ..Default::default()
        };
        let packed = args.to_bytes();
        assert_eq!(packed.len(), packed::WithdrawalLockArgs::TOTAL_SIZE);
        // deposition_block_number follows the 32 bytes hash
        assert_eq!(&packed[32..40], &1u64.to_le_bytes());
        assert_eq!(WithdrawalLockArgs::from_slice(&packed).unwrap(), args);
    }

    #[test]
    fn test_short_lock_args() {
        let err = unpack_lock_args::<CustodianLockArgs>(&[0u8; 31]).unwrap_err();
        assert!(matches!(
            err,
            CodecError::TooShort {
                expected: 32,
                actual: 31,
                ..
            }
        ));
        assert_eq!(err.path(), "lock.args");
    }

    #[test]
    fn test_truncated_field_is_rejected() {
        let args = DepositionLockArgs::default().to_packed();
        // a 31 bytes owner hash keeps the table header consistent
        let broken = packed::DepositionLockArgs::new_builder()
            .owner_lock_hash(packed::Byte32::new_unchecked(Bytes::from(vec![0u8; 31])))
            .layer2_lock(args.layer2_lock())
            .cancel_timeout(args.cancel_timeout())
            .build();
        let err = DepositionLockArgs::from_slice(broken.as_slice()).unwrap_err();
        assert_eq!(err.path(), "deposition_lock_args");
        match err {
            CodecError::Molecule { source, .. } => {
                assert!(source.to_string().contains("Byte32"), "{}", source)
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_extra_table_fields_are_accepted() {
        let args = CustodianLockArgs {
            deposition_block_number: 9,
            ..Default::default()
        }
        .to_packed();
        let fields = [
            args.deposition_lock_args().as_bytes(),
            args.deposition_block_hash().as_bytes(),
            args.deposition_block_number().as_bytes(),
            Bytes::from(vec![1u8, 2, 3]),
        ];
        let header_size = 4 * (fields.len() + 1);
        let total_size = header_size + fields.iter().map(|f| f.len()).sum::<usize>();
        let mut buf = (total_size as u32).to_le_bytes().to_vec();
        let mut offset = header_size;
        for field in &fields {
            buf.extend_from_slice(&(offset as u32).to_le_bytes());
            offset += field.len();
        }
        for field in &fields {
            buf.extend_from_slice(field);
        }
        let decoded = CustodianLockArgs::from_slice(&buf).unwrap();
        assert_eq!(decoded.deposition_block_number, 9);
    }

    #[test]
    fn test_default_custodian_args_are_zeroed() {
        let args = CustodianLockArgs::default();
        assert_eq!(args.deposition_block_hash, [0u8; 32]);
        assert_eq!(args.deposition_block_number, 0);
        let lock = &args.deposition_lock_args.layer2_lock;
        assert_eq!(lock.code_hash().as_slice(), &[0u8; 32]);
        assert_eq!(u8::from(lock.hash_type()), ScriptHashType::Type as u8);
        assert!(lock.args().raw_data().is_empty());
    }

    #[test]
    fn test_l2block_withdrawals() {
        let request = WithdrawalRequest {
            raw: RawWithdrawalRequest {
                nonce: 1,
                capacity: 500_00000000,
                sudt_script_hash: [8u8; 32],
                amount: 10,
                ..Default::default()
            },
            signature: [1u8; SIGNATURE_SIZE],
        };
        let raw = RawL2Block {
            number: 7,
            ..Default::default()
        };
        let block = L2Block::new(raw, vec![request.clone()]);
        let decoded = L2Block::from_slice(&block.as_bytes()).unwrap();
        assert_eq!(decoded.number(), 7);
        assert_eq!(decoded.hash(), ckb_hash::blake2b_256(&raw.to_bytes()));
        assert_eq!(decoded.withdrawal_requests(), &[request]);
    }
}
