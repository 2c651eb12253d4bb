use crate::{
    bytes::Bytes,
    godwoken::{
        CustodianLockArgs, DepositionLockArgs, DepositionRequest, HeaderInfo, RawL2Block,
        RawWithdrawalRequest, WithdrawalLockArgs, WithdrawalRequest, SIGNATURE_SIZE,
    },
    packed,
    prelude::*,
};

fn unpack_byte32(reader: packed::Byte32Reader) -> [u8; 32] {
    let mut buf = [0u8; 32];
    buf.copy_from_slice(reader.raw_data());
    buf
}

fn pack_u128(value: u128) -> packed::Uint128 {
    packed::Uint128::new_unchecked(Bytes::from(value.to_le_bytes().to_vec()))
}

fn unpack_u128(reader: packed::Uint128Reader) -> u128 {
    let mut buf = [0u8; 16];
    buf.copy_from_slice(reader.raw_data());
    u128::from_le_bytes(buf)
}

impl Pack<packed::Signature> for [u8; SIGNATURE_SIZE] {
    fn pack(&self) -> packed::Signature {
        packed::Signature::new_unchecked(Bytes::copy_from_slice(&self[..]))
    }
}

impl<'r> Unpack<[u8; SIGNATURE_SIZE]> for packed::SignatureReader<'r> {
    fn unpack(&self) -> [u8; SIGNATURE_SIZE] {
        let mut buf = [0u8; SIGNATURE_SIZE];
        buf.copy_from_slice(self.raw_data());
        buf
    }
}

impl Pack<packed::HeaderInfo> for HeaderInfo {
    fn pack(&self) -> packed::HeaderInfo {
        packed::HeaderInfo::new_builder()
            .number(self.number.pack())
            .block_hash(self.block_hash.pack())
            .build()
    }
}

impl<'r> Unpack<HeaderInfo> for packed::HeaderInfoReader<'r> {
    fn unpack(&self) -> HeaderInfo {
        HeaderInfo {
            number: self.number().unpack(),
            block_hash: unpack_byte32(self.block_hash()),
        }
    }
}

impl Pack<packed::DepositionLockArgs> for DepositionLockArgs {
    fn pack(&self) -> packed::DepositionLockArgs {
        packed::DepositionLockArgs::new_builder()
            .owner_lock_hash(self.owner_lock_hash.pack())
            .layer2_lock(self.layer2_lock.clone())
            .cancel_timeout(self.cancel_timeout.pack())
            .build()
    }
}

impl<'r> Unpack<DepositionLockArgs> for packed::DepositionLockArgsReader<'r> {
    fn unpack(&self) -> DepositionLockArgs {
        DepositionLockArgs {
            owner_lock_hash: unpack_byte32(self.owner_lock_hash()),
            layer2_lock: self.layer2_lock().to_entity(),
            cancel_timeout: self.cancel_timeout().unpack(),
        }
    }
}

impl Pack<packed::CustodianLockArgs> for CustodianLockArgs {
    fn pack(&self) -> packed::CustodianLockArgs {
        packed::CustodianLockArgs::new_builder()
            .deposition_lock_args(self.deposition_lock_args.pack())
            .deposition_block_hash(self.deposition_block_hash.pack())
            .deposition_block_number(self.deposition_block_number.pack())
            .build()
    }
}

impl<'r> Unpack<CustodianLockArgs> for packed::CustodianLockArgsReader<'r> {
    fn unpack(&self) -> CustodianLockArgs {
        CustodianLockArgs {
            deposition_lock_args: self.deposition_lock_args().unpack(),
            deposition_block_hash: unpack_byte32(self.deposition_block_hash()),
            deposition_block_number: self.deposition_block_number().unpack(),
        }
    }
}

impl Pack<packed::WithdrawalLockArgs> for WithdrawalLockArgs {
    fn pack(&self) -> packed::WithdrawalLockArgs {
        packed::WithdrawalLockArgs::new_builder()
            .deposition_block_hash(self.deposition_block_hash.pack())
            .deposition_block_number(self.deposition_block_number.pack())
            .withdrawal_block_hash(self.withdrawal_block_hash.pack())
            .withdrawal_block_number(self.withdrawal_block_number.pack())
            .sudt_script_hash(self.sudt_script_hash.pack())
            .sell_amount(pack_u128(self.sell_amount))
            .sell_capacity(self.sell_capacity.pack())
            .owner_lock_hash(self.owner_lock_hash.pack())
            .payment_lock_hash(self.payment_lock_hash.pack())
            .build()
    }
}

impl<'r> Unpack<WithdrawalLockArgs> for packed::WithdrawalLockArgsReader<'r> {
    fn unpack(&self) -> WithdrawalLockArgs {
        WithdrawalLockArgs {
            deposition_block_hash: unpack_byte32(self.deposition_block_hash()),
            deposition_block_number: self.deposition_block_number().unpack(),
            withdrawal_block_hash: unpack_byte32(self.withdrawal_block_hash()),
            withdrawal_block_number: self.withdrawal_block_number().unpack(),
            sudt_script_hash: unpack_byte32(self.sudt_script_hash()),
            sell_amount: unpack_u128(self.sell_amount()),
            sell_capacity: self.sell_capacity().unpack(),
            owner_lock_hash: unpack_byte32(self.owner_lock_hash()),
            payment_lock_hash: unpack_byte32(self.payment_lock_hash()),
        }
    }
}

impl Pack<packed::DepositionRequest> for DepositionRequest {
    fn pack(&self) -> packed::DepositionRequest {
        packed::DepositionRequest::new_builder()
            .layer2_lock(self.layer2_lock.clone())
            .sudt_script(self.sudt_script.clone())
            .amount(pack_u128(self.amount))
            .build()
    }
}

impl<'r> Unpack<DepositionRequest> for packed::DepositionRequestReader<'r> {
    fn unpack(&self) -> DepositionRequest {
        DepositionRequest {
            layer2_lock: self.layer2_lock().to_entity(),
            sudt_script: self.sudt_script().to_entity(),
            amount: unpack_u128(self.amount()),
        }
    }
}

impl Pack<packed::RawWithdrawalRequest> for RawWithdrawalRequest {
    fn pack(&self) -> packed::RawWithdrawalRequest {
        packed::RawWithdrawalRequest::new_builder()
            .nonce(self.nonce.pack())
            .capacity(self.capacity.pack())
            .amount(pack_u128(self.amount))
            .sudt_script_hash(self.sudt_script_hash.pack())
            .account_script_hash(self.account_script_hash.pack())
            .sell_amount(pack_u128(self.sell_amount))
            .sell_capacity(self.sell_capacity.pack())
            .owner_lock_hash(self.owner_lock_hash.pack())
            .payment_lock_hash(self.payment_lock_hash.pack())
            .build()
    }
}

impl<'r> Unpack<RawWithdrawalRequest> for packed::RawWithdrawalRequestReader<'r> {
    fn unpack(&self) -> RawWithdrawalRequest {
        RawWithdrawalRequest {
            nonce: self.nonce().unpack(),
            capacity: self.capacity().unpack(),
            amount: unpack_u128(self.amount()),
            sudt_script_hash: unpack_byte32(self.sudt_script_hash()),
            account_script_hash: unpack_byte32(self.account_script_hash()),
            sell_amount: unpack_u128(self.sell_amount()),
            sell_capacity: self.sell_capacity().unpack(),
            owner_lock_hash: unpack_byte32(self.owner_lock_hash()),
            payment_lock_hash: unpack_byte32(self.payment_lock_hash()),
        }
    }
}

impl Pack<packed::WithdrawalRequest> for WithdrawalRequest {
    fn pack(&self) -> packed::WithdrawalRequest {
        packed::WithdrawalRequest::new_builder()
            .raw(self.raw.pack())
            .signature(self.signature.pack())
            .build()
    }
}

impl<'r> Unpack<WithdrawalRequest> for packed::WithdrawalRequestReader<'r> {
    fn unpack(&self) -> WithdrawalRequest {
        WithdrawalRequest {
            raw: self.raw().unpack(),
            signature: self.signature().unpack(),
        }
    }
}

impl Pack<packed::RawL2Block> for RawL2Block {
    fn pack(&self) -> packed::RawL2Block {
        packed::RawL2Block::new_builder()
            .number(self.number.pack())
            .aggregator_id(self.aggregator_id.pack())
            .timestamp(self.timestamp.pack())
            .build()
    }
}

impl<'r> Unpack<RawL2Block> for packed::RawL2BlockReader<'r> {
    fn unpack(&self) -> RawL2Block {
        RawL2Block {
            number: self.number().unpack(),
            aggregator_id: self.aggregator_id().unpack(),
            timestamp: self.timestamp().unpack(),
        }
    }
}
