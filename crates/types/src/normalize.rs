//! Normalization of hex encoded values coming from JSON boundaries.
//!
//! Numbers are big-endian `0x` quantities, fixed-size data must match
//! its length exactly. Errors carry the dotted path of the field.

use crate::{error::CodecError, godwoken::HeaderInfo};

fn decode_hex(path: &str, value: &str) -> Result<Vec<u8>, CodecError> {
    let hex = value.strip_prefix("0x").unwrap_or(value);
    let hex = if hex.len() % 2 == 1 {
        format!("0{}", hex)
    } else {
        hex.to_string()
    };
    let mut buf = vec![0u8; hex.len() / 2];
    faster_hex::hex_decode(hex.as_bytes(), &mut buf).map_err(|_| CodecError::InvalidHex {
        path: path.to_string(),
    })?;
    Ok(buf)
}

/// Parse a hex quantity that must fit in `width` bytes, returned as
/// little-endian bytes padded to `width`.
pub fn normalize_hex_number(path: &str, value: &str, width: usize) -> Result<Vec<u8>, CodecError> {
    let mut be = decode_hex(path, value)?;
    while be.len() > width && be.first() == Some(&0) {
        be.remove(0);
    }
    if be.len() > width {
        return Err(CodecError::Length {
            path: path.to_string(),
            expected: width,
            actual: be.len(),
        });
    }
    let mut le: Vec<u8> = be.into_iter().rev().collect();
    le.resize(width, 0);
    Ok(le)
}

pub fn normalize_u64(path: &str, value: &str) -> Result<u64, CodecError> {
    let le = normalize_hex_number(path, value, 8)?;
    let mut buf = [0u8; 8];
    buf.copy_from_slice(&le);
    Ok(u64::from_le_bytes(buf))
}

pub fn normalize_u128(path: &str, value: &str) -> Result<u128, CodecError> {
    let le = normalize_hex_number(path, value, 16)?;
    let mut buf = [0u8; 16];
    buf.copy_from_slice(&le);
    Ok(u128::from_le_bytes(buf))
}

/// Fixed-size raw data, e.g. a 32 bytes hash.
pub fn normalize_raw_data(path: &str, value: &str, len: usize) -> Result<Vec<u8>, CodecError> {
    let data = decode_hex(path, value)?;
    if data.len() != len {
        return Err(CodecError::Length {
            path: path.to_string(),
            expected: len,
            actual: data.len(),
        });
    }
    Ok(data)
}

pub fn normalize_byte32(path: &str, value: &str) -> Result<[u8; 32], CodecError> {
    let data = normalize_raw_data(path, value, 32)?;
    let mut buf = [0u8; 32];
    buf.copy_from_slice(&data);
    Ok(buf)
}

impl HeaderInfo {
    pub fn from_hex(number: &str, block_hash: &str) -> Result<Self, CodecError> {
        Ok(HeaderInfo {
            number: normalize_u64("header_info.number", number)?,
            block_hash: normalize_byte32("header_info.block_hash", block_hash)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_number() {
        assert_eq!(normalize_u64("n", "0x64").unwrap(), 100);
        assert_eq!(normalize_u64("n", "0x0").unwrap(), 0);
        assert_eq!(normalize_u128("n", "0x100").unwrap(), 256);
    }

    #[test]
    fn test_over_length_number() {
        let err = normalize_u64(
            "deposition_lock_args.cancel_timeout",
            "0x010000000000000000",
        )
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "deposition_lock_args.cancel_timeout is 9 bytes long, expected length is 8!"
        );
    }

    #[test]
    fn test_raw_data_length() {
        let err = HeaderInfo::from_hex("0x1", "0x1234").unwrap_err();
        assert_eq!(err.path(), "header_info.block_hash");

        let hash = format!("0x{}", "ab".repeat(32));
        let info = HeaderInfo::from_hex("0x10", &hash).unwrap();
        assert_eq!(info.number, 16);
        assert_eq!(info.block_hash, [0xab; 32]);
    }

    #[test]
    fn test_invalid_hex() {
        let err = normalize_u64("custodian_lock_args.deposition_block_number", "0xzz").unwrap_err();
        assert!(matches!(err, CodecError::InvalidHex { .. }));
    }
}
