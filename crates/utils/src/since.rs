use gw_types::core::{EpochNumberWithFraction, HeaderView};
use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SinceError {
    #[error("invalid since flags: {0:#x}")]
    InvalidFlags(u64),
}

/// Transaction input's since field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Since(u64);

impl Since {
    const LOCK_TYPE_FLAG: u64 = 1 << 63;
    const METRIC_TYPE_FLAG_MASK: u64 = 0x6000_0000_0000_0000;
    const VALUE_MASK: u64 = 0x00ff_ffff_ffff_ffff;
    const REMAIN_FLAGS_BITS: u64 = 0x1f00_0000_0000_0000;
    const LOCK_BY_BLOCK_NUMBER_MASK: u64 = 0x0000_0000_0000_0000;
    const LOCK_BY_EPOCH_MASK: u64 = 0x2000_0000_0000_0000;
    const LOCK_BY_TIMESTAMP_MASK: u64 = 0x4000_0000_0000_0000;

    pub fn new(v: u64) -> Self {
        Since(v)
    }

    pub fn as_u64(self) -> u64 {
        self.0
    }

    pub fn is_absolute(self) -> bool {
        self.0 & Self::LOCK_TYPE_FLAG == 0
    }

    #[inline]
    pub fn is_relative(self) -> bool {
        !self.is_absolute()
    }

    pub fn flags_is_valid(self) -> bool {
        (self.0 & Self::REMAIN_FLAGS_BITS == 0)
            && ((self.0 & Self::METRIC_TYPE_FLAG_MASK) != Self::METRIC_TYPE_FLAG_MASK)
    }

    pub fn extract_lock_value(self) -> Option<LockValue> {
        let value = self.0 & Self::VALUE_MASK;
        match self.0 & Self::METRIC_TYPE_FLAG_MASK {
            //0b0000_0000
            Self::LOCK_BY_BLOCK_NUMBER_MASK => Some(LockValue::BlockNumber(value)),
            //0b0010_0000
            Self::LOCK_BY_EPOCH_MASK => Some(LockValue::Epoch(normalize_epoch(value))),
            //0b0100_0000
            Self::LOCK_BY_TIMESTAMP_MASK => Some(LockValue::Timestamp(value * 1000)),
            _ => None,
        }
    }

    /// Whether the time lock has passed at `tip` for a cell committed in
    /// `cell_header`. Timestamps compare header timestamps in milliseconds.
    pub fn is_elapsed(self, cell_header: &HeaderView, tip: &HeaderView) -> Result<bool, SinceError> {
        if !self.flags_is_valid() {
            return Err(SinceError::InvalidFlags(self.0));
        }
        let lock_value = self
            .extract_lock_value()
            .ok_or(SinceError::InvalidFlags(self.0))?;

        let elapsed = if self.is_absolute() {
            match lock_value {
                LockValue::BlockNumber(number) => tip.number() >= number,
                LockValue::Epoch(epoch) => tip.epoch().to_rational() >= epoch.to_rational(),
                LockValue::Timestamp(timestamp) => tip.timestamp() >= timestamp,
            }
        } else {
            match lock_value {
                LockValue::BlockNumber(number) => {
                    tip.number() >= cell_header.number().saturating_add(number)
                }
                LockValue::Epoch(epoch) => {
                    tip.epoch().to_rational()
                        >= cell_header.epoch().to_rational() + epoch.to_rational()
                }
                LockValue::Timestamp(timestamp) => {
                    tip.timestamp() >= cell_header.timestamp().saturating_add(timestamp)
                }
            }
        };
        Ok(elapsed)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockValue {
    BlockNumber(u64),
    Epoch(EpochNumberWithFraction),
    /// Milliseconds.
    Timestamp(u64),
}

// A zero epoch length would divide by zero in `to_rational`.
fn normalize_epoch(value: u64) -> EpochNumberWithFraction {
    let epoch = EpochNumberWithFraction::from_full_value(value);
    if epoch.length() == 0 {
        EpochNumberWithFraction::new(epoch.number(), 0, 1)
    } else {
        epoch
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gw_types::{core::HeaderBuilder, prelude::*};

    fn header(number: u64, epoch: EpochNumberWithFraction, timestamp: u64) -> HeaderView {
        HeaderBuilder::default()
            .number(number.pack())
            .epoch(epoch.full_value().pack())
            .timestamp(timestamp.pack())
            .build()
    }

    const RELATIVE: u64 = 1 << 63;

    #[test]
    fn test_absolute_block_number() {
        let epoch = EpochNumberWithFraction::new(1, 0, 10);
        let cell = header(10, epoch, 0);
        assert!(!Since::new(100).is_elapsed(&cell, &header(99, epoch, 0)).unwrap());
        assert!(Since::new(100).is_elapsed(&cell, &header(100, epoch, 0)).unwrap());
        // zero timeout is always elapsed
        assert!(Since::new(0).is_elapsed(&cell, &header(0, epoch, 0)).unwrap());
    }

    #[test]
    fn test_relative_block_number() {
        let epoch = EpochNumberWithFraction::new(1, 0, 10);
        let cell = header(10, epoch, 0);
        let since = Since::new(RELATIVE | 100);
        assert!(!since.is_elapsed(&cell, &header(109, epoch, 0)).unwrap());
        assert!(since.is_elapsed(&cell, &header(110, epoch, 0)).unwrap());
    }

    #[test]
    fn test_relative_epoch() {
        let cell = header(10, EpochNumberWithFraction::new(5, 1, 2), 0);
        // wait half an epoch
        let since = Since::new(
            RELATIVE | 0x2000_0000_0000_0000 | EpochNumberWithFraction::new(0, 1, 2).full_value(),
        );
        let before = header(11, EpochNumberWithFraction::new(5, 1, 3), 0);
        let after = header(12, EpochNumberWithFraction::new(6, 0, 10), 0);
        assert!(!since.is_elapsed(&cell, &before).unwrap());
        assert!(since.is_elapsed(&cell, &after).unwrap());
    }

    #[test]
    fn test_relative_timestamp() {
        let epoch = EpochNumberWithFraction::new(1, 0, 10);
        let cell = header(10, epoch, 1_000_000);
        // 60 seconds
        let since = Since::new(RELATIVE | 0x4000_0000_0000_0000 | 60);
        assert!(!since.is_elapsed(&cell, &header(11, epoch, 1_059_999)).unwrap());
        assert!(since.is_elapsed(&cell, &header(11, epoch, 1_060_000)).unwrap());
    }

    #[test]
    fn test_invalid_flags() {
        let epoch = EpochNumberWithFraction::new(1, 0, 10);
        let cell = header(10, epoch, 0);
        let since = Since::new(0x6000_0000_0000_0000);
        assert_eq!(
            since.is_elapsed(&cell, &cell),
            Err(SinceError::InvalidFlags(0x6000_0000_0000_0000))
        );
        assert!(Since::new(0x0100_0000_0000_0000)
            .is_elapsed(&cell, &cell)
            .is_err());
    }
}
