/// Blocks a custodian cell must be buried under before it can back withdrawals.
pub const FINALIZED_BLOCKS: u64 = 100;

/// Fee rate in shannons per KB.
pub const DEFAULT_FEE_RATE: u64 = 1000;
pub const DEFAULT_MAX_DEPOSITS_PER_BLOCK: usize = 20;
/// 400 CKB
pub const DEFAULT_MIN_DEPOSIT_CAPACITY: u64 = 400_00000000;
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 3000;

pub const DEFAULT_SYNC_MAX_RETRIES: u32 = 5;
pub const DEFAULT_SYNC_RETRY_BASE_MS: u64 = 500;
