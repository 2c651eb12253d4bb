pub mod exponential_backoff;
pub mod fee;
pub mod since;
pub mod transaction_skeleton;
pub mod wallet;
