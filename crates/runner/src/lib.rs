//! Layer1 side of a layer2 rollup: follows CKB, feeds rollup transactions
//! to the chain service and settles produced blocks back on CKB.

pub mod aggregator;
pub mod block_producer;
pub mod chain_service;
pub mod custodian;
pub mod deposition;
pub mod runner;
pub mod signer;
pub mod sync_l1;
pub mod trace;
pub mod traits;
pub mod types;
pub mod withdrawal;

#[cfg(test)]
mod testing_tools;
#[cfg(test)]
mod tests;
