pub mod ckb_client;
pub mod collector;
pub mod error;
pub mod indexer_client;
pub mod indexer_types;
pub mod rpc_client;
pub mod traits;
pub mod utils;
