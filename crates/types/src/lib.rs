mod conversion;
pub mod error;
mod extension;
mod generated;
pub mod godwoken;
pub mod normalize;
pub mod offchain;

pub use ckb_fixed_hash::H256;
pub use ckb_types::{bytes, core};

/// Base-chain entities from ckb-types and the rollup entities generated
/// from `schemas/godwoken.mol`.
pub mod packed {
    pub use crate::generated::packed::*;
    pub use ckb_types::packed::*;
}

pub mod prelude {
    pub use crate::extension::ScriptExt;
    pub use ckb_types::prelude::*;
}
pub use error::CodecError;
