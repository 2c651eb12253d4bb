#![allow(warnings)]
#![allow(unused_imports)]

// `blockchain.mol` types come from ckb-types
mod blockchain {
    pub use ckb_types::packed::*;
}

#[allow(clippy::all)]
mod godwoken;

pub mod packed {
    pub use super::godwoken::*;
}
