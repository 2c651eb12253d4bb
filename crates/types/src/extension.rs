use crate::{packed::Script, prelude::*, H256};

pub trait ScriptExt {
    /// Blake2b hash of the serialized script.
    fn hash(&self) -> [u8; 32];
}

impl ScriptExt for Script {
    fn hash(&self) -> [u8; 32] {
        let hash: H256 = self.calc_script_hash().unpack();
        hash.0
    }
}
