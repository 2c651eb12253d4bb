use molecule::error::VerificationError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CodecError {
    #[error("{path} is {actual} bytes long, expected length is {expected}!")]
    Length {
        path: String,
        expected: usize,
        actual: usize,
    },
    #[error("{path} is {actual} bytes long, expected at least {expected} bytes")]
    TooShort {
        path: String,
        expected: usize,
        actual: usize,
    },
    #[error("{path} is not a valid hex string")]
    InvalidHex { path: String },
    #[error("{path} is malformed: {source}")]
    Molecule {
        path: String,
        #[source]
        source: VerificationError,
    },
}

impl CodecError {
    pub(crate) fn molecule(path: &str, source: VerificationError) -> Self {
        CodecError::Molecule {
            path: path.to_string(),
            source,
        }
    }

    /// The field path the error refers to, e.g. `custodian_lock_args.deposition_block_hash`.
    pub fn path(&self) -> &str {
        match self {
            CodecError::Length { path, .. }
            | CodecError::TooShort { path, .. }
            | CodecError::InvalidHex { path }
            | CodecError::Molecule { path, .. } => path,
        }
    }
}
