use std::time::Duration;

use anyhow::{anyhow, Result};
use async_jsonrpc_client::Output;
use serde::de::DeserializeOwned;
use serde_json::from_value;

pub const DEFAULT_QUERY_LIMIT: u32 = 500;
pub const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(15);

// convert json output to result
pub fn to_result<T: DeserializeOwned>(output: Output) -> Result<T> {
    match output {
        Output::Success(success) => Ok(from_value(success.result)?),
        Output::Failure(failure) => Err(anyhow!("JSONRPC error: {}", failure.error)),
    }
}
