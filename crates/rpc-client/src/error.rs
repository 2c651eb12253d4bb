use thiserror::Error;

/// Transport failure of a JSON-RPC request.
///
/// Only produced by `[client].request()`, a well-formed error response
/// from the server is a plain `anyhow::Error` from `to_result()`.
#[derive(Error, Debug)]
#[error("{client} error, method: {method} error: {source}")]
pub struct RPCRequestError {
    pub client: &'static str,
    pub method: String,
    pub source: anyhow::Error,
}

impl RPCRequestError {
    pub fn new<E: Into<anyhow::Error>>(client: &'static str, method: String, source: E) -> Self {
        RPCRequestError {
            client,
            method,
            source: source.into(),
        }
    }
}

/// Whether `err` was caused by the transport and is worth retrying.
pub fn is_request_error(err: &anyhow::Error) -> bool {
    err.downcast_ref::<RPCRequestError>().is_some()
}
