use std::fmt::Display;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

#[derive(Debug, Serialize)]
pub(crate) struct JsonRpcRequest {
    jsonrpc: String,
    method: String,
    params: Vec<Value>,
    id: u64,
}

/// The parts of an eth_getBlockByNumber response that are inspected.
///
/// Everything else in the response is kept only in the cached file.
#[derive(Debug, Deserialize)]
pub(crate) struct BlockResponse {
    #[serde(default)]
    pub(crate) result: Option<BlockWithTransactions>,
    #[serde(default)]
    pub(crate) error: Option<RpcError>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct BlockWithTransactions {
    /// Full transaction objects, as requested with the `true` flag.
    #[serde(default)]
    pub(crate) transactions: Vec<Value>,
}

/// Error object of a JSON-RPC 2.0 response.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct RpcError {
    #[serde(default)]
    pub code: i64,
    #[serde(default)]
    pub message: String,
}

impl Display for RpcError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (code {})", self.message, self.code)
    }
}

/// Generates a JSON-RPC request for eth_getBlockByNumber for
/// the specified block (e.g., "0xabc"), with full transaction objects.
pub(crate) fn get_block_by_number(block: &str) -> JsonRpcRequest {
    JsonRpcRequest {
        jsonrpc: "2.0".to_owned(),
        method: "eth_getBlockByNumber".to_owned(),
        params: vec![json!(block), Value::Bool(true)],
        id: 1,
    }
}
