//! Shared test helpers for blocklinks integration tests.

#![allow(dead_code)]

use std::{
    fs, io,
    net::SocketAddr,
    sync::{Arc, Mutex},
};

use axum::{extract::State, http::StatusCode, routing::post, Router};
use blocklinks::{
    cache::{BlockStore, CacheError, FileBlockStore},
    config::ProviderConfig,
    fetch::BlockFetcher,
};
use serde_json::{json, Value};
use tempfile::TempDir;
use tokio::net::TcpListener;
use url::Url;

/// Produces the status and body the provider replies with for a request.
pub type Reply = Arc<dyn Fn(&Value) -> (StatusCode, String) + Send + Sync>;

#[derive(Clone)]
struct ProviderState {
    reply: Reply,
    requests: Arc<Mutex<Vec<Value>>>,
}

/// An in-process JSON-RPC endpoint that records every request it receives.
pub struct FakeProvider {
    pub url: Url,
    requests: Arc<Mutex<Vec<Value>>>,
}

impl FakeProvider {
    pub async fn start(reply: Reply) -> Self {
        let requests = Arc::new(Mutex::new(vec![]));
        let state = ProviderState {
            reply,
            requests: requests.clone(),
        };
        let router = Router::new().route("/", post(rpc)).with_state(state);
        let addr = spawn_router(router).await;
        Self {
            url: Url::parse(&format!("http://{addr}/")).unwrap(),
            requests,
        }
    }

    /// Replies to every request with `body` and status 200.
    pub async fn replying_with(body: Value) -> Self {
        let body = body.to_string();
        Self::start(Arc::new(move |_: &Value| (StatusCode::OK, body.clone()))).await
    }

    /// Replies with a block holding the given transactions, for any block number.
    pub async fn with_transactions(transactions: Value) -> Self {
        Self::replying_with(block_response(transactions)).await
    }

    pub fn config(&self) -> ProviderConfig {
        ProviderConfig::from_url(self.url.clone())
    }

    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn requests(&self) -> Vec<Value> {
        self.requests.lock().unwrap().clone()
    }
}

async fn rpc(State(state): State<ProviderState>, body: String) -> (StatusCode, String) {
    let request: Value = serde_json::from_str(&body).unwrap_or(Value::Null);
    let reply = (state.reply)(&request);
    state.requests.lock().unwrap().push(request);
    reply
}

/// Serves the router on an ephemeral local port.
pub async fn spawn_router(router: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

/// A successful eth_getBlockByNumber response.
pub fn block_response(transactions: Value) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": 1,
        "result": {
            "number": "0x125dbd9",
            "hash": "0x8a91b7a5bba3b9d4fd95e3ef4c1f5c50fa5cb2b3e63e4ee23c8fc4fac8cf3ec7",
            "transactions": transactions
        }
    })
}

/// A fetcher backed by a fresh cache directory.
pub fn fetcher_for(provider: &FakeProvider) -> (BlockFetcher<FileBlockStore>, TempDir) {
    let dir = TempDir::new().unwrap();
    let fetcher = BlockFetcher::new(&provider.config(), FileBlockStore::new(dir.path()));
    (fetcher, dir)
}

/// A store rooted at a regular file, so every read and write fails.
pub fn store_rooted_at_file(dir: &TempDir) -> FileBlockStore {
    let blocker = dir.path().join("not_a_dir");
    fs::write(&blocker, b"").unwrap();
    FileBlockStore::new(blocker)
}

/// A store that holds nothing and refuses every write.
pub struct WriteFailingStore;

impl BlockStore for WriteFailingStore {
    fn get(&self, _block: u64) -> Result<Option<Value>, CacheError> {
        Ok(None)
    }
    fn put(&self, _block: u64, _response: &Value) -> Result<(), CacheError> {
        Err(CacheError::IoError(io::Error::from(
            io::ErrorKind::PermissionDenied,
        )))
    }
}
