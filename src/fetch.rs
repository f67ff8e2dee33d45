//! Cache-or-fetch retrieval of blocks and their transfer links.
use log::{debug, warn};
use reqwest::{Client, Response};
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use url::Url;

use crate::{
    cache::{BlockStore, CacheError},
    config::ProviderConfig,
    rpc::{get_block_by_number, BlockResponse, BlockWithTransactions, RpcError},
    types::{links_from_transactions, TransferLink},
    utils::{block_number_hex, parse_block_number, UtilsError},
};

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Invalid block number {0}")]
    InvalidInput(#[from] UtilsError),
    #[error("Block {0} not found")]
    BlockNotFound(u64),
    #[error("Provider error {0}")]
    RemoteProvider(RpcError),
    #[error("Network error {0}")]
    Network(reqwest::Error),
    #[error("Provider response was not valid JSON {0}")]
    InvalidResponse(#[from] serde_json::Error),
    #[error("Cache error {0}")]
    Cache(#[from] CacheError),
}

/// The request URL holds the provider credential, so it is dropped.
impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        FetchError::Network(e.without_url())
    }
}

/// Serves blocks from a store, calling the provider once on a miss.
///
/// There is no retry, timeout or request coalescing. Two concurrent
/// misses for one block each call the provider and each write the entry.
pub struct BlockFetcher<S> {
    client: Client,
    url: Url,
    store: S,
}

impl<S: BlockStore> BlockFetcher<S> {
    pub fn new(provider: &ProviderConfig, store: S) -> Self {
        Self {
            client: Client::new(),
            url: provider.url().clone(),
            store,
        }
    }
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Returns the links for a block number given as text (e.g., a URL path segment).
    pub async fn fetch_links(&self, block_number: &str) -> Result<Vec<TransferLink>, FetchError> {
        let block = parse_block_number(block_number)?;
        self.fetch_block(block).await
    }

    /// Returns one link per transaction of the block, from cache if possible.
    ///
    /// A successful provider response is written to the store before the
    /// links are produced. Failed calls leave the store untouched.
    pub async fn fetch_block(&self, block: u64) -> Result<Vec<TransferLink>, FetchError> {
        if let Some(cached) = self.cached_block(block)? {
            debug!("Cache hit for block {block}");
            return Ok(links_from_transactions(&cached.transactions));
        }
        debug!("Cache miss for block {block}");
        let response = self
            .post_block_request(block)
            .await?
            .error_for_status()?
            .text()
            .await?;
        let response: Value = serde_json::from_str(&response)?;
        let contents = validate_block_response(block, &response)?;
        self.store.put(block, &response)?;
        Ok(links_from_transactions(&contents.transactions))
    }

    /// Calls the provider once and returns the response as-is.
    ///
    /// Neither the transport status nor the response contents are checked,
    /// only that the body is JSON. The store is not consulted.
    pub async fn request_block(&self, block: u64) -> Result<Value, FetchError> {
        let body = self.post_block_request(block).await?.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn post_block_request(&self, block: u64) -> Result<Response, FetchError> {
        debug!("Requesting block {block} from provider");
        let response = self
            .client
            .post(self.url.clone())
            .json(&get_block_by_number(&block_number_hex(block)))
            .send()
            .await?;
        Ok(response)
    }

    /// Reads a stored block. Entries that do not hold a block (provider
    /// errors or null results) are treated as absent.
    fn cached_block(&self, block: u64) -> Result<Option<BlockWithTransactions>, FetchError> {
        let Some(cached) = self.store.get(block)? else {
            return Ok(None);
        };
        match validate_block_response(block, &cached) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) => {
                warn!("Ignoring cached entry for block {block}: {e}");
                Ok(None)
            }
        }
    }
}

/// Checks that a response carries a block, rather than an error or null.
pub(crate) fn validate_block_response(
    block: u64,
    response: &Value,
) -> Result<BlockWithTransactions, FetchError> {
    let parsed = BlockResponse::deserialize(response)?;
    if let Some(error) = parsed.error {
        return Err(FetchError::RemoteProvider(error));
    }
    parsed.result.ok_or(FetchError::BlockNotFound(block))
}
