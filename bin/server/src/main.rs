use std::sync::Arc;

use anyhow::Result;
use blocklinks::{
    cache::FileBlockStore,
    config::{ProviderConfig, ServerConfig},
    fetch::BlockFetcher,
    server::run_server,
};
use clap::Parser;
use log::info;

use crate::cli::AppArgs;

mod cli;

/// Serves `GET /block/<number>` with the sender -> recipient pair of every
/// transaction in the block.
///
/// Blocks are read from the cache directory, or requested from the provider
/// with eth_getBlockByNumber and then cached.
#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let args = AppArgs::parse();
    let provider = ProviderConfig::from_api_key(&args.api_key)?;
    let store = FileBlockStore::new(args.cache_dir);
    info!(
        "Using provider {} with cache directory {}",
        provider.redacted(),
        store.dir().display()
    );

    let fetcher = Arc::new(BlockFetcher::new(&provider, store));
    let config = ServerConfig {
        host: args.host,
        port: args.port,
    };
    run_server(fetcher, &config).await?;
    Ok(())
}
