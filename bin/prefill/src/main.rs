use anyhow::Result;
use blocklinks::{
    cache::FileBlockStore, config::ProviderConfig, fetch::BlockFetcher, prefill::prefill_blocks,
};
use clap::Parser;
use log::info;

use crate::cli::AppArgs;

mod cli;

/// Requests consecutive blocks from the provider and writes each response
/// to the cache directory, overwriting existing entries.
///
/// Runs until `--count` blocks are stored, or until a request fails.
#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let args = AppArgs::parse();
    let provider = ProviderConfig::from_api_key(&args.api_key)?;
    let store = FileBlockStore::new(args.cache_dir);
    info!(
        "Storing blocks from {} using provider {} in {}",
        args.start_block,
        provider.redacted(),
        store.dir().display()
    );

    let fetcher = BlockFetcher::new(&provider, store);
    let next = prefill_blocks(&fetcher, args.start_block, args.count).await?;
    info!("Finished before block {next}");
    Ok(())
}
