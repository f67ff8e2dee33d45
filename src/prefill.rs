//! Sequential pre-population of the block store.
use log::{info, warn};

use crate::{
    cache::BlockStore,
    fetch::{validate_block_response, BlockFetcher, FetchError},
};

/// Block at which the mainnet back-fill starts by default.
pub const DEFAULT_START_BLOCK: u64 = 19258329;

/// Requests blocks `start_block, start_block + 1, ...` and stores each response.
///
/// The store is never read and every response is written, including
/// provider errors and null results. Stops after `count` blocks, or never
/// when `count` is `None`. The first failed call ends the run, as does
/// storing block `u64::MAX`.
///
/// Returns the next block number that would have been requested
/// (`u64::MAX` once that block has been stored).
pub async fn prefill_blocks<S: BlockStore>(
    fetcher: &BlockFetcher<S>,
    start_block: u64,
    count: Option<u64>,
) -> Result<u64, FetchError> {
    let mut block = start_block;
    let mut remaining = count;
    while remaining != Some(0) {
        let response = fetcher.request_block(block).await?;
        fetcher.store().put(block, &response)?;
        match validate_block_response(block, &response) {
            Ok(contents) => info!(
                "Stored block {block} ({} transactions)",
                contents.transactions.len()
            ),
            Err(e) => warn!("Stored block {block} response without a block: {e}"),
        }
        remaining = remaining.map(|n| n - 1);
        let Some(next) = block.checked_add(1) else {
            warn!("Block {block} is the highest block number, stopping");
            break;
        };
        block = next;
    }
    Ok(block)
}
