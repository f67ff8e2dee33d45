//! For Command Line Interface for blocklinks_prefill

use std::path::PathBuf;

use blocklinks::{cache::DEFAULT_CACHE_DIR, prefill::DEFAULT_START_BLOCK};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct AppArgs {
    /// API key for the mainnet JSON-RPC provider
    #[clap(long, env = "BLOCKLINKS_API_KEY", hide_env_values = true)]
    pub api_key: String,
    /// First block number to request
    #[clap(short, long, default_value_t = DEFAULT_START_BLOCK)]
    pub start_block: u64,
    /// Number of blocks to request. Runs indefinitely if omitted
    #[clap(short = 'n', long)]
    pub count: Option<u64>,
    /// Directory holding one <block_number>.json file per cached block
    #[clap(short, long, env = "BLOCKLINKS_CACHE_DIR", default_value = DEFAULT_CACHE_DIR)]
    pub cache_dir: PathBuf,
}
