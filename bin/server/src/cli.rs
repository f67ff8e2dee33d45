//! For Command Line Interface for blocklinks_server

use std::path::PathBuf;

use blocklinks::{
    cache::DEFAULT_CACHE_DIR,
    config::{DEFAULT_HOST, DEFAULT_PORT},
};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct AppArgs {
    /// API key for the mainnet JSON-RPC provider
    #[clap(long, env = "BLOCKLINKS_API_KEY", hide_env_values = true)]
    pub api_key: String,
    /// Address to listen on
    #[clap(long, env = "BLOCKLINKS_HOST", default_value_t = String::from(DEFAULT_HOST))]
    pub host: String,
    /// Port to listen on
    #[clap(short, long, env = "BLOCKLINKS_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,
    /// Directory holding one <block_number>.json file per cached block
    #[clap(short, long, env = "BLOCKLINKS_CACHE_DIR", default_value = DEFAULT_CACHE_DIR)]
    pub cache_dir: PathBuf,
}
