pub mod cache;
pub mod config;
pub mod fetch;
pub mod prefill;
pub mod rpc;
pub mod server;
pub mod types;
pub mod utils;
