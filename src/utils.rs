use std::num::ParseIntError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum UtilsError {
    #[error("Block number {0:?} must contain only decimal digits")]
    NotDecimal(String),
    #[error("Block number {input:?} could not be parsed {source}")]
    InvalidBlockNumber {
        source: ParseIntError,
        input: String,
    },
}

/// Converts a block number to the 0x-prefixed hex string used by JSON-RPC.
pub fn block_number_hex(block: u64) -> String {
    format!("0x{:x}", block)
}

/// Parses a decimal block number as supplied by a caller (e.g., a URL path segment).
///
/// Signs, whitespace and values above u64::MAX are rejected.
pub fn parse_block_number<T: AsRef<str>>(input: T) -> Result<u64, UtilsError> {
    let s = input.as_ref();
    // u64::from_str would otherwise accept a leading '+'.
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(UtilsError::NotDecimal(s.to_owned()));
    }
    s.parse::<u64>().map_err(|source| UtilsError::InvalidBlockNumber {
        source,
        input: s.to_owned(),
    })
}
