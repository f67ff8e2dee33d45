//! Stores JSON-RPC block responses locally, one file per block number.
use std::{
    fs::{self, File},
    io::{self, ErrorKind, Read, Write},
    path::{Path, PathBuf},
};

use log::{debug, warn};
use serde_json::Value;
use thiserror::Error;

/// Directory used when none is configured.
pub static DEFAULT_CACHE_DIR: &str = "data";

#[derive(Debug, Error)]
pub enum CacheError {
    #[error("IO error {0}")]
    IoError(#[from] io::Error),
    #[error("serde_json error {0}")]
    SerdeJsonError(#[from] serde_json::Error),
    #[error("File {filename} could not be opened {source}")]
    FileOpener {
        source: io::Error,
        filename: PathBuf,
    },
    #[error("File {filename} could not be written {source}")]
    FileWriter {
        source: io::Error,
        filename: PathBuf,
    },
}

/// Key-value storage of block responses keyed by block number.
///
/// Entries are never evicted. Concurrent `put` calls for one block have
/// last-writer-wins semantics.
pub trait BlockStore {
    /// Returns the stored response for the block.
    ///
    /// A missing entry, or one that is not valid JSON, is `None`.
    fn get(&self, block: u64) -> Result<Option<Value>, CacheError>;
    /// Stores the response for the block, replacing any existing entry.
    fn put(&self, block: u64, response: &Value) -> Result<(), CacheError>;
}

/// A flat directory of `<block_number>.json` files.
#[derive(Clone, Debug)]
pub struct FileBlockStore {
    dir: PathBuf,
}

impl FileBlockStore {
    pub fn new<P: Into<PathBuf>>(dir: P) -> Self {
        Self { dir: dir.into() }
    }
    pub fn dir(&self) -> &Path {
        &self.dir
    }
    /// Path of the file that holds (or would hold) the block.
    pub fn block_path(&self, block: u64) -> PathBuf {
        self.dir.join(format!("{block}.json"))
    }
}

impl Default for FileBlockStore {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_DIR)
    }
}

impl BlockStore for FileBlockStore {
    fn get(&self, block: u64) -> Result<Option<Value>, CacheError> {
        let filename = self.block_path(block);
        let mut file = match File::open(&filename) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => return Err(CacheError::FileOpener { source, filename }),
        };
        let mut data = vec![];
        file.read_to_end(&mut data).map_err(|source| CacheError::FileOpener {
            source,
            filename: filename.clone(),
        })?;
        match serde_json::from_slice(&data) {
            Ok(response) => {
                debug!("Read block {block} from {}", filename.display());
                Ok(Some(response))
            }
            Err(e) => {
                warn!("Ignoring unreadable cache file {}: {e}", filename.display());
                Ok(None)
            }
        }
    }

    fn put(&self, block: u64, response: &Value) -> Result<(), CacheError> {
        fs::create_dir_all(&self.dir)?;
        let filename = self.block_path(block);
        let bytes = serde_json::to_vec(response)?;
        let mut file = File::create(&filename).map_err(|source| CacheError::FileWriter {
            source,
            filename: filename.clone(),
        })?;
        file.write_all(&bytes).map_err(|source| CacheError::FileWriter {
            source,
            filename: filename.clone(),
        })?;
        debug!("Wrote block {block} to {}", filename.display());
        Ok(())
    }
}
