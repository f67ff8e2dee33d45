//! Provider endpoint and listener settings.
use std::fmt::{self, Debug};

use thiserror::Error;
use url::{ParseError, Url};

/// Ethereum mainnet endpoint. The API key is appended as the final path segment.
pub const MAINNET_PROVIDER: &str = "https://eth-mainnet.g.alchemy.com/v2/";
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Provider API key is missing or empty")]
    MissingApiKey,
    #[error("Url error {0}")]
    UrlError(#[from] ParseError),
    #[error("Provider url {0} cannot hold an API key path segment")]
    CannotBeABase(String),
}

/// Location of the JSON-RPC provider, including its credential.
#[derive(Clone, PartialEq)]
pub struct ProviderConfig {
    url: Url,
}

impl ProviderConfig {
    /// Builds the mainnet endpoint for the given API key.
    pub fn from_api_key(api_key: &str) -> Result<Self, ConfigError> {
        let api_key = api_key.trim();
        if api_key.is_empty() {
            return Err(ConfigError::MissingApiKey);
        }
        let mut url = Url::parse(MAINNET_PROVIDER)?;
        // Percent-encoded as a single segment, whatever characters the key holds.
        url.path_segments_mut()
            .map_err(|_| ConfigError::CannotBeABase(MAINNET_PROVIDER.to_owned()))?
            .pop_if_empty()
            .push(api_key);
        Ok(Self { url })
    }
    /// Uses a complete endpoint, e.g., a local node.
    pub fn from_url(url: Url) -> Self {
        Self { url }
    }
    pub fn url(&self) -> &Url {
        &self.url
    }
    /// Endpoint without path, query or userinfo, safe to log.
    pub fn redacted(&self) -> String {
        match self.url.host_str() {
            Some(host) => match self.url.port() {
                Some(port) => format!("{}://{host}:{port}/…", self.url.scheme()),
                None => format!("{}://{host}/…", self.url.scheme()),
            },
            None => format!("{}:…", self.url.scheme()),
        }
    }
}

impl Debug for ProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("url", &self.redacted())
            .finish()
    }
}

/// Address the HTTP server listens on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_owned(),
            port: DEFAULT_PORT,
        }
    }
}
