//! Runtime configuration, read from `CART_*` environment variables with defaults.
//!
//! | Variable | Default |
//! |----------|---------|
//! | `CART_API_URL` | `http://localhost:3333` |
//! | `CART_STORAGE_PATH` | `cart.json` |
//! | `CART_STORAGE_KEY` | `@RocketShoes:cart` |
//! | `CART_BUFFER_SIZE` | `32` |
//! | `CART_REQUEST_TIMEOUT_SECS` | unset (no timeout) |

use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_API_URL: &str = "http://localhost:3333";
pub const DEFAULT_STORAGE_PATH: &str = "cart.json";
pub const DEFAULT_STORAGE_KEY: &str = "@RocketShoes:cart";
pub const DEFAULT_BUFFER_SIZE: usize = 32;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {value:?}")]
    Invalid { var: &'static str, value: String },

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct CartConfig {
    pub api_url: String,
    pub storage_path: PathBuf,
    pub storage_key: String,
    pub buffer_size: usize,
    pub request_timeout: Option<Duration>,
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            storage_path: PathBuf::from(DEFAULT_STORAGE_PATH),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            buffer_size: DEFAULT_BUFFER_SIZE,
            request_timeout: None,
        }
    }
}

impl CartConfig {
    /// Reads the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds a config from an arbitrary variable lookup. Unset or blank variables keep
    /// their default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(url) = get("CART_API_URL") {
            config.api_url = url;
        }
        if let Some(path) = get("CART_STORAGE_PATH") {
            config.storage_path = PathBuf::from(path);
        }
        if let Some(key) = get("CART_STORAGE_KEY") {
            config.storage_key = key;
        }
        if let Some(raw) = get("CART_BUFFER_SIZE") {
            let size: usize = parse("CART_BUFFER_SIZE", &raw)?;
            if size == 0 {
                return Err(ConfigError::Invalid {
                    var: "CART_BUFFER_SIZE",
                    value: raw,
                });
            }
            config.buffer_size = size;
        }
        if let Some(raw) = get("CART_REQUEST_TIMEOUT_SECS") {
            let secs: u64 = parse("CART_REQUEST_TIMEOUT_SECS", &raw)?;
            config.request_timeout = Some(Duration::from_secs(secs));
        }

        Ok(config)
    }
}

fn parse<T: FromStr>(var: &'static str, raw: &str) -> Result<T, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::Invalid {
        var,
        value: raw.to_string(),
    })
}
