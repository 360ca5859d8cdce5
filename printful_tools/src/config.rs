use std::time::Duration;

use log::*;
use sfs_common::Secret;

const DEFAULT_API_BASE: &str = "https://api.printful.com";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone)]
pub struct PrintfulConfig {
    pub api_base: String,
    pub api_key: Secret<String>,
    /// Upper bound on any single provider call. A hung fulfillment call fails the one request instead of blocking a
    /// worker indefinitely.
    pub timeout: Duration,
}

impl Default for PrintfulConfig {
    fn default() -> Self {
        Self { api_base: DEFAULT_API_BASE.to_string(), api_key: Secret::default(), timeout: DEFAULT_TIMEOUT }
    }
}

impl PrintfulConfig {
    pub fn new_from_env_or_default() -> Self {
        let api_base = std::env::var("SFS_PRINTFUL_API_BASE").unwrap_or_else(|_| DEFAULT_API_BASE.to_string());
        let api_key = Secret::new(std::env::var("SFS_PRINTFUL_API_KEY").unwrap_or_else(|_| {
            error!("🪛️ SFS_PRINTFUL_API_KEY is not set. Catalog and fulfillment calls will be rejected upstream.");
            String::default()
        }));
        let timeout = std::env::var("SFS_PRINTFUL_TIMEOUT")
            .ok()
            .and_then(|s| {
                s.parse::<u64>()
                    .map_err(|e| warn!("🪛️ Invalid value for SFS_PRINTFUL_TIMEOUT: {s}. {e}"))
                    .ok()
            })
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_TIMEOUT);
        Self { api_base, api_key, timeout }
    }
}
