use std::{env, path::PathBuf};

use log::*;
use printful_tools::PrintfulConfig;
use stripe_tools::StripeConfig;

const DEFAULT_SFS_HOST: &str = "127.0.0.1";
const DEFAULT_SFS_PORT: u16 = 8787;
const DEFAULT_OUTBOX_PATH: &str = "failed_fulfillments.jsonl";

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Where paid-but-unfulfilled orders are recorded for manual reconciliation.
    pub outbox_path: PathBuf,
    pub stripe: StripeConfig,
    pub printful: PrintfulConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_SFS_HOST.to_string(),
            port: DEFAULT_SFS_PORT,
            outbox_path: PathBuf::from(DEFAULT_OUTBOX_PATH),
            stripe: StripeConfig::default(),
            printful: PrintfulConfig::default(),
        }
    }
}

impl ServerConfig {
    pub fn new(host: &str, port: u16) -> Self {
        Self { host: host.to_string(), port, ..Default::default() }
    }

    pub fn from_env_or_default() -> Self {
        let host = env::var("SFS_HOST").ok().unwrap_or_else(|| DEFAULT_SFS_HOST.into());
        let port = env::var("SFS_PORT")
            .map(|s| {
                s.parse::<u16>().unwrap_or_else(|e| {
                    error!("🪛️ {s} is not a valid port for SFS_PORT. {e} Using the default, {DEFAULT_SFS_PORT}, instead.");
                    DEFAULT_SFS_PORT
                })
            })
            .ok()
            .unwrap_or(DEFAULT_SFS_PORT);
        let outbox_path = env::var("SFS_OUTBOX_PATH").map(PathBuf::from).unwrap_or_else(|_| {
            info!("🪛️ SFS_OUTBOX_PATH is not set. Failed fulfillments will be recorded in ./{DEFAULT_OUTBOX_PATH}");
            PathBuf::from(DEFAULT_OUTBOX_PATH)
        });
        let stripe = StripeConfig::new_from_env_or_default();
        let printful = PrintfulConfig::new_from_env_or_default();
        Self { host, port, outbox_path, stripe, printful }
    }
}
