use std::time::Duration;

use log::*;
use sfs_common::Secret;

const DEFAULT_API_BASE: &str = "https://api.stripe.com";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
const DEFAULT_ALLOWED_COUNTRIES: [&str; 4] = ["US", "CA", "GB", "AU"];

#[derive(Debug, Clone)]
pub struct StripeConfig {
    pub api_base: String,
    /// The secret key. It never leaves the proxy process; clients only ever see session ids.
    pub secret_key: Secret<String>,
    /// Where the hosted flow redirects after payment. Must contain the `{CHECKOUT_SESSION_ID}` placeholder.
    pub success_url: String,
    /// Where the hosted flow redirects when the shopper abandons checkout.
    pub cancel_url: String,
    /// ISO country codes offered for shipping-address collection.
    pub allowed_countries: Vec<String>,
    /// Upper bound on any single provider call.
    pub timeout: Duration,
}

impl Default for StripeConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            secret_key: Secret::default(),
            success_url: "http://localhost:8787/success?session_id={CHECKOUT_SESSION_ID}".to_string(),
            cancel_url: "http://localhost:8787/".to_string(),
            allowed_countries: DEFAULT_ALLOWED_COUNTRIES.iter().map(|s| s.to_string()).collect(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl StripeConfig {
    pub fn new_from_env_or_default() -> Self {
        let defaults = Self::default();
        let api_base = std::env::var("SFS_STRIPE_API_BASE").unwrap_or(defaults.api_base);
        let secret_key = Secret::new(std::env::var("SFS_STRIPE_SECRET_KEY").unwrap_or_else(|_| {
            error!("🪛️ SFS_STRIPE_SECRET_KEY is not set. Checkout session calls will be rejected upstream.");
            String::default()
        }));
        let success_url = std::env::var("SFS_CHECKOUT_SUCCESS_URL").unwrap_or_else(|_| {
            warn!("🪛️ SFS_CHECKOUT_SUCCESS_URL is not set. Using {}", defaults.success_url);
            defaults.success_url.clone()
        });
        let cancel_url = std::env::var("SFS_CHECKOUT_CANCEL_URL").unwrap_or_else(|_| {
            warn!("🪛️ SFS_CHECKOUT_CANCEL_URL is not set. Using {}", defaults.cancel_url);
            defaults.cancel_url.clone()
        });
        let allowed_countries = std::env::var("SFS_STRIPE_ALLOWED_COUNTRIES")
            .map(|s| s.split(',').map(|c| c.trim().to_uppercase()).filter(|c| !c.is_empty()).collect::<Vec<_>>())
            .ok()
            .filter(|v| !v.is_empty())
            .unwrap_or(defaults.allowed_countries);
        let timeout = std::env::var("SFS_STRIPE_TIMEOUT")
            .ok()
            .and_then(|s| {
                s.parse::<u64>().map_err(|e| warn!("🪛️ Invalid value for SFS_STRIPE_TIMEOUT: {s}. {e}")).ok()
            })
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_TIMEOUT);
        Self { api_base, secret_key, success_url, cancel_url, allowed_countries, timeout }
    }
}
