use std::time::Duration;

use log::*;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::{cart_types::OrderSnapshot, errors::CheckoutError};

const DEFAULT_GATEWAY_TIMEOUT: Duration = Duration::from_secs(30);

/// The handle returned by a successful session creation. The session id is the only artifact the client ever sees;
/// the hosted payment flow is entered by redirecting with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutRedirect {
    #[serde(rename = "sessionId")]
    pub session_id: String,
}

/// The cart engine's seam to the order proxy. [`crate::CartSession::checkout`] hands the order snapshot to this trait
/// and does not care how the session comes to exist.
#[allow(async_fn_in_trait)]
pub trait CheckoutGateway {
    async fn create_session(&self, snapshot: &OrderSnapshot) -> Result<CheckoutRedirect, CheckoutError>;
}

/// [`CheckoutGateway`] implementation that POSTs the snapshot to the order proxy's session-creation endpoint.
#[derive(Debug, Clone)]
pub struct HttpCheckoutGateway {
    base_url: String,
    client: Client,
}

impl HttpCheckoutGateway {
    /// `base_url` is the order proxy's root, e.g. `https://shop.example.com` — the `/api/...` path is appended here.
    pub fn new(base_url: impl Into<String>) -> Result<Self, CheckoutError> {
        let client = Client::builder()
            .timeout(DEFAULT_GATEWAY_TIMEOUT)
            .build()
            .map_err(|e| CheckoutError::Initialization(e.to_string()))?;
        Ok(Self { base_url: base_url.into(), client })
    }

    fn endpoint(&self) -> String {
        format!("{}/api/create-checkout-session", self.base_url.trim_end_matches('/'))
    }
}

impl CheckoutGateway for HttpCheckoutGateway {
    async fn create_session(&self, snapshot: &OrderSnapshot) -> Result<CheckoutRedirect, CheckoutError> {
        let url = self.endpoint();
        debug!("🛒️ Creating checkout session for {} line(s), total {}", snapshot.items.len(), snapshot.total);
        let response =
            self.client.post(url).json(snapshot).send().await.map_err(|e| CheckoutError::Network(e.to_string()))?;
        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(CheckoutError::Rejected { status, message });
        }
        let redirect =
            response.json::<CheckoutRedirect>().await.map_err(|e| CheckoutError::InvalidResponse(e.to_string()))?;
        info!("🛒️ Checkout session {} created", redirect.session_id);
        Ok(redirect)
    }
}
