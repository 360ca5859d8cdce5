use std::sync::Arc;

use log::*;
use reqwest::{
    header::{HeaderMap, HeaderValue},
    Client,
};

use crate::{
    config::StripeConfig,
    data_objects::{CheckoutSession, NewSessionParams},
    StripeApiError,
};

#[derive(Clone)]
pub struct StripeApi {
    config: StripeConfig,
    client: Arc<Client>,
}

impl StripeApi {
    pub fn new(config: StripeConfig) -> Result<Self, StripeApiError> {
        let mut headers = HeaderMap::with_capacity(1);
        let bearer = format!("Bearer {}", config.secret_key.reveal());
        let val = HeaderValue::from_str(&bearer).map_err(|e| StripeApiError::Initialization(e.to_string()))?;
        headers.insert("Authorization", val);
        let client = Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()
            .map_err(|e| StripeApiError::Initialization(e.to_string()))?;
        Ok(Self { config, client: Arc::new(client) })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.config.api_base.trim_end_matches('/'))
    }

    /// Creates a hosted checkout session in payment mode, with shipping-address collection for the configured
    /// country list and phone-number collection enabled.
    pub async fn create_checkout_session(&self, params: NewSessionParams) -> Result<CheckoutSession, StripeApiError> {
        let form = session_form(&self.config, &params);
        debug!("💳️ Creating checkout session with {} line item(s)", params.line_items.len());
        let response = self
            .client
            .post(self.url("/v1/checkout/sessions"))
            .form(&form)
            .send()
            .await
            .map_err(|e| StripeApiError::ResponseError(e.to_string()))?;
        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.map_err(|e| StripeApiError::ResponseError(e.to_string()))?;
            return Err(StripeApiError::QueryError { status, message });
        }
        let session = response.json::<CheckoutSession>().await.map_err(|e| StripeApiError::JsonError(e.to_string()))?;
        info!("💳️ Created checkout session {}", session.id);
        Ok(session)
    }

    /// Retrieves a session after the shopper returns from the hosted flow. Idempotent on the provider side, so
    /// confirmation retries simply re-read the same state.
    pub async fn fetch_checkout_session(&self, id: &str) -> Result<CheckoutSession, StripeApiError> {
        let path = format!("/v1/checkout/sessions/{id}");
        debug!("💳️ Retrieving checkout session {id}");
        let response =
            self.client.get(self.url(&path)).send().await.map_err(|e| StripeApiError::ResponseError(e.to_string()))?;
        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.map_err(|e| StripeApiError::ResponseError(e.to_string()))?;
            return Err(StripeApiError::QueryError { status, message });
        }
        response.json::<CheckoutSession>().await.map_err(|e| StripeApiError::JsonError(e.to_string()))
    }
}

/// Flattens the session parameters into Stripe's bracket-keyed form encoding.
fn session_form(config: &StripeConfig, params: &NewSessionParams) -> Vec<(String, String)> {
    let mut form = vec![
        ("mode".to_string(), "payment".to_string()),
        ("payment_method_types[0]".to_string(), "card".to_string()),
        ("success_url".to_string(), config.success_url.clone()),
        ("cancel_url".to_string(), config.cancel_url.clone()),
        ("phone_number_collection[enabled]".to_string(), "true".to_string()),
    ];
    for (i, country) in config.allowed_countries.iter().enumerate() {
        form.push((format!("shipping_address_collection[allowed_countries][{i}]"), country.clone()));
    }
    for (i, item) in params.line_items.iter().enumerate() {
        let prefix = format!("line_items[{i}]");
        form.push((format!("{prefix}[price_data][currency]"), sfs_common::USD_CURRENCY_CODE_LOWER.to_string()));
        form.push((format!("{prefix}[price_data][product_data][name]"), item.name.clone()));
        form.push((format!("{prefix}[price_data][product_data][description]"), item.description.clone()));
        if let Some(image) = &item.image {
            form.push((format!("{prefix}[price_data][product_data][images][0]"), image.clone()));
        }
        form.push((format!("{prefix}[price_data][unit_amount]"), item.unit_amount.value().to_string()));
        form.push((format!("{prefix}[quantity]"), item.quantity.to_string()));
    }
    for (key, value) in &params.metadata {
        form.push((format!("metadata[{key}]"), value.clone()));
    }
    form
}
