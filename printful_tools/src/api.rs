use std::sync::Arc;

use log::*;
use reqwest::{
    header::{HeaderMap, HeaderValue},
    Client,
    Method,
};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::{
    config::PrintfulConfig,
    data_objects::{NewOrder, OrderConfirmation, ProductDetail, SyncProduct},
    PrintfulApiError,
};

/// Every Printful response wraps its payload in `{code, result}`.
#[derive(Deserialize)]
struct Envelope<T> {
    result: T,
}

#[derive(Clone)]
pub struct PrintfulApi {
    config: PrintfulConfig,
    client: Arc<Client>,
}

impl PrintfulApi {
    pub fn new(config: PrintfulConfig) -> Result<Self, PrintfulApiError> {
        let mut headers = HeaderMap::with_capacity(2);
        let bearer = format!("Bearer {}", config.api_key.reveal());
        let val = HeaderValue::from_str(&bearer).map_err(|e| PrintfulApiError::Initialization(e.to_string()))?;
        headers.insert("Authorization", val);
        headers.insert("Content-Type", HeaderValue::from_static("application/json"));
        let client = Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()
            .map_err(|e| PrintfulApiError::Initialization(e.to_string()))?;
        Ok(Self { config, client: Arc::new(client) })
    }

    async fn rest_query<T: DeserializeOwned, B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: Option<B>,
    ) -> Result<T, PrintfulApiError> {
        let url = self.url(path);
        trace!("Sending REST query: {url}");
        let mut req = self.client.request(method, url);
        if let Some(body) = body {
            req = req.json(&body);
        }
        let response = req.send().await.map_err(|e| PrintfulApiError::ResponseError(e.to_string()))?;
        if response.status().is_success() {
            trace!("REST query successful. {}", response.status());
            let envelope =
                response.json::<Envelope<T>>().await.map_err(|e| PrintfulApiError::JsonError(e.to_string()))?;
            Ok(envelope.result)
        } else {
            let status = response.status().as_u16();
            let message = response.text().await.map_err(|e| PrintfulApiError::ResponseError(e.to_string()))?;
            Err(PrintfulApiError::QueryError { status, message })
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.config.api_base.trim_end_matches('/'))
    }

    /// Fetches the store's product summaries. Variant and pricing data require [`PrintfulApi::get_product`].
    pub async fn list_products(&self) -> Result<Vec<SyncProduct>, PrintfulApiError> {
        debug!("📦️ Fetching product list");
        let products = self.rest_query::<Vec<SyncProduct>, ()>(Method::GET, "/store/products", None).await?;
        info!("📦️ Fetched {} products", products.len());
        Ok(products)
    }

    /// Fetches one product with its full variant list.
    pub async fn get_product(&self, id: &str) -> Result<ProductDetail, PrintfulApiError> {
        let path = format!("/store/products/{id}");
        debug!("📦️ Fetching product #{id}");
        let detail = self.rest_query::<ProductDetail, ()>(Method::GET, &path, None).await?;
        debug!("📦️ Fetched product #{id} with {} variants", detail.sync_variants.len());
        Ok(detail)
    }

    /// Submits a fulfillment order. Printful does not deduplicate: submitting the same order twice creates two
    /// orders, so callers must only invoke this once per confirmed payment.
    pub async fn create_order(&self, order: &NewOrder) -> Result<OrderConfirmation, PrintfulApiError> {
        debug!("📦️ Submitting fulfillment order with {} item(s) for {}", order.items.len(), order.recipient.email);
        let confirmation = self.rest_query::<OrderConfirmation, _>(Method::POST, "/orders", Some(order)).await?;
        info!("📦️ Fulfillment order #{} accepted with status '{}'", confirmation.id, confirmation.status);
        Ok(confirmation)
    }
}
