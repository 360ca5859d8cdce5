use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

//--------------------------------------     Catalog (read) side     --------------------------------------------------

/// Summary entry from `GET /store/products`. Carries no variant or pricing data; those require a detail fetch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncProduct {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
}

/// Detail payload from `GET /store/products/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductDetail {
    pub sync_product: SyncProduct,
    #[serde(default)]
    pub sync_variants: Vec<SyncVariant>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SyncVariant {
    pub id: u64,
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    /// Printful expresses prices as decimal strings ("28.00").
    #[serde(default)]
    pub retail_price: Option<String>,
    #[serde(default)]
    pub sku: Option<String>,
}

//--------------------------------------     Fulfillment (write) side     ---------------------------------------------

/// Shipping recipient for a fulfillment order. Populated from the payment provider's captured shipping and contact
/// details, never from client-supplied address data. Every field defaults to empty so that partial payloads on the
/// legacy direct-order path still deserialize; Printful rejects orders with missing address data on its side.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Recipient {
    pub name: String,
    pub company: String,
    pub address1: String,
    pub address2: String,
    pub city: String,
    pub state_code: String,
    pub country_code: String,
    pub zip: String,
    pub phone: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub variant_id: u64,
    pub quantity: u32,
    /// Decimal string, e.g. "28.00".
    pub retail_price: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetailCosts {
    pub shipping: String,
    pub tax: String,
}

impl Default for RetailCosts {
    fn default() -> Self {
        Self { shipping: "0.00".to_string(), tax: "0.00".to_string() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewOrder {
    pub recipient: Recipient,
    pub items: Vec<OrderItem>,
    pub retail_costs: RetailCosts,
}

/// Printful's acknowledgement of a submitted order. Only `id` and `status` are modeled; the remainder of the payload
/// is kept verbatim so the proxy can pass the confirmation through to its caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderConfirmation {
    pub id: u64,
    pub status: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

//--------------------------------------     Webhooks     -------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebhookEvent {
    #[serde(rename = "type")]
    pub event_type: String,
    #[serde(default)]
    pub data: Value,
}
