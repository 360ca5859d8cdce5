use cart_engine::Product;
use printful_tools::{OrderConfirmation, Recipient};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductList {
    pub products: Vec<Product>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SingleProduct {
    pub product: Product,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProductQuery {
    #[serde(default)]
    pub id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionCreated {
    #[serde(rename = "sessionId")]
    pub session_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentSuccessRequest {
    #[serde(rename = "sessionId")]
    pub session_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentSuccessResponse {
    pub success: bool,
    pub order: OrderConfirmation,
    #[serde(rename = "stripeSessionId")]
    pub stripe_session_id: String,
}

//--------------------------------------     Direct order (bypass path)     --------------------------------------------

/// Request body for the legacy `/api/order` path, which skips the hosted-payment flow and submits straight to
/// fulfillment. The recipient here is client-supplied, which is exactly why the hosted flow is the canonical one.
/// A missing recipient deserializes to the empty default so the handler can reject it with the standard error body
/// instead of an extractor failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectOrderRequest {
    #[serde(default)]
    pub recipient: Recipient,
    pub items: Vec<DirectOrderItem>,
    #[serde(default)]
    pub shipping_cost: f64,
    #[serde(default)]
    pub tax: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectOrderItem {
    pub variant_id: u64,
    pub quantity: u32,
    /// Decimal string ("28.00"). When absent, `price` is used instead.
    #[serde(default)]
    pub retail_price: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectOrderResponse {
    pub success: bool,
    pub order: OrderConfirmation,
}
