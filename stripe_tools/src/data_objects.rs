use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use sfs_common::UsdAmount;

//--------------------------------------     Session (read) side     --------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Paid,
    #[default]
    Unpaid,
    NoPaymentRequired,
}

/// A retrieved checkout session. The `metadata` map round-trips whatever the proxy stored at creation time; the
/// shipping and customer details are whatever the hosted flow captured from the shopper.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CheckoutSession {
    pub id: String,
    #[serde(default)]
    pub payment_status: PaymentStatus,
    #[serde(default)]
    pub metadata: HashMap<String, String>,
    #[serde(default)]
    pub shipping_details: Option<ShippingDetails>,
    #[serde(default)]
    pub customer_details: Option<CustomerDetails>,
    #[serde(default)]
    pub amount_total: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShippingDetails {
    #[serde(default)]
    pub name: String,
    pub address: Address,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Address {
    #[serde(default)]
    pub line1: String,
    #[serde(default)]
    pub line2: Option<String>,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub postal_code: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CustomerDetails {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

//--------------------------------------     Session (write) side     -------------------------------------------------

/// One hosted-checkout line item. The payment provider is schema-agnostic to the catalog: it gets display data and a
/// unit amount in minor currency units, never product or variant identifiers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionLineItem {
    pub name: String,
    pub description: String,
    pub unit_amount: UsdAmount,
    pub quantity: u32,
    pub image: Option<String>,
}

/// Everything the caller contributes to a new session. Redirect URLs and the allowed-country list come from
/// [`crate::StripeConfig`]; metadata is an ordered list of key/value pairs stored opaquely on the session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewSessionParams {
    pub line_items: Vec<SessionLineItem>,
    pub metadata: Vec<(String, String)>,
}
