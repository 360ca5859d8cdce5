use serde::{Deserialize, Serialize};
use sfs_common::UsdAmount;

use crate::Cart;

//--------------------------------------     Category       ----------------------------------------------------------
/// The storefront's product taxonomy. Categories are inferred from product names during catalog normalization;
/// anything unrecognized lands in `Accessories`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Apparel,
    Patches,
    #[default]
    Accessories,
}

//--------------------------------------     Variant       -----------------------------------------------------------
/// A purchasable unit of a [`Product`]. Identifiers are opaque, provider-assigned, and unique within the catalog.
///
/// The fulfillment provider exposes no real-time inventory, so `stock` is a constant sentinel in the normalized
/// catalog. The stock-validation call sites ([`crate::pick_first_available`] and [`crate::pick_variant`]) treat it as
/// authoritative regardless.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variant {
    pub id: String,
    pub size: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    pub price: UsdAmount,
    pub stock: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
}

//--------------------------------------     Product       -----------------------------------------------------------
/// A catalog entry, built fresh by catalog normalization on every fetch and never persisted locally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// The lowest non-zero variant price, or zero when no variant carries a price.
    pub price: UsdAmount,
    pub category: Category,
    pub images: Vec<String>,
    pub sizes: Vec<String>,
    #[serde(default)]
    pub variants: Vec<Variant>,
    #[serde(rename = "isNew", default)]
    pub is_new: bool,
}

//--------------------------------------     CartLine       ----------------------------------------------------------
/// One persisted cart row: "N units of variant V from product P at the price captured at add-time."
///
/// The unit price is frozen at the moment of addition and is never re-fetched from the catalog on later views. At
/// most one line exists per (product id, variant id) pair in a cart; re-adding the pair bumps the quantity instead.
///
/// Field names serialize in camelCase because the line array round-trips verbatim through the payment session's
/// metadata, whose contract predates this implementation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub product_id: String,
    pub variant_id: String,
    pub name: String,
    pub size: String,
    pub price: UsdAmount,
    pub quantity: u32,
    #[serde(default)]
    pub image: String,
}

impl CartLine {
    pub fn new(product: &Product, variant: &Variant, quantity: u32) -> Self {
        Self {
            product_id: product.id.clone(),
            variant_id: variant.id.clone(),
            name: product.name.clone(),
            size: variant.size.clone(),
            price: variant.price,
            quantity,
            image: product.images.first().cloned().unwrap_or_default(),
        }
    }

    pub fn line_total(&self) -> UsdAmount {
        self.price * i64::from(self.quantity)
    }
}

//--------------------------------------     OrderSnapshot       -----------------------------------------------------
/// The checkout handoff payload: the full line list plus the derived total at the moment checkout began.
///
/// The order proxy serializes this snapshot into the payment session's opaque metadata and decodes it byte-for-byte
/// after payment confirmation, which is what lets the proxy stay stateless across the hosted-payment redirect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderSnapshot {
    pub items: Vec<CartLine>,
    pub total: UsdAmount,
}

impl OrderSnapshot {
    pub fn from_cart(cart: &Cart) -> Self {
        Self { items: cart.lines().to_vec(), total: cart.total() }
    }
}
