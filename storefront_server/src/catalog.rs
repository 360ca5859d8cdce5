//! Catalog normalization: translating Printful's sync-product schema into the storefront's [`Product`]/[`Variant`]
//! shape. Nothing is cached; every call re-fetches from the provider.

use cart_engine::{Category, Product, Variant};
use log::*;
use printful_tools::{ProductDetail, SyncProduct};
use sfs_common::UsdAmount;

use crate::{errors::ServerError, traits::FulfillmentProvider};

/// Printful exposes no real-time inventory, so normalized variants carry a constant stock sentinel. The cart engine's
/// stock checks treat it as authoritative; swap this for a genuine inventory source before relying on it.
pub const DEFAULT_VARIANT_STOCK: u32 = 100;

const FALLBACK_SIZE: &str = "One Size";

/// Infers the storefront category from the product name.
pub fn categorize(product_name: &str) -> Category {
    let name = product_name.to_lowercase();
    const APPAREL: [&str; 4] = ["shirt", "tee", "hoodie", "tank"];
    const PATCHES: [&str; 2] = ["patch", "embroidered"];
    if APPAREL.iter().any(|kw| name.contains(kw)) {
        Category::Apparel
    } else if PATCHES.iter().any(|kw| name.contains(kw)) {
        Category::Patches
    } else {
        Category::Accessories
    }
}

/// Normalizes a summary entry. Summaries carry no variants or pricing, so this is the degraded shape used when a
/// detail fetch fails.
pub fn product_from_summary(summary: &SyncProduct) -> Product {
    Product {
        id: summary.id.to_string(),
        name: summary.name.clone(),
        description: String::new(),
        price: UsdAmount::default(),
        category: categorize(&summary.name),
        images: summary.thumbnail_url.iter().cloned().collect(),
        sizes: Vec::new(),
        variants: Vec::new(),
        is_new: false,
    }
}

/// Normalizes a full product detail: variants with captured prices and the stock sentinel, the deduplicated size
/// list, and the product price set to the lowest non-zero variant price.
pub fn product_from_detail(detail: &ProductDetail) -> Product {
    let mut product = product_from_summary(&detail.sync_product);
    product.variants = detail
        .sync_variants
        .iter()
        .map(|v| {
            let price = v
                .retail_price
                .as_deref()
                .map(|p| {
                    UsdAmount::parse_decimal(p).unwrap_or_else(|e| {
                        warn!("📦️ Unparseable retail price for variant {}: {e}", v.id);
                        UsdAmount::default()
                    })
                })
                .unwrap_or_default();
            Variant {
                id: v.id.to_string(),
                size: v.size.clone().unwrap_or_else(|| FALLBACK_SIZE.to_string()),
                color: v.color.clone().filter(|c| !c.is_empty()),
                price,
                stock: DEFAULT_VARIANT_STOCK,
                sku: v.sku.clone(),
            }
        })
        .collect();
    for variant in &product.variants {
        if !product.sizes.contains(&variant.size) {
            product.sizes.push(variant.size.clone());
        }
    }
    product.price =
        product.variants.iter().map(|v| v.price).filter(|p| !p.is_zero()).min().unwrap_or_default();
    product
}

/// Fetches the whole normalized catalog. Detail fetches are issued concurrently, one per product, with independent
/// failure isolation: a single product's detail failure degrades that product to its summary shape instead of
/// failing the listing.
pub async fn fetch_catalog<C: FulfillmentProvider>(api: &C) -> Result<Vec<Product>, ServerError> {
    let summaries = api.list_products().await?;
    let details = summaries.iter().map(|summary| async move {
        match api.get_product(&summary.id.to_string()).await {
            Ok(detail) => product_from_detail(&detail),
            Err(e) => {
                warn!("📦️ Detail fetch for product {} failed ({e}). Falling back to summary data.", summary.id);
                product_from_summary(summary)
            },
        }
    });
    let products = futures::future::join_all(details).await;
    Ok(products)
}

/// Fetches one normalized product. Unlike the listing, a detail failure here is surfaced to the caller.
pub async fn fetch_product<C: FulfillmentProvider>(api: &C, id: &str) -> Result<Product, ServerError> {
    let detail = api.get_product(id).await?;
    Ok(product_from_detail(&detail))
}
