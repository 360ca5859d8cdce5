//! A thin, typed client for the Printful store API: catalog reads (`/store/products`) and order submission
//! (`/orders`). The client only models the fields the storefront actually consumes; everything else rides along in
//! the `extra` maps so pass-through responses stay lossless.

mod api;
mod config;
mod data_objects;
mod error;

pub use api::PrintfulApi;
pub use config::PrintfulConfig;
pub use data_objects::{
    NewOrder,
    OrderConfirmation,
    OrderItem,
    ProductDetail,
    Recipient,
    RetailCosts,
    SyncProduct,
    SyncVariant,
    WebhookEvent,
};
pub use error::PrintfulApiError;
