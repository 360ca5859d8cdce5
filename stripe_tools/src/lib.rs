//! A thin, typed client for Stripe's hosted checkout flow: creating checkout sessions and retrieving them after the
//! shopper returns from the hosted page. Only the two calls the order proxy needs are modeled.
//!
//! Stripe's write API is form-encoded rather than JSON; [`api::StripeApi`] builds the nested bracket-keyed form pairs
//! (`line_items[0][price_data][unit_amount]`...) that the wire contract requires.

mod api;
mod config;
mod data_objects;
mod error;

pub use api::StripeApi;
pub use config::StripeConfig;
pub use data_objects::{
    Address,
    CheckoutSession,
    CustomerDetails,
    NewSessionParams,
    PaymentStatus,
    SessionLineItem,
    ShippingDetails,
};
pub use error::StripeApiError;
