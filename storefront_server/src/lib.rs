//! # Storefront order proxy
//!
//! A stateless HTTP service that sits between the browser storefront and two upstream providers:
//! * **Printful** supplies the product catalog and fulfills physical orders.
//! * **Stripe** hosts the checkout flow and captures payment plus the shopper's shipping details.
//!
//! The proxy holds no database. Order intent survives the hosted-payment redirect by being serialized into the
//! checkout session's opaque metadata at creation time and decoded verbatim after payment confirmation
//! (see [checkout](checkout/index.html)). The one deliberate piece of durable state is the reconciliation outbox
//! ([reconciliation](reconciliation/index.html)), which records orders whose payment succeeded but whose fulfillment
//! submission failed.
//!
//! ## Configuration
//! Everything is configured via `SFS_*` environment variables. See [config](config/index.html).
//!
//! ## Routes
//! * `GET /health` — liveness check.
//! * `GET /api/products`, `GET /api/product?id=` — normalized catalog reads.
//! * `POST /api/create-checkout-session` — cart snapshot in, hosted-payment session id out.
//! * `POST /api/payment-success` — confirms payment and submits the fulfillment order.
//! * `POST /api/order` — legacy direct-fulfillment bypass.
//! * `POST /api/webhook` — fulfillment provider event notifications (logged only).

pub mod catalog;
pub mod checkout;
pub mod config;
pub mod data_objects;
pub mod errors;
pub mod reconciliation;
pub mod routes;
pub mod server;
pub mod traits;

#[cfg(test)]
mod endpoint_tests;
