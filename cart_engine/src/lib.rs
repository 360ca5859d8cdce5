//! # Cart Engine
//!
//! The client-resident half of the storefront. It owns the shopping cart: line items, the persistence contract that
//! survives page reloads, derived totals, stock validation at the add-to-cart call sites, and the handoff of a cart
//! snapshot to the order proxy at checkout time.
//!
//! The library is deliberately UI-agnostic. Rendering layers subscribe to [`CartEvent`]s published by a
//! [`CartSession`] after every mutation instead of reading engine internals; the events carry the freshly recomputed
//! item count and total.
//!
//! Persistence goes through the [`CartStore`] trait. The provided [`FileCartStore`] serializes the line array under a
//! fixed storage key and *fails soft* on restore: a corrupt or absent cart must never block the storefront from
//! loading, so any read problem yields an empty cart.
//!
//! Checkout goes through the [`CheckoutGateway`] trait. The provided [`HttpCheckoutGateway`] posts the order snapshot
//! to the order proxy's session-creation endpoint and returns the hosted-payment redirect handle. The cart is only
//! cleared once the payment provider confirms completion (see [`CartSession::complete_checkout`]).

mod cart;
mod cart_types;
mod errors;
mod events;
mod gateway;
mod session;
mod stock;
mod store;

pub use cart::Cart;
pub use cart_types::{CartLine, Category, OrderSnapshot, Product, Variant};
pub use errors::{CartError, CartStoreError, CheckoutError};
pub use events::{CartEvent, CartListener};
pub use gateway::{CheckoutGateway, CheckoutRedirect, HttpCheckoutGateway};
pub use session::CartSession;
pub use stock::{pick_first_available, pick_variant};
pub use store::{CartStore, FileCartStore, CART_STORAGE_KEY};
