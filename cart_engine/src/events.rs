use sfs_common::UsdAmount;

/// Notifications published by a [`crate::CartSession`] after every mutation.
///
/// Rendering layers subscribe to these instead of polling engine state: `TotalsChanged` republishes the freshly
/// recomputed derived values (badge count, cart total), while the other variants are the transient, user-visible
/// confirmations ("item added", etc.).
#[derive(Debug, Clone, PartialEq)]
pub enum CartEvent {
    LineAdded { name: String, quantity: u32 },
    LineRemoved { product_id: String, variant_id: String },
    QuantityChanged { product_id: String, variant_id: String, quantity: u32 },
    CartCleared,
    CheckoutStarted { item_count: u32, total: UsdAmount },
    TotalsChanged { item_count: u32, total: UsdAmount },
}

/// Cart mutations are discrete, synchronous user actions on a single client context, so listeners are plain
/// callbacks with no threading requirements.
pub type CartListener = Box<dyn Fn(&CartEvent)>;
