use std::path::{Path, PathBuf};

use log::*;

use crate::{errors::CartStoreError, Cart};

/// The fixed namespace key the cart is persisted under.
pub const CART_STORAGE_KEY: &str = "storefront_cart";

/// Durable local storage for the cart. The store is the sole source of truth across reloads; there is no server-side
/// cart.
///
/// `load` is deliberately infallible: a corrupt or missing cart must never block the storefront from loading, so any
/// read or deserialization problem yields an empty cart. `save` reports errors so callers can log them, but cart
/// mutations themselves never fail on a persistence error.
pub trait CartStore {
    fn load(&self) -> Cart;
    fn save(&self, cart: &Cart) -> Result<(), CartStoreError>;
}

/// File-backed [`CartStore`]: the serialized line array lives in a single JSON document named after
/// [`CART_STORAGE_KEY`] inside the given directory.
#[derive(Debug, Clone)]
pub struct FileCartStore {
    path: PathBuf,
}

impl FileCartStore {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self { path: dir.as_ref().join(format!("{CART_STORAGE_KEY}.json")) }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CartStore for FileCartStore {
    fn load(&self) -> Cart {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) => {
                debug!("🛒️ No saved cart at {} ({e}). Starting with an empty cart.", self.path.display());
                return Cart::default();
            },
        };
        match serde_json::from_str(&raw) {
            Ok(cart) => cart,
            Err(e) => {
                warn!("🛒️ Saved cart at {} is corrupt ({e}). Starting with an empty cart.", self.path.display());
                Cart::default()
            },
        }
    }

    fn save(&self, cart: &Cart) -> Result<(), CartStoreError> {
        let raw = serde_json::to_string(cart).map_err(|e| CartStoreError::Serialization(e.to_string()))?;
        std::fs::write(&self.path, raw)?;
        Ok(())
    }
}
