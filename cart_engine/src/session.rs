use log::*;
use sfs_common::UsdAmount;

use crate::{
    cart_types::{CartLine, OrderSnapshot, Product, Variant},
    errors::CheckoutError,
    events::{CartEvent, CartListener},
    gateway::{CheckoutGateway, CheckoutRedirect},
    store::CartStore,
    Cart,
};

/// One shopper's cart for the lifetime of a browsing session.
///
/// The session restores the cart from the store on construction, persists after every mutation, and publishes
/// [`CartEvent`]s so the UI layer can re-render. Mutations never fail: a persistence error is logged and the
/// in-memory cart stays authoritative until the next successful save.
pub struct CartSession<S: CartStore, G: CheckoutGateway> {
    cart: Cart,
    store: S,
    gateway: G,
    listeners: Vec<CartListener>,
}

impl<S: CartStore, G: CheckoutGateway> CartSession<S, G> {
    pub fn new(store: S, gateway: G) -> Self {
        let cart = store.load();
        debug!("🛒️ Restored cart with {} line(s), total {}", cart.len(), cart.total());
        Self { cart, store, gateway, listeners: Vec::new() }
    }

    pub fn on_event(&mut self, listener: impl Fn(&CartEvent) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Adds `quantity` units of the given variant to the cart, merging into an existing line for the same
    /// (product, variant) pair. Stock is validated by the caller beforehand (see [`crate::pick_first_available`] and
    /// [`crate::pick_variant`]); this operation itself never fails.
    pub fn add_to_cart(&mut self, product: &Product, variant: &Variant, quantity: u32) {
        if quantity == 0 {
            debug!("🛒️ Ignoring add-to-cart with zero quantity for {}/{}", product.id, variant.id);
            return;
        }
        let line = CartLine::new(product, variant, quantity);
        let name = line.name.clone();
        self.cart.add_line(line);
        self.persist();
        self.publish(CartEvent::LineAdded { name, quantity });
        self.publish_totals();
    }

    /// Deletes the matching line; a silent no-op when it does not exist.
    pub fn remove_from_cart(&mut self, product_id: &str, variant_id: &str) {
        if self.cart.remove_line(product_id, variant_id) {
            self.persist();
            self.publish(CartEvent::LineRemoved {
                product_id: product_id.to_string(),
                variant_id: variant_id.to_string(),
            });
            self.publish_totals();
        }
    }

    /// Sets the matching line's quantity to an absolute value; zero (or below, in callers that deal in deltas) is
    /// equivalent to removal. A no-op when the line does not exist.
    pub fn update_quantity(&mut self, product_id: &str, variant_id: &str, new_quantity: u32) {
        if new_quantity == 0 {
            self.remove_from_cart(product_id, variant_id);
            return;
        }
        if self.cart.set_quantity(product_id, variant_id, new_quantity) {
            self.persist();
            self.publish(CartEvent::QuantityChanged {
                product_id: product_id.to_string(),
                variant_id: variant_id.to_string(),
                quantity: new_quantity,
            });
            self.publish_totals();
        }
    }

    pub fn total(&self) -> UsdAmount {
        self.cart.total()
    }

    pub fn item_count(&self) -> u32 {
        self.cart.item_count()
    }

    pub fn is_empty(&self) -> bool {
        self.cart.is_empty()
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Hands a snapshot of the cart to the order proxy and returns the hosted-payment redirect handle.
    ///
    /// A checkout on an empty cart is a no-op (`Ok(None)`) and issues no network call. On any failure the cart is
    /// left exactly as it was: contents are only cleared by [`CartSession::complete_checkout`], which the
    /// payment-success callback invokes once the provider confirms completion.
    pub async fn checkout(&mut self) -> Result<Option<CheckoutRedirect>, CheckoutError> {
        if self.cart.is_empty() {
            debug!("🛒️ Checkout requested on an empty cart; nothing to do.");
            return Ok(None);
        }
        let snapshot = OrderSnapshot::from_cart(&self.cart);
        self.publish(CartEvent::CheckoutStarted { item_count: self.cart.item_count(), total: snapshot.total });
        let redirect = self.gateway.create_session(&snapshot).await?;
        Ok(Some(redirect))
    }

    /// Clears and persists the cart. Only called from the payment-success path, never on checkout failure.
    pub fn complete_checkout(&mut self) {
        self.cart.clear();
        self.persist();
        self.publish(CartEvent::CartCleared);
        self.publish_totals();
    }

    fn persist(&self) {
        if let Err(e) = self.store.save(&self.cart) {
            warn!("🛒️ Could not persist the cart. The in-memory cart is still intact. {e}");
        }
    }

    fn publish(&self, event: CartEvent) {
        for listener in &self.listeners {
            listener(&event);
        }
    }

    fn publish_totals(&self) {
        self.publish(CartEvent::TotalsChanged { item_count: self.cart.item_count(), total: self.cart.total() });
    }
}

#[cfg(test)]
mod test {
    use std::{cell::RefCell, rc::Rc};

    use sfs_common::UsdAmount;

    use super::*;
    use crate::{errors::CheckoutError, store::FileCartStore, Category};

    /// Gateway double that counts calls and can be told to fail.
    struct RecordingGateway {
        calls: Rc<RefCell<Vec<OrderSnapshot>>>,
        fail: bool,
    }

    impl CheckoutGateway for RecordingGateway {
        async fn create_session(&self, snapshot: &OrderSnapshot) -> Result<CheckoutRedirect, CheckoutError> {
            self.calls.borrow_mut().push(snapshot.clone());
            if self.fail {
                Err(CheckoutError::Rejected { status: 500, message: "provider down".into() })
            } else {
                Ok(CheckoutRedirect { session_id: "cs_test_123".into() })
            }
        }
    }

    fn tee() -> (Product, Variant) {
        let variant = Variant {
            id: "101".into(),
            size: "S".into(),
            color: None,
            price: UsdAmount::from_cents(2800),
            stock: 10,
            sku: None,
        };
        let product = Product {
            id: "1".into(),
            name: "Dishonest Cat Tee".into(),
            description: String::new(),
            price: UsdAmount::from_cents(2800),
            category: Category::Apparel,
            images: vec!["tee.png".into()],
            sizes: vec!["S".into()],
            variants: vec![variant.clone()],
            is_new: true,
        };
        (product, variant)
    }

    fn session(
        dir: &std::path::Path,
        fail: bool,
    ) -> (CartSession<FileCartStore, RecordingGateway>, Rc<RefCell<Vec<OrderSnapshot>>>) {
        let _ = env_logger::try_init().ok();
        let calls = Rc::new(RefCell::new(Vec::new()));
        let gateway = RecordingGateway { calls: Rc::clone(&calls), fail };
        (CartSession::new(FileCartStore::new(dir), gateway), calls)
    }

    #[tokio::test]
    async fn checkout_on_empty_cart_issues_no_network_call() {
        let dir = tempfile::tempdir().unwrap();
        let (mut session, calls) = session(dir.path(), false);
        let redirect = session.checkout().await.unwrap();
        assert!(redirect.is_none());
        assert!(calls.borrow().is_empty());
    }

    #[tokio::test]
    async fn checkout_hands_over_the_full_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let (mut session, calls) = session(dir.path(), false);
        let (product, variant) = tee();
        session.add_to_cart(&product, &variant, 3);
        let redirect = session.checkout().await.unwrap().unwrap();
        assert_eq!(redirect.session_id, "cs_test_123");
        let snapshots = calls.borrow();
        assert_eq!(snapshots.len(), 1);
        assert_eq!(snapshots[0].total, UsdAmount::from_cents(8400));
        assert_eq!(snapshots[0].items.len(), 1);
        // Session creation alone never clears the cart; only the payment-success callback does.
        drop(snapshots);
        assert_eq!(session.item_count(), 3);
    }

    #[tokio::test]
    async fn failed_checkout_leaves_the_cart_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let (mut session, _calls) = session(dir.path(), true);
        let (product, variant) = tee();
        session.add_to_cart(&product, &variant, 2);
        let err = session.checkout().await.unwrap_err();
        assert!(matches!(err, CheckoutError::Rejected { status: 500, .. }));
        assert_eq!(session.item_count(), 2);
        assert_eq!(session.total(), UsdAmount::from_cents(5600));
    }

    #[tokio::test]
    async fn complete_checkout_clears_and_persists() {
        let dir = tempfile::tempdir().unwrap();
        let (mut session, _calls) = session(dir.path(), false);
        let (product, variant) = tee();
        session.add_to_cart(&product, &variant, 1);
        session.complete_checkout();
        assert!(session.is_empty());
        // A fresh session over the same store must restore the cleared cart.
        let (restored, _) = self::session(dir.path(), false);
        assert!(restored.is_empty());
    }

    #[tokio::test]
    async fn cart_state_survives_a_reload() {
        let dir = tempfile::tempdir().unwrap();
        let (product, variant) = tee();
        {
            let (mut session, _) = session(dir.path(), false);
            session.add_to_cart(&product, &variant, 2);
        }
        let (restored, _) = session(dir.path(), false);
        assert_eq!(restored.item_count(), 2);
        assert_eq!(restored.total(), UsdAmount::from_cents(5600));
        assert_eq!(restored.cart().line("1", "101").unwrap().size, "S");
    }

    #[tokio::test]
    async fn events_republish_derived_totals_after_every_mutation() {
        let dir = tempfile::tempdir().unwrap();
        let (mut session, _) = session(dir.path(), false);
        let totals = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&totals);
        session.on_event(move |ev| {
            if let CartEvent::TotalsChanged { item_count, total } = ev {
                sink.borrow_mut().push((*item_count, *total));
            }
        });
        let (product, variant) = tee();
        session.add_to_cart(&product, &variant, 1);
        session.update_quantity("1", "101", 4);
        session.remove_from_cart("1", "101");
        let seen = totals.borrow();
        assert_eq!(seen.as_slice(), &[
            (1, UsdAmount::from_cents(2800)),
            (4, UsdAmount::from_cents(11_200)),
            (0, UsdAmount::default()),
        ]);
    }
}
