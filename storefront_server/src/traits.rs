//! Seams to the two upstream providers.
//!
//! Route handlers are generic over these traits so endpoint tests can substitute mocks for the real clients. The
//! concrete implementations simply delegate to [`StripeApi`] and [`PrintfulApi`].

use printful_tools::{NewOrder, OrderConfirmation, PrintfulApi, PrintfulApiError, ProductDetail, SyncProduct};
use stripe_tools::{CheckoutSession, NewSessionParams, StripeApi, StripeApiError};

#[allow(async_fn_in_trait)]
pub trait FulfillmentProvider: Send + Sync + 'static {
    async fn list_products(&self) -> Result<Vec<SyncProduct>, PrintfulApiError>;
    async fn get_product(&self, id: &str) -> Result<ProductDetail, PrintfulApiError>;
    async fn create_order(&self, order: &NewOrder) -> Result<OrderConfirmation, PrintfulApiError>;
}

#[allow(async_fn_in_trait)]
pub trait PaymentProvider: Send + Sync + 'static {
    async fn create_checkout_session(&self, params: NewSessionParams) -> Result<CheckoutSession, StripeApiError>;
    async fn fetch_checkout_session(&self, id: &str) -> Result<CheckoutSession, StripeApiError>;
}

impl FulfillmentProvider for PrintfulApi {
    async fn list_products(&self) -> Result<Vec<SyncProduct>, PrintfulApiError> {
        PrintfulApi::list_products(self).await
    }

    async fn get_product(&self, id: &str) -> Result<ProductDetail, PrintfulApiError> {
        PrintfulApi::get_product(self, id).await
    }

    async fn create_order(&self, order: &NewOrder) -> Result<OrderConfirmation, PrintfulApiError> {
        PrintfulApi::create_order(self, order).await
    }
}

impl PaymentProvider for StripeApi {
    async fn create_checkout_session(&self, params: NewSessionParams) -> Result<CheckoutSession, StripeApiError> {
        StripeApi::create_checkout_session(self, params).await
    }

    async fn fetch_checkout_session(&self, id: &str) -> Result<CheckoutSession, StripeApiError> {
        StripeApi::fetch_checkout_session(self, id).await
    }
}
