use mockall::mock;
use printful_tools::{NewOrder, OrderConfirmation, PrintfulApiError, ProductDetail, SyncProduct};
use stripe_tools::{CheckoutSession, NewSessionParams, StripeApiError};

use crate::traits::{FulfillmentProvider, PaymentProvider};

mock! {
    pub Fulfillment {}
    impl FulfillmentProvider for Fulfillment {
        async fn list_products(&self) -> Result<Vec<SyncProduct>, PrintfulApiError>;
        async fn get_product(&self, id: &str) -> Result<ProductDetail, PrintfulApiError>;
        async fn create_order(&self, order: &NewOrder) -> Result<OrderConfirmation, PrintfulApiError>;
    }
}

mock! {
    pub Payment {}
    impl PaymentProvider for Payment {
        async fn create_checkout_session(&self, params: NewSessionParams) -> Result<CheckoutSession, StripeApiError>;
        async fn fetch_checkout_session(&self, id: &str) -> Result<CheckoutSession, StripeApiError>;
    }
}
