//! Route handlers for the order proxy.
//!
//! Handlers are generic over the [`PaymentProvider`] and [`FulfillmentProvider`] seams so that endpoint tests can
//! substitute mocks. Handlers never build responses for error paths themselves; they return [`ServerError`] and let
//! its `ResponseError` implementation produce the `{"error", "message"}` JSON body clients expect.

use actix_web::{web, HttpResponse};
use cart_engine::OrderSnapshot;
use log::*;
use printful_tools::{NewOrder, OrderItem, WebhookEvent};
use stripe_tools::PaymentStatus;

use crate::{
    catalog,
    checkout,
    data_objects::{
        DirectOrderRequest,
        DirectOrderResponse,
        PaymentSuccessRequest,
        PaymentSuccessResponse,
        ProductList,
        ProductQuery,
        SessionCreated,
        SingleProduct,
    },
    errors::ServerError,
    reconciliation::{FailedFulfillment, FulfillmentOutbox},
    traits::{FulfillmentProvider, PaymentProvider},
};

/// Liveness check. Returns a 200 with a cheerful body.
pub async fn health() -> HttpResponse {
    trace!("🩺️ Health check");
    HttpResponse::Ok().body("👍️\n")
}

/// `GET /api/products`. The full normalized catalog; individual detail failures degrade to summary data rather than
/// failing the listing.
pub async fn products<C: FulfillmentProvider>(api: web::Data<C>) -> Result<HttpResponse, ServerError> {
    let products = catalog::fetch_catalog(api.as_ref()).await?;
    debug!("📦️ Returning {} catalog products", products.len());
    Ok(HttpResponse::Ok().json(ProductList { products }))
}

/// `GET /api/product?id=`. A single normalized product; a missing or empty id is a 400.
pub async fn product<C: FulfillmentProvider>(
    query: web::Query<ProductQuery>,
    api: web::Data<C>,
) -> Result<HttpResponse, ServerError> {
    let id = query.into_inner().id.filter(|id| !id.is_empty()).ok_or(ServerError::MissingProductId)?;
    let product = catalog::fetch_product(api.as_ref(), &id).await?;
    Ok(HttpResponse::Ok().json(SingleProduct { product }))
}

/// `POST /api/create-checkout-session`. Takes the cart snapshot, creates a hosted-payment session with the snapshot
/// embedded in its metadata, and returns the session id for the client-side redirect. An empty cart is rejected
/// before any provider call is made.
pub async fn create_checkout_session<P: PaymentProvider>(
    body: web::Json<OrderSnapshot>,
    payments: web::Data<P>,
) -> Result<HttpResponse, ServerError> {
    let snapshot = body.into_inner();
    let params = checkout::session_params(&snapshot)?;
    let session = payments.create_checkout_session(params).await?;
    info!("💳️ Created checkout session {} for {} line(s), total {}", session.id, snapshot.items.len(), snapshot.total);
    Ok(HttpResponse::Ok().json(SessionCreated { session_id: session.id }))
}

/// `POST /api/payment-success`. Confirms that the session was actually paid, recovers the order snapshot from the
/// session metadata, and submits the fulfillment order with the provider-captured recipient. If payment succeeded but
/// the fulfillment submission fails, the order is recorded in the reconciliation outbox before the error is returned.
pub async fn payment_success<P: PaymentProvider, C: FulfillmentProvider>(
    body: web::Json<PaymentSuccessRequest>,
    payments: web::Data<P>,
    fulfillment: web::Data<C>,
    outbox: web::Data<FulfillmentOutbox>,
) -> Result<HttpResponse, ServerError> {
    let session_id = body.into_inner().session_id;
    let session = payments.fetch_checkout_session(&session_id).await?;
    if session.payment_status != PaymentStatus::Paid {
        info!("💳️ Session {session_id} reported status {:?}. No fulfillment order was placed.", session.payment_status);
        return Err(ServerError::PaymentIncomplete);
    }
    let snapshot = checkout::decode_snapshot(&session)?;
    let order = checkout::fulfillment_order(&session, &snapshot)?;
    let confirmation = match fulfillment.create_order(&order).await {
        Ok(confirmation) => confirmation,
        Err(e) => {
            error!("🚨️ Payment for session {session_id} succeeded but fulfillment submission failed. {e}");
            if let Err(io) = outbox.record(&FailedFulfillment::new(&session_id, order, &e)) {
                error!("🚨️ Could not record the failed fulfillment for session {session_id} in the outbox. {io}");
            }
            return Err(ServerError::FulfillmentFailed(e.to_string()));
        },
    };
    info!("📦️ Fulfillment order {} ({}) submitted for session {session_id}", confirmation.id, confirmation.status);
    Ok(HttpResponse::Ok().json(PaymentSuccessResponse {
        success: true,
        order: confirmation,
        stripe_session_id: session_id,
    }))
}

/// `POST /api/order`. The legacy direct-fulfillment bypass: the caller supplies the recipient and items and the
/// order is submitted without any payment step. Kept for compatibility; the hosted-payment flow is the canonical
/// path.
pub async fn direct_order<C: FulfillmentProvider>(
    body: web::Json<DirectOrderRequest>,
    fulfillment: web::Data<C>,
) -> Result<HttpResponse, ServerError> {
    let request = body.into_inner();
    if request.recipient == printful_tools::Recipient::default() {
        return Err(ServerError::InvalidOrderData("An order needs a recipient.".to_string()));
    }
    if request.items.is_empty() {
        return Err(ServerError::InvalidOrderData("An order needs at least one item.".to_string()));
    }
    let items = request
        .items
        .into_iter()
        .map(|item| OrderItem {
            variant_id: item.variant_id,
            quantity: item.quantity,
            retail_price: item
                .retail_price
                .unwrap_or_else(|| format!("{:.2}", item.price.unwrap_or_default())),
        })
        .collect();
    let order = NewOrder {
        recipient: request.recipient,
        items,
        retail_costs: printful_tools::RetailCosts {
            shipping: format!("{:.2}", request.shipping_cost),
            tax: format!("{:.2}", request.tax),
        },
    };
    warn!("🛒️ Direct order submitted for {} without a payment step.", order.recipient.name);
    let confirmation = fulfillment.create_order(&order).await?;
    info!("📦️ Direct fulfillment order {} ({}) submitted", confirmation.id, confirmation.status);
    Ok(HttpResponse::Ok().json(DirectOrderResponse { success: true, order: confirmation }))
}

/// `POST /api/webhook`. Fulfillment provider notifications are acknowledged and logged; no state changes happen here.
pub async fn webhook(body: web::Json<WebhookEvent>) -> HttpResponse {
    let event = body.into_inner();
    info!("📦️ Fulfillment webhook received: {}", event.event_type);
    HttpResponse::Ok().body("OK")
}
