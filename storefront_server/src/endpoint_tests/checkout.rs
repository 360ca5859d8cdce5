use actix_web::{http::StatusCode, web, web::ServiceConfig};
use cart_engine::{CartLine, OrderSnapshot};
use printful_tools::{OrderConfirmation, PrintfulApiError};
use sfs_common::UsdAmount;
use stripe_tools::{Address, CheckoutSession, CustomerDetails, PaymentStatus, ShippingDetails};

use super::{
    helpers::post_request,
    mocks::{MockFulfillment, MockPayment},
};
use crate::{
    checkout::ORDER_METADATA_KEY,
    data_objects::{PaymentSuccessRequest, PaymentSuccessResponse},
    reconciliation::FulfillmentOutbox,
    routes,
};

fn snapshot() -> OrderSnapshot {
    OrderSnapshot {
        items: vec![CartLine {
            product_id: "371".to_string(),
            variant_id: "1001".to_string(),
            name: "Dishonest Cat Tee".to_string(),
            size: "S".to_string(),
            price: UsdAmount::from_cents(2800),
            quantity: 2,
            image: "tee.png".to_string(),
        }],
        total: UsdAmount::from_cents(5600),
    }
}

fn paid_session(id: &str) -> CheckoutSession {
    CheckoutSession {
        id: id.to_string(),
        payment_status: PaymentStatus::Paid,
        metadata: [(ORDER_METADATA_KEY.to_string(), serde_json::to_string(&snapshot()).unwrap())]
            .into_iter()
            .collect(),
        shipping_details: Some(ShippingDetails {
            name: "Pat Doe".to_string(),
            address: Address {
                line1: "1 Main St".to_string(),
                line2: None,
                city: "Springfield".to_string(),
                state: "IL".to_string(),
                country: "US".to_string(),
                postal_code: "62701".to_string(),
            },
        }),
        customer_details: Some(CustomerDetails { email: Some("pat@example.com".to_string()), phone: None }),
        amount_total: Some(5600),
    }
}

fn confirmation() -> OrderConfirmation {
    OrderConfirmation { id: 8800, status: "draft".to_string(), extra: Default::default() }
}

fn session_routes(
    payments: MockPayment,
    fulfillment: MockFulfillment,
    outbox: FulfillmentOutbox,
) -> impl FnOnce(&mut ServiceConfig) {
    move |cfg| {
        cfg.app_data(web::Data::new(payments))
            .app_data(web::Data::new(fulfillment))
            .app_data(web::Data::new(outbox))
            .route(
                "/create-checkout-session",
                web::post().to(routes::create_checkout_session::<MockPayment>),
            )
            .route("/payment-success", web::post().to(routes::payment_success::<MockPayment, MockFulfillment>))
            .route("/order", web::post().to(routes::direct_order::<MockFulfillment>));
    }
}

fn null_outbox() -> FulfillmentOutbox {
    FulfillmentOutbox::new("unused-outbox.jsonl")
}

#[actix_web::test]
async fn empty_carts_are_rejected_before_any_provider_call() {
    let mut payments = MockPayment::new();
    payments.expect_create_checkout_session().never();
    let body = OrderSnapshot { items: vec![], total: UsdAmount::default() };
    let (status, body) =
        post_request("/create-checkout-session", &body, session_routes(payments, MockFulfillment::new(), null_outbox()))
            .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains("No items in cart"), "body was: {body}");
}

#[actix_web::test]
async fn session_creation_returns_the_id_and_embeds_the_snapshot() {
    let mut payments = MockPayment::new();
    payments
        .expect_create_checkout_session()
        .withf(|params| {
            let (key, order_data) = &params.metadata[0];
            let embedded = serde_json::from_str::<OrderSnapshot>(order_data).unwrap();
            key == ORDER_METADATA_KEY && embedded == snapshot() && params.line_items.len() == 1
        })
        .returning(|_| Ok(paid_session("cs_test_42")));
    let (status, body) =
        post_request("/create-checkout-session", &snapshot(), session_routes(payments, MockFulfillment::new(), null_outbox()))
            .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, r#"{"sessionId":"cs_test_42"}"#);
}

#[actix_web::test]
async fn unpaid_sessions_place_no_fulfillment_order() {
    let mut payments = MockPayment::new();
    payments.expect_fetch_checkout_session().returning(|id| {
        let mut session = paid_session(id);
        session.payment_status = PaymentStatus::Unpaid;
        Ok(session)
    });
    let mut fulfillment = MockFulfillment::new();
    fulfillment.expect_create_order().never();
    let body = PaymentSuccessRequest { session_id: "cs_test_42".to_string() };
    let (status, body) =
        post_request("/payment-success", &body, session_routes(payments, fulfillment, null_outbox())).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body.contains("Payment not completed"), "body was: {body}");
}

#[actix_web::test]
async fn paid_sessions_are_submitted_for_fulfillment() {
    let mut payments = MockPayment::new();
    payments.expect_fetch_checkout_session().withf(|id| id == "cs_test_42").returning(|id| Ok(paid_session(id)));
    let mut fulfillment = MockFulfillment::new();
    fulfillment
        .expect_create_order()
        .withf(|order| {
            order.recipient.name == "Pat Doe" &&
                order.recipient.email == "pat@example.com" &&
                order.items.len() == 1 &&
                order.items[0].variant_id == 1001 &&
                order.items[0].quantity == 2 &&
                order.items[0].retail_price == "28.00"
        })
        .returning(|_| Ok(confirmation()));
    let body = PaymentSuccessRequest { session_id: "cs_test_42".to_string() };
    let (status, body) =
        post_request("/payment-success", &body, session_routes(payments, fulfillment, null_outbox())).await;
    assert_eq!(status, StatusCode::OK);
    let response = serde_json::from_str::<PaymentSuccessResponse>(&body).unwrap();
    assert!(response.success);
    assert_eq!(response.order.id, 8800);
    assert_eq!(response.stripe_session_id, "cs_test_42");
}

#[actix_web::test]
async fn failed_fulfillment_is_recorded_in_the_outbox() {
    let dir = tempfile::tempdir().unwrap();
    let outbox_path = dir.path().join("outbox.jsonl");
    let outbox = FulfillmentOutbox::new(&outbox_path);
    let mut payments = MockPayment::new();
    payments.expect_fetch_checkout_session().returning(|id| Ok(paid_session(id)));
    let mut fulfillment = MockFulfillment::new();
    fulfillment
        .expect_create_order()
        .returning(|_| Err(PrintfulApiError::QueryError { status: 502, message: "printing press on fire".to_string() }));
    let body = PaymentSuccessRequest { session_id: "cs_test_42".to_string() };
    let (status, body) =
        post_request("/payment-success", &body, session_routes(payments, fulfillment, outbox.clone())).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body.contains("Payment succeeded but the order could not be submitted"), "body was: {body}");
    let pending = outbox.pending();
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].session_id, "cs_test_42");
    assert_eq!(pending[0].order.items[0].variant_id, 1001);
    assert!(pending[0].error.contains("printing press on fire"));
}

#[actix_web::test]
async fn direct_orders_bypass_the_payment_flow() {
    let mut fulfillment = MockFulfillment::new();
    fulfillment
        .expect_create_order()
        .withf(|order| {
            order.items[0].retail_price == "28.00" &&
                order.retail_costs.shipping == "5.00" &&
                order.recipient.name == "Pat Doe"
        })
        .returning(|_| Ok(confirmation()));
    let body = serde_json::json!({
        "recipient": { "name": "Pat Doe", "address1": "1 Main St", "city": "Springfield", "state_code": "IL",
                       "country_code": "US", "zip": "62701", "email": "pat@example.com" },
        "items": [{ "variant_id": 1001, "quantity": 2, "price": 28.0 }],
        "shipping_cost": 5.0
    });
    let (status, body) =
        post_request("/order", &body, session_routes(MockPayment::new(), fulfillment, null_outbox())).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#""success":true"#), "body was: {body}");
}

#[actix_web::test]
async fn direct_orders_without_a_recipient_get_the_standard_error_body() {
    let mut fulfillment = MockFulfillment::new();
    fulfillment.expect_create_order().never();
    let body = serde_json::json!({
        "items": [{ "variant_id": 1001, "quantity": 1, "price": 28.0 }]
    });
    let (status, body) =
        post_request("/order", &body, session_routes(MockPayment::new(), fulfillment, null_outbox())).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let parsed = serde_json::from_str::<serde_json::Value>(&body).unwrap();
    assert_eq!(parsed["error"], "Bad Request");
    assert!(parsed["message"].as_str().unwrap().contains("recipient"), "body was: {body}");
}

#[actix_web::test]
async fn direct_orders_require_at_least_one_item() {
    let mut fulfillment = MockFulfillment::new();
    fulfillment.expect_create_order().never();
    let body = serde_json::json!({
        "recipient": { "name": "Pat Doe", "email": "pat@example.com" },
        "items": []
    });
    let (status, body) =
        post_request("/order", &body, session_routes(MockPayment::new(), fulfillment, null_outbox())).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains("Invalid order data"), "body was: {body}");
}
