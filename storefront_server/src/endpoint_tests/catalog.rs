use actix_web::{http::StatusCode, web, web::ServiceConfig};
use printful_tools::{PrintfulApiError, ProductDetail, SyncProduct, SyncVariant};

use super::{helpers::get_request, mocks::MockFulfillment};
use crate::{data_objects::ProductList, routes};

fn summaries() -> Vec<SyncProduct> {
    vec![
        SyncProduct { id: 371, name: "Dishonest Cat Tee".to_string(), thumbnail_url: Some("tee.png".to_string()) },
        SyncProduct { id: 9, name: "SBS Tribute Patch".to_string(), thumbnail_url: None },
    ]
}

fn tee_detail() -> ProductDetail {
    ProductDetail {
        sync_product: summaries().remove(0),
        sync_variants: vec![
            SyncVariant {
                id: 1001,
                size: Some("S".to_string()),
                color: Some("Black".to_string()),
                retail_price: Some("28.00".to_string()),
                sku: Some("TEE-S".to_string()),
            },
            SyncVariant {
                id: 1002,
                size: Some("M".to_string()),
                color: Some("Black".to_string()),
                retail_price: Some("28.00".to_string()),
                sku: Some("TEE-M".to_string()),
            },
        ],
    }
}

fn with_fulfillment(mock: MockFulfillment) -> impl FnOnce(&mut ServiceConfig) {
    move |cfg| {
        cfg.app_data(web::Data::new(mock))
            .route("/products", web::get().to(routes::products::<MockFulfillment>))
            .route("/product", web::get().to(routes::product::<MockFulfillment>));
    }
}

#[actix_web::test]
async fn listing_normalizes_details_and_degrades_on_detail_failure() {
    let mut mock = MockFulfillment::new();
    mock.expect_list_products().returning(|| Ok(summaries()));
    mock.expect_get_product().withf(|id| id == "371").returning(|_| Ok(tee_detail()));
    mock.expect_get_product()
        .withf(|id| id == "9")
        .returning(|_| Err(PrintfulApiError::QueryError { status: 502, message: "upstream burp".to_string() }));
    let (status, body) = get_request("/products", with_fulfillment(mock)).await;
    assert_eq!(status, StatusCode::OK);
    let list = serde_json::from_str::<ProductList>(&body).unwrap();
    assert_eq!(list.products.len(), 2);
    let tee = &list.products[0];
    assert_eq!(tee.id, "371");
    assert_eq!(tee.variants.len(), 2);
    assert_eq!(tee.sizes, vec!["S".to_string(), "M".to_string()]);
    // One failed detail fetch degrades that product to summary data without failing the listing.
    let patch = &list.products[1];
    assert_eq!(patch.id, "9");
    assert!(patch.variants.is_empty());
}

#[actix_web::test]
async fn single_product_fetch_requires_an_id() {
    let mut mock = MockFulfillment::new();
    mock.expect_get_product().never();
    let (status, body) = get_request("/product", with_fulfillment(mock)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains("Product ID required"), "body was: {body}");

    let mut mock = MockFulfillment::new();
    mock.expect_get_product().never();
    let (status, _) = get_request("/product?id=", with_fulfillment(mock)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn single_product_detail_failures_are_surfaced() {
    let mut mock = MockFulfillment::new();
    mock.expect_get_product()
        .withf(|id| id == "371")
        .returning(|_| Err(PrintfulApiError::QueryError { status: 404, message: "no such product".to_string() }));
    let (status, body) = get_request("/product?id=371", with_fulfillment(mock)).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body.contains("no such product"), "body was: {body}");
}
