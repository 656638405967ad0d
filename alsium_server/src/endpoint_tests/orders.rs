use actix_web::{http::StatusCode, web, web::ServiceConfig};
use alsium_common::Paise;
use alsium_engine::{NewOrder, Order, OrderFlowApi, OrderGatewayError};
use serde_json::{json, Value};

use super::helpers::{post_request, TEST_KEY_ID};
use crate::{config::CheckoutOptions, endpoint_tests::mocks::MockGateway, routes::CreateOrderRoute};

fn echo(order: &NewOrder) -> Result<Order, OrderGatewayError> {
    Ok(Order {
        id: "order_IluGWxBm9U8zJ8".into(),
        amount: order.amount,
        currency: order.currency.clone(),
        receipt: order.receipt.clone(),
    })
}

fn configure_with(gateway: MockGateway) -> impl FnOnce(&mut ServiceConfig) {
    move |cfg: &mut ServiceConfig| {
        cfg.service(CreateOrderRoute::<MockGateway>::new())
            .app_data(web::Data::new(OrderFlowApi::new(gateway)))
            .app_data(web::Data::new(CheckoutOptions::new(TEST_KEY_ID)));
    }
}

fn expect_default_order() -> MockGateway {
    let mut gateway = MockGateway::new();
    gateway
        .expect_create_order()
        .withf(|o| o.amount == Paise::from(1200) && o.currency == "INR" && o.receipt == "order_rcptid_guest")
        .times(1)
        .returning(echo);
    gateway
}

#[actix_web::test]
async fn create_order_for_user() {
    let _ = env_logger::try_init().ok();
    let mut gateway = MockGateway::new();
    gateway
        .expect_create_order()
        .withf(|o| o.amount == Paise::from(5000) && o.receipt == "order_rcptid_alice")
        .times(1)
        .returning(echo);
    let (status, body) =
        post_request("/create_order", r#"{"amount": 5000, "user_id": "alice"}"#, configure_with(gateway)).await;
    assert_eq!(status, StatusCode::OK);
    let body: Value = serde_json::from_str(&body).expect("json body");
    assert_eq!(
        body,
        json!({"order_id": "order_IluGWxBm9U8zJ8", "amount": 5000, "currency": "INR", "key": "rzp_test_abc123"})
    );
}

#[actix_web::test]
async fn create_order_with_empty_body() {
    let _ = env_logger::try_init().ok();
    let (status, body) = post_request("/create_order", "", configure_with(expect_default_order())).await;
    assert_eq!(status, StatusCode::OK);
    let body: Value = serde_json::from_str(&body).expect("json body");
    assert_eq!(body["amount"], 1200);
    assert_eq!(body["currency"], "INR");
    assert_eq!(body["key"], TEST_KEY_ID);
}

#[actix_web::test]
async fn create_order_with_empty_object() {
    let _ = env_logger::try_init().ok();
    let (status, body) = post_request("/create_order", "{}", configure_with(expect_default_order())).await;
    assert_eq!(status, StatusCode::OK);
    let body: Value = serde_json::from_str(&body).expect("json body");
    assert_eq!(body["order_id"], "order_IluGWxBm9U8zJ8");
    assert_eq!(body["amount"], 1200);
}

#[actix_web::test]
async fn create_order_with_null_user() {
    let _ = env_logger::try_init().ok();
    let (status, _) =
        post_request("/create_order", r#"{"user_id": null}"#, configure_with(expect_default_order())).await;
    assert_eq!(status, StatusCode::OK);
}

#[actix_web::test]
async fn gateway_failure() {
    let _ = env_logger::try_init().ok();
    let mut gateway = MockGateway::new();
    gateway
        .expect_create_order()
        .times(1)
        .returning(|_| Err(OrderGatewayError::Rejected("Authentication failed".into())));
    let (status, body) = post_request("/create_order", "{}", configure_with(gateway)).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, r#"{"error":"Authentication failed"}"#);
}

#[actix_web::test]
async fn malformed_body() {
    let _ = env_logger::try_init().ok();
    let mut gateway = MockGateway::new();
    gateway.expect_create_order().never();
    let (status, body) = post_request("/create_order", "{amount: 5000", configure_with(gateway)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.starts_with(r#"{"error":"Could not read request body: "#), "was {body}");
}
