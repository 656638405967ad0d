use actix_web::{http::StatusCode, web, web::ServiceConfig};
use alsium_common::Secret;
use alsium_engine::{helpers::PaymentVerifier, LedgerApi, LedgerRow, LedgerStoreError};
use serde_json::{json, Value};

use super::helpers::{post_request, post_requests, TEST_KEY_SECRET, VALID_SIGNATURE};
use crate::{endpoint_tests::mocks::MockLedger, routes::VerifyPaymentRoute};

fn configure_with(ledger: MockLedger) -> impl FnOnce(&mut ServiceConfig) {
    move |cfg: &mut ServiceConfig| {
        cfg.service(VerifyPaymentRoute::<MockLedger>::new())
            .app_data(web::Data::new(LedgerApi::new(ledger)))
            .app_data(web::Data::new(PaymentVerifier::new(Secret::from(TEST_KEY_SECRET))));
    }
}

fn untouched_ledger() -> MockLedger {
    let mut ledger = MockLedger::new();
    ledger.expect_append_row().never();
    ledger
}

fn payment_request() -> Value {
    json!({
        "razorpay_order_id": "order_1",
        "razorpay_payment_id": "pay_1",
        "razorpay_signature": VALID_SIGNATURE,
        "user_data": {
            "ig_username": "@alice",
            "full_name": "Alice Fernandes",
            "email": "alice@example.com",
            "phone": "+919800000000",
            "state": "Goa"
        }
    })
}

#[actix_web::test]
async fn valid_payment_is_recorded() {
    let _ = env_logger::try_init().ok();
    let mut ledger = MockLedger::new();
    ledger
        .expect_append_row()
        .withf(|row: &LedgerRow| {
            row.to_values() ==
                ["@alice", "Alice Fernandes", "alice@example.com", "+919800000000", "Goa", "order_1", "pay_1", "success"]
        })
        .times(1)
        .returning(|_| Ok(()));
    let (status, body) =
        post_request("/verify_payment", &payment_request().to_string(), configure_with(ledger)).await;
    assert_eq!(status, StatusCode::OK);
    let body: Value = serde_json::from_str(&body).expect("json body");
    assert_eq!(body, json!({"status": "Payment verified and user saved to Google Sheet", "user": "@alice"}));
}

#[actix_web::test]
async fn numeric_phone_number() {
    let _ = env_logger::try_init().ok();
    let mut ledger = MockLedger::new();
    ledger.expect_append_row().withf(|row: &LedgerRow| row.phone == "9800000000").times(1).returning(|_| Ok(()));
    let mut req = payment_request();
    req["user_data"]["phone"] = json!(9800000000u64);
    let (status, _) = post_request("/verify_payment", &req.to_string(), configure_with(ledger)).await;
    assert_eq!(status, StatusCode::OK);
}

#[actix_web::test]
async fn missing_signature() {
    let _ = env_logger::try_init().ok();
    let mut req = payment_request();
    req.as_object_mut().unwrap().remove("razorpay_signature");
    let (status, body) = post_request("/verify_payment", &req.to_string(), configure_with(untouched_ledger())).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, r#"{"error":"Missing required fields: razorpay_signature"}"#);
}

#[actix_web::test]
async fn all_missing_fields_are_reported() {
    let _ = env_logger::try_init().ok();
    let mut req = payment_request();
    req["razorpay_payment_id"] = json!("");
    req["user_data"]["email"] = Value::Null;
    req["user_data"].as_object_mut().unwrap().remove("ig_username");
    let (status, body) = post_request("/verify_payment", &req.to_string(), configure_with(untouched_ledger())).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        r#"{"error":"Missing required fields: razorpay_payment_id, user_data.ig_username, user_data.email"}"#
    );
}

#[actix_web::test]
async fn missing_user_data() {
    let _ = env_logger::try_init().ok();
    let mut req = payment_request();
    req.as_object_mut().unwrap().remove("user_data");
    let (status, body) = post_request("/verify_payment", &req.to_string(), configure_with(untouched_ledger())).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, r#"{"error":"Missing required fields: user_data"}"#);
}

#[actix_web::test]
async fn empty_body() {
    let _ = env_logger::try_init().ok();
    let (status, body) = post_request("/verify_payment", "", configure_with(untouched_ledger())).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains("razorpay_order_id, razorpay_payment_id, razorpay_signature, user_data"), "was {body}");
}

#[actix_web::test]
async fn forged_signature_is_rejected() {
    let _ = env_logger::try_init().ok();
    // Signed with a different secret
    let forged = "a4efd31cdc7cdfd4f518069de1e75ba945e99954e46570267806598c6b292697";
    let uppercase = VALID_SIGNATURE.to_uppercase();
    for signature in [forged, "deadbeef", uppercase.as_str()] {
        let mut req = payment_request();
        req["razorpay_signature"] = json!(signature);
        let (status, body) =
            post_request("/verify_payment", &req.to_string(), configure_with(untouched_ledger())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, r#"{"error":"Invalid payment signature"}"#);
    }
}

#[actix_web::test]
async fn repeated_forgeries_never_reach_the_ledger() {
    let _ = env_logger::try_init().ok();
    let forgeries = ["a4efd31cdc7cdfd4f518069de1e75ba945e99954e46570267806598c6b292697", "deadbeef", "0"]
        .into_iter()
        .map(|signature| {
            let mut req = payment_request();
            req["razorpay_signature"] = json!(signature);
            req.to_string()
        })
        .collect::<Vec<_>>();
    let responses = post_requests("/verify_payment", &forgeries, configure_with(untouched_ledger())).await;
    assert_eq!(responses.len(), 3);
    for (status, body) in responses {
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, r#"{"error":"Invalid payment signature"}"#);
    }
}

#[actix_web::test]
async fn forgeries_then_a_valid_payment_write_one_row() {
    let _ = env_logger::try_init().ok();
    let mut ledger = MockLedger::new();
    ledger.expect_append_row().withf(|row: &LedgerRow| row.payment_id == "pay_1").times(1).returning(|_| Ok(()));
    let mut forged = payment_request();
    forged["razorpay_signature"] = json!(VALID_SIGNATURE.replace('c', "d"));
    let bodies = vec![forged.to_string(), forged.to_string(), payment_request().to_string()];
    let responses = post_requests("/verify_payment", &bodies, configure_with(ledger)).await;
    let statuses = responses.iter().map(|(status, _)| *status).collect::<Vec<_>>();
    assert_eq!(statuses, vec![StatusCode::BAD_REQUEST, StatusCode::BAD_REQUEST, StatusCode::OK]);
}

#[actix_web::test]
async fn signature_is_bound_to_the_order() {
    let _ = env_logger::try_init().ok();
    let mut req = payment_request();
    req["razorpay_order_id"] = json!("order_2");
    let (status, body) = post_request("/verify_payment", &req.to_string(), configure_with(untouched_ledger())).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, r#"{"error":"Invalid payment signature"}"#);
}

#[actix_web::test]
async fn ledger_failure() {
    let _ = env_logger::try_init().ok();
    let mut ledger = MockLedger::new();
    ledger
        .expect_append_row()
        .times(1)
        .returning(|_| Err(LedgerStoreError::Unavailable("connection reset".into())));
    let (status, body) =
        post_request("/verify_payment", &payment_request().to_string(), configure_with(ledger)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, r#"{"error":"Failed to verify payment or save user: Ledger is unavailable. connection reset"}"#);
}
