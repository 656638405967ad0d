use actix_web::{http::StatusCode, web, web::ServiceConfig};

use super::helpers::{get_request, TEST_KEY_ID};
use crate::{
    config::CheckoutOptions,
    routes::{health, index, int_sheet, payment},
};

fn configure(cfg: &mut ServiceConfig) {
    cfg.service(health)
        .service(index)
        .service(payment)
        .service(int_sheet)
        .app_data(web::Data::new(CheckoutOptions::new(TEST_KEY_ID)));
}

#[actix_web::test]
async fn health_check() {
    let _ = env_logger::try_init().ok();
    let (status, body) = get_request("/health", configure).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "👍️\n");
}

#[actix_web::test]
async fn landing_page() {
    let _ = env_logger::try_init().ok();
    let (status, body) = get_request("/", configure).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<html"));
    assert!(!body.contains("{{"));
}

#[actix_web::test]
async fn payment_page_carries_the_key_id() {
    let _ = env_logger::try_init().ok();
    let (status, body) = get_request("/payment", configure).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#"data-razorpay-key="rzp_test_abc123""#));
    assert!(!body.contains("{{"));
}

#[actix_web::test]
async fn sheet_integration_page() {
    let _ = env_logger::try_init().ok();
    let (status, body) = get_request("/int_sheet", configure).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<html"));
}

#[actix_web::test]
async fn unknown_page() {
    let _ = env_logger::try_init().ok();
    let (status, _) = get_request("/admin", configure).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
