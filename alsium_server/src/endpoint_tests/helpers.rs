use actix_web::{
    http::{header::ContentType, StatusCode},
    test,
    test::TestRequest,
    web::ServiceConfig,
    App,
};
use log::debug;

pub const TEST_KEY_ID: &str = "rzp_test_abc123";
// Test-only API secret. Signatures below were computed with it.
pub const TEST_KEY_SECRET: &str = "s3cr3t";
/// HMAC-SHA256("s3cr3t", "order_1|pay_1")
pub const VALID_SIGNATURE: &str = "c4ba7785e595b717abd8b4847eaf30e97f23acbdbe1b8f5cbbf17d28d63b068f";

pub async fn get_request<F>(path: &str, configure: F) -> (StatusCode, String)
where F: FnOnce(&mut ServiceConfig) {
    call(TestRequest::get().uri(path), configure).await
}

pub async fn post_request<F>(path: &str, body: &str, configure: F) -> (StatusCode, String)
where F: FnOnce(&mut ServiceConfig) {
    let req = TestRequest::post().uri(path).insert_header(ContentType::json()).set_payload(body.to_string());
    call(req, configure).await
}

/// Sends every body to the same service instance, in order, so that app data (and mock expectations) are shared.
pub async fn post_requests<F>(path: &str, bodies: &[String], configure: F) -> Vec<(StatusCode, String)>
where F: FnOnce(&mut ServiceConfig) {
    let app = App::new().configure(configure);
    let service = test::init_service(app).await;
    let mut responses = Vec::with_capacity(bodies.len());
    for body in bodies {
        let req = TestRequest::post().uri(path).insert_header(ContentType::json()).set_payload(body.clone());
        debug!("Making request {} of {}", responses.len() + 1, bodies.len());
        let res = test::call_service(&service, req.to_request()).await;
        let status = res.status();
        let body = test::read_body(res).await;
        responses.push((status, String::from_utf8_lossy(&body).into_owned()));
    }
    responses
}

async fn call<F>(req: TestRequest, configure: F) -> (StatusCode, String)
where F: FnOnce(&mut ServiceConfig) {
    let app = App::new().configure(configure);
    let service = test::init_service(app).await;
    debug!("Making request");
    let res = test::call_service(&service, req.to_request()).await;
    let status = res.status();
    let body = test::read_body(res).await;
    (status, String::from_utf8_lossy(&body).into_owned())
}
