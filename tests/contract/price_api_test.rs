// Contract tests for POST /bookings/price
//
// Exercise the real route table in-process and validate the response
// envelopes: success shape, field names and types, error codes and statuses.

#[path = "../helpers/mod.rs"]
mod helpers;

use actix_web::{http::StatusCode, test, web, App};
use serde_json::{json, Value};

use evrent_pricing::middleware::RequestId;
use evrent_pricing::modules;
use helpers::*;

macro_rules! pricing_app {
    () => {{
        let repo = vehicle_repository();
        let service = pricing_service_with(repo.clone(), utc_policy());
        test::init_service(
            App::new()
                .wrap(RequestId)
                .app_data(web::Data::new(service))
                .app_data(web::Data::new(repo))
                .configure(modules::configure),
        )
        .await
    }};
}

async fn post_price(payload: Value) -> (StatusCode, Value) {
    let app = pricing_app!();
    let req = test::TestRequest::post()
        .uri("/bookings/price")
        .set_json(&payload)
        .to_request();
    let resp = test::call_service(&app, req).await;
    let status = resp.status();
    let body: Value = test::read_body_json(resp).await;
    (status, body)
}

fn assert_error_envelope(body: &Value, code: &str) {
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], code);
    assert!(body["error"]["message"].is_string(), "message must be string");
    assert!(body.get("data").is_none(), "errors carry no data");
}

#[actix_web::test]
async fn test_price_quote_success_envelope() {
    let (status, body) = post_price(TestDataFactory::price_payload()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let data = &body["data"];
    for field in [
        "hourly_rate",
        "daily_rate",
        "deposit",
        "basePrice",
        "insurancePrice",
        "taxes",
        "totalPrice",
    ] {
        assert!(data[field].is_number(), "{} must be a number", field);
    }

    assert_eq!(data["currency"], "USD");
    assert_eq!(data["hourly_rate"].as_f64(), Some(20.0));
    assert_eq!(data["daily_rate"].as_f64(), Some(135.0));
    assert_eq!(data["basePrice"].as_f64(), Some(40.0));
    assert_eq!(data["insurancePrice"].as_f64(), Some(0.0));
    assert_eq!(data["taxes"].as_f64(), Some(4.0));
    assert_eq!(data["totalPrice"].as_f64(), Some(44.0));
    assert_eq!(data["deposit"].as_f64(), Some(8.8));

    let details = &data["details"];
    assert_eq!(details["rentalType"], "hourly");
    assert_eq!(details["hours"].as_i64(), Some(2));
    assert_eq!(details["days"].as_i64(), Some(0));
}

#[actix_web::test]
async fn test_price_quote_daily_weekend_with_insurance() {
    let mut payload = TestDataFactory::price_payload_with(
        UNPRICED_VEHICLE,
        "2025-11-01T00:00:00Z",
        "2025-11-03T00:00:00Z",
    );
    payload["insurancePremium"] = json!(true);

    let (status, body) = post_price(payload).await;
    assert_eq!(status, StatusCode::OK);

    let data = &body["data"];
    assert_eq!(data["details"]["rentalType"], "daily");
    assert_eq!(data["details"]["days"].as_i64(), Some(2));
    assert_eq!(data["details"]["hours"].as_i64(), Some(48));
    assert_eq!(data["basePrice"].as_f64(), Some(324.0));
    assert_eq!(data["insurancePrice"].as_f64(), Some(32.4));
    assert_eq!(data["taxes"].as_f64(), Some(35.64));
    assert_eq!(data["totalPrice"].as_f64(), Some(392.04));
    assert_eq!(data["deposit"].as_f64(), Some(78.41));
}

#[actix_web::test]
async fn test_price_quote_in_vnd() {
    let mut payload = TestDataFactory::price_payload();
    payload["currency"] = json!("VND");

    let (status, body) = post_price(payload).await;
    assert_eq!(status, StatusCode::OK);

    let data = &body["data"];
    assert_eq!(data["currency"], "VND");
    assert_eq!(data["hourly_rate"].as_f64(), Some(520000.0));
    assert_eq!(data["basePrice"].as_f64(), Some(1040000.0));
    assert_eq!(data["totalPrice"].as_f64(), Some(1144000.0));
    assert_eq!(data["deposit"].as_f64(), Some(228800.0));
}

#[actix_web::test]
async fn test_reversed_range_is_bad_request() {
    let payload = TestDataFactory::price_payload_with(
        UNPRICED_VEHICLE,
        "2025-11-03T12:00:00Z",
        "2025-11-03T10:00:00Z",
    );

    let (status, body) = post_price(payload).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_error_envelope(&body, "BAD_REQUEST");
}

#[actix_web::test]
async fn test_unparsable_timestamp_is_bad_request() {
    let payload =
        TestDataFactory::price_payload_with(UNPRICED_VEHICLE, "tomorrow", "2025-11-03T10:00:00Z");

    let (status, body) = post_price(payload).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_error_envelope(&body, "BAD_REQUEST");
}

#[actix_web::test]
async fn test_bad_range_wins_over_unknown_vehicle() {
    let payload = TestDataFactory::price_payload_with(
        "ev-missing",
        "2025-11-03T12:00:00Z",
        "2025-11-03T12:00:00Z",
    );

    let (status, body) = post_price(payload).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_error_envelope(&body, "BAD_REQUEST");
}

#[actix_web::test]
async fn test_unknown_vehicle_is_not_found() {
    let payload = TestDataFactory::price_payload_with(
        "ev-missing",
        "2025-11-03T10:00:00Z",
        "2025-11-03T12:00:00Z",
    );

    let (status, body) = post_price(payload).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_error_envelope(&body, "NOT_FOUND");
    assert_eq!(body["error"]["message"], "Not found: Vehicle not found");
}

#[actix_web::test]
async fn test_unsupported_currency_is_bad_request() {
    let mut payload = TestDataFactory::price_payload();
    payload["currency"] = json!("EUR");

    let (status, body) = post_price(payload).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_error_envelope(&body, "BAD_REQUEST");
}

#[actix_web::test]
async fn test_missing_fields_are_bad_request() {
    let (status, body) = post_price(json!({ "vehicleId": UNPRICED_VEHICLE })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_error_envelope(&body, "BAD_REQUEST");
}

#[actix_web::test]
async fn test_malformed_body_is_bad_request() {
    let app = pricing_app!();
    let req = test::TestRequest::post()
        .uri("/bookings/price")
        .insert_header(("content-type", "application/json"))
        .set_payload("{\"vehicleId\": ")
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_error_envelope(&body, "BAD_REQUEST");
}

#[actix_web::test]
async fn test_get_is_not_routed() {
    let app = pricing_app!();
    let req = test::TestRequest::get().uri("/bookings/price").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_client_error());
}

#[actix_web::test]
async fn test_request_id_is_echoed() {
    let app = pricing_app!();
    let req = test::TestRequest::post()
        .uri("/bookings/price")
        .insert_header(("x-request-id", "quote-42"))
        .set_json(TestDataFactory::price_payload())
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers().get("x-request-id").unwrap(), "quote-42");
}

#[actix_web::test]
async fn test_health_and_readiness() {
    let app = pricing_app!();

    let health = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;
    assert_eq!(health.status(), StatusCode::OK);
    let body: Value = test::read_body_json(health).await;
    assert_eq!(body["status"], "healthy");

    let ready = test::call_service(&app, test::TestRequest::get().uri("/ready").to_request()).await;
    assert_eq!(ready.status(), StatusCode::OK);
    let body: Value = test::read_body_json(ready).await;
    assert_eq!(body["ready"], true);
    assert_eq!(body["checks"]["vehicle_store"], true);
}
