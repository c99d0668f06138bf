//! Contract tests for the Analytics API
//!
//! Validates GET /analytics/total-sales against its wire contract: status
//! code, response body shape, and routing behavior for unmatched paths and
//! methods.

use actix_web::{http::StatusCode, App};
use fincart_analytics::analytics::controllers::configure;

async fn spawn_test_server() -> actix_test::TestServer {
    actix_test::start(|| App::new().configure(configure))
}

/// Test: GET /analytics/total-sales returns 200
#[actix_web::test]
async fn test_total_sales_returns_200() {
    let srv = spawn_test_server().await;

    let resp = srv.get("/analytics/total-sales").send().await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
}

/// Test: Response body deep-equals the fixed report
#[actix_web::test]
async fn test_total_sales_body_matches_contract() {
    let srv = spawn_test_server().await;

    let mut resp = srv.get("/analytics/total-sales").send().await.unwrap();
    let body: serde_json::Value = resp.json().await.unwrap();

    assert_eq!(body, serde_json::json!({"total_sales": 105000}));
}

/// Test: Response is identical across repeated requests
#[actix_web::test]
async fn test_total_sales_is_idempotent() {
    let srv = spawn_test_server().await;

    let mut first = srv.get("/analytics/total-sales").send().await.unwrap();
    let mut second = srv.get("/analytics/total-sales").send().await.unwrap();

    let first_body: serde_json::Value = first.json().await.unwrap();
    let second_body: serde_json::Value = second.json().await.unwrap();

    assert_eq!(first_body, second_body);
}

/// Test: Unregistered paths fall through to the framework 404
#[actix_web::test]
async fn test_unknown_path_returns_404() {
    let srv = spawn_test_server().await;

    let resp = srv.get("/analytics/revenue").send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let resp = srv.get("/").send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

/// Test: Non-GET methods on the route never return the sales payload
#[actix_web::test]
async fn test_write_methods_are_not_matched() {
    let srv = spawn_test_server().await;

    for resp in [
        srv.post("/analytics/total-sales").send().await.unwrap(),
        srv.put("/analytics/total-sales").send().await.unwrap(),
        srv.delete("/analytics/total-sales").send().await.unwrap(),
    ] {
        let mut resp = resp;
        assert!(!resp.status().is_success());

        let body = resp.body().await.unwrap();
        let payload: Result<serde_json::Value, _> = serde_json::from_slice(&body);
        if let Ok(json) = payload {
            assert!(json.get("total_sales").is_none());
        }
    }
}
