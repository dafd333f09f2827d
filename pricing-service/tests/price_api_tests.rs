use axum::body::Body;
use axum::http::{Request, StatusCode};
use rust_decimal::Decimal;
use tower::ServiceExt;
use uuid::Uuid;

use pricing_service::routes;
use pricing_service::state::AppState;

fn test_app() -> axum::Router {
    routes::create_router(AppState::new())
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    serde_json::from_slice(&bytes).expect("response body is not valid JSON")
}

#[tokio::test]
async fn test_health_check() {
    let app = test_app();
    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["service"], "pricing-service");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_get_price_by_id() {
    let app = test_app();
    let id = Uuid::new_v4();

    let response = app
        .oneshot(
            Request::builder()
                .uri(format!("/prices/{}", id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["vehicle_id"], id.to_string());
    assert_eq!(body["currency"], "USD");

    let price: Decimal = body["price"].as_str().unwrap().parse().unwrap();
    assert!(price >= Decimal::new(500_000, 2));
    assert!(price < Decimal::new(6_000_000, 2));
}

#[tokio::test]
async fn test_price_is_stable_across_lookups() {
    let app = test_app();
    let id = Uuid::new_v4();
    let uri = format!("/prices/{}", id);

    let first = app
        .clone()
        .oneshot(Request::builder().uri(&uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let second = app
        .oneshot(Request::builder().uri(&uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(body_json(first).await["price"], body_json(second).await["price"]);
}

#[tokio::test]
async fn test_get_price_malformed_id() {
    let app = test_app();
    let response = app
        .oneshot(
            Request::builder()
                .uri("/prices/not-a-uuid")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Bad Request");
}

#[tokio::test]
async fn test_list_prices_reflects_lookups() {
    let app = test_app();
    let id = Uuid::new_v4();

    let empty = app
        .clone()
        .oneshot(Request::builder().uri("/prices").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(body_json(empty).await.as_array().unwrap().len(), 0);

    app.clone()
        .oneshot(
            Request::builder()
                .uri(format!("/prices/{}", id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let listed = app
        .oneshot(Request::builder().uri("/prices").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let body = body_json(listed).await;
    let prices = body.as_array().unwrap();
    assert_eq!(prices.len(), 1);
    assert_eq!(prices[0]["vehicle_id"], id.to_string());
}
