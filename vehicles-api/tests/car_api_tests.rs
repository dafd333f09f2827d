//! HTTP-level tests for the car endpoints, driving the real router with an
//! in-memory store and fake collaborators.

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::json;
use tower::ServiceExt;
use uuid::Uuid;

use vehicles_api::clients::{HttpMapsClient, PriceLookup};
use vehicles_api::config::environment::EnvironmentConfig;
use vehicles_api::repositories::InMemoryCarStore;
use vehicles_api::routes;
use vehicles_api::services::CarService;
use vehicles_api::state::AppState;
use vehicles_api::utils::errors::AppResult;

struct FakePriceClient;

#[async_trait]
impl PriceLookup for FakePriceClient {
    async fn get_price(&self, _vehicle_id: Uuid) -> AppResult<String> {
        Ok("USD 23140.50".to_string())
    }
}

fn test_app() -> axum::Router {
    let cars = CarService::new(
        Arc::new(InMemoryCarStore::new()),
        Arc::new(FakePriceClient),
        Arc::new(HttpMapsClient::new(None)),
    );
    let config = EnvironmentConfig {
        port: 0,
        host: "127.0.0.1".to_string(),
        database_url: None,
        pricing_url: "http://localhost:8082".to_string(),
        maps_url: None,
    };
    routes::create_router(AppState::new(cars, config))
}

fn car_payload() -> serde_json::Value {
    json!({
        "condition": "USED",
        "details": {
            "manufacturer": { "code": 101, "name": "Chevrolet" },
            "model": "Impala",
            "mileage": 32280,
            "external_color": "white",
            "body": "sedan",
            "engine": "3.6L V6",
            "fuel_type": "Gasoline",
            "model_year": 2018,
            "production_year": 2018,
            "number_of_doors": 4
        },
        "location": { "lat": 40.730610, "lon": -73.935242 }
    })
}

fn json_request(method: &str, uri: &str, body: &serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    serde_json::from_slice(&bytes).expect("response body is not valid JSON")
}

async fn create_car(app: &axum::Router) -> serde_json::Value {
    let response = app
        .clone()
        .oneshot(json_request("POST", "/cars", &car_payload()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

#[tokio::test]
async fn test_health_check() {
    let app = test_app();
    let response = app.oneshot(get_request("/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["service"], "vehicles-api");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_create_car_returns_created_with_id() {
    let app = test_app();
    let created = create_car(&app).await;

    assert!(created["id"].is_string());
    assert_eq!(created["details"]["model"], "Impala");
    assert_eq!(created["condition"], "USED");
    // Persisted record is returned without enrichment.
    assert!(created["price"].is_null());
}

#[tokio::test]
async fn test_get_car_is_enriched() {
    let app = test_app();
    let created = create_car(&app).await;
    let id = created["id"].as_str().unwrap();

    let response = app
        .oneshot(get_request(&format!("/cars/{}", id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["id"], created["id"]);
    assert_eq!(body["price"], "USD 23140.50");
    assert!(body["location"]["address"].is_string());
    assert!(body["location"]["city"].is_string());
    assert!(body["location"]["state"].is_string());
    assert!(body["location"]["zip"].is_string());
}

#[tokio::test]
async fn test_get_unknown_car_is_404() {
    let app = test_app();
    let response = app
        .oneshot(get_request(&format!("/cars/{}", Uuid::new_v4())))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Not Found");
}

#[tokio::test]
async fn test_list_cars_is_enriched() {
    let app = test_app();
    create_car(&app).await;
    create_car(&app).await;

    let response = app.oneshot(get_request("/cars")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let cars = body.as_array().unwrap();
    assert_eq!(cars.len(), 2);
    for car in cars {
        assert_eq!(car["price"], "USD 23140.50");
        assert!(car["location"]["address"].is_string());
    }
}

#[tokio::test]
async fn test_update_car_merges_and_keeps_id() {
    let app = test_app();
    let created = create_car(&app).await;
    let id = created["id"].as_str().unwrap().to_string();

    let mut update = car_payload();
    update["condition"] = json!("NEW");
    update["details"]["mileage"] = json!(22020);

    let response = app
        .clone()
        .oneshot(json_request("PUT", &format!("/cars/{}", id), &update))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let updated = body_json(response).await;
    assert_eq!(updated["id"], created["id"]);
    assert_eq!(updated["condition"], "NEW");
    assert_eq!(updated["details"]["mileage"], 22020);
    assert_eq!(updated["created_at"], created["created_at"]);

    // A subsequent read reflects the merge and recomputes the price.
    let read = app
        .oneshot(get_request(&format!("/cars/{}", id)))
        .await
        .unwrap();
    let body = body_json(read).await;
    assert_eq!(body["details"]["mileage"], 22020);
    assert_eq!(body["condition"], "NEW");
    assert_eq!(body["price"], "USD 23140.50");
}

#[tokio::test]
async fn test_update_unknown_car_is_404() {
    let app = test_app();
    let response = app
        .oneshot(json_request(
            "PUT",
            &format!("/cars/{}", Uuid::new_v4()),
            &car_payload(),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_car() {
    let app = test_app();
    let created = create_car(&app).await;
    let id = created["id"].as_str().unwrap().to_string();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/cars/{}", id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let read = app
        .clone()
        .oneshot(get_request(&format!("/cars/{}", id)))
        .await
        .unwrap();
    assert_eq!(read.status(), StatusCode::NOT_FOUND);

    let delete_again = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/cars/{}", id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(delete_again.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_invalid_payload_is_400_and_not_persisted() {
    let app = test_app();

    let mut payload = car_payload();
    payload["location"]["lat"] = json!(200.0);

    let response = app
        .clone()
        .oneshot(json_request("POST", "/cars", &payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Validation Error");

    let list = app.oneshot(get_request("/cars")).await.unwrap();
    assert_eq!(body_json(list).await.as_array().unwrap().len(), 0);
}
