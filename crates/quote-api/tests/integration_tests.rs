//! # Integration Tests for quote-api
//!
//! Drives the assembled router with `tower::ServiceExt::oneshot`: item CRUD,
//! pricing on create/update, search, error bodies, CORS, health probes and
//! the OpenAPI document.

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use quote_api::{AppConfig, AppState};
use quote_core::{parse_seed, QuoteStore};

const SEED: &str = r#"[
  { "id": "1", "name": "Carlos Mendoza", "age": "34", "insuranceTier": "A",
    "drinksAlcohol": "no", "wearsGlasses": "yes", "hasIllness": "no" },
  { "id": "5", "name": "Lucia Fernandez", "age": "52", "insuranceTier": "B",
    "drinksAlcohol": "yes", "wearsGlasses": "yes", "hasIllness": "no" }
]"#;

/// Helper: build state over a small fixed seed.
fn test_state() -> AppState {
    let store = QuoteStore::with_records(parse_seed(SEED).unwrap());
    AppState::with_store(store, AppConfig::default())
}

/// Helper: build the test app.
fn test_app() -> axum::Router {
    quote_api::app(test_state())
}

/// Helper: send one request and return status plus parsed JSON body.
async fn send(app: axum::Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn with_json(method: Method, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap()
}

fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn ana() -> Value {
    json!({
        "name": "Ana",
        "age": "45",
        "insuranceTier": "A",
        "drinksAlcohol": "yes",
        "wearsGlasses": "no",
        "hasIllness": "no"
    })
}

fn luis() -> Value {
    json!({
        "name": "Luis",
        "age": "30",
        "insuranceTier": "B",
        "drinksAlcohol": "no",
        "wearsGlasses": "no",
        "hasIllness": "no"
    })
}

// -- Health Probes ------------------------------------------------------------

#[tokio::test]
async fn test_liveness_probe() {
    let response = test_app().oneshot(get("/health/liveness")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&bytes[..], b"ok");
}

#[tokio::test]
async fn test_readiness_probe() {
    let response = test_app().oneshot(get("/health/readiness")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&bytes[..], b"ready");
}

// -- List ---------------------------------------------------------------------

#[tokio::test]
async fn test_list_returns_seed_in_order_with_costs() {
    let (status, body) = send(test_app(), get("/api/items")).await;
    assert_eq!(status, StatusCode::OK);
    let items = body.as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["id"], "1");
    assert_eq!(items[1]["id"], "5");
    // 1200 + 5% glasses + 10% age<=40
    assert_eq!(items[0]["totalCost"], 1380.0);
    // 950 + 10% alcohol + 5% glasses + 20% age>40
    assert_eq!(items[1]["totalCost"], 1282.5);
}

// -- Create -------------------------------------------------------------------

#[tokio::test]
async fn test_create_prices_tier_a_senior() {
    let (status, body) = send(test_app(), with_json(Method::POST, "/api/items", &ana())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["name"], "Ana");
    assert_eq!(body["totalCost"], 1560.0);
}

#[tokio::test]
async fn test_create_prices_standard_tier_junior() {
    let (status, body) = send(test_app(), with_json(Method::POST, "/api/items", &luis())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["totalCost"], 1045.0);
}

#[tokio::test]
async fn test_sequential_creates_continue_from_seed_max() {
    let state = test_state();
    let (_, first) = send(
        quote_api::app(state.clone()),
        with_json(Method::POST, "/api/items", &ana()),
    )
    .await;
    let (_, second) = send(
        quote_api::app(state.clone()),
        with_json(Method::POST, "/api/items", &luis()),
    )
    .await;
    assert_eq!(first["id"], "6");
    assert_eq!(second["id"], "7");

    let (status, found) = send(quote_api::app(state), get("/api/items/7")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(found, second);
}

#[tokio::test]
async fn test_create_ignores_client_id_and_cost() {
    let mut body = ana();
    body["id"] = json!("1");
    body["totalCost"] = json!(1);
    let (status, created) = send(test_app(), with_json(Method::POST, "/api/items", &body)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["id"], "6");
    assert_eq!(created["totalCost"], 1560.0);
}

#[tokio::test]
async fn test_create_missing_fields_is_400_with_issues() {
    let (status, body) = send(
        test_app(),
        with_json(Method::POST, "/api/items", &json!({ "name": "Ana", "age": 45 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let issues = body["error"]["issues"].as_array().unwrap();
    assert_eq!(issues.len(), 5);
    assert_eq!(issues[0]["field"], "age");
    assert_eq!(issues[0]["code"], "invalid_type");
    assert_eq!(issues[1]["field"], "insuranceTier");
    assert_eq!(issues[1]["code"], "missing");
}

#[tokio::test]
async fn test_create_rejected_does_not_consume_id() {
    let state = test_state();
    let (status, _) = send(
        quote_api::app(state.clone()),
        with_json(Method::POST, "/api/items", &json!({})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let (_, created) = send(
        quote_api::app(state),
        with_json(Method::POST, "/api/items", &ana()),
    )
    .await;
    assert_eq!(created["id"], "6");
}

#[tokio::test]
async fn test_create_malformed_json_is_400() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/items")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let (status, body) = send(test_app(), request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_create_array_body_is_400() {
    let (status, body) =
        send(test_app(), with_json(Method::POST, "/api/items", &json!([1, 2]))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["issues"][0]["expected"], "object");
}

// -- Get ----------------------------------------------------------------------

#[tokio::test]
async fn test_get_existing_item() {
    let (status, body) = send(test_app(), get("/api/items/5")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Lucia Fernandez");
}

#[tokio::test]
async fn test_get_missing_item_is_404() {
    let (status, body) = send(test_app(), get("/api/items/999")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "item not found" }));
}

// -- Update -------------------------------------------------------------------

#[tokio::test]
async fn test_update_merges_and_reprices() {
    let state = test_state();
    let (status, body) = send(
        quote_api::app(state.clone()),
        with_json(
            Method::PUT,
            "/api/items/1",
            &json!({ "age": "50", "drinksAlcohol": "yes" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], "1");
    assert_eq!(body["name"], "Carlos Mendoza");
    assert_eq!(body["age"], "50");
    // 1200 + 10% alcohol + 5% glasses + 20% age>40
    assert_eq!(body["totalCost"], 1620.0);

    let (_, stored) = send(quote_api::app(state), get("/api/items/1")).await;
    assert_eq!(stored, body);
}

#[tokio::test]
async fn test_update_cannot_change_id_or_cost() {
    let (status, body) = send(
        test_app(),
        with_json(
            Method::PUT,
            "/api/items/5",
            &json!({ "id": "77", "totalCost": 1 }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], "5");
    assert_eq!(body["totalCost"], 1282.5);
}

#[tokio::test]
async fn test_empty_update_is_idempotent() {
    let state = test_state();
    let (_, before) = send(quote_api::app(state.clone()), get("/api/items/5")).await;
    let (_, once) = send(
        quote_api::app(state.clone()),
        with_json(Method::PUT, "/api/items/5", &json!({})),
    )
    .await;
    let (_, twice) = send(
        quote_api::app(state),
        with_json(Method::PUT, "/api/items/5", &json!({})),
    )
    .await;
    assert_eq!(before, once);
    assert_eq!(once, twice);
}

#[tokio::test]
async fn test_update_wrong_type_is_400() {
    let (status, body) = send(
        test_app(),
        with_json(Method::PUT, "/api/items/1", &json!({ "age": 50 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["issues"][0]["field"], "age");
}

#[tokio::test]
async fn test_update_missing_item_is_404() {
    let (status, body) = send(
        test_app(),
        with_json(Method::PUT, "/api/items/999", &json!({ "name": "X" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "item not found");
}

#[tokio::test]
async fn test_update_validates_before_lookup() {
    let (status, _) = send(
        test_app(),
        with_json(Method::PUT, "/api/items/999", &json!({ "name": 1 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// -- Delete -------------------------------------------------------------------

#[tokio::test]
async fn test_delete_then_get_is_404() {
    let state = test_state();
    let (status, body) = send(quote_api::app(state.clone()), delete("/api/items/1")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "item deleted" }));

    let (status, _) = send(quote_api::app(state.clone()), get("/api/items/1")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, list) = send(quote_api::app(state), get("/api/items")).await;
    assert_eq!(list.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_delete_missing_item_is_404() {
    let (status, body) = send(test_app(), delete("/api/items/999")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "item not found");
}

// -- Search -------------------------------------------------------------------

#[tokio::test]
async fn test_search_numeric_term_matches_id() {
    let (status, body) = send(test_app(), get("/api/items/search?term=5")).await;
    assert_eq!(status, StatusCode::OK);
    let items = body.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["name"], "Lucia Fernandez");
}

#[tokio::test]
async fn test_search_numeric_term_does_not_match_age() {
    let (status, body) = send(test_app(), get("/api/items/search?term=34")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_search_text_is_case_insensitive() {
    let (status, body) = send(test_app(), get("/api/items/search?term=LUCIA")).await;
    assert_eq!(status, StatusCode::OK);
    let items = body.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["id"], "5");
}

#[tokio::test]
async fn test_search_text_matches_flags() {
    // Both wear glasses, so "yes" matches both records.
    let (_, body) = send(test_app(), get("/api/items/search?term=yes")).await;
    assert_eq!(body.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_search_without_matches_is_empty_200() {
    let (status, body) = send(test_app(), get("/api/items/search?term=zzz")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_search_without_term_is_empty() {
    let (status, body) = send(test_app(), get("/api/items/search")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_search_repeated_term_is_json_400() {
    let (status, body) = send(test_app(), get("/api/items/search?term=a&term=b")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_search_overflowing_number_is_id_lookup() {
    let (status, body) = send(test_app(), get("/api/items/search?term=1e400")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_search_route_is_not_an_id() {
    let (status, body) = send(test_app(), get("/api/items/search?term=carlos")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.is_array());
}

// -- CORS ---------------------------------------------------------------------

#[tokio::test]
async fn test_cors_allows_configured_origin() {
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/items")
        .header(header::ORIGIN, quote_api::config::DEFAULT_CORS_ORIGIN)
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .body(Body::empty())
        .unwrap();
    let response = test_app().oneshot(request).await.unwrap();
    assert_eq!(
        response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        quote_api::config::DEFAULT_CORS_ORIGIN
    );
}

#[tokio::test]
async fn test_cors_rejects_other_origin() {
    let request = Request::builder()
        .uri("/api/items")
        .header(header::ORIGIN, "https://evil.example")
        .body(Body::empty())
        .unwrap();
    let response = test_app().oneshot(request).await.unwrap();
    let allowed = response
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .unwrap();
    assert_ne!(allowed, "https://evil.example");
    assert_eq!(allowed, quote_api::config::DEFAULT_CORS_ORIGIN);
}

// -- Id exhaustion ------------------------------------------------------------

#[tokio::test]
async fn test_create_after_last_id_is_500() {
    let seed = SEED.replace("\"5\"", "\"18446744073709551614\"");
    let store = QuoteStore::with_records(parse_seed(&seed).unwrap());
    let app = quote_api::app(AppState::with_store(store, AppConfig::default()));

    let (status, last) = send(app.clone(), with_json(Method::POST, "/api/items", &ana())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(last["id"], "18446744073709551615");

    let (status, body) = send(app.clone(), with_json(Method::POST, "/api/items", &luis())).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "internal error" }));

    let (_, list) = send(app, get("/api/items")).await;
    assert_eq!(list.as_array().unwrap().len(), 3);
}

// -- OpenAPI ------------------------------------------------------------------

#[tokio::test]
async fn test_openapi_document_served() {
    let (status, body) = send(test_app(), get("/openapi.json")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/api/items/{id}"].is_object());
}

// -- Bundled seed -------------------------------------------------------------

#[tokio::test]
async fn test_bundled_seed_serves_priced_items() {
    let store = quote_core::load_seed(None).unwrap();
    let next = store.next_id().unwrap();
    let app = quote_api::app(AppState::with_store(store, AppConfig::default()));
    let (status, created) = send(app, with_json(Method::POST, "/api/items", &ana())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["id"], next.to_string());
}
