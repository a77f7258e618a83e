use abg_api::app;
use abg_api::config::ApiConfig;
use abg_api::state::AppState;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::{Value, json};
use tower::ServiceExt;

fn router() -> Router {
    app(AppState::new(ApiConfig::default()))
}

async fn send(request: Request<Body>) -> (StatusCode, Value) {
    let response = router().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

async fn post(uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(request).await
}

async fn get(uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(request).await
}

#[tokio::test]
async fn health_is_ok() {
    let (status, body) = get("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn interpret_full_panel() {
    let (status, body) = post(
        "/interpret",
        json!({ "ph": 7.26, "pco2": 23.0, "hco3": 10.0, "na": 140.0, "cl": 100.0 }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["primary_disorder"], "metabolic_acidosis");
    assert_eq!(body["ph_status"], "acidaemia");
    assert_eq!(body["anion_gap"]["status"], "high");
    assert_eq!(body["compensation"]["rule"], "winters_formula");
    assert_eq!(body["summary"], "High anion gap metabolic acidosis");
    assert_eq!(body["mnemonic"], "MUDPILES");
}

#[tokio::test]
async fn interpret_without_required_fields_is_bad_request() {
    let (status, body) = post("/interpret", json!({ "ph": 7.26, "hco3": 10.0 })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("pco2"));
}

#[tokio::test]
async fn interpret_rejects_implausible_values() {
    let (status, body) = post(
        "/interpret",
        json!({ "ph": 6.2, "pco2": 40.0, "hco3": 24.0, "na": 250.0 }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let details = body["details"].as_array().unwrap();
    assert_eq!(details.len(), 2);
    assert_eq!(details[0]["field"], "ph");
    assert_eq!(details[1]["field"], "na");
}

#[tokio::test]
async fn malformed_json_is_bad_request() {
    let request = Request::builder()
        .method("POST")
        .uri("/interpret")
        .header("content-type", "application/json")
        .body(Body::from("{ not json"))
        .unwrap();
    let (status, body) = send(request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn anion_gap_calculator() {
    let (status, body) = post(
        "/calculate/anion-gap",
        json!({ "na": 140.0, "cl": 100.0, "hco3": 20.0, "albumin": 2.0 }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["raw_value"], 20.0);
    assert_eq!(body["corrected_value"], 25.0);
    assert_eq!(body["status"], "high");
}

#[tokio::test]
async fn osmolar_gap_calculator() {
    let (status, body) = post(
        "/calculate/osmolar-gap",
        json!({ "measured_osmolality": 320.0, "na": 140.0, "glucose": 5.0, "urea": 5.0 }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["calculated_osmolality"], 290.0);
    assert_eq!(body["gap"], 30.0);
    assert_eq!(body["is_elevated"], true);
}

#[tokio::test]
async fn winters_calculator() {
    let (status, body) = post("/calculate/winters", json!({ "hco3": 12.0, "pco2": 20.0 })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["expected"], 26.0);
    assert_eq!(body["status"], "excessive");
}

#[tokio::test]
async fn winters_calculator_validates_ranges() {
    let (status, body) = post("/calculate/winters", json!({ "hco3": 2.0, "pco2": 20.0 })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"][0]["field"], "hco3");
}

#[tokio::test]
async fn delta_ratio_degenerate_case() {
    let (status, body) = post(
        "/calculate/delta-ratio",
        json!({ "anion_gap": 24.0, "hco3": 24.0 }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ratio"], Value::Null);
    assert_eq!(body["status"], "hagma");
}

#[tokio::test]
async fn causes_lookup() {
    let (status, body) = get("/causes/metabolic_acidosis?anion_gap_status=normal").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["disorder"], "metabolic_acidosis");
    assert_eq!(body["mnemonic"], "HARDUPS");
    assert_eq!(body["causes"].as_array().unwrap().len(), 7);
}

#[tokio::test]
async fn causes_for_unknown_disorder_is_empty() {
    let (status, body) = get("/causes/not_a_disorder").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["causes"].as_array().unwrap().is_empty());
    assert_eq!(body["mnemonic"], Value::Null);
}

#[tokio::test]
async fn causes_with_bad_query_value_is_bad_request() {
    let (status, body) = get("/causes/respiratory_acidosis?chronicity=subacute").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("subacute"));
}

#[tokio::test]
async fn reference_ranges_listed() {
    let (status, body) = get("/reference/ranges").await;
    assert_eq!(status, StatusCode::OK);
    let ranges = body.as_array().unwrap();
    assert_eq!(ranges[0]["id"], "ph");
    assert_eq!(ranges[0]["range"]["min"], 7.35);
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let (status, body) = get("/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap().contains("/nope"));
}
