// End-to-end tests for the RPC tool endpoint
//
// Exercises the real router with the real services wired in, including a
// mocked Places backend for the chemist search path.

use axum::{
    Router,
    body::{Body, to_bytes},
    http::Request,
};
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceExt;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use medassist::api::{self, app_state::AppState};
use medassist::config::config::AppConfig;
use medassist::services::assembler::create_triage_assembler;
use medassist::services::places::create_chemist_finder;
use medassist::services::session_log::SessionLog;

fn build_router(config: AppConfig) -> Router {
    let session_log = Arc::new(SessionLog::new(config.session_log.capacity));
    let assembler = create_triage_assembler(session_log.clone());
    let chemist_finder = create_chemist_finder(config.places.clone()).unwrap();
    api::create_router(AppState::new(config, assembler, chemist_finder, session_log))
}

async fn call_mcp(router: &Router, request: Value) -> Value {
    let response = router
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/mcp")
                .header("Content-Type", "application/json")
                .body(Body::from(request.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn emergency_triage_end_to_end() {
    let router = build_router(AppConfig::development());

    let body = call_mcp(
        &router,
        json!({
            "method": "analyze_symptoms",
            "params": {"symptoms": "sudden seizure and difficulty breathing"},
            "id": "e2e_1"
        }),
    )
    .await;

    let result = &body["result"];
    assert_eq!(result["triage_level"], "emergency");
    let flags = result["detected_red_flags"].as_array().unwrap();
    // 表序：difficulty breathing 先于 seizure
    assert_eq!(flags[0], "difficulty breathing");
    assert_eq!(flags[1], "seizure");
    assert!(!result["disclaimer"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn standard_triage_includes_remedies_and_warnings() {
    let router = build_router(AppConfig::development());

    let body = call_mcp(
        &router,
        json!({
            "method": "analyze_symptoms",
            "params": {"symptoms": "persistent cough", "age": "elderly"},
            "id": "e2e_2"
        }),
    )
    .await;

    let result = &body["result"];
    assert_eq!(result["condition"], "cough");
    assert_eq!(result["triage_level"], "routine");
    assert!(result.get("medicine_suggestion").is_none());
    assert_eq!(
        result["home_remedies"][0],
        "Honey and warm water (1 tsp honey in warm water)"
    );
    assert_eq!(result["warning_signs"][0], "Blood in cough");
    assert_eq!(
        result["follow_up"],
        "Schedule appointment with doctor within 1-2 weeks if symptoms persist"
    );
}

#[tokio::test]
async fn suggest_medicine_headache_end_to_end() {
    let router = build_router(AppConfig::development());

    let body = call_mcp(
        &router,
        json!({
            "method": "suggest_medicine",
            "params": {"condition": "headache"},
            "id": "e2e_3"
        }),
    )
    .await;

    let result = &body["result"];
    assert_eq!(result["recommended_medicine"], "Paracetamol or Ibuprofen");
    let warnings = result["warnings"].as_array().unwrap();
    assert!(warnings.contains(&json!("Don't take both together")));
}

#[tokio::test]
async fn get_remedies_cold_and_cough_end_to_end() {
    let router = build_router(AppConfig::development());

    let body = call_mcp(
        &router,
        json!({
            "method": "get_remedies",
            "params": {"condition": "cold and cough"},
            "id": "e2e_4"
        }),
    )
    .await;

    let result = &body["result"];
    let categories = result["matched_categories"].as_array().unwrap();
    assert!(categories.contains(&json!("cold")));
    assert!(categories.contains(&json!("cough")));

    let remedies: Vec<&str> = result["remedies"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r.as_str().unwrap())
        .collect();
    let unique: std::collections::HashSet<&&str> = remedies.iter().collect();
    assert_eq!(unique.len(), remedies.len());
}

#[tokio::test]
async fn session_log_caps_at_one_hundred() {
    let router = build_router(AppConfig::development());

    for n in 0..105 {
        call_mcp(
            &router,
            json!({
                "method": "get_remedies",
                "params": {"condition": format!("cold #{}", n)},
                "id": format!("cap_{}", n)
            }),
        )
        .await;
    }

    let body = call_mcp(
        &router,
        json!({"method": "get_session_logs", "params": {"limit": 100}, "id": "cap_q"}),
    )
    .await;

    let result = &body["result"];
    assert_eq!(result["total_sessions"], 100);
    let sessions = result["recent_sessions"].as_array().unwrap();
    assert_eq!(sessions.len(), 100);
    // 最旧的 5 条被淘汰
    assert_eq!(sessions[0]["input"], "cold #5");
    assert_eq!(sessions[99]["input"], "cold #104");
}

#[tokio::test]
async fn find_chemists_against_mocked_places_backend() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/textsearch/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "OK",
            "results": [{
                "name": "Apollo Pharmacy",
                "formatted_address": "12 MG Road",
                "rating": 4.5,
                "opening_hours": {"open_now": true},
                "place_id": "abc123",
                "geometry": {"location": {"lat": 12.97, "lng": 77.59}}
            }]
        })))
        .mount(&server)
        .await;

    let mut config = AppConfig::development();
    config.places.api_key = "test-key".to_string();
    config.places.base_url = server.uri();
    let router = build_router(config);

    let body = call_mcp(
        &router,
        json!({
            "method": "find_chemists",
            "params": {"location": "Bengaluru", "radius_km": 2.0},
            "id": "e2e_5"
        }),
    )
    .await;

    let result = &body["result"];
    assert_eq!(result["total_found"], 1);
    assert_eq!(result["chemists"][0]["name"], "Apollo Pharmacy");
    assert_eq!(result["radius_km"], 2.0);
    assert_eq!(result["note"], "Call ahead to confirm medicine availability");
}

#[tokio::test]
async fn tools_endpoint_matches_rpc_list_tools() {
    let router = build_router(AppConfig::development());

    let rpc_body = call_mcp(&router, json!({"method": "list_tools", "id": "e2e_6"})).await;

    let response = router
        .clone()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/tools")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let http_body: Value = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(rpc_body["result"], http_body);
    assert_eq!(http_body["tools"].as_array().unwrap().len(), 5);
}
