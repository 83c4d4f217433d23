//! Assertion helpers for tests.

use axum::http::StatusCode;
use pretty_assertions::assert_eq;

use super::app::TestResponse;

/// Assert response has expected status code
pub fn assert_status(response: &TestResponse, expected: StatusCode) {
    assert_eq!(
        response.status, expected,
        "Expected status {}, got {}. Body: {}",
        expected,
        response.status,
        response.text()
    );
}

/// Assert response is OK (200)
pub fn assert_ok(response: &TestResponse) {
    assert_status(response, StatusCode::OK);
}

/// Assert JSON error body carries the expected status field
pub fn assert_json_error(response: &TestResponse, expected: StatusCode) {
    assert_status(response, expected);
    let json: serde_json::Value = response.json();
    assert_eq!(
        json["status"].as_u64(),
        Some(expected.as_u16() as u64),
        "Expected JSON status {}, got {:?}. Full response: {}",
        expected.as_u16(),
        json["status"],
        serde_json::to_string_pretty(&json).unwrap()
    );
    assert!(json["error"].is_string(), "Expected error message");
}

/// Assert analysis response is well formed and return it
pub fn assert_valid_analysis(response: &TestResponse) -> serde_json::Value {
    assert_ok(response);
    let json: serde_json::Value = response.json();

    let letter = json["category"]["letter"].as_str().expect("category letter");
    assert!(
        ["A", "B", "C", "D"].contains(&letter),
        "Unexpected category letter {letter}"
    );
    assert!(json["category"]["name"].is_string());
    assert!(json["cache_hit"].is_boolean());
    assert!(json["analyzed_at"].is_string());

    let conditions = json["conditions"].as_array().expect("conditions array");
    assert_eq!(conditions.len(), 6);
    for condition in conditions {
        let score = condition["score"].as_u64().expect("score");
        assert!(score <= 100, "Score out of range: {condition}");
    }

    json
}

/// Assert the category letter of an analysis response
pub fn assert_category(json: &serde_json::Value, letter: &str) {
    assert_eq!(
        json["category"]["letter"].as_str(),
        Some(letter),
        "Unexpected category in {}",
        serde_json::to_string_pretty(json).unwrap()
    );
}
