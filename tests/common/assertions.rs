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

/// Assert JSON response has expected status field
pub fn assert_json_status(response: &TestResponse, expected_status: u16) {
    let json: serde_json::Value = response.json();
    assert_eq!(
        json["status"].as_u64(),
        Some(expected_status as u64),
        "Expected JSON status {}, got {:?}. Full response: {}",
        expected_status,
        json["status"],
        serde_json::to_string_pretty(&json).unwrap()
    );
}

/// Assert an error response: HTTP status, matching JSON status, and a
/// message containing `needle`
pub fn assert_api_error(response: &TestResponse, expected: StatusCode, needle: &str) {
    assert_status(response, expected);
    assert_json_status(response, expected.as_u16());
    let json: serde_json::Value = response.json();
    let message = json["error"].as_str().unwrap_or_default();
    assert!(
        message.contains(needle),
        "Expected error containing {needle:?}, got {message:?}"
    );
}

/// Assert a mix response is well formed and return its JSON
pub fn assert_valid_mix_response(response: &TestResponse) -> serde_json::Value {
    assert_ok(response);
    let json: serde_json::Value = response.json();

    assert_eq!(json["status"], 200);
    let mixed = json["mixed_color"].as_str().expect("mixed_color should be a string");
    assert_eq!(mixed.len(), 7, "mixed_color should be #rrggbb, got {mixed}");
    assert!(mixed.starts_with('#'));
    assert!(mixed[1..].chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));

    let accuracy = json["accuracy_percent"].as_u64().expect("accuracy should be a number");
    assert!(accuracy <= 100, "accuracy out of range: {accuracy}");

    let components = json["components"].as_array().expect("components should be an array");
    assert!(components.len() <= 3, "at most three paints per mix");
    assert!(components.iter().all(|c| c["parts"].as_u64().unwrap_or(0) >= 1));

    json
}
