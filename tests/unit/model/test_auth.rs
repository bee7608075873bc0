use assert_json_diff::assert_json_eq;
use sedotmp_client::config::Config;
use sedotmp_client::model::auth::{TokenRequest, TokenResponse};
use serde_json::json;

#[test]
fn token_request_uses_base_url_with_trailing_slash_as_audience() {
    let config = Config::with_credentials("test-client-id", "test-client-secret");
    let request = TokenRequest::from_config(&config);

    assert_json_eq!(
        serde_json::to_value(&request).unwrap(),
        json!({
            "client_id": "test-client-id",
            "client_secret": "test-client-secret",
            "audience": "https://api.sedotmp.com/",
            "grant_type": "client_credentials",
        })
    );
}

#[test]
fn token_request_follows_custom_base_url() {
    let config = Config::with_credentials("id", "secret").with_base_url("https://custom.api.com");
    assert_eq!(TokenRequest::from_config(&config).audience, "https://custom.api.com/");
}

#[test]
fn token_response_keeps_extra_fields() {
    let response: TokenResponse = serde_json::from_value(json!({
        "access_token": "test-token-123",
        "token_type": "Bearer",
        "expires_in": 86400,
    }))
    .unwrap();

    assert_eq!(response.token(), Some("test-token-123"));
    assert_eq!(response.extra["token_type"], "Bearer");
    assert_eq!(response.extra["expires_in"], 86400);
}

#[test]
fn token_response_without_usable_token() {
    let missing: TokenResponse = serde_json::from_value(json!({"error": "unauthorized"})).unwrap();
    assert_eq!(missing.token(), None);

    let empty: TokenResponse = serde_json::from_value(json!({"access_token": ""})).unwrap();
    assert_eq!(empty.token(), None);

    assert!(serde_json::from_value::<TokenResponse>(json!({"access_token": 42})).is_err());
}
