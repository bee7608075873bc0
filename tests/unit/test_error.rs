use sedotmp_client::error::{AppError, Operation};
use std::error::Error;

#[test]
fn operation_display_names_the_operation() {
    assert_eq!(
        Operation::FetchCategories.to_string(),
        "Failed to fetch categories from SedoTMP API"
    );
    assert_eq!(
        Operation::CreateContentCampaign.to_string(),
        "Failed to create content campaign in SedoTMP API"
    );
    assert_eq!(
        Operation::DeletePostbackTemplate.to_string(),
        "Failed to delete postback template from SedoTMP API"
    );
    assert_eq!(
        Operation::UpdateTrafficSourceTemplate.to_string(),
        "Failed to update traffic source template in SedoTMP API"
    );
}

#[test]
fn authentication_display() {
    let error = AppError::Authentication {
        message: "no access token in response".to_string(),
        source: None,
    };
    assert_eq!(
        error.to_string(),
        "authentication failed: no access token in response"
    );
    assert!(error.source().is_none());
    assert_eq!(error.operation(), None);
    assert_eq!(error.status(), None);
}

#[test]
fn response_format_display_and_source() {
    let parse_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let error = AppError::ResponseFormat {
        message: "response body is not valid JSON".to_string(),
        source: Some(parse_error),
    };
    assert_eq!(
        error.to_string(),
        "invalid response format: response body is not valid JSON"
    );
    assert!(error.source().is_some());
}

#[test]
fn invalid_input_display() {
    let error = AppError::InvalidInput("resource id must not be empty".to_string());
    assert_eq!(error.to_string(), "invalid input: resource id must not be empty");
}

#[test]
fn from_serde_error() {
    let serde_error = serde_json::from_str::<serde_json::Value>(r#"{"invalid": json}"#).unwrap_err();
    let app_error: AppError = serde_error.into();

    match app_error {
        AppError::Json(_) => (),
        _ => panic!("Expected Json error"),
    }
}
