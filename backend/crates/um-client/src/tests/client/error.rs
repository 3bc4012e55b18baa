use crate::ClientError;

use um_core::CoreError;

#[test]
fn test_api_error_name_and_message() {
    let err = ClientError::api_error(404, "User not found");

    assert_eq!(err.name(), "ApiError");
    assert_eq!(err.message(), "User not found (code: 404)");
}

#[test]
fn test_json_error_converts_to_transport() {
    let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err = ClientError::from(source);

    let core: CoreError = err.into();

    assert_eq!(core.name(), "JsonError");
    assert!(matches!(core, CoreError::Transport { .. }));
}

#[test]
fn test_invalid_url_error() {
    let err = ClientError::invalid_url("not a url");

    assert_eq!(err.name(), "InvalidUrl");
    assert_eq!(err.message(), "not a url");
}
