use crate::Client;

use um_config::ApiConfig;

#[test]
fn test_base_url_trailing_slash_trimmed() {
    let client = Client::new("http://localhost:5000/", None);
    assert_eq!(client.base_url, "http://localhost:5000");
}

#[test]
fn test_base_url_no_trailing_slash() {
    let client = Client::new("http://localhost:5000", None);
    assert_eq!(client.base_url, "http://localhost:5000");
}

#[test]
fn test_bearer_token_stored() {
    let client = Client::new("http://localhost:5000", Some("token-123"));
    assert_eq!(client.bearer_token, Some("token-123".to_string()));
}

#[test]
fn test_bearer_token_none() {
    let client = Client::new("http://localhost:5000", None);
    assert!(client.bearer_token.is_none());
}

#[test]
fn test_from_config_copies_settings() {
    let config = ApiConfig {
        base_url: "https://cms.example.com/".to_string(),
        bearer_token: Some("abc".to_string()),
        timeout_secs: 5,
    };

    let client = Client::from_config(&config).unwrap();

    assert_eq!(client.base_url, "https://cms.example.com");
    assert_eq!(client.bearer_token.as_deref(), Some("abc"));
}
