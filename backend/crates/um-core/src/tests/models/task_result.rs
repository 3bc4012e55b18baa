use crate::{TaskResult, User};

use serde_json::json;

#[test]
fn test_ok_envelope() {
    let result = TaskResult::ok(true);

    assert!(result.success);
    assert_eq!(result.model, Some(true));
    assert_eq!(result.message_or_empty(), "");
}

#[test]
fn test_failed_envelope() {
    let result: TaskResult<User> = TaskResult::failed("User not found");

    assert!(!result.success);
    assert!(result.model.is_none());
    assert_eq!(result.message_or_empty(), "User not found");
}

#[test]
fn test_deserialize_without_model_or_message() {
    let result: TaskResult<Vec<User>> =
        serde_json::from_value(json!({ "success": false })).unwrap();

    assert!(!result.success);
    assert!(result.message.is_none());
    assert!(result.model.is_none());
}

#[test]
fn test_deserialize_list_payload() {
    let result: TaskResult<Vec<User>> = serde_json::from_value(json!({
        "success": true,
        "message": null,
        "model": [{
            "id": "u-1",
            "email": "a@example.com",
            "firstName": "A",
            "lastName": "B",
            "street": "S",
            "streetNumber": "1",
            "city": "C",
            "postalCode": "00-001",
            "country": "PL",
            "dateOfBirth": "2000-01-01",
            "phone": "123",
            "roleId": "r-1"
        }]
    }))
    .unwrap();

    let users = result.model.unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].postal_code, "00-001");
}
