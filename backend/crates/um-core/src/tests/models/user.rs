use crate::User;

fn sample_user() -> User {
    User {
        id: "9f1c2d3e-0000-4000-8000-000000000001".to_string(),
        email: "Anna.Nowak@Example.com".to_string(),
        first_name: "Anna".to_string(),
        last_name: "Nowak".to_string(),
        street: "Długa".to_string(),
        street_number: "12".to_string(),
        city: "Gdańsk".to_string(),
        postal_code: "80-831".to_string(),
        country: "Polska".to_string(),
        date_of_birth: "1990-04-01".to_string(),
        phone: "500600700".to_string(),
        role_id: "admin-role".to_string(),
    }
}

#[test]
fn test_filter_text_is_lowercase_and_contains_every_field() {
    let text = sample_user().filter_text();

    assert!(text.contains("anna.nowak@example.com"));
    assert!(text.contains("gdańsk"));
    assert!(text.contains("500600700"));
    assert!(text.contains("admin-role"));
    assert_eq!(text, text.to_lowercase());
}

#[test]
fn test_filter_text_does_not_join_adjacent_fields() {
    let user = User {
        first_name: "ab".to_string(),
        last_name: "cd".to_string(),
        ..Default::default()
    };

    assert!(!user.filter_text().contains("abcd"));
}
