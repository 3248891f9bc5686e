use super::*;

#[test]
fn user_deserializes_from_me_response() {
    let json = r#"{"id":"7f2f7ad0-23cf-4b0e-9a6e-0f6f3f9a2b11","email":"nurse@ward.org","is_active":true}"#;
    let user: User = serde_json::from_str(json).unwrap();
    assert_eq!(user.email, "nurse@ward.org");
    assert!(user.is_active);
}

#[test]
fn user_round_trips_through_json() {
    let user = User {
        id: "u-1".to_owned(),
        email: "a@b.com".to_owned(),
        is_active: false,
    };
    let encoded = serde_json::to_string(&user).unwrap();
    assert_eq!(serde_json::from_str::<User>(&encoded).unwrap(), user);
}
