use super::*;

#[test]
fn greeting_line_names_the_signed_in_email() {
    let user = User {
        id: "u1".to_owned(),
        email: "desk@clinic.com".to_owned(),
        is_active: true,
    };
    assert_eq!(greeting_line(&user), "Signed in as desk@clinic.com");
}
