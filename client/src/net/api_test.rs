use super::*;

#[test]
fn contact_failed_message_formats_status() {
    assert_eq!(contact_failed_message(500), "contact request failed: 500");
}

#[test]
fn success_body_parses() {
    let resp = parse_contact_response(200, r#"{"success":true,"message":"sent"}"#).unwrap();
    assert!(resp.success);
    assert_eq!(resp.message, "sent");
    assert!(resp.errors.is_empty());
}

#[test]
fn error_status_with_body_is_still_ok() {
    let body = r#"{"success":false,"message":"Please fix the errors in the form.","errors":{"email":"Please enter a valid email address"}}"#;
    let resp = parse_contact_response(422, body).unwrap();
    assert!(!resp.success);
    assert_eq!(
        resp.errors.get(listings::ContactField::Email),
        Some("Please enter a valid email address")
    );
}

#[test]
fn unparseable_body_is_err_with_status() {
    assert_eq!(parse_contact_response(502, "<html>bad gateway</html>"), Err("contact request failed: 502".to_owned()));
}
