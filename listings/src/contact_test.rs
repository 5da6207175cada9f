use super::*;

fn valid_form() -> ContactForm {
    ContactForm {
        name: "Nazia Karim".to_owned(),
        email: "nazia@example.com".to_owned(),
        phone: String::new(),
        message: "Interested in Horizon Residences.".to_owned(),
    }
}

// =============================================================
// Field rules
// =============================================================

#[test]
fn email_requires_top_level_domain() {
    assert!(!is_valid_email("a@b"));
    assert!(is_valid_email("a@b.com"));
}

#[test]
fn email_rejects_spaces_and_extra_at() {
    assert!(!is_valid_email("a b@c.com"));
    assert!(!is_valid_email("a@@c.com"));
    assert!(!is_valid_email("@c.com"));
    assert!(!is_valid_email("a@.com"));
    assert!(!is_valid_email(""));
}

#[test]
fn phone_is_optional() {
    assert!(is_valid_phone(""));
}

#[test]
fn phone_accepts_common_formats() {
    assert!(is_valid_phone("+8801755605080"));
    assert!(is_valid_phone("(02) 555-0199"));
    assert!(is_valid_phone("1234567"));
}

#[test]
fn phone_rejects_letters_and_bad_lengths() {
    assert!(!is_valid_phone("123456"));
    assert!(!is_valid_phone("123456789012345678901"));
    assert!(!is_valid_phone("call me maybe"));
    assert!(!is_valid_phone("555-CALL-NOW"));
}

#[test]
fn phone_rejects_non_ascii_digits() {
    assert!(!is_valid_phone("০১৭১২৩৪৫৬৭৮"));
    assert!(!is_valid_phone("٠١٢٣٤٥٦٧"));
}

// =============================================================
// validate()
// =============================================================

#[test]
fn valid_form_passes() {
    assert_eq!(valid_form().validate(), Ok(()));
}

#[test]
fn message_of_nine_trimmed_chars_is_rejected() {
    let form = ContactForm { message: "  123456789  ".to_owned(), ..valid_form() };
    let errors = form.validate().unwrap_err();
    assert_eq!(errors.get(ContactField::Message), Some("Message must be at least 10 characters"));
    assert_eq!(errors.len(), 1);
}

#[test]
fn message_of_ten_trimmed_chars_is_accepted() {
    let form = ContactForm { message: "  1234567890  ".to_owned(), ..valid_form() };
    assert_eq!(form.validate(), Ok(()));
}

#[test]
fn message_length_counts_characters_not_bytes() {
    let form = ContactForm { message: "ধন্যবাদধন্যবাদ".to_owned(), ..valid_form() };
    assert_eq!(form.validate(), Ok(()));
}

#[test]
fn empty_form_reports_required_fields() {
    let errors = ContactForm::default().validate().unwrap_err();
    assert_eq!(errors.get(ContactField::Name), Some("Name is required"));
    assert_eq!(errors.get(ContactField::Email), Some("Email is required"));
    assert_eq!(errors.get(ContactField::Message), Some("Message is required"));
    assert_eq!(errors.get(ContactField::Phone), None);
}

#[test]
fn invalid_email_and_phone_have_specific_messages() {
    let form = ContactForm { email: "a@b".to_owned(), phone: "12".to_owned(), ..valid_form() };
    let errors = form.validate().unwrap_err();
    assert_eq!(errors.get(ContactField::Email), Some("Please enter a valid email address"));
    assert_eq!(errors.get(ContactField::Phone), Some("Please enter a valid phone number"));
}

#[test]
fn whitespace_only_name_is_missing() {
    let form = ContactForm { name: "   ".to_owned(), ..valid_form() };
    let errors = form.validate().unwrap_err();
    assert_eq!(errors.get(ContactField::Name), Some("Name is required"));
}

// =============================================================
// Helpers and wire shape
// =============================================================

#[test]
fn phone_placeholder_when_omitted() {
    assert_eq!(valid_form().phone_or_placeholder(), PHONE_PLACEHOLDER);
    let form = ContactForm { phone: " 01755605080 ".to_owned(), ..valid_form() };
    assert_eq!(form.phone_or_placeholder(), "01755605080");
}

#[test]
fn trimmed_strips_every_field() {
    let form = ContactForm {
        name: " A ".to_owned(),
        email: " a@b.com ".to_owned(),
        phone: " 1234567 ".to_owned(),
        message: " hello there friend ".to_owned(),
    };
    let t = form.trimmed();
    assert_eq!(t.name, "A");
    assert_eq!(t.email, "a@b.com");
    assert_eq!(t.phone, "1234567");
    assert_eq!(t.message, "hello there friend");
}

#[test]
fn set_field_and_field_agree() {
    let mut form = ContactForm::default();
    for field in [ContactField::Name, ContactField::Email, ContactField::Phone, ContactField::Message] {
        form.set_field(field, field.as_str().to_owned());
        assert_eq!(form.field(field), field.as_str());
    }
}

#[test]
fn form_deserializes_without_phone() {
    let form: ContactForm =
        serde_json::from_str(r#"{"name":"A","email":"a@b.com","message":"0123456789"}"#).unwrap();
    assert_eq!(form.phone, "");
}

#[test]
fn invalid_response_serializes_field_errors_by_name() {
    let errors = ContactForm::default().validate().unwrap_err();
    let json = serde_json::to_value(ContactResponse::invalid(errors)).unwrap();
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], MSG_INVALID);
    assert_eq!(json["errors"]["email"], "Email is required");
}

#[test]
fn ok_response_omits_errors() {
    let json = serde_json::to_value(ContactResponse::ok(MSG_SENT)).unwrap();
    assert!(json.get("errors").is_none());
    let back: ContactResponse = serde_json::from_value(json).unwrap();
    assert!(back.success);
    assert!(back.errors.is_empty());
}
