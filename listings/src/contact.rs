//! Contact form payload, validation rules, and endpoint response.
//!
//! The same rules run in the browser (inline field errors) and on the server
//! (a submission that skipped the browser is still rejected).

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

pub const MIN_MESSAGE_CHARS: usize = 10;

/// Value sent in place of an omitted phone number.
pub const PHONE_PLACEHOLDER: &str = "Not provided";

pub const MSG_SENT: &str = "Your message has been sent successfully!";
pub const MSG_DEV_MODE: &str = "Development mode: Email would be sent with the provided data.";
pub const MSG_NOT_CONFIGURED: &str = "Email service is not configured. Please contact us directly.";
pub const MSG_DELIVERY_FAILED: &str = "An error occurred while sending your message. Please try again later.";
pub const MSG_SEND_FAILED: &str = "Failed to send message. Please try again.";
pub const MSG_UNEXPECTED: &str = "An unexpected error occurred. Please try again.";
pub const MSG_INVALID: &str = "Please fix the errors in the form.";
pub const MSG_RATE_LIMITED: &str = "Too many messages. Please wait a few minutes and try again.";

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9\s\-+()]{7,20}$").expect("phone pattern compiles"));

/// Form inputs that can carry a validation error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactField {
    Name,
    Email,
    Phone,
    Message,
}

impl ContactField {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Message => "message",
        }
    }
}

/// Field-level validation errors, keyed by field.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactErrors(BTreeMap<ContactField, String>);

impl ContactErrors {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn get(&self, field: ContactField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn insert(&mut self, field: ContactField, message: &str) {
        self.0.insert(field, message.to_owned());
    }

    pub fn remove(&mut self, field: ContactField) {
        self.0.remove(&field);
    }

    pub fn iter(&self) -> impl Iterator<Item = (ContactField, &str)> {
        self.0.iter().map(|(f, m)| (*f, m.as_str()))
    }
}

/// Raw contact form inputs as typed by the visitor.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    pub message: String,
}

impl ContactForm {
    #[must_use]
    pub fn field(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Phone => &self.phone,
            ContactField::Message => &self.message,
        }
    }

    pub fn set_field(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Phone => self.phone = value,
            ContactField::Message => self.message = value,
        }
    }

    /// Copy with surrounding whitespace removed from every field.
    #[must_use]
    pub fn trimmed(&self) -> Self {
        Self {
            name: self.name.trim().to_owned(),
            email: self.email.trim().to_owned(),
            phone: self.phone.trim().to_owned(),
            message: self.message.trim().to_owned(),
        }
    }

    /// Phone number as sent to the mailbox, with a placeholder when omitted.
    #[must_use]
    pub fn phone_or_placeholder(&self) -> &str {
        let phone = self.phone.trim();
        if phone.is_empty() { PHONE_PLACEHOLDER } else { phone }
    }

    /// Check every field.
    ///
    /// # Errors
    ///
    /// Returns every failing field with its message; the form is only valid
    /// when no field fails.
    pub fn validate(&self) -> Result<(), ContactErrors> {
        let mut errors = ContactErrors::default();

        if self.name.trim().is_empty() {
            errors.insert(ContactField::Name, "Name is required");
        }

        let email = self.email.trim();
        if email.is_empty() {
            errors.insert(ContactField::Email, "Email is required");
        } else if !is_valid_email(email) {
            errors.insert(ContactField::Email, "Please enter a valid email address");
        }

        if !is_valid_phone(self.phone.trim()) {
            errors.insert(ContactField::Phone, "Please enter a valid phone number");
        }

        let message = self.message.trim();
        if message.is_empty() {
            errors.insert(ContactField::Message, "Message is required");
        } else if message.chars().count() < MIN_MESSAGE_CHARS {
            errors.insert(ContactField::Message, "Message must be at least 10 characters");
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Phone is optional: an empty value is valid.
#[must_use]
pub fn is_valid_phone(phone: &str) -> bool {
    phone.is_empty() || PHONE_RE.is_match(phone)
}

/// Body returned by `POST /api/contact`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactResponse {
    pub success: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "ContactErrors::is_empty")]
    pub errors: ContactErrors,
}

impl ContactResponse {
    #[must_use]
    pub fn ok(message: &str) -> Self {
        Self { success: true, message: message.to_owned(), errors: ContactErrors::default() }
    }

    #[must_use]
    pub fn failed(message: &str) -> Self {
        Self { success: false, message: message.to_owned(), errors: ContactErrors::default() }
    }

    #[must_use]
    pub fn invalid(errors: ContactErrors) -> Self {
        Self { success: false, message: MSG_INVALID.to_owned(), errors }
    }
}
