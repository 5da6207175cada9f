use std::sync::Mutex;

use super::*;
use crate::config::MailConfig;
use crate::services::mailer::{MailError, OutboundEmail};

/// Mailer that records every email and optionally fails.
#[derive(Default)]
pub struct MockMailer {
    pub sent: Mutex<Vec<OutboundEmail>>,
    pub fail: bool,
}

impl MockMailer {
    #[must_use]
    pub fn failing() -> Self {
        Self { sent: Mutex::new(Vec::new()), fail: true }
    }

    pub fn sent(&self) -> Vec<OutboundEmail> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl Mailer for MockMailer {
    async fn send(&self, email: OutboundEmail) -> Result<(), MailError> {
        if self.fail {
            return Err(MailError::Delivery("mock failure".to_owned()));
        }
        self.sent.lock().unwrap().push(email);
        Ok(())
    }
}

/// Contact settings with mail addressing filled in.
#[must_use]
pub fn mail_config() -> ContactConfig {
    ContactConfig {
        mail: Some(MailConfig {
            api_key: "re_test".to_owned(),
            from: "site@example.com".to_owned(),
            to: vec!["sales@example.com".to_owned()],
        }),
        ..ContactConfig::default()
    }
}

/// `AppState` with no mailer and development mode off.
#[must_use]
pub fn test_app_state() -> AppState {
    AppState::new(ContactConfig::default(), None)
}

/// `AppState` with no mailer and development mode on.
#[must_use]
pub fn test_app_state_dev_mode() -> AppState {
    AppState::new(ContactConfig { dev_mode: true, ..ContactConfig::default() }, None)
}

/// `AppState` delivering through `mailer`.
#[must_use]
pub fn test_app_state_with_mailer(mailer: Arc<MockMailer>) -> AppState {
    AppState::new(mail_config(), Some(mailer as Arc<dyn Mailer>))
}

/// A submission that passes validation.
#[must_use]
pub fn valid_form() -> listings::ContactForm {
    listings::ContactForm {
        name: "Fatima Rahman".to_owned(),
        email: "fatima@example.com".to_owned(),
        phone: "+880 1755-605080".to_owned(),
        message: "I would like to schedule a site visit.".to_owned(),
    }
}
