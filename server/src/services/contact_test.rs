use std::net::{IpAddr, Ipv4Addr};
use std::sync::Arc;

use listings::ContactField;

use super::*;
use crate::state::test_helpers::{
    MockMailer, test_app_state, test_app_state_dev_mode, test_app_state_with_mailer, valid_form,
};

const CLIENT: IpAddr = IpAddr::V4(Ipv4Addr::new(203, 0, 113, 7));

#[tokio::test]
async fn valid_form_is_delivered_trimmed() {
    let mailer = Arc::new(MockMailer::default());
    let state = test_app_state_with_mailer(mailer.clone());
    let mut form = valid_form();
    form.name = "  Fatima Rahman  ".to_owned();

    let outcome = submit(&state, CLIENT, &form).await.unwrap();
    assert_eq!(outcome, ContactOutcome::Sent);

    let sent = mailer.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, vec!["sales@example.com".to_owned()]);
    assert_eq!(sent[0].reply_to, "fatima@example.com");
    assert_eq!(sent[0].subject, "New enquiry from Fatima Rahman");
}

#[tokio::test]
async fn invalid_form_is_rejected_before_sending() {
    let mailer = Arc::new(MockMailer::default());
    let state = test_app_state_with_mailer(mailer.clone());
    let mut form = valid_form();
    form.email = "a@b".to_owned();
    form.message = "too short".to_owned();

    let Err(ContactError::Invalid(errors)) = submit(&state, CLIENT, &form).await else {
        panic!("expected validation error");
    };
    assert!(errors.get(ContactField::Email).is_some());
    assert!(errors.get(ContactField::Message).is_some());
    assert!(mailer.sent().is_empty());
}

#[tokio::test]
async fn invalid_submissions_do_not_count_toward_rate_limit() {
    let mailer = Arc::new(MockMailer::default());
    let state = test_app_state_with_mailer(mailer.clone());
    let mut bad = valid_form();
    bad.name.clear();

    for _ in 0..20 {
        assert!(matches!(submit(&state, CLIENT, &bad).await, Err(ContactError::Invalid(_))));
    }
    assert!(submit(&state, CLIENT, &valid_form()).await.is_ok());
}

#[tokio::test]
async fn rate_limit_applies_per_client() {
    let mailer = Arc::new(MockMailer::default());
    let state = test_app_state_with_mailer(mailer.clone());
    let limit = state.contact.rate_limit.per_client_limit;

    for _ in 0..limit {
        submit(&state, CLIENT, &valid_form()).await.unwrap();
    }
    assert!(matches!(
        submit(&state, CLIENT, &valid_form()).await,
        Err(ContactError::RateLimited(RateLimitError::PerClientExceeded { .. }))
    ));
    assert_eq!(mailer.sent().len(), limit);
}

#[tokio::test]
async fn missing_mailer_without_dev_mode_is_not_configured() {
    let state = test_app_state();
    assert!(matches!(submit(&state, CLIENT, &valid_form()).await, Err(ContactError::NotConfigured)));
}

#[tokio::test]
async fn missing_mailer_in_dev_mode_succeeds() {
    let state = test_app_state_dev_mode();
    assert_eq!(submit(&state, CLIENT, &valid_form()).await.unwrap(), ContactOutcome::Logged);
}

#[tokio::test]
async fn delivery_failure_is_reported() {
    let state = test_app_state_with_mailer(Arc::new(MockMailer::failing()));
    assert!(matches!(submit(&state, CLIENT, &valid_form()).await, Err(ContactError::Delivery(_))));
}
