//! Contact enquiry service: validate, rate-limit, deliver.
//!
//! DESIGN
//! ======
//! The server never trusts browser-side validation, so the form is validated
//! again here before anything else. Only valid submissions count toward the
//! rate limit, which keeps a visitor fixing typos from locking themselves
//! out. With no mailer configured the outcome depends on development mode.

use std::net::IpAddr;

use time::OffsetDateTime;

use listings::{ContactErrors, ContactForm};

use crate::rate_limit::RateLimitError;
use crate::services::mailer::{MailError, compose_enquiry};
use crate::state::AppState;

#[derive(Debug, thiserror::Error)]
pub enum ContactError {
    #[error("validation failed on {} field(s)", .0.len())]
    Invalid(ContactErrors),
    #[error(transparent)]
    RateLimited(#[from] RateLimitError),
    #[error("email delivery is not configured")]
    NotConfigured,
    #[error(transparent)]
    Delivery(#[from] MailError),
}

/// How a successful submission was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactOutcome {
    Sent,
    /// No mailer; development mode logged the enquiry instead.
    Logged,
}

/// Handle one contact submission from `client`.
///
/// # Errors
///
/// See [`ContactError`]: invalid fields, rate limit, missing mail setup, or a
/// failed send.
pub async fn submit(state: &AppState, client: IpAddr, form: &ContactForm) -> Result<ContactOutcome, ContactError> {
    let form = form.trimmed();
    form.validate().map_err(ContactError::Invalid)?;
    state.rate_limiter.check_and_record(client)?;

    let settings = &state.contact;
    let Some(mailer) = state.mailer.as_ref() else {
        if settings.dev_mode {
            tracing::info!(
                %client,
                name = %form.name,
                email = %form.email,
                phone = %form.phone_or_placeholder(),
                message = %form.message,
                "contact enquiry (development mode, not sent)"
            );
            return Ok(ContactOutcome::Logged);
        }
        tracing::warn!(%client, "contact enquiry rejected: email service not configured");
        return Err(ContactError::NotConfigured);
    };

    let to = settings.mail.as_ref().map(|m| m.to.as_slice()).unwrap_or_default();
    let email = compose_enquiry(&form, &settings.recipient_label, to, OffsetDateTime::now_utc());
    mailer.send(email).await?;
    tracing::info!(%client, "contact enquiry delivered");
    Ok(ContactOutcome::Sent)
}

#[cfg(test)]
#[path = "contact_test.rs"]
mod tests;
