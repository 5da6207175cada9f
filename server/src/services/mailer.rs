//! Outbound email for contact enquiries.
//!
//! DESIGN
//! ======
//! Delivery sits behind the [`Mailer`] trait so the contact service can be
//! tested without network access. [`ResendMailer`] is the production
//! implementation. One attempt per enquiry; no retries.
//!
//! Every visitor-supplied value is HTML-escaped before it is substituted into
//! the template.

use resend_rs::Resend;
use resend_rs::types::CreateEmailBaseOptions;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc2822;

use listings::ContactForm;

use crate::config::MailConfig;

const CONTACT_TEMPLATE: &str = include_str!("../../templates/contact.html");

#[derive(Debug, thiserror::Error)]
pub enum MailError {
    #[error("email delivery failed: {0}")]
    Delivery(String),
}

/// A fully rendered enquiry email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundEmail {
    pub to: Vec<String>,
    pub reply_to: String,
    pub subject: String,
    pub html: String,
}

#[async_trait::async_trait]
pub trait Mailer: Send + Sync {
    /// Deliver one email.
    ///
    /// # Errors
    ///
    /// Returns [`MailError::Delivery`] if the provider rejects or fails the send.
    async fn send(&self, email: OutboundEmail) -> Result<(), MailError>;
}

// =============================================================================
// RESEND
// =============================================================================

pub struct ResendMailer {
    client: Resend,
    from: String,
}

impl ResendMailer {
    #[must_use]
    pub fn new(config: &MailConfig) -> Self {
        Self { client: Resend::new(&config.api_key), from: config.from.clone() }
    }
}

#[async_trait::async_trait]
impl Mailer for ResendMailer {
    async fn send(&self, email: OutboundEmail) -> Result<(), MailError> {
        let to: Vec<&str> = email.to.iter().map(String::as_str).collect();
        let message = CreateEmailBaseOptions::new(&self.from, to, &email.subject)
            .with_html(&email.html)
            .with_reply(&email.reply_to);
        self.client
            .emails
            .send(message)
            .await
            .map_err(|e| MailError::Delivery(e.to_string()))?;
        Ok(())
    }
}

// =============================================================================
// RENDERING
// =============================================================================

/// Build the enquiry email for a validated, trimmed form.
#[must_use]
pub fn compose_enquiry(form: &ContactForm, recipient_label: &str, to: &[String], received_at: OffsetDateTime) -> OutboundEmail {
    OutboundEmail {
        to: to.to_vec(),
        reply_to: form.email.clone(),
        subject: format!("New enquiry from {}", form.name),
        html: render_contact_template(form, recipient_label, &format_timestamp(received_at)),
    }
}

#[must_use]
pub fn render_contact_template(form: &ContactForm, recipient_label: &str, time: &str) -> String {
    CONTACT_TEMPLATE
        .replace("{{RECIPIENT}}", &escape_html(recipient_label))
        .replace("{{TIME}}", &escape_html(time))
        .replace("{{NAME}}", &escape_html(&form.name))
        .replace("{{EMAIL}}", &escape_html(&form.email))
        .replace("{{PHONE}}", &escape_html(form.phone_or_placeholder()))
        .replace("{{MESSAGE}}", &escape_html(&form.message))
}

fn format_timestamp(at: OffsetDateTime) -> String {
    at.format(&Rfc2822).unwrap_or_else(|_| at.unix_timestamp().to_string())
}

#[must_use]
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[path = "mailer_test.rs"]
mod tests;
