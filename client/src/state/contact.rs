//! Contact form state machine.
//!
//! DESIGN
//! ======
//! `begin_submit` validates and flips `submitting`; the component then awaits
//! the network call and hands its result to `finish`. While `submitting` is
//! set a second `begin_submit` is refused, so only one request is ever in
//! flight. The form is cleared only after a successful delivery.
//!
//! ERROR HANDLING
//! ==============
//! Every outcome maps to exactly one [`Notice`]. Transport errors and
//! unparseable responses collapse into the generic unexpected-error message.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use listings::contact::{MSG_INVALID, MSG_UNEXPECTED};
use listings::{ContactErrors, ContactField, ContactForm, ContactResponse};

use super::toast::Notice;

/// Why a submission did not start.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitRejected {
    /// A request is already in flight.
    Busy,
    /// Local validation failed; errors are now on the state.
    Invalid(Notice),
}

#[derive(Clone, Debug, Default)]
pub struct ContactFormState {
    pub form: ContactForm,
    pub errors: ContactErrors,
    pub submitting: bool,
}

impl ContactFormState {
    /// Update one input. Editing a field clears its stale error.
    pub fn set_field(&mut self, field: ContactField, value: String) {
        self.form.set_field(field, value);
        self.errors.remove(field);
    }

    #[must_use]
    pub fn error(&self, field: ContactField) -> Option<&str> {
        self.errors.get(field)
    }

    /// Validate and enter the submitting state.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitRejected::Busy`] while a request is in flight, or
    /// [`SubmitRejected::Invalid`] with the notice to show when validation fails.
    pub fn begin_submit(&mut self) -> Result<ContactForm, SubmitRejected> {
        if self.submitting {
            return Err(SubmitRejected::Busy);
        }
        if let Err(errors) = self.form.validate() {
            self.errors = errors;
            return Err(SubmitRejected::Invalid(Notice::error("Validation Error", MSG_INVALID)));
        }
        self.errors = ContactErrors::default();
        self.submitting = true;
        Ok(self.form.trimmed())
    }

    /// Apply the delivery result and return the notice to show.
    pub fn finish(&mut self, result: Result<ContactResponse, String>) -> Notice {
        self.submitting = false;
        match result {
            Ok(resp) if resp.success => {
                self.form = ContactForm::default();
                Notice::info("Message Sent!", &resp.message)
            }
            Ok(resp) => {
                if !resp.errors.is_empty() {
                    self.errors = resp.errors;
                }
                Notice::error("Error", &resp.message)
            }
            Err(_) => Notice::error("Error", MSG_UNEXPECTED),
        }
    }
}
