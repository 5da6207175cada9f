//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the contact settings, the optional outbound mailer, and the contact
//! rate limiter. There is no database; the catalog is compiled in.

use std::sync::Arc;

use crate::config::ContactConfig;
use crate::rate_limit::RateLimiter;
use crate::services::mailer::Mailer;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; all inner fields are Arc-wrapped or Clone.
#[derive(Clone)]
pub struct AppState {
    pub contact: Arc<ContactConfig>,
    /// Optional mailer. `None` if mail env vars are not configured.
    pub mailer: Option<Arc<dyn Mailer>>,
    /// In-memory rate limiter for contact submissions.
    pub rate_limiter: RateLimiter,
}

impl AppState {
    #[must_use]
    pub fn new(contact: ContactConfig, mailer: Option<Arc<dyn Mailer>>) -> Self {
        let rate_limiter = RateLimiter::new(contact.rate_limit);
        Self { contact: Arc::new(contact), mailer, rate_limiter }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
#[path = "state_helpers_test.rs"]
pub mod test_helpers;

#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
