//! Domain services called by route handlers.

pub mod contact;
pub mod mailer;
