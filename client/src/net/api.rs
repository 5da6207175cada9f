//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since the contact endpoint is
//! only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! The server answers every handled outcome (validation, rate limiting,
//! delivery failure, missing configuration) with a `ContactResponse` body, so
//! any status carrying a parseable body is returned as `Ok`. Only transport
//! failures and unparseable bodies become `Err`.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use listings::{ContactForm, ContactResponse};

pub const CONTACT_ENDPOINT: &str = "/api/contact";

#[cfg(any(test, feature = "hydrate"))]
fn contact_failed_message(status: u16) -> String {
    format!("contact request failed: {status}")
}

/// Interpret a raw response body from the contact endpoint.
#[cfg(any(test, feature = "hydrate"))]
fn parse_contact_response(status: u16, body: &str) -> Result<ContactResponse, String> {
    serde_json::from_str::<ContactResponse>(body).map_err(|_| contact_failed_message(status))
}

/// Submit the contact form via `POST /api/contact`.
///
/// # Errors
///
/// Returns an error string if the request cannot be sent or the response body
/// is not a contact response.
pub async fn submit_contact(form: &ContactForm) -> Result<ContactResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(CONTACT_ENDPOINT)
            .json(form)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        let status = resp.status();
        let body = resp.text().await.map_err(|e| e.to_string())?;
        if !resp.ok() {
            log::warn!("contact submit returned status {status}");
        }
        parse_contact_response(status, &body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = form;
        Err("not available on server".to_owned())
    }
}
