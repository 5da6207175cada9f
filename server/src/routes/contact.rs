//! Contact route: `POST /api/contact`.
//!
//! Every outcome, including failures, is answered with a `ContactResponse`
//! body so the browser can show the message as-is.

use std::net::{IpAddr, SocketAddr};

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{ConnectInfo, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};

use listings::ContactForm;
use listings::contact::{
    ContactResponse, MSG_DELIVERY_FAILED, MSG_DEV_MODE, MSG_NOT_CONFIGURED, MSG_RATE_LIMITED, MSG_SEND_FAILED,
    MSG_SENT,
};

use crate::services::contact::{self, ContactError, ContactOutcome};
use crate::state::AppState;

/// Map a service result to status + body.
pub(crate) fn contact_response(result: Result<ContactOutcome, ContactError>) -> (StatusCode, ContactResponse) {
    match result {
        Ok(ContactOutcome::Sent) => (StatusCode::OK, ContactResponse::ok(MSG_SENT)),
        Ok(ContactOutcome::Logged) => (StatusCode::OK, ContactResponse::ok(MSG_DEV_MODE)),
        Err(ContactError::Invalid(errors)) => (StatusCode::UNPROCESSABLE_ENTITY, ContactResponse::invalid(errors)),
        Err(ContactError::RateLimited(_)) => (StatusCode::TOO_MANY_REQUESTS, ContactResponse::failed(MSG_RATE_LIMITED)),
        Err(ContactError::NotConfigured) => {
            (StatusCode::SERVICE_UNAVAILABLE, ContactResponse::failed(MSG_NOT_CONFIGURED))
        }
        Err(ContactError::Delivery(_)) => (StatusCode::BAD_GATEWAY, ContactResponse::failed(MSG_DELIVERY_FAILED)),
    }
}

/// Client address for rate limiting. The first `X-Forwarded-For` hop is used
/// only when the deployment says a proxy sets it.
pub(crate) fn client_ip(peer: SocketAddr, headers: &HeaderMap, trust_forwarded_for: bool) -> IpAddr {
    if trust_forwarded_for {
        let forwarded = headers
            .get("x-forwarded-for")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(',').next())
            .and_then(|v| v.trim().parse::<IpAddr>().ok());
        if let Some(ip) = forwarded {
            return ip;
        }
    }
    peer.ip()
}

/// `POST /api/contact`: validate and deliver a contact enquiry.
pub async fn submit_contact(
    State(state): State<AppState>,
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
    payload: Result<Json<ContactForm>, JsonRejection>,
) -> Response {
    let form = match payload {
        Ok(Json(form)) => form,
        Err(e) => {
            tracing::warn!(error = %e, "contact: malformed request body");
            return (StatusCode::BAD_REQUEST, Json(ContactResponse::failed(MSG_SEND_FAILED))).into_response();
        }
    };

    let client = client_ip(peer, &headers, state.contact.trust_forwarded_for);
    let result = contact::submit(&state, client, &form).await;
    match &result {
        Err(ContactError::Invalid(errors)) => tracing::debug!(%client, fields = errors.len(), "contact: validation failed"),
        Err(ContactError::RateLimited(e)) => tracing::warn!(%client, error = %e, "contact: rate limited"),
        Err(ContactError::Delivery(e)) => tracing::error!(%client, error = %e, "contact: delivery failed"),
        _ => {}
    }

    let (status, body) = contact_response(result);
    (status, Json(body)).into_response()
}

#[cfg(test)]
#[path = "contact_test.rs"]
mod tests;
