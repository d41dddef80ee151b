//! Contact form endpoint.
//!
//! Validates the submission, applies the per-IP rate limit, and logs the
//! sanitized result for the operator. Honeypot-flagged submissions are
//! acknowledged as successes and dropped without logging, to misdirect
//! automated submitters. No outbound email is sent.

use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::IntoResponse;
use axum::{routing::post, Json, Router};
use chrono::Utc;
use serde::Serialize;

use detailworks_core::contact::ContactSubmission;
use detailworks_core::rate_limit::Decision;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ContactAck {
    pub received: bool,
}

/// POST /api/v1/contact
async fn submit_contact(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(input): Json<ContactSubmission>,
) -> AppResult<impl IntoResponse> {
    let submission = input.sanitized();

    // Bots fill the hidden field; report success and do nothing else.
    if submission.is_honeypot() {
        return Ok(Json(DataResponse {
            data: ContactAck { received: true },
        }));
    }

    let key = client_ip(&headers);
    if state.limiter.check(&key, Utc::now()) == Decision::Denied {
        tracing::warn!(client = %key, "Contact rate limit tripped");
        return Err(AppError::RateLimited);
    }

    submission.check()?;

    tracing::info!(
        name = %submission.name,
        email = %submission.email,
        phone = %submission.phone,
        service = %submission.service,
        location = %submission.location,
        vehicle_make = %submission.vehicle_make,
        vehicle_model = %submission.vehicle_model,
        vehicle_year = %submission.vehicle_year,
        vehicle_colour = %submission.vehicle_colour,
        message_len = submission.message.len(),
        "Contact submission received"
    );

    Ok(Json(DataResponse {
        data: ContactAck { received: true },
    }))
}

/// Best-effort client key for rate limiting: first `x-forwarded-for` entry,
/// then `x-real-ip`, then a shared fallback bucket.
fn client_ip(headers: &HeaderMap) -> String {
    if let Some(forwarded) = headers.get("x-forwarded-for").and_then(|v| v.to_str().ok()) {
        if let Some(first) = forwarded.split(',').next() {
            let first = first.trim();
            if !first.is_empty() {
                return first.to_string();
            }
        }
    }

    if let Some(real_ip) = headers.get("x-real-ip").and_then(|v| v.to_str().ok()) {
        let real_ip = real_ip.trim();
        if !real_ip.is_empty() {
            return real_ip.to_string();
        }
    }

    "unknown".to_string()
}

pub fn router() -> Router<AppState> {
    Router::new().route("/contact", post(submit_contact))
}

#[cfg(test)]
mod tests {
    use super::client_ip;
    use axum::http::HeaderMap;

    #[test]
    fn forwarded_for_takes_first_entry() {
        let mut headers = HeaderMap::new();
        headers.insert("x-forwarded-for", "203.0.113.9, 10.0.0.1".parse().unwrap());
        assert_eq!(client_ip(&headers), "203.0.113.9");
    }

    #[test]
    fn real_ip_is_the_fallback() {
        let mut headers = HeaderMap::new();
        headers.insert("x-real-ip", "198.51.100.7".parse().unwrap());
        assert_eq!(client_ip(&headers), "198.51.100.7");
    }

    #[test]
    fn no_headers_means_shared_bucket() {
        assert_eq!(client_ip(&HeaderMap::new()), "unknown");
    }
}
