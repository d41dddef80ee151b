//! Contact form submission model and validation.
//!
//! Validation rules only; the HTTP handler owns rate limiting and the
//! honeypot short-circuit. No submission is ever persisted or emailed —
//! accepted submissions are logged for the operator to follow up.

use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;
use validator::Validate;

use crate::error::CoreError;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid regex"));

/// Fields required to be non-blank, in reporting order.
const REQUIRED_FIELDS: &[&str] = &["name", "email", "phone", "message"];

/// An inbound contact form submission.
///
/// All fields default to empty strings so partial payloads deserialize and
/// fail validation with a field-specific message instead of a serde error.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactSubmission {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(
        length(min = 1, message = "email is required"),
        regex(path = *EMAIL_RE, message = "email must be a valid address")
    )]
    pub email: String,
    #[validate(length(min = 1, message = "phone is required"))]
    pub phone: String,
    pub service: String,
    pub location: String,
    pub vehicle_make: String,
    pub vehicle_model: String,
    pub vehicle_year: String,
    pub vehicle_colour: String,
    #[validate(length(min = 1, message = "message is required"))]
    pub message: String,
    /// Hidden field; humans leave it empty, bots fill it in.
    pub honeypot: String,
}

impl ContactSubmission {
    /// Copy with every field whitespace-trimmed, so blank-but-padded
    /// required fields fail the length checks.
    pub fn sanitized(&self) -> Self {
        let trim = |s: &String| s.trim().to_string();
        Self {
            name: trim(&self.name),
            email: trim(&self.email),
            phone: trim(&self.phone),
            service: trim(&self.service),
            location: trim(&self.location),
            vehicle_make: trim(&self.vehicle_make),
            vehicle_model: trim(&self.vehicle_model),
            vehicle_year: trim(&self.vehicle_year),
            vehicle_colour: trim(&self.vehicle_colour),
            message: trim(&self.message),
            honeypot: trim(&self.honeypot),
        }
    }

    /// Whether the hidden field was filled in. Such submissions are
    /// acknowledged with a normal success response and otherwise dropped.
    pub fn is_honeypot(&self) -> bool {
        !self.honeypot.is_empty()
    }

    /// Run the derived validators and surface the first failure as a
    /// [`CoreError::Validation`], reporting fields in a fixed order.
    pub fn check(&self) -> Result<(), CoreError> {
        self.validate().map_err(|errors| {
            let by_field = errors.field_errors();
            for field in REQUIRED_FIELDS {
                if let Some(list) = by_field.get(field) {
                    let message = list
                        .iter()
                        .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
                        .unwrap_or_else(|| format!("Invalid value for {field}"));
                    return CoreError::Validation(message);
                }
            }
            CoreError::Validation("Invalid submission".to_string())
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
