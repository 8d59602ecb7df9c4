// SPDX-License-Identifier: MPL-2.0
//! Beta-signup submission: payload shape, field validation, and the
//! fire-and-forget POST to the enrollment endpoint.
//!
//! The endpoint is a Google Apps Script deployment whose response body is
//! not readable by the caller. Success is therefore defined as "the network
//! call itself did not fail": status and body are ignored on purpose, and
//! the outcome is derived from the transport alone. This is an intentional
//! limitation of the enrollment channel, not an oversight.

use crate::error::SubmitError;
use serde::Serialize;
use std::time::Duration;

/// Fixed enrollment endpoint (Google Apps Script deployment).
pub const SIGNUP_ENDPOINT: &str =
    "https://script.google.com/macros/s/AKfycbwyYFRAh5UqQmjCFsCMtGL0ExiBbhmP_YtSYuCqJiBRJiXtOlHjn9MxU_hsjCVjpUv0Hw/exec";

/// Upper bound on a single submission attempt.
const SUBMIT_TIMEOUT: Duration = Duration::from_secs(15);

/// Flat key-value record posted as the JSON body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SignupRequest {
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    pub email: String,
    /// Optional social-profile handle or URL.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub social: String,
    /// Optional phone number.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub phone: String,
}

impl SignupRequest {
    /// Validates the required fields, returning the i18n key of the first
    /// problem found. Trims whitespace-only input.
    pub fn validate(&self) -> Option<&'static str> {
        if self.first_name.trim().is_empty()
            || self.last_name.trim().is_empty()
            || self.email.trim().is_empty()
        {
            return Some("beta-error-required");
        }
        if !looks_like_email(self.email.trim()) {
            return Some("beta-error-email");
        }
        None
    }
}

/// Lifecycle of the single in-flight submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    /// Nothing sent yet; the form is editable.
    #[default]
    Idle,
    /// One request is in flight; the form is locked.
    Sending,
    /// The transport succeeded; the record is assumed delivered.
    Sent,
    /// The transport failed; the form is editable and re-submittable.
    Failed,
}

impl SubmissionStatus {
    /// Whether the form accepts edits and a (re-)submission.
    #[must_use]
    pub fn is_editable(self) -> bool {
        matches!(self, SubmissionStatus::Idle | SubmissionStatus::Failed)
    }
}

/// Shallow shape check: one `@` with characters on both sides and a dot in
/// the domain. The endpoint revalidates on its own side.
fn looks_like_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

/// Posts the record to the enrollment endpoint.
///
/// Resolves to `Ok(())` whenever the transport completed, regardless of what
/// the endpoint answered (the body is unreadable by design).
pub async fn submit(request: SignupRequest) -> std::result::Result<(), SubmitError> {
    let client = reqwest::Client::builder()
        .timeout(SUBMIT_TIMEOUT)
        .build()
        .map_err(|e| SubmitError::InvalidRequest(e.to_string()))?;

    client
        .post(SIGNUP_ENDPOINT)
        .json(&request)
        .send()
        .await
        .map_err(|e| SubmitError::from_transport(&e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> SignupRequest {
        SignupRequest {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: "ada@university.edu".into(),
            social: String::new(),
            phone: String::new(),
        }
    }

    #[test]
    fn valid_request_passes_validation() {
        assert_eq!(valid_request().validate(), None);
    }

    #[test]
    fn missing_required_fields_are_reported() {
        let mut request = valid_request();
        request.first_name = "   ".into();
        assert_eq!(request.validate(), Some("beta-error-required"));

        let mut request = valid_request();
        request.last_name.clear();
        assert_eq!(request.validate(), Some("beta-error-required"));

        let mut request = valid_request();
        request.email.clear();
        assert_eq!(request.validate(), Some("beta-error-required"));
    }

    #[test]
    fn malformed_email_is_reported() {
        for email in ["pilot", "pilot@", "@university.edu", "pilot@edu", "pilot@.edu"] {
            let mut request = valid_request();
            request.email = email.into();
            assert_eq!(request.validate(), Some("beta-error-email"), "{email}");
        }
    }

    #[test]
    fn optional_fields_are_omitted_from_the_payload() {
        let json = serde_json::to_string(&valid_request()).expect("serialization failed");
        assert!(json.contains("firstName"));
        assert!(json.contains("lastName"));
        assert!(!json.contains("social"));
        assert!(!json.contains("phone"));
    }

    #[test]
    fn filled_optional_fields_are_serialized() {
        let mut request = valid_request();
        request.social = "linkedin.com/in/ada".into();
        request.phone = "+352 000 000".into();
        let json = serde_json::to_string(&request).expect("serialization failed");
        assert!(json.contains("linkedin.com/in/ada"));
        assert!(json.contains("+352 000 000"));
    }

    #[test]
    fn status_editability_follows_lifecycle() {
        assert!(SubmissionStatus::Idle.is_editable());
        assert!(SubmissionStatus::Failed.is_editable());
        assert!(!SubmissionStatus::Sending.is_editable());
        assert!(!SubmissionStatus::Sent.is_editable());
    }

    #[tokio::test]
    async fn submit_reports_transport_failure_for_unreachable_endpoint() {
        // A closed local port fails at the connection layer without touching
        // the real endpoint.
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(2))
            .build()
            .unwrap();
        let result = client
            .post("http://127.0.0.1:9/reject")
            .json(&valid_request())
            .send()
            .await;
        let err = result.expect_err("expected transport failure");
        assert!(matches!(
            SubmitError::from_transport(&err),
            SubmitError::Connection | SubmitError::Timeout | SubmitError::Other(_)
        ));
    }
}
