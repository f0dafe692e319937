//! HTTP API Client
//!
//! Functions for communicating with the Activity Board REST API.

use gloo_net::http::{Request, Response};
use thiserror::Error;
use web_sys::RequestCache;

use crate::state::snapshot::Snapshot;

/// Default API base URL (same origin as the page)
pub const DEFAULT_API_BASE: &str = "";

/// Local storage key overriding the API base URL
pub const API_BASE_STORAGE_KEY: &str = "activity_board_api_url";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(API_BASE_STORAGE_KEY).ok().flatten())
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

    normalize_api_base(&url)
}

/// Remove trailing slashes so paths can be appended directly
pub fn normalize_api_base(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}

/// Relative URL of the signup/unregister endpoint, percent-encoding both values
pub fn signup_path(activity: &str, email: &str) -> String {
    format!(
        "/activities/{}/signup?email={}",
        urlencoding::encode(activity),
        urlencoding::encode(email)
    )
}

// ============ Errors ============

/// Failure of a single API request
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RequestError {
    /// Non-success status with a JSON body; `detail` when the body carried one
    #[error("Rejected by server: {}", .detail.as_deref().unwrap_or("no detail"))]
    Rejected { detail: Option<String> },

    /// Network failure or a body that is not the expected JSON
    #[error("{0}")]
    Transport(String),
}

/// Notification texts used when an operation fails
#[derive(Debug, Clone, Copy)]
pub struct FailureText {
    /// Shown for a rejection without a usable `detail`
    pub rejected: &'static str,
    /// Shown for a transport or parse failure
    pub transport: &'static str,
}

pub const SIGNUP_FAILURE: FailureText = FailureText {
    rejected: "An error occurred",
    transport: "Failed to sign up. Please try again.",
};

pub const REMOVAL_FAILURE: FailureText = FailureText {
    rejected: "Failed to remove participant.",
    transport: "Failed to remove participant. Please try again.",
};

impl RequestError {
    /// Text for the user-facing notification
    pub fn notice_text(&self, text: &FailureText) -> String {
        match self {
            RequestError::Rejected { detail: Some(detail) } if !detail.is_empty() => {
                detail.clone()
            }
            RequestError::Rejected { .. } => text.rejected.to_string(),
            RequestError::Transport(_) => text.transport.to_string(),
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, RequestError::Transport(_))
    }
}

// ============ Response Types ============

#[derive(Debug, serde::Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: String,
}

/// Error body. `detail` is usually a string, but validation errors may
/// carry a structured value.
#[derive(Debug, serde::Deserialize)]
pub struct DetailResponse {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl DetailResponse {
    /// The detail when it is a string; any other shape falls back to the generic text
    pub fn into_text(self) -> Option<String> {
        match self.detail {
            Some(serde_json::Value::String(text)) => Some(text),
            _ => None,
        }
    }
}

// ============ API Functions ============

/// Fetch the full activity catalogue, bypassing the HTTP cache
pub async fn fetch_activities() -> Result<Snapshot, RequestError> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/activities", api_base))
        .cache(RequestCache::NoStore)
        .send()
        .await
        .map_err(|e| RequestError::Transport(format!("Network error: {}", e)))?;

    let response = check(response).await?;

    response
        .json()
        .await
        .map_err(|e| RequestError::Transport(format!("Parse error: {}", e)))
}

/// Sign `email` up for `activity`, returning the server message
pub async fn signup(activity: &str, email: &str) -> Result<String, RequestError> {
    let api_base = get_api_base();

    let response = Request::post(&format!("{}{}", api_base, signup_path(activity, email)))
        .send()
        .await
        .map_err(|e| RequestError::Transport(format!("Network error: {}", e)))?;

    message(check(response).await?).await
}

/// Remove `email` from `activity`, returning the server message
pub async fn unregister(activity: &str, email: &str) -> Result<String, RequestError> {
    let api_base = get_api_base();

    let response = Request::delete(&format!("{}{}", api_base, signup_path(activity, email)))
        .send()
        .await
        .map_err(|e| RequestError::Transport(format!("Network error: {}", e)))?;

    message(check(response).await?).await
}

/// Turn a non-success response into `RequestError::Rejected`
async fn check(response: Response) -> Result<Response, RequestError> {
    if response.ok() {
        return Ok(response);
    }

    let error: DetailResponse = response
        .json()
        .await
        .map_err(|e| RequestError::Transport(format!("Parse error: {}", e)))?;

    Err(RequestError::Rejected {
        detail: error.into_text(),
    })
}

async fn message(response: Response) -> Result<String, RequestError> {
    let body: MessageResponse = response
        .json()
        .await
        .map_err(|e| RequestError::Transport(format!("Parse error: {}", e)))?;

    Ok(body.message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signup_path_encoding() {
        assert_eq!(
            signup_path("Chess Club", "b@x.com"),
            "/activities/Chess%20Club/signup?email=b%40x.com"
        );
        assert_eq!(
            signup_path("Math/Science", "a+b@x.com"),
            "/activities/Math%2FScience/signup?email=a%2Bb%40x.com"
        );
    }

    #[test]
    fn test_normalize_api_base() {
        assert_eq!(normalize_api_base(""), "");
        assert_eq!(normalize_api_base("http://localhost:8000/"), "http://localhost:8000");
        assert_eq!(normalize_api_base("http://localhost:8000"), "http://localhost:8000");
    }

    #[test]
    fn test_rejected_uses_server_detail() {
        let err = RequestError::Rejected {
            detail: Some("Already signed up".to_string()),
        };
        assert_eq!(err.notice_text(&SIGNUP_FAILURE), "Already signed up");
        assert!(!err.is_transport());
    }

    #[test]
    fn test_rejected_without_detail_falls_back() {
        let err = RequestError::Rejected { detail: None };
        assert_eq!(err.notice_text(&SIGNUP_FAILURE), "An error occurred");
        assert_eq!(err.notice_text(&REMOVAL_FAILURE), "Failed to remove participant.");

        let err = RequestError::Rejected {
            detail: Some(String::new()),
        };
        assert_eq!(err.notice_text(&SIGNUP_FAILURE), "An error occurred");
    }

    #[test]
    fn test_transport_failure_text() {
        let err = RequestError::Transport("Network error: offline".to_string());
        assert_eq!(
            err.notice_text(&SIGNUP_FAILURE),
            "Failed to sign up. Please try again."
        );
        assert_eq!(
            err.notice_text(&REMOVAL_FAILURE),
            "Failed to remove participant. Please try again."
        );
        assert!(err.is_transport());
    }

    #[test]
    fn test_detail_body_parsing() {
        let body: DetailResponse = serde_json::from_str(r#"{"detail":"Already signed up"}"#).unwrap();
        assert_eq!(body.into_text().as_deref(), Some("Already signed up"));

        let body: DetailResponse = serde_json::from_str(r#"{}"#).unwrap();
        assert!(body.into_text().is_none());
    }

    #[test]
    fn test_structured_detail_uses_rejection_fallback() {
        let body: DetailResponse = serde_json::from_str(
            r#"{"detail":[{"loc":["query","email"],"msg":"field required","type":"value_error.missing"}]}"#,
        )
        .unwrap();
        let err = RequestError::Rejected {
            detail: body.into_text(),
        };

        assert!(!err.is_transport());
        assert_eq!(err.notice_text(&SIGNUP_FAILURE), "An error occurred");
        assert_eq!(err.notice_text(&REMOVAL_FAILURE), "Failed to remove participant.");

        let body: DetailResponse = serde_json::from_str(r#"{"detail":null}"#).unwrap();
        assert!(body.into_text().is_none());
    }
}
