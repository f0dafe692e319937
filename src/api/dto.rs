//! Data Transfer Objects
//!
//! Request and response types for the API endpoints.
//! The activity listing itself is `catalogue::Snapshot`, which already
//! serializes in wire form.

use serde::{Deserialize, Serialize};

/// Query string of the signup/unregister endpoints
#[derive(Debug, Deserialize)]
pub struct SignupParams {
    pub email: String,
}

/// Success body of roster mutations
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn signed_up(email: &str, activity: &str) -> Self {
        Self {
            message: format!("Signed up {} for {}", email, activity),
        }
    }

    pub fn removed(email: &str, activity: &str) -> Self {
        Self {
            message: format!("Removed {} from {}", email, activity),
        }
    }
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall status: "healthy"
    pub status: String,
    /// Number of activities in the catalogue
    pub activities: usize,
    /// Number of signed-up participants across all activities
    pub participants: usize,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// RFC 3339 start time
    pub started_at: String,
    /// Server version
    pub version: String,
}
