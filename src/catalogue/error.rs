//! Catalogue error types
//!
//! Display strings double as the `detail` text returned to clients.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by roster mutations and seed loading
#[derive(Error, Debug)]
pub enum RosterError {
    /// Requested activity does not exist
    #[error("Activity not found")]
    ActivityNotFound(String),

    /// Email is already on the activity's roster
    #[error("Student already signed up for an activity")]
    AlreadySignedUp { activity: String, email: String },

    /// Roster is at capacity
    #[error("Activity is full")]
    ActivityFull(String),

    /// Email is not on the activity's roster
    #[error("Participant not found in this activity")]
    ParticipantNotFound { activity: String, email: String },

    /// Seed file could not be read or parsed
    #[error("Failed to load seed file {path:?}: {error}")]
    Seed { path: PathBuf, error: String },
}

/// Result type alias for catalogue operations
pub type RosterResult<T> = Result<T, RosterError>;
