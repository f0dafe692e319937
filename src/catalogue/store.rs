//! Activity Store
//!
//! In-memory catalogue shared across request handlers.
//! Thread-safe via Tokio's async RwLock; every roster mutation performs its
//! checks and its write under a single write guard.

use std::fmt;
use tokio::sync::RwLock;

use crate::catalogue::error::{RosterError, RosterResult};
use crate::catalogue::seed::default_catalogue;
use crate::catalogue::types::{Activity, Snapshot};

/// In-memory activity catalogue
pub struct ActivityStore {
    catalogue: RwLock<Snapshot>,
}

/// Catalogue statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogueStats {
    pub activities: usize,
    pub participants: usize,
}

impl fmt::Display for CatalogueStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} activities, {} participants",
            self.activities, self.participants
        )
    }
}

impl ActivityStore {
    /// Create a store from an initial catalogue
    pub fn new(catalogue: Snapshot) -> Self {
        Self {
            catalogue: RwLock::new(catalogue),
        }
    }

    /// Create a store seeded with the built-in catalogue
    pub fn with_default_catalogue() -> Self {
        Self::new(default_catalogue())
    }

    /// Ordered copy of the whole catalogue
    pub async fn snapshot(&self) -> Snapshot {
        self.catalogue.read().await.clone()
    }

    /// Look up a single activity
    pub async fn get(&self, name: &str) -> Option<Activity> {
        self.catalogue.read().await.get(name).cloned()
    }

    /// Append `email` to the roster of `activity`
    pub async fn signup(&self, activity: &str, email: &str) -> RosterResult<()> {
        let mut catalogue = self.catalogue.write().await;

        let entry = catalogue
            .get_mut(activity)
            .ok_or_else(|| RosterError::ActivityNotFound(activity.to_string()))?;

        if entry.has_participant(email) {
            return Err(RosterError::AlreadySignedUp {
                activity: activity.to_string(),
                email: email.to_string(),
            });
        }

        if entry.is_full() {
            return Err(RosterError::ActivityFull(activity.to_string()));
        }

        entry.details.participants.push(email.to_string());
        Ok(())
    }

    /// Remove `email` from the roster of `activity`
    pub async fn unregister(&self, activity: &str, email: &str) -> RosterResult<()> {
        let mut catalogue = self.catalogue.write().await;

        let entry = catalogue
            .get_mut(activity)
            .ok_or_else(|| RosterError::ActivityNotFound(activity.to_string()))?;

        let position = entry
            .details
            .participants
            .iter()
            .position(|p| p == email)
            .ok_or_else(|| RosterError::ParticipantNotFound {
                activity: activity.to_string(),
                email: email.to_string(),
            })?;

        entry.details.participants.remove(position);
        Ok(())
    }

    pub async fn stats(&self) -> CatalogueStats {
        let catalogue = self.catalogue.read().await;
        CatalogueStats {
            activities: catalogue.len(),
            participants: catalogue.participant_count(),
        }
    }
}
