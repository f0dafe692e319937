//! Core catalogue types
//!
//! Defines the fundamental data structures:
//! - `ActivityDetails`: The per-activity payload exchanged over the wire
//! - `Activity`: A named activity with its roster
//! - `Snapshot`: The ordered activity mapping served by `GET /activities`

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Activity payload as it appears under its name in the catalogue JSON
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityDetails {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    /// Signed-up emails in signup order
    #[serde(default)]
    pub participants: Vec<String>,
}

/// A named activity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    /// Unique key within the catalogue
    pub name: String,
    pub details: ActivityDetails,
}

impl Activity {
    /// Create an activity with an empty roster
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        schedule: impl Into<String>,
        max_participants: u32,
    ) -> Self {
        Self {
            name: name.into(),
            details: ActivityDetails {
                description: description.into(),
                schedule: schedule.into(),
                max_participants,
                participants: Vec::new(),
            },
        }
    }

    /// Add a participant (builder pattern)
    pub fn participant(mut self, email: impl Into<String>) -> Self {
        self.details.participants.push(email.into());
        self
    }

    /// Remaining capacity. Negative when a seed over-fills the roster.
    pub fn spots_left(&self) -> i64 {
        i64::from(self.details.max_participants) - self.details.participants.len() as i64
    }

    pub fn is_full(&self) -> bool {
        self.spots_left() <= 0
    }

    pub fn has_participant(&self, email: &str) -> bool {
        self.details.participants.iter().any(|p| p == email)
    }
}

/// Ordered activity mapping.
///
/// Serializes as a JSON object keyed by activity name, keeping insertion
/// order so clients render activities in catalogue order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    activities: Vec<Activity>,
}

impl Snapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an activity, replacing any existing entry with the same name in place
    pub fn insert(&mut self, activity: Activity) {
        match self.activities.iter_mut().find(|a| a.name == activity.name) {
            Some(existing) => *existing = activity,
            None => self.activities.push(activity),
        }
    }

    /// Add an activity (builder pattern)
    pub fn with(mut self, activity: Activity) -> Self {
        self.insert(activity);
        self
    }

    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.activities.iter().find(|a| a.name == name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Activity> {
        self.activities.iter_mut().find(|a| a.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Activity> {
        self.activities.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.activities.iter().map(|a| a.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    /// Total participants across all activities
    pub fn participant_count(&self) -> usize {
        self.activities
            .iter()
            .map(|a| a.details.participants.len())
            .sum()
    }
}

impl FromIterator<Activity> for Snapshot {
    fn from_iter<I: IntoIterator<Item = Activity>>(iter: I) -> Self {
        let mut snapshot = Snapshot::new();
        for activity in iter {
            snapshot.insert(activity);
        }
        snapshot
    }
}

impl Serialize for Snapshot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.activities.len()))?;
        for activity in &self.activities {
            map.serialize_entry(&activity.name, &activity.details)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Snapshot {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SnapshotVisitor;

        impl<'de> Visitor<'de> for SnapshotVisitor {
            type Value = Snapshot;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of activity name to activity details")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Snapshot, A::Error> {
                let mut activities = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((name, details)) = access.next_entry::<String, ActivityDetails>()? {
                    if activities.iter().any(|a: &Activity| a.name == name) {
                        return Err(serde::de::Error::custom(format!(
                            "duplicate activity: {}",
                            name
                        )));
                    }
                    activities.push(Activity { name, details });
                }
                Ok(Snapshot { activities })
            }
        }

        deserializer.deserialize_map(SnapshotVisitor)
    }
}
