//! Activity Snapshot
//!
//! Client-side copy of the catalogue returned by `GET /activities`.
//! Replaced wholesale on every fetch and never edited locally.

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::fmt;

/// Placeholder shown instead of a roster when nobody has signed up
pub const EMPTY_ROSTER_TEXT: &str = "Be the first to sign up!";

/// Activity details from the API
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct ActivityDetails {
    pub description: String,
    pub schedule: String,
    pub max_participants: i64,
    #[serde(default)]
    pub participants: Vec<String>,
}

/// A named activity
#[derive(Clone, Debug, PartialEq)]
pub struct Activity {
    pub name: String,
    pub details: ActivityDetails,
}

impl Activity {
    /// Capacity minus current participant count
    pub fn spots_left(&self) -> i64 {
        self.details.max_participants - self.details.participants.len() as i64
    }

    /// Availability line, e.g. "9 spots left"
    pub fn availability_label(&self) -> String {
        format!("{} spots left", self.spots_left())
    }

    /// Placeholder text when the roster is empty
    pub fn roster_placeholder(&self) -> Option<&'static str> {
        self.details
            .participants
            .is_empty()
            .then_some(EMPTY_ROSTER_TEXT)
    }

    /// Accessible label for a participant's removal control
    pub fn removal_label(&self, participant: &str) -> String {
        format!("Remove {} from {}", participant, self.name)
    }
}

/// Activities in server order
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Snapshot {
    pub activities: Vec<Activity>,
}

impl Snapshot {
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.activities.iter().map(|a| a.name.as_str())
    }

    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.activities.iter().find(|a| a.name == name)
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
                let mut activities = Vec::new();
                while let Some((name, details)) = access.next_entry::<String, ActivityDetails>()? {
                    activities.push(Activity { name, details });
                }
                Ok(Snapshot { activities })
            }
        }

        deserializer.deserialize_map(SnapshotVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHESS_FIXTURE: &str = r#"{"Chess Club": {"description":"Play chess","schedule":"Fri 3pm","max_participants":10,"participants":["a@x.com"]}}"#;

    #[test]
    fn test_chess_fixture() {
        let snapshot: Snapshot = serde_json::from_str(CHESS_FIXTURE).unwrap();
        let chess = snapshot.get("Chess Club").unwrap();

        assert_eq!(chess.spots_left(), 9);
        assert_eq!(chess.availability_label(), "9 spots left");
        assert_eq!(chess.roster_placeholder(), None);
        assert_eq!(chess.removal_label("a@x.com"), "Remove a@x.com from Chess Club");
    }

    #[test]
    fn test_empty_roster_placeholder() {
        let snapshot: Snapshot = serde_json::from_str(
            r#"{"Art Club": {"description":"Paint","schedule":"Thu","max_participants":5,"participants":[]}}"#,
        )
        .unwrap();
        let art = snapshot.get("Art Club").unwrap();

        assert_eq!(art.roster_placeholder(), Some(EMPTY_ROSTER_TEXT));
        assert_eq!(art.availability_label(), "5 spots left");
    }

    #[test]
    fn test_spots_left_for_every_activity() {
        let snapshot: Snapshot = serde_json::from_str(
            r#"{
                "A": {"description":"","schedule":"","max_participants":3,"participants":["1","2"]},
                "B": {"description":"","schedule":"","max_participants":0,"participants":[]},
                "C": {"description":"","schedule":"","max_participants":1,"participants":["1","2"]}
            }"#,
        )
        .unwrap();

        for activity in &snapshot.activities {
            assert_eq!(
                activity.spots_left(),
                activity.details.max_participants - activity.details.participants.len() as i64
            );
        }
        assert_eq!(snapshot.get("C").unwrap().availability_label(), "-1 spots left");
    }

    #[test]
    fn test_server_order_preserved() {
        let snapshot: Snapshot = serde_json::from_str(
            r#"{
                "Zeta": {"description":"","schedule":"","max_participants":1},
                "Alpha": {"description":"","schedule":"","max_participants":1}
            }"#,
        )
        .unwrap();

        assert_eq!(snapshot.names().collect::<Vec<_>>(), vec!["Zeta", "Alpha"]);
    }

    #[test]
    fn test_error_body_is_not_a_snapshot() {
        let result: Result<Snapshot, _> = serde_json::from_str(r#"{"detail": "Internal error"}"#);
        assert!(result.is_err());
    }
}
