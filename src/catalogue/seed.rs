//! Seed data
//!
//! The built-in school catalogue, plus loading a replacement catalogue
//! from a JSON file in the `GET /activities` shape.

use std::path::Path;

use crate::catalogue::error::{RosterError, RosterResult};
use crate::catalogue::types::{Activity, Snapshot};

/// The default extracurricular catalogue
pub fn default_catalogue() -> Snapshot {
    Snapshot::new()
        .with(
            Activity::new(
                "Chess Club",
                "Learn strategies and compete in chess tournaments",
                "Fridays, 3:30 PM - 5:00 PM",
                12,
            )
            .participant("michael@mergington.edu")
            .participant("daniel@mergington.edu"),
        )
        .with(
            Activity::new(
                "Programming Class",
                "Learn programming fundamentals and build software projects",
                "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
                20,
            )
            .participant("emma@mergington.edu")
            .participant("sophia@mergington.edu"),
        )
        .with(
            Activity::new(
                "Gym Class",
                "Physical education and sports activities",
                "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
                30,
            )
            .participant("john@mergington.edu")
            .participant("olivia@mergington.edu"),
        )
        .with(
            Activity::new(
                "Soccer Team",
                "Join the school soccer team and compete in matches",
                "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
                22,
            )
            .participant("liam@mergington.edu")
            .participant("noah@mergington.edu"),
        )
        .with(
            Activity::new(
                "Basketball Team",
                "Practice and play basketball with the school team",
                "Wednesdays and Fridays, 3:30 PM - 5:00 PM",
                15,
            )
            .participant("ava@mergington.edu")
            .participant("mia@mergington.edu"),
        )
        .with(
            Activity::new(
                "Art Club",
                "Explore your creativity through painting and drawing",
                "Thursdays, 3:30 PM - 5:00 PM",
                15,
            )
            .participant("amelia@mergington.edu")
            .participant("harper@mergington.edu"),
        )
        .with(
            Activity::new(
                "Drama Club",
                "Act, direct, and produce plays and performances",
                "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
                20,
            )
            .participant("ella@mergington.edu")
            .participant("scarlett@mergington.edu"),
        )
        .with(
            Activity::new(
                "Math Club",
                "Solve challenging problems and participate in math competitions",
                "Tuesdays, 3:30 PM - 4:30 PM",
                10,
            )
            .participant("james@mergington.edu")
            .participant("benjamin@mergington.edu"),
        )
        .with(
            Activity::new(
                "Debate Team",
                "Develop public speaking and argumentation skills",
                "Fridays, 4:00 PM - 5:30 PM",
                12,
            )
            .participant("charlotte@mergington.edu")
            .participant("henry@mergington.edu"),
        )
}

/// Load a catalogue from a JSON seed file
pub fn load_seed_file(path: &Path) -> RosterResult<Snapshot> {
    let content = std::fs::read_to_string(path).map_err(|e| RosterError::Seed {
        path: path.to_path_buf(),
        error: e.to_string(),
    })?;

    serde_json::from_str(&content).map_err(|e| RosterError::Seed {
        path: path.to_path_buf(),
        error: e.to_string(),
    })
}
