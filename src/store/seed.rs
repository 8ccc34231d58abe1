use std::fs;
use std::path::Path;

use crate::error::SeedError;
use crate::models::{Activity, Registry};

/// The school's activities as they stand at startup.
pub fn default_registry() -> Registry {
    [
        (
            "Chess Club",
            Activity::new(
                "Learn strategies and compete in chess tournaments",
                "Fridays, 3:30 PM - 5:00 PM",
                12,
                &["michael@mergington.edu", "daniel@mergington.edu"],
            ),
        ),
        (
            "Programming Class",
            Activity::new(
                "Learn programming fundamentals and build software projects",
                "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
                20,
                &["emma@mergington.edu", "sophia@mergington.edu"],
            ),
        ),
        (
            "Gym Class",
            Activity::new(
                "Physical education and sports activities",
                "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
                30,
                &["john@mergington.edu", "olivia@mergington.edu"],
            ),
        ),
        (
            "Soccer Team",
            Activity::new(
                "Competitive soccer practices and matches",
                "Mondays, Wednesdays, 4:00 PM - 6:00 PM",
                22,
                &["nathan@mergington.edu", "laura@mergington.edu"],
            ),
        ),
        (
            "Basketball Club",
            Activity::new(
                "Skill development and intra-school games",
                "Tuesdays and Thursdays, 5:00 PM - 7:00 PM",
                15,
                &["ryan@mergington.edu", "zoe@mergington.edu"],
            ),
        ),
        (
            "Art Club",
            Activity::new(
                "Drawing, painting, and portfolio development",
                "Wednesdays, 3:30 PM - 5:00 PM",
                18,
                &["isabella@mergington.edu", "liam@mergington.edu"],
            ),
        ),
        (
            "Drama Club",
            Activity::new(
                "Theater production, rehearsals, and performances",
                "Fridays, 4:00 PM - 6:30 PM",
                25,
                &["mia@mergington.edu", "ethan@mergington.edu"],
            ),
        ),
        (
            "Math Olympiad",
            Activity::new(
                "Advanced problem solving and competition preparation",
                "Thursdays, 3:30 PM - 5:00 PM",
                16,
                &["oliver@mergington.edu", "ava@mergington.edu"],
            ),
        ),
        (
            "Science Club",
            Activity::new(
                "Experiments, projects, and STEM exploration",
                "Tuesdays, 3:30 PM - 5:00 PM",
                20,
                &["noah@mergington.edu", "sophia2@mergington.edu"],
            ),
        ),
    ]
    .into_iter()
    .map(|(name, activity)| (name.to_string(), activity))
    .collect()
}

/// Reads a registry from a JSON file in the same shape `GET /activities`
/// returns.
pub fn load_registry(path: impl AsRef<Path>) -> Result<Registry, SeedError> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).map_err(|source| SeedError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_registry(&raw).map_err(|source| SeedError::Parse {
        path: path.display().to_string(),
        source,
    })
}

fn parse_registry(raw: &str) -> Result<Registry, serde_json::Error> {
    serde_json::from_str(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_registry_has_nine_activities_with_two_members_each() {
        let registry = default_registry();

        assert_eq!(registry.len(), 9);
        assert!(registry.values().all(|a| a.participants.len() == 2));
        assert_eq!(registry["Gym Class"].max_participants, 30);
    }

    #[test]
    fn parses_listing_shaped_json() {
        let raw = r#"{
            "Robotics": {
                "description": "Build robots",
                "schedule": "Mondays",
                "max_participants": 10,
                "participants": ["a@x.edu"]
            },
            "Choir": {
                "description": "Sing",
                "schedule": "Fridays",
                "max_participants": 40
            }
        }"#;

        let registry = parse_registry(raw).unwrap();

        assert_eq!(registry["Robotics"].participants, vec!["a@x.edu"]);
        assert!(registry["Choir"].participants.is_empty());
    }

    #[test]
    fn missing_file_reports_path() {
        let err = load_registry("/definitely/not/here.json").unwrap_err();

        assert!(matches!(err, SeedError::Io { .. }));
        assert!(err.to_string().contains("/definitely/not/here.json"));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let dir = std::env::temp_dir().join(format!("activities-seed-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = load_registry(&path).unwrap_err();

        assert!(matches!(err, SeedError::Parse { .. }));
        let _ = std::fs::remove_dir_all(&dir);
    }
}
