//! Load event templates from disk.

use std::path::Path;

use anyhow::{Context, Result};
use repeatcal_core::EventForm;

/// Read an event form from a `.json` or `.toml` file.
pub fn load(path: &Path) -> Result<EventForm> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    parse(&content, path)
}

fn parse(content: &str, path: &Path) -> Result<EventForm> {
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or_default();

    match ext {
        "json" => serde_json::from_str(content)
            .with_context(|| format!("Invalid event template {}", path.display())),
        "toml" => {
            toml::from_str(content).with_context(|| format!("Invalid event template {}", path.display()))
        }
        _ => anyhow::bail!(
            "Unsupported template format '{}'. Use a .json or .toml file",
            path.display()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use repeatcal_core::RepeatType;

    const TOML_TEMPLATE: &str = r#"
title = "Gym"
date = "2025-10-01"
startTime = "07:00"
endTime = "08:00"
location = "Gym"
notificationTime = 10

[repeat]
type = "daily"
interval = 1
endDate = "2025-10-05"
"#;

    #[test]
    fn test_load_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gym.toml");
        std::fs::write(&path, TOML_TEMPLATE).unwrap();

        let form = load(&path).unwrap();
        assert_eq!(form.title, "Gym");
        assert_eq!(form.repeat.repeat_type, RepeatType::Daily);
        assert_eq!(form.repeat.end_date, NaiveDate::from_ymd_opt(2025, 10, 5));
        assert_eq!(form.description, "");
    }

    #[test]
    fn test_load_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gym.json");
        std::fs::write(
            &path,
            r#"{"title": "Gym", "date": "2025-10-01", "startTime": "07:00", "endTime": "08:00",
                "repeat": {"type": "weekly", "interval": 2}}"#,
        )
        .unwrap();

        let form = load(&path).unwrap();
        assert_eq!(form.repeat.repeat_type, RepeatType::Weekly);
        assert_eq!(form.repeat.interval, 2);
        assert_eq!(form.repeat.end_date, None);
    }

    #[test]
    fn test_unknown_extension() {
        let err = parse("", Path::new("gym.yaml")).unwrap_err();
        assert!(err.to_string().contains("Unsupported template format"));
    }

    #[test]
    fn test_missing_file() {
        assert!(load(Path::new("/nonexistent/gym.json")).is_err());
    }
}
