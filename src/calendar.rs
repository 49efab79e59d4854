//! Calendar index building.
//!
//! Calendar events live as individual JSON files in the calendar folder,
//! one event per file. Each file is read independently: a file that fails
//! to parse or lacks a date is skipped with a warning and never produces a
//! partial item. Valid events sort ascending by date, unlike the content
//! indexes, because calendar views read chronologically forward.

use crate::index::{self, IndexError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Fallback title for events that do not name one.
const DEFAULT_TITLE: &str = "Termin";

/// A generated calendar index.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarIndex {
    pub generated_at: String,
    pub items: Vec<CalendarEvent>,
}

/// A calendar event as emitted into the index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub id: String,
    /// YYYY-MM-DD
    pub date: String,
    pub title: String,
    pub projects: Vec<String>,
    pub tags: Vec<String>,
    #[serde(rename = "where")]
    pub location: String,
    pub note: String,
}

/// On-disk event shape; every field optional so partial files parse.
#[derive(Debug, Deserialize)]
struct RawEvent {
    id: Option<String>,
    date: Option<String>,
    title: Option<String>,
    #[serde(default)]
    projects: Vec<String>,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(rename = "where")]
    location: Option<String>,
    note: Option<String>,
}

/// Build the calendar index from every `.json` file in the events folder.
pub fn build(events_dir: &Path) -> Result<CalendarIndex, IndexError> {
    let mut items = Vec::new();

    if events_dir.is_dir() {
        let mut files: Vec<PathBuf> = fs::read_dir(events_dir)?
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file()
                    && path
                        .extension()
                        .map(|ext| ext.eq_ignore_ascii_case("json"))
                        .unwrap_or(false)
            })
            .collect();
        files.sort();

        items.extend(files.iter().filter_map(|path| read_event(path)));
    } else {
        log::warn!(
            "calendar root {} does not exist, emitting an empty index",
            events_dir.display()
        );
    }

    items.sort_by(|a, b| a.date.cmp(&b.date));
    Ok(CalendarIndex {
        generated_at: index::generated_timestamp(),
        items,
    })
}

/// Read one event file; `None` (with a warning) when it can't be used.
fn read_event(path: &Path) -> Option<CalendarEvent> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) => {
            log::warn!("skipping unreadable calendar file {}: {err}", path.display());
            return None;
        }
    };
    let event: RawEvent = match serde_json::from_str(&raw) {
        Ok(event) => event,
        Err(err) => {
            log::warn!(
                "skipping unparseable calendar file {}: {err}",
                path.display()
            );
            return None;
        }
    };
    let Some(date) = event.date.filter(|date| !date.trim().is_empty()) else {
        log::warn!("skipping dateless calendar file {}", path.display());
        return None;
    };

    let stem = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();

    Some(CalendarEvent {
        id: event.id.filter(|id| !id.is_empty()).unwrap_or(stem),
        date: date.chars().take(10).collect(),
        title: event
            .title
            .filter(|title| !title.is_empty())
            .unwrap_or_else(|| DEFAULT_TITLE.to_string()),
        projects: event.projects,
        tags: event.tags,
        location: event.location.unwrap_or_default(),
        note: event.note.unwrap_or_default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_event(dir: &Path, name: &str, json: &str) {
        fs::write(dir.join(name), json).unwrap();
    }

    #[test]
    fn events_sorted_ascending_by_date() {
        let tmp = TempDir::new().unwrap();
        write_event(tmp.path(), "a.json", r#"{"date": "2024-01-01"}"#);
        write_event(tmp.path(), "b.json", r#"{"date": "2023-05-05"}"#);
        write_event(tmp.path(), "c.json", r#"{"date": "2024-06-01"}"#);

        let index = build(tmp.path()).unwrap();
        let dates: Vec<&str> = index.items.iter().map(|e| e.date.as_str()).collect();
        assert_eq!(dates, vec!["2023-05-05", "2024-01-01", "2024-06-01"]);
    }

    #[test]
    fn dateless_events_excluded_entirely() {
        let tmp = TempDir::new().unwrap();
        write_event(tmp.path(), "ohne.json", r#"{"title": "Ohne Datum"}"#);
        write_event(tmp.path(), "leer.json", r#"{"date": "  ", "title": "Leer"}"#);
        write_event(tmp.path(), "mit.json", r#"{"date": "2024-09-14"}"#);

        let index = build(tmp.path()).unwrap();
        assert_eq!(index.items.len(), 1);
        assert_eq!(index.items[0].date, "2024-09-14");
    }

    #[test]
    fn unparseable_files_skipped() {
        let tmp = TempDir::new().unwrap();
        write_event(tmp.path(), "kaputt.json", "{not json");
        write_event(tmp.path(), "falsch.json", r#"{"date": "2024-01-01", "tags": "x"}"#);
        write_event(tmp.path(), "ok.json", r#"{"date": "2024-01-01"}"#);

        let index = build(tmp.path()).unwrap();
        assert_eq!(index.items.len(), 1);
        assert_eq!(index.items[0].id, "ok");
    }

    #[test]
    fn non_json_files_ignored() {
        let tmp = TempDir::new().unwrap();
        write_event(tmp.path(), "notiz.txt", "kein event");
        write_event(tmp.path(), "termin.JSON", r#"{"date": "2024-01-01"}"#);

        let index = build(tmp.path()).unwrap();
        assert_eq!(index.items.len(), 1);
    }

    #[test]
    fn defaults_filled_in() {
        let tmp = TempDir::new().unwrap();
        write_event(tmp.path(), "apfelpressen.json", r#"{"date": "2024-09-14"}"#);

        let index = build(tmp.path()).unwrap();
        let event = &index.items[0];
        assert_eq!(event.id, "apfelpressen");
        assert_eq!(event.title, "Termin");
        assert!(event.projects.is_empty());
        assert!(event.tags.is_empty());
        assert_eq!(event.location, "");
        assert_eq!(event.note, "");
    }

    #[test]
    fn date_truncated_to_day() {
        let tmp = TempDir::new().unwrap();
        write_event(
            tmp.path(),
            "e.json",
            r#"{"date": "2025-03-01T10:00:00Z"}"#,
        );

        let index = build(tmp.path()).unwrap();
        assert_eq!(index.items[0].date, "2025-03-01");
    }

    #[test]
    fn full_event_passes_through() {
        let tmp = TempDir::new().unwrap();
        write_event(
            tmp.path(),
            "e.json",
            r#"{
                "id": "apfelpressen",
                "date": "2024-09-14",
                "title": "Apfelpressen",
                "projects": ["streuobstwiese"],
                "tags": ["mitmachen"],
                "where": "Alte Ziegelei",
                "note": "Eigene Flaschen mitbringen"
            }"#,
        );

        let index = build(tmp.path()).unwrap();
        let event = &index.items[0];
        assert_eq!(event.title, "Apfelpressen");
        assert_eq!(event.projects, vec!["streuobstwiese"]);
        assert_eq!(event.location, "Alte Ziegelei");

        // The index serializes the original "where" key
        let json = serde_json::to_value(event).unwrap();
        assert_eq!(json["where"], "Alte Ziegelei");
        assert!(json.get("location").is_none());
    }

    #[test]
    fn missing_dir_yields_empty_index() {
        let tmp = TempDir::new().unwrap();
        let index = build(&tmp.path().join("calendar")).unwrap();
        assert!(index.items.is_empty());
        assert!(!index.generated_at.is_empty());
    }
}
