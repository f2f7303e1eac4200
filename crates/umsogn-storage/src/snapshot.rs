//! Snapshot slot I/O.
//!
//! Each collection persists as one JSON array file under the data directory.
//! Reads are tolerant: a missing slot yields an empty collection, and a slot
//! that fails to parse is logged and treated as empty rather than aborting
//! the load. Writes propagate their errors.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::Result;

/// Snapshot file for the project registry.
pub const PROJECTS_FILE: &str = "eia-projects.json";
/// Snapshot file for submitted comments.
pub const COMMENTS_FILE: &str = "eia-comments.json";
/// Snapshot file for the stakeholder registry.
pub const STAKEHOLDERS_FILE: &str = "eia-stakeholders.json";
/// Snapshot file for mitigation strategies.
pub const MITIGATION_STRATEGIES_FILE: &str = "eia-mitigation-strategies.json";
/// Snapshot file for timeline events.
pub const TIMELINE_EVENTS_FILE: &str = "eia-timeline-events.json";
/// Snapshot file for public meetings.
pub const PUBLIC_MEETINGS_FILE: &str = "eia-public-meetings.json";

/// All six slot file names, in load order.
pub const ALL_FILES: [&str; 6] = [
    PROJECTS_FILE,
    COMMENTS_FILE,
    STAKEHOLDERS_FILE,
    MITIGATION_STRATEGIES_FILE,
    TIMELINE_EVENTS_FILE,
    PUBLIC_MEETINGS_FILE,
];

/// Returns the path of a slot file under `data_dir`.
pub fn slot_path(data_dir: &Path, file: &str) -> PathBuf {
    data_dir.join(file)
}

/// Returns `true` if at least one slot file exists under `data_dir`.
pub fn any_slot_exists(data_dir: &Path) -> bool {
    ALL_FILES.iter().any(|f| slot_path(data_dir, f).exists())
}

/// Reads one slot, tolerating absence and corruption.
///
/// Returns `None` when the file does not exist. An unreadable or unparsable
/// slot is logged via `tracing::warn!` and also yields `None`; the caller
/// falls back to an empty collection.
pub fn read_slot<T: DeserializeOwned>(data_dir: &Path, file: &str) -> Option<Vec<T>> {
    let path = slot_path(data_dir, file);
    let raw = match fs::read_to_string(&path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "failed to read snapshot slot");
            return None;
        }
    };
    match serde_json::from_str(&raw) {
        Ok(items) => Some(items),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "failed to parse snapshot slot");
            None
        }
    }
}

/// Writes one slot as a pretty-printed JSON array, creating the data
/// directory if needed.
pub fn write_slot<T: Serialize>(data_dir: &Path, file: &str, items: &[T]) -> Result<()> {
    fs::create_dir_all(data_dir)?;
    let json = serde_json::to_string_pretty(items)?;
    fs::write(slot_path(data_dir, file), json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_slot_reads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let read: Option<Vec<String>> = read_slot(dir.path(), COMMENTS_FILE);
        assert!(read.is_none());
    }

    #[test]
    fn corrupt_slot_reads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(slot_path(dir.path(), COMMENTS_FILE), "not json").unwrap();
        let read: Option<Vec<String>> = read_slot(dir.path(), COMMENTS_FILE);
        assert!(read.is_none());
    }

    #[test]
    fn write_then_read_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let items = vec!["a".to_string(), "b".to_string()];
        write_slot(dir.path(), PROJECTS_FILE, &items).unwrap();
        let read: Option<Vec<String>> = read_slot(dir.path(), PROJECTS_FILE);
        assert_eq!(read, Some(items));
    }

    #[test]
    fn write_creates_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("deep").join("data");
        write_slot(&nested, PROJECTS_FILE, &Vec::<String>::new()).unwrap();
        assert!(slot_path(&nested, PROJECTS_FILE).exists());
    }
}
