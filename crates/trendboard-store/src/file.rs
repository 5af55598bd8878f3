//! JSON-file fallback store, one file per entity type.
//!
//! Files are small and written whole; operations are synchronous and
//! unlocked, so concurrent writers interleave with last-writer-wins. This
//! store is a single-process fallback, not a shared system of record.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use trendboard_core::{Report, Trend};

const TRENDS_FILE: &str = "trends.json";
const REPORTS_FILE: &str = "reports.json";

#[derive(Debug, Error)]
pub enum FileStoreError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("JSON error on {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone)]
pub struct FileStore {
    data_dir: PathBuf,
}

impl FileStore {
    #[must_use]
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Read the trends collection. A missing file is an empty collection.
    ///
    /// # Errors
    ///
    /// Returns [`FileStoreError`] if the file exists but cannot be read or
    /// parsed as JSON.
    pub fn read_trends(&self) -> Result<Vec<Trend>, FileStoreError> {
        self.read_collection(TRENDS_FILE, "trends")
    }

    /// Write the full trends collection, replacing the file.
    ///
    /// # Errors
    ///
    /// Returns [`FileStoreError`] if the directory cannot be created or the
    /// file cannot be written.
    pub fn write_trends(&self, trends: &[Trend]) -> Result<(), FileStoreError> {
        self.write_collection(TRENDS_FILE, "trends", trends)
    }

    /// Read the reports collection. A missing file is an empty collection.
    ///
    /// # Errors
    ///
    /// Returns [`FileStoreError`] if the file exists but cannot be read or
    /// parsed as JSON.
    pub fn read_reports(&self) -> Result<Vec<Report>, FileStoreError> {
        self.read_collection(REPORTS_FILE, "reports")
    }

    /// Write the full reports collection, replacing the file.
    ///
    /// # Errors
    ///
    /// Returns [`FileStoreError`] if the directory cannot be created or the
    /// file cannot be written.
    pub fn write_reports(&self, reports: &[Report]) -> Result<(), FileStoreError> {
        self.write_collection(REPORTS_FILE, "reports", reports)
    }

    fn read_collection<T: DeserializeOwned>(
        &self,
        file: &str,
        key: &str,
    ) -> Result<Vec<T>, FileStoreError> {
        let path = self.data_dir.join(file);
        if !path.exists() {
            return Ok(Vec::new());
        }

        let raw = fs::read_to_string(&path).map_err(|source| FileStoreError::Io {
            path: path.clone(),
            source,
        })?;
        let value: Value = serde_json::from_str(&raw).map_err(|source| FileStoreError::Json {
            path: path.clone(),
            source,
        })?;

        parse_collection(value, key).map_err(|source| FileStoreError::Json { path, source })
    }

    fn write_collection<T: Serialize>(
        &self,
        file: &str,
        key: &str,
        items: &[T],
    ) -> Result<(), FileStoreError> {
        fs::create_dir_all(&self.data_dir).map_err(|source| FileStoreError::Io {
            path: self.data_dir.clone(),
            source,
        })?;

        let path = self.data_dir.join(file);

        // Wrapped shape: { "<entity>": [...], "lastUpdated": ... }
        let mut wrapped = serde_json::Map::new();
        let items = serde_json::to_value(items).map_err(|source| FileStoreError::Json {
            path: path.clone(),
            source,
        })?;
        wrapped.insert(key.to_string(), items);
        wrapped.insert(
            "lastUpdated".to_string(),
            serde_json::to_value(Utc::now()).map_err(|source| FileStoreError::Json {
                path: path.clone(),
                source,
            })?,
        );

        let body = serde_json::to_string_pretty(&Value::Object(wrapped)).map_err(|source| {
            FileStoreError::Json {
                path: path.clone(),
                source,
            }
        })?;
        fs::write(&path, body).map_err(|source| FileStoreError::Io { path, source })
    }
}

/// Accept both storage shapes transparently: a bare JSON sequence, or an
/// object wrapping the sequence under `key` alongside a `lastUpdated`
/// timestamp. Any other shape is treated as an empty collection.
fn parse_collection<T: DeserializeOwned>(
    value: Value,
    key: &str,
) -> Result<Vec<T>, serde_json::Error> {
    match value {
        Value::Array(_) => serde_json::from_value(value),
        Value::Object(mut map) => match map.remove(key) {
            Some(inner @ Value::Array(_)) => serde_json::from_value(inner),
            _ => Ok(Vec::new()),
        },
        _ => Ok(Vec::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    fn store() -> (tempfile::TempDir, FileStore) {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = FileStore::new(dir.path().join("data"));
        (dir, store)
    }

    #[test]
    fn missing_file_yields_empty_collection() {
        let (_dir, store) = store();
        assert!(store.read_trends().expect("read").is_empty());
        assert!(store.read_reports().expect("read").is_empty());
    }

    #[test]
    fn write_creates_data_dir_and_round_trips() {
        let (_dir, store) = store();
        let trends = fixtures::fixture_trends();

        store.write_trends(&trends).expect("write");
        assert!(store.data_dir().join("trends.json").exists());

        let read_back = store.read_trends().expect("read");
        assert_eq!(read_back, trends);
    }

    #[test]
    fn bare_array_and_wrapped_object_parse_identically() {
        let (_dir, store) = store();
        let trends = fixtures::fixture_trends();

        std::fs::create_dir_all(store.data_dir()).expect("mkdir");
        let bare = serde_json::to_string(&trends).expect("serialize");
        std::fs::write(store.data_dir().join("trends.json"), &bare).expect("write bare");
        let from_bare = store.read_trends().expect("read bare");

        let wrapped = serde_json::json!({
            "trends": trends,
            "lastUpdated": "2025-06-01T00:00:00Z"
        });
        std::fs::write(
            store.data_dir().join("trends.json"),
            serde_json::to_string(&wrapped).expect("serialize"),
        )
        .expect("write wrapped");
        let from_wrapped = store.read_trends().expect("read wrapped");

        assert_eq!(from_bare, from_wrapped);
        assert_eq!(from_bare, trends);
    }

    #[test]
    fn wrapped_object_without_expected_key_is_empty() {
        let (_dir, store) = store();
        std::fs::create_dir_all(store.data_dir()).expect("mkdir");
        std::fs::write(
            store.data_dir().join("trends.json"),
            r#"{"lastUpdated": "2025-06-01T00:00:00Z"}"#,
        )
        .expect("write");
        assert!(store.read_trends().expect("read").is_empty());
    }

    #[test]
    fn corrupt_file_is_an_error_not_a_panic() {
        let (_dir, store) = store();
        std::fs::create_dir_all(store.data_dir()).expect("mkdir");
        std::fs::write(store.data_dir().join("reports.json"), "not json").expect("write");
        let err = store.read_reports().unwrap_err();
        assert!(matches!(err, FileStoreError::Json { .. }));
    }

    #[test]
    fn written_file_carries_last_updated_wrapper() {
        let (_dir, store) = store();
        store
            .write_reports(&fixtures::fixture_reports())
            .expect("write");

        let raw =
            std::fs::read_to_string(store.data_dir().join("reports.json")).expect("read raw");
        let value: Value = serde_json::from_str(&raw).expect("parse");
        assert!(value["lastUpdated"].is_string());
        assert!(value["reports"].is_array());
    }
}
