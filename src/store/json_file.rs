//! JSON-file-backed section store.

use super::{SectionQuery, SectionRecord, SectionStore};
use crate::error::{ConfigError, Result};
use std::fs;
use std::path::PathBuf;

/// Section store reading a JSON array of section records from a file.
///
/// The file holds the records exactly as [`SectionRecord`] serializes them,
/// with camelCase field names:
///
/// ```json
/// [
///   {
///     "id": "1",
///     "applicationName": "billing",
///     "sectionName": "Db",
///     "discriminator": "{\"tenant\":\"acme\"}",
///     "settings": [{ "id": "1", "key": "Connection", "json": "{\"Host\":\"db\"}" }]
///   }
/// ]
/// ```
///
/// The file is re-read on every fetch.
///
/// # Examples
///
/// ```rust,no_run
/// use section_config::store::JsonFileStore;
///
/// let store = JsonFileStore::new("config/sections.json");
/// ```
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store for the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_all(&self) -> Result<Vec<SectionRecord>> {
        if !self.path.exists() {
            return Err(ConfigError::Store(format!(
                "Section file not found: {}",
                self.path.display()
            )));
        }

        let text = fs::read_to_string(&self.path)?;
        serde_json::from_str(&text).map_err(|source| ConfigError::StoreFormat {
            store: self.name(),
            source,
        })
    }
}

impl SectionStore for JsonFileStore {
    fn fetch_sections(&self, query: &SectionQuery) -> Result<Vec<SectionRecord>> {
        let mut sections = self.read_all()?;
        sections.retain(|section| query.matches(section));
        Ok(sections)
    }

    fn ensure_created(&self) -> Result<()> {
        if self.path.exists() {
            return Ok(());
        }
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, "[]")?;
        Ok(())
    }

    fn name(&self) -> String {
        format!("file:{}", self.path.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_sections_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("sections.json");
        fs::write(
            &path,
            r#"[
                {"id": "1", "applicationName": "billing", "sectionName": "Db",
                 "settings": [{"id": "1", "key": "Timeout", "json": "30"}]},
                {"id": "2", "applicationName": "shipping", "sectionName": "Queue"}
            ]"#,
        )
        .unwrap();

        let store = JsonFileStore::new(&path);
        let query = SectionQuery::new(Some("billing".into()), Some("settings".into()));
        let sections = store.fetch_sections(&query).unwrap();

        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].section_name, "Db");
        assert_eq!(sections[0].settings[0].json, "30");
    }

    #[test]
    fn test_missing_file_is_store_error() {
        let store = JsonFileStore::new("/nonexistent/sections.json");
        let result = store.fetch_sections(&SectionQuery::default());
        assert!(matches!(result, Err(ConfigError::Store(_))));
    }

    #[test]
    fn test_malformed_file_is_format_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("sections.json");
        fs::write(&path, r#"{"not": "an array"}"#).unwrap();

        let result = JsonFileStore::new(&path).fetch_sections(&SectionQuery::default());
        assert!(matches!(result, Err(ConfigError::StoreFormat { .. })));
    }

    #[test]
    fn test_ensure_created_writes_empty_array() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("sections.json");
        let store = JsonFileStore::new(&path);

        store.ensure_created().unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
        assert!(store.fetch_sections(&SectionQuery::default()).unwrap().is_empty());
    }

    #[test]
    fn test_ensure_created_keeps_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("sections.json");
        fs::write(&path, r#"[{"id": "1", "sectionName": "Db"}]"#).unwrap();

        let store = JsonFileStore::new(&path);
        store.ensure_created().unwrap();
        assert_eq!(store.fetch_sections(&SectionQuery::default()).unwrap().len(), 1);
    }
}
