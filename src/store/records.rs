//! Section and setting records as persisted by a store.

use serde::{Deserialize, Serialize};

/// Aspect assigned to sections that do not name one.
pub const DEFAULT_ASPECT: &str = "settings";

fn default_aspect() -> String {
    DEFAULT_ASPECT.to_string()
}

/// A named, optionally discriminated group of settings.
///
/// # Examples
///
/// ```rust
/// use section_config::store::SectionRecord;
///
/// let section = SectionRecord::new("1", "Db")
///     .with_application("billing")
///     .with_discriminator(r#"{"tenant":"acme"}"#)
///     .with_setting("10", "Connection", r#"{"Host":"db.local","Port":5432}"#);
///
/// assert_eq!(section.aspect, "settings");
/// assert_eq!(section.settings.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionRecord {
    /// Opaque store identity
    pub id: String,
    /// Application the section belongs to
    #[serde(default)]
    pub application_name: Option<String>,
    /// Aspect tag, `"settings"` unless stated otherwise
    #[serde(default = "default_aspect")]
    pub aspect: String,
    /// Root segment for keys flattened from JSON settings
    pub section_name: String,
    /// JSON object of string tags, e.g. `{"tenant":"acme"}`
    #[serde(default)]
    pub discriminator: Option<String>,
    /// Settings in store order
    #[serde(default)]
    pub settings: Vec<SettingRecord>,
}

impl SectionRecord {
    /// Create a section with the default aspect and no settings.
    pub fn new(id: impl Into<String>, section_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            application_name: None,
            aspect: default_aspect(),
            section_name: section_name.into(),
            discriminator: None,
            settings: Vec::new(),
        }
    }

    /// Set the owning application.
    pub fn with_application(mut self, application: impl Into<String>) -> Self {
        self.application_name = Some(application.into());
        self
    }

    /// Set the aspect tag.
    pub fn with_aspect(mut self, aspect: impl Into<String>) -> Self {
        self.aspect = aspect.into();
        self
    }

    /// Set the discriminator text.
    pub fn with_discriminator(mut self, discriminator: impl Into<String>) -> Self {
        self.discriminator = Some(discriminator.into());
        self
    }

    /// Append a setting.
    pub fn with_setting(
        mut self,
        id: impl Into<String>,
        key: impl Into<String>,
        json: impl Into<String>,
    ) -> Self {
        self.settings.push(SettingRecord::new(id, key, json));
        self
    }
}

/// A single key and raw text value within a section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingRecord {
    /// Opaque store identity
    pub id: String,
    /// Key used verbatim when the value is not a JSON container
    pub key: String,
    /// Raw value: a plain scalar or JSON object/array text
    pub json: String,
}

impl SettingRecord {
    /// Create a setting.
    pub fn new(id: impl Into<String>, key: impl Into<String>, json: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            key: key.into(),
            json: json.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_take_defaults() {
        let section: SectionRecord =
            serde_json::from_str(r#"{"id":"7","sectionName":"Db"}"#).unwrap();

        assert_eq!(section.aspect, DEFAULT_ASPECT);
        assert_eq!(section.application_name, None);
        assert_eq!(section.discriminator, None);
        assert!(section.settings.is_empty());
    }

    #[test]
    fn test_camel_case_fields() {
        let section: SectionRecord = serde_json::from_str(
            r#"{
                "id": "1",
                "applicationName": "billing",
                "aspect": "features",
                "sectionName": "Flags",
                "discriminator": "{\"tenant\":\"acme\"}",
                "settings": [{"id": "2", "key": "Beta", "json": "true"}]
            }"#,
        )
        .unwrap();

        assert_eq!(section.application_name.as_deref(), Some("billing"));
        assert_eq!(section.aspect, "features");
        assert_eq!(section.settings[0], SettingRecord::new("2", "Beta", "true"));
    }
}
