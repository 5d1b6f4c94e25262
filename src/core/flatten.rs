//! Flattening of section settings into a [`FlatConfigMap`].

use super::flat_map::{FlatConfigMap, join_key};
use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::error::{ConfigError, Result};
use crate::store::{SectionRecord, SettingRecord};
use serde_json::{Map, Value};

/// Whether `text`, once trimmed, is delimited like a JSON object or array.
///
/// This is a bracket check only; the text is not parsed.
pub fn is_json_container(text: &str) -> bool {
    let text = text.trim();
    (text.starts_with('{') && text.ends_with('}')) || (text.starts_with('[') && text.ends_with(']'))
}

/// Flatten the settings of `sections` into a single map.
///
/// Sections and their settings are visited in the order given. A setting whose
/// value is a JSON object or array is expanded under the section name:
/// `{"Host":"x"}` in section `Db` yields `Db:Host`. Any other setting is
/// stored under its own key, unprefixed, with its raw value.
///
/// Within an expanded value, arrays contribute only their object elements,
/// keyed by their position among all elements (`Items:0:Name`). Skipped
/// elements still take up an index: `{"L":[1,{"A":"x"}]}` yields `L:1:A`, not
/// `L:0:A` as a count of object elements alone would give. Scalars, nulls and
/// nested arrays inside arrays are skipped. A JSON `null` member is stored as
/// `None`.
///
/// Numbers keep the text they were written with (`1e3`, 23-digit integers).
///
/// The first value written for a key wins; later ones are dropped and
/// reported as [`Diagnostic::DuplicateKey`].
///
/// # Errors
///
/// Returns [`ConfigError::ContainerParse`] if a bracket-delimited value is not
/// valid JSON.
///
/// # Examples
///
/// ```rust
/// use section_config::core::flatten_sections;
/// use section_config::diagnostics::NullSink;
/// use section_config::store::SectionRecord;
///
/// let sections = vec![
///     SectionRecord::new("1", "Db")
///         .with_setting("1", "Connection", r#"{"Host":"x","Port":5432}"#)
///         .with_setting("2", "Timeout", "30"),
/// ];
///
/// let map = flatten_sections(&sections, &NullSink).unwrap();
/// assert_eq!(map.get("Db:Host"), Some(Some("x")));
/// assert_eq!(map.get("Db:Port"), Some(Some("5432")));
/// assert_eq!(map.get("Timeout"), Some(Some("30")));
/// ```
pub fn flatten_sections(
    sections: &[SectionRecord],
    sink: &dyn DiagnosticSink,
) -> Result<FlatConfigMap> {
    let mut flattener = Flattener {
        map: FlatConfigMap::new(),
        sink,
    };

    for section in sections {
        sink.emit(&Diagnostic::SectionLoaded {
            section_id: section.id.clone(),
            section_name: section.section_name.clone(),
        });

        for setting in &section.settings {
            flattener.add_setting(section, setting)?;
        }
    }

    Ok(flattener.map)
}

struct Flattener<'a> {
    map: FlatConfigMap,
    sink: &'a dyn DiagnosticSink,
}

impl Flattener<'_> {
    fn add_setting(&mut self, section: &SectionRecord, setting: &SettingRecord) -> Result<()> {
        if !is_json_container(&setting.json) {
            self.insert(setting.key.clone(), Some(setting.json.clone()));
            return Ok(());
        }

        let value: Value =
            serde_json::from_str(&setting.json).map_err(|source| ConfigError::ContainerParse {
                section: section.section_name.clone(),
                key: setting.key.clone(),
                source,
            })?;

        match &value {
            Value::Object(members) => self.expand_object(&section.section_name, members),
            Value::Array(elements) => self.expand_array(&section.section_name, elements),
            // Bracket-delimited text only ever parses to an object or array.
            _ => {}
        }
        Ok(())
    }

    fn expand_object(&mut self, path: &str, members: &Map<String, Value>) {
        for (member, value) in members {
            let child = join_key(path, member);
            match value {
                Value::Object(nested) => self.expand_object(&child, nested),
                Value::Array(elements) => self.expand_array(&child, elements),
                Value::Null => self.insert(child, None),
                Value::String(text) => self.insert(child, Some(text.clone())),
                scalar => self.insert(child, Some(scalar.to_string())),
            }
        }
    }

    fn expand_array(&mut self, path: &str, elements: &[Value]) {
        for (index, element) in elements.iter().enumerate() {
            match element {
                Value::Object(members) => self.expand_object(&join_key(path, index), members),
                _ => self.sink.emit(&Diagnostic::SkippedArrayElement {
                    path: path.to_string(),
                    index,
                }),
            }
        }
    }

    fn insert(&mut self, key: String, value: Option<String>) {
        if self.map.contains_key(&key) {
            self.sink.emit(&Diagnostic::DuplicateKey { key });
            return;
        }
        self.map.insert(key, value);
    }
}
