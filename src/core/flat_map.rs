//! The flat key/value map produced by a load.

use config::{Map, Value, ValueKind};
use std::collections::HashMap;
use std::collections::hash_map;

/// Delimiter between key path segments.
pub const KEY_DELIMITER: &str = ":";

/// Join a key path and one more segment with [`KEY_DELIMITER`].
///
/// # Examples
///
/// ```rust
/// use section_config::core::join_key;
///
/// assert_eq!(join_key("Items", 2), "Items:2");
/// ```
pub fn join_key(path: &str, segment: impl std::fmt::Display) -> String {
    format!("{}{}{}", path, KEY_DELIMITER, segment)
}

/// Flat mapping from delimited keys to optional string values.
///
/// `None` records a JSON `null`, which is distinct from the key being absent.
/// Inserts never overwrite: the first value written for a key is kept.
///
/// # Examples
///
/// ```rust
/// use section_config::core::FlatConfigMap;
///
/// let mut map = FlatConfigMap::new();
/// assert!(map.insert("Db:Host", Some("primary".to_string())));
/// assert!(!map.insert("Db:Host", Some("replica".to_string())));
///
/// assert_eq!(map.get("Db:Host"), Some(Some("primary")));
/// assert_eq!(map.get("Db:Port"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlatConfigMap {
    entries: HashMap<String, Option<String>>,
}

impl FlatConfigMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `value` under `key` unless the key is already present.
    ///
    /// Returns `true` if the value was stored.
    pub fn insert(&mut self, key: impl Into<String>, value: Option<String>) -> bool {
        match self.entries.entry(key.into()) {
            hash_map::Entry::Occupied(_) => false,
            hash_map::Entry::Vacant(slot) => {
                slot.insert(value);
                true
            }
        }
    }

    /// Look up a key.
    ///
    /// The outer `Option` is key presence, the inner one is the null marker.
    pub fn get(&self, key: &str) -> Option<Option<&str>> {
        self.entries.get(key).map(|value| value.as_deref())
    }

    /// Whether `key` is present (including with a null value).
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map holds no keys.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entries in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_deref()))
    }

    /// Keys in lexicographic order.
    pub fn sorted_keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    /// Consume the map, returning the underlying entries.
    pub fn into_inner(self) -> HashMap<String, Option<String>> {
        self.entries
    }

    /// Convert to a nested `config` table by splitting keys on [`KEY_DELIMITER`].
    ///
    /// `Db:Host` becomes table `Db` with member `Host`. Null values become
    /// `Nil`. Keys are placed in lexicographic order, so when a key is both a
    /// leaf and the prefix of a longer key (`Timeout` and `Timeout:Unit`), the
    /// leaf is kept and the longer key is left out of the tree.
    pub fn to_config_map(&self) -> Map<String, Value> {
        self.to_config_map_with_origin(None)
    }

    pub(crate) fn to_config_map_with_origin(&self, origin: Option<&String>) -> Map<String, Value> {
        let mut root = Map::new();
        for key in self.sorted_keys() {
            let leaf = match self.entries.get(key) {
                Some(Some(text)) => ValueKind::String(text.clone()),
                _ => ValueKind::Nil,
            };
            let segments: Vec<&str> = key.split(KEY_DELIMITER).collect();
            insert_path(&mut root, &segments, Value::new(origin, leaf), origin);
        }
        root
    }
}

fn insert_path(
    table: &mut Map<String, Value>,
    segments: &[&str],
    leaf: Value,
    origin: Option<&String>,
) -> bool {
    let Some((first, rest)) = segments.split_first() else {
        return false;
    };

    if rest.is_empty() {
        if table.contains_key(*first) {
            return false;
        }
        table.insert(first.to_string(), leaf);
        return true;
    }

    let node = table
        .entry(first.to_string())
        .or_insert_with(|| Value::new(origin, ValueKind::Table(Map::new())));
    match &mut node.kind {
        ValueKind::Table(nested) => insert_path(nested, rest, leaf, origin),
        _ => false,
    }
}

impl IntoIterator for FlatConfigMap {
    type Item = (String, Option<String>);
    type IntoIter = hash_map::IntoIter<String, Option<String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
