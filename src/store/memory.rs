//! In-memory section store.

use super::{SectionQuery, SectionRecord, SectionStore};
use crate::error::Result;

/// Section store backed by an ordered vector.
///
/// Useful for tests and for applications that assemble sections themselves.
///
/// # Examples
///
/// ```rust
/// use section_config::store::{MemoryStore, SectionQuery, SectionRecord, SectionStore};
///
/// let store = MemoryStore::new()
///     .with_section(SectionRecord::new("1", "Db").with_setting("1", "Timeout", "30"));
///
/// let sections = store.fetch_sections(&SectionQuery::default()).unwrap();
/// assert_eq!(sections.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    sections: Vec<SectionRecord>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding `sections` in the given order.
    pub fn from_sections(sections: Vec<SectionRecord>) -> Self {
        Self { sections }
    }

    /// Append a section.
    pub fn with_section(mut self, section: SectionRecord) -> Self {
        self.sections.push(section);
        self
    }

    /// Number of sections held, before any query.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Whether the store holds no sections.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

impl SectionStore for MemoryStore {
    fn fetch_sections(&self, query: &SectionQuery) -> Result<Vec<SectionRecord>> {
        Ok(self
            .sections
            .iter()
            .filter(|section| query.matches(section))
            .cloned()
            .collect())
    }

    fn name(&self) -> String {
        format!("memory:{} sections", self.sections.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_applies_query_and_keeps_order() {
        let store = MemoryStore::new()
            .with_section(SectionRecord::new("1", "A").with_application("billing"))
            .with_section(SectionRecord::new("2", "B").with_application("shipping"))
            .with_section(SectionRecord::new("3", "C").with_application("billing"));

        let query = SectionQuery::new(Some("billing".into()), None);
        let ids: Vec<_> = store
            .fetch_sections(&query)
            .unwrap()
            .into_iter()
            .map(|s| s.id)
            .collect();
        assert_eq!(ids, vec!["1", "3"]);
    }

    #[test]
    fn test_name() {
        let store = MemoryStore::from_sections(vec![SectionRecord::new("1", "A")]);
        assert_eq!(store.name(), "memory:1 sections");
        assert_eq!(store.len(), 1);
        assert!(!store.is_empty());
    }
}
