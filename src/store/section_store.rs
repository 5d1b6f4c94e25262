//! Store traits and the application/aspect query.

use super::SectionRecord;
use crate::error::Result;

/// Application and aspect pre-filter applied by a store.
///
/// Absent or empty values match any section. Present values are compared
/// case-sensitively.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionQuery {
    /// Required application name
    pub application: Option<String>,
    /// Required aspect
    pub aspect: Option<String>,
}

impl SectionQuery {
    /// Create a query.
    pub fn new(application: Option<String>, aspect: Option<String>) -> Self {
        Self {
            application,
            aspect,
        }
    }

    /// Whether `section` passes the pre-filter.
    pub fn matches(&self, section: &SectionRecord) -> bool {
        let application_ok = match self.application.as_deref() {
            None | Some("") => true,
            Some(app) => section.application_name.as_deref() == Some(app),
        };
        let aspect_ok = match self.aspect.as_deref() {
            None | Some("") => true,
            Some(aspect) => section.aspect == aspect,
        };
        application_ok && aspect_ok
    }
}

/// Trait for section stores.
///
/// Implement this trait to read sections from a database, a key-value store or
/// any other backing storage. Stores own their connection handling; the loader
/// only queries them and, for stores it opened itself, closes them again.
pub trait SectionStore: Send + Sync {
    /// Fetch every section matching `query`, with settings, in store order.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be read.
    fn fetch_sections(&self, query: &SectionQuery) -> Result<Vec<SectionRecord>>;

    /// Create the backing storage if it does not exist yet.
    fn ensure_created(&self) -> Result<()> {
        Ok(())
    }

    /// Release the store's resources.
    ///
    /// Called exactly once by the loader for stores opened through a
    /// [`StoreFactory`], on every exit path of a load.
    fn close(&self) -> Result<()> {
        Ok(())
    }

    /// Human-readable name for this store (for diagnostics).
    fn name(&self) -> String;
}

/// Opens a fresh store for a single load.
///
/// Any `Fn() -> Result<Box<dyn SectionStore>>` closure is a factory.
pub trait StoreFactory: Send + Sync {
    /// Open a new store handle, owned by the caller.
    fn open(&self) -> Result<Box<dyn SectionStore>>;
}

impl<F> StoreFactory for F
where
    F: Fn() -> Result<Box<dyn SectionStore>> + Send + Sync,
{
    fn open(&self) -> Result<Box<dyn SectionStore>> {
        self()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(app: Option<&str>, aspect: &str) -> SectionRecord {
        let mut section = SectionRecord::new("1", "Db").with_aspect(aspect);
        section.application_name = app.map(str::to_string);
        section
    }

    #[test]
    fn test_empty_query_matches_everything() {
        let query = SectionQuery::default();
        assert!(query.matches(&section(None, "settings")));
        assert!(query.matches(&section(Some("billing"), "features")));

        let blank = SectionQuery::new(Some(String::new()), Some(String::new()));
        assert!(blank.matches(&section(Some("billing"), "features")));
    }

    #[test]
    fn test_application_and_aspect_both_required() {
        let query = SectionQuery::new(Some("billing".into()), Some("settings".into()));
        assert!(query.matches(&section(Some("billing"), "settings")));
        assert!(!query.matches(&section(Some("billing"), "features")));
        assert!(!query.matches(&section(Some("shipping"), "settings")));
        assert!(!query.matches(&section(None, "settings")));
    }

    #[test]
    fn test_match_is_case_sensitive() {
        let query = SectionQuery::new(Some("Billing".into()), None);
        assert!(!query.matches(&section(Some("billing"), "settings")));
    }
}
