//! Section configuration loader.

use super::discriminator::filter_sections;
use super::flat_map::FlatConfigMap;
use super::flatten::flatten_sections;
use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::error::Result;
use crate::store::{SectionQuery, SectionStore, StoreFactory};
use std::fmt;
use std::sync::Arc;

/// Where a loader gets its store from.
#[derive(Clone)]
pub(crate) enum StoreBinding {
    /// Caller-owned store, never closed by the loader.
    Shared(Arc<dyn SectionStore>),
    /// Factory opening a loader-owned store for each load.
    Factory(Arc<dyn StoreFactory>),
}

/// A store handle scoped to one load.
///
/// Owned handles are closed when the guard is dropped, whichever way the load
/// exits. Borrowed handles are left alone.
struct ScopedStore<'a> {
    handle: StoreHandle<'a>,
    sink: &'a dyn DiagnosticSink,
}

enum StoreHandle<'a> {
    Borrowed(&'a dyn SectionStore),
    Owned(Box<dyn SectionStore>),
}

impl<'a> ScopedStore<'a> {
    fn acquire(binding: &'a StoreBinding, sink: &'a dyn DiagnosticSink) -> Result<Self> {
        let handle = match binding {
            StoreBinding::Shared(store) => StoreHandle::Borrowed(store.as_ref()),
            StoreBinding::Factory(factory) => StoreHandle::Owned(factory.open()?),
        };
        Ok(Self { handle, sink })
    }

    fn is_owned(&self) -> bool {
        matches!(self.handle, StoreHandle::Owned(_))
    }

    fn store(&self) -> &dyn SectionStore {
        match &self.handle {
            StoreHandle::Borrowed(store) => *store,
            StoreHandle::Owned(store) => store.as_ref(),
        }
    }
}

impl Drop for ScopedStore<'_> {
    fn drop(&mut self) {
        if let StoreHandle::Owned(store) = &self.handle {
            if let Err(e) = store.close() {
                self.sink.emit(&Diagnostic::StoreCloseFailed {
                    store: store.name(),
                    reason: e.to_string(),
                });
            }
        }
    }
}

/// Loads configuration sections from a store and flattens them.
///
/// Each call to [`load`](Self::load) runs the whole pipeline: acquire the
/// store, fetch the sections matching the application and aspect, filter them
/// by discriminator, and flatten their settings into a fresh
/// [`FlatConfigMap`]. Nothing is cached between loads.
///
/// # Examples
///
/// ```rust
/// use section_config::prelude::*;
/// use section_config::store::{MemoryStore, SectionRecord};
///
/// # fn example() -> Result<()> {
/// let store = MemoryStore::new().with_section(
///     SectionRecord::new("1", "Db")
///         .with_application("billing")
///         .with_setting("1", "Connection", r#"{"Host":"db.local"}"#),
/// );
///
/// let loader = SectionConfigLoader::builder()
///     .with_store(store)
///     .with_application("billing")
///     .build()?;
///
/// let map = loader.load()?;
/// assert_eq!(map.get("Db:Host"), Some(Some("db.local")));
/// # Ok(())
/// # }
/// # example().unwrap();
/// ```
#[derive(Clone)]
pub struct SectionConfigLoader {
    pub(crate) binding: StoreBinding,
    pub(crate) query: SectionQuery,
    pub(crate) discriminator: Option<String>,
    pub(crate) ensure_created: bool,
    pub(crate) sink: Arc<dyn DiagnosticSink>,
}

impl SectionConfigLoader {
    /// The application/aspect query sent to the store.
    pub fn query(&self) -> &SectionQuery {
        &self.query
    }

    /// The discriminator expression, if any.
    pub fn discriminator(&self) -> Option<&str> {
        self.discriminator.as_deref()
    }

    /// Run one load.
    ///
    /// A store opened through a factory is owned by this call: it is created
    /// first when `ensure_created` is set, and closed before returning, on
    /// success and on failure alike.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The store cannot be opened, created or read
    /// - A JSON object or array setting fails to parse
    pub fn load(&self) -> Result<FlatConfigMap> {
        let sink = self.sink.as_ref();

        let sections = {
            let scoped = ScopedStore::acquire(&self.binding, sink)?;

            #[cfg(feature = "tracing")]
            tracing::debug!(
                store = %scoped.store().name(),
                owned = scoped.is_owned(),
                application = ?self.query.application,
                aspect = ?self.query.aspect,
                "Loading configuration sections"
            );

            if scoped.is_owned() && self.ensure_created {
                scoped.store().ensure_created()?;
            }
            scoped.store().fetch_sections(&self.query)?
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(fetched = sections.len(), "Fetched configuration sections");

        let filtered = filter_sections(sections, self.discriminator.as_deref(), sink);
        let map = flatten_sections(&filtered, sink)?;

        #[cfg(feature = "tracing")]
        tracing::debug!(
            retained = filtered.len(),
            keys = map.len(),
            "Loaded configuration sections"
        );

        Ok(map)
    }

    pub(crate) fn store_name(&self) -> String {
        match &self.binding {
            StoreBinding::Shared(store) => store.name(),
            StoreBinding::Factory(_) => "factory".to_string(),
        }
    }
}

impl fmt::Debug for SectionConfigLoader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SectionConfigLoader")
            .field("store", &self.store_name())
            .field("query", &self.query)
            .field("discriminator", &self.discriminator)
            .field("ensure_created", &self.ensure_created)
            .finish()
    }
}
