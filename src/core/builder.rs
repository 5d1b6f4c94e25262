//! Builder for constructing SectionConfigLoader instances.

use super::loader::{SectionConfigLoader, StoreBinding};
use crate::diagnostics::{DiagnosticSink, default_sink};
use crate::error::{ConfigError, Result};
use crate::store::{DEFAULT_ASPECT, SectionQuery, SectionStore, StoreFactory};
use std::sync::Arc;

/// Builder for constructing a `SectionConfigLoader`.
///
/// Provides a fluent interface for choosing the store, the application and
/// aspect pre-filter, the discriminator and the diagnostic sink.
///
/// # Examples
///
/// ```rust
/// use section_config::prelude::*;
/// use section_config::store::MemoryStore;
///
/// # fn example() -> Result<()> {
/// let loader = SectionConfigLoader::builder()
///     .with_store(MemoryStore::new())
///     .with_application("billing")
///     .with_discriminator(r#"{"tenant":"acme"}"#)
///     .build()?;
///
/// assert_eq!(loader.query().aspect.as_deref(), Some("settings"));
/// # Ok(())
/// # }
/// # example().unwrap();
/// ```
pub struct SectionConfigBuilder {
    binding: Option<StoreBinding>,
    application: Option<String>,
    aspect: Option<String>,
    discriminator: Option<String>,
    ensure_created: bool,
    sink: Option<Arc<dyn DiagnosticSink>>,
}

impl SectionConfigBuilder {
    /// Create a new builder with default settings.
    ///
    /// The aspect defaults to `"settings"`; there is no store until one is set.
    pub fn new() -> Self {
        Self {
            binding: None,
            application: None,
            aspect: Some(DEFAULT_ASPECT.to_string()),
            discriminator: None,
            ensure_created: false,
            sink: None,
        }
    }

    /// Read from a caller-owned store.
    ///
    /// The loader never creates or closes this store.
    pub fn with_store<S: SectionStore + 'static>(self, store: S) -> Self {
        self.with_shared_store(Arc::new(store))
    }

    /// Read from a caller-owned store that is shared with other code.
    pub fn with_shared_store(mut self, store: Arc<dyn SectionStore>) -> Self {
        self.binding = Some(StoreBinding::Shared(store));
        self
    }

    /// Open a loader-owned store for every load.
    ///
    /// The store is closed at the end of each load, including failed ones.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use section_config::prelude::*;
    /// use section_config::store::{MemoryStore, SectionStore};
    ///
    /// # fn example() -> Result<()> {
    /// let loader = SectionConfigLoader::builder()
    ///     .with_store_factory(|| -> Result<Box<dyn SectionStore>> {
    ///         Ok(Box::new(MemoryStore::new()))
    ///     })
    ///     .ensure_created(true)
    ///     .build()?;
    /// assert!(loader.load()?.is_empty());
    /// # Ok(())
    /// # }
    /// # example().unwrap();
    /// ```
    pub fn with_store_factory<F: StoreFactory + 'static>(mut self, factory: F) -> Self {
        self.binding = Some(StoreBinding::Factory(Arc::new(factory)));
        self
    }

    /// Only load sections of this application.
    pub fn with_application(mut self, application: impl Into<String>) -> Self {
        self.application = Some(application.into());
        self
    }

    /// Only load sections of this aspect (default `"settings"`).
    pub fn with_aspect(mut self, aspect: impl Into<String>) -> Self {
        self.aspect = Some(aspect.into());
        self
    }

    /// Load sections of every aspect.
    pub fn any_aspect(mut self) -> Self {
        self.aspect = None;
        self
    }

    /// Keep only sections whose discriminator carries every pair of
    /// `expression`, a JSON object of strings such as `{"tenant":"acme"}`.
    ///
    /// An empty string disables filtering. An expression that is not a
    /// non-empty JSON object of strings matches no section.
    pub fn with_discriminator(mut self, expression: impl Into<String>) -> Self {
        self.discriminator = Some(expression.into());
        self
    }

    /// Create the backing storage of loader-owned stores before reading.
    pub fn ensure_created(mut self, ensure_created: bool) -> Self {
        self.ensure_created = ensure_created;
        self
    }

    /// Send diagnostics to `sink` instead of the default sink.
    pub fn with_diagnostics<D: DiagnosticSink + 'static>(self, sink: D) -> Self {
        self.with_shared_diagnostics(Arc::new(sink))
    }

    /// Send diagnostics to a sink shared with other code.
    pub fn with_shared_diagnostics(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Build the loader.
    ///
    /// Nothing is read until [`SectionConfigLoader::load`] is called.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NoStore`] if neither a store nor a store factory
    /// was configured.
    pub fn build(self) -> Result<SectionConfigLoader> {
        let binding = self.binding.ok_or(ConfigError::NoStore)?;

        Ok(SectionConfigLoader {
            binding,
            query: SectionQuery::new(self.application, self.aspect),
            discriminator: self.discriminator,
            ensure_created: self.ensure_created,
            sink: self.sink.unwrap_or_else(default_sink),
        })
    }
}

impl Default for SectionConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SectionConfigLoader {
    /// Create a new builder for constructing a loader.
    pub fn builder() -> SectionConfigBuilder {
        SectionConfigBuilder::new()
    }
}
