//! Error types for section-config.

/// Result type alias for section-config operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors that can occur while loading configuration sections.
///
/// Malformed discriminators and duplicate keys are deliberately absent: they are
/// resolved deterministically and reported through [`crate::diagnostics`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// No store or store factory was configured for the loader.
    #[error("No section store configured")]
    NoStore,

    /// The section store failed to open, query or create its backing storage.
    #[error("Section store error: {0}")]
    Store(String),

    /// A setting looked like a JSON object or array but could not be parsed.
    #[error("Failed to parse setting '{key}' in section '{section}' as JSON: {source}")]
    ContainerParse {
        /// Name of the section owning the setting
        section: String,
        /// Key of the offending setting
        key: String,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// A store's persisted records are not valid section JSON.
    #[error("Malformed section records in '{store}': {source}")]
    StoreFormat {
        /// Name of the store that produced the records
        store: String,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// IO error occurred.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl ConfigError {
    /// Create a store error from any displayable cause.
    pub fn store(msg: impl std::fmt::Display) -> Self {
        Self::Store(msg.to_string())
    }
}
