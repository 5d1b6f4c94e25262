//! # section-config
//!
//! Flatten discriminated, store-backed configuration sections into hierarchical
//! configuration keys.
//!
//! ## Overview
//!
//! Settings live in a record store as *sections*: a named group of settings
//! belonging to an application and an aspect, optionally tagged with a
//! discriminator such as `{"tenant":"acme"}`. Each setting is a key and a raw
//! text value, which may itself be JSON.
//!
//! A load:
//! - fetches the sections of one application and aspect from a store
//! - keeps those whose discriminator carries every pair of the requested one
//! - flattens their settings into `:`-delimited keys (`Db:Host`, `Items:0:Name`)
//!
//! The result is a [`core::FlatConfigMap`], and the loader also plugs straight
//! into the `config` crate as a `config::Source`.
//!
//! ## Quick Start
//!
//! ```rust
//! use section_config::prelude::*;
//! use section_config::store::{MemoryStore, SectionRecord};
//!
//! # fn example() -> Result<()> {
//! let store = MemoryStore::new()
//!     .with_section(
//!         SectionRecord::new("1", "Db")
//!             .with_discriminator(r#"{"tenant":"acme","region":"eu"}"#)
//!             .with_setting("1", "Connection", r#"{"Host":"acme-db","Port":5432}"#)
//!             .with_setting("2", "Timeout", "30"),
//!     )
//!     .with_section(
//!         SectionRecord::new("2", "Db")
//!             .with_discriminator(r#"{"tenant":"globex"}"#)
//!             .with_setting("3", "Connection", r#"{"Host":"globex-db"}"#),
//!     );
//!
//! let loader = SectionConfigLoader::builder()
//!     .with_store(store)
//!     .with_discriminator(r#"{"tenant":"acme"}"#)
//!     .build()?;
//!
//! let map = loader.load()?;
//! assert_eq!(map.get("Db:Host"), Some(Some("acme-db")));
//! assert_eq!(map.get("Db:Port"), Some(Some("5432")));
//! assert_eq!(map.get("Timeout"), Some(Some("30")));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Feature Flags
//!
//! - `json-store` (default): [`store::JsonFileStore`]
//! - `tracing` (default): forward diagnostics to `tracing`

#![warn(missing_docs, rust_2024_compatibility)]
#![deny(unsafe_code)]

pub mod core;
pub mod diagnostics;
pub mod error;
pub mod store;

/// Convenient re-exports for common usage patterns.
pub mod prelude {
    pub use crate::core::{FlatConfigMap, SectionConfigBuilder, SectionConfigLoader};
    pub use crate::diagnostics::{Diagnostic, DiagnosticSink};
    pub use crate::error::{ConfigError, Result};
    pub use crate::store::{SectionStore, StoreFactory};
}
