//! `config` crate integration.
//!
//! A [`SectionConfigLoader`] is a `config::Source`: every collect runs a fresh
//! load and nests the flat keys into tables.
//!
//! ```rust
//! use section_config::prelude::*;
//! use section_config::store::{MemoryStore, SectionRecord};
//!
//! # fn example() -> std::result::Result<(), Box<dyn std::error::Error>> {
//! let store = MemoryStore::new().with_section(
//!     SectionRecord::new("1", "db").with_setting("1", "connection", r#"{"host":"db.local","port":5432}"#),
//! );
//! let loader = SectionConfigLoader::builder().with_store(store).build()?;
//!
//! let settings = config::Config::builder().add_source(loader).build()?;
//! assert_eq!(settings.get_string("db.host")?, "db.local");
//! assert_eq!(settings.get_int("db.port")?, 5432);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

use super::loader::SectionConfigLoader;
use config::{Map, Source, Value};

impl Source for SectionConfigLoader {
    fn clone_into_box(&self) -> Box<dyn Source + Send + Sync> {
        Box::new(self.clone())
    }

    fn collect(&self) -> Result<Map<String, Value>, config::ConfigError> {
        let flat = self
            .load()
            .map_err(|e| config::ConfigError::Foreign(Box::new(e)))?;
        let origin = self.store_name();
        Ok(flat.to_config_map_with_origin(Some(&origin)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::NullSink;
    use crate::store::{MemoryStore, SectionRecord};

    fn loader(store: MemoryStore) -> SectionConfigLoader {
        SectionConfigLoader::builder()
            .with_store(store)
            .with_diagnostics(NullSink)
            .build()
            .unwrap()
    }

    #[test]
    fn test_collect_nests_keys() {
        let store = MemoryStore::new().with_section(
            SectionRecord::new("1", "Db")
                .with_setting("1", "Connection", r#"{"Host":"x","Replicas":[{"Host":"r0"}]}"#)
                .with_setting("2", "Timeout", "30"),
        );

        let tree = loader(store).collect().unwrap();
        assert_eq!(tree["Timeout"].clone().into_string().unwrap(), "30");

        let db = tree["Db"].clone().into_table().unwrap();
        assert_eq!(db["Host"].clone().into_string().unwrap(), "x");

        let replicas = db["Replicas"].clone().into_table().unwrap();
        let first = replicas["0"].clone().into_table().unwrap();
        assert_eq!(first["Host"].clone().into_string().unwrap(), "r0");
    }

    #[test]
    fn test_collect_surfaces_load_errors() {
        let store = MemoryStore::new()
            .with_section(SectionRecord::new("1", "Db").with_setting("1", "Bad", "{nope}"));

        let err = loader(store).collect().unwrap_err();
        assert!(matches!(err, config::ConfigError::Foreign(_)));
    }

    #[test]
    fn test_config_builder_reads_nested_values() {
        let store = MemoryStore::new().with_section(
            SectionRecord::new("1", "server")
                .with_setting("1", "listen", r#"{"port":8080,"tls":{"enabled":true}}"#),
        );

        let settings = config::Config::builder()
            .add_source(loader(store))
            .build()
            .unwrap();

        assert_eq!(settings.get_int("server.port").unwrap(), 8080);
        assert!(settings.get_bool("server.tls.enabled").unwrap());
    }
}
