//! Section records and the stores that supply them.

#[cfg(feature = "json-store")]
mod json_file;
mod memory;
mod records;
mod section_store;

#[cfg(feature = "json-store")]
pub use json_file::JsonFileStore;
pub use memory::MemoryStore;
pub use records::{DEFAULT_ASPECT, SectionRecord, SettingRecord};
pub use section_store::{SectionQuery, SectionStore, StoreFactory};
