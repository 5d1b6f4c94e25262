//! Section filtering, flattening and loading.

mod builder;
mod discriminator;
mod flat_map;
mod flatten;
mod host;
mod loader;

pub use builder::SectionConfigBuilder;
pub use discriminator::{DiscriminatorExpression, filter_sections};
pub use flat_map::{FlatConfigMap, KEY_DELIMITER, join_key};
pub use flatten::{flatten_sections, is_json_container};
pub use loader::SectionConfigLoader;
