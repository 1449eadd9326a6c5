mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{CatalogConfig, CatalogKind, Config, StorageConfig, TimingConfig};
