use std::env;
use std::path::PathBuf;

const DEFAULT_DATA_FILE: &str = ".storefront/local-store.json";
const IN_MEMORY: &str = ":memory:";

/// Where the credential pair and login flag are kept.
#[derive(Debug, Clone, PartialEq)]
pub enum StorageConfig {
    File(PathBuf),
    /// Nothing survives the process; useful for one-off scripted runs.
    Memory,
}

impl StorageConfig {
    /// Environment variables:
    /// - STOREFRONT_DATA_FILE: path of the JSON store, or ":memory:"
    ///   (default: ".storefront/local-store.json")
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let data_file = lookup("STOREFRONT_DATA_FILE")
            .map(|path| path.trim().to_string())
            .filter(|path| !path.is_empty())
            .unwrap_or_else(|| DEFAULT_DATA_FILE.to_string());

        if data_file == IN_MEMORY {
            return StorageConfig::Memory;
        }
        StorageConfig::File(PathBuf::from(data_file))
    }
}
