use crate::domain::errors::StorageError;

pub const TOKEN_KEY: &str = "lsToken";
pub const USER_ID_KEY: &str = "userIDToken";
pub const LOGGED_IN_KEY: &str = "isLoggedIn";

/// Persistent string key/value store that survives process restarts.
///
/// Reads are synchronous and infallible; implementations load their
/// contents up front.
pub trait LocalStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}
