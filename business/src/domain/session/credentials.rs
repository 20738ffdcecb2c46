use crate::domain::shared::value_objects::{AuthToken, UserId};

use super::errors::CredentialError;
use super::storage::{LocalStore, TOKEN_KEY, USER_ID_KEY};

/// Token and user id required by every mutating product operation.
#[derive(Debug, Clone, PartialEq)]
pub struct Credentials {
    pub token: AuthToken,
    pub user_id: UserId,
}

impl Credentials {
    /// Reads both values from the store. Empty strings count as absent.
    pub fn resolve(store: &dyn LocalStore) -> Result<Self, CredentialError> {
        let token = read_non_empty(store, TOKEN_KEY).ok_or(CredentialError::MissingToken)?;
        let user_id =
            read_non_empty(store, USER_ID_KEY).ok_or(CredentialError::MissingUserId)?;

        Ok(Self {
            token: AuthToken::new(token),
            user_id: UserId::new(user_id),
        })
    }
}

pub(crate) fn read_non_empty(store: &dyn LocalStore, key: &str) -> Option<String> {
    store.get(key).filter(|value| !value.is_empty())
}
