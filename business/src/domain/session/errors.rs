use crate::domain::errors::StorageError;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CredentialError {
    #[error("No token available")]
    MissingToken,
    #[error("No userId available")]
    MissingUserId,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SessionError {
    #[error("{0} must not be empty")]
    EmptyField(&'static str),
    #[error(transparent)]
    Storage(#[from] StorageError),
}
