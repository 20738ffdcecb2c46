use crate::domain::errors::GatewayError;
use crate::domain::session::errors::CredentialError;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProductError {
    #[error(transparent)]
    MissingCredentials(#[from] CredentialError),
    #[error("{field} is required")]
    Validation { field: &'static str },
    #[error(transparent)]
    Gateway(#[from] GatewayError),
    /// The write went through but the follow-up fetch did not; the local
    /// list still holds the optimistic change.
    #[error("Saved, but refreshing the product list failed: {0}")]
    Reconciliation(GatewayError),
}
