use async_trait::async_trait;

use crate::domain::errors::GatewayError;
use crate::domain::shared::value_objects::{AuthToken, ProductId};

use super::model::{NewProductRequest, Product, ProductPatch, UpdateResponse};

/// Contract of the remote products API.
#[async_trait]
pub trait ProductGateway: Send + Sync {
    async fn list(&self) -> Result<Vec<Product>, GatewayError>;
    async fn create(
        &self,
        request: &NewProductRequest,
        token: &AuthToken,
    ) -> Result<Product, GatewayError>;
    async fn update(
        &self,
        id: &ProductId,
        patch: &ProductPatch,
        token: &AuthToken,
    ) -> Result<UpdateResponse, GatewayError>;
    async fn delete(&self, id: &ProductId, token: &AuthToken) -> Result<(), GatewayError>;
}
