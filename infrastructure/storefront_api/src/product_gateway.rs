use async_trait::async_trait;
use reqwest::{Request, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use business::domain::errors::GatewayError;
use business::domain::product::gateway::ProductGateway;
use business::domain::product::model::{
    NewProductRequest, Product, ProductPatch, UpdateResponse,
};
use business::domain::shared::value_objects::{AuthToken, ProductId};

use crate::client::{AUTH_TOKEN_HEADER, StorefrontClient};

/// Error payload the API sends with a failed create.
#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

pub struct ProductGatewayHttp {
    client: StorefrontClient,
}

impl ProductGatewayHttp {
    pub fn new(client: StorefrontClient) -> Self {
        Self { client }
    }

    fn list_request(&self) -> reqwest::Result<Request> {
        self.client.client.get(self.client.products_url()).build()
    }

    fn create_request(
        &self,
        request: &NewProductRequest,
        token: &AuthToken,
    ) -> reqwest::Result<Request> {
        self.client
            .client
            .post(self.client.products_url())
            .header(AUTH_TOKEN_HEADER, token.expose())
            .json(request)
            .build()
    }

    fn update_request(
        &self,
        id: &ProductId,
        patch: &ProductPatch,
        token: &AuthToken,
    ) -> reqwest::Result<Request> {
        self.client
            .client
            .put(self.client.product_url(id))
            .header(AUTH_TOKEN_HEADER, token.expose())
            .json(patch)
            .build()
    }

    fn delete_request(&self, id: &ProductId, token: &AuthToken) -> reqwest::Result<Request> {
        self.client
            .client
            .delete(self.client.product_url(id))
            .header(AUTH_TOKEN_HEADER, token.expose())
            .build()
    }

    /// Sends the request and reads the whole body as text.
    async fn execute(
        &self,
        request: reqwest::Result<Request>,
    ) -> Result<(StatusCode, String), GatewayError> {
        let request = request.map_err(Self::transport_error)?;
        let response = self
            .client
            .client
            .execute(request)
            .await
            .map_err(Self::transport_error)?;
        let status = response.status();
        let body = response.text().await.map_err(Self::transport_error)?;
        Ok((status, body))
    }

    fn check_status(status: StatusCode) -> Result<(), GatewayError> {
        if status.is_success() {
            Ok(())
        } else {
            Err(GatewayError::request_failed(status.as_u16()))
        }
    }

    /// Failure carrying the server's `{"error": "..."}` message when the
    /// body has one.
    fn failure_from_body(status: u16, body: &str) -> GatewayError {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.error)
            .filter(|m| !m.is_empty());
        GatewayError::RequestFailed { status, message }
    }

    fn decode<T: DeserializeOwned>(body: &str) -> Result<T, GatewayError> {
        serde_json::from_str(body).map_err(|e| GatewayError::malformed(e.to_string()))
    }

    fn transport_error(e: reqwest::Error) -> GatewayError {
        GatewayError::network(e.to_string())
    }
}

#[async_trait]
impl ProductGateway for ProductGatewayHttp {
    async fn list(&self) -> Result<Vec<Product>, GatewayError> {
        let (status, body) = self.execute(self.list_request()).await?;
        Self::check_status(status)?;
        Self::decode(&body)
    }

    async fn create(
        &self,
        request: &NewProductRequest,
        token: &AuthToken,
    ) -> Result<Product, GatewayError> {
        let (status, body) = self.execute(self.create_request(request, token)).await?;
        if !status.is_success() {
            return Err(Self::failure_from_body(status.as_u16(), &body));
        }
        Self::decode(&body)
    }

    async fn update(
        &self,
        id: &ProductId,
        patch: &ProductPatch,
        token: &AuthToken,
    ) -> Result<UpdateResponse, GatewayError> {
        let (status, body) = self.execute(self.update_request(id, patch, token)).await?;
        Self::check_status(status)?;
        Ok(UpdateResponse::from_body(&body))
    }

    async fn delete(&self, id: &ProductId, token: &AuthToken) -> Result<(), GatewayError> {
        let (status, _) = self.execute(self.delete_request(id, token)).await?;
        Self::check_status(status)
    }
}
