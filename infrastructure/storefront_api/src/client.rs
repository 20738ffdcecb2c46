use std::time::Duration;

use reqwest::Client;
use url::Url;

use business::domain::shared::value_objects::ProductId;

/// Header carrying the session token on mutating requests.
pub const AUTH_TOKEN_HEADER: &str = "auth-token";

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Invalid API base URL: {0}")]
    InvalidBaseUrl(String),
}

/// Shared HTTP client for the storefront API.
pub struct StorefrontClient {
    pub client: Client,
    base_url: Url,
}

impl StorefrontClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ClientError> {
        let base_url =
            Url::parse(base_url).map_err(|e| ClientError::InvalidBaseUrl(e.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::InvalidBaseUrl(base_url.to_string()));
        }

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_default();

        Ok(Self { client, base_url })
    }

    /// Returns the products collection endpoint URL.
    pub fn products_url(&self) -> Url {
        self.endpoint(&["products"])
    }

    /// Returns the endpoint URL of a single product. The id is encoded as
    /// one path segment.
    pub fn product_url(&self, id: &ProductId) -> Url {
        self.endpoint(&["products", id.as_str()])
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // Always Ok: `new` rejects cannot-be-a-base URLs.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> StorefrontClient {
        StorefrontClient::new(base, Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn should_build_products_url_from_bare_host() {
        assert_eq!(
            client("http://localhost:4000").products_url().as_str(),
            "http://localhost:4000/products"
        );
    }

    #[test]
    fn should_keep_slash_between_base_path_and_products() {
        let with_slash = client("https://shop.example.com/api/");
        let without_slash = client("https://shop.example.com/api");

        assert_eq!(
            with_slash.product_url(&ProductId::new("42")).as_str(),
            "https://shop.example.com/api/products/42"
        );
        assert_eq!(
            without_slash.product_url(&ProductId::new("42")).as_str(),
            "https://shop.example.com/api/products/42"
        );
    }

    #[test]
    fn should_encode_product_id_as_single_segment() {
        assert_eq!(
            client("http://localhost:4000")
                .product_url(&ProductId::new("a/b c"))
                .as_str(),
            "http://localhost:4000/products/a%2Fb%20c"
        );
    }

    #[test]
    fn should_reject_unusable_base_url() {
        assert!(StorefrontClient::new("not a url", Duration::from_secs(5)).is_err());
        assert!(StorefrontClient::new("mailto:shop@example.com", Duration::from_secs(5)).is_err());
    }
}
