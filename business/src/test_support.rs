//! Test doubles shared across the crate's tests.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use mockall::mock;

use crate::domain::errors::{GatewayError, StorageError};
use crate::domain::logger::Logger;
use crate::domain::product::gateway::ProductGateway;
use crate::domain::product::model::{NewProductRequest, Product, ProductPatch, UpdateResponse};
use crate::domain::session::storage::{LocalStore, TOKEN_KEY, USER_ID_KEY};
use crate::domain::shared::value_objects::{AuthToken, ProductId, UserId};

mock! {
    pub Gateway {}

    #[async_trait]
    impl ProductGateway for Gateway {
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
}

mock! {
    pub Store {}

    impl LocalStore for Store {
        fn get(&self, key: &str) -> Option<String>;
        fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
        fn remove(&self, key: &str) -> Result<(), StorageError>;
    }
}

mock! {
    pub Log {}

    impl Logger for Log {
        fn info(&self, message: &str);
        fn warn(&self, message: &str);
        fn error(&self, message: &str);
        fn debug(&self, message: &str);
    }
}

pub fn mock_logger() -> Arc<dyn Logger> {
    let mut logger = MockLog::new();
    logger.expect_info().returning(|_| ());
    logger.expect_warn().returning(|_| ());
    logger.expect_error().returning(|_| ());
    logger.expect_debug().returning(|_| ());
    Arc::new(logger)
}

/// Store holding `tok` / `user-1` as credentials.
pub fn logged_in_store() -> MockStore {
    let mut store = MockStore::new();
    store.expect_get().returning(|key| match key {
        TOKEN_KEY => Some("tok".to_string()),
        USER_ID_KEY => Some("user-1".to_string()),
        _ => None,
    });
    store
}

pub fn logged_out_store() -> MockStore {
    let mut store = MockStore::new();
    store.expect_get().returning(|_| None);
    store
}

pub fn product(id: &str, name: &str) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_string(),
        description: "desc".to_string(),
        image_url: "https://example.com/p.png".to_string(),
        price: 5.0,
        stock: 10,
        is_on_discount: false,
        discount_pct: 0.0,
        is_hidden: false,
        created_by: Some(UserId::new("user-1")),
    }
}

/// In-memory stand-in for the products API, used where timing matters.
pub struct FakeServer {
    products: Mutex<Vec<Product>>,
    list_delay: Duration,
    failing_list: Mutex<Option<u16>>,
}

impl FakeServer {
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products: Mutex::new(products),
            list_delay: Duration::ZERO,
            failing_list: Mutex::new(None),
        }
    }

    pub fn with_list_delay(mut self, millis: u64) -> Self {
        self.list_delay = Duration::from_millis(millis);
        self
    }

    pub fn fail_next_list(&self, status: u16) {
        *self.failing_list.lock().unwrap() = Some(status);
    }

    pub fn stored(&self) -> Vec<Product> {
        self.products.lock().unwrap().clone()
    }
}

#[async_trait]
impl ProductGateway for FakeServer {
    async fn list(&self) -> Result<Vec<Product>, GatewayError> {
        let failing = self.failing_list.lock().unwrap().take();
        if let Some(status) = failing {
            return Err(GatewayError::request_failed(status));
        }
        let snapshot = self.stored();
        tokio::time::sleep(self.list_delay).await;
        Ok(snapshot)
    }

    async fn create(
        &self,
        request: &NewProductRequest,
        _token: &AuthToken,
    ) -> Result<Product, GatewayError> {
        let mut products = self.products.lock().unwrap();
        let mut created = product(&(products.len() + 1).to_string(), &request.name);
        created.created_by = request.created_by.clone();
        products.push(created.clone());
        Ok(created)
    }

    async fn update(
        &self,
        id: &ProductId,
        patch: &ProductPatch,
        _token: &AuthToken,
    ) -> Result<UpdateResponse, GatewayError> {
        let mut products = self.products.lock().unwrap();
        let Some(stored) = products.iter_mut().find(|p| &p.id == id) else {
            return Err(GatewayError::request_failed(404));
        };
        if let Some(name) = &patch.name {
            stored.name = name.clone();
        }
        if let Some(price) = patch.price {
            stored.price = price;
        }
        if let Some(stock) = patch.stock {
            stored.stock = stock;
        }
        Ok(UpdateResponse::Product(stored.clone()))
    }

    async fn delete(&self, id: &ProductId, _token: &AuthToken) -> Result<(), GatewayError> {
        self.products.lock().unwrap().retain(|p| &p.id != id);
        Ok(())
    }
}
