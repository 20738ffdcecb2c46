use std::sync::Arc;

use anyhow::Context;
use tokio::task::JoinHandle;

use business::application::product::store::ProductStore;
use business::application::session::service::SessionService;
use business::domain::logger::Logger;
use business::domain::navigation::guard::NavigationGuard;
use business::domain::session::login_state::LoginState;
use business::domain::session::storage::LocalStore;
use logger::TracingLogger;
use persistence::file_store::FileLocalStore;
use persistence::memory_store::MemoryLocalStore;
use storefront_api::client::StorefrontClient;
use storefront_api::product_gateway::ProductGatewayHttp;

use crate::config::app_config::AppConfig;
use crate::config::storage_config::StorageConfig;
use crate::setup::routes::{AUTH_PATH, storefront_routes};

pub struct DependencyContainer {
    pub product_store: ProductStore,
    pub session: SessionService,
    pub login_state: Arc<LoginState>,
    pub navigation: NavigationGuard,
    login_writer: JoinHandle<()>,
}

impl DependencyContainer {
    /// Must be called inside the tokio runtime: it starts the login flag
    /// write-through task.
    pub fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let logger: Arc<dyn Logger> = Arc::new(TracingLogger);

        // Infrastructure adapters
        let storage: Arc<dyn LocalStore> = match &config.storage {
            StorageConfig::File(path) => Arc::new(
                FileLocalStore::open(path).context("failed to open local store")?,
            ),
            StorageConfig::Memory => Arc::new(MemoryLocalStore::new()),
        };
        let client = StorefrontClient::new(&config.api.base_url, config.api.timeout)?;
        let gateway = Arc::new(ProductGatewayHttp::new(client));

        // Session
        let login_state = Arc::new(LoginState::load(storage.clone(), logger.clone()));
        let login_writer = login_state.spawn_write_through();
        let session = SessionService {
            storage: storage.clone(),
            login_state: login_state.clone(),
            logger: logger.clone(),
        };
        let navigation = NavigationGuard::new(storefront_routes(), AUTH_PATH, storage.clone());

        // Products
        let product_store = ProductStore::new(gateway, storage, logger);

        Ok(Self {
            product_store,
            session,
            login_state,
            navigation,
            login_writer,
        })
    }

    /// Drops every holder of the login state and waits for the last flag
    /// change to reach the store.
    pub async fn shutdown(self) -> anyhow::Result<()> {
        let Self {
            product_store,
            session,
            login_state,
            navigation,
            login_writer,
        } = self;
        drop((product_store, session, login_state, navigation));

        login_writer
            .await
            .context("login flag writer stopped unexpectedly")
    }
}
