use std::future::Future;
use std::sync::{Arc, RwLock};

use tokio::sync::Mutex;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::gateway::ProductGateway;
use crate::domain::product::model::{CatalogEntry, Product};
use crate::domain::session::credentials::Credentials;
use crate::domain::session::errors::CredentialError;
use crate::domain::session::storage::LocalStore;

/// Observable state shared by every operation of one [`ProductStore`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoreState {
    /// Local cache of the server's product list, in server order.
    pub products: Vec<CatalogEntry>,
    /// True while any operation is running.
    pub loading: bool,
    /// Message of the most recent operation's failure; cleared on success.
    pub error: Option<String>,
}

/// Locally cached product list plus the operations that keep it in sync
/// with the storefront API.
///
/// Operations run one at a time per store: each waits for the previous one
/// (including its reconciling fetch) to finish. Every operation returns its
/// outcome and also records it in [`StoreState::error`].
pub struct ProductStore {
    pub(super) gateway: Arc<dyn ProductGateway>,
    pub(super) storage: Arc<dyn LocalStore>,
    pub(super) logger: Arc<dyn Logger>,
    state: RwLock<StoreState>,
    turn: Mutex<()>,
}

impl ProductStore {
    pub fn new(
        gateway: Arc<dyn ProductGateway>,
        storage: Arc<dyn LocalStore>,
        logger: Arc<dyn Logger>,
    ) -> Self {
        Self {
            gateway,
            storage,
            logger,
            state: RwLock::new(StoreState::default()),
            turn: Mutex::new(()),
        }
    }

    pub fn snapshot(&self) -> StoreState {
        self.read(|state| state.clone())
    }

    pub fn products(&self) -> Vec<CatalogEntry> {
        self.read(|state| state.products.clone())
    }

    pub fn is_loading(&self) -> bool {
        self.read(|state| state.loading)
    }

    pub fn last_error(&self) -> Option<String> {
        self.read(|state| state.error.clone())
    }

    /// Reads the credential pair without touching the network or the
    /// store state.
    pub fn resolve_credentials(&self) -> Result<Credentials, CredentialError> {
        Credentials::resolve(self.storage.as_ref())
    }

    fn read<R>(&self, f: impl FnOnce(&StoreState) -> R) -> R {
        let state = self.state.read().unwrap_or_else(|poisoned| poisoned.into_inner());
        f(&state)
    }

    pub(super) fn write<R>(&self, f: impl FnOnce(&mut StoreState) -> R) -> R {
        let mut state = self
            .state
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        f(&mut state)
    }

    pub(super) fn replace_all(&self, products: &[Product]) {
        let entries = products.iter().cloned().map(CatalogEntry::from).collect();
        self.write(|state| state.products = entries);
    }

    /// Waits for this store's turn, flags loading, runs `work` and records
    /// its outcome. Loading is cleared even when the caller drops the
    /// future midway; the error field is then left as it was.
    pub(super) async fn run<T, F>(&self, operation: &str, work: F) -> Result<T, ProductError>
    where
        F: Future<Output = Result<T, ProductError>>,
    {
        let _turn = self.turn.lock().await;
        let _loading = LoadingFlag::raise(self);

        let result = work.await;

        self.write(|state| state.error = result.as_ref().err().map(ToString::to_string));
        match &result {
            Ok(_) => self.logger.debug(&format!("{} finished", operation)),
            Err(e) => self.logger.error(&format!("{} failed: {}", operation, e)),
        }
        result
    }

    /// Replaces the optimistic local state left by a write with the
    /// server's list. Must be called from inside [`ProductStore::run`].
    pub(super) async fn reconcile(&self) -> Result<(), ProductError> {
        let products = self
            .gateway
            .list()
            .await
            .map_err(ProductError::Reconciliation)?;
        self.logger
            .debug(&format!("Reconciled {} products", products.len()));
        self.replace_all(&products);
        Ok(())
    }
}

/// Holds `loading` up for as long as it lives.
struct LoadingFlag<'a> {
    store: &'a ProductStore,
}

impl<'a> LoadingFlag<'a> {
    fn raise(store: &'a ProductStore) -> Self {
        store.write(|state| state.loading = true);
        Self { store }
    }
}

impl Drop for LoadingFlag<'_> {
    fn drop(&mut self) {
        self.store.write(|state| state.loading = false);
    }
}
