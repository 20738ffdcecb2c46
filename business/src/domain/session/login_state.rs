use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::domain::logger::Logger;

use super::storage::{LOGGED_IN_KEY, LocalStore};

/// Process-wide "is the user logged in" flag, mirrored to the local store.
///
/// The value is read once when the state is loaded. Changes are broadcast
/// through a watch channel; persisting them is the job of the subscription
/// started by [`LoginState::spawn_write_through`].
pub struct LoginState {
    sender: watch::Sender<bool>,
    store: Arc<dyn LocalStore>,
    logger: Arc<dyn Logger>,
}

impl LoginState {
    pub fn load(store: Arc<dyn LocalStore>, logger: Arc<dyn Logger>) -> Self {
        let initial = store.get(LOGGED_IN_KEY).as_deref() == Some("true");
        let (sender, _) = watch::channel(initial);
        Self {
            sender,
            store,
            logger,
        }
    }

    pub fn is_logged_in(&self) -> bool {
        *self.sender.borrow()
    }

    /// Returns `true` when the value actually changed. Subscribers are only
    /// woken on change.
    pub fn set_logged_in(&self, value: bool) -> bool {
        self.sender.send_if_modified(|current| {
            if *current == value {
                return false;
            }
            *current = value;
            true
        })
    }

    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.sender.subscribe()
    }

    /// Writes every change back to the store. The task ends once this
    /// state is dropped, after flushing the last value it has not seen.
    pub fn spawn_write_through(&self) -> JoinHandle<()> {
        let mut receiver = self.sender.subscribe();
        let store = Arc::clone(&self.store);
        let logger = Arc::clone(&self.logger);

        tokio::spawn(async move {
            while receiver.changed().await.is_ok() {
                let value = *receiver.borrow_and_update();
                let stored = if value { "true" } else { "false" };
                match store.set(LOGGED_IN_KEY, stored) {
                    Ok(()) => logger.debug(&format!("Persisted login flag: {}", stored)),
                    Err(e) => logger.error(&format!("Failed to persist login flag: {}", e)),
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::logger::NoopLogger;
    use crate::test_support::MockStore;
    use mockall::predicate::eq;

    fn store_reading(stored: Option<&'static str>) -> MockStore {
        let mut store = MockStore::new();
        store
            .expect_get()
            .with(eq(LOGGED_IN_KEY))
            .returning(move |_| stored.map(str::to_string));
        store
    }

    #[test]
    fn should_restore_logged_in_flag_from_store() {
        let state = LoginState::load(Arc::new(store_reading(Some("true"))), Arc::new(NoopLogger));
        assert!(state.is_logged_in());
    }

    #[test]
    fn should_default_to_logged_out_for_missing_or_unknown_value() {
        let missing = LoginState::load(Arc::new(store_reading(None)), Arc::new(NoopLogger));
        let garbage = LoginState::load(Arc::new(store_reading(Some("yes"))), Arc::new(NoopLogger));

        assert!(!missing.is_logged_in());
        assert!(!garbage.is_logged_in());
    }

    #[test]
    fn should_only_report_actual_changes() {
        let state = LoginState::load(Arc::new(store_reading(Some("false"))), Arc::new(NoopLogger));

        assert!(!state.set_logged_in(false));
        assert!(state.set_logged_in(true));
        assert!(!state.set_logged_in(true));
    }

    #[tokio::test]
    async fn should_notify_subscribers_on_change() {
        let state = LoginState::load(Arc::new(store_reading(None)), Arc::new(NoopLogger));
        let mut receiver = state.subscribe();

        state.set_logged_in(true);

        receiver.changed().await.unwrap();
        assert!(*receiver.borrow());
    }

    #[tokio::test]
    async fn should_write_latest_value_through_to_store() {
        let mut store = store_reading(Some("false"));
        store
            .expect_set()
            .with(eq(LOGGED_IN_KEY), eq("true"))
            .times(1)
            .returning(|_, _| Ok(()));

        let state = LoginState::load(Arc::new(store), Arc::new(NoopLogger));
        let writer = state.spawn_write_through();

        state.set_logged_in(true);
        drop(state);

        writer.await.unwrap();
    }
}
