use std::sync::Arc;

use crate::domain::logger::Logger;
use crate::domain::session::errors::SessionError;
use crate::domain::session::login_state::LoginState;
use crate::domain::session::storage::{LocalStore, TOKEN_KEY, USER_ID_KEY};
use crate::domain::shared::value_objects::{AuthToken, UserId};

/// Stores or clears the credential pair and keeps the login flag in step.
pub struct SessionService {
    pub storage: Arc<dyn LocalStore>,
    pub login_state: Arc<LoginState>,
    pub logger: Arc<dyn Logger>,
}

impl SessionService {
    pub fn sign_in(&self, token: AuthToken, user_id: UserId) -> Result<(), SessionError> {
        if token.expose().is_empty() {
            return Err(SessionError::EmptyField("token"));
        }
        if user_id.as_str().is_empty() {
            return Err(SessionError::EmptyField("user id"));
        }

        self.storage.set(TOKEN_KEY, token.expose())?;
        self.storage.set(USER_ID_KEY, user_id.as_str())?;
        self.login_state.set_logged_in(true);

        self.logger.info(&format!("Signed in as {}", user_id));
        Ok(())
    }

    pub fn sign_out(&self) -> Result<(), SessionError> {
        self.storage.remove(TOKEN_KEY)?;
        self.storage.remove(USER_ID_KEY)?;
        self.login_state.set_logged_in(false);

        self.logger.info("Signed out");
        Ok(())
    }
}
