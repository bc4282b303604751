//! Session service.

use std::sync::Arc;

use mockall::automock;

use crate::{
    domain::session::{errors::SessionError, models::User, repository::SessionRepository},
    storage::Storage,
};

/// Holds at most one remembered customer identity process-wide.
///
/// `login` is "remember these contact details": checkout calls it with the
/// submitted form, the account page calls it to save profile edits. Any
/// caller may log in as anyone.
#[automock]
pub trait SessionService: Send + Sync {
    /// Overwrite the remembered identity and persist it.
    ///
    /// # Errors
    ///
    /// Returns an error when the store cannot be written.
    fn login(&self, user: User) -> Result<(), SessionError>;

    /// Forget the remembered identity and remove it from the store.
    ///
    /// # Errors
    ///
    /// Returns an error when the store cannot be written.
    fn logout(&self) -> Result<(), SessionError>;

    /// The remembered identity, if any.
    ///
    /// # Errors
    ///
    /// Returns an error when the store cannot be read.
    fn current_user(&self) -> Result<Option<User>, SessionError>;

    /// Whether anyone is remembered.
    ///
    /// # Errors
    ///
    /// Returns an error when the store cannot be read.
    fn is_logged_in(&self) -> Result<bool, SessionError>;
}

/// [`SessionService`] over the local key-value store.
#[derive(Clone)]
pub struct StoredSessionService {
    storage: Arc<dyn Storage>,
    repository: SessionRepository,
}

impl StoredSessionService {
    /// Build the service over `storage`.
    #[must_use]
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self {
            storage,
            repository: SessionRepository::new(),
        }
    }
}

impl SessionService for StoredSessionService {
    fn login(&self, user: User) -> Result<(), SessionError> {
        tracing::info!(phone = %user.phone, "session login");

        self.repository.save(self.storage.as_ref(), &user)?;

        Ok(())
    }

    fn logout(&self) -> Result<(), SessionError> {
        self.repository.clear(self.storage.as_ref())?;

        tracing::info!("session logout");

        Ok(())
    }

    fn current_user(&self) -> Result<Option<User>, SessionError> {
        Ok(self.repository.load(self.storage.as_ref())?)
    }

    fn is_logged_in(&self) -> Result<bool, SessionError> {
        Ok(self.current_user()?.is_some())
    }
}
