use crate::error::StorageError;
use crate::storage::KeyValueStore;

pub const SESSION_KEY: &str = "isAdmin";

/// Marker that an administrator is signed in on this browser.
///
/// Only the flag is handled here; how credentials are checked is up to the
/// login flow.
pub struct AdminSession<S: KeyValueStore> {
    storage: S,
}

impl<S: KeyValueStore> AdminSession<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn login(&self) -> Result<(), StorageError> {
        self.storage.set(SESSION_KEY, "true")
    }

    pub fn is_active(&self) -> Result<bool, StorageError> {
        Ok(self.storage.get(SESSION_KEY)?.as_deref() == Some("true"))
    }

    pub fn logout(&self) -> Result<(), StorageError> {
        log::debug!("clearing admin session flag");
        self.storage.remove(SESSION_KEY)
    }
}
