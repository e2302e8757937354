//! Durable session persistence
//!
//! The session (bearer token plus optional user profile) is stored in the
//! operating system's native credential store (Keychain on macOS, Secret
//! Service on Linux, Windows Credential Manager on Windows), serialized to
//! JSON under a fixed service/account pair. Reading it back at startup is
//! what lets a login survive between invocations.
//!
//! The [`SessionStore`] trait is the seam between the state store and the
//! platform: production code uses [`KeyringSessionStore`], tests use
//! [`MemorySessionStore`].

use std::sync::{Arc, Mutex};

use crate::error::{PunchcardError, Result};
use crate::models::Session;

/// Keyring service name under which the session is stored
const SERVICE: &str = "punchcard";

/// Keyring account name for the session entry
const ACCOUNT: &str = "session";

/// Backend for persisting the session between invocations
///
/// Implementations must treat a missing entry as `Ok(None)` on load and as
/// a no-op on delete, so callers can distinguish "not logged in yet" from a
/// genuine storage error.
pub trait SessionStore: Send {
    /// Persists the session, replacing any previously stored one
    fn save(&self, session: &Session) -> Result<()>;

    /// Loads the stored session, or `Ok(None)` when none exists
    fn load(&self) -> Result<Option<Session>>;

    /// Deletes the stored session; a no-op when none exists
    fn delete(&self) -> Result<()>;
}

/// Session storage backed by the OS native keyring
///
/// # Examples
///
/// ```no_run
/// use punchcard::models::Session;
/// use punchcard::session::{KeyringSessionStore, SessionStore};
///
/// # fn example() -> punchcard::error::Result<()> {
/// let store = KeyringSessionStore::new();
/// store.save(&Session::with_token("my_token"))?;
/// let loaded = store.load()?;
/// assert!(loaded.is_some());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct KeyringSessionStore;

impl KeyringSessionStore {
    /// Creates a new keyring-backed session store
    pub fn new() -> Self {
        Self
    }

    fn entry() -> Result<keyring::Entry> {
        keyring::Entry::new(SERVICE, ACCOUNT)
            .map_err(PunchcardError::Keyring)
            .map_err(Into::into)
    }
}

impl SessionStore for KeyringSessionStore {
    fn save(&self, session: &Session) -> Result<()> {
        let json_str = serde_json::to_string(session)?;
        let entry = Self::entry()?;
        entry
            .set_password(&json_str)
            .map_err(PunchcardError::Keyring)?;
        tracing::debug!("Session persisted to keyring");
        Ok(())
    }

    fn load(&self) -> Result<Option<Session>> {
        let entry = Self::entry()?;
        match entry.get_password() {
            Ok(json_str) => {
                let session: Session = serde_json::from_str(&json_str)?;
                Ok(Some(session))
            }
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(e) => Err(PunchcardError::Keyring(e).into()),
        }
    }

    fn delete(&self) -> Result<()> {
        let entry = Self::entry()?;
        match entry.delete_password() {
            Ok(()) => {
                tracing::debug!("Session removed from keyring");
                Ok(())
            }
            Err(keyring::Error::NoEntry) => Ok(()),
            Err(e) => Err(PunchcardError::Keyring(e).into()),
        }
    }
}

/// In-memory session storage
///
/// Holds the session behind a shared handle so a test can keep a clone and
/// observe what the application stored. Not durable.
#[derive(Debug, Clone, Default)]
pub struct MemorySessionStore {
    inner: Arc<Mutex<Option<Session>>>,
}

impl MemorySessionStore {
    /// Creates an empty in-memory session store
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn save(&self, session: &Session) -> Result<()> {
        let mut guard = self
            .inner
            .lock()
            .map_err(|_| PunchcardError::Session("session store lock poisoned".to_string()))?;
        *guard = Some(session.clone());
        Ok(())
    }

    fn load(&self) -> Result<Option<Session>> {
        let guard = self
            .inner
            .lock()
            .map_err(|_| PunchcardError::Session("session store lock poisoned".to_string()))?;
        Ok(guard.clone())
    }

    fn delete(&self) -> Result<()> {
        let mut guard = self
            .inner
            .lock()
            .map_err(|_| PunchcardError::Session("session store lock poisoned".to_string()))?;
        *guard = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_starts_empty() {
        let store = MemorySessionStore::new();
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_memory_store_save_and_load() {
        let store = MemorySessionStore::new();
        store.save(&Session::with_token("tok")).unwrap();
        let loaded = store.load().unwrap().expect("session should be present");
        assert_eq!(loaded.token.as_deref(), Some("tok"));
    }

    #[test]
    fn test_memory_store_delete_is_idempotent() {
        let store = MemorySessionStore::new();
        store.delete().unwrap();
        store.save(&Session::with_token("tok")).unwrap();
        store.delete().unwrap();
        store.delete().unwrap();
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_memory_store_clones_share_state() {
        let store = MemorySessionStore::new();
        let observer = store.clone();
        store.save(&Session::with_token("shared")).unwrap();
        let seen = observer.load().unwrap().expect("clone sees the session");
        assert_eq!(seen.token.as_deref(), Some("shared"));
    }

    // -----------------------------------------------------------------------
    // Keyring integration tests  (require system keyring; skipped in CI)
    // -----------------------------------------------------------------------

    #[test]
    #[serial_test::serial]
    #[ignore = "requires system keyring"]
    fn test_keyring_save_load_delete_roundtrip() {
        let store = KeyringSessionStore::new();
        let session = Session::with_token("integration_token");

        store.save(&session).expect("save");
        let loaded = store.load().expect("load").expect("session present");
        assert_eq!(loaded.token.as_deref(), Some("integration_token"));

        store.delete().expect("delete");
        assert!(store.load().expect("load after delete").is_none());
    }

    #[test]
    #[serial_test::serial]
    #[ignore = "requires system keyring"]
    fn test_keyring_delete_is_idempotent() {
        let store = KeyringSessionStore::new();
        store.delete().expect("first delete");
        store.delete().expect("second delete is no-op");
    }
}
