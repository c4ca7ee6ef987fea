//! Session storage and the injected session context
//!
//! `SessionStore` is the raw persistence seam (the browser-storage analog);
//! `SessionContext` layers the expiry policy on top and is what the rest of
//! the system holds. Every token read goes through the policy: an expired
//! session is cleared in place and reported as absent.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::SessionError;
use crate::expiry::{ExpiryPolicy, FixedTtl};
use crate::user::UserProfile;

/// The persisted authentication state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSession {
    /// Opaque bearer token issued by the backend
    pub token: String,
    /// Profile of the signed-in user
    pub user: UserProfile,
    /// When the token was stored; drives client-side expiry
    pub created_at: DateTime<Utc>,
}

impl AuthSession {
    pub fn new(token: impl Into<String>, user: UserProfile) -> Self {
        Self {
            token: token.into(),
            user,
            created_at: Utc::now(),
        }
    }
}

/// Raw session persistence with explicit get/set/clear semantics
pub trait SessionStore: Send + Sync + 'static {
    /// Loads the stored session, if any
    fn load(&self) -> Result<Option<AuthSession>, SessionError>;

    /// Replaces the stored session
    fn save(&self, session: &AuthSession) -> Result<(), SessionError>;

    /// Removes the stored session
    fn clear(&self) -> Result<(), SessionError>;
}

/// In-memory store; the default for tests and embedded use
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    inner: Mutex<Option<AuthSession>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for InMemorySessionStore {
    fn load(&self) -> Result<Option<AuthSession>, SessionError> {
        let guard = self
            .inner
            .lock()
            .map_err(|_| SessionError::storage("session store poisoned"))?;
        Ok(guard.clone())
    }

    fn save(&self, session: &AuthSession) -> Result<(), SessionError> {
        let mut guard = self
            .inner
            .lock()
            .map_err(|_| SessionError::storage("session store poisoned"))?;
        *guard = Some(session.clone());
        Ok(())
    }

    fn clear(&self) -> Result<(), SessionError> {
        let mut guard = self
            .inner
            .lock()
            .map_err(|_| SessionError::storage("session store poisoned"))?;
        *guard = None;
        Ok(())
    }
}

/// JSON-file-backed store, the desktop analog of browser local storage
#[derive(Debug)]
pub struct JsonFileSessionStore {
    path: PathBuf,
}

impl JsonFileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl SessionStore for JsonFileSessionStore {
    fn load(&self) -> Result<Option<AuthSession>, SessionError> {
        match std::fs::read(&self.path) {
            Ok(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, session: &AuthSession) -> Result<(), SessionError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let bytes = serde_json::to_vec_pretty(session)?;
        std::fs::write(&self.path, bytes)?;
        Ok(())
    }

    fn clear(&self) -> Result<(), SessionError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// The injected session context: store plus expiry policy
///
/// This is what API gateways and application services receive. It is cheap
/// to clone and safe to share.
#[derive(Clone)]
pub struct SessionContext {
    store: Arc<dyn SessionStore>,
    policy: Arc<dyn ExpiryPolicy>,
}

impl SessionContext {
    pub fn new(store: Arc<dyn SessionStore>, policy: Arc<dyn ExpiryPolicy>) -> Self {
        Self { store, policy }
    }

    /// In-memory context with the standard 24-hour expiry
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(InMemorySessionStore::new()),
            Arc::new(FixedTtl::twenty_four_hours()),
        )
    }

    /// Returns the current session, applying the expiry policy
    ///
    /// An expired session is cleared and `None` is returned, so a single
    /// read is enough to both check and enforce the cutoff.
    pub fn get(&self) -> Result<Option<AuthSession>, SessionError> {
        let Some(session) = self.store.load()? else {
            return Ok(None);
        };

        if self.policy.is_expired(session.created_at, Utc::now()) {
            tracing::info!(uid = %session.user.uid, "stored token expired, clearing session");
            self.store.clear()?;
            return Ok(None);
        }

        Ok(Some(session))
    }

    /// Returns the bearer token if a live session exists
    pub fn token(&self) -> Result<Option<String>, SessionError> {
        Ok(self.get()?.map(|s| s.token))
    }

    /// Returns the signed-in user if a live session exists
    pub fn current_user(&self) -> Result<Option<UserProfile>, SessionError> {
        Ok(self.get()?.map(|s| s.user))
    }

    /// Stores a new session, stamping the creation time
    pub fn set(&self, token: impl Into<String>, user: UserProfile) -> Result<AuthSession, SessionError> {
        let session = AuthSession::new(token, user);
        self.store.save(&session)?;
        Ok(session)
    }

    /// Refreshes the stored profile without resetting the expiry clock
    pub fn update_user(&self, user: UserProfile) -> Result<(), SessionError> {
        if let Some(mut session) = self.store.load()? {
            session.user = user;
            self.store.save(&session)?;
        }
        Ok(())
    }

    /// Clears the stored session
    pub fn clear(&self) -> Result<(), SessionError> {
        self.store.clear()
    }

    /// True if a live (non-expired) session exists
    pub fn is_authenticated(&self) -> Result<bool, SessionError> {
        Ok(self.get()?.is_some())
    }

    /// When the current session will expire, if one exists
    pub fn expires_at(&self) -> Result<Option<DateTime<Utc>>, SessionError> {
        let Some(session) = self.get()? else {
            return Ok(None);
        };
        Ok(self.policy.expires_at(session.created_at))
    }
}
