//! Login gate in front of the catalog views.
//!
//! The gate only remembers a boolean flag through a [`SessionStorage`] port.
//! It is a convenience lock for a group of friends, not a security boundary.

pub mod storage;

pub use storage::{FileStorage, MemoryStorage, SessionStorage};

use crate::error::SessionError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Username and password pair
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl Default for Credentials {
    fn default() -> Self {
        Self::new("admin", "admin")
    }
}

pub struct Session<S: SessionStorage> {
    storage: S,
    expected: Credentials,
    authenticated: bool,
    signed_in_at: Option<DateTime<Utc>>,
}

impl<S: SessionStorage> Session<S> {
    /// Restore a session from whatever flag the storage holds
    pub fn restore(storage: S) -> Result<Self, SessionError> {
        Self::with_credentials(storage, Credentials::default())
    }

    pub fn with_credentials(storage: S, expected: Credentials) -> Result<Self, SessionError> {
        let authenticated = storage.get()?;
        Ok(Self {
            storage,
            expected,
            authenticated,
            signed_in_at: None,
        })
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// Set only for a login made through this session object
    pub fn signed_in_at(&self) -> Option<DateTime<Utc>> {
        self.signed_in_at
    }

    pub fn login(&mut self, credentials: &Credentials) -> Result<(), SessionError> {
        if *credentials != self.expected {
            warn!("Rejected login for '{}'", credentials.username);
            return Err(SessionError::InvalidCredentials);
        }

        self.storage.set(true)?;
        self.authenticated = true;
        self.signed_in_at = Some(Utc::now());
        info!("Welcome back, {}!", credentials.username);
        Ok(())
    }

    pub fn logout(&mut self) -> Result<(), SessionError> {
        self.storage.clear()?;
        self.authenticated = false;
        self.signed_in_at = None;
        info!("Signed out");
        Ok(())
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}
