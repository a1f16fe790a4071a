//! Persisted device settings
//!
//! Exactly two settings survive restarts: the admin-mode flag and the
//! selected UI language code. Everything else the client shows is derived
//! from the remote API or lives only as long as a screen.

use crate::kv::{KvError, KvStore, Result};
use serde::{Deserialize, Serialize};

/// Storage key of the admin-mode flag
pub const IS_ADMIN_KEY: &str = "isAdmin";

/// Storage key of the selected UI language code
pub const LANGUAGE_KEY: &str = "language";

/// Which navigation tree the application shows
///
/// Resolved once at startup and handed down through the application
/// context; flipping the flag takes effect on the next launch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppMode {
    /// Traveller-facing screens
    #[default]
    Client,
    /// Organizer administration screens
    Admin,
}

impl AppMode {
    /// Mode for a stored admin flag
    pub fn from_admin_flag(is_admin: bool) -> Self {
        if is_admin {
            AppMode::Admin
        } else {
            AppMode::Client
        }
    }

    /// Whether this is the admin tree
    pub fn is_admin(&self) -> bool {
        matches!(self, AppMode::Admin)
    }
}

/// Typed access to the persisted settings
#[derive(Clone)]
pub struct SettingsStore {
    kv: KvStore,
}

impl SettingsStore {
    /// Create a settings store over a key-value store
    pub fn new(kv: KvStore) -> Self {
        Self { kv }
    }

    /// Read a setting, treating an undecodable value as unset
    fn read<T>(&self, key: &str) -> Result<Option<T>>
    where
        T: serde::de::DeserializeOwned,
    {
        match self.kv.get(key) {
            Err(KvError::Serialization(err)) => {
                tracing::warn!(key, "Ignoring unreadable setting: {}", err);
                Ok(None)
            }
            other => other,
        }
    }

    /// Stored admin flag (false when never set)
    pub fn is_admin(&self) -> Result<bool> {
        Ok(self.read(IS_ADMIN_KEY)?.unwrap_or(false))
    }

    /// Persist the admin flag
    pub fn set_admin(&self, is_admin: bool) -> Result<()> {
        self.kv.set(IS_ADMIN_KEY, &is_admin)
    }

    /// Flip the admin flag and return the new value
    pub fn toggle_admin(&self) -> Result<bool> {
        let next = !self.is_admin()?;
        self.set_admin(next)?;
        tracing::info!(is_admin = next, "admin mode toggled");
        Ok(next)
    }

    /// Application mode implied by the stored flag
    pub fn app_mode(&self) -> Result<AppMode> {
        Ok(AppMode::from_admin_flag(self.is_admin()?))
    }

    /// Selected UI language code, if the user picked one
    pub fn language(&self) -> Result<Option<String>> {
        self.read(LANGUAGE_KEY)
    }

    /// Persist the selected UI language code
    pub fn set_language(&self, code: &str) -> Result<()> {
        self.kv.set(LANGUAGE_KEY, code)
    }

    /// Forget the selected language, reporting whether one was stored
    pub fn clear_language(&self) -> Result<bool> {
        self.kv.remove(LANGUAGE_KEY)
    }

    /// Underlying key-value store
    pub fn kv(&self) -> &KvStore {
        &self.kv
    }
}
