//! Storage layer for Trippo
//!
//! This crate provides the on-device key-value store and the typed
//! settings (admin mode, UI language) persisted in it.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod kv;
pub mod settings;

pub use kv::{KvConfig, KvError, KvStore};
pub use settings::{AppMode, SettingsStore, IS_ADMIN_KEY, LANGUAGE_KEY};
