//! Internationalization for Trippo
//!
//! This crate knows which UI languages the client ships and negotiates the
//! startup language from the saved choice and the device locale. Message
//! catalogs themselves are owned by the UI shell.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod lang;

pub use lang::{negotiate, resolve_startup_language, Language, DEFAULT_LANGUAGE, SUPPORTED_LANGUAGES};
