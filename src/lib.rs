//! Bilingual content service for the Kodomo Gakuen website.
//!
//! Loads the `{ja, en}` content document, validates its shape, caches it and
//! falls back to built-in copy on any failure. The active language is held in
//! a [`i18n::LanguageContext`] and projected onto the loaded document by the
//! query API in [`content`].

#![recursion_limit = "256"]

pub mod boundary;
pub mod config;
pub mod content;
pub mod i18n;
