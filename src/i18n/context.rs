//! Shared language selection.
//!
//! A `LanguageContext` is cheap to clone; all clones observe the same
//! selection. Changing the language never reloads content, it only changes
//! which half of the loaded document consumers project.

use crate::i18n::{Language, LanguagePersistence};
use std::sync::{Arc, PoisonError, RwLock};
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ContextError {
    /// A consumer asked for the language without being given a context.
    #[error("useLanguage must be used within a LanguageProvider")]
    MissingProvider,
}

struct Shared {
    language: RwLock<Language>,
    persistence: Option<Arc<dyn LanguagePersistence>>,
}

#[derive(Clone)]
pub struct LanguageContext {
    shared: Arc<Shared>,
}

impl LanguageContext {
    /// New context on the default language (`ja`) with no durable storage.
    pub fn new() -> Self {
        Self::with_language(Language::default_language())
    }

    pub fn with_language(language: Language) -> Self {
        Self {
            shared: Arc::new(Shared {
                language: RwLock::new(language),
                persistence: None,
            }),
        }
    }

    /// New context restored from durable storage.
    ///
    /// Restoring is best-effort: a missing, unreadable or invalid record logs
    /// and falls back to the default language. Later changes are saved back
    /// to the same storage.
    pub fn restore(persistence: Arc<dyn LanguagePersistence>) -> Self {
        let language = match persistence.load() {
            Ok(Some(language)) => {
                debug!("Restored language selection: {}", language);
                language
            }
            Ok(None) => {
                debug!("No saved language selection, using default");
                Language::default_language()
            }
            Err(e) => {
                warn!("Could not restore language selection ({:#}), using default", e);
                Language::default_language()
            }
        };

        Self {
            shared: Arc::new(Shared {
                language: RwLock::new(language),
                persistence: Some(persistence),
            }),
        }
    }

    /// Currently selected language.
    pub fn language(&self) -> Language {
        *self
            .shared
            .language
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Flip between Japanese and English; returns the new language.
    pub fn toggle_language(&self) -> Language {
        let next = {
            let mut language = self
                .shared
                .language
                .write()
                .unwrap_or_else(PoisonError::into_inner);
            *language = language.toggled();
            *language
        };

        info!("Language toggled to {}", next);
        self.persist(next);
        next
    }

    /// Select a language explicitly. Selecting the active language is a no-op.
    pub fn set_language(&self, language: Language) {
        {
            let mut current = self
                .shared
                .language
                .write()
                .unwrap_or_else(PoisonError::into_inner);
            if *current == language {
                return;
            }
            *current = language;
        }

        info!("Language set to {}", language);
        self.persist(language);
    }

    fn persist(&self, language: Language) {
        if let Some(persistence) = &self.shared.persistence {
            if let Err(e) = persistence.save(language) {
                warn!("Could not save language selection: {:#}", e);
            }
        }
    }
}

impl Default for LanguageContext {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for LanguageContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LanguageContext")
            .field("language", &self.language())
            .field("persistent", &self.shared.persistence.is_some())
            .finish()
    }
}

/// Obtain the language context a consumer was wired with.
///
/// Fails fast with [`ContextError::MissingProvider`] when the consumer was
/// built outside any context.
pub fn use_language(context: Option<&LanguageContext>) -> Result<LanguageContext, ContextError> {
    context.cloned().ok_or(ContextError::MissingProvider)
}
