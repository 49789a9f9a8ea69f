//! Durable storage for the user's language selection.
//!
//! Storage is best-effort: callers log failures and carry on with the
//! in-memory selection.

use crate::i18n::Language;
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Where a language selection is saved between sessions.
pub trait LanguagePersistence: Send + Sync {
    /// Read the saved selection. `Ok(None)` means nothing has been saved yet.
    fn load(&self) -> Result<Option<Language>>;

    fn save(&self, language: Language) -> Result<()>;
}

/// On-disk record of the selection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredLanguage {
    language: Language,
    updated_at: DateTime<Utc>,
}

/// Stores the selection as a small JSON file.
#[derive(Debug, Clone)]
pub struct FileLanguagePersistence {
    path: PathBuf,
}

impl FileLanguagePersistence {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LanguagePersistence for FileLanguagePersistence {
    fn load(&self) -> Result<Option<Language>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let raw = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read {}", self.path.display()))?;
        let stored: StoredLanguage = serde_json::from_str(&raw)
            .with_context(|| format!("Invalid language file {}", self.path.display()))?;

        Ok(Some(stored.language))
    }

    fn save(&self, language: Language) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
        }

        let stored = StoredLanguage {
            language,
            updated_at: Utc::now(),
        };
        let json = serde_json::to_string_pretty(&stored)?;
        std::fs::write(&self.path, json)
            .with_context(|| format!("Failed to write {}", self.path.display()))?;

        Ok(())
    }
}

/// Keeps the selection in memory only (tests, embedded use).
#[derive(Debug, Default)]
pub struct MemoryLanguagePersistence {
    saved: Mutex<Option<Language>>,
}

impl MemoryLanguagePersistence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_language(language: Language) -> Self {
        Self {
            saved: Mutex::new(Some(language)),
        }
    }
}

impl LanguagePersistence for MemoryLanguagePersistence {
    fn load(&self) -> Result<Option<Language>> {
        let saved = self
            .saved
            .lock()
            .map_err(|_| anyhow::anyhow!("language storage lock poisoned"))?;
        Ok(*saved)
    }

    fn save(&self, language: Language) -> Result<()> {
        let mut saved = self
            .saved
            .lock()
            .map_err(|_| anyhow::anyhow!("language storage lock poisoned"))?;
        *saved = Some(language);
        Ok(())
    }
}
