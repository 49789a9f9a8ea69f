//! Content loader and query API.
//!
//! `ContentService` never fails: every load returns a usable document, and a
//! failed load leaves a [`ContentError`] behind describing what happened.

use crate::content::{
    fallback_document, is_truthy, parse_document, BilingualDocument, ContentError, ContentSource,
    ContentStore, LanguageContent, LoadError, Section,
};
use crate::i18n::Language;
use serde_json::{Map, Value};
use std::sync::Arc;
use tracing::{debug, error, info};

pub struct ContentService<S> {
    source: S,
    store: ContentStore,
}

impl<S: ContentSource> ContentService<S> {
    pub fn new(source: S) -> Self {
        Self::with_store(source, ContentStore::new())
    }

    pub fn with_store(source: S, store: ContentStore) -> Self {
        Self { source, store }
    }

    pub fn store(&self) -> &ContentStore {
        &self.store
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Return the cached document, or load it.
    ///
    /// The cache only answers when the last load succeeded. After a failure
    /// every call fetches again until one succeeds.
    pub async fn load_content(&self) -> Arc<BilingualDocument> {
        if let Some(document) = self.store.cached() {
            debug!("Content cache hit");
            return document;
        }

        match self.fetch_document().await {
            Ok(document) => {
                info!("Loaded content from {}", self.source.describe());
                let document = Arc::new(document);
                self.store.set(document.clone());
                document
            }
            Err(e) => {
                error!("Content loading failed, using fallback: {}", e);
                let fallback = fallback_document();
                self.store
                    .set_fallback(fallback.clone(), ContentError::fallback(&e));
                fallback
            }
        }
    }

    async fn fetch_document(&self) -> Result<BilingualDocument, LoadError> {
        let body = self.source.fetch().await?;
        let value: Value = serde_json::from_str(&body)?;
        parse_document(value)
    }

    /// One language's whole content tree.
    pub async fn content_for_language(&self, language: Language) -> LanguageContent {
        self.load_content().await.language(language).clone()
    }

    /// One section in one language, exactly as loaded. Optional page
    /// sections may be absent.
    pub async fn section_content(&self, section: Section, language: Language) -> Option<Value> {
        self.load_content()
            .await
            .section(section, language)
            .cloned()
    }

    /// One section in one language, never missing.
    ///
    /// Falls back per section: the loaded section if present, else the
    /// built-in fallback's, else an empty object.
    pub async fn section_or_default(&self, section: Section, language: Language) -> Value {
        let document = self.load_content().await;
        if let Some(value) = document.section(section, language).filter(|v| is_truthy(v)) {
            return value.clone();
        }

        debug!("Section {} missing in {}, using default", section, language);
        fallback_document()
            .section(section, language)
            .cloned()
            .unwrap_or_else(|| Value::Object(Map::new()))
    }

    /// Error from the most recent load attempt, if it failed.
    pub fn content_error(&self) -> Option<ContentError> {
        self.store.error()
    }

    pub fn is_using_fallback(&self) -> bool {
        self.store
            .error()
            .map(|error| error.fallback_used)
            .unwrap_or(false)
    }

    /// Drop the cached document and error so the next query fetches again.
    pub fn clear_content_cache(&self) {
        debug!("Content cache cleared");
        self.store.clear();
    }
}
