//! Consumer-facing views that combine the language selection with the
//! content service.

use crate::content::{ContentError, ContentService, ContentSource, LanguageContent, Section};
use crate::i18n::{use_language, ContextError, Language, LanguageContext};
use serde_json::Value;
use std::sync::Arc;

/// Content for the current language, plus the loading outcome.
#[derive(Debug, Clone)]
pub struct ContentSnapshot {
    pub language: Language,
    pub content: LanguageContent,
    pub error: Option<ContentError>,
    pub using_fallback: bool,
}

/// One section for the current language, plus the loading outcome.
#[derive(Debug, Clone)]
pub struct SectionSnapshot {
    pub language: Language,
    pub section: Section,
    /// Never missing: see [`ContentService::section_or_default`]
    pub content: Value,
    /// Recorded error attributed to this section
    pub error: Option<ContentError>,
}

pub struct ContentView<S> {
    language: LanguageContext,
    service: Arc<ContentService<S>>,
}

impl<S> Clone for ContentView<S> {
    fn clone(&self) -> Self {
        Self {
            language: self.language.clone(),
            service: self.service.clone(),
        }
    }
}

impl<S: ContentSource> ContentView<S> {
    /// Build a view. Fails with [`ContextError::MissingProvider`] when no
    /// language context is supplied.
    pub fn new(
        language: Option<&LanguageContext>,
        service: Arc<ContentService<S>>,
    ) -> Result<Self, ContextError> {
        Ok(Self {
            language: use_language(language)?,
            service,
        })
    }

    pub fn language(&self) -> &LanguageContext {
        &self.language
    }

    /// Content for whatever language is selected right now. Switching
    /// languages is served from the cache.
    pub async fn content(&self) -> ContentSnapshot {
        let language = self.language.language();
        let content = self.service.content_for_language(language).await;

        ContentSnapshot {
            language,
            content,
            error: self.service.content_error(),
            using_fallback: self.service.is_using_fallback(),
        }
    }

    pub async fn section(&self, section: Section) -> SectionSnapshot {
        let language = self.language.language();
        let content = self.service.section_or_default(section, language).await;

        SectionSnapshot {
            language,
            section,
            content,
            error: self
                .service
                .content_error()
                .map(|error| error.for_section(section.as_str())),
        }
    }
}
