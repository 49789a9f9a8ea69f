//! Runtime shape check for fetched documents.
//!
//! Only the presence of both languages and of every required top-level
//! section is checked here. Field-level checks belong to the build-time
//! [`SchemaValidator`](crate::content::SchemaValidator), which runs before
//! content is published.

use crate::content::{is_truthy, BilingualDocument, LoadError, Section};
use crate::i18n::Language;
use serde_json::Value;
use tracing::warn;

/// Returns `true` when `content` is an object with `ja` and `en` trees that
/// each carry every required section.
pub fn validate_document(content: &Value) -> bool {
    let Some(root) = content.as_object() else {
        return false;
    };

    for language in Language::ALL {
        let Some(language_content) = root.get(language.code()).and_then(Value::as_object) else {
            return false;
        };

        for section in Section::REQUIRED {
            let present = language_content
                .get(section.as_str())
                .is_some_and(is_truthy);
            if !present {
                warn!("Missing section: {} in language: {}", section, language);
                return false;
            }
        }
    }

    true
}

/// Validate a parsed payload and turn it into a document.
pub fn parse_document(content: Value) -> Result<BilingualDocument, LoadError> {
    if !validate_document(&content) {
        return Err(LoadError::InvalidStructure);
    }

    Ok(serde_json::from_value(content)?)
}
