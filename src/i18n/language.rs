//! Language type: validated representation of one of the site's languages.
//!
//! A `Language` can only be built from a code known to the registry, so every
//! value is either Japanese or English.

use crate::i18n::{LanguageConfig, LanguageRegistry};
use anyhow::{bail, Result};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// A validated language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub struct Language {
    /// ISO 639-1 language code ("ja" or "en")
    code: &'static str,
}

impl Language {
    pub const JAPANESE: Language = Language { code: "ja" };

    pub const ENGLISH: Language = Language { code: "en" };

    /// Both languages in document order (`ja` then `en`).
    pub const ALL: [Language; 2] = [Language::JAPANESE, Language::ENGLISH];

    /// Create a Language from a language code string.
    ///
    /// # Returns
    /// * `Ok(Language)` if the code is registered
    /// * `Err` if the code is unknown
    pub fn from_code(code: &str) -> Result<Language> {
        match LanguageRegistry::get().get_by_code(code) {
            Some(config) => Ok(Language { code: config.code }),
            None => bail!("Unknown language code: '{}'", code),
        }
    }

    /// The language selected before the user makes any choice (Japanese).
    pub fn default_language() -> Language {
        Language {
            code: LanguageRegistry::get().default_language().code,
        }
    }

    /// The other language: `ja` ↔ `en`.
    pub fn toggled(self) -> Language {
        if self == Language::JAPANESE {
            Language::ENGLISH
        } else {
            Language::JAPANESE
        }
    }

    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Get the full language configuration from the registry.
    ///
    /// # Panics
    /// Panics if the code is not in the registry, which cannot happen for a
    /// value built through `from_code` or the constants.
    pub fn config(&self) -> &'static LanguageConfig {
        LanguageRegistry::get()
            .get_by_code(self.code)
            .expect("Language code should always be valid")
    }

    pub fn name(&self) -> &'static str {
        self.config().name
    }

    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    /// Label for the toggle control while this language is active.
    pub fn toggle_label(&self) -> &'static str {
        self.config().toggle_label
    }

    /// CSS font class for text rendered in this language.
    pub fn font_class(&self) -> &'static str {
        self.config().font_class
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::default_language()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code)
    }
}

impl std::str::FromStr for Language {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Language::from_code(s)
    }
}

impl<'de> Deserialize<'de> for Language {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let code = String::deserialize(deserializer)?;
        Language::from_code(&code).map_err(serde::de::Error::custom)
    }
}

impl From<Language> for String {
    fn from(language: Language) -> Self {
        language.code.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // ==================== Constant Tests ====================

    #[test]
    fn test_japanese_constant() {
        let japanese = Language::JAPANESE;
        assert_eq!(japanese.code(), "ja");
        assert_eq!(japanese.name(), "Japanese");
        assert_eq!(japanese.native_name(), "日本語");
    }

    #[test]
    fn test_english_constant() {
        let english = Language::ENGLISH;
        assert_eq!(english.code(), "en");
        assert_eq!(english.name(), "English");
    }

    // ==================== from_code Tests ====================

    #[test]
    fn test_from_code_japanese() {
        let language = Language::from_code("ja").expect("Should succeed");
        assert_eq!(language, Language::JAPANESE);
    }

    #[test]
    fn test_from_code_english() {
        let language = Language::from_code("en").expect("Should succeed");
        assert_eq!(language, Language::ENGLISH);
    }

    #[test]
    fn test_from_code_invalid() {
        let result = Language::from_code("fr");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Unknown"));
    }

    #[test]
    fn test_from_code_empty() {
        assert!(Language::from_code("").is_err());
    }

    #[test]
    fn test_from_str() {
        let language: Language = "en".parse().expect("Should parse");
        assert_eq!(language, Language::ENGLISH);
    }

    // ==================== Default / Toggle Tests ====================

    #[test]
    fn test_default_is_japanese() {
        assert_eq!(Language::default(), Language::JAPANESE);
    }

    #[test]
    fn test_toggled_flips_between_languages() {
        assert_eq!(Language::JAPANESE.toggled(), Language::ENGLISH);
        assert_eq!(Language::ENGLISH.toggled(), Language::JAPANESE);
    }

    #[test]
    fn test_toggle_label_names_the_other_language() {
        assert_eq!(Language::JAPANESE.toggle_label(), "English");
        assert_eq!(Language::ENGLISH.toggle_label(), "日本語");
    }

    #[test]
    fn test_font_class_per_language() {
        assert_eq!(Language::ENGLISH.font_class(), "font-montserrat");
        assert_eq!(Language::JAPANESE.font_class(), "font-kosugi");
    }

    // ==================== Serde Tests ====================

    #[test]
    fn test_serializes_as_code() {
        let json = serde_json::to_string(&Language::ENGLISH).expect("serialize");
        assert_eq!(json, "\"en\"");
    }

    #[test]
    fn test_deserializes_from_code() {
        let language: Language = serde_json::from_str("\"ja\"").expect("deserialize");
        assert_eq!(language, Language::JAPANESE);
    }

    #[test]
    fn test_deserializes_from_owned_buffer() {
        let raw = format!("{{\"language\":\"{}\"}}", "en");
        let value: std::collections::HashMap<String, Language> =
            serde_json::from_str(&raw).expect("deserialize");
        drop(raw);
        assert_eq!(value["language"], Language::ENGLISH);
    }

    #[test]
    fn test_deserialize_rejects_unknown_code() {
        let result: std::result::Result<Language, _> = serde_json::from_str("\"de\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_display_is_code() {
        assert_eq!(Language::JAPANESE.to_string(), "ja");
    }

    proptest! {
        #[test]
        fn prop_toggle_parity(flips in 0usize..64) {
            let mut language = Language::JAPANESE;
            for _ in 0..flips {
                language = language.toggled();
            }
            let expected = if flips % 2 == 0 { Language::JAPANESE } else { Language::ENGLISH };
            prop_assert_eq!(language, expected);
        }
    }
}
