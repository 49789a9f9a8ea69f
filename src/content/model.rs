//! Bilingual document model.
//!
//! Documents are kept as JSON trees rather than typed structs: the runtime
//! check only requires the top-level sections, and fetched content must come
//! back out exactly as it went in. Typed views of individual sections live in
//! [`crate::content::sections`].

use crate::i18n::Language;
use anyhow::bail;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// A named top-level key within one language's content tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Navigation,
    Header,
    Announcement,
    Hero,
    AgeGroups,
    About,
    Blog,
    Footer,
    Fees,
    Menu,
    Programs,
    Activities,
    Forms,
    Enrolment,
    Privacy,
    Nyuuji,
    Youji,
    Star,
}

impl Section {
    /// Sections every language must carry for a document to be usable.
    pub const REQUIRED: [Section; 8] = [
        Section::Navigation,
        Section::Header,
        Section::Announcement,
        Section::Hero,
        Section::AgeGroups,
        Section::About,
        Section::Blog,
        Section::Footer,
    ];

    pub const ALL: [Section; 18] = [
        Section::Navigation,
        Section::Header,
        Section::Announcement,
        Section::Hero,
        Section::AgeGroups,
        Section::About,
        Section::Blog,
        Section::Footer,
        Section::Fees,
        Section::Menu,
        Section::Programs,
        Section::Activities,
        Section::Forms,
        Section::Enrolment,
        Section::Privacy,
        Section::Nyuuji,
        Section::Youji,
        Section::Star,
    ];

    /// Key used in the JSON document.
    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Navigation => "navigation",
            Section::Header => "header",
            Section::Announcement => "announcement",
            Section::Hero => "hero",
            Section::AgeGroups => "ageGroups",
            Section::About => "about",
            Section::Blog => "blog",
            Section::Footer => "footer",
            Section::Fees => "fees",
            Section::Menu => "menu",
            Section::Programs => "programs",
            Section::Activities => "activities",
            Section::Forms => "forms",
            Section::Enrolment => "enrolment",
            Section::Privacy => "privacy",
            Section::Nyuuji => "nyuuji",
            Section::Youji => "youji",
            Section::Star => "star",
        }
    }

    pub fn is_required(&self) -> bool {
        Section::REQUIRED.contains(self)
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Section {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match Section::ALL.iter().find(|section| section.as_str() == s) {
            Some(section) => Ok(*section),
            None => bail!("Unknown section: '{}'", s),
        }
    }
}

/// JavaScript-style truthiness, the presence test content checks use.
///
/// `null`, `false`, `0` and `""` count as absent; every array and object
/// (even empty) counts as present.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// One language's content tree: section name → nested JSON.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LanguageContent(Map<String, Value>);

impl LanguageContent {
    pub fn new(sections: Map<String, Value>) -> Self {
        Self(sections)
    }

    pub fn section(&self, section: Section) -> Option<&Value> {
        self.0.get(section.as_str())
    }

    /// Lookup by raw key, for sections not covered by [`Section`].
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn has_section(&self, section: Section) -> bool {
        self.section(section).is_some_and(is_truthy)
    }

    /// Deserialize a section into its typed view.
    pub fn typed_section<T: SectionContent>(&self) -> anyhow::Result<T> {
        match self.section(T::SECTION) {
            Some(value) => Ok(T::deserialize(value)?),
            None => bail!("Missing section: {}", T::SECTION),
        }
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

/// A typed view of one section.
pub trait SectionContent: DeserializeOwned {
    const SECTION: Section;
}

/// The complete `{ja, en}` document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BilingualDocument {
    pub ja: LanguageContent,
    pub en: LanguageContent,
}

impl BilingualDocument {
    pub fn language(&self, language: Language) -> &LanguageContent {
        if language == Language::ENGLISH {
            &self.en
        } else {
            &self.ja
        }
    }

    pub fn section(&self, section: Section, language: Language) -> Option<&Value> {
        self.language(language).section(section)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    fn sample_document() -> BilingualDocument {
        serde_json::from_value(json!({
            "ja": { "navigation": { "home": "ホーム" } },
            "en": { "navigation": { "home": "Home" } }
        }))
        .expect("sample document")
    }

    // ==================== Section Tests ====================

    #[test]
    fn test_section_names_are_camel_case() {
        assert_eq!(Section::AgeGroups.as_str(), "ageGroups");
        assert_eq!(Section::Enrolment.to_string(), "enrolment");
    }

    #[test]
    fn test_section_from_str_round_trips_every_section() {
        for section in Section::ALL {
            let parsed: Section = section.as_str().parse().expect("known section");
            assert_eq!(parsed, section);
        }
    }

    #[test]
    fn test_section_from_str_unknown() {
        let result = "gallery".parse::<Section>();
        assert!(result.unwrap_err().to_string().contains("Unknown section"));
    }

    #[test]
    fn test_required_sections() {
        assert!(Section::Announcement.is_required());
        assert!(Section::Footer.is_required());
        assert!(!Section::Fees.is_required());
        assert!(!Section::Star.is_required());
    }

    // ==================== Truthiness Tests ====================

    #[test]
    fn test_is_truthy() {
        assert!(!is_truthy(&Value::Null));
        assert!(!is_truthy(&json!(false)));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!("")));
        assert!(is_truthy(&json!(true)));
        assert!(is_truthy(&json!(1)));
        assert!(is_truthy(&json!("x")));
        assert!(is_truthy(&json!([])));
        assert!(is_truthy(&json!({})));
    }

    proptest! {
        #[test]
        fn prop_non_empty_strings_are_truthy(s in ".+") {
            prop_assert!(is_truthy(&Value::String(s)));
        }

        #[test]
        fn prop_non_zero_integers_are_truthy(n in any::<i64>().prop_filter("non-zero", |n| *n != 0)) {
            prop_assert!(is_truthy(&json!(n)));
        }
    }

    // ==================== Document Tests ====================

    #[test]
    fn test_language_slicing() {
        let document = sample_document();

        let ja = document.section(Section::Navigation, Language::JAPANESE).expect("ja");
        let en = document.section(Section::Navigation, Language::ENGLISH).expect("en");
        assert_eq!(ja["home"], "ホーム");
        assert_eq!(en["home"], "Home");
    }

    #[test]
    fn test_missing_section_is_none() {
        let document = sample_document();
        assert!(document.section(Section::Fees, Language::JAPANESE).is_none());
        assert!(!document.ja.has_section(Section::Fees));
    }

    #[test]
    fn test_has_section_uses_truthiness() {
        let content: LanguageContent =
            serde_json::from_value(json!({ "blog": "", "about": {} })).expect("content");
        assert!(!content.has_section(Section::Blog));
        assert!(content.has_section(Section::About));
    }

    #[test]
    fn test_language_content_is_transparent() {
        let document = sample_document();
        let value = serde_json::to_value(&document.ja).expect("serialize");
        assert_eq!(value, json!({ "navigation": { "home": "ホーム" } }));
    }
}
