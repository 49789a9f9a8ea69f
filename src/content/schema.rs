//! Build-time content validation.
//!
//! Much stricter than the runtime check: every field the site templates rely
//! on must be present before content is published. Validation stops at the
//! first violation, checking `ja` then `en`, sections in declaration order.

use crate::content::is_truthy;
use crate::i18n::Language;
use serde_json::Value;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("Content file not found: {0}")]
    FileNotFound(String),

    #[error("Could not read content file {path}: {message}")]
    Unreadable { path: String, message: String },

    #[error("Invalid JSON in content file: {0}")]
    InvalidJson(String),

    #[error("Content must be an object")]
    NotAnObject,

    #[error("Missing language section: {0}")]
    MissingLanguage(Language),

    #[error("Missing section \"{section}\" in {language} content")]
    MissingSection {
        section: &'static str,
        language: Language,
    },

    #[error("Missing navigation field \"{field}\" in {language}")]
    MissingNavigationField {
        field: &'static str,
        language: Language,
    },

    #[error("Missing navigation submenu \"{submenu}\" in {language}")]
    MissingSubmenu {
        submenu: &'static str,
        language: Language,
    },

    #[error("Missing navigation submenu item \"{item}\" in {submenu} for {language}")]
    MissingSubmenuItem {
        item: &'static str,
        submenu: &'static str,
        language: Language,
    },

    #[error("Missing header field \"{field}\" in {language}")]
    MissingHeaderField {
        field: &'static str,
        language: Language,
    },

    #[error("Missing title for hero.pages.{page} in {language}")]
    MissingHeroPageTitle {
        page: &'static str,
        language: Language,
    },

    #[error("Missing age group \"{group}\" in {language}")]
    MissingAgeGroup {
        group: &'static str,
        language: Language,
    },

    #[error("Invalid footer.quickLinks structure in {0}")]
    InvalidQuickLinks(Language),

    /// Any other missing field, identified by its dotted path
    #[error("Missing {path} in {language}")]
    MissingField { path: String, language: Language },
}

/// Sections checked at build time. `announcement` is only checked at runtime.
const REQUIRED_SECTIONS: [&str; 7] = [
    "navigation",
    "header",
    "hero",
    "ageGroups",
    "about",
    "blog",
    "footer",
];

const NAVIGATION_FIELDS: [&str; 7] = [
    "home",
    "information",
    "informationSubmenu",
    "forms",
    "classes",
    "classesSubmenu",
    "activities",
];

const NAVIGATION_SUBMENUS: [(&str, &[&str]); 2] = [
    (
        "informationSubmenu",
        &["about", "fees", "privacy", "menu", "programs", "enrolment"],
    ),
    ("classesSubmenu", &["nyuuji", "youji", "star"]),
];

const HEADER_FIELDS: [&str; 3] = ["email", "languageToggle", "siteName"];

const HERO_HOMEPAGE_FIELDS: [&str; 4] = ["title", "subtitle", "buttonText", "buttonLink"];

const HERO_PAGES: [&str; 11] = [
    "about",
    "fees",
    "privacy",
    "menu",
    "programs",
    "enrolment",
    "forms",
    "nyuuji",
    "youji",
    "star",
    "activities",
];

const AGE_GROUPS: [&str; 3] = ["nyuuji", "youji", "star"];

const AGE_GROUP_FIELDS: [&str; 4] = ["name", "ageRange", "description", "image"];

const ABOUT_FIELDS: [&str; 3] = ["sectionTitle", "description", "philosophy"];

const BLOG_FIELDS: [&str; 2] = ["sectionTitle", "viewAllText"];

const FOOTER_FIELDS: [&str; 4] = ["quickLinks", "contact", "social", "location"];

const FOOTER_CONTACT_FIELDS: [&str; 4] = ["title", "phone", "email", "address"];

/// Present-and-truthy field lookup; non-objects have no fields.
fn field<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    value.get(key).filter(|v| is_truthy(v))
}

/// Validator for the published content document.
pub struct SchemaValidator;

impl SchemaValidator {
    /// Read and parse the content file.
    pub fn load(path: &Path) -> Result<Value, SchemaError> {
        if !path.exists() {
            return Err(SchemaError::FileNotFound(path.display().to_string()));
        }

        let raw = std::fs::read_to_string(path).map_err(|e| SchemaError::Unreadable {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        serde_json::from_str(&raw).map_err(|e| SchemaError::InvalidJson(e.to_string()))
    }

    /// Validate a whole document.
    pub fn validate(content: &Value) -> Result<(), SchemaError> {
        Self::validate_with(content, |_| {})
    }

    /// Validate a whole document, calling `on_language` before each language
    /// is checked.
    pub fn validate_with<F>(content: &Value, mut on_language: F) -> Result<(), SchemaError>
    where
        F: FnMut(Language),
    {
        // Arrays get past this check and fail on the missing `ja` key
        if !content.is_object() && !content.is_array() {
            return Err(SchemaError::NotAnObject);
        }

        for language in Language::ALL {
            let language_content =
                field(content, language.code()).ok_or(SchemaError::MissingLanguage(language))?;

            on_language(language);
            Self::validate_language(language_content, language)?;
        }

        Ok(())
    }

    /// Validate one language's content tree.
    pub fn validate_language(content: &Value, language: Language) -> Result<(), SchemaError> {
        for section in REQUIRED_SECTIONS {
            if field(content, section).is_none() {
                return Err(SchemaError::MissingSection { section, language });
            }
        }

        Self::validate_navigation(&content["navigation"], language)?;
        Self::validate_header(&content["header"], language)?;
        Self::validate_hero(&content["hero"], language)?;
        Self::validate_age_groups(&content["ageGroups"], language)?;
        Self::validate_fields(&content["about"], "about", &ABOUT_FIELDS, language)?;
        Self::validate_fields(&content["blog"], "blog", &BLOG_FIELDS, language)?;
        Self::validate_footer(&content["footer"], language)?;

        Ok(())
    }

    fn validate_navigation(navigation: &Value, language: Language) -> Result<(), SchemaError> {
        for field_name in NAVIGATION_FIELDS {
            if field(navigation, field_name).is_none() {
                return Err(SchemaError::MissingNavigationField {
                    field: field_name,
                    language,
                });
            }
        }

        for (submenu_key, items) in NAVIGATION_SUBMENUS {
            let submenu = field(navigation, submenu_key).ok_or(SchemaError::MissingSubmenu {
                submenu: submenu_key,
                language,
            })?;

            for item in items.iter().copied() {
                if field(submenu, item).is_none() {
                    return Err(SchemaError::MissingSubmenuItem {
                        item,
                        submenu: submenu_key,
                        language,
                    });
                }
            }
        }

        Ok(())
    }

    fn validate_header(header: &Value, language: Language) -> Result<(), SchemaError> {
        for field_name in HEADER_FIELDS {
            if field(header, field_name).is_none() {
                return Err(SchemaError::MissingHeaderField {
                    field: field_name,
                    language,
                });
            }
        }

        Ok(())
    }

    fn validate_hero(hero: &Value, language: Language) -> Result<(), SchemaError> {
        let homepage = field(hero, "homepage").ok_or_else(|| SchemaError::MissingField {
            path: "hero.homepage".to_string(),
            language,
        })?;
        Self::validate_fields(homepage, "hero.homepage", &HERO_HOMEPAGE_FIELDS, language)?;

        let pages = field(hero, "pages").ok_or_else(|| SchemaError::MissingField {
            path: "hero.pages".to_string(),
            language,
        })?;

        for page in HERO_PAGES {
            let page_hero = field(pages, page).ok_or_else(|| SchemaError::MissingField {
                path: format!("hero.pages.{}", page),
                language,
            })?;

            if field(page_hero, "title").is_none() {
                return Err(SchemaError::MissingHeroPageTitle { page, language });
            }
        }

        Ok(())
    }

    fn validate_age_groups(age_groups: &Value, language: Language) -> Result<(), SchemaError> {
        if field(age_groups, "sectionTitle").is_none() {
            return Err(SchemaError::MissingField {
                path: "ageGroups.sectionTitle".to_string(),
                language,
            });
        }

        for group in AGE_GROUPS {
            let group_data =
                field(age_groups, group).ok_or(SchemaError::MissingAgeGroup { group, language })?;

            Self::validate_fields(
                group_data,
                &format!("ageGroups.{}", group),
                &AGE_GROUP_FIELDS,
                language,
            )?;
        }

        Ok(())
    }

    fn validate_footer(footer: &Value, language: Language) -> Result<(), SchemaError> {
        Self::validate_fields(footer, "footer", &FOOTER_FIELDS, language)?;

        let quick_links = &footer["quickLinks"];
        if field(quick_links, "title").is_none() || field(quick_links, "links").is_none() {
            return Err(SchemaError::InvalidQuickLinks(language));
        }

        Self::validate_fields(
            &footer["contact"],
            "footer.contact",
            &FOOTER_CONTACT_FIELDS,
            language,
        )
    }

    /// Every name in `fields` must be present under `value`, reported as `prefix.field`.
    fn validate_fields(
        value: &Value,
        prefix: &str,
        fields: &[&str],
        language: Language,
    ) -> Result<(), SchemaError> {
        for field_name in fields {
            if field(value, field_name).is_none() {
                return Err(SchemaError::MissingField {
                    path: format!("{}.{}", prefix, field_name),
                    language,
                });
            }
        }

        Ok(())
    }
}
