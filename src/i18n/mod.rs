//! Internationalization (i18n) module for the bilingual site.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for the two supported languages
//! - `language`: Validated `Language` type (`ja` / `en`)
//! - `context`: Shared, mutable language selection handed to consumers
//! - `persistence`: Durable storage for the selection between sessions
//!
//! # Example
//!
//! ```rust,ignore
//! use kodomo_content::i18n::{Language, LanguageContext};
//!
//! let context = LanguageContext::new();
//! assert_eq!(context.language(), Language::JAPANESE);
//! context.toggle_language();
//! ```

mod context;
mod language;
mod persistence;
mod registry;

pub use context::{use_language, ContextError, LanguageContext};
pub use language::Language;
pub use persistence::{FileLanguagePersistence, LanguagePersistence, MemoryLanguagePersistence};
pub use registry::{LanguageConfig, LanguageRegistry};
