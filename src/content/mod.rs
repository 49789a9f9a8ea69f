//! Bilingual content loading.
//!
//! # Architecture
//!
//! - `model`: `BilingualDocument`, `LanguageContent`, `Section`
//! - `sections`: typed views of the required sections
//! - `store`: cache for the active document and last error
//! - `source`: HTTP and file sources for the raw document
//! - `validation`: shallow runtime shape check
//! - `fallback`: built-in document served when loading fails
//! - `service`: loader and per-language query API
//! - `view`: language-aware views for consumers
//! - `schema`: build-time validator for the published document
//!
//! # Example
//!
//! ```rust,ignore
//! use kodomo_content::content::{ContentService, HttpContentSource, Section};
//! use kodomo_content::i18n::Language;
//!
//! let source = HttpContentSource::new(reqwest::Client::new(), "https://example.com/content/content.json");
//! let service = ContentService::new(source);
//! let navigation = service.section_or_default(Section::Navigation, Language::JAPANESE).await;
//! ```

mod error;
mod fallback;
mod model;
mod schema;
pub mod sections;
mod service;
mod source;
mod store;
mod validation;
mod view;

pub use error::{ContentError, LoadError};
pub use fallback::fallback_document;
pub use model::{is_truthy, BilingualDocument, LanguageContent, Section, SectionContent};
pub use schema::{SchemaError, SchemaValidator};
pub use service::ContentService;
pub use source::{ContentSource, FileContentSource, HttpContentSource};
pub use store::ContentStore;
pub use validation::{parse_document, validate_document};
pub use view::{ContentSnapshot, ContentView, SectionSnapshot};
