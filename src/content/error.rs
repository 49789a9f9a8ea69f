use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a content load attempt failed.
///
/// These never escape the loader: each one is turned into a [`ContentError`]
/// and the fallback document is served instead.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Network or transport failure before a response arrived
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("Failed to load content: {code} {reason}")]
    Status { code: u16, reason: String },

    /// Local file could not be read
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Body is not valid JSON
    #[error("{0}")]
    Parse(#[from] serde_json::Error),

    /// Valid JSON, but a language or required section is missing
    #[error("Invalid content structure")]
    InvalidStructure,
}

impl LoadError {
    pub fn status(status: reqwest::StatusCode) -> Self {
        LoadError::Status {
            code: status.as_u16(),
            reason: status.canonical_reason().unwrap_or_default().to_string(),
        }
    }
}

/// The most recent loading failure, as exposed to consumers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentError {
    pub message: String,

    /// Section the consumer was asking for, when reported through a section view
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,

    /// `true` while the built-in fallback document is active
    pub fallback_used: bool,
}

impl ContentError {
    /// Error record for a load that ended on the fallback document.
    pub fn fallback(err: &LoadError) -> Self {
        Self {
            message: err.to_string(),
            section: None,
            fallback_used: true,
        }
    }

    /// Same error, attributed to one section.
    pub fn for_section(&self, section: &str) -> Self {
        Self {
            section: Some(section.to_string()),
            ..self.clone()
        }
    }
}
