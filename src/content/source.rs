//! Where the raw content document comes from.

use crate::config::Config;
use crate::content::LoadError;
use std::future::Future;
use std::path::PathBuf;
use tracing::debug;

/// A place the raw JSON document can be fetched from.
///
/// Implementations make exactly one attempt per call; retrying is the
/// loader's decision (and it doesn't).
pub trait ContentSource: Send + Sync {
    fn fetch(&self) -> impl Future<Output = Result<String, LoadError>> + Send;

    /// Human-readable location, for logs.
    fn describe(&self) -> String;
}

/// Fetches the document with a single HTTP GET.
#[derive(Debug, Clone)]
pub struct HttpContentSource {
    client: reqwest::Client,
    url: String,
}

impl HttpContentSource {
    pub fn new(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    pub fn from_config(client: reqwest::Client, config: &Config) -> Self {
        Self::new(client, config.content_url())
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl ContentSource for HttpContentSource {
    async fn fetch(&self) -> Result<String, LoadError> {
        debug!("GET {}", self.url);
        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::status(status));
        }

        Ok(response.text().await?)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

/// Reads the document from a local file.
#[derive(Debug, Clone)]
pub struct FileContentSource {
    path: PathBuf,
}

impl FileContentSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ContentSource for FileContentSource {
    async fn fetch(&self) -> Result<String, LoadError> {
        debug!("Reading {}", self.path.display());
        Ok(tokio::fs::read_to_string(&self.path).await?)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
