use anyhow::{Context, Result};

const DEFAULT_CONTENT_FILE: &str = "content/content.json";

#[derive(Debug, Clone)]
pub struct Config {
    // Content resource
    pub content_base_url: String,
    pub content_path: String,

    // Local content file (build-time validation, offline preview)
    pub content_file: String,

    // Durable storage for the language selection
    pub language_state_file: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let config = Self {
            content_base_url: std::env::var("CONTENT_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:3000".to_string()),
            content_path: std::env::var("CONTENT_PATH")
                .unwrap_or_else(|_| "/content/content.json".to_string()),

            content_file: content_file_from_env(),

            language_state_file: std::env::var("LANGUAGE_STATE_FILE")
                .unwrap_or_else(|_| "data/language.json".to_string()),
        };

        reqwest::Url::parse(&config.content_url())
            .with_context(|| format!("Invalid content URL: {}", config.content_url()))?;

        Ok(config)
    }

    /// Full URL of the content document (base URL + resource path)
    pub fn content_url(&self) -> String {
        format!(
            "{}/{}",
            self.content_base_url.trim_end_matches('/'),
            self.content_path.trim_start_matches('/')
        )
    }
}

/// Local content file path (CONTENT_FILE). Needs no other configuration, so
/// the validator can read it without a valid content URL.
pub fn content_file_from_env() -> String {
    std::env::var("CONTENT_FILE").unwrap_or_else(|_| DEFAULT_CONTENT_FILE.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: [&str; 4] = [
        "CONTENT_BASE_URL",
        "CONTENT_PATH",
        "CONTENT_FILE",
        "LANGUAGE_STATE_FILE",
    ];

    fn clear_env() {
        for var in VARS {
            std::env::remove_var(var);
        }
    }

    fn test_config(base: &str, path: &str) -> Config {
        Config {
            content_base_url: base.to_string(),
            content_path: path.to_string(),
            content_file: "content/content.json".to_string(),
            language_state_file: "data/language.json".to_string(),
        }
    }

    // ==================== from_env Tests ====================

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();

        let config = Config::from_env().expect("defaults should load");
        assert_eq!(config.content_base_url, "http://localhost:3000");
        assert_eq!(config.content_path, "/content/content.json");
        assert_eq!(config.content_file, "content/content.json");
        assert_eq!(config.language_state_file, "data/language.json");
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        clear_env();
        std::env::set_var("CONTENT_BASE_URL", "https://kodomogakuen.com");
        std::env::set_var("CONTENT_FILE", "/srv/site/content.json");
        std::env::set_var("LANGUAGE_STATE_FILE", "/tmp/lang.json");

        let config = Config::from_env().expect("overrides should load");
        assert_eq!(config.content_base_url, "https://kodomogakuen.com");
        assert_eq!(config.content_file, "/srv/site/content.json");
        assert_eq!(config.language_state_file, "/tmp/lang.json");

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_rejects_invalid_base_url() {
        clear_env();
        std::env::set_var("CONTENT_BASE_URL", "not a url");

        let result = Config::from_env();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Invalid content URL"));

        clear_env();
    }

    #[test]
    #[serial]
    fn test_content_file_ignores_invalid_base_url() {
        clear_env();
        std::env::set_var("CONTENT_BASE_URL", "not a url");
        assert_eq!(content_file_from_env(), "content/content.json");

        std::env::set_var("CONTENT_FILE", "site/content.json");
        assert_eq!(content_file_from_env(), "site/content.json");

        clear_env();
    }

    // ==================== content_url Tests ====================

    #[test]
    fn test_content_url_joins_without_double_slash() {
        let config = test_config("http://localhost:3000/", "/content/content.json");
        assert_eq!(config.content_url(), "http://localhost:3000/content/content.json");
    }

    #[test]
    fn test_content_url_adds_missing_slash() {
        let config = test_config("http://localhost:3000", "content/content.json");
        assert_eq!(config.content_url(), "http://localhost:3000/content/content.json");
    }
}
