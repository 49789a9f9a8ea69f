//! Content preview: loads the site content and prints one language's slice.
//!
//! Usage:
//!   cargo run                          # Whole tree for the saved language
//!   cargo run -- navigation            # One section
//!   cargo run -- --lang en footer      # Select a language first
//!   cargo run -- --toggle              # Flip the saved language first
//!   cargo run -- --file hero           # Read CONTENT_FILE instead of fetching
//!
//! Optional environment variables:
//! - CONTENT_BASE_URL (defaults to http://localhost:3000)
//! - CONTENT_PATH (defaults to /content/content.json)
//! - CONTENT_FILE (defaults to content/content.json)
//! - LANGUAGE_STATE_FILE (defaults to data/language.json)

use anyhow::{bail, Context, Result};
use kodomo_content::config::Config;
use kodomo_content::content::{
    ContentService, ContentSource, ContentView, FileContentSource, HttpContentSource, Section,
};
use kodomo_content::i18n::{FileLanguagePersistence, Language, LanguageContext};
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Debug, Default)]
struct Options {
    use_file: bool,
    toggle: bool,
    language: Option<Language>,
    section: Option<Section>,
}

impl Options {
    fn parse(args: &[String]) -> Result<Self> {
        let mut options = Options::default();
        let mut args = args.iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--file" => options.use_file = true,
                "--toggle" => options.toggle = true,
                "--lang" => {
                    let code = args.next().context("--lang needs a language code")?;
                    options.language = Some(Language::from_code(code)?);
                }
                flag if flag.starts_with("--") => bail!("Unknown option: {}", flag),
                name => {
                    if options.section.is_some() {
                        bail!("Only one section can be shown at a time");
                    }
                    options.section = Some(name.parse()?);
                }
            }
        }

        Ok(options)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("kodomo_content=info".parse()?),
        )
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = Options::parse(&args)?;

    let config = Config::from_env()?;

    let persistence = Arc::new(FileLanguagePersistence::new(&config.language_state_file));
    let context = LanguageContext::restore(persistence);
    if let Some(language) = options.language {
        context.set_language(language);
    }
    if options.toggle {
        context.toggle_language();
    }
    info!(
        "Language: {} ({})",
        context.language(),
        context.language().native_name()
    );

    if options.use_file {
        let source = FileContentSource::new(&config.content_file);
        preview(source, &context, options.section).await
    } else {
        let source = HttpContentSource::from_config(reqwest::Client::new(), &config);
        preview(source, &context, options.section).await
    }
}

async fn preview<S: ContentSource>(
    source: S,
    context: &LanguageContext,
    section: Option<Section>,
) -> Result<()> {
    let service = Arc::new(ContentService::new(source));
    let view = ContentView::new(Some(context), service)?;

    let (output, error) = match section {
        Some(section) => {
            let snapshot = view.section(section).await;
            (snapshot.content, snapshot.error)
        }
        None => {
            let snapshot = view.content().await;
            (snapshot.content.into_value(), snapshot.error)
        }
    };

    if let Some(error) = &error {
        warn!("Showing fallback content: {}", error.message);
    }

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_parse_no_arguments() {
        let options = Options::parse(&[]).expect("parse");
        assert!(!options.use_file);
        assert!(!options.toggle);
        assert!(options.language.is_none());
        assert!(options.section.is_none());
    }

    #[test]
    fn test_parse_all_options() {
        let args = args(&["--file", "--lang", "en", "--toggle", "ageGroups"]);
        let options = Options::parse(&args).expect("parse");
        assert!(options.use_file);
        assert!(options.toggle);
        assert_eq!(options.language, Some(Language::ENGLISH));
        assert_eq!(options.section, Some(Section::AgeGroups));
    }

    #[test]
    fn test_parse_rejects_unknown_section() {
        assert!(Options::parse(&args(&["gallery"])).is_err());
    }

    #[test]
    fn test_parse_rejects_unknown_flag() {
        assert!(Options::parse(&args(&["--verbose"])).is_err());
    }

    #[test]
    fn test_parse_lang_requires_value() {
        assert!(Options::parse(&args(&["--lang"])).is_err());
    }
}
