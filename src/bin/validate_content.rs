//! Build-time content validation.
//!
//! Usage:
//!   cargo run --bin validate-content
//!
//! Checks `content/content.json` (or CONTENT_FILE) against the fields the
//! site templates rely on. Exits 0 when the content is valid, 1 on the first
//! violation found.

use kodomo_content::config::content_file_from_env;
use kodomo_content::content::SchemaValidator;
use std::path::Path;
use std::process::ExitCode;

fn main() -> ExitCode {
    let _ = dotenvy::dotenv();

    // Logs go to stderr so stdout stays the report
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("kodomo_content=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let content_file = content_file_from_env();

    println!("🔍 Validating content structure...");

    let result = SchemaValidator::load(Path::new(&content_file)).and_then(|content| {
        SchemaValidator::validate_with(&content, |language| {
            println!("✅ Validating {} content...", language);
        })
    });

    match result {
        Ok(()) => {
            println!("✅ Content validation passed!");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("❌ Content validation failed: {}", e);
            ExitCode::FAILURE
        }
    }
}
