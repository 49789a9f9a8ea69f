//! Render error boundary.
//!
//! Catches panics raised while rendering a subtree and shows a bilingual
//! apology with a retry control instead. This is independent of content
//! loading errors, which never panic.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use tracing::{error, info};

/// The built-in apology shown when a render fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Apology {
    pub title: &'static str,
    pub message_ja: &'static str,
    pub message_en: &'static str,
    pub retry_label: &'static str,
}

pub const APOLOGY: Apology = Apology {
    title: "申し訳ございません",
    message_ja: "コンテンツの読み込み中にエラーが発生しました。",
    message_en: "Sorry, an error occurred while loading content.",
    retry_label: "再試行 / Retry",
};

/// Outcome of rendering through a boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum Rendered<T> {
    /// The subtree rendered normally
    Content(T),
    /// The subtree failed and a caller-supplied fallback was shown
    Fallback(T),
    /// The subtree failed and the built-in apology was shown
    Apology(Apology),
}

type ErrorHook = Box<dyn Fn(&str) + Send + Sync>;

pub struct ErrorBoundary<T> {
    error: Option<String>,
    fallback: Option<T>,
    on_error: Option<ErrorHook>,
}

impl<T: Clone> ErrorBoundary<T> {
    pub fn new() -> Self {
        Self {
            error: None,
            fallback: None,
            on_error: None,
        }
    }

    /// Show `fallback` instead of the built-in apology.
    pub fn with_fallback(mut self, fallback: T) -> Self {
        self.fallback = Some(fallback);
        self
    }

    /// Called with the panic message each time a render fails.
    pub fn on_error<F>(mut self, hook: F) -> Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.on_error = Some(Box::new(hook));
        self
    }

    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    /// Message of the caught failure, while in the error state.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Render the subtree. While in the error state the subtree is not run
    /// again until [`retry`](Self::retry) is called.
    pub fn render<F>(&mut self, render: F) -> Rendered<T>
    where
        F: FnOnce() -> T,
    {
        if self.error.is_none() {
            match panic::catch_unwind(AssertUnwindSafe(render)) {
                Ok(output) => return Rendered::Content(output),
                Err(payload) => {
                    let message = panic_message(payload.as_ref());
                    error!("ErrorBoundary caught an error: {}", message);
                    if let Some(hook) = &self.on_error {
                        hook(&message);
                    }
                    self.error = Some(message);
                }
            }
        }

        match &self.fallback {
            Some(fallback) => Rendered::Fallback(fallback.clone()),
            None => Rendered::Apology(APOLOGY),
        }
    }

    /// Reset the error state so the next render re-attempts the subtree.
    pub fn retry(&mut self) {
        if self.error.take().is_some() {
            info!("ErrorBoundary reset, retrying render");
        }
    }
}

impl<T: Clone> Default for ErrorBoundary<T> {
    fn default() -> Self {
        Self::new()
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "Unknown render error".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_renders_children_without_error() {
        let mut boundary = ErrorBoundary::new();
        assert_eq!(boundary.render(|| "page"), Rendered::Content("page"));
        assert!(!boundary.has_error());
    }

    #[test]
    fn test_panic_shows_apology() {
        let mut boundary: ErrorBoundary<&str> = ErrorBoundary::new();

        let rendered = boundary.render(|| panic!("Test error"));
        assert_eq!(rendered, Rendered::Apology(APOLOGY));
        assert!(boundary.has_error());
        assert_eq!(boundary.error(), Some("Test error"));
    }

    #[test]
    fn test_apology_is_bilingual() {
        assert_eq!(APOLOGY.title, "申し訳ございません");
        assert_eq!(
            APOLOGY.message_en,
            "Sorry, an error occurred while loading content."
        );
        assert_eq!(APOLOGY.retry_label, "再試行 / Retry");
    }

    #[test]
    fn test_custom_fallback() {
        let mut boundary = ErrorBoundary::new().with_fallback("Custom error message");

        let rendered = boundary.render(|| -> &str { panic!("boom") });
        assert_eq!(rendered, Rendered::Fallback("Custom error message"));
    }

    #[test]
    fn test_on_error_hook_receives_message() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let mut boundary: ErrorBoundary<()> = ErrorBoundary::new()
            .on_error(move |message| sink.lock().expect("lock").push(message.to_string()));

        boundary.render(|| panic!("{} failed", "hero"));
        assert_eq!(*seen.lock().expect("lock"), vec!["hero failed".to_string()]);
    }

    #[test]
    fn test_error_state_does_not_rerender_until_retry() {
        let attempts = Cell::new(0);
        let mut boundary = ErrorBoundary::new();

        let render = || {
            attempts.set(attempts.get() + 1);
            if attempts.get() == 1 {
                panic!("first render fails");
            }
            "recovered"
        };

        assert_eq!(boundary.render(render), Rendered::Apology(APOLOGY));
        assert_eq!(boundary.render(render), Rendered::Apology(APOLOGY));
        assert_eq!(attempts.get(), 1);

        boundary.retry();
        assert!(!boundary.has_error());
        assert_eq!(boundary.render(render), Rendered::Content("recovered"));
        assert_eq!(attempts.get(), 2);
    }
}
