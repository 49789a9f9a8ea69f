//! Cache for the active document and the last loading error.
//!
//! One store per content service; tests build their own instead of sharing a
//! process-wide cache. Writes are last-write-wins.

use crate::content::{BilingualDocument, ContentError};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

#[derive(Debug, Default)]
struct StoreState {
    document: Option<Arc<BilingualDocument>>,
    error: Option<ContentError>,
}

#[derive(Debug, Default)]
pub struct ContentStore {
    state: Mutex<StoreState>,
}

impl ContentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Active document, or `None` if nothing has been loaded since the last clear.
    pub fn get(&self) -> Option<Arc<BilingualDocument>> {
        self.lock().document.clone()
    }

    /// Install a freshly loaded document and forget any previous error.
    pub fn set(&self, document: Arc<BilingualDocument>) {
        let mut state = self.lock();
        state.document = Some(document);
        state.error = None;
    }

    pub fn set_error(&self, error: ContentError) {
        self.lock().error = Some(error);
    }

    /// Install the fallback document together with the error that caused it.
    pub fn set_fallback(&self, document: Arc<BilingualDocument>, error: ContentError) {
        let mut state = self.lock();
        state.document = Some(document);
        state.error = Some(error);
    }

    pub fn error(&self) -> Option<ContentError> {
        self.lock().error.clone()
    }

    /// Document to serve without fetching: present and loaded without error.
    pub fn cached(&self) -> Option<Arc<BilingualDocument>> {
        let state = self.lock();
        match (&state.document, &state.error) {
            (Some(document), None) => Some(document.clone()),
            _ => None,
        }
    }

    pub fn clear(&self) {
        let mut state = self.lock();
        state.document = None;
        state.error = None;
    }

    fn lock(&self) -> MutexGuard<'_, StoreState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{fallback_document, LoadError};

    fn fallback_error() -> ContentError {
        ContentError::fallback(&LoadError::InvalidStructure)
    }

    #[test]
    fn test_new_store_is_empty() {
        let store = ContentStore::new();
        assert!(store.get().is_none());
        assert!(store.error().is_none());
        assert!(store.cached().is_none());
    }

    #[test]
    fn test_set_replaces_document_and_clears_error() {
        let store = ContentStore::new();
        store.set_error(fallback_error());

        store.set(fallback_document());
        assert!(store.get().is_some());
        assert!(store.error().is_none());
        assert!(store.cached().is_some());
    }

    #[test]
    fn test_fallback_is_not_a_cache_hit() {
        let store = ContentStore::new();
        store.set_fallback(fallback_document(), fallback_error());

        assert!(store.get().is_some());
        assert_eq!(store.error(), Some(fallback_error()));
        assert!(store.cached().is_none());
    }

    #[test]
    fn test_clear_resets_everything() {
        let store = ContentStore::new();
        store.set_fallback(fallback_document(), fallback_error());

        store.clear();
        assert!(store.get().is_none());
        assert!(store.error().is_none());
    }

    #[test]
    fn test_stores_are_independent() {
        let first = ContentStore::new();
        let second = ContentStore::new();

        first.set(fallback_document());
        assert!(second.get().is_none());
    }
}
