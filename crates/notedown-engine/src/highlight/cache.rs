use std::{
    collections::HashMap,
    sync::{Arc, Mutex, OnceLock, PoisonError},
};

use super::{CodeHighlighter, HighlightBackend, SyntectBackend, basic_highlight};

type Slot = Arc<OnceLock<String>>;

/// Highlighting with a per-instance result cache.
///
/// Results are keyed by `language:code` and kept for the life of the
/// instance. Concurrent requests for the same key share one backend call:
/// the first caller fills the slot, the others wait on it.
pub struct Highlighter<B = SyntectBackend> {
    backend: B,
    cache: Mutex<HashMap<String, Slot>>,
}

impl Default for Highlighter<SyntectBackend> {
    fn default() -> Self {
        Self::new(SyntectBackend)
    }
}

impl<B: HighlightBackend> Highlighter<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Highlighted HTML for `code`. Never fails.
    pub fn highlight(&self, code: &str, lang: Option<&str>) -> String {
        let key = format!("{}:{code}", lang.unwrap_or_default());
        let slot = {
            let mut cache = self.cache.lock().unwrap_or_else(PoisonError::into_inner);
            Arc::clone(cache.entry(key).or_default())
        };

        if let Some(html) = slot.get() {
            log::debug!("highlight cache hit ({})", lang.unwrap_or("auto"));
            return html.clone();
        }

        slot.get_or_init(|| {
            log::debug!("highlight cache miss ({})", lang.unwrap_or("auto"));
            self.backend.highlight(code, lang).unwrap_or_else(|e| {
                log::warn!("falling back to basic highlighting: {e}");
                basic_highlight(code)
            })
        })
        .clone()
    }

    /// Number of filled cache entries.
    pub fn cached_len(&self) -> usize {
        let cache = self.cache.lock().unwrap_or_else(PoisonError::into_inner);
        cache.values().filter(|slot| slot.get().is_some()).count()
    }

    pub fn clear(&self) {
        self.cache
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl<B: HighlightBackend> CodeHighlighter for Highlighter<B> {
    fn highlight_code(&self, code: &str, lang: Option<&str>) -> String {
        self.highlight(code, lang)
    }
}
