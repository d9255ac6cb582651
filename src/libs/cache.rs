use crate::api::GeneratedContent;
use parking_lot::Mutex;
use std::collections::HashMap;

/// Key under which content for a German word is cached.
pub fn cache_key(german: &str) -> String {
    format!("word_{}", german.to_lowercase())
}

/// Generated content kept for the lifetime of the process.
#[derive(Debug, Default)]
pub struct ContentCache {
    entries: Mutex<HashMap<String, GeneratedContent>>,
}

impl ContentCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<GeneratedContent> {
        let hit = self.entries.lock().get(key).cloned();
        if hit.is_some() {
            tracing::debug!(key, "content cache hit");
        }
        hit
    }

    pub fn set(&self, key: impl Into<String>, content: GeneratedContent) {
        self.entries.lock().insert(key.into(), content);
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.entries.lock().clear();
    }
}
