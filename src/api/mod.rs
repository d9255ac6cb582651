//! Content generation for practice cards.
//!
//! A [`ContentGenerator`] supplies the article and an illustration for a
//! word. [`GeminiClient`](gemini::GeminiClient) is the network
//! implementation. [`CachedGenerator`] memoizes any generator for the
//! process lifetime, and [`resolve_card`] turns a word into a card that can
//! always be shown, falling back to stored data when generation fails.

pub mod gemini;

use crate::libs::cache::{cache_key, ContentCache};
use crate::libs::error::{AppError, AppResult};
use crate::libs::word::{Article, Word, WordCard};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedContent {
    pub article: Article,
    /// `data:image/jpeg;base64,...`
    pub image_url: String,
}

#[allow(async_fn_in_trait)]
pub trait ContentGenerator {
    async fn generate_word_data(&self, german: &str, english: &str) -> AppResult<GeneratedContent>;
}

/// Memoizes successful generations keyed by the lowercase German word.
pub struct CachedGenerator<G> {
    inner: G,
    cache: ContentCache,
}

impl<G: ContentGenerator> CachedGenerator<G> {
    pub fn new(inner: G) -> Self {
        CachedGenerator {
            inner,
            cache: ContentCache::new(),
        }
    }

    pub fn cache(&self) -> &ContentCache {
        &self.cache
    }

    pub fn inner(&self) -> &G {
        &self.inner
    }
}

impl<G: ContentGenerator> ContentGenerator for CachedGenerator<G> {
    async fn generate_word_data(&self, german: &str, english: &str) -> AppResult<GeneratedContent> {
        let key = cache_key(german);
        if let Some(content) = self.cache.get(&key) {
            return Ok(content);
        }

        let content = self.inner.generate_word_data(german, english).await?;
        self.cache.set(key, content.clone());
        Ok(content)
    }
}

/// Builds the card for `word`.
///
/// Never fails. On a generation error the card uses the stored article and
/// no image, and the error is returned alongside for reporting.
pub async fn resolve_card<G: ContentGenerator>(generator: &G, word: &Word) -> (WordCard, Option<AppError>) {
    match generator.generate_word_data(&word.german, &word.english).await {
        Ok(content) => (
            WordCard {
                article: content.article,
                german_word: word.german.clone(),
                english_word: word.english.clone(),
                image_url: content.image_url,
            },
            None,
        ),
        Err(e) => {
            tracing::warn!(word = %word.german, error = %e, "content generation failed, using stored data");
            (WordCard::from(word), Some(e))
        }
    }
}
