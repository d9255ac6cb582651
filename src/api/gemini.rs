//! Google Generative Language API client.
//!
//! Two calls per word, issued concurrently:
//!
//! - `models/{article_model}:generateContent` with a JSON response schema
//!   that constrains the answer to one `article` field.
//! - `models/{image_model}:predict` that returns one base64 JPEG.
//!
//! Either call failing, or an answer outside der/die/das, fails the whole
//! generation with [`AppError::UpstreamUnavailable`].

use super::{ContentGenerator, GeneratedContent};
use crate::libs::config::{Config, ConfigModule};
use crate::libs::error::{AppError, AppResult};
use crate::libs::messages::Message;
use crate::libs::word::Article;
use crate::msg_print;
use anyhow::Result;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use dialoguer::{theme::ColorfulTheme, Input};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::env;
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_ARTICLE_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_IMAGE_MODEL: &str = "imagen-4.0-generate-001";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Environment variables consulted when the config file has no key.
pub const API_KEY_VARS: [&str; 2] = ["API_KEY", "GEMINI_API_KEY"];

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_article_model() -> String {
    DEFAULT_ARTICLE_MODEL.to_string()
}

fn default_image_model() -> String {
    DEFAULT_IMAGE_MODEL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct GeminiConfig {
    pub api_key: String,
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default = "default_article_model")]
    pub article_model: String,
    #[serde(default = "default_image_model")]
    pub image_model: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl GeminiConfig {
    pub fn with_key(api_key: impl Into<String>) -> Self {
        GeminiConfig {
            api_key: api_key.into(),
            api_url: default_api_url(),
            article_model: default_article_model(),
            image_model: default_image_model(),
            timeout_secs: default_timeout_secs(),
        }
    }

    /// Effective configuration: the config file section first, then the
    /// `API_KEY`/`GEMINI_API_KEY` environment variables.
    pub fn resolve(config: &Config) -> Option<GeminiConfig> {
        if let Some(gemini) = config.gemini.as_ref().filter(|g| !g.api_key.trim().is_empty()) {
            return Some(gemini.clone());
        }
        API_KEY_VARS
            .iter()
            .filter_map(|name| env::var(name).ok())
            .find(|key| !key.trim().is_empty())
            .map(GeminiConfig::with_key)
    }

    pub fn module() -> ConfigModule {
        ConfigModule {
            key: "gemini".to_string(),
            name: "Gemini".to_string(),
        }
    }

    pub fn init(config: &Option<GeminiConfig>) -> Result<Self> {
        let config = config.clone().unwrap_or_else(|| GeminiConfig::with_key(""));
        msg_print!(Message::ConfigModuleGemini);

        Ok(Self {
            api_key: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptGeminiApiKey.to_string())
                .default(config.api_key)
                .interact_text()?,
            api_url: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptGeminiApiUrl.to_string())
                .default(config.api_url)
                .interact_text()?,
            article_model: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptArticleModel.to_string())
                .default(config.article_model)
                .interact_text()?,
            image_model: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptImageModel.to_string())
                .default(config.image_model)
                .interact_text()?,
            timeout_secs: config.timeout_secs,
        })
    }
}

#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: Client,
    config: GeminiConfig,
}

impl GeminiClient {
    pub fn new(config: &GeminiConfig) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    fn endpoint(&self, model: &str, method: &str) -> String {
        format!("{}/models/{}:{}", self.config.api_url.trim_end_matches('/'), model, method)
    }

    async fn post(&self, url: &str, body: &Value) -> AppResult<Value> {
        let response = self
            .client
            .post(url)
            .header("x-goog-api-key", &self.config.api_key)
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(AppError::UpstreamUnavailable(format!("{} returned {}: {}", url, status, text)));
        }
        Ok(response.json::<Value>().await?)
    }

    pub async fn get_article(&self, german: &str) -> AppResult<Article> {
        let url = self.endpoint(&self.config.article_model, "generateContent");
        let response = self.post(&url, &article_request(german)).await?;
        parse_article_response(&response)
    }

    pub async fn generate_image(&self, english: &str) -> AppResult<String> {
        let url = self.endpoint(&self.config.image_model, "predict");
        let response = self.post(&url, &image_request(english)).await?;
        parse_image_response(&response)
    }
}

impl ContentGenerator for GeminiClient {
    async fn generate_word_data(&self, german: &str, english: &str) -> AppResult<GeneratedContent> {
        tracing::debug!(german, english, "generating word content");
        let (article, image_url) = tokio::try_join!(self.get_article(german), self.generate_image(english))?;
        Ok(GeneratedContent { article, image_url })
    }
}

pub fn article_request(german: &str) -> Value {
    json!({
        "contents": [{
            "parts": [{
                "text": format!("What is the correct German article ('der', 'die', or 'das') for the noun \"{}\"?", german)
            }]
        }],
        "generationConfig": {
            "responseMimeType": "application/json",
            "responseSchema": {
                "type": "OBJECT",
                "properties": {
                    "article": {
                        "type": "STRING",
                        "description": "The German article, which must be one of 'der', 'die', or 'das'."
                    }
                },
                "required": ["article"]
            }
        }
    })
}

pub fn image_request(english: &str) -> Value {
    json!({
        "instances": [{
            "prompt": format!(
                "A high-quality, photorealistic image of a single \"{}\" on a plain, clean, white background. \
                 The object should be the main focus. Simple, clear, and centered.",
                english
            )
        }],
        "parameters": {
            "sampleCount": 1,
            "outputMimeType": "image/jpeg",
            "aspectRatio": "1:1"
        }
    })
}

/// Extracts the article from a `generateContent` response whose text part is
/// a JSON object like `{"article": "die"}`.
pub fn parse_article_response(response: &Value) -> AppResult<Article> {
    let text = response
        .pointer("/candidates/0/content/parts/0/text")
        .and_then(Value::as_str)
        .ok_or_else(|| AppError::UpstreamUnavailable("article response has no text".to_string()))?;

    let payload: Value = serde_json::from_str(text.trim())
        .map_err(|e| AppError::UpstreamUnavailable(format!("article response is not JSON: {}", e)))?;
    let raw = payload.get("article").and_then(Value::as_str).unwrap_or_default();

    raw.parse::<Article>()
        .map_err(|_| AppError::UpstreamUnavailable(format!("invalid article received: {:?}", raw)))
}

/// Extracts the first predicted image as a data URL.
pub fn parse_image_response(response: &Value) -> AppResult<String> {
    let bytes = response
        .pointer("/predictions/0/bytesBase64Encoded")
        .and_then(Value::as_str)
        .filter(|b| !b.is_empty())
        .ok_or_else(|| AppError::UpstreamUnavailable("no image was generated".to_string()))?;

    STANDARD
        .decode(bytes)
        .map_err(|e| AppError::UpstreamUnavailable(format!("image payload is not base64: {}", e)))?;

    Ok(format!("data:image/jpeg;base64,{}", bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_response(text: &str) -> Value {
        json!({ "candidates": [{ "content": { "parts": [{ "text": text }] } }] })
    }

    #[test]
    fn parses_article_case_insensitively() {
        let article = parse_article_response(&text_response("{\"article\": \"Die\"}")).unwrap();
        assert_eq!(article, Article::Die);
    }

    #[test]
    fn rejects_unknown_article() {
        let err = parse_article_response(&text_response("{\"article\": \"dem\"}")).unwrap_err();
        assert!(matches!(err, AppError::UpstreamUnavailable(_)));
    }

    #[test]
    fn rejects_missing_text() {
        assert!(parse_article_response(&json!({ "candidates": [] })).is_err());
    }

    #[test]
    fn wraps_image_bytes_in_data_url() {
        let response = json!({ "predictions": [{ "bytesBase64Encoded": "aGVsbG8=" }] });
        assert_eq!(parse_image_response(&response).unwrap(), "data:image/jpeg;base64,aGVsbG8=");
    }

    #[test]
    fn rejects_missing_or_invalid_image() {
        assert!(parse_image_response(&json!({ "predictions": [] })).is_err());
        assert!(parse_image_response(&json!({ "predictions": [{ "bytesBase64Encoded": "@@not base64@@" }] })).is_err());
    }

    #[test]
    fn endpoint_joins_model_and_method() {
        let mut config = GeminiConfig::with_key("k");
        config.api_url = "https://example.test/v1beta/".to_string();
        let client = GeminiClient::new(&config).unwrap();
        assert_eq!(
            client.endpoint("gemini-2.5-flash", "generateContent"),
            "https://example.test/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }
}
