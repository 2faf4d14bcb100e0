use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::application::ports::{Translator, TranslatorError};
use crate::domain::LanguageCode;

/// Language-model backed detection and translation through the
/// chat-completions endpoint. One backend serves both operations.
pub struct OpenAiTranslator {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: String,
}

impl OpenAiTranslator {
    pub fn new(api_key: String, base_url: Option<String>, model: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            base_url: base_url.unwrap_or_else(|| "https://api.openai.com/v1".to_string()),
            model: model.unwrap_or_else(|| "gpt-4o-mini".to_string()),
        }
    }

    async fn chat(&self, system: &str, user: &str) -> Result<String, TranslatorError> {
        let url = format!("{}/chat/completions", self.base_url);

        let request = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: user,
                },
            ],
            temperature: 0.0,
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| TranslatorError::ApiRequestFailed(format!("request: {}", e)))?;

        let status = response.status();
        if status.as_u16() == 429 {
            return Err(TranslatorError::RateLimited);
        }
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(TranslatorError::ApiRequestFailed(format!(
                "status {}: {}",
                status, body
            )));
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| TranslatorError::InvalidResponse(e.to_string()))?;

        let content = parsed
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| TranslatorError::InvalidResponse("no choices returned".to_string()))?;

        Ok(content.trim().to_string())
    }
}

#[async_trait]
impl Translator for OpenAiTranslator {
    async fn detect_language(&self, text: &str) -> Result<String, TranslatorError> {
        self.chat(
            "Identify the language of the user's text. \
             Reply with the two-letter ISO 639-1 code only.",
            text,
        )
        .await
    }

    async fn translate(
        &self,
        text: &str,
        source: &LanguageCode,
        target: &LanguageCode,
    ) -> Result<String, TranslatorError> {
        let system = format!(
            "Translate the user's text from {} to {}. \
             Reply with the translation only, no commentary.",
            source, target
        );
        self.chat(&system, text).await
    }
}
