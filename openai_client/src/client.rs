use async_trait::async_trait;
use config_manager::OpenAiConfig;
use horoscope_core::{HoroscopePrompt, NarrativeGenerator, FALLBACK_HOROSCOPE};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, error, info};

use crate::{
    error::OpenAiError,
    types::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage, ErrorResponse},
};

/// Chat-completions client that writes the horoscope text
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    client: Client,
    config: OpenAiConfig,
}

impl OpenAiClient {
    pub fn new(config: OpenAiConfig) -> Result<Self, OpenAiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_seconds))
            .connect_timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self { client, config })
    }

    pub fn build_request(&self, prompt: &HoroscopePrompt) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: self.config.model.clone(),
            messages: vec![
                ChatMessage::system(prompt.system.clone()),
                ChatMessage::user(prompt.user.clone()),
            ],
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
        }
    }

    /// One completion call. An answer without text becomes the fallback line.
    pub async fn complete(&self, prompt: &HoroscopePrompt) -> Result<String, OpenAiError> {
        let url = format!("{}/chat/completions", self.config.api_base_url);
        let request = self.build_request(prompt);

        debug!("Requesting completion from {} ({})", url, request.model);
        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            error!("❌ Completion API error - Status: {}", status);
            return Err(error_from_status(status.as_u16(), &body));
        }

        parse_completion(&body)
    }
}

fn error_from_status(status: u16, body: &str) -> OpenAiError {
    match status {
        401 => OpenAiError::AuthError,
        429 => OpenAiError::RateLimit,
        _ => {
            let message = serde_json::from_str::<ErrorResponse>(body)
                .map(|e| e.error.message)
                .unwrap_or_else(|_| body.to_string());
            OpenAiError::ApiError {
                message: format!("HTTP {}: {}", status, message),
            }
        }
    }
}

pub(crate) fn parse_completion(body: &str) -> Result<String, OpenAiError> {
    let response: ChatCompletionResponse =
        serde_json::from_str(body).map_err(|e| OpenAiError::ParseError {
            message: e.to_string(),
        })?;

    Ok(response
        .first_content()
        .map(str::to_string)
        .unwrap_or_else(|| FALLBACK_HOROSCOPE.to_string()))
}

#[async_trait]
impl NarrativeGenerator for OpenAiClient {
    async fn generate(&self, prompt: &HoroscopePrompt) -> horoscope_core::Result<String> {
        let text = self.complete(prompt).await?;
        info!("🔮 Horoscope generated ({} chars)", text.len());
        Ok(text)
    }
}
