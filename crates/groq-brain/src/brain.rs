//! GroqBrain implementation using the Groq API.

use std::time::Duration;

use reqwest::Client;
use tracing::{debug, info, warn};
use tutor_core::{async_trait, Completion, CompletionError, TutorError};

use crate::api_types::{ApiError, ChatCompletionRequest, ChatCompletionResponse, ChatMessage};
use crate::config::GroqBrainConfig;

/// A completion backend that uses Groq's chat-completions API.
///
/// GroqBrain is stateless: it sends the assembled prompt as the sole
/// system-role message and returns the generated text. A failed attempt
/// is reported as a typed [`CompletionError`]; it is never retried and
/// never panics, so a conversation can always degrade to a fallback
/// response.
pub struct GroqBrain {
    client: Client,
    config: GroqBrainConfig,
}

impl GroqBrain {
    /// Create a new GroqBrain with the given configuration.
    pub fn new(config: GroqBrainConfig) -> Result<Self, TutorError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| {
                TutorError::Configuration(format!("Failed to create HTTP client: {}", e))
            })?;

        info!(
            "GroqBrain initialized with model: {}, timeout: {}s",
            config.model, config.timeout_secs
        );

        Ok(Self { client, config })
    }

    /// Create a GroqBrain from environment variables.
    ///
    /// See [`GroqBrainConfig::from_env`] for required environment variables.
    pub fn from_env() -> Result<Self, TutorError> {
        let config = GroqBrainConfig::from_env()?;
        Self::new(config)
    }

    /// Get the configuration.
    pub fn config(&self) -> &GroqBrainConfig {
        &self.config
    }

    /// Make a chat completion request to the Groq API.
    async fn chat_completion(
        &self,
        messages: Vec<ChatMessage>,
    ) -> Result<ChatCompletionResponse, CompletionError> {
        let url = format!("{}/v1/chat/completions", self.config.api_url);

        let request = ChatCompletionRequest {
            model: self.config.model.clone(),
            messages,
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
        };

        debug!("Sending request to Groq API: {:?}", request);

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| CompletionError::Network(format!("Failed to send request: {}", e)))?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();

            // Try to parse as API error
            if let Ok(api_error) = serde_json::from_str::<ApiError>(&error_text) {
                return Err(CompletionError::Api {
                    status: status.as_u16(),
                    message: api_error.error.message,
                });
            }

            return Err(CompletionError::Api {
                status: status.as_u16(),
                message: error_text,
            });
        }

        let completion: ChatCompletionResponse = response.json().await.map_err(|e| {
            CompletionError::MalformedResponse(format!("Failed to parse response: {}", e))
        })?;

        debug!("Received response from Groq API: {:?}", completion);

        Ok(completion)
    }
}

#[async_trait]
impl Completion for GroqBrain {
    async fn complete(&self, prompt: &str) -> Result<String, CompletionError> {
        let messages = vec![ChatMessage::system(prompt)];

        let completion = self.chat_completion(messages).await?;

        // Log usage if available
        if let Some(usage) = &completion.usage {
            debug!(
                "Token usage - prompt: {}, completion: {}, total: {}",
                usage.prompt_tokens, usage.completion_tokens, usage.total_tokens
            );
        }

        let content = completion
            .choices
            .first()
            .and_then(|c| c.message.content.as_deref())
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        match content {
            Some(text) => Ok(text),
            None => {
                warn!("No content in completion response");
                Err(CompletionError::EmptyResponse)
            }
        }
    }

    fn name(&self) -> &str {
        "GroqBrain"
    }
}
