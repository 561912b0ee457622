//! Configuration for GroqBrain.

use std::env;

use tutor_core::TutorError;

/// Configuration for GroqBrain.
#[derive(Debug, Clone)]
pub struct GroqBrainConfig {
    /// Groq API URL.
    pub api_url: String,

    /// API key for authentication.
    pub api_key: String,

    /// Model name to use.
    pub model: String,

    /// Maximum tokens for response.
    pub max_tokens: Option<u32>,

    /// Temperature for generation (0.0 - 2.0).
    pub temperature: Option<f32>,

    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for GroqBrainConfig {
    fn default() -> Self {
        Self {
            api_url: "https://api.groq.com/openai".to_string(),
            api_key: String::new(),
            model: "llama3-8b-8192".to_string(),
            max_tokens: Some(400),
            temperature: Some(0.7),
            timeout_secs: 30,
        }
    }
}

impl GroqBrainConfig {
    /// Create configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `GROQ_API_KEY` - API key for authentication
    ///
    /// Optional environment variables:
    /// - `GROQ_API_URL` - API URL (default: https://api.groq.com/openai)
    /// - `GROQ_MODEL` - Model name (default: llama3-8b-8192)
    /// - `GROQ_MAX_TOKENS` - Max tokens (default: 400)
    /// - `GROQ_TEMPERATURE` - Temperature (default: 0.7)
    /// - `GROQ_TIMEOUT_SECS` - Request timeout in seconds (default: 30)
    pub fn from_env() -> Result<Self, TutorError> {
        let api_key = env::var("GROQ_API_KEY")
            .map_err(|_| TutorError::Configuration("GROQ_API_KEY not set".to_string()))?;

        let api_url = env::var("GROQ_API_URL")
            .unwrap_or_else(|_| "https://api.groq.com/openai".to_string());

        let model = env::var("GROQ_MODEL").unwrap_or_else(|_| "llama3-8b-8192".to_string());

        let max_tokens = env::var("GROQ_MAX_TOKENS")
            .ok()
            .and_then(|v| v.parse().ok())
            .or(Some(400));

        let temperature = env::var("GROQ_TEMPERATURE")
            .ok()
            .and_then(|v| v.parse().ok())
            .or(Some(0.7));

        let timeout_secs = env::var("GROQ_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30);

        Ok(Self {
            api_url,
            api_key,
            model,
            max_tokens,
            temperature,
            timeout_secs,
        })
    }

    /// Create a new config builder.
    pub fn builder() -> GroqBrainConfigBuilder {
        GroqBrainConfigBuilder::default()
    }
}

/// Builder for GroqBrainConfig.
#[derive(Debug, Default)]
pub struct GroqBrainConfigBuilder {
    config: GroqBrainConfig,
}

impl GroqBrainConfigBuilder {
    /// Set the API key.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.config.api_key = key.into();
        self
    }

    /// Set the API URL.
    pub fn api_url(mut self, url: impl Into<String>) -> Self {
        self.config.api_url = url.into();
        self
    }

    /// Set the model name.
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.config.model = model.into();
        self
    }

    /// Set the max tokens.
    pub fn max_tokens(mut self, tokens: u32) -> Self {
        self.config.max_tokens = Some(tokens);
        self
    }

    /// Set the temperature.
    pub fn temperature(mut self, temp: f32) -> Self {
        self.config.temperature = Some(temp);
        self
    }

    /// Set the request timeout in seconds.
    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.config.timeout_secs = secs;
        self
    }

    /// Build the configuration.
    pub fn build(self) -> GroqBrainConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GroqBrainConfig::default();

        assert_eq!(config.api_url, "https://api.groq.com/openai");
        assert!(config.api_key.is_empty());
        assert_eq!(config.model, "llama3-8b-8192");
        assert_eq!(config.max_tokens, Some(400));
        assert_eq!(config.temperature, Some(0.7));
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn test_builder_all_options() {
        let config = GroqBrainConfig::builder()
            .api_key("my-key")
            .api_url("https://custom.api.com")
            .model("llama3-70b-8192")
            .max_tokens(512)
            .temperature(0.5)
            .timeout_secs(10)
            .build();

        assert_eq!(config.api_key, "my-key");
        assert_eq!(config.api_url, "https://custom.api.com");
        assert_eq!(config.model, "llama3-70b-8192");
        assert_eq!(config.max_tokens, Some(512));
        assert_eq!(config.temperature, Some(0.5));
        assert_eq!(config.timeout_secs, 10);
    }

    // Environment-based tests are combined into a single test to avoid
    // race conditions when tests run in parallel (env vars are process-global).
    #[test]
    fn test_from_env_scenarios() {
        use std::sync::Mutex;
        static ENV_LOCK: Mutex<()> = Mutex::new(());
        let _guard = ENV_LOCK.lock().unwrap();

        fn clear_all_groq_vars() {
            std::env::remove_var("GROQ_API_KEY");
            std::env::remove_var("GROQ_API_URL");
            std::env::remove_var("GROQ_MODEL");
            std::env::remove_var("GROQ_MAX_TOKENS");
            std::env::remove_var("GROQ_TEMPERATURE");
            std::env::remove_var("GROQ_TIMEOUT_SECS");
        }

        // Scenario 1: Missing API key should error
        clear_all_groq_vars();
        let result = GroqBrainConfig::from_env();
        assert!(result.is_err());
        match result.unwrap_err() {
            TutorError::Configuration(msg) => {
                assert!(msg.contains("GROQ_API_KEY"));
            }
            _ => panic!("Expected Configuration error"),
        }

        // Scenario 2: Only API key set, defaults used
        clear_all_groq_vars();
        std::env::set_var("GROQ_API_KEY", "test-env-key");

        let config = GroqBrainConfig::from_env().unwrap();
        assert_eq!(config.api_key, "test-env-key");
        assert_eq!(config.api_url, "https://api.groq.com/openai");
        assert_eq!(config.model, "llama3-8b-8192");
        assert_eq!(config.max_tokens, Some(400));
        assert_eq!(config.temperature, Some(0.7));
        assert_eq!(config.timeout_secs, 30);

        // Scenario 3: All vars set
        clear_all_groq_vars();
        std::env::set_var("GROQ_API_KEY", "full-test-key");
        std::env::set_var("GROQ_API_URL", "https://test.api.com");
        std::env::set_var("GROQ_MODEL", "llama3-70b-8192");
        std::env::set_var("GROQ_MAX_TOKENS", "800");
        std::env::set_var("GROQ_TEMPERATURE", "0.9");
        std::env::set_var("GROQ_TIMEOUT_SECS", "5");

        let config = GroqBrainConfig::from_env().unwrap();
        assert_eq!(config.api_key, "full-test-key");
        assert_eq!(config.api_url, "https://test.api.com");
        assert_eq!(config.model, "llama3-70b-8192");
        assert_eq!(config.max_tokens, Some(800));
        assert_eq!(config.temperature, Some(0.9));
        assert_eq!(config.timeout_secs, 5);

        // Cleanup
        clear_all_groq_vars();
    }
}
