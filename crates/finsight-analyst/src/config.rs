//! Application configuration
//!
//! Built explicitly at startup and passed into the analyst constructor; the
//! API key never lives in module-scope state.

use crate::error::{AnalystError, Result};
use finsight_llm::ResponseFormat;
use finsight_pipeline::LlmProfile;

/// Model used by the pipeline
const PRIMARY_MODEL: &str = "gemma2-9b-it";

/// Model of the alternate JSON profile
const JSON_MODEL: &str = "mixtral-8x7b-32768";

/// Configuration for the analysis application
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Groq API key
    pub api_key: String,

    /// API base URL override, if any
    pub api_base: Option<String>,

    /// Model profile the pipeline runs with
    pub profile: LlmProfile,

    /// Alternate JSON-output profile
    ///
    /// Loadable and validated, but not wired into the pipeline; the upstream
    /// system defines this profile without ever using it.
    pub json_profile: LlmProfile,
}

impl AppConfig {
    /// Create a new configuration builder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Load configuration from the environment
    ///
    /// `GROQ_API_KEY` is required; `GROQ_API_BASE` optionally overrides the
    /// endpoint.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("GROQ_API_KEY")
            .map_err(|_| AnalystError::Config("GROQ_API_KEY not set".to_string()))?;

        let mut builder = Self::builder().api_key(api_key);
        if let Ok(base) = std::env::var("GROQ_API_BASE") {
            builder = builder.api_base(base);
        }
        builder.build()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            return Err(AnalystError::Config("API key must not be empty".to_string()));
        }
        if self.profile.model.trim().is_empty() {
            return Err(AnalystError::Config("model must not be empty".to_string()));
        }
        if self.profile.max_tokens == 0 {
            return Err(AnalystError::Config(
                "max_tokens must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

fn primary_profile() -> LlmProfile {
    LlmProfile {
        model: PRIMARY_MODEL.to_string(),
        temperature: 0.1,
        max_tokens: 4096,
        response_format: None,
    }
}

fn json_profile() -> LlmProfile {
    LlmProfile {
        model: JSON_MODEL.to_string(),
        temperature: 0.2,
        max_tokens: 4000,
        response_format: Some(ResponseFormat::JsonObject),
    }
}

/// Builder for [`AppConfig`]
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    api_key: Option<String>,
    api_base: Option<String>,
    profile: Option<LlmProfile>,
    json_profile: Option<LlmProfile>,
}

impl AppConfigBuilder {
    /// Set the API key
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the API base URL
    pub fn api_base(mut self, base: impl Into<String>) -> Self {
        self.api_base = Some(base.into());
        self
    }

    /// Override the pipeline model profile
    pub fn profile(mut self, profile: LlmProfile) -> Self {
        self.profile = Some(profile);
        self
    }

    /// Override the alternate JSON profile
    pub fn json_profile(mut self, profile: LlmProfile) -> Self {
        self.json_profile = Some(profile);
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<AppConfig> {
        let config = AppConfig {
            api_key: self.api_key.unwrap_or_default(),
            api_base: self.api_base,
            profile: self.profile.unwrap_or_else(primary_profile),
            json_profile: self.json_profile.unwrap_or_else(json_profile),
        };

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profiles() {
        let config = AppConfig::builder().api_key("gsk_test").build().unwrap();

        assert_eq!(config.profile.model, "gemma2-9b-it");
        assert!((config.profile.temperature - 0.1).abs() < f32::EPSILON);
        assert!(config.profile.response_format.is_none());

        // The alternate profile is configured but stays unused
        assert_eq!(config.json_profile.model, "mixtral-8x7b-32768");
        assert_eq!(config.json_profile.max_tokens, 4000);
        assert_eq!(
            config.json_profile.response_format,
            Some(ResponseFormat::JsonObject)
        );
    }

    #[test]
    fn test_empty_api_key_rejected() {
        let err = AppConfig::builder().build().unwrap_err();
        assert!(matches!(err, AnalystError::Config(_)));

        let err = AppConfig::builder().api_key("   ").build().unwrap_err();
        assert!(matches!(err, AnalystError::Config(_)));
    }

    #[test]
    fn test_zero_max_tokens_rejected() {
        let profile = LlmProfile {
            max_tokens: 0,
            ..LlmProfile::default()
        };
        let err = AppConfig::builder()
            .api_key("gsk_test")
            .profile(profile)
            .build()
            .unwrap_err();
        assert!(matches!(err, AnalystError::Config(_)));
    }

    #[test]
    fn test_from_env() {
        unsafe {
            std::env::set_var("GROQ_API_KEY", "gsk_from_env");
            std::env::remove_var("GROQ_API_BASE");
        }

        let config = AppConfig::from_env().unwrap();
        assert_eq!(config.api_key, "gsk_from_env");
        assert!(config.api_base.is_none());

        unsafe {
            std::env::remove_var("GROQ_API_KEY");
        }
    }
}
