//! Generation settings value object

use crate::core::error::DomainError;
use crate::core::model::Model;
use std::time::Duration;

/// Parameters every remote completion call is made with.
///
/// The defaults are the recipe bot's fixed settings; they are not exposed to
/// runtime configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationSettings {
    pub model: Model,
    pub temperature: f32,
    pub max_output_tokens: u32,
    pub request_timeout: Duration,
}

impl GenerationSettings {
    pub const DEFAULT_TEMPERATURE: f32 = 0.4;
    pub const DEFAULT_MAX_OUTPUT_TOKENS: u32 = 500;
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

    /// Check the values are ones the API accepts.
    pub fn validate(&self) -> Result<(), DomainError> {
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(DomainError::InvalidTemperature(self.temperature));
        }
        if self.max_output_tokens == 0 {
            return Err(DomainError::InvalidMaxOutputTokens);
        }
        if self.request_timeout.is_zero() {
            return Err(DomainError::InvalidTimeout);
        }
        Ok(())
    }
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            model: Model::default(),
            temperature: Self::DEFAULT_TEMPERATURE,
            max_output_tokens: Self::DEFAULT_MAX_OUTPUT_TOKENS,
            request_timeout: Self::DEFAULT_TIMEOUT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_recipe_bot() {
        let settings = GenerationSettings::default();
        assert_eq!(settings.model, Model::Gemini15Flash);
        assert_eq!(settings.temperature, 0.4);
        assert_eq!(settings.max_output_tokens, 500);
        assert_eq!(settings.request_timeout, Duration::from_secs(60));
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn validate_rejects_out_of_range_values() {
        let hot = GenerationSettings {
            temperature: 2.5,
            ..Default::default()
        };
        assert_eq!(hot.validate(), Err(DomainError::InvalidTemperature(2.5)));

        let mute = GenerationSettings {
            max_output_tokens: 0,
            ..Default::default()
        };
        assert_eq!(mute.validate(), Err(DomainError::InvalidMaxOutputTokens));

        let instant = GenerationSettings {
            request_timeout: Duration::ZERO,
            ..Default::default()
        };
        assert_eq!(instant.validate(), Err(DomainError::InvalidTimeout));
    }
}
