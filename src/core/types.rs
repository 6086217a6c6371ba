use serde::{Deserialize, Serialize};

use super::error::SdkError;
use crate::provider::constants::gemini;

/// Construction parameters for [`Gemini`](crate::Gemini).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GeminiConfig {
    /// Required. An empty key is rejected at construction.
    pub api_key: String,
    /// Model identifier (default: `gemini-2.5-flash`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    /// System instruction applied to every request made through the client
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instruction: Option<String>,
}

impl GeminiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Default::default()
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn with_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.instruction = Some(instruction.into());
        self
    }
}

/// Per-call generation options. Unset fields fall back to the defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AskOptions {
    /// Sampling temperature (default: 0.7)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    /// Output length cap (default: 1024)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<u32>,
}

impl AskOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn max_output_tokens(mut self, max_output_tokens: u32) -> Self {
        self.max_output_tokens = Some(max_output_tokens);
        self
    }

    pub(crate) fn resolve(options: Option<AskOptions>) -> GenerationConfig {
        let options = options.unwrap_or_default();
        GenerationConfig {
            temperature: options.temperature.unwrap_or(gemini::DEFAULT_TEMPERATURE),
            max_output_tokens: options
                .max_output_tokens
                .unwrap_or(gemini::DEFAULT_MAX_OUTPUT_TOKENS),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Model,
    System,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl Part {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

impl Content {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Some(Role::User),
            parts: vec![Part::text(text)],
        }
    }

    pub fn system(text: impl Into<String>) -> Self {
        Self {
            role: Some(Role::System),
            parts: vec![Part::text(text)],
        }
    }
}

/// Configuration for text generation parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub temperature: f32,
    pub max_output_tokens: u32,
}

/// A single-shot generation call as handed to a [`GenerativeModel`](crate::GenerativeModel).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    pub generation_config: GenerationConfig,
}

/// What a model handle is bound to when it is obtained.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelParams {
    pub model: String,
    pub system_instruction: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt_feedback: Option<PromptFeedback>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage_metadata: Option<UsageMetadata>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<Content>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finish_reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_reason: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageMetadata {
    pub prompt_token_count: Option<u32>,
    pub candidates_token_count: Option<u32>,
    pub total_token_count: Option<u32>,
}

impl GenerateContentResponse {
    /// Convenience constructor for a single successful candidate.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            candidates: vec![Candidate {
                content: Some(Content {
                    role: Some(Role::Model),
                    parts: vec![Part::text(text)],
                }),
                finish_reason: Some("STOP".to_string()),
                index: Some(0),
            }],
            ..Default::default()
        }
    }

    /// Concatenated text of the first candidate.
    ///
    /// Fails when the first candidate was stopped for a blocking reason, or when
    /// there are no candidates because the prompt itself was blocked.
    pub fn text(&self) -> Result<String, SdkError> {
        if self.candidates.len() > 1 {
            tracing::warn!(
                count = self.candidates.len(),
                "Response has multiple candidates, returning text from the first one"
            );
        }

        let Some(candidate) = self.candidates.first() else {
            return match self
                .prompt_feedback
                .as_ref()
                .and_then(|feedback| feedback.block_reason.as_deref())
            {
                Some(reason) => Err(SdkError::Blocked(format!(
                    "Response was blocked due to {reason}"
                ))),
                None => Ok(String::new()),
            };
        };

        if let Some(reason) = candidate
            .finish_reason
            .as_deref()
            .filter(|reason| gemini::BLOCKING_FINISH_REASONS.contains(reason))
        {
            return Err(SdkError::Blocked(format!(
                "Candidate was blocked due to {reason}"
            )));
        }

        Ok(candidate
            .content
            .iter()
            .flat_map(|content| &content.parts)
            .filter_map(|part| part.text.as_deref())
            .collect())
    }
}
