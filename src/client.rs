use tracing::{debug, warn};

use crate::core::{
    AskOptions, Content, GeminiConfig, GeminiError, GenerateContentRequest, GenerativeClient,
    GenerativeModel, GenerativeSdk, ModelParams,
};
use crate::provider::{GeminiModel, GoogleAi, constants::gemini};

/// A Gemini model bound to one API key, model id and system instruction.
///
/// Construction either succeeds completely or returns an error; there is no
/// half-initialised client. `ask` takes `&self`, so a single client can serve
/// concurrent requests.
pub struct Gemini<M = GeminiModel> {
    model: M,
    model_name: String,
    instruction: Option<String>,
}

impl Gemini<GeminiModel> {
    /// Build a client backed by the Google Generative Language REST API.
    pub fn new(config: GeminiConfig) -> Result<Self, GeminiError> {
        Self::with_sdk(&GoogleAi::default(), config)
    }
}

impl<M: GenerativeModel> Gemini<M> {
    /// Build a client on top of any [`GenerativeSdk`].
    pub fn with_sdk<S>(sdk: &S, config: GeminiConfig) -> Result<Self, GeminiError>
    where
        S: GenerativeSdk,
        S::Client: GenerativeClient<Model = M>,
    {
        if config.api_key.is_empty() {
            return Err(GeminiError::missing_api_key());
        }

        let client = sdk
            .client(&config.api_key)
            .map_err(|e| GeminiError::Configuration(format!("Failed to create client: {e}")))?;

        let model_name = config
            .model
            .unwrap_or_else(|| gemini::DEFAULT_MODEL.to_string());

        let model = client.generative_model(ModelParams {
            model: model_name.clone(),
            system_instruction: config.instruction.clone(),
        });

        debug!(
            model = %model_name,
            has_instruction = config.instruction.is_some(),
            "Configured Gemini client"
        );

        Ok(Self {
            model,
            model_name,
            instruction: config.instruction,
        })
    }

    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    pub fn instruction(&self) -> Option<&str> {
        self.instruction.as_deref()
    }

    /// Send `prompt` as a single user turn and return the generated text.
    ///
    /// Unset options default to temperature 0.7 and 1024 output tokens. The
    /// prompt is forwarded as-is. Every failure, including a blocked response,
    /// is reported as [`GeminiError::Request`] and is never retried.
    #[tracing::instrument(
        name = "gemini_ask",
        skip(self, prompt, options),
        fields(model = %self.model_name, prompt_len = prompt.len()),
        err
    )]
    pub async fn ask(
        &self,
        prompt: &str,
        options: Option<AskOptions>,
    ) -> Result<String, GeminiError> {
        let request = GenerateContentRequest {
            contents: vec![Content::user(prompt)],
            generation_config: AskOptions::resolve(options),
        };

        let text = self
            .model
            .generate_content(request)
            .await
            .and_then(|response| response.text())
            .map_err(|e| {
                warn!(error = %e, "Gemini request failed");
                GeminiError::request(e)
            })?;

        debug!(response_len = text.len(), "Gemini request succeeded");
        Ok(text)
    }
}

impl<M> std::fmt::Debug for Gemini<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Gemini")
            .field("model_name", &self.model_name)
            .field("instruction", &self.instruction)
            .finish_non_exhaustive()
    }
}
