//! REST implementation of the SDK seam for the Google Generative Language API.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use tracing::debug;

use super::constants::gemini;
use crate::core::{
    Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, GenerativeClient,
    GenerativeModel, GenerativeSdk, HttpClient, HttpClientConfig, ModelParams, SdkError,
};

/// Entry point of the REST SDK. Holds endpoint and transport settings, no credentials.
#[derive(Debug, Clone)]
pub struct GoogleAi {
    base_url: String,
    api_version: String,
    http_config: HttpClientConfig,
}

impl Default for GoogleAi {
    fn default() -> Self {
        Self {
            base_url: gemini::API_BASE.to_string(),
            api_version: gemini::API_VERSION.to_string(),
            http_config: HttpClientConfig::default(),
        }
    }
}

impl GoogleAi {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = api_version.into();
        self
    }

    pub fn with_http_config(mut self, http_config: HttpClientConfig) -> Self {
        self.http_config = http_config;
        self
    }
}

impl GenerativeSdk for GoogleAi {
    type Client = GoogleAiClient;

    fn client(&self, api_key: &str) -> Result<Self::Client, SdkError> {
        let http = HttpClient::new(&self.http_config)?;

        Ok(GoogleAiClient {
            inner: Arc::new(ClientInner {
                api_key: api_key.to_string(),
                base_url: self.base_url.trim_end_matches('/').to_string(),
                api_version: self.api_version.clone(),
                http,
            }),
        })
    }
}

struct ClientInner {
    api_key: String,
    base_url: String,
    api_version: String,
    http: HttpClient,
}

/// An authenticated client. Model handles obtained from it share its connection pool.
#[derive(Clone)]
pub struct GoogleAiClient {
    inner: Arc<ClientInner>,
}

impl GenerativeClient for GoogleAiClient {
    type Model = GeminiModel;

    fn generative_model(&self, params: ModelParams) -> Self::Model {
        let model = if params.model.contains('/') {
            params.model
        } else {
            format!("models/{}", params.model)
        };

        GeminiModel {
            client: Arc::clone(&self.inner),
            model,
            system_instruction: params.system_instruction.map(Content::system),
        }
    }
}

/// A model handle bound to a model id and an optional system instruction.
#[derive(Clone)]
pub struct GeminiModel {
    client: Arc<ClientInner>,
    model: String,
    system_instruction: Option<Content>,
}

impl GeminiModel {
    /// Fully qualified model resource name, e.g. `models/gemini-2.5-flash`.
    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/{}/{}:{}",
            self.client.base_url,
            self.client.api_version,
            self.model,
            gemini::GENERATE_CONTENT_METHOD
        )
    }
}

impl std::fmt::Debug for GeminiModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiModel")
            .field("model", &self.model)
            .field("system_instruction", &self.system_instruction)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct WireRequest<'a> {
    contents: &'a [Content],
    generation_config: &'a GenerationConfig,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<&'a Content>,
}

#[async_trait]
impl GenerativeModel for GeminiModel {
    async fn generate_content(
        &self,
        request: GenerateContentRequest,
    ) -> Result<GenerateContentResponse, SdkError> {
        let url = self.endpoint();
        let body = WireRequest {
            contents: &request.contents,
            generation_config: &request.generation_config,
            system_instruction: self.system_instruction.as_ref(),
        };

        let headers = [(gemini::API_KEY_HEADER, self.client.api_key.as_str())];
        let response: GenerateContentResponse =
            self.client.http.post_json(&url, &headers, &body).await?;

        debug!(
            model = %self.model,
            candidates = response.candidates.len(),
            "Received generateContent response"
        );

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> GoogleAiClient {
        GoogleAi::default()
            .with_base_url("https://example.test/")
            .client("test-key")
            .unwrap()
    }

    #[test]
    fn bare_model_ids_get_models_prefix() {
        let model = client().generative_model(ModelParams {
            model: "gemini-2.5-flash".to_string(),
            system_instruction: None,
        });
        assert_eq!(model.model(), "models/gemini-2.5-flash");
        assert_eq!(
            model.endpoint(),
            "https://example.test/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }

    #[test]
    fn qualified_model_ids_are_kept() {
        let model = client().generative_model(ModelParams {
            model: "tunedModels/my-model".to_string(),
            system_instruction: Some("Be brief.".to_string()),
        });
        assert_eq!(model.model(), "tunedModels/my-model");
        assert_eq!(model.system_instruction, Some(Content::system("Be brief.")));
    }

    #[test]
    fn debug_output_hides_api_key() {
        let model = client().generative_model(ModelParams {
            model: "gemini-2.5-flash".to_string(),
            system_instruction: None,
        });
        assert!(!format!("{model:?}").contains("test-key"));
    }
}
