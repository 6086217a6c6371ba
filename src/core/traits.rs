//! The seam between [`Gemini`](crate::Gemini) and whatever actually talks to the model.
//!
//! The three levels mirror the vendor SDK: an SDK builds a client from an API key,
//! a client hands out model handles, and a model handle generates content.

use async_trait::async_trait;

use super::{
    error::SdkError,
    types::{GenerateContentRequest, GenerateContentResponse, ModelParams},
};

pub trait GenerativeSdk {
    type Client: GenerativeClient;

    /// Build a client authenticated with `api_key`. Must not perform network I/O.
    fn client(&self, api_key: &str) -> Result<Self::Client, SdkError>;
}

pub trait GenerativeClient {
    type Model: GenerativeModel;

    /// Bind a model id and optional system instruction into a reusable handle.
    fn generative_model(&self, params: ModelParams) -> Self::Model;
}

#[async_trait]
pub trait GenerativeModel: Send + Sync {
    async fn generate_content(
        &self,
        request: GenerateContentRequest,
    ) -> Result<GenerateContentResponse, SdkError>;
}
