pub mod error;
pub mod http;
pub mod traits;
pub mod types;

pub use error::{GeminiError, SdkError};
pub use http::{HttpClient, HttpClientConfig};
pub use traits::{GenerativeClient, GenerativeModel, GenerativeSdk};
pub use types::{
    AskOptions, Candidate, Content, GeminiConfig, GenerateContentRequest,
    GenerateContentResponse, GenerationConfig, ModelParams, Part, PromptFeedback, Role,
    UsageMetadata,
};
