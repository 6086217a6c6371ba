pub(crate) mod constants;
pub mod gemini;

pub use gemini::{GeminiModel, GoogleAi, GoogleAiClient};
