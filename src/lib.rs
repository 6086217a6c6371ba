//! # gemini-ask
//!
//! Ask a Google Gemini model a question and get text back.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use gemini_ask::{AskOptions, Gemini, GeminiConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let gemini = Gemini::new(
//!         GeminiConfig::new(std::env::var("GEMINI_API_KEY")?)
//!             .with_instruction("Answer in one sentence."),
//!     )?;
//!
//!     let answer = gemini
//!         .ask(
//!             "Why is the sky blue?",
//!             Some(AskOptions::new().temperature(0.2).max_output_tokens(100)),
//!         )
//!         .await?;
//!
//!     println!("{answer}");
//!     Ok(())
//! }
//! ```
//!
//! The library never reads environment variables and never retries. Use
//! [`Gemini::with_sdk`] to run the client against another implementation of
//! the [`GenerativeSdk`] seam, e.g. a scripted one in tests.

mod client;
pub mod core;
pub mod provider;

pub use client::Gemini;
pub use crate::core::{
    AskOptions, GeminiConfig, GeminiError, GenerateContentRequest, GenerateContentResponse,
    GenerativeClient, GenerativeModel, GenerativeSdk, HttpClientConfig, ModelParams, SdkError,
};
pub use provider::{GeminiModel, GoogleAi, GoogleAiClient};
