//! Ask Gemini a single question from the command line.
//!
//! ```sh
//! GEMINI_API_KEY=... cargo run --example ask -- "Explain how AI works"
//! ```

use dotenv::dotenv;
use gemini_ask::{AskOptions, Gemini, GeminiConfig};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("gemini_ask=debug")),
        )
        .init();

    let prompt = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "Explain how AI works in a few words".to_string());

    let gemini = Gemini::new(
        GeminiConfig::new(std::env::var("GEMINI_API_KEY").unwrap_or_default())
            .with_instruction("You are a concise, upbeat assistant."),
    )?;

    let answer = gemini
        .ask(&prompt, Some(AskOptions::new().temperature(0.4)))
        .await?;

    println!("{answer}");

    Ok(())
}
