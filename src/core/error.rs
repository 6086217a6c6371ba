use thiserror::Error;

/// Errors surfaced by [`Gemini`](crate::Gemini).
#[derive(Error, Debug)]
pub enum GeminiError {
    /// The client could not be constructed. Never returned from `ask`.
    #[error("{0}")]
    Configuration(String),

    /// An `ask` call failed. Transient and permanent causes are not told apart.
    #[error("Gemini request failed: {message}")]
    Request {
        message: String,
        #[source]
        source: Option<SdkError>,
    },
}

impl GeminiError {
    pub(crate) fn missing_api_key() -> Self {
        GeminiError::Configuration("Gemini API key is required".to_string())
    }

    /// Wrap an upstream failure, keeping its message (or `Unknown error` when it has none).
    pub(crate) fn request(source: SdkError) -> Self {
        let detail = source.to_string();
        let message = if detail.trim().is_empty() {
            "Unknown error".to_string()
        } else {
            detail
        };

        GeminiError::Request {
            message,
            source: Some(source),
        }
    }
}

/// Errors raised behind the SDK seam: transport, API status, decoding or blocked output.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    #[error("Error fetching from {url}: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Error fetching from {url}: [{status}] {message}")]
    Api {
        url: String,
        status: reqwest::StatusCode,
        message: String,
    },

    #[error("{message}: {source}")]
    Parse {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Text not available. {0}")]
    Blocked(String),

    /// Failures from substitute [`GenerativeModel`](crate::GenerativeModel) implementations.
    #[error(transparent)]
    Other(Box<dyn std::error::Error + Send + Sync>),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[derive(Debug)]
    struct Silent;

    impl std::fmt::Display for Silent {
        fn fmt(&self, _f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            Ok(())
        }
    }

    impl std::error::Error for Silent {}

    #[test]
    fn request_error_embeds_upstream_message() {
        let err = GeminiError::request(SdkError::Other("quota exceeded".into()));
        assert_eq!(err.to_string(), "Gemini request failed: quota exceeded");
        assert!(err.source().is_some());
    }

    #[test]
    fn request_error_falls_back_when_upstream_is_silent() {
        let err = GeminiError::request(SdkError::Other(Box::new(Silent)));
        assert_eq!(err.to_string(), "Gemini request failed: Unknown error");
    }

    #[test]
    fn api_error_reports_status_and_message() {
        let err = SdkError::Api {
            url: "https://example.test/v1beta/models/m:generateContent".to_string(),
            status: reqwest::StatusCode::TOO_MANY_REQUESTS,
            message: "quota exceeded".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Error fetching from https://example.test/v1beta/models/m:generateContent: \
             [429 Too Many Requests] quota exceeded"
        );
    }

    #[test]
    fn missing_api_key_message() {
        assert_eq!(
            GeminiError::missing_api_key().to_string(),
            "Gemini API key is required"
        );
    }
}
