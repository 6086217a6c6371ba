//! Shared HTTP client used by the REST provider.

use std::time::Duration;

use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, warn};

use super::error::SdkError;

/// Transport settings. There is no retry policy: every request gets exactly one attempt.
#[derive(Debug, Clone, Default)]
pub struct HttpClientConfig {
    /// Total time allowed for one request. `None` leaves requests unbounded.
    pub timeout: Option<Duration>,
    pub user_agent: Option<String>,
}

impl HttpClientConfig {
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }
}

#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::Client,
}

impl HttpClient {
    pub fn new(config: &HttpClientConfig) -> Result<Self, SdkError> {
        let default_ua = format!("gemini-ask/{}", env!("CARGO_PKG_VERSION"));
        let ua = config.user_agent.as_deref().unwrap_or(&default_ua);

        let mut builder = reqwest::Client::builder().user_agent(ua);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder.build().map_err(SdkError::ClientBuild)?;

        Ok(Self { client })
    }

    /// POST a JSON body and decode the JSON reply.
    ///
    /// Non-2xx replies become [`SdkError::Api`], carrying the `error.message`
    /// field of the body when the API sent one.
    #[tracing::instrument(
        name = "http_post_json",
        skip(self, headers, body),
        fields(url = %url),
        err
    )]
    pub async fn post_json<Req, Res>(
        &self,
        url: &str,
        headers: &[(&str, &str)],
        body: &Req,
    ) -> Result<Res, SdkError>
    where
        Req: Serialize + ?Sized,
        Res: DeserializeOwned,
    {
        let mut req_builder = self.client.post(url).json(body);
        for (name, value) in headers {
            req_builder = req_builder.header(*name, *value);
        }

        let res = req_builder.send().await.map_err(|e| SdkError::Network {
            url: url.to_string(),
            source: e,
        })?;

        let status = res.status();
        let response_text = res.text().await.map_err(|e| SdkError::Network {
            url: url.to_string(),
            source: e,
        })?;

        if !status.is_success() {
            warn!(status = %status, "API returned error status");
            return Err(SdkError::Api {
                url: url.to_string(),
                status,
                message: api_error_message(&response_text),
            });
        }

        debug!(status = %status, "HTTP request successful");

        serde_json::from_str(&response_text).map_err(|e| SdkError::Parse {
            message: "Failed to parse API response".to_string(),
            source: e,
        })
    }
}

/// Pull `error.message` out of a Google API error body, falling back to the raw text.
fn api_error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            value
                .get("error")?
                .get("message")?
                .as_str()
                .map(str::to_string)
        })
        .unwrap_or_else(|| body.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_message_prefers_structured_body() {
        let body = r#"{"error":{"code":429,"message":"quota exceeded","status":"RESOURCE_EXHAUSTED"}}"#;
        assert_eq!(api_error_message(body), "quota exceeded");
    }

    #[test]
    fn error_message_falls_back_to_raw_body() {
        assert_eq!(api_error_message("  upstream unavailable\n"), "upstream unavailable");
    }
}
